//! The "currently selected item" route, abstracted away from any router.

use std::cell::RefCell;
use std::rc::Rc;

const ITEM_PREFIX: &str = "/item/";
const WORKS_PREFIX: &str = "/works/";

/// Observable string value naming the selected item.
///
/// The gallery reads it to react to external navigation and writes it when
/// the user clicks a frame.
pub trait RouteSignal {
    fn get(&self) -> Option<String>;
    fn set(&self, item: Option<&str>);
}

/// In-memory route shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoute {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryRoute {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RouteSignal for MemoryRoute {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, item: Option<&str>) {
        *self.value.borrow_mut() = item.map(str::to_owned);
    }
}

/// Item id from a route path such as `/item/<id>`; a leading `#` is accepted.
pub fn parse_item_route(path: &str) -> Option<&str> {
    let path = path.strip_prefix('#').unwrap_or(path);
    let id = path.strip_prefix(ITEM_PREFIX)?.trim_end_matches('/');
    (!id.is_empty()).then_some(id)
}

/// Route path for an item id.
pub fn item_route(id: &str) -> String {
    format!("{ITEM_PREFIX}{id}")
}

/// Project slug from a page path such as `/works/<slug>`.
pub fn works_slug(pathname: &str) -> Option<&str> {
    let slug = pathname.strip_prefix(WORKS_PREFIX)?;
    (!slug.is_empty()).then_some(slug)
}
