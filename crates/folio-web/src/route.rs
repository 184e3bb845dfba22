use folio_core::route::{item_route, parse_item_route, RouteSignal};
use web_sys as web;

/// Route signal stored in `location.hash` as `#/item/<id>`.
#[derive(Clone, Debug, Default)]
pub struct HashRoute;

impl RouteSignal for HashRoute {
    fn get(&self) -> Option<String> {
        let hash = web::window()?.location().hash().ok()?;
        parse_item_route(&hash).map(str::to_owned)
    }

    fn set(&self, item: Option<&str>) {
        let Some(window) = web::window() else {
            return;
        };
        let hash = item.map(item_route).unwrap_or_default();
        if let Err(e) = window.location().set_hash(&hash) {
            log::warn!("[route] set_hash failed: {:?}", e);
        }
    }
}
