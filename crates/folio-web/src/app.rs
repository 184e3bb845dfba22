use crate::route::HashRoute;
use folio_core::{GalleryContent, LoadingTracker, Stage, StageConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedApp = Rc<RefCell<App>>;

/// Everything the browser callbacks share: the stage, its loading tracker
/// and the clock that stamps events.
pub struct App {
    pub stage: Stage<HashRoute>,
    pub loading: LoadingTracker,
    origin: Instant,
}

impl App {
    pub fn new(config: StageConfig) -> Self {
        Self {
            stage: Stage::new(config, HashRoute),
            loading: LoadingTracker::new(0.0),
            origin: Instant::now(),
        }
    }

    pub fn shared(config: StageConfig) -> SharedApp {
        Rc::new(RefCell::new(Self::new(config)))
    }

    /// Seconds since the stage was mounted.
    #[inline]
    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    pub fn set_content(&mut self, content: &GalleryContent) {
        let now = self.now();
        log::info!(
            "[app] content: {} items, logo {}",
            content.items.len(),
            content.logo_url.is_some()
        );
        self.stage.set_content(content, now);
    }
}
