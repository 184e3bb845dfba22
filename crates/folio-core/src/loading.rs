//! Asset loading progress with per-instance counters.
//!
//! Each stage mount owns its own tracker, so repeated mounts never share
//! totals.

use crate::constants::LOADING_IDLE_COMPLETE_SECS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Image,
    Model,
    Svg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssetCounts {
    pub textures: u32,
    pub images: u32,
    pub models: u32,
    pub svgs: u32,
    pub total: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadingEvent {
    Started,
    Progress { percent: f32, counts: AssetCounts },
    Complete,
}

#[derive(Clone, Debug)]
pub struct LoadingTracker {
    counts: AssetCounts,
    settled: u32,
    created_at: f64,
    complete: bool,
    events: Vec<LoadingEvent>,
}

impl LoadingTracker {
    pub fn new(now: f64) -> Self {
        Self {
            counts: AssetCounts::default(),
            settled: 0,
            created_at: now,
            complete: false,
            events: Vec::new(),
        }
    }

    pub fn counts(&self) -> AssetCounts {
        self.counts
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Percentage of registered assets that have settled.
    pub fn progress(&self) -> f32 {
        if self.counts.total == 0 {
            0.0
        } else {
            self.settled as f32 / self.counts.total as f32 * 100.0
        }
    }

    pub fn register(&mut self, kind: AssetKind) {
        if self.counts.total == 0 {
            self.events.push(LoadingEvent::Started);
        }
        match kind {
            AssetKind::Texture => self.counts.textures += 1,
            AssetKind::Image => self.counts.images += 1,
            AssetKind::Model => self.counts.models += 1,
            AssetKind::Svg => self.counts.svgs += 1,
        }
        self.counts.total += 1;
        self.complete = false;
    }

    /// One registered asset finished, successfully or not.
    pub fn settle(&mut self, ok: bool) {
        if self.settled >= self.counts.total {
            log::warn!("[loading] settle without a matching register");
            return;
        }
        if !ok {
            log::warn!("[loading] asset failed, counting it as settled");
        }
        self.settled += 1;
        self.events.push(LoadingEvent::Progress {
            percent: self.progress(),
            counts: self.counts,
        });
        if self.settled == self.counts.total {
            self.finish();
        }
    }

    /// Completes an empty scene once the idle window has passed.
    pub fn poll(&mut self, now: f64) {
        if !self.complete
            && self.counts.total == 0
            && now - self.created_at >= LOADING_IDLE_COMPLETE_SECS
        {
            self.finish();
        }
    }

    pub fn take_events(&mut self) -> Vec<LoadingEvent> {
        std::mem::take(&mut self.events)
    }

    fn finish(&mut self) {
        if self.complete {
            return;
        }
        self.complete = true;
        log::info!("[loading] complete: {:?}", self.counts);
        self.events.push(LoadingEvent::Complete);
    }
}
