//! Core logic for the folio stage: a semicircular gallery of framed images
//! and the camera choreography that zooms between the overview and a single
//! frame. Free of web APIs so everything here runs under `cargo test`.

pub mod ambience;
pub mod camera;
pub mod choreo;
pub mod config;
pub mod constants;
pub mod content;
pub mod easing;
pub mod error;
pub mod gallery;
pub mod item;
pub mod layout;
pub mod loading;
pub mod orient;
pub mod pick;
pub mod rig;
pub mod route;
pub mod scene;
pub mod stage;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::CameraState;
pub use choreo::{Choreographer, Effect, Effects, FocusTarget, InteractionState};
pub use config::StageConfig;
pub use content::{GalleryContent, RawItem};
pub use error::{FolioError, Result};
pub use gallery::{FrameVisual, Gallery};
pub use item::{GalleryItem, ItemId};
pub use layout::LayoutSlot;
pub use loading::{AssetCounts, AssetKind, LoadingEvent, LoadingTracker};
pub use rig::{IdleRig, PointerRig};
pub use route::{MemoryRoute, RouteSignal};
pub use scene::Instance;
pub use stage::Stage;
