pub mod ambient;
pub mod camera;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod feedback;
pub mod layout;
pub mod motion;
pub mod orientation;
pub mod picking;
pub mod scene;
pub mod texture;
pub mod tween;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::{Camera, CameraRig, ControlParams};
pub use catalog::{default_catalog, ExternalContent, ItemMeta};
pub use clock::SceneClock;
pub use config::{DecorationStyle, SceneConfig};
pub use constants::*;
pub use error::SceneError;
pub use feedback::{Cursor, FeedbackAnimator, FeedbackStyle};
pub use layout::{layout, LayoutStrategy};
pub use motion::{drift_target, offset_y, DriftParams, MotionParams};
pub use orientation::OrientationMode;
pub use picking::{pick, pointer_ndc, HoverEvent, ItemId, PickCandidate};
pub use scene::{Activation, FrameReport, Item, Scene};
pub use texture::{TextureProvider, TextureState};
