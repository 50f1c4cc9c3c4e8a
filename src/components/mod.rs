pub mod app;
pub mod gesture_panel;
pub mod settings_modal;
pub mod swipe_detector;

pub use app::App;
pub use swipe_detector::{SwipeDetector, SwipeDetectorProps};
