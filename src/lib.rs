//! Touch swipe detection for yew apps.
//!
//! `<SwipeDetector>` wraps arbitrary children and reports each touch
//! interaction as a [`GestureReport`] through optional callbacks. The
//! classification itself lives in [`GestureTracker`] and has no browser
//! dependency.

pub mod components;
pub mod config;
pub mod model;
pub mod state;
pub mod util;

pub use components::{SwipeDetector, SwipeDetectorProps};
pub use config::{SwipeConfig, VelocitySampling};
pub use model::{DragDirection, Gesture, GestureReport, HorizontalDirection, Point, VerticalDirection};
pub use state::{GestureHandlers, GestureTracker};
