pub mod handlers;
pub mod history;
pub mod tracker;

pub use handlers::GestureHandlers;
pub use history::{GestureHistory, HistoryAction, Phase};
pub use tracker::GestureTracker;
