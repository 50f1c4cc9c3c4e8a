//! Single-touch gesture classification.
//!
//! The tracker is fed one press, any number of moves and one release per
//! interaction. Every sample after the press is classified against the press
//! position; the velocity used for the swipe decision is a horizontal-only
//! estimate between consecutive samples.

use crate::config::{SwipeConfig, VelocitySampling};
use crate::model::{DragDirection, Gesture, GestureReport, Point};

/// Mutable state for one press-to-release cycle. Replaced wholesale on press.
#[derive(Debug, Clone, Default)]
struct InteractionState {
    start_position: Point,
    last_sample_position: Point,
    last_velocity_sample_x: f64,
    last_sample_time_ms: f64,
    previous_velocity_x: f64,
    init_drag_direction: DragDirection,
}

impl InteractionState {
    fn pressed_at(position: Point, now_ms: f64) -> Self {
        Self {
            start_position: position,
            last_sample_position: position,
            last_velocity_sample_x: position.x,
            last_sample_time_ms: now_ms,
            previous_velocity_x: 0.0,
            init_drag_direction: DragDirection::default(),
        }
    }

    /// Horizontal speed since the previous sample; moves the anchor to this one.
    fn update_velocity(&mut self, x: f64, now_ms: f64, idle_reset_ms: f64) -> f64 {
        let dt = now_ms - self.last_sample_time_ms;
        let dx = x - self.last_velocity_sample_x;
        let mut velocity_x = if dt == 0.0 { 0.0 } else { (dx / dt).abs() };
        if dt > idle_reset_ms {
            // finger rested too long
            velocity_x = 0.0;
        }
        self.previous_velocity_x = velocity_x;
        self.last_velocity_sample_x = x;
        self.last_sample_time_ms = now_ms;
        velocity_x
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: SwipeConfig,
    state: InteractionState,
}

impl GestureTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    pub fn press(&mut self, position: Point, now_ms: f64) -> GestureReport {
        self.state = InteractionState::pressed_at(position, now_ms);
        GestureReport::start(position)
    }

    pub fn move_to(&mut self, position: Point, now_ms: f64) -> GestureReport {
        let report = self.classify(position, now_ms);
        log::trace!(
            "move ({:.1},{:.1}) -> {:?}",
            position.x,
            position.y,
            report.gesture
        );
        report
    }

    pub fn release(&mut self, position: Point, now_ms: f64) -> GestureReport {
        let report = self.classify(position, now_ms);
        log::debug!(
            "release {} dist=({:.1},{:.1}) swipe={} v={:.3}",
            report.gesture,
            report.drag_distance.x,
            report.drag_distance.y,
            report.is_swipe,
            self.state.previous_velocity_x
        );
        report
    }

    fn classify(&mut self, position: Point, now_ms: f64) -> GestureReport {
        let start = self.state.start_position;
        let x_diff = start.x - position.x;
        let y_diff = start.y - position.y;
        let drag_distance = Point::new(position.x - start.x, position.y - start.y);
        let angle = y_diff.atan2(x_diff).to_degrees();

        let is_horizontal_gesture = x_diff.abs() > y_diff.abs();
        let is_vertical_gesture = y_diff.abs() > x_diff.abs();

        // a pause before this sample discards the velocity measured before it
        let idle = now_ms - self.state.last_sample_time_ms > self.config.idle_reset_ms;
        let lagged_velocity = if idle { 0.0 } else { self.state.previous_velocity_x };
        let current_velocity =
            self.state
                .update_velocity(position.x, now_ms, self.config.idle_reset_ms);
        let velocity = match self.config.velocity_sampling {
            VelocitySampling::PreviousSample => lagged_velocity,
            VelocitySampling::CurrentSample => current_velocity,
        };
        let is_swipe = velocity > self.config.velocity_threshold;

        let gesture = bucket_gesture(angle, is_horizontal_gesture, is_vertical_gesture, is_swipe);

        let last = self.state.last_sample_position;
        let drag_direction = DragDirection::from_delta(position.x - last.x, position.y - last.y);
        if self.state.init_drag_direction.is_unset() {
            self.state.init_drag_direction = drag_direction;
        }
        self.state.last_sample_position = position;

        GestureReport {
            drag_distance,
            drag_direction,
            init_drag_direction: self.state.init_drag_direction,
            drag_start_position: start,
            gesture,
            is_horizontal_gesture,
            is_vertical_gesture,
            is_swipe,
        }
    }
}

/// Maps an angle (degrees, start minus current) to a label within the dominant axis.
/// Buckets are half-open; angles outside the axis' buckets yield `Gesture::Empty`.
pub fn bucket_gesture(angle: f64, horizontal: bool, vertical: bool, swipe: bool) -> Gesture {
    let pick = |s: Gesture, m: Gesture| if swipe { s } else { m };
    if horizontal {
        if angle > -45.0 && angle <= 45.0 {
            pick(Gesture::SwipeLeft, Gesture::MoveLeft)
        } else if angle > 135.0 || angle <= -135.0 {
            pick(Gesture::SwipeRight, Gesture::MoveRight)
        } else {
            Gesture::Empty
        }
    } else if vertical {
        if angle > 45.0 && angle <= 135.0 {
            pick(Gesture::SwipeUp, Gesture::MoveUp)
        } else if angle > -135.0 && angle <= -45.0 {
            pick(Gesture::SwipeDown, Gesture::MoveDown)
        } else {
            Gesture::Empty
        }
    } else {
        Gesture::Unknown
    }
}
