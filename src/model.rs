//! Value types shared by the tracker, the component and the demo app.
//! Field names serialise to the camelCase shape callers of the JS widget expect.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalDirection {
    Up,
    Down,
}

impl HorizontalDirection {
    /// Strictly positive delta is right; zero falls on the left branch.
    pub fn from_delta(dx: f64) -> Self {
        if dx > 0.0 { Self::Right } else { Self::Left }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl VerticalDirection {
    pub fn from_delta(dy: f64) -> Self {
        if dy > 0.0 { Self::Down } else { Self::Up }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Per-axis direction. `None` on an axis is the empty direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragDirection {
    pub x: Option<HorizontalDirection>,
    pub y: Option<VerticalDirection>,
}

impl DragDirection {
    pub fn from_delta(dx: f64, dy: f64) -> Self {
        Self {
            x: Some(HorizontalDirection::from_delta(dx)),
            y: Some(VerticalDirection::from_delta(dy)),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    #[serde(rename = "swipe_left")]
    SwipeLeft,
    #[serde(rename = "swipe_right")]
    SwipeRight,
    #[serde(rename = "swipe_up")]
    SwipeUp,
    #[serde(rename = "swipe_down")]
    SwipeDown,
    #[serde(rename = "move_left")]
    MoveLeft,
    #[serde(rename = "move_right")]
    MoveRight,
    #[serde(rename = "move_up")]
    MoveUp,
    #[serde(rename = "move_down")]
    MoveDown,
    /// Horizontal and vertical displacement are exactly equal.
    #[serde(rename = "unknown")]
    Unknown,
    /// Start report, or an angle in a dead zone of the chosen axis.
    #[default]
    #[serde(rename = "")]
    Empty,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SwipeLeft => "swipe_left",
            Self::SwipeRight => "swipe_right",
            Self::SwipeUp => "swipe_up",
            Self::SwipeDown => "swipe_down",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::Unknown => "unknown",
            Self::Empty => "",
        }
    }

    pub fn is_swipe_label(&self) -> bool {
        matches!(
            self,
            Self::SwipeLeft | Self::SwipeRight | Self::SwipeUp | Self::SwipeDown
        )
    }

    pub fn is_move_label(&self) -> bool {
        matches!(
            self,
            Self::MoveLeft | Self::MoveRight | Self::MoveUp | Self::MoveDown
        )
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(
            self,
            Self::SwipeLeft | Self::SwipeRight | Self::MoveLeft | Self::MoveRight
        )
    }

    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            Self::SwipeUp | Self::SwipeDown | Self::MoveUp | Self::MoveDown
        )
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot handed to every callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureReport {
    /// Current position minus start position.
    pub drag_distance: Point,
    /// Direction of the last sample-to-sample delta.
    pub drag_direction: DragDirection,
    /// Direction of the first delta after the press, frozen for the interaction.
    pub init_drag_direction: DragDirection,
    pub drag_start_position: Point,
    pub gesture: Gesture,
    pub is_horizontal_gesture: bool,
    pub is_vertical_gesture: bool,
    pub is_swipe: bool,
}

impl GestureReport {
    pub fn start(position: Point) -> Self {
        Self {
            drag_start_position: position,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_falls_on_left_and_up() {
        let d = DragDirection::from_delta(0.0, 0.0);
        assert_eq!(d.x, Some(HorizontalDirection::Left));
        assert_eq!(d.y, Some(VerticalDirection::Up));
        assert!(!d.is_unset());
        assert!(DragDirection::default().is_unset());
    }

    #[test]
    fn positive_delta_is_right_and_down() {
        let d = DragDirection::from_delta(0.5, 3.0);
        assert_eq!(d.x, Some(HorizontalDirection::Right));
        assert_eq!(d.y, Some(VerticalDirection::Down));
    }

    #[test]
    fn gesture_labels_match_serde_names() {
        let all = [
            Gesture::SwipeLeft,
            Gesture::SwipeRight,
            Gesture::SwipeUp,
            Gesture::SwipeDown,
            Gesture::MoveLeft,
            Gesture::MoveRight,
            Gesture::MoveUp,
            Gesture::MoveDown,
            Gesture::Unknown,
            Gesture::Empty,
        ];
        for g in all {
            let json = serde_json::to_string(&g).unwrap();
            assert_eq!(json, format!("\"{}\"", g.as_str()));
        }
        assert_eq!(Gesture::Empty.to_string(), "");
        assert!(Gesture::SwipeUp.is_swipe_label() && Gesture::SwipeUp.is_vertical());
        assert!(Gesture::MoveLeft.is_move_label() && Gesture::MoveLeft.is_horizontal());
        assert!(!Gesture::Unknown.is_horizontal() && !Gesture::Unknown.is_vertical());
    }

    #[test]
    fn start_report_is_empty() {
        let r = GestureReport::start(Point::new(12.0, 34.0));
        assert_eq!(r.drag_distance, Point::default());
        assert_eq!(r.drag_start_position, Point::new(12.0, 34.0));
        assert!(r.drag_direction.is_unset());
        assert!(r.init_drag_direction.is_unset());
        assert_eq!(r.gesture, Gesture::Empty);
        assert!(!r.is_swipe && !r.is_horizontal_gesture && !r.is_vertical_gesture);
    }

    #[test]
    fn report_serialises_with_camel_case_fields() {
        let r = GestureReport {
            drag_distance: Point::new(50.0, 0.0),
            drag_direction: DragDirection::from_delta(1.0, 0.0),
            init_drag_direction: DragDirection::from_delta(1.0, 0.0),
            drag_start_position: Point::new(0.0, 100.0),
            gesture: Gesture::SwipeRight,
            is_horizontal_gesture: true,
            is_vertical_gesture: false,
            is_swipe: true,
        };
        let v: serde_json::Value = serde_json::to_value(r).unwrap();
        assert_eq!(v["gesture"], "swipe_right");
        assert_eq!(v["dragDistance"]["x"], 50.0);
        assert_eq!(v["dragDirection"]["x"], "right");
        assert_eq!(v["dragDirection"]["y"], "up");
        assert_eq!(v["initDragDirection"]["x"], "right");
        assert_eq!(v["dragStartPosition"]["y"], 100.0);
        assert_eq!(v["isHorizontalGesture"], true);
        assert_eq!(v["isSwipe"], true);

        let back: GestureReport = serde_json::from_value(v).unwrap();
        assert_eq!(back, r);
    }
}
