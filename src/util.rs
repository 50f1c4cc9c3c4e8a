// Display helpers

use crate::model::{DragDirection, Point};

pub fn format_point(p: Point) -> String {
    format!("({:.0}, {:.0})", p.x, p.y)
}

pub fn format_direction(d: DragDirection) -> String {
    let x = d.x.map(|h| h.as_str()).unwrap_or("-");
    let y = d.y.map(|v| v.as_str()).unwrap_or("-");
    format!("{x} / {y}")
}
