use crate::model::GestureReport;
use yew::Callback;

/// Optional listeners for one detector. Unset listeners are skipped.
#[derive(Clone, Default, PartialEq)]
pub struct GestureHandlers {
    pub on_start: Option<Callback<GestureReport>>,
    pub on_move: Option<Callback<GestureReport>>,
    pub on_end: Option<Callback<GestureReport>>,
    pub on_swipe: Option<Callback<GestureReport>>,
    pub on_scroll: Option<Callback<GestureReport>>,
}

fn emit(cb: &Option<Callback<GestureReport>>, report: &GestureReport) {
    if let Some(cb) = cb {
        cb.emit(*report);
    }
}

impl GestureHandlers {
    pub fn emit_start(&self, report: &GestureReport) {
        emit(&self.on_start, report);
    }

    pub fn emit_move(&self, report: &GestureReport) {
        emit(&self.on_move, report);
    }

    /// Swipe and scroll may both fire for one release; end always fires last.
    pub fn emit_release(&self, report: &GestureReport) {
        if report.is_swipe {
            emit(&self.on_swipe, report);
        }
        if report.is_vertical_gesture {
            emit(&self.on_scroll, report);
        }
        emit(&self.on_end, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gesture;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Callback<GestureReport> {
        let log = log.clone();
        Callback::from(move |_| log.borrow_mut().push(name))
    }

    fn all(log: &Rc<RefCell<Vec<&'static str>>>) -> GestureHandlers {
        GestureHandlers {
            on_start: Some(recorder(log, "start")),
            on_move: Some(recorder(log, "move")),
            on_end: Some(recorder(log, "end")),
            on_swipe: Some(recorder(log, "swipe")),
            on_scroll: Some(recorder(log, "scroll")),
        }
    }

    #[test]
    fn release_fires_swipe_then_scroll_then_end() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let h = all(&log);
        let report = GestureReport {
            gesture: Gesture::SwipeDown,
            is_swipe: true,
            is_vertical_gesture: true,
            ..Default::default()
        };
        h.emit_release(&report);
        assert_eq!(*log.borrow(), vec!["swipe", "scroll", "end"]);
    }

    #[test]
    fn slow_vertical_release_scrolls_without_swipe() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let h = all(&log);
        let report = GestureReport {
            gesture: Gesture::MoveDown,
            is_vertical_gesture: true,
            ..Default::default()
        };
        h.emit_release(&report);
        assert_eq!(*log.borrow(), vec!["scroll", "end"]);
    }

    #[test]
    fn horizontal_swipe_skips_scroll() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let h = all(&log);
        let report = GestureReport {
            gesture: Gesture::SwipeLeft,
            is_swipe: true,
            is_horizontal_gesture: true,
            ..Default::default()
        };
        h.emit_release(&report);
        assert_eq!(*log.borrow(), vec!["swipe", "end"]);
    }

    #[test]
    fn missing_handlers_are_no_ops() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let h = GestureHandlers {
            on_end: Some(recorder(&log, "end")),
            ..Default::default()
        };
        let report = GestureReport {
            is_swipe: true,
            is_vertical_gesture: true,
            ..Default::default()
        };
        h.emit_start(&report);
        h.emit_move(&report);
        h.emit_release(&report);
        assert_eq!(*log.borrow(), vec!["end"]);

        GestureHandlers::default().emit_release(&report);
    }

    #[test]
    fn start_and_move_route_to_their_own_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let h = all(&log);
        let report = GestureReport::default();
        h.emit_start(&report);
        h.emit_move(&report);
        h.emit_move(&report);
        assert_eq!(*log.borrow(), vec!["start", "move", "move"]);
    }
}
