use crate::model::GestureReport;
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

pub const HISTORY_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Started,
    Moving,
    Ended,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Started => "start",
            Phase::Moving => "move",
            Phase::Ended => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HistoryAction {
    Start(GestureReport),
    Move(GestureReport),
    End(GestureReport),
    Swipe,
    Scroll,
    Clear,
}

/// What the demo shows: the live report plus finished interactions, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureHistory {
    pub phase: Phase,
    pub current: Option<GestureReport>,
    pub finished: VecDeque<GestureReport>,
    pub move_samples: u32,
    pub swipes: u32,
    pub scrolls: u32,
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            current: None,
            finished: VecDeque::with_capacity(HISTORY_LEN),
            move_samples: 0,
            swipes: 0,
            scrolls: 0,
        }
    }
}

impl Reducible for GestureHistory {
    type Action = HistoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            HistoryAction::Start(r) => {
                next.phase = Phase::Started;
                next.current = Some(r);
                next.move_samples = 0;
            }
            HistoryAction::Move(r) => {
                next.phase = Phase::Moving;
                next.current = Some(r);
                next.move_samples += 1;
            }
            HistoryAction::End(r) => {
                next.phase = Phase::Ended;
                next.current = Some(r);
                next.finished.push_front(r);
                next.finished.truncate(HISTORY_LEN);
            }
            HistoryAction::Swipe => next.swipes += 1,
            HistoryAction::Scroll => next.scrolls += 1,
            HistoryAction::Clear => next = GestureHistory::default(),
        }
        Rc::new(next)
    }
}
