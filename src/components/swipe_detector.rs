use crate::config::SwipeConfig;
use crate::model::{GestureReport, Point};
use crate::state::{GestureHandlers, GestureTracker};
use web_sys::{TouchEvent, TouchList};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeDetectorProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_start: Option<Callback<GestureReport>>,
    #[prop_or_default]
    pub on_move: Option<Callback<GestureReport>>,
    #[prop_or_default]
    pub on_end: Option<Callback<GestureReport>>,
    /// Fires on release when the swipe velocity was exceeded.
    #[prop_or_default]
    pub on_swipe: Option<Callback<GestureReport>>,
    /// Fires on release when vertical displacement dominates.
    #[prop_or_default]
    pub on_scroll: Option<Callback<GestureReport>>,
    #[prop_or_default]
    pub stop_propagation: bool,
    #[prop_or_default]
    pub config: SwipeConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

fn first_touch(list: &TouchList) -> Option<Point> {
    list.item(0)
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// Wraps its children and classifies the first touch of each interaction.
#[function_component]
pub fn SwipeDetector(props: &SwipeDetectorProps) -> Html {
    let tracker = use_mut_ref(|| GestureTracker::new(props.config));

    // Keep the live tracker in sync with prop changes
    {
        let tracker = tracker.clone();
        use_effect_with(props.config, move |cfg| {
            tracker.borrow_mut().set_config(*cfg);
            || ()
        });
    }

    let handlers = GestureHandlers {
        on_start: props.on_start.clone(),
        on_move: props.on_move.clone(),
        on_end: props.on_end.clone(),
        on_swipe: props.on_swipe.clone(),
        on_scroll: props.on_scroll.clone(),
    };
    let stop = props.stop_propagation;

    let touch_start_cb = {
        let tracker = tracker.clone();
        let handlers = handlers.clone();
        Callback::from(move |e: TouchEvent| {
            if stop {
                e.stop_propagation();
            }
            let Some(pos) = first_touch(&e.touches()) else {
                log::debug!("touchstart without touches");
                return;
            };
            let report = tracker.borrow_mut().press(pos, js_sys::Date::now());
            handlers.emit_start(&report);
        })
    };
    let touch_move_cb = {
        let tracker = tracker.clone();
        let handlers = handlers.clone();
        Callback::from(move |e: TouchEvent| {
            if stop {
                e.stop_propagation();
            }
            let Some(pos) = first_touch(&e.touches()) else {
                return;
            };
            let report = tracker.borrow_mut().move_to(pos, js_sys::Date::now());
            handlers.emit_move(&report);
        })
    };
    let touch_end_cb = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if stop {
                e.stop_propagation();
            }
            // the lifted finger is only listed in changedTouches
            let Some(pos) = first_touch(&e.changed_touches()) else {
                log::debug!("touchend without changed touches");
                return;
            };
            let report = tracker.borrow_mut().release(pos, js_sys::Date::now());
            handlers.emit_release(&report);
        })
    };

    html! {
        <div
            class={props.class.clone()}
            style={props.style.clone()}
            ontouchstart={touch_start_cb}
            ontouchmove={touch_move_cb}
            ontouchend={touch_end_cb}
        >
            { for props.children.iter() }
        </div>
    }
}
