use crate::model::GestureReport;
use crate::state::{GestureHistory, Phase};
use crate::util::{format_direction, format_point};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GesturePanelProps {
    pub history: GestureHistory,
}

fn flag(on: bool) -> &'static str {
    if on { "yes" } else { "no" }
}

fn gesture_color(report: &GestureReport) -> &'static str {
    if report.gesture.is_swipe_label() {
        "#3fb950"
    } else if report.gesture.is_move_label() {
        "#58a6ff"
    } else {
        "#8b949e"
    }
}

#[function_component]
pub fn GesturePanel(props: &GesturePanelProps) -> Html {
    let h = &props.history;
    let row_style = "display:flex; justify-content:space-between; gap:12px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";

    let current = match (&h.current, h.phase) {
        (None, _) | (_, Phase::Idle) => html! { <div style="opacity:0.7;">{"Touch the area to start"}</div> },
        (Some(r), phase) => {
            let label = if r.gesture.as_str().is_empty() { "-" } else { r.gesture.as_str() };
            html! {<>
                <div style={row_style}><span>{"Phase"}</span><span style={value_style}>{ phase.label() }</span></div>
                <div style={row_style}><span>{"Gesture"}</span><span style={format!("{} color:{};", value_style, gesture_color(r))}>{ label }</span></div>
                <div style={row_style}><span>{"Start"}</span><span style={value_style}>{ format_point(r.drag_start_position) }</span></div>
                <div style={row_style}><span>{"Distance"}</span><span style={value_style}>{ format_point(r.drag_distance) }</span></div>
                <div style={row_style}><span>{"Direction"}</span><span style={value_style}>{ format_direction(r.drag_direction) }</span></div>
                <div style={row_style}><span>{"Initial"}</span><span style={value_style}>{ format_direction(r.init_drag_direction) }</span></div>
                <div style={row_style}><span>{"Horizontal / Vertical"}</span><span style={value_style}>{ format!("{} / {}", flag(r.is_horizontal_gesture), flag(r.is_vertical_gesture)) }</span></div>
                <div style={row_style}><span>{"Swipe"}</span><span style={value_style}>{ flag(r.is_swipe) }</span></div>
            </>}
        }
    };

    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:260px; display:flex; flex-direction:column; gap:6px; font-size:13px; pointer-events:none;">
            { current }
            <div style="border-top:1px solid #30363d; margin-top:4px; padding-top:6px; display:flex; gap:12px;">
                <span>{ format!("moves {}", h.move_samples) }</span>
                <span style="color:#3fb950;">{ format!("swipes {}", h.swipes) }</span>
                <span style="color:#d29922;">{ format!("scrolls {}", h.scrolls) }</span>
            </div>
            <div style="display:flex; flex-direction:column; gap:2px; font-size:11px; opacity:0.8;">
                { for h.finished.iter().map(|r| html! {
                    <span style={format!("color:{};", gesture_color(r))}>
                        { format!("{:<12} {}", if r.gesture.as_str().is_empty() { "-" } else { r.gesture.as_str() }, format_point(r.drag_distance)) }
                    </span>
                }) }
            </div>
        </div>
    }
}
