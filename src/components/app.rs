use super::{gesture_panel::GesturePanel, settings_modal::SettingsModal, swipe_detector::SwipeDetector};
use crate::config::{self, SwipeConfig};
use crate::model::GestureReport;
use crate::state::{GestureHistory, HistoryAction};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let swipe_config = use_state(config::load);
    let history = use_reducer(GestureHistory::default);
    let show_settings = use_state(|| false);

    // Persist config changes
    {
        let swipe_config = swipe_config.clone();
        use_effect_with(*swipe_config, move |cfg| {
            config::save(cfg);
            || ()
        });
    }

    let dispatch = |make: fn(GestureReport) -> HistoryAction| {
        let history = history.clone();
        Callback::from(move |r: GestureReport| history.dispatch(make(r)))
    };
    let on_start = dispatch(HistoryAction::Start);
    let on_move = dispatch(HistoryAction::Move);
    let on_end = dispatch(HistoryAction::End);
    let on_swipe = {
        let history = history.clone();
        Callback::from(move |r: GestureReport| {
            log::info!("swipe: {}", r.gesture);
            history.dispatch(HistoryAction::Swipe)
        })
    };
    let on_scroll = {
        let history = history.clone();
        Callback::from(move |_: GestureReport| history.dispatch(HistoryAction::Scroll))
    };

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let change_config = {
        let swipe_config = swipe_config.clone();
        Callback::from(move |cfg: SwipeConfig| swipe_config.set(cfg))
    };
    let reset_config = {
        let swipe_config = swipe_config.clone();
        Callback::from(move |_: ()| {
            config::clear();
            swipe_config.set(SwipeConfig::default());
        })
    };
    let clear_history = {
        let history = history.clone();
        Callback::from(move |_| history.dispatch(HistoryAction::Clear))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <SwipeDetector
                config={*swipe_config}
                style="position:absolute; inset:0; touch-action:none;"
                {on_start}
                {on_move}
                {on_end}
                {on_swipe}
                {on_scroll}
            >
                <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; font-size:22px; opacity:0.35; user-select:none;">
                    {"Swipe me"}
                </div>
            </SwipeDetector>
            <GesturePanel history={(*history).clone()} />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
                <button onclick={open_settings}>{"Settings"}</button>
                <button onclick={clear_history}>{"Clear"}</button>
            </div>
            <SettingsModal
                show={*show_settings}
                config={*swipe_config}
                on_change={change_config}
                on_reset={reset_config}
                on_close={close_settings}
            />
        </div>
    }
}
