use crate::config::{SwipeConfig, VelocitySampling};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: SwipeConfig,
    pub on_change: Callback<SwipeConfig>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

fn input_value(e: &InputEvent) -> Option<f64> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value().parse::<f64>().ok()
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let threshold_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config;
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                cb.emit(SwipeConfig { velocity_threshold: v, ..cfg }.sanitized());
            }
        })
    };
    let idle_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config;
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                cb.emit(SwipeConfig { idle_reset_ms: v, ..cfg }.sanitized());
            }
        })
    };
    let sampling_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config;
        Callback::from(move |_| {
            let velocity_sampling = match cfg.velocity_sampling {
                VelocitySampling::PreviousSample => VelocitySampling::CurrentSample,
                VelocitySampling::CurrentSample => VelocitySampling::PreviousSample,
            };
            cb.emit(SwipeConfig { velocity_sampling, ..cfg });
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let same_sample = props.config.velocity_sampling == VelocitySampling::CurrentSample;

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                    <span>{"Swipe velocity (px/ms)"}</span>
                    <input type="number" step="0.05" min="0" value={props.config.velocity_threshold.to_string()} oninput={threshold_cb} style="width:80px;" />
                </label>
                <label style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                    <span>{"Idle reset (ms)"}</span>
                    <input type="number" step="10" min="0" value={props.config.idle_reset_ms.to_string()} oninput={idle_cb} style="width:80px;" />
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={same_sample} onclick={sampling_cb} />
                    <span>{"Use current sample velocity"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="flex:1;">{"Reset to defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"By default a sample is judged with the velocity measured up to the previous sample."}</div>
        </div>
    </div>}
}
