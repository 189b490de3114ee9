use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    /// Fill fraction in [0, 1].
    pub fraction: f64,
    pub label: String,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = props.fraction.clamp(0.0, 1.0) * 100.0;
    html! {
        <div style="position:relative; height:18px; background:#0d1117; border:1px solid #30363d; border-radius:6px; overflow:hidden;">
            <div style={format!("height:100%; width:{:.1}%; background:#3fb950;", percent)}></div>
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; font-size:11px;">
                { props.label.clone() }
            </div>
        </div>
    }
}
