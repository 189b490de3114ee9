use super::progress_bar::ProgressBar;
use crate::model::Enemy;
use crate::util::{format_xp, xp_per_second};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EnemyCardProps {
    pub enemy: Enemy,
    /// XP of the previous enemy in the zone; `None` for the first enemy.
    pub prev_xp: Option<f64>,
    pub on_click: Callback<()>,
    pub on_unlock: Callback<()>,
    pub on_buy: Callback<()>,
}

#[function_component(EnemyCard)]
pub fn enemy_card(props: &EnemyCardProps) -> Html {
    let e = &props.enemy;
    let card_style = "background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 16px; display:flex; flex-direction:column; gap:8px;";

    if !e.unlocked {
        // The unlock button only appears once the previous enemy has earned
        // enough XP; the reducer re-checks the threshold on click.
        let unlock_ready = props.prev_xp.map(|xp| xp >= e.unlock_cost).unwrap_or(false);
        let unlock_btn = if unlock_ready {
            let cb = props.on_unlock.clone();
            let onclick = Callback::from(move |_| cb.emit(()));
            html! { <button onclick={onclick} style="align-self:flex-start;">{"Unlock"}</button> }
        } else {
            html! {}
        };
        return html! {
            <div style={card_style}>
                <div style="opacity:0.7;">
                    { format!("{} (Locked – requires {} XP from previous enemy)", e.name, format_xp(e.unlock_cost)) }
                </div>
                { unlock_btn }
            </div>
        };
    }

    let attack = {
        let cb = props.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let automation = &e.automation;
    let (fraction, bar_label) = if automation.purchased {
        (
            e.progress_fraction(),
            format!(
                "{:.2} XP/s",
                xp_per_second(automation.xp_per_cycle, automation.base_time)
            ),
        )
    } else {
        (0.0, "Not automated".to_string())
    };
    let buy_btn = if automation.purchased {
        html! {}
    } else {
        let cb = props.on_buy.clone();
        let onclick = Callback::from(move |_| cb.emit(()));
        html! {
            <button onclick={onclick} disabled={!e.can_afford_automation()}>
                { format!("Buy Automation (Cost: {})", format_xp(automation.base_cost)) }
            </button>
        }
    };
    html! {
        <div style={card_style}>
            <div style="font-variant-numeric:tabular-nums;">
                { format!("XP: {}", format_xp(e.xp_accumulated)) }
            </div>
            <div style="display:flex; gap:8px; align-items:center; flex-wrap:wrap;">
                <button onclick={attack}>{ format!("{} (Click to attack)", e.name) }</button>
                { buy_btn }
            </div>
            <ProgressBar fraction={fraction} label={bar_label} />
        </div>
    }
}
