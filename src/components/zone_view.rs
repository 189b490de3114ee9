use super::enemy_card::EnemyCard;
use crate::model::Zone;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoneViewProps {
    pub zone: Zone,
    pub on_click_enemy: Callback<usize>,
    pub on_unlock_enemy: Callback<usize>,
    pub on_buy_automation: Callback<usize>,
}

/// Heading plus one card per enemy of the current zone.
#[function_component(ZoneView)]
pub fn zone_view(props: &ZoneViewProps) -> Html {
    let cards: Vec<Html> = props
        .zone
        .enemies
        .iter()
        .enumerate()
        .map(|(idx, enemy)| {
            let prev_xp = (idx > 0).then(|| props.zone.enemies[idx - 1].xp_accumulated);
            let on_click = {
                let cb = props.on_click_enemy.clone();
                Callback::from(move |_| cb.emit(idx))
            };
            let on_unlock = {
                let cb = props.on_unlock_enemy.clone();
                Callback::from(move |_| cb.emit(idx))
            };
            let on_buy = {
                let cb = props.on_buy_automation.clone();
                Callback::from(move |_| cb.emit(idx))
            };
            html! {
                <EnemyCard
                    enemy={enemy.clone()}
                    prev_xp={prev_xp}
                    on_click={on_click}
                    on_unlock={on_unlock}
                    on_buy={on_buy}
                />
            }
        })
        .collect();
    html! {
        <div>
            <h2 style="margin:0 0 16px 0;">{ format!("Zone {}", props.zone.id) }</h2>
            <div style="display:flex; flex-direction:column; gap:12px; max-width:640px;">
                { for cards }
            </div>
        </div>
    }
}
