use super::zone_menu::{ZoneEntry, ZoneMenu};
use super::zone_view::ZoneView;
use crate::data;
use crate::model::{GameAction, GameState};
use crate::state::AutomationTimers;
use crate::util::{cerror, clog};
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::default);
    let timers = use_mut_ref(AutomationTimers::default);

    // Load enemy definitions once at startup. On failure the world stays
    // empty and the error only reaches the console.
    {
        let dispatcher = game.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match data::fetch_enemy_defs("data/enemies.json").await {
                    Ok(defs) => {
                        clog(&format!("loaded {} enemy definitions", defs.len()));
                        dispatcher.dispatch(GameAction::DataLoaded { defs });
                    }
                    Err(err) => cerror(&format!("Error loading enemy data: {err}")),
                }
            });
            || ()
        });
    }

    // Keep exactly one running interval per automated enemy. Re-runs whenever
    // the set of purchased automations changes; the registry replaces any
    // previous token for an enemy, so restarts never double-accumulate.
    {
        let dispatcher = game.dispatcher();
        let timers = timers.clone();
        let automated: Vec<(u32, u32)> = game
            .zones
            .iter()
            .flat_map(|z| {
                let zone_id = z.id;
                z.enemies
                    .iter()
                    .filter(|e| e.automation.purchased)
                    .map(move |e| (zone_id, e.id))
            })
            .collect();
        use_effect_with(automated, move |keys| {
            let mut timers = timers.borrow_mut();
            timers.retain(keys);
            for &(zone_id, enemy_id) in keys.iter() {
                if timers.is_running((zone_id, enemy_id)) {
                    continue;
                }
                let dispatcher = dispatcher.clone();
                timers.start((zone_id, enemy_id), move || {
                    dispatcher.dispatch(GameAction::AutomationTick { zone_id, enemy_id });
                });
            }
            || ()
        });
    }

    let zone_entries: Vec<ZoneEntry> = game
        .zones
        .iter()
        .map(|z| ZoneEntry {
            id: z.id,
            unlocked: z.unlocked,
        })
        .collect();
    let current_index = game.current_zone_index;

    let on_select_zone = {
        let game = game.clone();
        Callback::from(move |index: usize| game.dispatch(GameAction::SelectZone { index }))
    };
    let on_click_enemy = {
        let game = game.clone();
        Callback::from(move |enemy: usize| {
            game.dispatch(GameAction::ClickEnemy {
                zone: current_index,
                enemy,
            })
        })
    };
    let on_unlock_enemy = {
        let game = game.clone();
        Callback::from(move |enemy: usize| {
            game.dispatch(GameAction::UnlockEnemy {
                zone: current_index,
                enemy,
            })
        })
    };
    let on_buy_automation = {
        let game = game.clone();
        Callback::from(move |enemy: usize| {
            game.dispatch(GameAction::PurchaseAutomation {
                zone: current_index,
                enemy,
            })
        })
    };

    let content = match game.current_zone() {
        Some(zone) => html! {
            <ZoneView
                zone={zone.clone()}
                on_click_enemy={on_click_enemy}
                on_unlock_enemy={on_unlock_enemy}
                on_buy_automation={on_buy_automation}
            />
        },
        None => html! {},
    };

    html! {
        <div style="display:flex; width:100vw; height:100vh; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <ZoneMenu zones={zone_entries} current={current_index} on_select={on_select_zone} />
            <div style="flex:1; overflow-y:auto; padding:16px 24px;">
                { content }
            </div>
        </div>
    }
}
