//! Core data model for Zone Clicker.
//!
//! All progression state lives in a single owned [`GameState`] driven through
//! yew's reducer; components dispatch [`GameAction`] values and never mutate
//! the world directly.

use crate::data::EnemyDef;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

/// Fixed polling interval for automation timers, in milliseconds.
pub const AUTOMATION_TICK_MS: u32 = 100;

/// Per-enemy passive XP generation, purchased once and never lost.
#[derive(Clone, Debug, PartialEq)]
pub struct Automation {
    pub purchased: bool,
    /// Full cycle length in milliseconds.
    pub base_time: f64,
    /// XP awarded when a cycle completes. Seeded from the enemy's `baseXP`.
    pub xp_per_cycle: f64,
    /// Purchase threshold in XP. The cost is checked but never deducted.
    pub base_cost: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Unique within its zone.
    pub id: u32,
    pub name: String,
    pub zone: u32,
    pub xp_per_click: f64,
    /// XP the previous enemy in the zone must reach before this one unlocks.
    pub unlock_cost: f64,
    pub automation: Automation,
    pub xp_accumulated: f64,
    /// Elapsed time in the current automation cycle; stays in [0, base_time].
    pub timer_progress: f64,
    pub unlocked: bool,
}

impl Enemy {
    fn from_def(def: &EnemyDef) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            zone: def.zone,
            xp_per_click: def.base_xp,
            unlock_cost: def.unlock_cost,
            automation: Automation {
                purchased: false,
                base_time: def.base_time,
                xp_per_cycle: def.base_xp,
                base_cost: def.base_cost,
            },
            xp_accumulated: 0.0,
            timer_progress: 0.0,
            unlocked: false,
        }
    }

    /// Fraction of the current automation cycle completed, clamped to [0, 1].
    pub fn progress_fraction(&self) -> f64 {
        if self.automation.base_time <= 0.0 {
            return 0.0;
        }
        (self.timer_progress / self.automation.base_time).min(1.0)
    }

    pub fn can_afford_automation(&self) -> bool {
        self.xp_accumulated >= self.automation.base_cost
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: u32,
    pub unlocked: bool,
    /// Ordered by ascending enemy id.
    pub enemies: Vec<Enemy>,
}

/// The whole session's progression state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    /// Ordered by ascending zone id. Empty until the data file loads.
    pub zones: Vec<Zone>,
    pub current_zone_index: usize,
}

impl GameState {
    /// Groups raw definitions into zones. Zone 1 starts unlocked, all others
    /// locked; the first enemy of each zone is unlocked by construction.
    pub fn from_defs(defs: &[EnemyDef]) -> Self {
        let mut by_zone: BTreeMap<u32, Vec<Enemy>> = BTreeMap::new();
        for def in defs {
            by_zone.entry(def.zone).or_default().push(Enemy::from_def(def));
        }
        let zones = by_zone
            .into_iter()
            .map(|(id, mut enemies)| {
                enemies.sort_by_key(|e| e.id);
                if let Some(first) = enemies.first_mut() {
                    first.unlocked = true;
                }
                Zone {
                    id,
                    unlocked: id == 1,
                    enemies,
                }
            })
            .collect();
        Self {
            zones,
            current_zone_index: 0,
        }
    }

    pub fn current_zone(&self) -> Option<&Zone> {
        self.zones.get(self.current_zone_index)
    }

    fn enemy_mut(&mut self, zone_id: u32, enemy_id: u32) -> Option<&mut Enemy> {
        self.zones
            .iter_mut()
            .find(|z| z.id == zone_id)?
            .enemies
            .iter_mut()
            .find(|e| e.id == enemy_id)
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    /// Replaces the world with freshly loaded definitions.
    DataLoaded { defs: Vec<EnemyDef> },
    SelectZone { index: usize },
    /// Manual attack on an enemy of the current world, by position.
    ClickEnemy { zone: usize, enemy: usize },
    /// Explicit unlock confirmation for a locked enemy, by position.
    UnlockEnemy { zone: usize, enemy: usize },
    PurchaseAutomation { zone: usize, enemy: usize },
    /// One 100 ms poll of an enemy's automation timer, by identity.
    AutomationTick { zone_id: u32, enemy_id: u32 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            DataLoaded { defs } => {
                new = GameState::from_defs(&defs);
            }
            SelectZone { index } => {
                if index >= new.zones.len() {
                    return self;
                }
                new.current_zone_index = index;
            }
            ClickEnemy { zone, enemy } => {
                let Some(z) = new.zones.get_mut(zone) else { return self; };
                let Some(e) = z.enemies.get_mut(enemy) else { return self; };
                if !e.unlocked {
                    return self;
                }
                e.xp_accumulated += e.xp_per_click;
                let xp = e.xp_accumulated;
                // The next enemy in the zone may unlock off this click.
                if let Some(next) = z.enemies.get_mut(enemy + 1) {
                    if !next.unlocked && xp >= next.unlock_cost {
                        next.unlocked = true;
                    }
                }
            }
            UnlockEnemy { zone, enemy } => {
                let Some(z) = new.zones.get_mut(zone) else { return self; };
                if enemy == 0 || enemy >= z.enemies.len() {
                    return self;
                }
                let prev_xp = z.enemies[enemy - 1].xp_accumulated;
                let e = &mut z.enemies[enemy];
                if e.unlocked || prev_xp < e.unlock_cost {
                    return self;
                }
                e.unlocked = true;
            }
            PurchaseAutomation { zone, enemy } => {
                let Some(e) = new
                    .zones
                    .get_mut(zone)
                    .and_then(|z| z.enemies.get_mut(enemy))
                else {
                    return self;
                };
                if !e.unlocked || e.automation.purchased || !e.can_afford_automation() {
                    return self;
                }
                e.automation.purchased = true;
            }
            AutomationTick { zone_id, enemy_id } => {
                let Some(e) = new.enemy_mut(zone_id, enemy_id) else { return self; };
                if !e.automation.purchased {
                    return self;
                }
                e.timer_progress += f64::from(AUTOMATION_TICK_MS);
                if e.timer_progress >= e.automation.base_time {
                    e.xp_accumulated += e.automation.xp_per_cycle;
                    e.timer_progress = 0.0;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(
        id: u32,
        zone: u32,
        base_xp: f64,
        unlock_cost: f64,
        base_time: f64,
        base_cost: f64,
    ) -> EnemyDef {
        EnemyDef {
            id,
            name: format!("enemy-{zone}-{id}"),
            zone,
            base_xp,
            unlock_cost,
            base_time,
            base_cost,
        }
    }

    fn sample_state() -> GameState {
        GameState::from_defs(&[
            def(2, 1, 3.0, 25.0, 1500.0, 150.0),
            def(1, 1, 1.0, 0.0, 1000.0, 50.0),
            def(3, 1, 8.0, 120.0, 2500.0, 400.0),
            def(1, 2, 15.0, 0.0, 1200.0, 500.0),
            def(2, 2, 40.0, 900.0, 2000.0, 1500.0),
        ])
    }

    fn apply(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn zones_and_enemies_sorted_by_id() {
        let state = sample_state();
        let zone_ids: Vec<u32> = state.zones.iter().map(|z| z.id).collect();
        assert_eq!(zone_ids, vec![1, 2]);
        let enemy_ids: Vec<u32> = state.zones[0].enemies.iter().map(|e| e.id).collect();
        assert_eq!(enemy_ids, vec![1, 2, 3]);
    }

    #[test]
    fn only_zone_one_unlocked_at_construction() {
        let state = sample_state();
        assert!(state.zones[0].unlocked);
        assert!(!state.zones[1].unlocked);
    }

    #[test]
    fn first_enemy_of_each_zone_unlocked_at_construction() {
        let state = sample_state();
        for zone in &state.zones {
            assert!(zone.enemies[0].unlocked, "zone {} first enemy", zone.id);
            for e in &zone.enemies[1..] {
                assert!(!e.unlocked, "zone {} enemy {}", zone.id, e.id);
            }
        }
    }

    #[test]
    fn click_awards_xp_per_click() {
        let mut state = sample_state();
        for _ in 0..3 {
            state = apply(state, GameAction::ClickEnemy { zone: 0, enemy: 0 });
        }
        assert_eq!(state.zones[0].enemies[0].xp_accumulated, 3.0);
    }

    #[test]
    fn click_on_locked_enemy_is_ignored() {
        let state = sample_state();
        let state = apply(state, GameAction::ClickEnemy { zone: 0, enemy: 1 });
        assert_eq!(state.zones[0].enemies[1].xp_accumulated, 0.0);
    }

    #[test]
    fn click_auto_unlocks_next_enemy_at_threshold() {
        let mut state = sample_state();
        // unlock_cost of enemy 2 is 25; 24 clicks of 1 XP stay below it.
        for _ in 0..24 {
            state = apply(state, GameAction::ClickEnemy { zone: 0, enemy: 0 });
        }
        assert!(!state.zones[0].enemies[1].unlocked);
        state = apply(state, GameAction::ClickEnemy { zone: 0, enemy: 0 });
        assert!(state.zones[0].enemies[1].unlocked);
        // The enemy after next is untouched.
        assert!(!state.zones[0].enemies[2].unlocked);
    }

    #[test]
    fn explicit_unlock_requires_previous_enemy_xp() {
        let mut state = sample_state();
        state = apply(state, GameAction::UnlockEnemy { zone: 0, enemy: 1 });
        assert!(!state.zones[0].enemies[1].unlocked);

        state.zones[0].enemies[0].xp_accumulated = 25.0;
        state = apply(state, GameAction::UnlockEnemy { zone: 0, enemy: 1 });
        assert!(state.zones[0].enemies[1].unlocked);
    }

    #[test]
    fn explicit_unlock_of_first_enemy_is_ignored() {
        let mut state = sample_state();
        state.zones[0].enemies[0].unlocked = false;
        let state = apply(state, GameAction::UnlockEnemy { zone: 0, enemy: 0 });
        assert!(!state.zones[0].enemies[0].unlocked);
    }

    #[test]
    fn automation_purchase_requires_cost_and_keeps_xp() {
        let mut state = sample_state();
        state = apply(state, GameAction::PurchaseAutomation { zone: 0, enemy: 0 });
        assert!(!state.zones[0].enemies[0].automation.purchased);

        state.zones[0].enemies[0].xp_accumulated = 50.0;
        state = apply(state, GameAction::PurchaseAutomation { zone: 0, enemy: 0 });
        let e = &state.zones[0].enemies[0];
        assert!(e.automation.purchased);
        // Cost is checked but never deducted.
        assert_eq!(e.xp_accumulated, 50.0);
    }

    #[test]
    fn full_cycle_awards_exactly_once_and_resets() {
        let mut state = sample_state();
        state.zones[0].enemies[0].xp_accumulated = 50.0;
        state = apply(state, GameAction::PurchaseAutomation { zone: 0, enemy: 0 });

        // base_time 1000 and ticks of 100: nine ticks stay mid-cycle.
        for i in 1..=9 {
            state = apply(state, GameAction::AutomationTick { zone_id: 1, enemy_id: 1 });
            let e = &state.zones[0].enemies[0];
            assert_eq!(e.xp_accumulated, 50.0, "no award after {i} ticks");
            assert_eq!(e.timer_progress, f64::from(i) * 100.0);
        }
        state = apply(state, GameAction::AutomationTick { zone_id: 1, enemy_id: 1 });
        let e = &state.zones[0].enemies[0];
        assert_eq!(e.xp_accumulated, 51.0);
        assert_eq!(e.timer_progress, 0.0);
    }

    #[test]
    fn tick_without_automation_is_ignored() {
        let state = sample_state();
        let state = apply(state, GameAction::AutomationTick { zone_id: 1, enemy_id: 1 });
        let e = &state.zones[0].enemies[0];
        assert_eq!(e.timer_progress, 0.0);
        assert_eq!(e.xp_accumulated, 0.0);
    }

    #[test]
    fn xp_is_monotonic_across_mixed_actions() {
        let mut state = sample_state();
        state.zones[0].enemies[0].xp_accumulated = 50.0;
        state = apply(state, GameAction::PurchaseAutomation { zone: 0, enemy: 0 });
        let mut last = 0.0;
        let actions = [
            GameAction::ClickEnemy { zone: 0, enemy: 0 },
            GameAction::AutomationTick { zone_id: 1, enemy_id: 1 },
            GameAction::UnlockEnemy { zone: 0, enemy: 1 },
            GameAction::ClickEnemy { zone: 0, enemy: 0 },
            GameAction::SelectZone { index: 1 },
            GameAction::AutomationTick { zone_id: 1, enemy_id: 1 },
        ];
        for action in actions {
            state = apply(state, action.clone());
            let xp = state.zones[0].enemies[0].xp_accumulated;
            assert!(xp >= last, "xp decreased after {action:?}");
            last = xp;
        }
    }

    #[test]
    fn timer_progress_stays_within_base_time() {
        let mut state = sample_state();
        state.zones[0].enemies[0].xp_accumulated = 50.0;
        state = apply(state, GameAction::PurchaseAutomation { zone: 0, enemy: 0 });
        for _ in 0..35 {
            state = apply(state, GameAction::AutomationTick { zone_id: 1, enemy_id: 1 });
            let e = &state.zones[0].enemies[0];
            assert!(e.timer_progress >= 0.0);
            assert!(e.timer_progress <= e.automation.base_time);
        }
    }

    #[test]
    fn progress_fraction_clamped() {
        let mut e = Enemy::from_def(&def(1, 1, 1.0, 0.0, 1000.0, 50.0));
        assert_eq!(e.progress_fraction(), 0.0);
        e.timer_progress = 500.0;
        assert_eq!(e.progress_fraction(), 0.5);
        e.timer_progress = 1500.0;
        assert_eq!(e.progress_fraction(), 1.0);
        e.automation.base_time = 0.0;
        assert_eq!(e.progress_fraction(), 0.0);
    }

    #[test]
    fn select_zone_out_of_range_is_ignored() {
        let state = sample_state();
        let state = apply(state, GameAction::SelectZone { index: 5 });
        assert_eq!(state.current_zone_index, 0);
        let state = apply(state, GameAction::SelectZone { index: 1 });
        assert_eq!(state.current_zone_index, 1);
    }

    #[test]
    fn out_of_range_enemy_indices_are_ignored() {
        let state = sample_state();
        let before = state.clone();
        let state = apply(state, GameAction::ClickEnemy { zone: 7, enemy: 0 });
        let state = apply(state, GameAction::ClickEnemy { zone: 0, enemy: 9 });
        let state = apply(state, GameAction::PurchaseAutomation { zone: 0, enemy: 9 });
        assert_eq!(state, before);
    }

    #[test]
    fn data_loaded_replaces_world() {
        let mut state = sample_state();
        state = apply(state, GameAction::SelectZone { index: 1 });
        let state = apply(
            state,
            GameAction::DataLoaded {
                defs: vec![def(1, 1, 2.0, 0.0, 800.0, 30.0)],
            },
        );
        assert_eq!(state.zones.len(), 1);
        assert_eq!(state.current_zone_index, 0);
    }
}
