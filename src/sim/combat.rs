//! Melee combat and enemy pursuit
//!
//! Two halves: the hero's swing state machine (progress-driven hit window,
//! one registered hit per swing, every enemy in range damaged in that one
//! pass - it is an area swing) and per-enemy pursuit/attack (aggro check,
//! smoothed steering, tick-counted attack cooldown).
//!
//! Swing animation is presentation; only the normalized progress and its hit
//! window live here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::{SIM_DT, SWING_HIT_WINDOW, TURN_SMOOTHING};
use crate::sim::collision::resolve_enemy_move;
use crate::sim::entity::{Actor, DamageEvent, Enemy, GameEvent, PlacedEntity};
use crate::sim::layout::WorldBounds;
use crate::{flat_distance, flatten, heading_to_forward, turn_toward};

/// Hero swing state machine: Idle -> Swinging -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum SwingState {
    #[default]
    Idle,
    Swinging {
        /// Normalized swing progress, 0 to 1
        progress: f32,
        /// A hit already registered this swing
        hit_registered: bool,
    },
}

impl SwingState {
    /// Start a swing on an attack-input edge. No-op while already swinging.
    pub fn try_start(&mut self) -> bool {
        if matches!(self, SwingState::Idle) {
            *self = SwingState::Swinging { progress: 0.0, hit_registered: false };
            return true;
        }
        false
    }

    pub fn is_swinging(&self) -> bool {
        matches!(self, SwingState::Swinging { .. })
    }
}

/// World-space position of the weapon tip: reach ahead of the hero along
/// its heading.
#[inline]
pub fn weapon_tip(hero: &Actor, reach: f32) -> Vec3 {
    hero.position + heading_to_forward(hero.heading) * reach
}

/// Advance the hero's swing by one tick and run the hit check while progress
/// sits inside the open hit window.
///
/// The check damages every living enemy whose body sphere overlaps the
/// weapon tip, then marks the swing as having hit; later ticks of the same
/// swing cannot damage again. A whiffed check may retry on the next tick as
/// long as the window is open.
pub fn advance_swing(
    swing: &mut SwingState,
    hero: &Actor,
    enemies: &mut [Enemy],
    config: &WorldConfig,
    events: &mut Vec<GameEvent>,
) {
    let SwingState::Swinging { progress, hit_registered } = swing else {
        return;
    };
    *progress += 1.0 / config.swing_ticks.max(1) as f32;

    let (lo, hi) = SWING_HIT_WINDOW;
    if !*hit_registered && *progress > lo && *progress < hi {
        let tip = weapon_tip(hero, config.weapon_reach);
        let mut landed = false;
        for enemy in enemies.iter_mut() {
            if !enemy.actor.alive {
                continue;
            }
            if flat_distance(tip, enemy.actor.position)
                < config.weapon_radius + enemy.effective_radius()
            {
                let died = enemy.actor.take_damage(hero.attack_power);
                events.push(GameEvent::Damage(DamageEvent {
                    source: hero.id,
                    target: enemy.actor.id,
                    amount: hero.attack_power,
                    health_after: enemy.actor.health,
                }));
                if died {
                    events.push(GameEvent::Death { entity: enemy.actor.id });
                }
                landed = true;
            }
        }
        if landed {
            *hit_registered = true;
        }
    }

    if *progress >= 1.0 {
        *swing = SwingState::Idle;
    }
}

/// Per-tick pursuit and attack for one enemy.
///
/// Inside the aggro radius the enemy turns toward the hero (smoothed) and
/// steps closer until within striking distance; the step goes through the
/// collision resolver, so enemies do not walk through terrain or off the
/// world. Inside attack range it strikes whenever the cooldown has elapsed.
pub fn update_enemy(
    enemy: &mut Enemy,
    hero: &mut Actor,
    bounds: &WorldBounds,
    obstacles: &[PlacedEntity],
    config: &WorldConfig,
    now_ticks: u64,
    events: &mut Vec<GameEvent>,
) {
    if !enemy.actor.alive || !hero.alive {
        return;
    }

    let dist = flat_distance(enemy.actor.position, hero.position);
    if dist > config.enemy_buffer_zone {
        return;
    }

    let to_hero = hero.position - enemy.actor.position;
    let target_heading = to_hero.x.atan2(to_hero.z);
    enemy.actor.heading = turn_toward(enemy.actor.heading, target_heading, TURN_SMOOTHING);

    if dist > enemy.attack_range {
        let dir = flatten(to_hero).normalize_or_zero();
        let step = Vec3::new(dir.x, 0.0, dir.y) * enemy.actor.speed * SIM_DT;
        let proposed = enemy.actor.position + step;
        if resolve_enemy_move(enemy, proposed, bounds, obstacles) {
            enemy.actor.position = proposed;
        }
    } else {
        let ready = enemy
            .last_attack_tick
            .is_none_or(|t| now_ticks - t >= config.enemy_cooldown_ticks());
        if ready {
            let died = hero.take_damage(enemy.actor.attack_power);
            enemy.last_attack_tick = Some(now_ticks);
            events.push(GameEvent::Damage(DamageEvent {
                source: enemy.actor.id,
                target: hero.id,
                amount: enemy.actor.attack_power,
                health_after: hero.health,
            }));
            if died {
                events.push(GameEvent::Death { entity: hero.id });
            }
        }
    }
}
