use crate::config::RulesConfig;
use schema::{CombatantSnapshot, DamageModifierSet, MoveCategory, MoveDefinition};
use serde::{Deserialize, Serialize};

/// Every intermediate value of one damage calculation, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub attack_stat: f64,
    /// Base power plus the attacking stat.
    pub base: f64,
    pub after_stat: f64,
    pub after_ability: f64,
    /// Flat STAB bonus added, or 0 when the move has no STAB.
    pub stab_bonus: f64,
    pub effectiveness: f64,
    pub critical: bool,
    pub after_critical: f64,
    pub after_weather: f64,
    pub after_terrain: f64,
    pub after_enemy: f64,
    pub defense_stat: f64,
    pub final_damage: u32,
}

/// Attacking and defending stats used by a move's category.
/// Status moves have none.
pub fn category_stats(
    category: MoveCategory,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
) -> Option<(f64, f64)> {
    match category {
        MoveCategory::Physical => Some((attacker.attack, defender.defense)),
        MoveCategory::Special => Some((attacker.sp_attack, defender.sp_defense)),
        MoveCategory::Status => None,
    }
}

/// Run the damage pipeline, returning every intermediate value.
///
/// Order: base power + attack stat, stat and ability modifiers, flat STAB,
/// effectiveness, critical bonus, weather then terrain then enemy modifiers,
/// minus defense, then rounded up with a floor of `minimum_damage`. An
/// effectiveness of 0 skips everything after STAB and deals exactly 0.
/// Status moves return `None`.
#[allow(clippy::too_many_arguments)]
pub fn damage_breakdown(
    config: &RulesConfig,
    move_: &MoveDefinition,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    modifiers: &DamageModifierSet,
    stab: bool,
    effectiveness: f64,
    is_critical: bool,
) -> Option<DamageBreakdown> {
    let (attack_stat, defense_stat) = category_stats(move_.category, attacker, defender)?;
    let effectiveness = if effectiveness.is_finite() { effectiveness.max(0.0) } else { 1.0 };

    let base = move_.base_power + attack_stat;
    let after_stat = modifiers.stat.apply(base);
    let after_ability = modifiers.ability.apply(after_stat);
    let stab_bonus = if stab { attacker.stab } else { 0.0 };
    let mut damage = after_ability + stab_bonus;

    let mut breakdown = DamageBreakdown {
        attack_stat,
        base,
        after_stat,
        after_ability,
        stab_bonus,
        effectiveness,
        critical: is_critical,
        after_critical: 0.0,
        after_weather: 0.0,
        after_terrain: 0.0,
        after_enemy: 0.0,
        defense_stat,
        final_damage: 0,
    };

    if effectiveness == 0.0 {
        return Some(breakdown);
    }

    damage *= effectiveness;
    if is_critical {
        damage *= config.critical_multiplier;
    }
    breakdown.after_critical = damage;
    breakdown.after_weather = modifiers.weather.apply(breakdown.after_critical);
    breakdown.after_terrain = modifiers.terrain.apply(breakdown.after_weather);
    breakdown.after_enemy = modifiers.enemy.apply(breakdown.after_terrain);

    let result = (breakdown.after_enemy - defense_stat).ceil();
    // A hit that is not immune always deals at least 1.
    let floor = config.minimum_damage.max(1);
    breakdown.final_damage = if result.is_finite() {
        result.max(floor as f64).min(u32::MAX as f64) as u32
    } else if result == f64::INFINITY {
        u32::MAX
    } else {
        floor
    };
    Some(breakdown)
}

/// Final damage only. See [`damage_breakdown`].
#[allow(clippy::too_many_arguments)]
pub fn compute_damage(
    config: &RulesConfig,
    move_: &MoveDefinition,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    modifiers: &DamageModifierSet,
    stab: bool,
    effectiveness: f64,
    is_critical: bool,
) -> Option<u32> {
    damage_breakdown(
        config,
        move_,
        attacker,
        defender,
        modifiers,
        stab,
        effectiveness,
        is_critical,
    )
    .map(|b| b.final_damage)
}
