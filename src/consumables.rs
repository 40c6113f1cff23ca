//! Consumable items and their permanent effects on an actor.
//!
//! A consumable may carry permanent effects, each adding an amount to one
//! actor attribute. Older records stored a single `permanentEffect` object;
//! preparation folds it into the `permanentEffects` list so nothing past
//! this module sees the legacy shape.

use crate::actor::PreparedActor;
use crate::config::RulesConfig;
use crate::prepare::{clamp_num, non_negative_round, num, text, PrepareData};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumableData {
    pub name: Value,
    pub quantity: Value,
    pub weight: Value,
    pub value: Value,
    pub description: Value,
    pub effect: Value,
    pub notes: Value,
    pub uses: Option<UsesData>,
    /// Legacy single-effect field.
    pub permanent_effect: Option<PermanentEffectData>,
    pub permanent_effects: Vec<PermanentEffectData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsesData {
    pub max: Value,
    pub value: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PermanentEffectData {
    pub attribute: Value,
    pub value: Value,
}

/// Actor attributes a consumable may permanently change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorAttribute {
    HpValue,
    HpMax,
    HpTemp,
    ExperienceValue,
    ExperienceMax,
    Lp,
    Level,
    Speed,
    Attack,
    SpAttack,
    Defense,
    SpDefense,
    Stab,
    BasicAttack,
    AccuracyBonus,
    CritAttackMod,
    CritDefenseMod,
    Belly,
}

impl ActorAttribute {
    pub const ALL: [ActorAttribute; 18] = [
        ActorAttribute::HpValue,
        ActorAttribute::HpMax,
        ActorAttribute::HpTemp,
        ActorAttribute::ExperienceValue,
        ActorAttribute::ExperienceMax,
        ActorAttribute::Lp,
        ActorAttribute::Level,
        ActorAttribute::Speed,
        ActorAttribute::Attack,
        ActorAttribute::SpAttack,
        ActorAttribute::Defense,
        ActorAttribute::SpDefense,
        ActorAttribute::Stab,
        ActorAttribute::BasicAttack,
        ActorAttribute::AccuracyBonus,
        ActorAttribute::CritAttackMod,
        ActorAttribute::CritDefenseMod,
        ActorAttribute::Belly,
    ];

    /// Key stored in the consumable record.
    pub fn key(self) -> &'static str {
        match self {
            ActorAttribute::HpValue => "hpValue",
            ActorAttribute::HpMax => "hpMax",
            ActorAttribute::HpTemp => "hpTemp",
            ActorAttribute::ExperienceValue => "experienceValue",
            ActorAttribute::ExperienceMax => "experienceMax",
            ActorAttribute::Lp => "lp",
            ActorAttribute::Level => "lvl",
            ActorAttribute::Speed => "speed",
            ActorAttribute::Attack => "attack",
            ActorAttribute::SpAttack => "spAttack",
            ActorAttribute::Defense => "defense",
            ActorAttribute::SpDefense => "spDefense",
            ActorAttribute::Stab => "stab",
            ActorAttribute::BasicAttack => "basicattack",
            ActorAttribute::AccuracyBonus => "accuracyBonus",
            ActorAttribute::CritAttackMod => "critAttackMod",
            ActorAttribute::CritDefenseMod => "critDefenseMod",
            ActorAttribute::Belly => "belly",
        }
    }

    /// Data path the host writes the update to.
    pub fn path(self) -> &'static str {
        match self {
            ActorAttribute::HpValue => "system.hp.value",
            ActorAttribute::HpMax => "system.hp.max",
            ActorAttribute::HpTemp => "system.hp.temp",
            ActorAttribute::ExperienceValue => "system.experience.value",
            ActorAttribute::ExperienceMax => "system.experience.max",
            ActorAttribute::Lp => "system.lp",
            ActorAttribute::Level => "system.lvl",
            ActorAttribute::Speed => "system.speed",
            ActorAttribute::Attack => "system.attack",
            ActorAttribute::SpAttack => "system.spAttack",
            ActorAttribute::Defense => "system.defense",
            ActorAttribute::SpDefense => "system.spDefense",
            ActorAttribute::Stab => "system.stab",
            ActorAttribute::BasicAttack => "system.basicattack",
            ActorAttribute::AccuracyBonus => "system.accuracyBonus",
            ActorAttribute::CritAttackMod => "system.critAttackMod",
            ActorAttribute::CritDefenseMod => "system.critDefenseMod",
            ActorAttribute::Belly => "system.belly",
        }
    }

    /// Accepts either the record key or the data path.
    pub fn parse(raw: &str) -> Option<ActorAttribute> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.key() == raw || a.path() == raw)
    }

    fn get(self, actor: &PreparedActor) -> f64 {
        let c = &actor.combat;
        match self {
            ActorAttribute::HpValue => actor.hp.value,
            ActorAttribute::HpMax => actor.hp.max,
            ActorAttribute::HpTemp => actor.hp.temp,
            ActorAttribute::ExperienceValue => actor.experience.value,
            ActorAttribute::ExperienceMax => actor.experience.max,
            ActorAttribute::Lp => actor.lp,
            ActorAttribute::Level => actor.level,
            ActorAttribute::Speed => c.speed,
            ActorAttribute::Attack => c.attack,
            ActorAttribute::SpAttack => c.sp_attack,
            ActorAttribute::Defense => c.defense,
            ActorAttribute::SpDefense => c.sp_defense,
            ActorAttribute::Stab => c.stab,
            ActorAttribute::BasicAttack => c.basic_attack,
            ActorAttribute::AccuracyBonus => c.accuracy_bonus as f64,
            ActorAttribute::CritAttackMod => c.crit_attack_mod as f64,
            ActorAttribute::CritDefenseMod => c.crit_defense_mod as f64,
            ActorAttribute::Belly => actor.belly,
        }
    }

    fn set(self, actor: &mut PreparedActor, value: f64) {
        let c = &mut actor.combat;
        match self {
            ActorAttribute::HpValue => actor.hp.value = value,
            ActorAttribute::HpMax => actor.hp.max = value,
            ActorAttribute::HpTemp => actor.hp.temp = value,
            ActorAttribute::ExperienceValue => actor.experience.value = value,
            ActorAttribute::ExperienceMax => actor.experience.max = value,
            ActorAttribute::Lp => actor.lp = value,
            ActorAttribute::Level => actor.level = value,
            ActorAttribute::Speed => c.speed = value,
            ActorAttribute::Attack => c.attack = value,
            ActorAttribute::SpAttack => c.sp_attack = value,
            ActorAttribute::Defense => c.defense = value,
            ActorAttribute::SpDefense => c.sp_defense = value,
            ActorAttribute::Stab => c.stab = value,
            ActorAttribute::BasicAttack => c.basic_attack = value,
            ActorAttribute::AccuracyBonus => c.accuracy_bonus = value as i32,
            ActorAttribute::CritAttackMod => c.crit_attack_mod = value as i32,
            ActorAttribute::CritDefenseMod => c.crit_defense_mod = value as i32,
            ActorAttribute::Belly => actor.belly = value,
        }
    }

    /// Bring a candidate value into the attribute's legal range.
    fn clamp(self, value: f64, actor: &PreparedActor) -> f64 {
        let rounded = if value.is_finite() { value.round() } else { 0.0 };
        match self {
            ActorAttribute::HpValue => clamp_num(rounded, 0.0, actor.hp.max.max(0.0)),
            ActorAttribute::ExperienceValue => {
                clamp_num(rounded, 0.0, actor.experience.max.round().max(0.0))
            }
            ActorAttribute::Level => rounded.max(1.0),
            ActorAttribute::HpMax
            | ActorAttribute::HpTemp
            | ActorAttribute::ExperienceMax
            | ActorAttribute::Lp
            | ActorAttribute::Belly => non_negative_round(value),
            _ => rounded,
        }
    }
}

impl fmt::Display for ActorAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PermanentEffect {
    pub attribute: ActorAttribute,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uses {
    pub max: u32,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedConsumable {
    pub name: String,
    pub quantity: u32,
    pub weight: f64,
    pub value: f64,
    pub description: String,
    pub effect: String,
    pub notes: String,
    pub uses: Uses,
    pub permanent_effects: Vec<PermanentEffect>,
}

impl PrepareData for ConsumableData {
    type Prepared = PreparedConsumable;

    fn prepare(&self, _config: &RulesConfig) -> PreparedConsumable {
        let uses_raw = self.uses.clone().unwrap_or_default();
        let uses_max = num(&uses_raw.max, 1.0).round().max(0.0);
        let uses_value = clamp_num(num(&uses_raw.value, uses_max).round(), 0.0, uses_max);

        let permanent_effects = self
            .permanent_effect
            .iter()
            .chain(self.permanent_effects.iter())
            .filter_map(|raw| {
                let attribute = ActorAttribute::parse(&text(&raw.attribute))?;
                Some(PermanentEffect {
                    attribute,
                    amount: num(&raw.value, 0.0),
                })
            })
            .collect();

        PreparedConsumable {
            name: text(&self.name),
            quantity: num(&self.quantity, 1.0).round().max(0.0) as u32,
            weight: num(&self.weight, 0.0).max(0.0),
            value: num(&self.value, 0.0).max(0.0),
            description: text(&self.description),
            effect: text(&self.effect),
            notes: text(&self.notes),
            uses: Uses {
                max: uses_max as u32,
                value: uses_value as u32,
            },
            permanent_effects,
        }
    }
}

/// A single field write the host should persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeUpdate {
    pub path: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionOutcome {
    pub actor: PreparedActor,
    pub updates: Vec<AttributeUpdate>,
    /// `None` once the last unit is used and the item should be removed.
    pub remaining_quantity: Option<u32>,
}

/// Apply each effect in order, clamping as it goes. Lowering HP max or
/// experience max also pulls the matching current value down.
pub fn apply_permanent_effects(
    actor: &PreparedActor,
    effects: &[PermanentEffect],
) -> (PreparedActor, Vec<AttributeUpdate>) {
    let mut actor = actor.clone();
    let mut updates = Vec::new();

    for effect in effects {
        let attribute = effect.attribute;
        let candidate = attribute.get(&actor) + effect.amount;
        let value = attribute.clamp(candidate, &actor);
        attribute.set(&mut actor, value);
        updates.push(AttributeUpdate {
            path: attribute.path(),
            value,
        });

        let follow_up = match attribute {
            ActorAttribute::HpMax => Some(ActorAttribute::HpValue),
            ActorAttribute::ExperienceMax => Some(ActorAttribute::ExperienceValue),
            _ => None,
        };
        if let Some(dependent) = follow_up {
            let current = dependent.get(&actor).round();
            let clamped = dependent.clamp(current, &actor);
            if clamped != current {
                dependent.set(&mut actor, clamped);
                updates.push(AttributeUpdate {
                    path: dependent.path(),
                    value: clamped,
                });
            }
        }
    }

    (actor, updates)
}

/// Use one unit of a consumable. Returns `None` when none are left.
pub fn consume(consumable: &PreparedConsumable, actor: &PreparedActor) -> Option<ConsumptionOutcome> {
    if consumable.quantity == 0 {
        tracing::debug!(item = %consumable.name, "no uses left");
        return None;
    }
    let (actor, updates) = apply_permanent_effects(actor, &consumable.permanent_effects);
    let left = consumable.quantity - 1;
    Some(ConsumptionOutcome {
        actor,
        updates,
        remaining_quantity: (left > 0).then_some(left),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorData;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn actor(value: serde_json::Value) -> PreparedActor {
        let data: ActorData = serde_json::from_value(value).unwrap();
        data.prepare(&RulesConfig::default())
    }

    fn consumable(value: serde_json::Value) -> PreparedConsumable {
        let data: ConsumableData = serde_json::from_value(value).unwrap();
        data.prepare(&RulesConfig::default())
    }

    #[test]
    fn test_legacy_effect_is_migrated() {
        let item = consumable(json!({
            "permanentEffect": { "attribute": "attack", "value": 2 },
            "permanentEffects": [
                { "attribute": "system.speed", "value": "1" },
                { "attribute": "", "value": 5 }
            ],
        }));
        assert_eq!(
            item.permanent_effects,
            vec![
                PermanentEffect { attribute: ActorAttribute::Attack, amount: 2.0 },
                PermanentEffect { attribute: ActorAttribute::Speed, amount: 1.0 },
            ]
        );
    }

    #[test]
    fn test_quantity_and_uses() {
        let item = consumable(json!({ "quantity": 2.6, "uses": { "max": 3, "value": 8 } }));
        assert_eq!(item.quantity, 3);
        assert_eq!(item.uses, Uses { max: 3, value: 3 });
        let empty = consumable(json!({ "quantity": -1 }));
        assert_eq!(empty.quantity, 0);
    }

    #[test]
    fn test_hp_value_clamped_to_max() {
        let target = actor(json!({ "hp": { "max": 20, "value": 15 } }));
        let effects = [PermanentEffect { attribute: ActorAttribute::HpValue, amount: 30.0 }];
        let (after, updates) = apply_permanent_effects(&target, &effects);
        assert_eq!(after.hp.value, 20.0);
        assert_eq!(updates, vec![AttributeUpdate { path: "system.hp.value", value: 20.0 }]);
    }

    #[test]
    fn test_lowering_hp_max_pulls_value_down() {
        let target = actor(json!({ "hp": { "max": 20, "value": 18 } }));
        let effects = [PermanentEffect { attribute: ActorAttribute::HpMax, amount: -5.0 }];
        let (after, updates) = apply_permanent_effects(&target, &effects);
        assert_eq!(after.hp.max, 15.0);
        assert_eq!(after.hp.value, 15.0);
        assert_eq!(
            updates,
            vec![
                AttributeUpdate { path: "system.hp.max", value: 15.0 },
                AttributeUpdate { path: "system.hp.value", value: 15.0 },
            ]
        );
    }

    #[test]
    fn test_level_floor_and_integer_stats() {
        let target = actor(json!({ "lvl": 2, "critAttackMod": 1 }));
        let effects = [
            PermanentEffect { attribute: ActorAttribute::Level, amount: -10.0 },
            PermanentEffect { attribute: ActorAttribute::CritAttackMod, amount: 1.6 },
        ];
        let (after, _) = apply_permanent_effects(&target, &effects);
        assert_eq!(after.level, 1.0);
        assert_eq!(after.combat.crit_attack_mod, 3);
    }

    #[test]
    fn test_consume_counts_down() {
        let target = actor(json!({ "belly": 40 }));
        let item = consumable(json!({
            "quantity": 1,
            "permanentEffects": [{ "attribute": "belly", "value": 50 }],
        }));
        let outcome = consume(&item, &target).unwrap();
        assert_eq!(outcome.actor.belly, 90.0);
        assert_eq!(outcome.remaining_quantity, None);

        let empty = PreparedConsumable { quantity: 0, ..item };
        assert!(consume(&empty, &target).is_none());
    }
}
