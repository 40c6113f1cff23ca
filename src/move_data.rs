use crate::config::RulesConfig;
use crate::prepare::{clamp_num, int, num, text, truthy, PrepareData};
use schema::{DieFaces, ExtraRollsConfig, MoveCategory, MoveDefinition, MultiAttackConfig, PokemonType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw move item data as stored by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveData {
    pub name: Value,
    pub pp: Option<PpData>,
    pub accuracy: Value,
    pub base_damage: Value,
    pub category: Value,
    pub element: Value,
    pub range: Value,
    pub effect: Value,
    pub crit_modifier: Value,
    pub extra_rolls: Option<ExtraRollsData>,
    pub multi_attack: Option<MultiAttackData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PpData {
    pub max: Value,
    pub value: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraRollsData {
    pub enabled: Value,
    pub count: Value,
    pub die: Value,
    pub flavor: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiAttackData {
    pub enabled: Value,
    pub die: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPoints {
    pub max: u32,
    pub value: u32,
}

/// A move after normalization, with the host-only text fields kept alongside
/// the calculator's [`MoveDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedMove {
    pub pp: PowerPoints,
    pub range: String,
    pub effect: String,
    pub definition: MoveDefinition,
}

impl PrepareData for MoveData {
    type Prepared = PreparedMove;

    fn prepare(&self, config: &RulesConfig) -> PreparedMove {
        let defaults = &config.moves;

        let pp_raw = self.pp.clone().unwrap_or_default();
        let pp_max = num(&pp_raw.max, defaults.pp as f64).max(0.0);
        let pp_value = clamp_num(num(&pp_raw.value, pp_max), 0.0, pp_max);

        let category = MoveCategory::parse(&text(&self.category)).unwrap_or_default();

        let extra_raw = self.extra_rolls.clone().unwrap_or_default();
        let extra_rolls = ExtraRollsConfig {
            enabled: truthy(&extra_raw.enabled),
            dice_count: clamp_num(
                num(&extra_raw.count, 0.0).round(),
                0.0,
                defaults.max_extra_dice as f64,
            ) as u32,
            die: parse_die(&extra_raw.die, defaults.extra_rolls_die),
            flavor: text(&extra_raw.flavor),
        };

        let multi_raw = self.multi_attack.clone().unwrap_or_default();
        let multi_attack = MultiAttackConfig {
            enabled: truthy(&multi_raw.enabled),
            die: parse_die(&multi_raw.die, defaults.multi_attack_die),
        };

        let definition = MoveDefinition {
            name: text(&self.name),
            category,
            base_power: num(&self.base_damage, defaults.base_power).max(0.0),
            base_accuracy: int(&self.accuracy, defaults.accuracy),
            element: PokemonType::normalize(&text(&self.element)),
            crit_modifier: int(&self.crit_modifier, 0),
            extra_rolls,
            multi_attack,
        };

        PreparedMove {
            pp: PowerPoints {
                max: pp_max as u32,
                value: pp_value as u32,
            },
            range: text(&self.range),
            effect: text(&self.effect),
            definition,
        }
    }
}

impl PreparedMove {
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn has_pp(&self) -> bool {
        self.pp.value > 0
    }

    /// PP after one use, never below zero.
    pub fn pp_after_use(&self) -> u32 {
        self.pp.value.saturating_sub(1)
    }

    /// The move with PP refilled to its maximum.
    pub fn restored(&self) -> PreparedMove {
        let mut move_ = self.clone();
        move_.pp.value = move_.pp.max;
        move_
    }
}

fn parse_die(value: &Value, default: DieFaces) -> DieFaces {
    let parsed = match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|faces| u32::try_from(faces).ok())
            .and_then(DieFaces::from_faces),
        Value::String(s) => DieFaces::parse(s),
        _ => None,
    };
    parsed.unwrap_or(default)
}
