use crate::config::RulesConfig;
use crate::prepare::{clamp_num, int, non_negative_round, num, text, PrepareData};
use schema::{CombatantSnapshot, PokemonType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Raw actor data as stored by the host. Every field is loosely typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActorData {
    pub name: Value,
    pub lvl: Value,
    pub attack: Value,
    pub sp_attack: Value,
    pub defense: Value,
    pub sp_defense: Value,
    pub speed: Value,
    pub stab: Value,
    #[serde(rename = "basicattack")]
    pub basic_attack: Value,
    pub accuracy_bonus: Value,
    pub crit_attack_mod: Value,
    pub crit_defense_mod: Value,
    pub belly: Value,
    pub lp: Value,
    pub type1: Value,
    pub type2: Value,
    pub pasiva: Value,
    pub destino: Value,
    pub leyenda: Value,
    pub background: Value,
    pub hp: Option<HpData>,
    pub experience: Option<ExperienceData>,
    pub skills: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HpData {
    pub max: Value,
    pub value: Value,
    pub temp: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceData {
    pub max: Value,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Athletics,
    Craft,
    Endurance,
    Finesse,
    Medicine,
    Perception,
    Performance,
    Persuasion,
    SpKnowledge,
    Stealth,
    Survival,
}

impl Skill {
    pub const ALL: [Skill; 11] = [
        Skill::Athletics,
        Skill::Craft,
        Skill::Endurance,
        Skill::Finesse,
        Skill::Medicine,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::SpKnowledge,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// Key used in stored actor data.
    pub fn key(self) -> &'static str {
        match self {
            Skill::Athletics => "athletics",
            Skill::Craft => "craft",
            Skill::Endurance => "endurance",
            Skill::Finesse => "finesse",
            Skill::Medicine => "medicine",
            Skill::Perception => "perception",
            Skill::Performance => "performance",
            Skill::Persuasion => "persuasion",
            Skill::SpKnowledge => "spKnowledge",
            Skill::Stealth => "stealth",
            Skill::Survival => "survival",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skill::SpKnowledge => write!(f, "Sp. Knowledge"),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitPoints {
    pub max: f64,
    pub value: f64,
    pub temp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub max: f64,
    pub value: f64,
}

/// An actor after normalization: finite numbers, clamped pools, canonical types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedActor {
    pub name: String,
    pub level: f64,
    pub hp: HitPoints,
    pub experience: Experience,
    pub belly: f64,
    pub lp: f64,
    pub combat: CombatantSnapshot,
    pub skills: BTreeMap<Skill, f64>,
    pub passive: String,
    pub destiny: String,
    pub legend: String,
    pub background: String,
}

impl PrepareData for ActorData {
    type Prepared = PreparedActor;

    fn prepare(&self, config: &RulesConfig) -> PreparedActor {
        let defaults = &config.actors;
        let level = num(&self.lvl, defaults.level);

        let hp_raw = self.hp.clone().unwrap_or_default();
        let hp_max = num(&hp_raw.max, defaults.hp);
        let hp_value = num(&hp_raw.value, hp_max);
        let hp = HitPoints {
            max: hp_max,
            value: clamp_num(hp_value, 0.0, hp_max),
            temp: non_negative_round(num(&hp_raw.temp, 0.0)),
        };

        let exp_raw = self.experience.clone().unwrap_or_default();
        let exp_max = (level * defaults.experience_per_level).max(0.0);
        let experience = Experience {
            max: exp_max,
            value: clamp_num(num(&exp_raw.value, 0.0), 0.0, exp_max),
        };

        let combat = CombatantSnapshot {
            attack: num(&self.attack, 0.0),
            sp_attack: num(&self.sp_attack, 0.0),
            defense: num(&self.defense, 0.0),
            sp_defense: num(&self.sp_defense, 0.0),
            speed: num(&self.speed, 0.0),
            stab: num(&self.stab, 0.0),
            basic_attack: num(&self.basic_attack, 0.0),
            accuracy_bonus: int(&self.accuracy_bonus, 0),
            crit_attack_mod: int(&self.crit_attack_mod, 0),
            crit_defense_mod: int(&self.crit_defense_mod, 0),
            types: [
                PokemonType::normalize(&text(&self.type1)),
                PokemonType::normalize(&text(&self.type2)),
            ],
        };

        let bounds = config.skills;
        let skills = Skill::ALL
            .iter()
            .map(|&skill| {
                let raw = self.skills.get(skill.key()).unwrap_or(&Value::Null);
                (skill, clamp_num(num(raw, bounds.min), bounds.min, bounds.max))
            })
            .collect();

        PreparedActor {
            name: text(&self.name),
            level,
            hp,
            experience,
            belly: num(&self.belly, defaults.belly),
            lp: num(&self.lp, 0.0),
            combat,
            skills,
            passive: text(&self.pasiva),
            destiny: text(&self.destino),
            legend: text(&self.leyenda),
            background: text(&self.background),
        }
    }
}

impl PreparedActor {
    pub fn snapshot(&self) -> &CombatantSnapshot {
        &self.combat
    }

    pub fn skill(&self, skill: Skill) -> f64 {
        self.skills.get(&skill).copied().unwrap_or(0.0)
    }

    /// The actor with HP refilled to its maximum.
    pub fn restored(&self) -> PreparedActor {
        let mut actor = self.clone();
        actor.hp.value = actor.hp.max.max(0.0);
        actor
    }
}

/// Initiative is the actor's speed; a missing actor rolls 0.
pub fn initiative(actor: Option<&PreparedActor>) -> f64 {
    actor.map_or(0.0, |a| a.combat.speed)
}
