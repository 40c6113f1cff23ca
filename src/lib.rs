//! Explorers of Fate Combat Calculator
//!
//! Resolves move usage for the Explorers of Fate tabletop rules: accuracy and
//! critical checks on a shared d100, type effectiveness, the modifier-driven
//! damage pipeline, multi-hit chains and extra dice. Raw host records are
//! normalized into typed values first; randomness comes from an injected
//! die roller so every resolution can be replayed.

// --- MODULE DECLARATIONS ---
pub mod actor;
pub mod battle;
pub mod config;
pub mod consumables;
pub mod dice;
pub mod errors;
pub mod move_data;
pub mod prepare;
pub mod scenario;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    // Combatants & Moves
    CombatantSnapshot,
    // Modifiers
    DamageModifier,
    DamageModifierSet,
    DieFaces,
    ExtraRollsConfig,
    Matchup,
    ModifierOp,
    MoveCategory,
    MoveDefinition,
    MultiAttackConfig,
    // Types
    PokemonType,
};

// --- From this crate's modules (`src/`) ---

// Calculator entry points.
pub use battle::checks::{resolve_accuracy, resolve_critical, resolve_skill_check, SkillCheckMode};
pub use battle::damage::{compute_damage, damage_breakdown, DamageBreakdown};
pub use battle::effectiveness::{effectiveness, has_stab, TypeEffectiveness};
pub use battle::resolution::{
    resolve_move, use_move, DamageOptions, FixedPrompt, ModifierPrompt, Resolution,
    ResolutionOutcome, SituationalInputs,
};

// Records and their normalized forms.
pub use actor::{initiative, ActorData, PreparedActor, Skill};
pub use consumables::{apply_permanent_effects, consume, ConsumableData, PreparedConsumable};
pub use move_data::{MoveData, PreparedMove};
pub use prepare::PrepareData;

// Configuration, dice and errors.
pub use config::RulesConfig;
pub use dice::{DieRoller, RandomRoller, ScriptedRolls};
pub use errors::{ConfigError, ScenarioError};
pub use scenario::Scenario;
