// Explorers of Fate Schema - Shared type definitions
// Value types consumed by the combat calculator: the elemental type chart,
// move definitions, combatant snapshots and situational damage modifiers.

pub use combatant::*;
pub use modifiers::*;
pub use move_types::*;
pub use pokemon_types::*;

pub mod combatant;
pub mod modifiers;
pub mod move_types;
pub mod pokemon_types;
