use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};

/// The combat-relevant stats of one participant at the moment a move resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CombatantSnapshot {
    pub attack: f64,
    pub sp_attack: f64,
    pub defense: f64,
    pub sp_defense: f64,
    pub speed: f64,
    /// Flat bonus added when the move shares one of the combatant's types.
    pub stab: f64,
    pub basic_attack: f64,
    /// Global modifier added to every accuracy threshold.
    pub accuracy_bonus: i32,
    pub crit_attack_mod: i32,
    pub crit_defense_mod: i32,
    pub types: [Option<PokemonType>; 2],
}

impl CombatantSnapshot {
    /// Both type slots with empties and duplicates removed.
    pub fn distinct_types(&self) -> Vec<PokemonType> {
        let mut out = Vec::with_capacity(2);
        for t in self.types.iter().flatten() {
            if !out.contains(t) {
                out.push(*t);
            }
        }
        out
    }
}
