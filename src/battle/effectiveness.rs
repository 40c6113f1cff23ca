use schema::{Matchup, PokemonType};
use serde::{Deserialize, Serialize};

/// Combined matchup of one attacking type against up to two defending types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeEffectiveness {
    pub multiplier: f64,
    pub super_effective_count: u8,
    pub not_very_effective_count: u8,
    pub immune_count: u8,
}

impl TypeEffectiveness {
    pub const NEUTRAL: TypeEffectiveness = TypeEffectiveness {
        multiplier: 1.0,
        super_effective_count: 0,
        not_very_effective_count: 0,
        immune_count: 0,
    };

    pub fn is_immune(&self) -> bool {
        self.multiplier == 0.0
    }
}

/// Resolve the multiplier for `attack` against `defenders`.
///
/// Immunity wins outright. Two resistances give 0.25 and two weaknesses give
/// 2; a single resistance or weakness gives 0.5 or 1.5; one of each cancels.
pub fn effectiveness(
    attack: Option<PokemonType>,
    defenders: &[Option<PokemonType>],
) -> TypeEffectiveness {
    let Some(attack) = attack else {
        return TypeEffectiveness::NEUTRAL;
    };

    let mut seen: Vec<PokemonType> = Vec::with_capacity(2);
    let mut result = TypeEffectiveness::NEUTRAL;
    for defending in defenders.iter().flatten() {
        if seen.contains(defending) {
            continue;
        }
        seen.push(*defending);
        match PokemonType::matchup(attack, *defending) {
            Matchup::NoEffect => result.immune_count += 1,
            Matchup::SuperEffective => result.super_effective_count += 1,
            Matchup::NotVeryEffective => result.not_very_effective_count += 1,
            Matchup::Neutral => {}
        }
    }

    let se = result.super_effective_count;
    let nve = result.not_very_effective_count;
    result.multiplier = if result.immune_count > 0 {
        0.0
    } else if nve >= 2 {
        0.25
    } else if se >= 2 {
        2.0
    } else if nve == 1 && se == 0 {
        0.5
    } else if se == 1 && nve == 0 {
        1.5
    } else {
        1.0
    };
    result
}

/// Same-type attack bonus applies when a typed move matches either of the
/// attacker's types.
pub fn has_stab(move_type: Option<PokemonType>, attacker_types: &[Option<PokemonType>; 2]) -> bool {
    match move_type {
        Some(t) => attacker_types.contains(&Some(t)),
        None => false,
    }
}
