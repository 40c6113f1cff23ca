use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    #[default]
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "physical"),
            MoveCategory::Special => write!(f, "special"),
            MoveCategory::Status => write!(f, "status"),
        }
    }
}

impl MoveCategory {
    /// Parse a stored category; anything unrecognised is `None`.
    pub fn parse(raw: &str) -> Option<MoveCategory> {
        match raw.trim().to_lowercase().as_str() {
            "physical" => Some(MoveCategory::Physical),
            "special" => Some(MoveCategory::Special),
            "status" => Some(MoveCategory::Status),
            _ => None,
        }
    }

    pub fn deals_damage(self) -> bool {
        !matches!(self, MoveCategory::Status)
    }
}

/// The die sizes a move may configure for extra rolls or multi-attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum DieFaces {
    D2,
    D3,
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl fmt::Display for DieFaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces())
    }
}

impl DieFaces {
    pub fn faces(self) -> u32 {
        match self {
            DieFaces::D2 => 2,
            DieFaces::D3 => 3,
            DieFaces::D4 => 4,
            DieFaces::D6 => 6,
            DieFaces::D8 => 8,
            DieFaces::D10 => 10,
            DieFaces::D12 => 12,
            DieFaces::D20 => 20,
            DieFaces::D100 => 100,
        }
    }

    pub fn from_faces(faces: u32) -> Option<DieFaces> {
        DieFaces::iter().find(|d| d.faces() == faces)
    }

    /// Parse strings such as "d4", "1d4", "D20" or a bare "6".
    /// Only single-die notations of an allowed size are accepted.
    pub fn parse(raw: &str) -> Option<DieFaces> {
        let input = raw.trim().to_lowercase();
        let faces = match input.find('d') {
            Some(pos) => {
                let count = &input[..pos];
                if !(count.is_empty() || count == "1") {
                    return None;
                }
                &input[pos + 1..]
            }
            None => input.as_str(),
        };
        faces.parse::<u32>().ok().and_then(DieFaces::from_faces)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRollsConfig {
    pub enabled: bool,
    pub dice_count: u32,
    pub die: DieFaces,
    pub flavor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAttackConfig {
    pub enabled: bool,
    pub die: DieFaces,
}

/// A move as the calculator sees it, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDefinition {
    pub name: String,
    pub category: MoveCategory,
    pub base_power: f64,
    pub base_accuracy: i32,
    pub element: Option<PokemonType>,
    pub crit_modifier: i32,
    pub extra_rolls: ExtraRollsConfig,
    pub multi_attack: MultiAttackConfig,
}
