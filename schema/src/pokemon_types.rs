use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The eighteen canonical elemental types. "No type" is modelled as
/// `Option::<PokemonType>::None` everywhere a type slot may be empty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter, EnumCount,
)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Label shown for an empty type slot.
pub const NO_TYPE_LABEL: &str = "Sin tipo";

/// How an attacking type fares against a single defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matchup {
    SuperEffective,
    NotVeryEffective,
    NoEffect,
    Neutral,
}

/// One row of the type chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMatchups {
    pub super_effective: &'static [PokemonType],
    pub not_very_effective: &'static [PokemonType],
    pub no_effect: &'static [PokemonType],
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PokemonType {
    /// Canonical label stored on actor and move records.
    pub fn label(self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fuego",
            PokemonType::Water => "Agua",
            PokemonType::Grass => "Planta",
            PokemonType::Electric => "Eléctrico",
            PokemonType::Ice => "Hielo",
            PokemonType::Fighting => "Lucha",
            PokemonType::Poison => "Veneno",
            PokemonType::Ground => "Tierra",
            PokemonType::Flying => "Volador",
            PokemonType::Psychic => "Psíquico",
            PokemonType::Bug => "Bicho",
            PokemonType::Rock => "Roca",
            PokemonType::Ghost => "Fantasma",
            PokemonType::Dragon => "Dragón",
            PokemonType::Dark => "Siniestro",
            PokemonType::Steel => "Acero",
            PokemonType::Fairy => "Hada",
        }
    }

    /// Match free text against the canonical labels, ignoring case and accents.
    /// Anything that does not match is "no type".
    pub fn normalize(raw: &str) -> Option<PokemonType> {
        let target = fold_for_match(raw.trim());
        if target.is_empty() {
            return None;
        }
        PokemonType::iter().find(|t| fold_for_match(t.label()) == target)
    }

    /// Ordinal position in the canonical list, 0..=17.
    pub fn index(self) -> usize {
        PokemonType::iter().position(|t| t == self).unwrap_or(0)
    }

    /// Inverse of [`PokemonType::index`]; out-of-range input is clamped.
    pub fn from_index(index: i64) -> PokemonType {
        let max = (PokemonType::COUNT - 1) as i64;
        let clamped = index.clamp(0, max) as usize;
        PokemonType::iter().nth(clamped).unwrap_or(PokemonType::Normal)
    }

    /// The static chart row for this attacking type.
    pub fn matchups(self) -> TypeMatchups {
        use PokemonType::*;

        let (super_effective, not_very_effective, no_effect): (
            &'static [PokemonType],
            &'static [PokemonType],
            &'static [PokemonType],
        ) = match self {
            Normal => (&[], &[Rock, Steel], &[Ghost]),
            Fire => (&[Grass, Ice, Bug, Steel], &[Fire, Water, Rock, Dragon], &[]),
            Water => (&[Fire, Ground, Rock], &[Water, Grass, Dragon], &[]),
            Grass => (
                &[Water, Ground, Rock],
                &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
                &[],
            ),
            Electric => (&[Water, Flying], &[Electric, Grass, Dragon], &[Ground]),
            Ice => (&[Grass, Ground, Flying, Dragon], &[Fire, Water, Ice, Steel], &[]),
            Fighting => (
                &[Normal, Ice, Rock, Dark, Steel],
                &[Poison, Flying, Psychic, Bug, Fairy],
                &[Ghost],
            ),
            Poison => (&[Grass, Fairy], &[Poison, Ground, Rock, Ghost], &[Steel]),
            Ground => (
                &[Fire, Electric, Poison, Rock, Steel],
                &[Grass, Bug],
                &[Flying],
            ),
            Flying => (&[Grass, Fighting, Bug], &[Electric, Rock, Steel], &[]),
            Psychic => (&[Fighting, Poison], &[Psychic, Steel], &[Dark]),
            Bug => (
                &[Grass, Psychic, Dark],
                &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
                &[],
            ),
            Rock => (&[Fire, Ice, Flying, Bug], &[Fighting, Ground, Steel], &[]),
            Ghost => (&[Psychic, Ghost], &[Dark], &[Normal]),
            Dragon => (&[Dragon], &[Steel], &[Fairy]),
            Dark => (&[Psychic, Ghost], &[Fighting, Dark, Fairy], &[]),
            Steel => (&[Ice, Rock, Fairy], &[Fire, Water, Electric, Steel], &[]),
            Fairy => (&[Fighting, Dragon, Dark], &[Fire, Poison, Steel], &[]),
        };

        TypeMatchups {
            super_effective,
            not_very_effective,
            no_effect,
        }
    }

    /// Classify `attacking` against a single `defending` type.
    /// Immunity is checked first.
    pub fn matchup(attacking: PokemonType, defending: PokemonType) -> Matchup {
        let row = attacking.matchups();
        if row.no_effect.contains(&defending) {
            Matchup::NoEffect
        } else if row.super_effective.contains(&defending) {
            Matchup::SuperEffective
        } else if row.not_very_effective.contains(&defending) {
            Matchup::NotVeryEffective
        } else {
            Matchup::Neutral
        }
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::matchup(attacking, defending) == Matchup::NoEffect
    }
}

/// Position of a type slot in the select-box option list, where slot 0 is
/// the "no type" entry and the canonical types follow in order.
pub fn type_option_index(value: Option<PokemonType>) -> usize {
    value.map_or(0, |t| t.index() + 1)
}

/// Inverse of [`type_option_index`], clamped to `[0, 18]`.
pub fn type_option_from_index(index: i64) -> Option<PokemonType> {
    let clamped = index.clamp(0, PokemonType::COUNT as i64);
    if clamped == 0 {
        None
    } else {
        Some(PokemonType::from_index(clamped - 1))
    }
}

/// Display label for an optional type slot.
pub fn type_label(value: Option<PokemonType>) -> &'static str {
    value.map_or(NO_TYPE_LABEL, PokemonType::label)
}

/// Lowercase and strip accents, for both precomposed letters and letters
/// followed by combining diacritical marks (U+0300..=U+036F).
fn fold_for_match(s: &str) -> String {
    s.chars()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
