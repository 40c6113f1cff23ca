use crate::dice::DieRoller;
use schema::DieFaces;
use serde::{Deserialize, Serialize};

/// One follow-up attempt of a multi-hit move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitAttempt {
    pub roll: u32,
    pub hit: bool,
    pub critical: bool,
    /// `None` for the miss that ends the chain.
    pub damage_dealt: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiHitOutcome {
    pub die: DieFaces,
    /// Result of the count roll: how many follow-up attempts were allowed.
    pub attempts_rolled: u32,
    pub hit_count: u32,
    pub entries: Vec<HitAttempt>,
    pub total_damage: u32,
    /// True when a miss broke the chain.
    pub stopped_early: bool,
}

/// Roll the number of follow-up attempts on `die`, then attempt each in
/// turn with a fresh check roll. The chain ends at the first miss. Each hit
/// deals the flat `per_hit_damage`; modifiers are never reapplied.
pub fn resolve_multi_hit(
    die: DieFaces,
    check_die: u32,
    accuracy_threshold: i32,
    crit_threshold: i32,
    per_hit_damage: u32,
    roller: &mut dyn DieRoller,
) -> MultiHitOutcome {
    let attempts_rolled = roller.roll(die.faces(), "multi-hit count");
    let mut outcome = MultiHitOutcome {
        die,
        attempts_rolled,
        hit_count: 0,
        entries: Vec::with_capacity(attempts_rolled as usize),
        total_damage: 0,
        stopped_early: false,
    };

    for attempt in 1..=attempts_rolled {
        let roll = roller.roll(check_die, "multi-hit accuracy");
        let hit = (roll as i64) < accuracy_threshold as i64;
        if !hit {
            tracing::debug!(attempt, roll, "multi-hit chain broken");
            outcome.entries.push(HitAttempt {
                roll,
                hit: false,
                critical: false,
                damage_dealt: None,
            });
            outcome.stopped_early = true;
            break;
        }
        let critical = (roll as i64) < crit_threshold as i64;
        outcome.entries.push(HitAttempt {
            roll,
            hit: true,
            critical,
            damage_dealt: Some(per_hit_damage),
        });
        outcome.hit_count += 1;
        outcome.total_damage = outcome.total_damage.saturating_add(per_hit_damage);
    }

    outcome
}

/// Informational dice pool rolled alongside a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRollsOutcome {
    pub die: DieFaces,
    pub rolls: Vec<u32>,
    pub total: u32,
    pub flavor: String,
}

pub fn resolve_extra_rolls(
    dice_count: u32,
    die: DieFaces,
    flavor: &str,
    roller: &mut dyn DieRoller,
) -> ExtraRollsOutcome {
    let rolls: Vec<u32> = (0..dice_count)
        .map(|_| roller.roll(die.faces(), "extra roll"))
        .collect();
    ExtraRollsOutcome {
        die,
        total: rolls.iter().fold(0u32, |acc, r| acc.saturating_add(*r)),
        rolls,
        flavor: flavor.to_string(),
    }
}
