use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform die results. Every logical draw goes through one call,
/// and `reason` names the draw for logging.
pub trait DieRoller {
    /// Returns an integer in `[1, faces]`. A `faces` of 0 is treated as 1.
    fn roll(&mut self, faces: u32, reason: &str) -> u32;
}

/// Real dice backed by a seedable RNG.
pub struct RandomRoller {
    rng: StdRng,
}

impl RandomRoller {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DieRoller for RandomRoller {
    fn roll(&mut self, faces: u32, reason: &str) -> u32 {
        let outcome = self.rng.random_range(1..=faces.max(1));
        tracing::trace!(outcome, faces, reason, "rolled");
        outcome
    }
}

/// A fixed sequence of results, consumed in order.
///
/// Values outside `[1, faces]` are clamped into range. Once the sequence is
/// exhausted every draw returns `faces`, the worst result for a roll-under
/// check.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    outcomes: Vec<u32>,
    index: usize,
}

impl ScriptedRolls {
    pub fn new(outcomes: Vec<u32>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len().saturating_sub(self.index)
    }
}

impl DieRoller for ScriptedRolls {
    fn roll(&mut self, faces: u32, reason: &str) -> u32 {
        let faces = faces.max(1);
        let Some(&scripted) = self.outcomes.get(self.index) else {
            tracing::warn!(reason, faces, "scripted rolls exhausted, using die maximum");
            return faces;
        };
        self.index += 1;
        let outcome = scripted.clamp(1, faces);
        tracing::trace!(outcome, faces, reason, "consumed scripted roll");
        outcome
    }
}
