use serde::{Deserialize, Serialize};

/// Threshold a d100 roll must stay under for the move to land.
pub fn accuracy_threshold(base_accuracy: i32, situational_bonus: i32, global_bonus: i32) -> i32 {
    base_accuracy
        .saturating_add(situational_bonus)
        .saturating_add(global_bonus)
}

/// A roll strictly below the threshold hits; equal or above misses.
/// The threshold is not clamped here.
pub fn resolve_accuracy(
    base_accuracy: i32,
    situational_bonus: i32,
    global_bonus: i32,
    roll: u32,
) -> bool {
    (roll as i64) < accuracy_threshold(base_accuracy, situational_bonus, global_bonus) as i64
}

/// Threshold for a critical: the base plus every signed modifier.
pub fn critical_threshold(
    base_threshold: i32,
    attacker_mod: i32,
    defender_mod: i32,
    move_mod: i32,
) -> i32 {
    base_threshold
        .saturating_add(attacker_mod)
        .saturating_add(defender_mod)
        .saturating_add(move_mod)
}

/// Critical iff the roll is strictly below the critical threshold. Callers
/// pass the same roll they used for accuracy.
pub fn resolve_critical(
    base_threshold: i32,
    attacker_mod: i32,
    defender_mod: i32,
    move_mod: i32,
    roll: u32,
) -> bool {
    (roll as i64) < critical_threshold(base_threshold, attacker_mod, defender_mod, move_mod) as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCheckMode {
    Normal,
    /// Halves the skill (rounded up) for a harder check.
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillCheck {
    pub mode: SkillCheckMode,
    pub skill_value: f64,
    pub threshold: f64,
    pub roll: u32,
    pub success: bool,
}

pub fn resolve_skill_check(skill_value: f64, mode: SkillCheckMode, roll: u32) -> SkillCheck {
    let skill_value = if skill_value.is_finite() { skill_value } else { 0.0 };
    let threshold = match mode {
        SkillCheckMode::Normal => skill_value,
        SkillCheckMode::Critical => (skill_value / 2.0).ceil(),
    };
    SkillCheck {
        mode,
        skill_value,
        threshold,
        roll,
        success: (roll as f64) < threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(49, true)]
    #[case(50, false)]
    #[case(51, false)]
    #[case(1, true)]
    fn test_accuracy_boundary(#[case] roll: u32, #[case] expected: bool) {
        assert_eq!(resolve_accuracy(50, 0, 0, roll), expected);
    }

    #[test]
    fn test_accuracy_sums_bonuses() {
        assert_eq!(accuracy_threshold(70, 10, -5), 75);
        assert!(resolve_accuracy(70, 10, -5, 74));
        assert!(!resolve_accuracy(70, 10, -5, 75));
        // No clamping: a threshold above 100 always hits a d100.
        assert!(resolve_accuracy(95, 20, 0, 100));
        assert!(!resolve_accuracy(-10, 0, 0, 1));
    }

    #[test]
    fn test_critical_threshold() {
        assert!(resolve_critical(10, 0, 0, 0, 9));
        assert!(!resolve_critical(10, 0, 0, 0, 10));
        assert_eq!(critical_threshold(10, 3, -2, 4), 15);
        assert!(resolve_critical(10, 3, -2, 4, 14));
        assert!(!resolve_critical(10, -5, -5, 0, 1));
    }

    #[test]
    fn test_skill_checks() {
        let normal = resolve_skill_check(45.0, SkillCheckMode::Normal, 44);
        assert!(normal.success);
        assert_eq!(normal.threshold, 45.0);

        let critical = resolve_skill_check(45.0, SkillCheckMode::Critical, 23);
        assert_eq!(critical.threshold, 23.0);
        assert!(!critical.success);
        assert!(resolve_skill_check(45.0, SkillCheckMode::Critical, 22).success);
        assert!(!resolve_skill_check(f64::NAN, SkillCheckMode::Normal, 1).success);
    }
}
