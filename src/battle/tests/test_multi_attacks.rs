#[cfg(test)]
mod tests {
    use crate::battle::resolution::{resolve_move, SituationalInputs};
    use crate::battle::tests::common::{test_move, CombatantBuilder};
    use crate::config::RulesConfig;
    use crate::dice::ScriptedRolls;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{CombatantSnapshot, DieFaces, MoveCategory, MoveDefinition};

    fn furia(die: DieFaces) -> MoveDefinition {
        let mut move_ = test_move(MoveCategory::Physical, 12.5);
        move_.name = "Golpes Furia".to_string();
        move_.base_accuracy = 80;
        move_.multi_attack.enabled = true;
        move_.multi_attack.die = die;
        move_
    }

    #[rstest]
    #[case(
        "chain broken on the third attempt",
        // accuracy, count, then one check per follow-up attempt
        vec![20, 4, 10, 30, 85],
        4, 2, true
    )]
    #[case("every attempt lands", vec![20, 2, 10, 30], 2, 2, false)]
    #[case("first attempt misses", vec![20, 3, 95], 3, 0, true)]
    fn test_follow_up_hits(
        #[case] desc: &str,
        #[case] rolls: Vec<u32>,
        #[case] attempts: u32,
        #[case] hits: u32,
        #[case] stopped_early: bool,
    ) {
        let attacker = CombatantBuilder::new().attack(40.0).build();
        let mut rolls = ScriptedRolls::new(rolls);

        let outcome = resolve_move(
            &RulesConfig::default(),
            &furia(DieFaces::D4),
            &attacker,
            &[CombatantSnapshot::default()],
            &SituationalInputs::default(),
            &mut rolls,
        );

        let multi = outcome.multi_hit.expect("multi-hit should resolve on a hit");
        assert_eq!(multi.attempts_rolled, attempts, "{}", desc);
        assert_eq!(multi.hit_count, hits, "{}", desc);
        // Flat ceil(12.5) per follow-up hit.
        assert_eq!(multi.total_damage, hits * 13, "{}", desc);
        assert_eq!(multi.stopped_early, stopped_early, "{}", desc);
        assert_eq!(rolls.remaining(), 0, "{}", desc);
    }

    #[test]
    fn test_miss_entry_is_logged() {
        let outcome = resolve_move(
            &RulesConfig::default(),
            &furia(DieFaces::D2),
            &CombatantSnapshot::default(),
            &[CombatantSnapshot::default()],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![20, 2, 5, 99]),
        );

        let multi = outcome.multi_hit.expect("multi-hit should resolve on a hit");
        assert_eq!(multi.entries.len(), 2);
        assert!(multi.entries[0].critical);
        assert_eq!(multi.entries[0].damage_dealt, Some(13));
        assert!(!multi.entries[1].hit);
        assert_eq!(multi.entries[1].damage_dealt, None);
    }

    #[rstest]
    #[case("missed initial check", MoveCategory::Physical, vec![90], 1)]
    #[case("status move", MoveCategory::Status, vec![20], 1)]
    #[case("no targets", MoveCategory::Physical, vec![20], 0)]
    fn test_no_follow_ups(
        #[case] desc: &str,
        #[case] category: MoveCategory,
        #[case] rolls: Vec<u32>,
        #[case] target_count: usize,
    ) {
        let mut move_ = furia(DieFaces::D4);
        move_.category = category;
        let mut rolls = ScriptedRolls::new(rolls);

        let outcome = resolve_move(
            &RulesConfig::default(),
            &move_,
            &CombatantSnapshot::default(),
            &vec![CombatantSnapshot::default(); target_count],
            &SituationalInputs::default(),
            &mut rolls,
        );

        assert_eq!(outcome.multi_hit, None, "{}", desc);
        assert_eq!(rolls.remaining(), 0, "{}", desc);
    }

    #[test]
    fn test_extra_rolls_after_follow_ups() {
        let mut move_ = furia(DieFaces::D2);
        move_.extra_rolls.enabled = true;
        move_.extra_rolls.dice_count = 3;
        move_.extra_rolls.die = DieFaces::D6;
        move_.extra_rolls.flavor = "quemadura".to_string();

        let outcome = resolve_move(
            &RulesConfig::default(),
            &move_,
            &CombatantSnapshot::default(),
            &[CombatantSnapshot::default()],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![20, 1, 30, 6, 2, 5]),
        );

        let multi = outcome.multi_hit.expect("multi-hit should resolve on a hit");
        assert_eq!(multi.hit_count, 1);
        let extra = outcome.extra_rolls.expect("extra rolls are enabled");
        assert_eq!(extra.rolls, vec![6, 2, 5]);
        assert_eq!(extra.total, 13);
        assert_eq!(extra.flavor, "quemadura");
    }

    #[test]
    fn test_extra_rolls_on_a_miss() {
        let mut move_ = test_move(MoveCategory::Status, 0.0);
        move_.base_accuracy = 10;
        move_.extra_rolls.enabled = true;
        move_.extra_rolls.dice_count = 2;
        move_.extra_rolls.die = DieFaces::D4;

        let outcome = resolve_move(
            &RulesConfig::default(),
            &move_,
            &CombatantSnapshot::default(),
            &[],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![50, 9, 3]),
        );

        assert!(!outcome.hit);
        // 9 is clamped to the d4 maximum.
        assert_eq!(outcome.extra_rolls.map(|e| e.rolls), Some(vec![4, 3]));
    }

    #[test]
    fn test_oversized_dice_count_is_bounded() {
        let mut move_ = test_move(MoveCategory::Status, 0.0);
        move_.extra_rolls.enabled = true;
        move_.extra_rolls.dice_count = 43_000_000;
        move_.extra_rolls.die = DieFaces::D100;

        // Exhausted scripted rolls answer with the die maximum.
        let outcome = resolve_move(
            &RulesConfig::default(),
            &move_,
            &CombatantSnapshot::default(),
            &[],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![50]),
        );

        let extra = outcome.extra_rolls.expect("extra rolls are enabled");
        assert_eq!(extra.rolls.len(), 100);
        assert_eq!(extra.total, 10_000);
    }

    #[test]
    fn test_zero_dice_count_skips_extra_rolls() {
        let mut move_ = test_move(MoveCategory::Physical, 10.0);
        move_.extra_rolls.enabled = true;

        let outcome = resolve_move(
            &RulesConfig::default(),
            &move_,
            &CombatantSnapshot::default(),
            &[CombatantSnapshot::default()],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![50]),
        );

        assert_eq!(outcome.extra_rolls, None);
    }
}
