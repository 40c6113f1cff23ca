//! Plain-text summary of a resolution, one line per step of the breakdown.

use crate::battle::resolution::{ResolutionOutcome, TargetResult};
use schema::type_label;
use std::fmt;

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Uses move: {}", self.move_name)?;
        match self.element {
            Some(_) => writeln!(
                f,
                "Type: {} · Category: {}",
                type_label(self.element),
                self.category
            )?,
            None => writeln!(f, "Category: {}", self.category)?,
        }
        write!(f, "Base accuracy: {}", self.base_accuracy)?;
        if self.accuracy_bonus != 0 {
            write!(f, " (bonus {:+})", self.accuracy_bonus)?;
        }
        writeln!(f)?;
        writeln!(f, "Final threshold: {}", self.accuracy_threshold)?;
        writeln!(f, "d{}: {}", self.check_die, self.roll)?;
        write!(f, "Check: {}", if self.hit { "HIT" } else { "MISS" })?;
        if self.is_critical {
            write!(f, " · CRITICAL")?;
        }
        writeln!(f)?;

        for target in &self.targets {
            write_target(f, target, self.targets.len() > 1)?;
        }

        if let Some(multi) = &self.multi_hit {
            writeln!(
                f,
                "Multi-hit ({}): {} extra attempts",
                multi.die, multi.attempts_rolled
            )?;
            for (n, entry) in multi.entries.iter().enumerate() {
                match entry.damage_dealt {
                    Some(damage) => writeln!(
                        f,
                        "  #{} d{} {}: hit{} for {}",
                        n + 1,
                        self.check_die,
                        entry.roll,
                        if entry.critical { " (critical)" } else { "" },
                        damage
                    )?,
                    None => writeln!(
                        f,
                        "  #{} d{} {}: miss, chain broken",
                        n + 1,
                        self.check_die,
                        entry.roll
                    )?,
                }
            }
            writeln!(f, "Multi-hit damage: {}", multi.total_damage)?;
        }

        if let Some(extra) = &self.extra_rolls {
            let rolls: Vec<String> = extra.rolls.iter().map(u32::to_string).collect();
            write!(
                f,
                "Extra rolls {}{}: [{}] = {}",
                extra.rolls.len(),
                extra.die,
                rolls.join(", "),
                extra.total
            )?;
            if !extra.flavor.is_empty() {
                write!(f, " ({})", extra.flavor)?;
            }
            writeln!(f)?;
        }

        if let Some(pp) = self.pp_remaining {
            writeln!(f, "PP left: {}", pp)?;
        }
        Ok(())
    }
}

fn write_target(f: &mut fmt::Formatter<'_>, target: &TargetResult, numbered: bool) -> fmt::Result {
    if numbered {
        writeln!(f, "-- Target {} --", target.index + 1)?;
    }
    let Some(b) = &target.damage else {
        return Ok(());
    };
    writeln!(f, "Damage calculation")?;
    writeln!(f, "Base + attack stat ({}): {}", b.attack_stat, b.base)?;
    writeln!(f, "Stat bonus: {}", b.after_stat)?;
    write!(f, "Ability bonus: {}", b.after_ability)?;
    if b.stab_bonus != 0.0 {
        write!(f, " + STAB ({})", b.stab_bonus)?;
    }
    writeln!(f)?;
    writeln!(f, "Effectiveness: ×{}", b.effectiveness)?;
    if b.effectiveness == 0.0 {
        return writeln!(f, "Final damage: 0 (immune)");
    }
    writeln!(f, "Critical: {}", if b.critical { "yes" } else { "no" })?;
    writeln!(f, "Weather: {}", b.after_weather)?;
    writeln!(f, "Terrain: {}", b.after_terrain)?;
    writeln!(f, "Enemy: {}", b.after_enemy)?;
    writeln!(f, "− defense: {}", b.defense_stat)?;
    writeln!(f, "Final damage: {} (rounded up, minimum 1)", b.final_damage)
}

#[cfg(test)]
mod tests {
    use crate::battle::resolution::{resolve_move, SituationalInputs};
    use crate::battle::tests::common::{test_move, CombatantBuilder};
    use crate::config::RulesConfig;
    use crate::dice::ScriptedRolls;
    use schema::{MoveCategory, PokemonType};

    #[test]
    fn test_report_lists_breakdown() {
        let attacker = CombatantBuilder::new().attack(50.0).stab(10.0).build();
        let defender = CombatantBuilder::new().defense(15.0).build();
        let mut move_ = test_move(MoveCategory::Physical, 20.0);
        move_.name = "Placaje".to_string();
        let outcome = resolve_move(
            &RulesConfig::default(),
            &move_,
            &attacker,
            &[defender],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![40]),
        );
        let text = outcome.to_string();
        assert!(text.contains("Uses move: Placaje"));
        assert!(text.contains("Check: HIT"));
        assert!(text.contains("Final damage: 55"));
        assert!(!text.contains("CRITICAL"));
    }

    #[test]
    fn test_report_immune_target() {
        let attacker = CombatantBuilder::new().attack(50.0).build();
        let defender = CombatantBuilder::new()
            .types(Some(PokemonType::Ghost), None)
            .build();
        let mut move_ = test_move(MoveCategory::Physical, 20.0);
        move_.element = Some(PokemonType::Normal);
        let outcome = resolve_move(
            &RulesConfig::default(),
            &move_,
            &attacker,
            &[defender],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![5]),
        );
        let text = outcome.to_string();
        assert!(text.contains("Type: Normal"));
        assert!(text.contains("Final damage: 0 (immune)"));
    }

    #[test]
    fn test_report_names_configured_check_die() {
        let config = RulesConfig {
            check_die: 20,
            ..RulesConfig::default()
        };
        let mut move_ = test_move(MoveCategory::Physical, 5.0);
        move_.base_accuracy = 15;
        move_.multi_attack.enabled = true;
        let outcome = resolve_move(
            &config,
            &move_,
            &CombatantBuilder::new().build(),
            &[CombatantBuilder::new().build()],
            &SituationalInputs::default(),
            &mut ScriptedRolls::new(vec![12, 1, 20]),
        );
        let text = outcome.to_string();
        assert!(text.contains("d20: 12"));
        assert!(text.contains("#1 d20 20: miss"));
        assert!(!text.contains("d100"));
    }
}
