use crate::battle::checks::{accuracy_threshold, critical_threshold};
use crate::battle::damage::{damage_breakdown, DamageBreakdown};
use crate::battle::effectiveness::{effectiveness, has_stab, TypeEffectiveness};
use crate::battle::multi_hit::{
    resolve_extra_rolls, resolve_multi_hit, ExtraRollsOutcome, MultiHitOutcome,
};
use crate::config::RulesConfig;
use crate::dice::DieRoller;
use crate::move_data::PreparedMove;
use schema::{CombatantSnapshot, DamageModifierSet, MoveCategory, MoveDefinition, PokemonType};
use serde::{Deserialize, Serialize};

/// Answers from the damage prompt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageOptions {
    pub modifiers: DamageModifierSet,
    /// Replaces the chart multiplier for every non-immune target when set.
    pub effectiveness_override: Option<f64>,
}

/// Situational inputs for a resolution that has already been prompted for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SituationalInputs {
    pub accuracy_bonus: i32,
    pub damage: DamageOptions,
}

/// What the damage prompt is shown before the user picks modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct DamagePromptContext {
    pub move_name: String,
    pub stab: bool,
    pub critical: bool,
}

/// Host-side source of situational modifiers. Returning `None` means the
/// user cancelled, which aborts the whole resolution.
pub trait ModifierPrompt {
    fn accuracy_bonus(&mut self, move_name: &str) -> Option<i32>;

    fn damage_options(&mut self, context: &DamagePromptContext) -> Option<DamageOptions>;
}

/// A prompt that always answers with the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedPrompt {
    pub inputs: SituationalInputs,
}

impl ModifierPrompt for FixedPrompt {
    fn accuracy_bonus(&mut self, _move_name: &str) -> Option<i32> {
        Some(self.inputs.accuracy_bonus)
    }

    fn damage_options(&mut self, _context: &DamagePromptContext) -> Option<DamageOptions> {
        Some(self.inputs.damage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetResult {
    pub index: usize,
    pub crit_threshold: i32,
    pub critical: bool,
    /// Chart result, reported even when an override was applied.
    pub effectiveness: TypeEffectiveness,
    /// Multiplier actually used for damage.
    pub effectiveness_multiplier: f64,
    /// `None` on a miss or for status moves.
    pub damage: Option<DamageBreakdown>,
}

impl TargetResult {
    pub fn final_damage(&self) -> Option<u32> {
        self.damage.map(|d| d.final_damage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub move_name: String,
    pub category: MoveCategory,
    pub element: Option<PokemonType>,
    pub base_accuracy: i32,
    pub accuracy_bonus: i32,
    pub accuracy_threshold: i32,
    /// Faces of the check die the roll was drawn on.
    pub check_die: u32,
    pub roll: u32,
    pub hit: bool,
    /// Critical against the primary target, or without defender modifiers
    /// when there are no targets.
    pub is_critical: bool,
    pub stab: bool,
    /// Multiplier against the primary target; 1 with no targets.
    pub effectiveness_multiplier: f64,
    /// Damage to the primary target, when damage applies.
    pub final_damage: Option<u32>,
    pub targets: Vec<TargetResult>,
    pub multi_hit: Option<MultiHitOutcome>,
    pub extra_rolls: Option<ExtraRollsOutcome>,
    /// PP left after this use, set by [`use_move`].
    pub pp_remaining: Option<u32>,
}

/// Result of a prompted move use.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Completed(ResolutionOutcome),
    /// A prompt was dismissed; nothing should be reported or persisted.
    Cancelled,
    /// The move has no PP left and was not used.
    NoPowerPoints,
}

/// Draw the shared check roll and resolve the move against every target.
pub fn resolve_move(
    config: &RulesConfig,
    move_: &MoveDefinition,
    attacker: &CombatantSnapshot,
    targets: &[CombatantSnapshot],
    inputs: &SituationalInputs,
    roller: &mut dyn DieRoller,
) -> ResolutionOutcome {
    let roll = roller.roll(config.check_die, "accuracy");
    resolve_with_roll(config, move_, attacker, targets, inputs, roll, roller)
}

/// Resolve with an already drawn check roll.
///
/// One roll decides hit or miss for the whole action. Critical, type
/// effectiveness and damage are then evaluated per target. Follow-up
/// multi-hit attempts and extra rolls draw from `roller` afterwards, in that
/// order.
pub fn resolve_with_roll(
    config: &RulesConfig,
    move_: &MoveDefinition,
    attacker: &CombatantSnapshot,
    targets: &[CombatantSnapshot],
    inputs: &SituationalInputs,
    roll: u32,
    roller: &mut dyn DieRoller,
) -> ResolutionOutcome {
    let threshold = accuracy_threshold(
        move_.base_accuracy,
        inputs.accuracy_bonus,
        attacker.accuracy_bonus,
    );
    let hit = (roll as i64) < threshold as i64;
    let stab = has_stab(move_.element, &attacker.types);
    let override_multiplier = inputs
        .damage
        .effectiveness_override
        .filter(|m| m.is_finite())
        .map(|m| m.max(0.0));

    let results: Vec<TargetResult> = targets
        .iter()
        .enumerate()
        .map(|(index, defender)| {
            let crit_threshold = critical_threshold(
                config.base_crit_threshold,
                attacker.crit_attack_mod,
                defender.crit_defense_mod,
                move_.crit_modifier,
            );
            let critical = (roll as i64) < crit_threshold as i64;
            let chart = effectiveness(move_.element, &defender.types);
            // Immunity holds even against an override.
            let multiplier = if chart.is_immune() {
                0.0
            } else {
                override_multiplier.unwrap_or(chart.multiplier)
            };
            let damage = if hit {
                damage_breakdown(
                    config,
                    move_,
                    attacker,
                    defender,
                    &inputs.damage.modifiers,
                    stab,
                    multiplier,
                    critical,
                )
            } else {
                None
            };
            TargetResult {
                index,
                crit_threshold,
                critical,
                effectiveness: chart,
                effectiveness_multiplier: multiplier,
                damage,
            }
        })
        .collect();

    let primary_crit_threshold = results.first().map_or_else(
        || {
            critical_threshold(
                config.base_crit_threshold,
                attacker.crit_attack_mod,
                0,
                move_.crit_modifier,
            )
        },
        |r| r.crit_threshold,
    );
    let is_critical = (roll as i64) < primary_crit_threshold as i64;
    let effectiveness_multiplier = results.first().map_or(1.0, |r| r.effectiveness_multiplier);
    let final_damage = results.first().and_then(TargetResult::final_damage);

    let multi_hit = (move_.multi_attack.enabled
        && hit
        && move_.category.deals_damage()
        && !targets.is_empty())
    .then(|| {
        let per_hit = move_.base_power.max(0.0).ceil() as u32;
        resolve_multi_hit(
            move_.multi_attack.die,
            config.check_die,
            threshold,
            primary_crit_threshold,
            per_hit,
            &mut *roller,
        )
    });

    let extra = &move_.extra_rolls;
    let dice_count = extra.dice_count.min(config.moves.max_extra_dice);
    let extra_rolls = (extra.enabled && dice_count > 0)
        .then(|| resolve_extra_rolls(dice_count, extra.die, &extra.flavor, &mut *roller));

    tracing::debug!(
        move_name = %move_.name,
        roll,
        threshold,
        hit,
        is_critical,
        targets = targets.len(),
        ?final_damage,
        "resolved move"
    );

    ResolutionOutcome {
        move_name: move_.name.clone(),
        category: move_.category,
        element: move_.element,
        base_accuracy: move_.base_accuracy,
        accuracy_bonus: inputs.accuracy_bonus,
        accuracy_threshold: threshold,
        check_die: config.check_die,
        roll,
        hit,
        is_critical,
        stab,
        effectiveness_multiplier,
        final_damage,
        targets: results,
        multi_hit,
        extra_rolls,
        pp_remaining: None,
    }
}

/// Use a move the way a player does from the sheet: check PP, ask for the
/// accuracy bonus, roll, ask for damage modifiers when the move can deal
/// damage, then resolve. Any cancelled prompt yields [`Resolution::Cancelled`].
pub fn use_move(
    config: &RulesConfig,
    move_: &PreparedMove,
    attacker: &CombatantSnapshot,
    targets: &[CombatantSnapshot],
    prompt: &mut dyn ModifierPrompt,
    roller: &mut dyn DieRoller,
) -> Resolution {
    if !move_.has_pp() {
        tracing::debug!(move_name = move_.name(), "no PP left");
        return Resolution::NoPowerPoints;
    }

    let Some(accuracy_bonus) = prompt.accuracy_bonus(move_.name()) else {
        tracing::debug!(move_name = move_.name(), "accuracy prompt cancelled");
        return Resolution::Cancelled;
    };

    let definition = &move_.definition;
    let roll = roller.roll(config.check_die, "accuracy");
    let threshold = accuracy_threshold(
        definition.base_accuracy,
        accuracy_bonus,
        attacker.accuracy_bonus,
    );
    let hit = (roll as i64) < threshold as i64;

    let mut damage = DamageOptions::default();
    if hit && definition.category.deals_damage() && !targets.is_empty() {
        let crit_threshold = critical_threshold(
            config.base_crit_threshold,
            attacker.crit_attack_mod,
            targets[0].crit_defense_mod,
            definition.crit_modifier,
        );
        let context = DamagePromptContext {
            move_name: definition.name.clone(),
            stab: has_stab(definition.element, &attacker.types),
            critical: (roll as i64) < crit_threshold as i64,
        };
        match prompt.damage_options(&context) {
            Some(options) => damage = options,
            None => {
                tracing::debug!(move_name = move_.name(), "damage prompt cancelled");
                return Resolution::Cancelled;
            }
        }
    }

    let inputs = SituationalInputs {
        accuracy_bonus,
        damage,
    };
    let mut outcome = resolve_with_roll(config, definition, attacker, targets, &inputs, roll, roller);
    outcome.pp_remaining = Some(move_.pp_after_use());
    Resolution::Completed(outcome)
}
