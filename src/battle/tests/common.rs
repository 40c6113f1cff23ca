use crate::battle::resolution::{DamageOptions, DamagePromptContext, ModifierPrompt};
use schema::{
    CombatantSnapshot, DieFaces, ExtraRollsConfig, MoveCategory, MoveDefinition,
    MultiAttackConfig, PokemonType,
};

/// A builder for combatant snapshots with every stat defaulting to zero.
///
/// # Example
/// ```ignore
/// let attacker = CombatantBuilder::new()
///     .attack(50.0)
///     .types(Some(PokemonType::Fire), None)
///     .build();
/// ```
#[derive(Default)]
pub struct CombatantBuilder {
    snapshot: CombatantSnapshot,
}

impl CombatantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attack(mut self, value: f64) -> Self {
        self.snapshot.attack = value;
        self
    }

    pub fn sp_attack(mut self, value: f64) -> Self {
        self.snapshot.sp_attack = value;
        self
    }

    pub fn defense(mut self, value: f64) -> Self {
        self.snapshot.defense = value;
        self
    }

    pub fn sp_defense(mut self, value: f64) -> Self {
        self.snapshot.sp_defense = value;
        self
    }

    pub fn stab(mut self, value: f64) -> Self {
        self.snapshot.stab = value;
        self
    }

    pub fn accuracy_bonus(mut self, value: i32) -> Self {
        self.snapshot.accuracy_bonus = value;
        self
    }

    pub fn crit_attack_mod(mut self, value: i32) -> Self {
        self.snapshot.crit_attack_mod = value;
        self
    }

    pub fn crit_defense_mod(mut self, value: i32) -> Self {
        self.snapshot.crit_defense_mod = value;
        self
    }

    pub fn types(mut self, first: Option<PokemonType>, second: Option<PokemonType>) -> Self {
        self.snapshot.types = [first, second];
        self
    }

    pub fn build(self) -> CombatantSnapshot {
        self.snapshot
    }
}

/// An untyped move that always hits a d100 below 100, with no extras.
pub fn test_move(category: MoveCategory, base_power: f64) -> MoveDefinition {
    MoveDefinition {
        name: "Test Move".to_string(),
        category,
        base_power,
        base_accuracy: 100,
        element: None,
        crit_modifier: 0,
        extra_rolls: ExtraRollsConfig {
            enabled: false,
            dice_count: 0,
            die: DieFaces::D6,
            flavor: String::new(),
        },
        multi_attack: MultiAttackConfig {
            enabled: false,
            die: DieFaces::D4,
        },
    }
}

/// A prompt that answers from fixed values and remembers what it was shown.
/// `None` answers act as a cancel.
pub struct ScriptedPrompt {
    pub accuracy_bonus: Option<i32>,
    pub damage: Option<DamageOptions>,
    pub accuracy_asked: usize,
    pub damage_contexts: Vec<DamagePromptContext>,
}

impl ScriptedPrompt {
    pub fn answering(accuracy_bonus: i32, damage: DamageOptions) -> Self {
        Self {
            accuracy_bonus: Some(accuracy_bonus),
            damage: Some(damage),
            accuracy_asked: 0,
            damage_contexts: Vec::new(),
        }
    }

    pub fn cancel_accuracy() -> Self {
        Self {
            accuracy_bonus: None,
            ..Self::answering(0, DamageOptions::default())
        }
    }

    pub fn cancel_damage() -> Self {
        Self {
            damage: None,
            ..Self::answering(0, DamageOptions::default())
        }
    }
}

impl ModifierPrompt for ScriptedPrompt {
    fn accuracy_bonus(&mut self, _move_name: &str) -> Option<i32> {
        self.accuracy_asked += 1;
        self.accuracy_bonus
    }

    fn damage_options(&mut self, context: &DamagePromptContext) -> Option<DamageOptions> {
        self.damage_contexts.push(context.clone());
        self.damage
    }
}
