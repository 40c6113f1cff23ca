use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModifierOp {
    #[default]
    Add,
    Multiply,
    Divide,
}

impl fmt::Display for ModifierOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierOp::Add => write!(f, "+"),
            ModifierOp::Multiply => write!(f, "×"),
            ModifierOp::Divide => write!(f, "÷"),
        }
    }
}

impl ModifierOp {
    /// Accepts the symbols used by the modifier prompt as well as words.
    pub fn parse(raw: &str) -> Option<ModifierOp> {
        match raw.trim().to_lowercase().as_str() {
            "+" | "add" => Some(ModifierOp::Add),
            "*" | "x" | "×" | "multiply" => Some(ModifierOp::Multiply),
            "/" | "÷" | "divide" => Some(ModifierOp::Divide),
            _ => None,
        }
    }
}

/// One situational adjustment to a running damage value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DamageModifier {
    pub op: ModifierOp,
    pub value: f64,
}

impl fmt::Display for DamageModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.value)
    }
}

impl DamageModifier {
    pub fn new(op: ModifierOp, value: f64) -> Self {
        Self { op, value }
    }

    pub fn add(value: f64) -> Self {
        Self::new(ModifierOp::Add, value)
    }

    pub fn multiply(value: f64) -> Self {
        Self::new(ModifierOp::Multiply, value)
    }

    pub fn divide(value: f64) -> Self {
        Self::new(ModifierOp::Divide, value)
    }

    /// Build from prompt input. An unknown operator or a non-finite value
    /// yields the identity modifier.
    pub fn parse(op: &str, value: f64) -> Self {
        match ModifierOp::parse(op) {
            Some(op) if value.is_finite() => Self::new(op, value),
            _ => Self::default(),
        }
    }

    /// Apply to a running value. A zero value leaves `x` unchanged for every
    /// operator, so multiply-by-zero never zeroes damage.
    pub fn apply(&self, x: f64) -> f64 {
        if self.value == 0.0 || !self.value.is_finite() {
            return x;
        }
        match self.op {
            ModifierOp::Add => x + self.value,
            ModifierOp::Multiply => x * self.value,
            ModifierOp::Divide => x / self.value,
        }
    }
}

/// The five situational modifiers, applied at fixed points of the damage
/// pipeline: stat and ability before STAB, the rest after the critical bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DamageModifierSet {
    pub stat: DamageModifier,
    pub ability: DamageModifier,
    pub weather: DamageModifier,
    pub terrain: DamageModifier,
    pub enemy: DamageModifier,
}
