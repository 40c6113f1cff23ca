//! Combat scenario files: an attacker with its move list, the move to use,
//! the targets and the situational answers a player would give.
//!
//! Scenarios are RON with `implicit_some` enabled, so optional sub-records
//! such as `hp` or `pp` can be written without `Some(...)`.

use crate::actor::{ActorData, PreparedActor};
use crate::battle::resolution::{use_move, FixedPrompt, Resolution, SituationalInputs};
use crate::config::RulesConfig;
use crate::dice::DieRoller;
use crate::errors::{ScenarioError, ScenarioResult};
use crate::move_data::{MoveData, PreparedMove};
use crate::prepare::PrepareData;
use ron::extensions::Extensions;
use schema::CombatantSnapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub attacker: ActorData,
    pub moves: Vec<MoveData>,
    /// Name of the move to use, matched case-insensitively.
    pub selected_move: String,
    pub targets: Vec<ActorData>,
    pub inputs: SituationalInputs,
    /// Seed for reproducible dice; OS entropy when absent.
    pub seed: Option<u64>,
}

/// A scenario with every record normalized and the move resolved.
#[derive(Debug, Clone)]
pub struct PreparedScenario {
    pub attacker: PreparedActor,
    pub selected: PreparedMove,
    pub targets: Vec<PreparedActor>,
    pub inputs: SituationalInputs,
}

impl Scenario {
    pub fn from_ron(content: &str) -> ScenarioResult<Self> {
        let scenario = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(content)?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_ron(&content)?;
        tracing::debug!(
            path = %path.display(),
            moves = scenario.moves.len(),
            targets = scenario.targets.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    pub fn prepare(&self, config: &RulesConfig) -> ScenarioResult<PreparedScenario> {
        let wanted = self.selected_move.trim().to_lowercase();
        let selected = self
            .moves
            .iter()
            .map(|m| m.prepare(config))
            .find(|m| m.name().trim().to_lowercase() == wanted)
            .ok_or_else(|| ScenarioError::UnknownMove(self.selected_move.clone()))?;

        Ok(PreparedScenario {
            attacker: self.attacker.prepare(config),
            selected,
            targets: self.targets.iter().map(|t| t.prepare(config)).collect(),
            inputs: self.inputs,
        })
    }
}

impl PreparedScenario {
    /// Use the selected move, answering every prompt from the scenario inputs.
    pub fn run(&self, config: &RulesConfig, roller: &mut dyn DieRoller) -> Resolution {
        let targets: Vec<CombatantSnapshot> =
            self.targets.iter().map(|t| t.snapshot().clone()).collect();
        let mut prompt = FixedPrompt {
            inputs: self.inputs,
        };
        use_move(
            config,
            &self.selected,
            self.attacker.snapshot(),
            &targets,
            &mut prompt,
            roller,
        )
    }
}
