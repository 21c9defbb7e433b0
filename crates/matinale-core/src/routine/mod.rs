//! Routine and step model.
//!
//! A routine is an ordered sequence of timed steps representing a guided
//! self-care practice. Routines are edited in place (steps added, removed,
//! reordered, re-timed) and executed by [`crate::timer::RoutineEngine`].

mod presets;

pub use presets::default_routines;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Duration bounds for a single step, in minutes.
pub const MIN_STEP_MIN: u64 = 1;
pub const MAX_STEP_MIN: u64 = 60;

/// Icons offered for user-created routines.
pub const ICONS: [&str; 7] = ["◎", "☽", "△", "♢", "⟡", "○", "⊹"];

/// The need a routine, affirmation or quality speaks to. Doubles as the
/// content tag used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Need {
    Presence,
    Serenite,
    Focus,
    Emotions,
    Energie,
}

impl Need {
    pub const ALL: [Need; 5] = [
        Need::Presence,
        Need::Serenite,
        Need::Focus,
        Need::Emotions,
        Need::Energie,
    ];

    /// Stable identifier used in storage and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Need::Presence => "presence",
            Need::Serenite => "serenite",
            Need::Focus => "focus",
            Need::Emotions => "emotions",
            Need::Energie => "energie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Need::Presence => "Présence",
            Need::Serenite => "Sérénité",
            Need::Focus => "Focus",
            Need::Emotions => "Émotions",
            Need::Energie => "Énergie",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Need::Presence => "🌿",
            Need::Serenite => "🌊",
            Need::Focus => "🔥",
            Need::Emotions => "🧭",
            Need::Energie => "✨",
        }
    }

    /// Accent color used by hosts when rendering the tag.
    pub fn color(&self) -> &'static str {
        match self {
            Need::Presence => "#7aaa88",
            Need::Serenite => "#8aaab8",
            Need::Focus => "#c49a6a",
            Need::Emotions => "#b8889a",
            Need::Energie => "#c4a574",
        }
    }

    pub fn sub_label(&self) -> &'static str {
        match self {
            Need::Presence => "Revenir ici, dans le corps",
            Need::Serenite => "Apaiser, ralentir",
            Need::Focus => "Structurer, clarifier",
            Need::Emotions => "Traverser sans se noyer",
            Need::Energie => "Réveiller l'élan",
        }
    }

    /// Opening citation shown before a routine tagged with this need.
    pub fn citation(&self) -> &'static str {
        match self {
            Need::Presence => "Je suis présent ici et maintenant\ndans mon corps.",
            Need::Serenite => "Je prends ma place,\nje suis maître de mon temps.",
            Need::Focus => "La clarté naît du silence\net de l'intention.",
            Need::Emotions => "Ce que je ressens a le droit\nd'exister pleinement.",
            Need::Energie => "Ce qui est vivant en moi\na le droit de s'exprimer.",
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Need {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Need::ALL
            .into_iter()
            .find(|n| n.id() == s)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "need".into(),
                message: format!("unknown need '{s}'"),
            })
    }
}

/// A single timed activity within a routine.
///
/// Immutable during a run; only the engine's pointer into the sequence
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    /// Duration in minutes.
    pub duration_min: u64,
    #[serde(default)]
    pub description: String,
    /// Optional long-form instructional text.
    #[serde(default)]
    pub detail: Option<String>,
    /// Optional affirmation spoken during the step.
    #[serde(default)]
    pub affirmation: Option<String>,
    /// Optional quality labels the step cultivates.
    #[serde(default)]
    pub qualities: Vec<String>,
}

impl Step {
    pub fn new(name: impl Into<String>, duration_min: u64) -> Self {
        Self {
            name: name.into(),
            duration_min,
            description: String::new(),
            detail: None,
            affirmation: None,
            qualities: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Step duration in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self) -> u64 {
        self.duration_min.saturating_mul(60)
    }

    /// A freshly added, not-yet-named step.
    pub fn placeholder(duration_min: u64) -> Self {
        Self::new("Nouvelle étape", duration_min)
    }
}

/// Direction for reordering a step within its routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// An ordered sequence of timed steps with its surrounding content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub icon: String,
    pub name: String,
    #[serde(default)]
    pub need: Option<Need>,
    pub steps: Vec<Step>,
    /// Opening citation shown before the run.
    #[serde(default)]
    pub citation: Option<String>,
    /// Closing journal question shown after the run.
    #[serde(default)]
    pub question: Option<String>,
    /// User-created routines may be deleted; presets may not.
    #[serde(default)]
    pub custom: bool,
}

impl Routine {
    /// Create a user-owned routine with a single placeholder step.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            icon: ICONS[0].to_string(),
            name: name.into(),
            need: None,
            steps: vec![Step::placeholder(5)],
            citation: None,
            question: None,
            custom: true,
        }
    }

    pub fn total_duration_min(&self) -> u64 {
        self.steps.iter().map(|s| s.duration_min).sum()
    }

    pub fn total_duration_secs(&self) -> u64 {
        self.steps.iter().map(|s| s.duration_secs()).sum()
    }

    /// Cumulative minutes completed up to (but not including) `step_index`.
    pub fn cumulative_min(&self, step_index: usize) -> u64 {
        self.steps
            .iter()
            .take(step_index)
            .map(|s| s.duration_min)
            .sum()
    }

    // ── Step editing ─────────────────────────────────────────────────

    pub fn add_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Remove a step. A routine keeps at least one step.
    pub fn remove_step(&mut self, index: usize) -> Result<Step, ValidationError> {
        if self.steps.len() <= 1 {
            return Err(ValidationError::InvalidValue {
                field: "steps".into(),
                message: "a routine keeps at least one step".into(),
            });
        }
        self.check_index(index)?;
        Ok(self.steps.remove(index))
    }

    /// Swap a step with its neighbor in the given direction.
    pub fn move_step(
        &mut self,
        index: usize,
        direction: MoveDirection,
    ) -> Result<(), ValidationError> {
        self.check_index(index)?;
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => {
                let t = index + 1;
                (t < self.steps.len()).then_some(t)
            }
        };
        let target = target.ok_or_else(|| ValidationError::OutOfBounds {
            collection: "steps".into(),
            index,
            len: self.steps.len(),
        })?;
        self.steps.swap(index, target);
        Ok(())
    }

    /// Nudge a step's duration by `delta` minutes, clamped to
    /// `MIN_STEP_MIN..=MAX_STEP_MIN`. Returns the new duration.
    pub fn adjust_step_duration(
        &mut self,
        index: usize,
        delta: i64,
    ) -> Result<u64, ValidationError> {
        self.check_index(index)?;
        let step = &mut self.steps[index];
        let new_min = (step.duration_min as i64).saturating_add(delta);
        step.duration_min = new_min.clamp(MIN_STEP_MIN as i64, MAX_STEP_MIN as i64) as u64;
        Ok(step.duration_min)
    }

    /// Mutable access to a step for field edits.
    pub fn step_mut(&mut self, index: usize) -> Result<&mut Step, ValidationError> {
        self.check_index(index)?;
        Ok(&mut self.steps[index])
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.steps.len() {
            return Err(ValidationError::OutOfBounds {
                collection: "steps".into(),
                index,
                len: self.steps.len(),
            });
        }
        Ok(())
    }
}

/// The routine suggested for a need: the first routine tagged with it,
/// falling back to the first routine of the catalog.
pub fn routine_for_need(routines: &[Routine], need: Need) -> Option<&Routine> {
    routines
        .iter()
        .find(|r| r.need == Some(need))
        .or_else(|| routines.first())
}
