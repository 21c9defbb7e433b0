//! Morning flow content: mood check-in and need-based routine suggestion.
//!
//! The flow itself (mood -> affirmation -> need -> citation -> routine
//! preview) is sequenced by the host; this module only supplies the
//! content mappings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How the user feels this morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calme,
    Fragile,
    Determine,
    Enthousiaste,
}

impl Mood {
    pub const ALL: [Mood; 4] = [
        Mood::Calme,
        Mood::Fragile,
        Mood::Determine,
        Mood::Enthousiaste,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Mood::Calme => "calme",
            Mood::Fragile => "fragile",
            Mood::Determine => "determine",
            Mood::Enthousiaste => "enthousiaste",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Calme => "Calme",
            Mood::Fragile => "Fragile",
            Mood::Determine => "Déterminé",
            Mood::Enthousiaste => "Enthousiaste",
        }
    }

    /// Opening affirmation spoken to this mood.
    pub fn affirmation(&self) -> &'static str {
        match self {
            Mood::Calme => "La paix que tu ressens est ta force.\nElle t'appartient.",
            Mood::Fragile => "Ta fragilité est un acte de courage.\nElle dit que tu es vivant.",
            Mood::Determine => {
                "Cette énergie en toi est un feu clair.\nUtilise-la avec douceur."
            }
            Mood::Enthousiaste => {
                "Laisse cette joie te traverser.\nElle est le signal que tu es aligné."
            }
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "mood".into(),
                message: format!("unknown mood '{s}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_round_trips_through_id() {
        for mood in Mood::ALL {
            assert_eq!(mood.id().parse::<Mood>().unwrap(), mood);
        }
        assert!("grognon".parse::<Mood>().is_err());
    }

    #[test]
    fn every_mood_has_an_affirmation() {
        for mood in Mood::ALL {
            assert!(!mood.affirmation().is_empty());
        }
    }
}
