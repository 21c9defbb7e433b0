//! Affirmations and qualities: tagged, favoritable content collections.
//!
//! Preset items ship with the application and cannot be edited or
//! deleted; user items carry uuid ids and full CRUD.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routine::Need;

/// A short first-person sentence the user returns to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Affirmation {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<Need>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub preset: bool,
}

impl Affirmation {
    pub fn user(text: impl Into<String>, tags: Vec<Need>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            tags,
            favorite: false,
            preset: false,
        }
    }

    /// Toggle membership of `need` in the tag list.
    pub fn toggle_tag(&mut self, need: Need) {
        toggle(&mut self.tags, need);
    }
}

/// A personal quality the user cultivates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quality {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Need>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub preset: bool,
}

impl Quality {
    pub fn user(name: impl Into<String>, tags: Vec<Need>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            tags,
            favorite: false,
            preset: false,
        }
    }

    pub fn toggle_tag(&mut self, need: Need) {
        toggle(&mut self.tags, need);
    }
}

fn toggle(tags: &mut Vec<Need>, need: Need) {
    if let Some(pos) = tags.iter().position(|t| *t == need) {
        tags.remove(pos);
    } else {
        tags.push(need);
    }
}

fn preset_affirmation(id: &str, text: &str, tags: &[Need], favorite: bool) -> Affirmation {
    Affirmation {
        id: id.into(),
        text: text.into(),
        tags: tags.to_vec(),
        favorite,
        preset: true,
    }
}

fn preset_quality(id: &str, name: &str, tags: &[Need], favorite: bool) -> Quality {
    Quality {
        id: id.into(),
        name: name.into(),
        tags: tags.to_vec(),
        favorite,
        preset: true,
    }
}

/// The preset affirmation set, seeded on first run.
pub fn default_affirmations() -> Vec<Affirmation> {
    use Need::*;
    vec![
        preset_affirmation(
            "aff-01",
            "Je suis présent, je reviens à l'essentiel.",
            &[Focus, Presence],
            true,
        ),
        preset_affirmation(
            "aff-02",
            "Je n'ai pas besoin de chercher à être, je suis.",
            &[Presence],
            true,
        ),
        preset_affirmation(
            "aff-03",
            "J'accueille mes émotions sans les bloquer.",
            &[Emotions],
            false,
        ),
        preset_affirmation(
            "aff-04",
            "Ce qui est vivant en moi a le droit de s'exprimer.",
            &[Energie],
            false,
        ),
        preset_affirmation(
            "aff-05",
            "Je suis en sécurité à l'intérieur de moi-même.",
            &[Serenite],
            true,
        ),
        preset_affirmation(
            "aff-06",
            "Je peux avancer avec clarté et engagement.",
            &[Focus],
            false,
        ),
        preset_affirmation(
            "aff-07",
            "Je n'ai rien à prouver, je suis assez.",
            &[Presence],
            true,
        ),
        preset_affirmation(
            "aff-08",
            "Je peux laisser être ce qui me traverse.",
            &[Emotions, Serenite],
            false,
        ),
    ]
}

/// The preset quality set, seeded on first run.
pub fn default_qualities() -> Vec<Quality> {
    use Need::*;
    vec![
        preset_quality("qual-01", "Clarté", &[Focus], true),
        preset_quality("qual-02", "Discernement", &[Focus, Serenite], false),
        preset_quality("qual-03", "Stabilité", &[Focus, Serenite, Emotions], false),
        preset_quality("qual-04", "Présence", &[Presence, Emotions], true),
        preset_quality("qual-05", "Ancrage", &[Presence], false),
        preset_quality("qual-06", "Simplicité", &[Presence], false),
        preset_quality("qual-07", "Sensibilité", &[Emotions], false),
        preset_quality("qual-08", "Courage", &[Emotions], true),
        preset_quality("qual-09", "Douceur", &[Serenite, Emotions], false),
        preset_quality("qual-10", "Vitalité", &[Energie], true),
        preset_quality("qual-11", "Créativité", &[Energie], false),
        preset_quality("qual-12", "Joie", &[Energie], false),
        preset_quality("qual-13", "Patience", &[Serenite], false),
        preset_quality("qual-14", "Confiance", &[Serenite, Focus], false),
        preset_quality("qual-15", "Lucidité", &[Emotions, Focus], false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_counts() {
        assert_eq!(default_affirmations().len(), 8);
        assert_eq!(default_qualities().len(), 15);
    }

    #[test]
    fn presets_are_marked_preset() {
        assert!(default_affirmations().iter().all(|a| a.preset));
        assert!(default_qualities().iter().all(|q| q.preset));
    }

    #[test]
    fn user_items_get_distinct_ids() {
        let a = Affirmation::user("Je respire.", vec![Need::Presence]);
        let b = Affirmation::user("Je respire.", vec![Need::Presence]);
        assert_ne!(a.id, b.id);
        assert!(!a.preset);
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut q = Quality::user("Calme", vec![]);
        q.toggle_tag(Need::Serenite);
        assert_eq!(q.tags, vec![Need::Serenite]);
        q.toggle_tag(Need::Serenite);
        assert!(q.tags.is_empty());
    }
}
