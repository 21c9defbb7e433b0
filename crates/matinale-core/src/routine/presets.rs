//! Preset routine catalog, seeded into storage on first run.

use super::{Need, Routine, Step};

/// The five preset routines, one per need.
///
/// Preset ids are the need ids; they stay stable across reseeds so user
/// references (e.g. a persisted engine snapshot) keep resolving.
pub fn default_routines() -> Vec<Routine> {
    vec![
        Routine {
            id: "presence".into(),
            icon: "🌿".into(),
            name: "Présence".into(),
            need: Some(Need::Presence),
            steps: vec![
                Step::new("Méditation d'ancrage", 6).with_description("Attention sur les appuis"),
                Step::new("Respiration", 4).with_description("4 inspire / 6 expire"),
                Step::new("Mini méditation", 4).with_description("Conscience des sensations"),
                Step::new("Visualisation du chêne", 12)
                    .with_description("Racines, forêt, énergie"),
                Step::new("Douche consciente", 15).with_description("Eau tiède, présence"),
                Step {
                    affirmation: Some("Je n'ai rien à prouver, je suis assez.".into()),
                    qualities: vec!["Présence".into(), "Ancrage".into()],
                    ..Step::new("Affirmations", 5).with_description("Je suis assez")
                },
            ],
            citation: Some("Je suis présent ici et maintenant dans mon corps.".into()),
            question: Some("Qu'est-ce que je n'ai plus besoin d'être ?".into()),
            custom: false,
        },
        Routine {
            id: "serenite".into(),
            icon: "🌊".into(),
            name: "Sérénité".into(),
            need: Some(Need::Serenite),
            steps: vec![
                Step::new("Respiration apaisante", 5).with_description("5 inspire / 5 expire"),
                Step::new("Méditation sécurité", 7)
                    .with_description("Lieu sûr, image ressource"),
                Step::new("Mouvement doux", 12).with_description("Étirements, expire long"),
                Step::new("Douche réconfortante", 15).with_description("Eau chaude, soutien"),
                Step {
                    affirmation: Some("Je suis en sécurité à l'intérieur de moi-même.".into()),
                    qualities: vec!["Douceur".into(), "Confiance".into()],
                    ..Step::new("Affirmations", 5).with_description("Sécurité intérieure")
                },
            ],
            citation: Some("Je prends ma place, je suis maître de mon temps.".into()),
            question: Some("Qu'est-ce que j'accepte de lâcher ?".into()),
            custom: false,
        },
        Routine {
            id: "focus".into(),
            icon: "🔥".into(),
            name: "Focus".into(),
            need: Some(Need::Focus),
            steps: vec![
                Step::new("Méditation centrage", 5).with_description("Attention sur le souffle"),
                Step::new("Respiration focus", 4).with_description("Carrée 5-5-5-5"),
                Step::new("Sport dynamique", 20).with_description("Cardio doux"),
                Step::new("Douche dynamique", 15).with_description("Alternance chaud/froid"),
                Step {
                    affirmation: Some("Je peux avancer avec clarté et engagement.".into()),
                    qualities: vec!["Clarté".into(), "Discernement".into()],
                    ..Step::new("Affirmations", 5).with_description("Clarté et engagement")
                },
            ],
            citation: Some("La clarté naît du silence et de l'intention.".into()),
            question: Some("Qu'est-ce que je choisis avec clarté aujourd'hui ?".into()),
            custom: false,
        },
        Routine {
            id: "emotions".into(),
            icon: "🧭".into(),
            name: "Émotions".into(),
            need: Some(Need::Emotions),
            steps: vec![
                Step::new("Respiration consciente", 5).with_description("4 inspire / 6 expire"),
                Step::new("Méditation d'accueil", 7).with_description("Localiser l'émotion"),
                Step::new("Sport doux", 12).with_description("Étirements lents"),
                Step::new("Danse libre", 8).with_description("Ressentir"),
                Step::new("Douche douce", 15).with_description("Relâcher"),
                Step {
                    affirmation: Some("J'accueille mes émotions sans les bloquer.".into()),
                    qualities: vec!["Sensibilité".into(), "Courage".into()],
                    ..Step::new("Affirmations", 5).with_description("Laisser traverser")
                },
            ],
            citation: Some("Ce que je ressens a le droit d'exister pleinement.".into()),
            question: Some("Quelle émotion j'accueille aujourd'hui ?".into()),
            custom: false,
        },
        Routine {
            id: "energie".into(),
            icon: "✨".into(),
            name: "Énergie".into(),
            need: Some(Need::Energie),
            steps: vec![
                Step::new("Respiration ancrage", 4).with_description("Main sur ventre"),
                Step::new("Échauffement", 5).with_description("Mobilisation douce"),
                Step::new("Danse libre", 12).with_description("Sans performance"),
                Step::new("Respiration dynamique", 3).with_description("Rythme soutenu"),
            ],
            citation: Some("Ce qui est vivant en moi a le droit de s'exprimer.".into()),
            question: Some("Qu'est-ce qui me donne de l'élan ?".into()),
            custom: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_presets_one_per_need() {
        let routines = default_routines();
        assert_eq!(routines.len(), 5);
        for need in Need::ALL {
            assert!(routines.iter().any(|r| r.need == Some(need)));
        }
    }

    #[test]
    fn presets_are_not_deletable() {
        assert!(default_routines().iter().all(|r| !r.custom));
    }

    #[test]
    fn preset_ids_match_need_ids() {
        for r in default_routines() {
            assert_eq!(r.id, r.need.unwrap().id());
        }
    }

    #[test]
    fn presence_preset_durations() {
        let routines = default_routines();
        let presence = routines.iter().find(|r| r.id == "presence").unwrap();
        assert_eq!(presence.steps.len(), 6);
        assert_eq!(presence.total_duration_min(), 6 + 4 + 4 + 12 + 15 + 5);
    }
}
