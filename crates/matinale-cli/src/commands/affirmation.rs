use clap::Subcommand;
use matinale_core::{Affirmation, Database, Need};

#[derive(Subcommand)]
pub enum AffirmationAction {
    /// List affirmations
    List {
        /// Only those tagged with this need
        #[arg(long)]
        need: Option<Need>,
        #[arg(long)]
        json: bool,
    },
    /// Add an affirmation
    Add {
        text: String,
        /// Comma-separated needs to tag, e.g. presence,focus
        #[arg(long, value_delimiter = ',')]
        tags: Vec<Need>,
    },
    /// Edit the text of a custom affirmation
    Edit {
        id: String,
        text: String,
    },
    /// Toggle favorite
    Fav {
        id: String,
    },
    /// Toggle a need tag
    Tag {
        id: String,
        need: Need,
    },
    /// Delete a custom affirmation (presets are kept)
    Delete {
        id: String,
    },
}

pub fn run(action: AffirmationAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        AffirmationAction::List { need, json } => {
            let affirmations = db.list_affirmations(need)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&affirmations)?);
            } else {
                for a in &affirmations {
                    let tags: Vec<&str> = a.tags.iter().map(|t| t.id()).collect();
                    println!(
                        "{} « {} » ({}){}{}",
                        if a.favorite { "♥" } else { "♡" },
                        a.text,
                        a.id,
                        if tags.is_empty() {
                            String::new()
                        } else {
                            format!(" · {}", tags.join(","))
                        },
                        if a.preset { " · préréglé" } else { "" },
                    );
                }
            }
        }
        AffirmationAction::Add { text, tags } => {
            let affirmation = Affirmation::user(text, tags);
            db.insert_affirmation(&affirmation)?;
            println!("Affirmation added: {}", affirmation.id);
        }
        AffirmationAction::Edit { id, text } => {
            db.set_affirmation_text(&id, &text)?;
            println!("ok");
        }
        AffirmationAction::Fav { id } => {
            let favorite = db.toggle_affirmation_favorite(&id)?;
            println!("{}", if favorite { "♥" } else { "♡" });
        }
        AffirmationAction::Tag { id, need } => {
            let tags = db.toggle_affirmation_tag(&id, need)?;
            let tags: Vec<&str> = tags.iter().map(|t| t.id()).collect();
            println!("{}", tags.join(","));
        }
        AffirmationAction::Delete { id } => {
            db.delete_affirmation(&id)?;
            println!("Affirmation deleted: {id}");
        }
    }
    Ok(())
}
