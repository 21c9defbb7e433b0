use clap::Subcommand;
use matinale_core::{Database, Need, Quality};

#[derive(Subcommand)]
pub enum QualityAction {
    /// List qualities
    List {
        /// Only those tagged with this need
        #[arg(long)]
        need: Option<Need>,
        #[arg(long)]
        json: bool,
    },
    /// Add a quality
    Add {
        name: String,
        /// Comma-separated needs to tag, e.g. serenite,emotions
        #[arg(long, value_delimiter = ',')]
        tags: Vec<Need>,
    },
    /// Rename a custom quality
    Edit {
        id: String,
        name: String,
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
    /// Delete a custom quality (presets are kept)
    Delete {
        id: String,
    },
}

pub fn run(action: QualityAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        QualityAction::List { need, json } => {
            let qualities = db.list_qualities(need)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&qualities)?);
            } else {
                for q in &qualities {
                    let tags: Vec<&str> = q.tags.iter().map(|t| t.id()).collect();
                    println!(
                        "{} {} ({}){}{}",
                        if q.favorite { "♥" } else { "♡" },
                        q.name,
                        q.id,
                        if tags.is_empty() {
                            String::new()
                        } else {
                            format!(" · {}", tags.join(","))
                        },
                        if q.preset { " · préréglé" } else { "" },
                    );
                }
            }
        }
        QualityAction::Add { name, tags } => {
            let quality = Quality::user(name, tags);
            db.insert_quality(&quality)?;
            println!("Quality added: {}", quality.id);
        }
        QualityAction::Edit { id, name } => {
            db.set_quality_name(&id, &name)?;
            println!("ok");
        }
        QualityAction::Fav { id } => {
            let favorite = db.toggle_quality_favorite(&id)?;
            println!("{}", if favorite { "♥" } else { "♡" });
        }
        QualityAction::Tag { id, need } => {
            let tags = db.toggle_quality_tag(&id, need)?;
            let tags: Vec<&str> = tags.iter().map(|t| t.id()).collect();
            println!("{}", tags.join(","));
        }
        QualityAction::Delete { id } => {
            db.delete_quality(&id)?;
            println!("Quality deleted: {id}");
        }
    }
    Ok(())
}
