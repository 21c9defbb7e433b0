use clap::Subcommand;
use matinale_core::{Database, Mood, Need};

#[derive(Subcommand)]
pub enum MorningAction {
    /// Opening affirmation for a mood (calme | fragile | determine | enthousiaste)
    Mood { mood: Mood },
    /// Citation and suggested routine for a need
    Need {
        need: Need,
        #[arg(long)]
        json: bool,
    },
    /// List the available moods and needs
    List,
}

pub fn run(action: MorningAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MorningAction::Mood { mood } => {
            println!("{}", mood.affirmation());
        }
        MorningAction::Need { need, json } => {
            let db = Database::open()?;
            let routine = db.routine_for_need(need)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "need": need,
                        "citation": need.citation(),
                        "routine": routine,
                    }))?
                );
            } else {
                println!("{}", need.citation());
                if let Some(routine) = routine {
                    println!();
                    println!(
                        "{} {} · {} min",
                        routine.icon,
                        routine.name,
                        routine.total_duration_min()
                    );
                    for (i, step) in routine.steps.iter().enumerate() {
                        println!("  {}. {} · {}'", i + 1, step.name, step.duration_min);
                    }
                }
            }
        }
        MorningAction::List => {
            for mood in Mood::ALL {
                println!("mood  {} · {}", mood.id(), mood.label());
            }
            for need in Need::ALL {
                println!("need  {} · {} {} · {}", need.id(), need.icon(), need.label(), need.sub_label());
            }
        }
    }
    Ok(())
}
