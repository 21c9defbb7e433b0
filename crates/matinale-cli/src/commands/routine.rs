use clap::Subcommand;
use matinale_core::routine::{MoveDirection, Step};
use matinale_core::{Config, Database, Need, Routine};

#[derive(Subcommand)]
pub enum RoutineAction {
    /// List routines
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one routine with its steps
    Show {
        id: String,
    },
    /// Create a custom routine with one placeholder step
    Create {
        name: String,
        #[arg(long)]
        icon: Option<String>,
        /// Associated need (presence | serenite | focus | emotions | energie)
        #[arg(long)]
        need: Option<Need>,
        /// Opening citation
        #[arg(long)]
        citation: Option<String>,
        /// Closing journal question
        #[arg(long)]
        question: Option<String>,
    },
    /// Delete a custom routine (presets are kept)
    Delete {
        id: String,
    },
    /// Append a step
    AddStep {
        id: String,
        name: String,
        #[arg(long)]
        minutes: Option<u64>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a step by index (a routine keeps at least one)
    RemoveStep {
        id: String,
        index: usize,
    },
    /// Move a step up or down
    MoveStep {
        id: String,
        index: usize,
        #[arg(value_parser = ["up", "down"])]
        direction: String,
    },
    /// Nudge a step duration by +/- minutes, clamped to 1..=60
    AdjustStep {
        id: String,
        index: usize,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Edit step fields; an empty --detail or --affirmation clears it
    EditStep {
        id: String,
        index: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        detail: Option<String>,
        #[arg(long)]
        affirmation: Option<String>,
    },
    /// Print the routine suggested for a need
    ForNeed {
        need: Need,
    },
}

fn print_summary(routine: &Routine) {
    println!(
        "{} {} ({}) · {} act. · {} min{}",
        routine.icon,
        routine.name,
        routine.id,
        routine.steps.len(),
        routine.total_duration_min(),
        if routine.custom { " · custom" } else { "" },
    );
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        RoutineAction::List { json } => {
            let routines = db.list_routines()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&routines)?);
            } else {
                for routine in &routines {
                    print_summary(routine);
                }
            }
        }
        RoutineAction::Show { id } => {
            let routine = db.require_routine(&id)?;
            println!("{}", serde_json::to_string_pretty(&routine)?);
        }
        RoutineAction::Create {
            name,
            icon,
            need,
            citation,
            question,
        } => {
            let config = Config::load_or_default();
            let mut routine = Routine::custom(name);
            routine.steps[0].duration_min = config.routine.default_step_min;
            if let Some(icon) = icon {
                routine.icon = icon;
            }
            routine.need = need;
            routine.citation = citation;
            routine.question = question;
            db.insert_routine(&routine)?;
            println!("Routine created: {}", routine.id);
        }
        RoutineAction::Delete { id } => {
            db.delete_routine(&id)?;
            println!("Routine deleted: {id}");
        }
        RoutineAction::AddStep {
            id,
            name,
            minutes,
            description,
        } => {
            let config = Config::load_or_default();
            let mut routine = db.require_routine(&id)?;
            let mut step = Step::new(name, minutes.unwrap_or(config.routine.default_step_min));
            if let Some(description) = description {
                step.description = description;
            }
            routine.add_step(step);
            db.update_routine(&routine)?;
            print_summary(&routine);
        }
        RoutineAction::RemoveStep { id, index } => {
            let mut routine = db.require_routine(&id)?;
            let removed = routine.remove_step(index)?;
            db.update_routine(&routine)?;
            println!("Step removed: {}", removed.name);
        }
        RoutineAction::MoveStep {
            id,
            index,
            direction,
        } => {
            let direction = match direction.as_str() {
                "up" => MoveDirection::Up,
                _ => MoveDirection::Down,
            };
            let mut routine = db.require_routine(&id)?;
            routine.move_step(index, direction)?;
            db.update_routine(&routine)?;
            print_summary(&routine);
        }
        RoutineAction::AdjustStep { id, index, delta } => {
            let mut routine = db.require_routine(&id)?;
            let minutes = routine.adjust_step_duration(index, delta)?;
            db.update_routine(&routine)?;
            println!("{} · {} min", routine.steps[index].name, minutes);
        }
        RoutineAction::EditStep {
            id,
            index,
            name,
            description,
            detail,
            affirmation,
        } => {
            let mut routine = db.require_routine(&id)?;
            let step = routine.step_mut(index)?;
            if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
                step.name = name;
            }
            if let Some(description) = description {
                step.description = description;
            }
            if let Some(detail) = detail {
                step.detail = (!detail.is_empty()).then_some(detail);
            }
            if let Some(affirmation) = affirmation {
                step.affirmation = (!affirmation.is_empty()).then_some(affirmation);
            }
            db.update_routine(&routine)?;
            println!("{}", serde_json::to_string_pretty(&routine.steps[index])?);
        }
        RoutineAction::ForNeed { need } => match db.routine_for_need(need)? {
            Some(routine) => print_summary(&routine),
            None => println!("no routines yet"),
        },
    }
    Ok(())
}
