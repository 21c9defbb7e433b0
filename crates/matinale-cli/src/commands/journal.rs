use clap::Subcommand;
use matinale_core::journal::{DEFAULT_QUESTION, SECONDARY_QUESTION};
use matinale_core::{Database, JournalEntry};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Record an answer to the day's question
    Add {
        answer: String,
        /// Prompt question (defaults to the daily prompt)
        #[arg(long)]
        question: Option<String>,
        /// Use the closing question of this routine instead
        #[arg(long)]
        routine: Option<String>,
    },
    /// List entries, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Delete an entry
    Delete {
        id: String,
    },
    /// List the available prompt questions
    Questions,
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        JournalAction::Add {
            answer,
            question,
            routine,
        } => {
            let question = match (question, routine) {
                (Some(question), _) => question,
                (None, Some(id)) => db
                    .require_routine(&id)?
                    .question
                    .unwrap_or_else(|| DEFAULT_QUESTION.to_string()),
                (None, None) => DEFAULT_QUESTION.to_string(),
            };
            let entry = JournalEntry::new(question, answer)?;
            db.add_journal_entry(&entry)?;
            println!("Journal entry recorded: {}", entry.id);
        }
        JournalAction::List { json } => {
            let entries = db.list_journal_entries()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    println!(
                        "{} · {} ({})",
                        entry.created_at.format("%Y-%m-%d"),
                        entry.question,
                        entry.id,
                    );
                    println!("  {}", entry.answer);
                }
            }
        }
        JournalAction::Delete { id } => {
            if db.delete_journal_entry(&id)? {
                println!("Journal entry deleted: {id}");
            } else {
                eprintln!("no such entry: {id}");
                std::process::exit(1);
            }
        }
        JournalAction::Questions => {
            println!("{DEFAULT_QUESTION}");
            println!("{SECONDARY_QUESTION}");
            for routine in db.list_routines()? {
                if let Some(question) = routine.question {
                    println!("{} · {}", routine.id, question);
                }
            }
        }
    }
    Ok(())
}
