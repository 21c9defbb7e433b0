use clap::Subcommand;
use matinale_core::{DataResetOptions, Database};

#[derive(Subcommand)]
pub enum DataAction {
    /// Wipe selected stores and re-seed the presets
    Reset {
        #[arg(long)]
        routines: bool,
        #[arg(long)]
        journal: bool,
        #[arg(long)]
        affirmations: bool,
        #[arg(long)]
        qualities: bool,
        /// Everything
        #[arg(long)]
        all: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataAction::Reset {
            routines,
            journal,
            affirmations,
            qualities,
            all,
        } => {
            let options = if all {
                DataResetOptions::all()
            } else {
                DataResetOptions {
                    routines,
                    journal,
                    affirmations,
                    qualities,
                }
            };
            if !(options.routines || options.journal || options.affirmations || options.qualities)
            {
                eprintln!("nothing selected; pass --all or one of the store flags");
                std::process::exit(1);
            }
            let db = Database::open()?;
            let summary = db.reset_data(options)?;
            println!(
                "deleted: {} routines, {} journal entries, {} affirmations, {} qualities",
                summary.deleted_routines,
                summary.deleted_journal_entries,
                summary.deleted_affirmations,
                summary.deleted_qualities,
            );
        }
    }
    Ok(())
}
