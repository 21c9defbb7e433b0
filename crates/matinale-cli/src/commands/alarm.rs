use chrono::Local;
use clap::Subcommand;
use matinale_core::{AlarmSound, Config};

/// Day names indexed by the stored day number (0 = Monday .. 6 = Sunday).
const DAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

#[derive(Subcommand)]
pub enum AlarmAction {
    /// Show alarm settings
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Enable the alarm
    Enable,
    /// Disable the alarm
    Disable,
    /// Set the ring time
    SetTime { hour: u32, minute: u32 },
    /// Replace the ring days (comma-separated, e.g. mon,tue,sat)
    SetDays {
        #[arg(value_delimiter = ',')]
        days: Vec<String>,
    },
    /// Toggle one ring day
    ToggleDay { day: String },
    /// Set the ring sound (bol | carillon | pluie)
    SetSound { sound: AlarmSound },
    /// Print the next ring instant
    Next,
}

fn parse_day(day: &str) -> Result<u8, Box<dyn std::error::Error>> {
    DAY_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(day))
        .map(|pos| pos as u8)
        .ok_or_else(|| format!("unknown day '{day}' (expected mon..sun)").into())
}

fn show(config: &Config) {
    let alarm = &config.alarm;
    let days: Vec<&str> = alarm
        .days
        .iter()
        .filter_map(|&d| DAY_NAMES.get(d as usize).copied())
        .collect();
    println!(
        "{:02}:{:02} · {} · {} · {}",
        alarm.hour,
        alarm.minute,
        if days.is_empty() {
            "no days".to_string()
        } else {
            days.join(",")
        },
        alarm.sound.label(),
        if alarm.enabled { "enabled" } else { "disabled" },
    );
}

pub fn run(action: AlarmAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    match action {
        AlarmAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config.alarm)?);
            } else {
                show(&config);
            }
        }
        AlarmAction::Enable => {
            config.alarm.enabled = true;
            config.save()?;
            show(&config);
        }
        AlarmAction::Disable => {
            config.alarm.enabled = false;
            config.save()?;
            show(&config);
        }
        AlarmAction::SetTime { hour, minute } => {
            config.alarm.set_time(hour, minute)?;
            config.save()?;
            show(&config);
        }
        AlarmAction::SetDays { days } => {
            let mut parsed = Vec::new();
            for day in &days {
                parsed.push(parse_day(day)?);
            }
            config.alarm.days = parsed;
            config.save()?;
            show(&config);
        }
        AlarmAction::ToggleDay { day } => {
            config.alarm.toggle_day(parse_day(&day)?)?;
            config.save()?;
            show(&config);
        }
        AlarmAction::SetSound { sound } => {
            config.alarm.sound = sound;
            config.save()?;
            show(&config);
        }
        AlarmAction::Next => match config.alarm.next_ring(Local::now()) {
            Some(next) => println!("{}", next.to_rfc3339()),
            None => println!("no upcoming ring"),
        },
    }
    Ok(())
}
