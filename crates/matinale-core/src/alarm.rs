//! Morning alarm settings and ring-time arithmetic.
//!
//! The core computes ring instants; hosts poll wall-clock and do the
//! actual ringing. Settings live in the TOML [`crate::Config`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Local, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Snooze deferral, in minutes.
pub const SNOOZE_MIN: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlarmSound {
    #[default]
    Bol,
    Carillon,
    Pluie,
}

impl AlarmSound {
    pub const ALL: [AlarmSound; 3] = [AlarmSound::Bol, AlarmSound::Carillon, AlarmSound::Pluie];

    pub fn id(&self) -> &'static str {
        match self {
            AlarmSound::Bol => "bol",
            AlarmSound::Carillon => "carillon",
            AlarmSound::Pluie => "pluie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlarmSound::Bol => "Bol tibétain",
            AlarmSound::Carillon => "Carillon doux",
            AlarmSound::Pluie => "Pluie légère",
        }
    }
}

impl fmt::Display for AlarmSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlarmSound {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlarmSound::ALL
            .into_iter()
            .find(|sound| sound.id() == s)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "sound".into(),
                message: format!("unknown sound '{s}'"),
            })
    }
}

/// Alarm settings. Defaults to a gentle 06:00 on weekdays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_hour")]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    /// Ring days, 0 = Monday .. 6 = Sunday.
    #[serde(default = "default_days")]
    pub days: Vec<u8>,
    #[serde(default)]
    pub sound: AlarmSound,
}

fn default_enabled() -> bool {
    true
}
fn default_hour() -> u32 {
    6
}
fn default_days() -> Vec<u8> {
    vec![0, 1, 2, 3, 4] // Mon-Fri
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hour: 6,
            minute: 0,
            days: default_days(),
            sound: AlarmSound::default(),
        }
    }
}

impl AlarmConfig {
    /// Set the ring time.
    ///
    /// # Errors
    ///
    /// Rejects hours outside 0..24 and minutes outside 0..60.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> Result<(), ValidationError> {
        if hour >= 24 {
            return Err(ValidationError::InvalidValue {
                field: "hour".into(),
                message: format!("{hour} is not a valid hour"),
            });
        }
        if minute >= 60 {
            return Err(ValidationError::InvalidValue {
                field: "minute".into(),
                message: format!("{minute} is not a valid minute"),
            });
        }
        self.hour = hour;
        self.minute = minute;
        Ok(())
    }

    /// Toggle membership of a day (0 = Monday .. 6 = Sunday).
    pub fn toggle_day(&mut self, day: u8) -> Result<(), ValidationError> {
        if day >= 7 {
            return Err(ValidationError::InvalidValue {
                field: "day".into(),
                message: format!("{day} is not a valid day (0 = Monday .. 6 = Sunday)"),
            });
        }
        if let Some(pos) = self.days.iter().position(|d| *d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day);
        }
        Ok(())
    }

    /// The earliest upcoming ring instant strictly after `now`, wrapping
    /// the week. `None` when disabled or no day is selected.
    pub fn next_ring(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        if !self.enabled || self.days.is_empty() {
            return None;
        }
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)?;
        for offset in 0..=7 {
            let date = now.date_naive() + Duration::days(offset);
            let day = date.weekday().num_days_from_monday() as u8;
            if !self.days.contains(&day) {
                continue;
            }
            // Skip instants a DST gap swallows.
            let Some(candidate) = Local.from_local_datetime(&date.and_time(time)).earliest()
            else {
                continue;
            };
            if candidate > now {
                return Some(candidate);
            }
        }
        None
    }

    /// True exactly at the configured minute on a selected day.
    pub fn should_ring(&self, now: DateTime<Local>) -> bool {
        self.enabled
            && self
                .days
                .contains(&(now.weekday().num_days_from_monday() as u8))
            && now.hour() == self.hour
            && now.minute() == self.minute
    }
}

/// The instant a snoozed alarm rings again.
pub fn snooze_until(from: DateTime<Local>) -> DateTime<Local> {
    from + Duration::minutes(SNOOZE_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-01-05 is a Monday.
    fn monday(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 5, hour, minute, 0).unwrap()
    }

    #[test]
    fn next_ring_same_day_before_alarm_time() {
        let alarm = AlarmConfig::default();
        let next = alarm.next_ring(monday(5, 30)).unwrap();
        assert_eq!(next, monday(6, 0));
    }

    #[test]
    fn next_ring_rolls_to_next_selected_day() {
        let alarm = AlarmConfig::default();
        let next = alarm.next_ring(monday(7, 0)).unwrap();
        assert_eq!(next, Local.with_ymd_and_hms(2026, 1, 6, 6, 0, 0).unwrap());
    }

    #[test]
    fn next_ring_wraps_the_weekend() {
        let alarm = AlarmConfig::default();
        // Friday 2026-01-09, after the alarm fired.
        let friday = Local.with_ymd_and_hms(2026, 1, 9, 8, 0, 0).unwrap();
        let next = alarm.next_ring(friday).unwrap();
        assert_eq!(next, Local.with_ymd_and_hms(2026, 1, 12, 6, 0, 0).unwrap());
    }

    #[test]
    fn next_ring_none_when_disabled_or_no_days() {
        let mut alarm = AlarmConfig::default();
        alarm.enabled = false;
        assert!(alarm.next_ring(monday(5, 0)).is_none());

        let mut alarm = AlarmConfig::default();
        alarm.days.clear();
        assert!(alarm.next_ring(monday(5, 0)).is_none());
    }

    #[test]
    fn should_ring_only_at_the_configured_minute() {
        let alarm = AlarmConfig::default();
        assert!(alarm.should_ring(monday(6, 0)));
        assert!(!alarm.should_ring(monday(6, 1)));
        // Saturday is not a default day.
        let saturday = Local.with_ymd_and_hms(2026, 1, 10, 6, 0, 0).unwrap();
        assert!(!alarm.should_ring(saturday));
    }

    #[test]
    fn set_time_validates_bounds() {
        let mut alarm = AlarmConfig::default();
        alarm.set_time(7, 30).unwrap();
        assert_eq!((alarm.hour, alarm.minute), (7, 30));
        assert!(alarm.set_time(24, 0).is_err());
        assert!(alarm.set_time(0, 60).is_err());
    }

    #[test]
    fn toggle_day_adds_and_removes() {
        let mut alarm = AlarmConfig::default();
        alarm.toggle_day(5).unwrap(); // Saturday
        assert!(alarm.days.contains(&5));
        alarm.toggle_day(5).unwrap();
        assert!(!alarm.days.contains(&5));
        assert!(alarm.toggle_day(7).is_err());
    }

    #[test]
    fn snooze_defers_five_minutes() {
        assert_eq!(snooze_until(monday(6, 0)), monday(6, 5));
    }
}
