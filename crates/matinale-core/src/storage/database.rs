//! SQLite-based persistence for the routine catalog, journal,
//! affirmations/qualities and host key-value state.
//!
//! Every access goes through a typed repository method on [`Database`];
//! no caller touches SQL or ambient global state.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::affirmations::{default_affirmations, default_qualities, Affirmation, Quality};
use crate::error::{CoreError, DatabaseError, Result, ValidationError};
use crate::journal::JournalEntry;
use crate::routine::{default_routines, routine_for_need, Need, Routine, Step};

/// Which stores a data reset wipes.
#[derive(Debug, Clone, Copy)]
pub struct DataResetOptions {
    pub routines: bool,
    pub journal: bool,
    pub affirmations: bool,
    pub qualities: bool,
}

impl DataResetOptions {
    /// Wipe everything.
    pub fn all() -> Self {
        Self {
            routines: true,
            journal: true,
            affirmations: true,
            qualities: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataResetSummary {
    pub deleted_routines: usize,
    pub deleted_journal_entries: usize,
    pub deleted_affirmations: usize,
    pub deleted_qualities: usize,
}

/// Parse an RFC3339 datetime from storage, falling back to now.
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn parse_need(need_str: Option<&str>) -> Option<Need> {
    need_str.and_then(|s| s.parse().ok())
}

fn parse_tags(tags_json: &str) -> Vec<Need> {
    serde_json::from_str(tags_json).unwrap_or_default()
}

fn unknown(field: &str, id: &str) -> CoreError {
    CoreError::Validation(ValidationError::InvalidValue {
        field: field.into(),
        message: format!("no such {field} '{id}'"),
    })
}

fn preset_immutable(field: &str) -> CoreError {
    CoreError::Validation(ValidationError::InvalidValue {
        field: field.into(),
        message: format!("preset {field}s cannot be changed or deleted"),
    })
}

/// SQLite database at `~/.config/matinale/matinale.db`.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database, creating the schema and seeding the preset
    /// content on first run.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("matinale.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        db.seed_presets()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        db.seed_presets()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS routines (
                id        TEXT PRIMARY KEY,
                icon      TEXT NOT NULL DEFAULT '◎',
                name      TEXT NOT NULL,
                need      TEXT,
                steps     TEXT NOT NULL DEFAULT '[]',
                citation  TEXT,
                question  TEXT,
                custom    INTEGER NOT NULL DEFAULT 0,
                position  INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS journal (
                id         TEXT PRIMARY KEY,
                question   TEXT NOT NULL,
                answer     TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS affirmations (
                id       TEXT PRIMARY KEY,
                text     TEXT NOT NULL,
                tags     TEXT NOT NULL DEFAULT '[]',
                favorite INTEGER NOT NULL DEFAULT 0,
                preset   INTEGER NOT NULL DEFAULT 0,
                position INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS qualities (
                id       TEXT PRIMARY KEY,
                name     TEXT NOT NULL,
                tags     TEXT NOT NULL DEFAULT '[]',
                favorite INTEGER NOT NULL DEFAULT 0,
                preset   INTEGER NOT NULL DEFAULT 0,
                position INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_journal_created_at ON journal(created_at);",
        )
        .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// Seed preset routines, affirmations and qualities into empty stores.
    fn seed_presets(&self) -> Result<()> {
        let routines: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM routines", [], |row| row.get(0))?;
        if routines == 0 {
            for routine in default_routines() {
                self.insert_routine(&routine)?;
            }
        }

        let affirmations: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM affirmations", [], |row| row.get(0))?;
        if affirmations == 0 {
            for affirmation in default_affirmations() {
                self.insert_affirmation(&affirmation)?;
            }
        }

        let qualities: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM qualities", [], |row| row.get(0))?;
        if qualities == 0 {
            for quality in default_qualities() {
                self.insert_quality(&quality)?;
            }
        }
        Ok(())
    }

    // ── Routines ─────────────────────────────────────────────────────

    pub fn list_routines(&self) -> Result<Vec<Routine>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, icon, name, need, steps, citation, question, custom
             FROM routines ORDER BY position, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, Option<String>>(6)?,
                row.get::<_, bool>(7)?,
            ))
        })?;

        let mut routines = Vec::new();
        for row in rows {
            let (id, icon, name, need, steps_json, citation, question, custom) = row?;
            let steps: Vec<Step> = serde_json::from_str(&steps_json)?;
            routines.push(Routine {
                id,
                icon,
                name,
                need: parse_need(need.as_deref()),
                steps,
                citation,
                question,
                custom,
            });
        }
        Ok(routines)
    }

    pub fn get_routine(&self, id: &str) -> Result<Option<Routine>> {
        Ok(self.list_routines()?.into_iter().find(|r| r.id == id))
    }

    /// Fetch a routine or fail with a validation error naming the id.
    pub fn require_routine(&self, id: &str) -> Result<Routine> {
        self.get_routine(id)?.ok_or_else(|| unknown("routine", id))
    }

    /// The routine suggested for a need (first match, else first routine).
    pub fn routine_for_need(&self, need: Need) -> Result<Option<Routine>> {
        let routines = self.list_routines()?;
        Ok(routine_for_need(&routines, need).cloned())
    }

    pub fn insert_routine(&self, routine: &Routine) -> Result<()> {
        let position: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM routines",
            [],
            |row| row.get(0),
        )?;
        self.conn.execute(
            "INSERT INTO routines (id, icon, name, need, steps, citation, question, custom, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                routine.id,
                routine.icon,
                routine.name,
                routine.need.map(|n| n.id()),
                serde_json::to_string(&routine.steps)?,
                routine.citation,
                routine.question,
                routine.custom,
                position,
            ],
        )?;
        Ok(())
    }

    /// Persist edits to an existing routine (steps and surrounding fields).
    pub fn update_routine(&self, routine: &Routine) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE routines SET icon = ?2, name = ?3, need = ?4, steps = ?5,
                    citation = ?6, question = ?7
             WHERE id = ?1",
            params![
                routine.id,
                routine.icon,
                routine.name,
                routine.need.map(|n| n.id()),
                serde_json::to_string(&routine.steps)?,
                routine.citation,
                routine.question,
            ],
        )?;
        if changed == 0 {
            return Err(unknown("routine", &routine.id));
        }
        Ok(())
    }

    /// Delete a user-created routine. Presets are not deletable.
    pub fn delete_routine(&self, id: &str) -> Result<()> {
        let routine = self.require_routine(id)?;
        if !routine.custom {
            return Err(preset_immutable("routine"));
        }
        self.conn
            .execute("DELETE FROM routines WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Journal ──────────────────────────────────────────────────────

    pub fn add_journal_entry(&self, entry: &JournalEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO journal (id, question, answer, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id,
                entry.question,
                entry.answer,
                entry.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Entries newest-first.
    pub fn list_journal_entries(&self) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, question, answer, created_at FROM journal ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, question, answer, created_at) = row?;
            entries.push(JournalEntry {
                id,
                question,
                answer,
                created_at: parse_datetime_fallback(&created_at),
            });
        }
        Ok(entries)
    }

    /// Returns true when an entry was deleted.
    pub fn delete_journal_entry(&self, id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM journal WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    // ── Affirmations ─────────────────────────────────────────────────

    pub fn list_affirmations(&self, tag: Option<Need>) -> Result<Vec<Affirmation>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text, tags, favorite, preset FROM affirmations ORDER BY position, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
                row.get::<_, bool>(4)?,
            ))
        })?;

        let mut affirmations = Vec::new();
        for row in rows {
            let (id, text, tags, favorite, preset) = row?;
            affirmations.push(Affirmation {
                id,
                text,
                tags: parse_tags(&tags),
                favorite,
                preset,
            });
        }
        if let Some(need) = tag {
            affirmations.retain(|a| a.tags.contains(&need));
        }
        Ok(affirmations)
    }

    pub fn get_affirmation(&self, id: &str) -> Result<Affirmation> {
        let row = self
            .conn
            .query_row(
                "SELECT id, text, tags, favorite, preset FROM affirmations WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, bool>(3)?,
                        row.get::<_, bool>(4)?,
                    ))
                },
            )
            .optional()?;
        let (id, text, tags, favorite, preset) = row.ok_or_else(|| unknown("affirmation", id))?;
        Ok(Affirmation {
            id,
            text,
            tags: parse_tags(&tags),
            favorite,
            preset,
        })
    }

    pub fn insert_affirmation(&self, affirmation: &Affirmation) -> Result<()> {
        let position: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM affirmations",
            [],
            |row| row.get(0),
        )?;
        self.conn.execute(
            "INSERT INTO affirmations (id, text, tags, favorite, preset, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                affirmation.id,
                affirmation.text,
                serde_json::to_string(&affirmation.tags)?,
                affirmation.favorite,
                affirmation.preset,
                position,
            ],
        )?;
        Ok(())
    }

    /// Edit the text of a user-created affirmation.
    pub fn set_affirmation_text(&self, id: &str, text: &str) -> Result<()> {
        let affirmation = self.get_affirmation(id)?;
        if affirmation.preset {
            return Err(preset_immutable("affirmation"));
        }
        self.conn.execute(
            "UPDATE affirmations SET text = ?2 WHERE id = ?1",
            params![id, text],
        )?;
        Ok(())
    }

    /// Returns the new favorite state.
    pub fn toggle_affirmation_favorite(&self, id: &str) -> Result<bool> {
        let affirmation = self.get_affirmation(id)?;
        let favorite = !affirmation.favorite;
        self.conn.execute(
            "UPDATE affirmations SET favorite = ?2 WHERE id = ?1",
            params![id, favorite],
        )?;
        Ok(favorite)
    }

    /// Returns the new tag list.
    pub fn toggle_affirmation_tag(&self, id: &str, need: Need) -> Result<Vec<Need>> {
        let mut affirmation = self.get_affirmation(id)?;
        affirmation.toggle_tag(need);
        self.conn.execute(
            "UPDATE affirmations SET tags = ?2 WHERE id = ?1",
            params![id, serde_json::to_string(&affirmation.tags)?],
        )?;
        Ok(affirmation.tags)
    }

    /// Delete a user-created affirmation. Presets are not deletable.
    pub fn delete_affirmation(&self, id: &str) -> Result<()> {
        let affirmation = self.get_affirmation(id)?;
        if affirmation.preset {
            return Err(preset_immutable("affirmation"));
        }
        self.conn
            .execute("DELETE FROM affirmations WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Qualities ────────────────────────────────────────────────────

    pub fn list_qualities(&self, tag: Option<Need>) -> Result<Vec<Quality>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, tags, favorite, preset FROM qualities ORDER BY position, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
                row.get::<_, bool>(4)?,
            ))
        })?;

        let mut qualities = Vec::new();
        for row in rows {
            let (id, name, tags, favorite, preset) = row?;
            qualities.push(Quality {
                id,
                name,
                tags: parse_tags(&tags),
                favorite,
                preset,
            });
        }
        if let Some(need) = tag {
            qualities.retain(|q| q.tags.contains(&need));
        }
        Ok(qualities)
    }

    pub fn get_quality(&self, id: &str) -> Result<Quality> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, tags, favorite, preset FROM qualities WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, bool>(3)?,
                        row.get::<_, bool>(4)?,
                    ))
                },
            )
            .optional()?;
        let (id, name, tags, favorite, preset) = row.ok_or_else(|| unknown("quality", id))?;
        Ok(Quality {
            id,
            name,
            tags: parse_tags(&tags),
            favorite,
            preset,
        })
    }

    pub fn insert_quality(&self, quality: &Quality) -> Result<()> {
        let position: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM qualities",
            [],
            |row| row.get(0),
        )?;
        self.conn.execute(
            "INSERT INTO qualities (id, name, tags, favorite, preset, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                quality.id,
                quality.name,
                serde_json::to_string(&quality.tags)?,
                quality.favorite,
                quality.preset,
                position,
            ],
        )?;
        Ok(())
    }

    /// Edit the name of a user-created quality.
    pub fn set_quality_name(&self, id: &str, name: &str) -> Result<()> {
        let quality = self.get_quality(id)?;
        if quality.preset {
            return Err(preset_immutable("quality"));
        }
        self.conn.execute(
            "UPDATE qualities SET name = ?2 WHERE id = ?1",
            params![id, name],
        )?;
        Ok(())
    }

    /// Returns the new favorite state.
    pub fn toggle_quality_favorite(&self, id: &str) -> Result<bool> {
        let quality = self.get_quality(id)?;
        let favorite = !quality.favorite;
        self.conn.execute(
            "UPDATE qualities SET favorite = ?2 WHERE id = ?1",
            params![id, favorite],
        )?;
        Ok(favorite)
    }

    /// Returns the new tag list.
    pub fn toggle_quality_tag(&self, id: &str, need: Need) -> Result<Vec<Need>> {
        let mut quality = self.get_quality(id)?;
        quality.toggle_tag(need);
        self.conn.execute(
            "UPDATE qualities SET tags = ?2 WHERE id = ?1",
            params![id, serde_json::to_string(&quality.tags)?],
        )?;
        Ok(quality.tags)
    }

    /// Delete a user-created quality. Presets are not deletable.
    pub fn delete_quality(&self, id: &str) -> Result<()> {
        let quality = self.get_quality(id)?;
        if quality.preset {
            return Err(preset_immutable("quality"));
        }
        self.conn
            .execute("DELETE FROM qualities WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Key-value store (host state) ─────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Data reset ───────────────────────────────────────────────────

    /// Wipe the selected stores and re-seed their presets.
    pub fn reset_data(&self, options: DataResetOptions) -> Result<DataResetSummary> {
        let mut summary = DataResetSummary::default();
        if options.routines {
            summary.deleted_routines = self.conn.execute("DELETE FROM routines", [])?;
        }
        if options.journal {
            summary.deleted_journal_entries = self.conn.execute("DELETE FROM journal", [])?;
        }
        if options.affirmations {
            summary.deleted_affirmations = self.conn.execute("DELETE FROM affirmations", [])?;
        }
        if options.qualities {
            summary.deleted_qualities = self.conn.execute("DELETE FROM qualities", [])?;
        }
        self.seed_presets()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::MoveDirection;

    #[test]
    fn first_run_seeds_presets() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.list_routines().unwrap().len(), 5);
        assert_eq!(db.list_affirmations(None).unwrap().len(), 8);
        assert_eq!(db.list_qualities(None).unwrap().len(), 15);
    }

    #[test]
    fn routine_edit_round_trips() {
        let db = Database::open_memory().unwrap();
        let mut routine = db.require_routine("presence").unwrap();
        let before = routine.steps.len();

        routine.add_step(Step::placeholder(5));
        routine.move_step(before, MoveDirection::Up).unwrap();
        routine.adjust_step_duration(0, 3).unwrap();
        db.update_routine(&routine).unwrap();

        let reloaded = db.require_routine("presence").unwrap();
        assert_eq!(reloaded.steps.len(), before + 1);
        assert_eq!(reloaded.steps[before - 1].name, "Nouvelle étape");
        assert_eq!(reloaded.steps[0].duration_min, 6 + 3);
    }

    #[test]
    fn custom_routines_can_be_created_and_deleted() {
        let db = Database::open_memory().unwrap();
        let routine = Routine::custom("Soir d'été");
        db.insert_routine(&routine).unwrap();
        assert_eq!(db.list_routines().unwrap().len(), 6);
        // Custom routines list after the presets.
        assert_eq!(db.list_routines().unwrap()[5].id, routine.id);

        db.delete_routine(&routine.id).unwrap();
        assert_eq!(db.list_routines().unwrap().len(), 5);
    }

    #[test]
    fn preset_routines_cannot_be_deleted() {
        let db = Database::open_memory().unwrap();
        assert!(db.delete_routine("presence").is_err());
        assert!(db.delete_routine("inconnue").is_err());
    }

    #[test]
    fn routine_for_need_prefers_tag_match() {
        let db = Database::open_memory().unwrap();
        let suggested = db.routine_for_need(Need::Energie).unwrap().unwrap();
        assert_eq!(suggested.id, "energie");
    }

    #[test]
    fn journal_entries_list_newest_first() {
        let db = Database::open_memory().unwrap();
        let mut old = JournalEntry::new("Q", "première réponse").unwrap();
        old.created_at = Utc::now() - chrono::Duration::days(1);
        let new = JournalEntry::new("Q", "seconde réponse").unwrap();
        db.add_journal_entry(&old).unwrap();
        db.add_journal_entry(&new).unwrap();

        let entries = db.list_journal_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, new.id);

        assert!(db.delete_journal_entry(&old.id).unwrap());
        assert!(!db.delete_journal_entry(&old.id).unwrap());
        assert_eq!(db.list_journal_entries().unwrap().len(), 1);
    }

    #[test]
    fn affirmation_filter_favorite_and_guards() {
        let db = Database::open_memory().unwrap();
        let presence = db.list_affirmations(Some(Need::Presence)).unwrap();
        assert!(presence.iter().all(|a| a.tags.contains(&Need::Presence)));
        assert_eq!(presence.len(), 3);

        let first = &db.list_affirmations(None).unwrap()[0];
        let was = first.favorite;
        assert_eq!(db.toggle_affirmation_favorite(&first.id).unwrap(), !was);

        // Presets cannot be edited or deleted.
        assert!(db.set_affirmation_text(&first.id, "autre").is_err());
        assert!(db.delete_affirmation(&first.id).is_err());

        let mine = Affirmation::user("Je m'écoute.", vec![Need::Emotions]);
        db.insert_affirmation(&mine).unwrap();
        db.set_affirmation_text(&mine.id, "Je m'écoute vraiment.").unwrap();
        let tags = db.toggle_affirmation_tag(&mine.id, Need::Serenite).unwrap();
        assert_eq!(tags, vec![Need::Emotions, Need::Serenite]);
        db.delete_affirmation(&mine.id).unwrap();
        assert_eq!(db.list_affirmations(None).unwrap().len(), 8);
    }

    #[test]
    fn quality_crud_mirrors_affirmations() {
        let db = Database::open_memory().unwrap();
        let focus = db.list_qualities(Some(Need::Focus)).unwrap();
        assert!(!focus.is_empty());

        let mine = Quality::user("Constance", vec![]);
        db.insert_quality(&mine).unwrap();
        db.set_quality_name(&mine.id, "Régularité").unwrap();
        assert!(db.toggle_quality_favorite(&mine.id).unwrap());
        db.delete_quality(&mine.id).unwrap();

        let preset = &db.list_qualities(None).unwrap()[0];
        assert!(db.set_quality_name(&preset.id, "autre").is_err());
        assert!(db.delete_quality(&preset.id).is_err());
    }

    #[test]
    fn kv_set_get_delete() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("engine").unwrap().is_none());
        db.kv_set("engine", "{}").unwrap();
        db.kv_set("engine", "{\"state\":\"idle\"}").unwrap();
        assert_eq!(db.kv_get("engine").unwrap().unwrap(), "{\"state\":\"idle\"}");
        db.kv_delete("engine").unwrap();
        assert!(db.kv_get("engine").unwrap().is_none());
    }

    #[test]
    fn reset_reseeds_presets() {
        let db = Database::open_memory().unwrap();
        db.insert_routine(&Routine::custom("Extra")).unwrap();
        let entry = JournalEntry::new("Q", "réponse").unwrap();
        db.add_journal_entry(&entry).unwrap();

        let summary = db.reset_data(DataResetOptions::all()).unwrap();
        assert_eq!(summary.deleted_routines, 6);
        assert_eq!(summary.deleted_journal_entries, 1);
        assert_eq!(summary.deleted_affirmations, 8);
        assert_eq!(summary.deleted_qualities, 15);

        assert_eq!(db.list_routines().unwrap().len(), 5);
        assert!(db.list_journal_entries().unwrap().is_empty());
        assert_eq!(db.list_affirmations(None).unwrap().len(), 8);

        // A partial reset leaves other stores alone.
        db.insert_routine(&Routine::custom("Extra")).unwrap();
        let summary = db
            .reset_data(DataResetOptions {
                routines: false,
                journal: true,
                affirmations: false,
                qualities: false,
            })
            .unwrap();
        assert_eq!(summary.deleted_routines, 0);
        assert_eq!(db.list_routines().unwrap().len(), 6);
    }
}
