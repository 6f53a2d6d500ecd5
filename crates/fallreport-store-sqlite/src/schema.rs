//! SQL schema for the fall report SQLite store.
//!
//! Executed on every connection startup. There are no migrations: an existing
//! database is used as-is.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS reports (
    id                     INTEGER PRIMARY KEY AUTOINCREMENT,
    elderly_name           TEXT NOT NULL,
    was_fall_last_3_months TEXT,             -- free text, not a boolean
    accident_date          TEXT,
    accident_time          TEXT,
    accident_place         TEXT,
    witness                TEXT,
    additional_content     TEXT,
    person_number          TEXT,
    was_fall_inside        BOOLEAN           -- stored as 0/1
);

-- One table per collection kind. Rows are never updated; they go away only
-- with their report.
CREATE TABLE IF NOT EXISTS fall_reasons (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    report_id INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
    reason    TEXT
);

CREATE TABLE IF NOT EXISTS user_activities (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    report_id INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
    activity  TEXT
);

CREATE TABLE IF NOT EXISTS preceding_symptoms (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    report_id INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
    symptom   TEXT
);

CREATE TABLE IF NOT EXISTS fall_consequences (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    report_id   INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
    consequence TEXT
);

CREATE TABLE IF NOT EXISTS injury_types (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    report_id INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
    injury    TEXT
);

CREATE TABLE IF NOT EXISTS taken_measures (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    report_id INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
    measure   TEXT
);

CREATE TABLE IF NOT EXISTS report_photos (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    report_id INTEGER NOT NULL REFERENCES reports(id) ON DELETE CASCADE,
    photo_uri TEXT                           -- URI of an externally stored image
);

CREATE INDEX IF NOT EXISTS fall_reasons_report_idx       ON fall_reasons(report_id);
CREATE INDEX IF NOT EXISTS user_activities_report_idx    ON user_activities(report_id);
CREATE INDEX IF NOT EXISTS preceding_symptoms_report_idx ON preceding_symptoms(report_id);
CREATE INDEX IF NOT EXISTS fall_consequences_report_idx  ON fall_consequences(report_id);
CREATE INDEX IF NOT EXISTS injury_types_report_idx       ON injury_types(report_id);
CREATE INDEX IF NOT EXISTS taken_measures_report_idx     ON taken_measures(report_id);
CREATE INDEX IF NOT EXISTS report_photos_report_idx      ON report_photos(report_id);
";
