//! SQLite-backed peripheral storage.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use tracing::{debug, info, instrument, trace, warn};
use uuid::Uuid;

use super::ObjectStore;
use crate::error::{PeripheralError, Result, ResultExt};
use crate::peripheral::{DisplaySettings, NewPeripheral, PeripheralRecord, PeripheralType};

/// SQLite schema for peripheral storage.
const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS peripherals (
    id TEXT PRIMARY KEY,
    peripheral_type TEXT NOT NULL,
    address TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    alias TEXT,
    text_color TEXT,
    background_color TEXT,
    rotation INTEGER,
    brightness INTEGER,
    transmitter_id TEXT,
    ble_password TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_peripherals_type ON peripherals(peripheral_type);
";

const SELECT_COLUMNS: &str = "id, peripheral_type, address, name, alias, text_color, \
     background_color, rotation, brightness, transmitter_id, ble_password, created_at";

/// Database wrapper for peripheral records.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens or creates a database at the standard location.
    ///
    /// Location: `~/.local/share/periph/peripherals.db`
    #[instrument]
    pub fn open_default() -> Result<Self> {
        let path = default_db_path()?;
        Self::open(&path)
    }

    /// Opens or creates a database at the given path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "Opening peripheral database");
        let conn = Connection::open(path).storage_context("open database")?;

        let store = Self { conn };
        store.init_schema()?;
        info!(path = %path.display(), "Peripheral database ready");
        Ok(store)
    }

    /// Creates an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().storage_context("open in-memory database")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA_SQL)
            .storage_context("initialize schema")
    }

    /// All stored peripherals, oldest first.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<PeripheralRecord>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM peripherals ORDER BY created_at, rowid");
        let mut stmt = self.conn.prepare(&sql).storage_context("prepare list")?;
        let rows = stmt
            .query_map([], read_row)
            .storage_context("list peripherals")?;

        let mut records = Vec::new();
        for row in rows {
            let raw = row.storage_context("read peripheral row")?;
            match raw.into_record() {
                Ok(record) => records.push(record),
                Err(e) => warn!(error = %e, "Skipping unreadable peripheral row"),
            }
        }
        debug!(count = records.len(), "Listed peripherals");
        Ok(records)
    }

    /// Look up a peripheral by its connection address.
    #[instrument(skip(self))]
    pub fn find_by_address(&self, address: &str) -> Result<Option<PeripheralRecord>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM peripherals WHERE address = ?1");
        let raw = self
            .conn
            .query_row(&sql, params![address], read_row)
            .optional()
            .storage_context("find peripheral")?;
        raw.map(RawRow::into_record).transpose()
    }

    /// Delete the peripheral stored under `address`.
    #[instrument(skip(self))]
    pub fn remove(&self, address: &str) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM peripherals WHERE address = ?1", params![address])
            .storage_context("delete peripheral")?;

        if deleted == 0 {
            return Err(PeripheralError::PeripheralNotFound {
                address: address.to_string(),
            });
        }
        info!(address, "Removed peripheral");
        Ok(())
    }
}

impl ObjectStore for SqliteStore {
    #[instrument(skip_all, fields(peripheral_type = new.peripheral_type.id(), address = %new.address))]
    fn allocate(&mut self, new: NewPeripheral) -> Result<PeripheralRecord> {
        let record = PeripheralRecord::from_new(new, Uuid::new_v4(), Utc::now());
        let display = record.display.as_ref();

        let inserted = self.conn.execute(
            "INSERT INTO peripherals (id, peripheral_type, address, name, alias, text_color,
                background_color, rotation, brightness, transmitter_id, ble_password, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                record.id.to_string(),
                record.peripheral_type.id(),
                record.address,
                record.name,
                record.alias,
                display.map(|d| d.text_color.name()),
                display.map(|d| d.background_color.name()),
                display.map(|d| d.rotation),
                display.and_then(|d| d.brightness),
                record.transmitter_id,
                record.ble_password,
                record.created_at.to_rfc3339(),
            ],
        );

        match inserted {
            Ok(_) => {
                info!(id = %record.id, "Stored peripheral");
                Ok(record)
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(PeripheralError::DuplicateAddress {
                    address: record.address,
                })
            }
            Err(e) => Err(PeripheralError::storage("insert peripheral", e)),
        }
    }
}

/// Column values as stored, before domain conversion.
struct RawRow {
    id: String,
    peripheral_type: String,
    address: String,
    name: String,
    alias: Option<String>,
    text_color: Option<String>,
    background_color: Option<String>,
    rotation: Option<u8>,
    brightness: Option<u8>,
    transmitter_id: Option<String>,
    ble_password: Option<String>,
    created_at: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        peripheral_type: row.get(1)?,
        address: row.get(2)?,
        name: row.get(3)?,
        alias: row.get(4)?,
        text_color: row.get(5)?,
        background_color: row.get(6)?,
        rotation: row.get(7)?,
        brightness: row.get(8)?,
        transmitter_id: row.get(9)?,
        ble_password: row.get(10)?,
        created_at: row.get(11)?,
    })
}

impl RawRow {
    fn into_record(self) -> Result<PeripheralRecord> {
        trace!(id = %self.id, "Decoding peripheral row");
        let id = Uuid::parse_str(&self.id).storage_context("decode id")?;
        let peripheral_type: PeripheralType = self.peripheral_type.parse()?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .storage_context("decode created_at")?
            .with_timezone(&Utc);

        let display = match (self.text_color, self.background_color, self.rotation) {
            (Some(text), Some(background), Some(rotation)) => Some(DisplaySettings {
                text_color: text.parse()?,
                background_color: background.parse()?,
                rotation,
                brightness: self.brightness,
            }),
            _ => None,
        };

        Ok(PeripheralRecord {
            id,
            peripheral_type,
            address: self.address,
            name: self.name,
            alias: self.alias,
            display,
            transmitter_id: self.transmitter_id,
            ble_password: self.ble_password,
            created_at,
        })
    }
}

/// Default database location: `<data_dir>/periph/peripherals.db`.
pub fn default_db_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join("periph").join("peripherals.db"))
        .ok_or_else(|| PeripheralError::Other("Could not determine data directory".to_string()))
}
