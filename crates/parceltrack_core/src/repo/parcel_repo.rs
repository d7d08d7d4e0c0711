//! Parcel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the canonical `parcel` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every operation is a single parameterized statement; failures propagate
//!   untranslated, with no retry and no local recovery.
//! - `get` distinguishes zero matched rows (`NotFound`) from transport
//!   errors so callers can branch on existence.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::parcel::{Parcel, ParcelNumber, ParcelStatus};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for parcel persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ParcelNumber),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::InvalidData(message) => write!(f, "invalid persisted parcel data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for parcel CRUD operations.
pub trait ParcelRepository {
    /// Inserts a new parcel row and returns the storage-assigned number.
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber>;
    /// Fetches one parcel by number; `NotFound` when no row matches.
    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel>;
    /// Fetches all parcels of one client, unordered; empty when none.
    fn get_by_client(&self, client: i64) -> RepoResult<Vec<Parcel>>;
    /// Overwrites the address column; `NotFound` when no row matches.
    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()>;
    /// Overwrites the status column; `NotFound` when no row matches.
    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()>;
    /// Deletes one parcel row. Idempotent: an absent row is not an error.
    fn delete(&self, number: ParcelNumber) -> RepoResult<()>;
}

/// SQLite-backed parcel store.
///
/// Borrows an already-open connection; opening and closing the database is
/// the caller's responsibility. Holds no state of its own, so one instance
/// may serve multiple callers as long as the connection allows it.
pub struct SqliteParcelStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ParcelRepository for SqliteParcelStore<'_> {
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address.as_str(),
                parcel.created_at.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE number = ?1;"))?;

        let mut rows = stmt.query(params![number])?;
        match rows.next()? {
            Some(row) => parse_parcel_row(row),
            None => Err(RepoError::NotFound(number)),
        }
    }

    fn get_by_client(&self, client: i64) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE client = ?1;"))?;

        let mut rows = stmt.query(params![client])?;
        let mut parcels = Vec::new();
        while let Some(row) = rows.next()? {
            parcels.push(parse_parcel_row(row)?);
        }

        Ok(parcels)
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel SET address = ?1 WHERE number = ?2;",
            params![address, number],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(number));
        }

        Ok(())
    }

    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2;",
            params![status.as_str(), number],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(number));
        }

        Ok(())
    }

    fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM parcel WHERE number = ?1;", params![number])?;

        Ok(())
    }
}

fn parse_parcel_row(row: &Row<'_>) -> RepoResult<Parcel> {
    let status_text: String = row.get("status")?;
    let status = ParcelStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status value `{status_text}` in parcel.status"
        ))
    })?;

    Ok(Parcel {
        number: row.get("number")?,
        client: row.get("client")?,
        status,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    })
}
