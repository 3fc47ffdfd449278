use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A row type backed by one CSV table under the data directory.
pub trait TableRecord: DeserializeOwned + Send + Sync + 'static {
    /// File stem of the backing table, e.g. `countries` for `countries.csv`.
    const TABLE: &'static str;

    fn id(&self) -> u32;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("table {table} unavailable: {source}")]
    Unavailable {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("malformed row {row} in table {table}: {source}")]
    MalformedRow {
        table: &'static str,
        row: usize,
        #[source]
        source: csv::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository over a folder of CSV files, one file per entity type.
///
/// Every call re-reads the backing file; there is no caching and no
/// staleness guarantee across calls. A missing or unreadable table degrades
/// to "no rows" with a logged warning, never an error: lookups answer
/// `None` and scans answer an empty `Vec`.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn table_path<T: TableRecord>(&self) -> PathBuf {
        self.data_dir.join(format!("{}.csv", T::TABLE))
    }

    /// All rows of the table in source order. Rows that fail to decode
    /// (missing or mistyped fields) are skipped with a warning.
    pub fn load_all<T: TableRecord>(&self) -> Vec<T> {
        match self.try_load_all(true) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(table = T::TABLE, %err, "backing store unavailable, no rows");
                Vec::new()
            }
        }
    }

    /// Strict variant for offline tooling: any unreadable table or row is an
    /// error instead of a degraded result.
    pub fn load_all_strict<T: TableRecord>(&self) -> StoreResult<Vec<T>> {
        self.try_load_all(false)
    }

    fn try_load_all<T: TableRecord>(&self, skip_bad_rows: bool) -> StoreResult<Vec<T>> {
        let path = self.table_path::<T>();
        let mut reader =
            csv::Reader::from_path(&path).map_err(|source| StoreError::Unavailable {
                table: T::TABLE,
                source,
            })?;

        let mut rows = Vec::new();
        for (idx, row) in reader.deserialize::<T>().enumerate() {
            match row {
                Ok(record) => rows.push(record),
                Err(source) if skip_bad_rows => {
                    tracing::warn!(table = T::TABLE, row = idx + 1, err = %source, "skipping malformed row");
                }
                Err(source) => {
                    return Err(StoreError::MalformedRow {
                        table: T::TABLE,
                        row: idx + 1,
                        source,
                    });
                }
            }
        }
        Ok(rows)
    }

    pub fn find_by_id<T: TableRecord>(&self, id: u32) -> Option<T> {
        self.find_by(|record: &T| record.id() == id)
    }

    /// First row matching the predicate, in source order.
    pub fn find_by<T: TableRecord>(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.load_all::<T>().into_iter().find(|record| pred(record))
    }

    /// All rows matching the predicate, source order preserved.
    pub fn filter<T: TableRecord>(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let mut rows = self.load_all::<T>();
        rows.retain(|record| pred(record));
        rows
    }
}
