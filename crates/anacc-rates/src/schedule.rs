use std::path::Path;

use crate::error::RateError;
use crate::table::RateTable;

/// Rate tables ordered by the date they take effect.
///
/// A record is classified under the table in force on its assessment date,
/// so re-running an old assessment reproduces the rules of the day.
#[derive(Debug, Clone)]
pub struct RateSchedule {
    tables: Vec<RateTable>,
}

impl RateSchedule {
    pub fn new(mut tables: Vec<RateTable>) -> Result<Self, RateError> {
        tables.sort_by_key(|t| t.effective_from);
        if let Some(pair) = tables
            .windows(2)
            .find(|pair| pair[0].effective_from == pair[1].effective_from)
        {
            return Err(RateError::DuplicateEffectiveDate(pair[0].effective_from));
        }
        Ok(Self { tables })
    }

    /// Load every `*.json` table in `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, RateError> {
        let io_err = |source| RateError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut tables = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                tables.push(RateTable::load(&path)?);
            }
        }
        tracing::info!(dir = %dir.display(), count = tables.len(), "rate schedule loaded");
        Self::new(tables)
    }

    /// The most recent table whose `effective_from` is on or before `date`.
    pub fn table_for(&self, date: jiff::civil::Date) -> Result<&RateTable, RateError> {
        self.tables
            .iter()
            .rev()
            .find(|t| t.effective_from <= date)
            .ok_or(RateError::NoTableInForce(date))
    }

    pub fn tables(&self) -> &[RateTable] {
        &self.tables
    }
}
