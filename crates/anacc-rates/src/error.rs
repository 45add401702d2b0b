use std::path::PathBuf;

use anacc_core::ClassCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("failed to read rate table at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("rate table is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rate table schema_version {found} is newer than this build supports ({supported})")]
    UnsupportedSchemaVersion { found: u32, supported: u32 },

    #[error("rate table {version} has no row for {code}")]
    MissingClass { version: String, code: ClassCode },

    #[error("rate table {version} lists {code} more than once")]
    DuplicateClass { version: String, code: ClassCode },

    #[error("rate table {version}: {code} {detail}")]
    InvalidClassRow {
        version: String,
        code: ClassCode,
        detail: String,
    },

    #[error("rate table {version}: threshold {name} {detail}")]
    InvalidThreshold {
        version: String,
        name: &'static str,
        detail: String,
    },

    #[error("no rate table in force on {0}")]
    NoTableInForce(jiff::civil::Date),

    #[error("rate schedule has more than one table effective from {0}")]
    DuplicateEffectiveDate(jiff::civil::Date),
}
