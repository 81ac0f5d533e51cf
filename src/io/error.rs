use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV operation failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "table is missing required columns: expected [{}], found [{}]",
        .expected.join(", "),
        .found.join(", ")
    )]
    MissingColumns {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("failed to render chart '{}': {details}", .path.display())]
    Chart { path: PathBuf, details: String },
}

impl Error {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn chart(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::Chart {
            path: path.into(),
            details: details.to_string(),
        }
    }

    /// Fails with [`Error::MissingColumns`] unless every `expected` column is in `found`.
    pub fn check_columns(expected: &[&str], found: &[String]) -> Result<(), Self> {
        if expected.iter().all(|e| found.iter().any(|f| f == e)) {
            return Ok(());
        }
        Err(Self::MissingColumns {
            expected: expected.iter().map(|e| e.to_string()).collect(),
            found: found.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_expected_and_found() {
        let found = vec!["State".to_string(), "Residue".to_string()];
        let err = Error::check_columns(&["State", "ResidueName"], &found).unwrap_err();
        assert_eq!(
            err.to_string(),
            "table is missing required columns: expected [State, ResidueName], found [State, Residue]"
        );
    }

    #[test]
    fn check_columns_accepts_extra_columns() {
        let found = vec!["Extra".to_string(), "State".to_string()];
        assert!(Error::check_columns(&["State"], &found).is_ok());
    }
}
