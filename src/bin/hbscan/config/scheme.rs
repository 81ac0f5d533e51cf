use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use hbscan::ClassScheme;

/// Which embedded scheme to fall back on.
#[derive(Debug, Clone, Copy)]
pub enum SchemeKind {
    Scan,
    Table,
}

pub fn load_scheme(path: Option<&Path>, kind: SchemeKind) -> Result<ClassScheme> {
    let Some(path) = path else {
        return Ok(match kind {
            SchemeKind::Scan => ClassScheme::scan_default().clone(),
            SchemeKind::Table => ClassScheme::table_default().clone(),
        });
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read classification scheme: {}", path.display()))?;
    let scheme = ClassScheme::from_toml(&text)
        .with_context(|| format!("Invalid classification scheme: {}", path.display()))?;

    log::info!(
        "loaded {} categories from {}",
        scheme.categories().len(),
        path.display()
    );
    Ok(scheme)
}
