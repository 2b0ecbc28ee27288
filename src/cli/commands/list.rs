use anyhow::Result;
use std::io::Write;

use super::write_catalog;
use crate::catalog::{CategoryFilter, WorkshopCatalog};

/// One-shot catalog listing over the configured seed.
pub fn run(catalog: &WorkshopCatalog, category: &str) -> Result<()> {
    let filter = CategoryFilter::parse(category);
    let mut stdout = std::io::stdout().lock();
    write_catalog(&mut stdout, catalog, &filter)?;
    stdout.flush()?;
    Ok(())
}
