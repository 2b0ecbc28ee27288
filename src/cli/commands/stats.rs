use anyhow::Result;
use std::io::Write;

use super::write_stats;
use crate::catalog::WorkshopCatalog;

/// One-shot statistics readout over the configured seed.
pub fn run(catalog: &WorkshopCatalog) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_stats(&mut stdout, &catalog.stats())?;
    stdout.flush()?;
    Ok(())
}
