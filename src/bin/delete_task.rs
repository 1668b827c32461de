//! Deletes the first seeded task and reports how many rows remain for its id.

use anyhow::{Context, Result};
use items_sqlite::{logging, seeded_in_memory};

const RECORD_ID: i64 = 1;

fn main() -> Result<()> {
    logging::init_tracing(false)?;
    let repo = seeded_in_memory().context("failed to prepare items store")?;

    repo.delete_by_id(RECORD_ID)?;
    let remaining = repo.count_by_id(RECORD_ID)?;
    println!("Found {remaining} records");
    Ok(())
}
