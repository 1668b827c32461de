//! Sets `finish_in_days` on the first seeded task and prints it.

use std::io;

use anyhow::{Context, Result};
use items_sqlite::{logging, render, seeded_in_memory};

const RECORD_ID: i64 = 1;
const DAYS: i64 = 3;

fn main() -> Result<()> {
    logging::init_tracing(false)?;
    let repo = seeded_in_memory().context("failed to prepare items store")?;

    repo.update_finish_in_days(RECORD_ID, DAYS)?;
    let item = repo.find_by_id(RECORD_ID)?;
    render::write_items(&mut io::stdout().lock(), item)?;
    Ok(())
}
