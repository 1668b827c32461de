//! Prints every seeded task.

use std::io;

use anyhow::{Context, Result};
use items_sqlite::{logging, render, seeded_in_memory};

fn main() -> Result<()> {
    logging::init_tracing(false)?;
    let repo = seeded_in_memory().context("failed to prepare items store")?;

    let items = repo.find_all()?.fetch_all()?;
    render::write_items(&mut io::stdout().lock(), items)?;
    Ok(())
}
