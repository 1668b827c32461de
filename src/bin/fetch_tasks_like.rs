//! Prints seeded tasks whose name contains "First".

use std::io;

use anyhow::{Context, Result};
use items_sqlite::{logging, render, seeded_in_memory};

const NAME_PART: &str = "First";

fn main() -> Result<()> {
    logging::init_tracing(false)?;
    let repo = seeded_in_memory().context("failed to prepare items store")?;

    let items = repo.find_by_name_contains(NAME_PART)?.fetch_all()?;
    render::write_items(&mut io::stdout().lock(), items)?;
    Ok(())
}
