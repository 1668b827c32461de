//! Fixed sample rows shared by the demo binaries.

use tracing::info;

use crate::error::Result;
use crate::repository::ItemsRepository;

pub const FIRST_TASK: &str = "First Task";
pub const SECOND_TASK: &str = "Second Task";
pub const SECOND_TASK_DAYS: i64 = 3;

/// Ids assigned to the seeded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededIds {
    pub first: i64,
    pub second: i64,
}

/// Insert the two sample tasks. Seeding again adds two more rows.
pub fn seed_tasks(repo: &ItemsRepository) -> Result<SeededIds> {
    let first = repo.insert(FIRST_TASK, None)?;
    let second = repo.insert(SECOND_TASK, Some(SECOND_TASK_DAYS))?;
    info!(first, second, "seeded sample tasks");
    Ok(SeededIds { first, second })
}

/// In-memory repository with the schema in place and the sample tasks loaded.
pub fn seeded_in_memory() -> Result<ItemsRepository> {
    let repo = ItemsRepository::open_in_memory()?;
    repo.ensure_schema()?;
    seed_tasks(&repo)?;
    Ok(repo)
}
