use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A row of the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub finish_in_days: Option<i64>,
    pub created: NaiveDateTime,
}

impl Item {
    /// Columns in table order, matching [`Item::from_row`].
    pub(crate) const COLUMNS: &'static str = "id, name, finish_in_days, created";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            finish_in_days: row.get(2)?,
            created: row.get(3)?,
        })
    }
}
