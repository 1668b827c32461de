//! Data access for the `items` table.
//!
//! Every statement binds its values as parameters; user input never becomes
//! part of the SQL text.

use rusqlite::{named_params, params_from_iter, Connection, OptionalExtension, Statement};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{Operation, RepositoryError, Result, StoreContext};
use crate::item::Item;
use crate::schema::{self, ITEMS_TABLE};

/// Owns the store connection and exposes CRUD over `items`.
///
/// The connection is opened once and closed when the repository is dropped.
/// Callers share the repository by reference.
#[derive(Debug)]
pub struct ItemsRepository {
    conn: Connection,
}

impl ItemsRepository {
    /// Open the store described by `config`.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = match config.db_path() {
            Some(path) => Connection::open(path),
            None => Connection::open_in_memory(),
        }
        .store_context(Operation::Open)?;
        info!(path = ?config.db_path(), "opened items store");
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(&StoreConfig::in_memory())
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Underlying connection, for ad-hoc queries.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Create the `items` table if it does not exist yet.
    pub fn ensure_schema(&self) -> Result<()> {
        let sql = schema::items_table().create_if_not_exists_sql();
        self.conn
            .execute_batch(&sql)
            .store_context(Operation::EnsureSchema)?;
        debug!(table = ITEMS_TABLE, "schema ensured");
        Ok(())
    }

    /// Insert one item and return its generated id.
    pub fn insert(&self, name: &str, finish_in_days: Option<i64>) -> Result<i64> {
        if name.is_empty() {
            return Err(RepositoryError::validation("name", "must not be empty"));
        }
        self.conn
            .execute(
                "INSERT INTO items (name, finish_in_days) VALUES (:name, :days)",
                named_params! { ":name": name, ":days": finish_in_days },
            )
            .store_context(Operation::Insert)?;
        let id = self.conn.last_insert_rowid();
        debug!(id, item = name, ?finish_in_days, "inserted item");
        Ok(id)
    }

    /// All items in insertion order.
    pub fn find_all(&self) -> Result<Items<'_>> {
        let sql = format!("SELECT {} FROM {ITEMS_TABLE} ORDER BY id", Item::COLUMNS);
        Items::prepare(&self.conn, &sql, None, Operation::FindAll)
    }

    /// Items whose name contains `substring`, in insertion order.
    ///
    /// `%`, `_` and `\` in `substring` match literally. Letter case follows
    /// SQLite's `LIKE`, which ignores ASCII case.
    pub fn find_by_name_contains(&self, substring: &str) -> Result<Items<'_>> {
        let sql = format!(
            "SELECT {} FROM {ITEMS_TABLE} WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id",
            Item::COLUMNS
        );
        let pattern = format!("%{}%", escape_like(substring));
        Items::prepare(
            &self.conn,
            &sql,
            Some(pattern),
            Operation::FindByNameContains,
        )
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Item>> {
        let sql = format!("SELECT {} FROM {ITEMS_TABLE} WHERE id = :id", Item::COLUMNS);
        self.conn
            .query_row(&sql, named_params! { ":id": id }, Item::from_row)
            .optional()
            .store_context(Operation::FindById)
    }

    /// Number of rows with the given id (0 or 1).
    pub fn count_by_id(&self, id: i64) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT count(*) FROM items WHERE id = :id",
                named_params! { ":id": id },
                |row| row.get(0),
            )
            .store_context(Operation::CountById)
    }

    /// Set `finish_in_days` for `id`. Returns the affected-row count; an
    /// unknown id affects nothing and is not an error.
    pub fn update_finish_in_days(&self, id: i64, days: i64) -> Result<usize> {
        let affected = self
            .conn
            .execute(
                "UPDATE items SET finish_in_days = :days WHERE id = :id",
                named_params! { ":days": days, ":id": id },
            )
            .store_context(Operation::UpdateFinishInDays)?;
        debug!(id, days, affected, "updated finish_in_days");
        Ok(affected)
    }

    /// Delete the row with `id`. Returns the affected-row count.
    pub fn delete_by_id(&self, id: i64) -> Result<usize> {
        let affected = self
            .conn
            .execute(
                "DELETE FROM items WHERE id = :id",
                named_params! { ":id": id },
            )
            .store_context(Operation::DeleteById)?;
        debug!(id, affected, "deleted item");
        Ok(affected)
    }
}

/// Lazy result set over `items`.
///
/// Holds a prepared statement; each call to [`Items::iter`] re-executes it
/// and decodes rows one at a time.
#[derive(Debug)]
pub struct Items<'conn> {
    statement: Statement<'conn>,
    pattern: Option<String>,
    operation: Operation,
}

impl<'conn> Items<'conn> {
    fn prepare(
        conn: &'conn Connection,
        sql: &str,
        pattern: Option<String>,
        operation: Operation,
    ) -> Result<Self> {
        let statement = conn.prepare(sql).store_context(operation)?;
        Ok(Self {
            statement,
            pattern,
            operation,
        })
    }

    /// Run the query and iterate over the matching items.
    pub fn iter(&mut self) -> Result<impl Iterator<Item = Result<Item>> + '_> {
        let operation = self.operation;
        debug!(%operation, "querying items");
        let rows = self
            .statement
            .query_map(params_from_iter(self.pattern.iter()), Item::from_row)
            .store_context(operation)?;
        Ok(rows.map(move |row| row.store_context(operation)))
    }

    /// Run the query and collect every item.
    pub fn fetch_all(&mut self) -> Result<Vec<Item>> {
        self.iter()?.collect()
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("First"), "First");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
