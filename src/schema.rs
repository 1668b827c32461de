//! Table definitions and DDL rendering.

use std::fmt;

/// Name of the only table managed by this crate.
pub const ITEMS_TABLE: &str = "items";

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn add_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    pub fn create_if_not_exists_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(ColumnDefinition::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({})", self.name, columns)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
    pub default_value: Option<DefaultValue>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
            default_value: None,
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_default(mut self, default_value: DefaultValue) -> Self {
        self.default_value = Some(default_value);
        self
    }
}

impl fmt::Display for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;
        for constraint in &self.constraints {
            write!(f, " {constraint}")?;
        }
        if let Some(default_value) = &self.default_value {
            write!(f, " DEFAULT {default_value}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataType {
    Integer,
    Varchar(u16),
    Timestamp,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => f.write_str("INTEGER"),
            DataType::Varchar(len) => write!(f, "VARCHAR({len})"),
            DataType::Timestamp => f.write_str("TIMESTAMP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnConstraint {
    /// `PRIMARY KEY AUTOINCREMENT`; ids are never reused.
    AutoIncrementPrimaryKey,
    NotNull,
    Null,
}

impl fmt::Display for ColumnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnConstraint::AutoIncrementPrimaryKey => f.write_str("PRIMARY KEY AUTOINCREMENT"),
            ColumnConstraint::NotNull => f.write_str("NOT NULL"),
            ColumnConstraint::Null => f.write_str("NULL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    CurrentTimestamp,
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::CurrentTimestamp => f.write_str("CURRENT_TIMESTAMP"),
        }
    }
}

/// Definition of the `items` table.
pub fn items_table() -> TableDefinition {
    TableDefinition::new(ITEMS_TABLE)
        .add_column(
            ColumnDefinition::new("id", DataType::Integer)
                .with_constraint(ColumnConstraint::AutoIncrementPrimaryKey),
        )
        .add_column(
            ColumnDefinition::new("name", DataType::Varchar(255))
                .with_constraint(ColumnConstraint::NotNull),
        )
        .add_column(
            ColumnDefinition::new("finish_in_days", DataType::Integer)
                .with_constraint(ColumnConstraint::Null),
        )
        .add_column(
            ColumnDefinition::new("created", DataType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
}
