use std::fmt;

pub use rusqlite::types::Value;

/// Column type inferred from a SQLite declared type string.
///
/// Columns produced by expressions (aggregates, string functions, window
/// functions) carry no declared type and map to `None` on [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    Integer,
    Real,
    Text,
    Blob,
}

impl ColumnType {
    pub fn from_decl_type(decl_type: &str) -> Option<Self> {
        match decl_type {
            "boolean" | "bool" => Some(ColumnType::Boolean),
            s if s.contains("int") => Some(ColumnType::Integer),
            s if s.contains("char") || s.contains("clob") || s.contains("text") => {
                Some(ColumnType::Text)
            }
            s if s.contains("real") || s.contains("floa") || s.contains("doub") => {
                Some(ColumnType::Real)
            }
            s if s.contains("blob") => Some(ColumnType::Blob),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Integer => "integer",
            ColumnType::Real => "real",
            ColumnType::Text => "text",
            ColumnType::Blob => "blob",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub decl_type: Option<ColumnType>,
}

impl<'a> From<rusqlite::Column<'a>> for Column {
    fn from(col: rusqlite::Column<'a>) -> Self {
        Self {
            name: col.name().to_owned(),
            decl_type: col
                .decl_type()
                .and_then(|decl_type| ColumnType::from_decl_type(&decl_type.to_lowercase())),
        }
    }
}

/// In-memory table produced by one query execution.
///
/// Columns are in projection order. Every row has exactly `columns.len()`
/// values; the executor builds rows positionally so the invariant holds by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularResult {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl TabularResult {
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Position of the named column in the projection, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Values of the named column, in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }
}
