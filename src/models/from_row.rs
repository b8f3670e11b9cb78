use rusqlite::Row;

/// Builds a model from a `SELECT *` row, reading columns by name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
