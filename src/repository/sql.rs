//! Partial-update statement builder.
//!
//! CRUD endpoints accept optional fields; instead of string-pasting SQL per
//! combination, updates go through this builder. Column names must come from
//! the repository's allow-list, so request data can never reach the
//! identifier position of a statement.

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// A bindable value for an UPDATE assignment
#[derive(Debug, Clone)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

/// Builder for `UPDATE <table> SET ... , updated_at = NOW() WHERE id = $n`
pub struct UpdateBuilder {
    table: &'static str,
    allowed: &'static [&'static str],
    sets: Vec<(&'static str, SqlValue)>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            table,
            allowed,
            sets: Vec::new(),
        }
    }

    /// Record an assignment
    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.sets.push((column, value.into()));
        self
    }

    /// Record an assignment only when the value is present
    pub fn set_opt<T: Into<SqlValue>>(self, column: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    fn render(&self) -> AppResult<String> {
        if self.sets.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }
        for (column, _) in &self.sets {
            if !self.allowed.contains(column) {
                return Err(AppError::Internal(format!(
                    "Column {} is not updatable on {}",
                    column, self.table
                )));
            }
        }
        let assignments: Vec<String> = self
            .sets
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ${}", column, i + 1))
            .collect();
        Ok(format!(
            "UPDATE {} SET {}, updated_at = NOW() WHERE id = ${}",
            self.table,
            assignments.join(", "),
            self.sets.len() + 1
        ))
    }

    /// Run the update, returning the number of affected rows
    pub async fn execute(self, pool: &Pool<Postgres>, id: i32) -> AppResult<u64> {
        let sql = self.render()?;
        let mut query = sqlx::query(&sql);
        for (_, value) in self.sets {
            query = match value {
                SqlValue::Text(v) => query.bind(v),
                SqlValue::Int(v) => query.bind(v),
                SqlValue::Bool(v) => query.bind(v),
                SqlValue::Bytes(v) => query.bind(v),
            };
        }
        let result = query.bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str] = &["name", "status"];

    #[test]
    fn renders_assignments_in_order() {
        let sql = UpdateBuilder::new("locations", COLUMNS)
            .set("name", "Warehouse")
            .set("status", "Inactive")
            .render()
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE locations SET name = $1, status = $2, updated_at = NOW() WHERE id = $3"
        );
    }

    #[test]
    fn rejects_empty_update() {
        let err = UpdateBuilder::new("locations", COLUMNS).render().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_unknown_column() {
        let err = UpdateBuilder::new("locations", COLUMNS)
            .set("id", 7)
            .render()
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn skips_absent_optional_fields() {
        let builder = UpdateBuilder::new("locations", COLUMNS)
            .set_opt("name", None::<String>)
            .set_opt("status", Some("Active"));
        let sql = builder.render().unwrap();
        assert_eq!(
            sql,
            "UPDATE locations SET status = $1, updated_at = NOW() WHERE id = $2"
        );
    }
}
