use std::future::Future;

use indexmap::IndexMap;

use crate::{Error, Result, query::Value};

/// The transport that actually runs statements.
///
/// Implementations own the wire protocol and row decoding; this crate only
/// hands over the serializer's two outputs and reads the rows back.
pub trait Connection: Send + Sync {
    fn query(&self, sql: String, binds: Vec<Value>) -> impl Future<Output = Result<Vec<Row>>> + Send;
}

/// A decoded result row, columns in result-set order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.columns.insert(column.to_string(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn require(&self, column: &str) -> Result<&Value> {
        self.get(column).ok_or_else(|| Error::MissingColumn(column.to_string()))
    }

    /// Reads an `oid`-style column. Integers outside `u32` are a decode error.
    pub fn try_get_u32(&self, column: &str) -> Result<u32> {
        let value = self.require(column)?;
        let decode_error = || Error::Decode {
            column: column.to_string(),
            expected: "u32",
            found: value.kind(),
        };

        match value {
            Value::Int(n) => u32::try_from(*n).map_err(|_| decode_error()),
            _ => Err(decode_error()),
        }
    }

    pub fn try_get_text(&self, column: &str) -> Result<&str> {
        match self.require(column)? {
            Value::Text(s) => Ok(s),
            other => Error::Decode {
                column: column.to_string(),
                expected: "text",
                found: other.kind(),
            }.err(),
        }
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self { columns: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, connection::Row, query::Value};

    #[test]
    pub fn test_row_preserves_column_order() {
        let row = Row::new().with("relname", "users").with("oid", 16384);

        let names = row.columns().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, vec!["relname", "oid"]);
    }

    #[test]
    pub fn test_row_decodes_oid_and_name() {
        let row = Row::new().with("oid", 16384).with("relname", "users");

        assert_eq!(row.try_get_u32("oid"), Ok(16384));
        assert_eq!(row.try_get_text("relname"), Ok("users"));
    }

    #[test]
    pub fn test_row_missing_column() {
        let row = Row::new();

        assert_eq!(row.try_get_u32("oid"), Err(Error::MissingColumn("oid".into())));
    }

    #[test]
    pub fn test_row_wrong_kind() {
        let row = Row::new().with("oid", "users").with("relname", Value::Int(1));

        assert_eq!(
            row.try_get_u32("oid"),
            Err(Error::Decode { column: "oid".into(), expected: "u32", found: "text" })
        );
        assert_eq!(
            row.try_get_text("relname"),
            Err(Error::Decode { column: "relname".into(), expected: "text", found: "int" })
        );
    }

    #[test]
    pub fn test_row_out_of_range_oid() {
        let row = Row::new().with("oid", -1);

        assert!(matches!(row.try_get_u32("oid"), Err(Error::Decode { .. })));
    }
}
