use std::fmt;

/// A possibly table-qualified column reference.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub table: Option<String>,
    pub name: String,
}

impl Column {
    pub fn new(name: &str) -> Self {
        Self { table: None, name: name.to_string() }
    }

    pub fn with_table(table: &str, name: &str) -> Self {
        Self {
            table: Some(table.to_string()),
            name: name.to_string(),
        }
    }
}

/// `"users.id"` becomes a qualified column, `"id"` a bare one.
impl From<&str> for Column {
    fn from(value: &str) -> Self {
        match value.split_once('.') {
            Some((table, name)) => Column::with_table(table, name),
            None => Column::new(value),
        }
    }
}

impl From<String> for Column {
    fn from(value: String) -> Self {
        Column::from(value.as_str())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "col: {}.{}", table, self.name),
            None => write!(f, "col: {}", self.name),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column({})", self)
    }
}
