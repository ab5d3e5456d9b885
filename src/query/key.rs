use crate::query::{Column, Expression};

/// One entry of the projection list (or of `GROUP BY`).
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// `*`
    All,
    /// `table.*`
    AllOf(String),
    Expression { expression: Expression, alias: Option<String> },
}

impl Key {
    pub fn expression(expression: impl Into<Expression>) -> Self {
        Key::Expression { expression: expression.into(), alias: None }
    }

    pub fn aliased(expression: impl Into<Expression>, alias: &str) -> Self {
        Key::Expression {
            expression: expression.into(),
            alias: Some(alias.to_string()),
        }
    }
}

/// `"*"` and `"t.*"` are wildcards; anything else names a column.
impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match value {
            "*" => Key::All,
            _ => match value.strip_suffix(".*") {
                Some(table) => Key::AllOf(table.to_string()),
                None => Key::expression(value),
            },
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::expression(value.as_str())
    }
}

impl From<Column> for Key {
    fn from(value: Column) -> Self {
        Key::expression(value)
    }
}

impl From<Expression> for Key {
    fn from(value: Expression) -> Self {
        Key::expression(value)
    }
}
