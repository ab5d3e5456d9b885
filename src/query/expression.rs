use std::fmt;

use crate::query::{ArithmeticOp, Column, Value};

/// A scalar expression usable in projections, predicates and orderings.
///
/// Only `Bind` leaves produce bind values; everything else is purely syntactic.
#[derive(Clone, PartialEq)]
pub enum Expression {
    Column(Column),
    Bind(Value),
    Function { name: String, args: Vec<Expression> },
    Binary { left: Box<Expression>, op: ArithmeticOp, right: Box<Expression> },
    /// The `NULL` keyword, emitted inline rather than bound.
    Null,
    /// `*`, as in `count(*)`
    WildCard,
}

impl Expression {
    pub fn column(column: impl Into<Column>) -> Self {
        Expression::Column(column.into())
    }

    pub fn bind(value: impl Into<Value>) -> Self {
        Expression::Bind(value.into())
    }

    pub fn function(name: &str, args: Vec<Expression>) -> Self {
        Expression::Function { name: name.to_string(), args }
    }

    pub fn binary(left: impl Into<Expression>, op: ArithmeticOp, right: impl Into<Expression>) -> Self {
        Expression::Binary {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }
}

/// Strings name columns; literal text must go through [`Expression::bind`].
impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::Column(Column::from(value))
    }
}

impl From<Column> for Expression {
    fn from(value: Column) -> Self {
        Expression::Column(value)
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Bind(value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Column(c) => write!(f, "{}", c),
            Expression::Bind(v) => write!(f, "bind: {}", v),
            Expression::Function { name, args } => {
                let args = args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "{}({})", name, args)
            },
            Expression::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expression::Null => write!(f, "NULL"),
            Expression::WildCard => write!(f, "*"),
        }
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Column(_) => write!(f, "Column({})", self),
            Expression::Bind(_) => write!(f, "Bind({})", self),
            Expression::Function { .. } => write!(f, "Function({})", self),
            Expression::Binary { .. } => write!(f, "Binary({})", self),
            Expression::Null => write!(f, "Null"),
            Expression::WildCard => write!(f, "WildCard(*)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{ArithmeticOp, Column, Expression, Value};

    #[test]
    pub fn test_str_is_a_column() {
        match Expression::from("users.id") {
            Expression::Column(column) => assert_eq!(column, Column::with_table("users", "id")),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_bind_wraps_value() {
        assert_eq!(Expression::bind("active"), Expression::Bind(Value::Text("active".into())));
    }

    #[test]
    pub fn test_binary_display() {
        let expr = Expression::binary("price", ArithmeticOp::Mul, Expression::bind(2));
        assert_eq!(expr.to_string(), "(col: price * bind: 2)");
    }
}
