use crate::query::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

/// A sort specification. A missing direction leaves the database default.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub expression: Expression,
    pub direction: Option<Direction>,
    pub nulls: Option<NullsOrder>,
}

impl OrderBy {
    pub fn new(expression: impl Into<Expression>) -> Self {
        Self { expression: expression.into(), direction: None, nulls: None }
    }

    pub fn asc(expression: impl Into<Expression>) -> Self {
        Self { direction: Some(Direction::Ascending), ..Self::new(expression) }
    }

    pub fn desc(expression: impl Into<Expression>) -> Self {
        Self { direction: Some(Direction::Descending), ..Self::new(expression) }
    }

    pub fn nulls(mut self, nulls: NullsOrder) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

impl From<&str> for OrderBy {
    fn from(value: &str) -> Self {
        OrderBy::new(value)
    }
}
