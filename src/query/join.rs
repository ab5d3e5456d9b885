use crate::query::{Predicate, TableName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinType,
    pub table: TableName,
    pub condition: Predicate,
}

impl Join {
    pub fn new(kind: JoinType, table: impl Into<TableName>, condition: Predicate) -> Self {
        Self { kind, table: table.into(), condition }
    }
}
