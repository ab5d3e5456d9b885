use crate::query::{Column, ComparatorOp, Expression, Value};

/// A boolean filter tree used by `WHERE` and `JOIN ... ON`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),

    // Predicates that *embed* scalars:
    Compare { left: Expression, op: ComparatorOp, right: Expression }, // =, <, <=, >, >=, <>
    IsNull  { expr: Expression, negated: bool },
    InList  { expr: Expression, list: Vec<Expression>, negated: bool },
    Like    { expr: Expression, pattern: Expression, negated: bool, case_insensitive: bool },
}

impl Predicate {
    pub fn compare(left: impl Into<Expression>, op: ComparatorOp, right: impl Into<Expression>) -> Self {
        Self::Compare { left: left.into(), op, right: right.into() }
    }

    fn compare_value(column: impl Into<Column>, op: ComparatorOp, value: impl Into<Value>) -> Self {
        Self::Compare {
            left: Expression::Column(column.into()),
            op,
            right: Expression::Bind(value.into()),
        }
    }

    pub fn eq(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare_value(column, ComparatorOp::Eq, value)
    }

    pub fn not_eq(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare_value(column, ComparatorOp::NotEq, value)
    }

    pub fn lt(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare_value(column, ComparatorOp::Lt, value)
    }

    pub fn lt_eq(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare_value(column, ComparatorOp::LtEq, value)
    }

    pub fn gt(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare_value(column, ComparatorOp::Gt, value)
    }

    pub fn gt_eq(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::compare_value(column, ComparatorOp::GtEq, value)
    }

    /// Column-to-column equality, the usual shape of a join condition.
    pub fn columns_eq(left: impl Into<Column>, right: impl Into<Column>) -> Self {
        Self::Compare {
            left: Expression::Column(left.into()),
            op: ComparatorOp::Eq,
            right: Expression::Column(right.into()),
        }
    }

    pub fn is_null(column: impl Into<Column>) -> Self {
        Self::IsNull { expr: Expression::Column(column.into()), negated: false }
    }

    pub fn is_not_null(column: impl Into<Column>) -> Self {
        Self::IsNull { expr: Expression::Column(column.into()), negated: true }
    }

    pub fn in_list<V: Into<Value>>(column: impl Into<Column>, values: impl IntoIterator<Item = V>) -> Self {
        Self::InList {
            expr: Expression::Column(column.into()),
            list: values.into_iter().map(|v| Expression::Bind(v.into())).collect(),
            negated: false,
        }
    }

    pub fn not_in_list<V: Into<Value>>(column: impl Into<Column>, values: impl IntoIterator<Item = V>) -> Self {
        match Self::in_list(column, values) {
            Self::InList { expr, list, .. } => Self::InList { expr, list, negated: true },
            other => other,
        }
    }

    pub fn like(column: impl Into<Column>, pattern: impl Into<Value>) -> Self {
        Self::Like {
            expr: Expression::Column(column.into()),
            pattern: Expression::Bind(pattern.into()),
            negated: false,
            case_insensitive: false,
        }
    }

    pub fn ilike(column: impl Into<Column>, pattern: impl Into<Value>) -> Self {
        Self::Like {
            expr: Expression::Column(column.into()),
            pattern: Expression::Bind(pattern.into()),
            negated: false,
            case_insensitive: true,
        }
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Combines two predicates with AND, flattening into an existing AND group.
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Self::And(mut predicates) => {
                predicates.push(other);
                Self::And(predicates)
            },
            current => Self::And(vec![current, other]),
        }
    }

    /// Combines two predicates with OR, flattening into an existing OR group.
    pub fn or(self, other: Predicate) -> Self {
        match self {
            Self::Or(mut predicates) => {
                predicates.push(other);
                Self::Or(predicates)
            },
            current => Self::Or(vec![current, other]),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::And(_) | Self::Or(_))
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{ComparatorOp, Expression, Predicate, Value};

    #[test]
    pub fn test_predicate_eq_binds_value() {
        match Predicate::eq("id", 5) {
            Predicate::Compare { left, op, right } => {
                assert_eq!(left, Expression::from("id"));
                assert_eq!(op, ComparatorOp::Eq);
                assert_eq!(right, Expression::Bind(Value::Int(5)));
            },
            _ => panic!(),
        };
    }

    #[test]
    pub fn test_predicate_and_flattens() {
        let predicate = Predicate::eq("a", 1)
            .and(Predicate::eq("b", 2))
            .and(Predicate::eq("c", 3));

        match predicate {
            Predicate::And(predicates) => assert_eq!(predicates.len(), 3),
            _ => panic!(),
        };
    }

    #[test]
    pub fn test_predicate_or_inside_and_is_kept() {
        let predicate = Predicate::eq("a", 1)
            .and(Predicate::eq("b", 2).or(Predicate::eq("c", 3)));

        match predicate {
            Predicate::And(predicates) => {
                assert_eq!(predicates.len(), 2);
                assert!(matches!(predicates[1], Predicate::Or(_)));
            },
            _ => panic!(),
        };
    }

    #[test]
    pub fn test_predicate_not_in_list() {
        match Predicate::not_in_list("status", ["a", "b"]) {
            Predicate::InList { list, negated, .. } => {
                assert_eq!(list.len(), 2);
                assert!(negated);
            },
            _ => panic!(),
        };
    }

    #[test]
    pub fn test_predicate_is_not_null() {
        match Predicate::is_not_null("deleted_at") {
            Predicate::IsNull { negated, .. } => assert!(negated),
            _ => panic!(),
        };
    }
}
