use crate::{query::{Join, Predicate, Value}, serializer::{Serializer, ToSql}};

impl Predicate {
    /// Nested AND/OR groups are parenthesised so the tree survives the trip to text.
    fn to_nested_sql(&self, serializer: &Serializer, binds: &mut Vec<Value>) -> String {
        let sql = self.to_sql(serializer, binds);
        if self.is_group() {
            format!("({})", sql)
        } else {
            sql
        }
    }

    fn group_sql(predicates: &[Predicate], keyword: &str, empty: &str, serializer: &Serializer, binds: &mut Vec<Value>) -> String {
        if predicates.is_empty() {
            return empty.to_string();
        }

        predicates
            .iter()
            .map(|predicate| predicate.to_nested_sql(serializer, binds))
            .collect::<Vec<_>>()
            .join(keyword)
    }
}

impl ToSql for Predicate {
    fn to_sql(&self, serializer: &Serializer, binds: &mut Vec<Value>) -> String {
        match self {
            Predicate::And(predicates) => Predicate::group_sql(predicates, " AND ", "TRUE", serializer, binds),
            Predicate::Or(predicates) => Predicate::group_sql(predicates, " OR ", "FALSE", serializer, binds),
            Predicate::Not(predicate) => format!("NOT ({})", predicate.to_sql(serializer, binds)),
            Predicate::Compare { left, op, right } => {
                let left = left.to_sql(serializer, binds);
                let right = right.to_sql(serializer, binds);
                format!("{} {} {}", left, op, right)
            },
            Predicate::IsNull { expr, negated } => {
                let expr = expr.to_sql(serializer, binds);
                if *negated {
                    format!("{} IS NOT NULL", expr)
                } else {
                    format!("{} IS NULL", expr)
                }
            },
            Predicate::InList { expr, list, negated } => {
                // `x IN ()` is not valid PostgreSQL
                if list.is_empty() {
                    let constant = if *negated { "TRUE" } else { "FALSE" };
                    return constant.to_string();
                }
                let expr = expr.to_sql(serializer, binds);
                let list = serializer.joined(list, ", ", binds);
                if *negated {
                    format!("{} NOT IN ({})", expr, list)
                } else {
                    format!("{} IN ({})", expr, list)
                }
            },
            Predicate::Like { expr, pattern, negated, case_insensitive } => {
                let expr = expr.to_sql(serializer, binds);
                let pattern = pattern.to_sql(serializer, binds);
                let keyword = match (*negated, *case_insensitive) {
                    (false, false) => "LIKE",
                    (false, true) => "ILIKE",
                    (true, false) => "NOT LIKE",
                    (true, true) => "NOT ILIKE",
                };
                format!("{} {} {}", expr, keyword, pattern)
            },
        }
    }
}

impl ToSql for Join {
    fn to_sql(&self, serializer: &Serializer, binds: &mut Vec<Value>) -> String {
        let table = self.table.to_sql(serializer, binds);
        let condition = self.condition.to_sql(serializer, binds);
        format!("{} {} ON {}", self.kind.keyword(), table, condition)
    }
}

#[cfg(test)]
mod tests {
    use crate::{query::{ComparatorOp, Expression, Join, JoinType, Predicate, TableName, Value}, serializer::{Serializer, ToSql}};

    fn sql(predicate: &Predicate) -> (String, Vec<Value>) {
        let mut binds = vec![];
        let sql = predicate.to_sql(&Serializer::new(), &mut binds);
        (sql, binds)
    }

    #[test]
    pub fn test_predicate_compare() {
        let (text, binds) = sql(&Predicate::eq("id", 5));

        assert_eq!(text, "id = $1");
        assert_eq!(binds, vec![Value::Int(5)]);
    }

    #[test]
    pub fn test_predicate_all_comparators() {
        let expected = [
            (ComparatorOp::Eq, "a = $1"),
            (ComparatorOp::NotEq, "a <> $1"),
            (ComparatorOp::Lt, "a < $1"),
            (ComparatorOp::LtEq, "a <= $1"),
            (ComparatorOp::Gt, "a > $1"),
            (ComparatorOp::GtEq, "a >= $1"),
        ];

        for (op, text) in expected {
            let (result, _) = sql(&Predicate::compare("a", op, Expression::bind(1)));
            assert_eq!(result, text);
        }
    }

    #[test]
    pub fn test_predicate_and_of_or() {
        let predicate = Predicate::gt("age", 16)
            .and(Predicate::eq("city", "Porto").or(Predicate::like("city", "Mat%")));

        let (text, binds) = sql(&predicate);

        assert_eq!(text, "age > $1 AND (city = $2 OR city LIKE $3)");
        assert_eq!(binds, vec![Value::Int(16), Value::from("Porto"), Value::from("Mat%")]);
    }

    #[test]
    pub fn test_predicate_nested_and_keeps_structure() {
        let predicate = Predicate::Or(vec![
            Predicate::And(vec![Predicate::eq("a", 1), Predicate::eq("b", 2)]),
            Predicate::eq("c", 3),
        ]);

        let (text, _) = sql(&predicate);

        assert_eq!(text, "(a = $1 AND b = $2) OR c = $3");
    }

    #[test]
    pub fn test_predicate_empty_groups() {
        assert_eq!(sql(&Predicate::And(vec![])).0, "TRUE");
        assert_eq!(sql(&Predicate::Or(vec![])).0, "FALSE");
    }

    #[test]
    pub fn test_predicate_not() {
        let (text, _) = sql(&Predicate::eq("a", 1).or(Predicate::eq("b", 2)).negate());

        assert_eq!(text, "NOT (a = $1 OR b = $2)");
    }

    #[test]
    pub fn test_predicate_is_null() {
        assert_eq!(sql(&Predicate::is_null("deleted_at")).0, "deleted_at IS NULL");
        assert_eq!(sql(&Predicate::is_not_null("deleted_at")).0, "deleted_at IS NOT NULL");
    }

    #[test]
    pub fn test_predicate_in_list() {
        let (text, binds) = sql(&Predicate::in_list("id", [1, 2, 3]));

        assert_eq!(text, "id IN ($1, $2, $3)");
        assert_eq!(binds.len(), 3);

        let (text, _) = sql(&Predicate::not_in_list("status", ["banned"]));
        assert_eq!(text, "status NOT IN ($1)");
    }

    #[test]
    pub fn test_predicate_empty_in_list() {
        let empty: [i32; 0] = [];

        let (text, binds) = sql(&Predicate::in_list("id", empty));
        assert_eq!(text, "FALSE");
        assert!(binds.is_empty());

        let (text, _) = sql(&Predicate::not_in_list("id", empty));
        assert_eq!(text, "TRUE");
    }

    #[test]
    pub fn test_predicate_like_variants() {
        assert_eq!(sql(&Predicate::like("name", "a%")).0, "name LIKE $1");
        assert_eq!(sql(&Predicate::ilike("name", "a%")).0, "name ILIKE $1");

        let negated = Predicate::Like {
            expr: "name".into(),
            pattern: Expression::bind("a%"),
            negated: true,
            case_insensitive: true,
        };
        assert_eq!(sql(&negated).0, "name NOT ILIKE $1");
    }

    #[test]
    pub fn test_join_sql() {
        let join = Join::new(
            JoinType::Inner,
            TableName::from("orders").alias("o"),
            Predicate::columns_eq("o.user_id", "u.id").and(Predicate::gt("o.total", 100)),
        );

        let mut binds = vec![Value::from("x")];
        let text = join.to_sql(&Serializer::new(), &mut binds);

        assert_eq!(text, "INNER JOIN orders AS o ON o.user_id = u.id AND o.total > $2");
        assert_eq!(binds, vec![Value::from("x"), Value::Int(100)]);
    }
}
