use crate::{query::{Direction, Expression, NullsOrder, OrderBy, Value}, serializer::{Serializer, ToSql}};

impl ToSql for Expression {
    fn to_sql(&self, serializer: &Serializer, binds: &mut Vec<Value>) -> String {
        match self {
            Expression::Column(column) => column.to_sql(serializer, binds),
            Expression::Bind(value) => serializer.bind(value, binds),
            // Function names are emitted as written; quoting would make them case-sensitive.
            Expression::Function { name, args } => {
                format!("{}({})", name, serializer.joined(args, ", ", binds))
            },
            Expression::Binary { left, op, right } => {
                let left = left.to_sql(serializer, binds);
                let right = right.to_sql(serializer, binds);
                format!("({} {} {})", left, op, right)
            },
            Expression::Null => "NULL".to_string(),
            Expression::WildCard => "*".to_string(),
        }
    }
}

impl ToSql for OrderBy {
    fn to_sql(&self, serializer: &Serializer, binds: &mut Vec<Value>) -> String {
        let mut sql = self.expression.to_sql(serializer, binds);
        match self.direction {
            Some(Direction::Ascending) => sql.push_str(" ASC"),
            Some(Direction::Descending) => sql.push_str(" DESC"),
            None => {},
        }
        match self.nulls {
            Some(NullsOrder::First) => sql.push_str(" NULLS FIRST"),
            Some(NullsOrder::Last) => sql.push_str(" NULLS LAST"),
            None => {},
        }
        sql
    }
}
