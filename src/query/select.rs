// SELECT DISTINCT(a.dept) a.dept, COUNT(*) AS total
// FROM employees a
// INNER JOIN departments d ON d.id = a.dept_id
// WHERE a.age > $1 AND (d.city = $2 OR d.city ILIKE $3)
// GROUP BY a.dept
// ORDER BY a.dept DESC NULLS LAST
// LIMIT 20
// OFFSET 60

use crate::query::{Column, Join, JoinType, Key, OrderBy, Predicate, TableName};

/// Which row candidates are available for selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Candidates {
    #[default]
    All,
    /// An empty column list means distinct over the whole row.
    Distinct { columns: Vec<Column> },
}

/// Declarative description of a `SELECT` statement.
///
/// A `Select` is plain data: it holds no bind state and nothing mutates it
/// while it is serialized. Literal values live inside predicates, joins and
/// orderings as [`crate::query::Expression::Bind`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub candidates: Candidates,
    pub keys: Vec<Key>,
    pub tables: Vec<TableName>,
    pub joins: Vec<Join>,
    pub predicate: Option<Predicate>,
    pub order_by: Vec<OrderBy>,
    pub group_by: Vec<Key>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinct(mut self) -> Self {
        self.candidates = Candidates::Distinct { columns: vec![] };
        self
    }

    pub fn distinct_on<C: Into<Column>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.candidates = Candidates::Distinct {
            columns: columns.into_iter().map(Into::into).collect(),
        };
        self
    }

    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.keys.push(key.into());
        self
    }

    pub fn keys<K: Into<Key>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn from(mut self, table: impl Into<TableName>) -> Self {
        self.tables.push(table.into());
        self
    }

    pub fn join(mut self, kind: JoinType, table: impl Into<TableName>, condition: Predicate) -> Self {
        self.joins.push(Join::new(kind, table, condition));
        self
    }

    pub fn inner_join(self, table: impl Into<TableName>, condition: Predicate) -> Self {
        self.join(JoinType::Inner, table, condition)
    }

    pub fn left_join(self, table: impl Into<TableName>, condition: Predicate) -> Self {
        self.join(JoinType::Left, table, condition)
    }

    /// ANDs `predicate` onto the current filter.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(match self.predicate.take() {
            Some(current) => current.and(predicate),
            None => predicate,
        });
        self
    }

    /// ORs `predicate` onto the current filter.
    pub fn or_filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(match self.predicate.take() {
            Some(current) => current.or(predicate),
            None => predicate,
        });
        self
    }

    pub fn order_by(mut self, order: impl Into<OrderBy>) -> Self {
        self.order_by.push(order.into());
        self
    }

    pub fn group_by(mut self, key: impl Into<Key>) -> Self {
        self.group_by.push(key.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{Candidates, Column, JoinType, OrderBy, Predicate, Select};

    #[test]
    pub fn test_select_default_is_empty() {
        let select = Select::new();

        assert_eq!(select.candidates, Candidates::All);
        assert!(select.keys.is_empty());
        assert!(select.tables.is_empty());
        assert!(select.joins.is_empty());
        assert!(select.predicate.is_none());
        assert!(select.order_by.is_empty());
        assert!(select.group_by.is_empty());
        assert_eq!(select.limit, None);
        assert_eq!(select.offset, None);
    }

    #[test]
    pub fn test_select_builder() {
        let select = Select::new()
            .distinct_on(["dept"])
            .keys(["dept", "name"])
            .from("employees")
            .inner_join("departments", Predicate::columns_eq("departments.id", "employees.dept_id"))
            .filter(Predicate::gt("age", 16))
            .group_by("dept")
            .order_by(OrderBy::desc("dept"))
            .limit(20)
            .offset(60);

        assert_eq!(select.candidates, Candidates::Distinct { columns: vec![Column::new("dept")] });
        assert_eq!(select.keys.len(), 2);
        assert_eq!(select.tables.len(), 1);
        assert_eq!(select.joins[0].kind, JoinType::Inner);
        assert!(select.predicate.is_some());
        assert_eq!(select.group_by.len(), 1);
        assert_eq!(select.order_by.len(), 1);
        assert_eq!(select.limit, Some(20));
        assert_eq!(select.offset, Some(60));
    }

    #[test]
    pub fn test_select_filter_accumulates_with_and() {
        let select = Select::new()
            .filter(Predicate::eq("a", 1))
            .filter(Predicate::eq("b", 2));

        match select.predicate {
            Some(Predicate::And(predicates)) => assert_eq!(predicates.len(), 2),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_select_or_filter() {
        let select = Select::new()
            .filter(Predicate::eq("a", 1))
            .or_filter(Predicate::eq("b", 2));

        match select.predicate {
            Some(Predicate::Or(predicates)) => assert_eq!(predicates.len(), 2),
            _ => panic!(),
        }
    }
}
