use tracing::debug;

use crate::{query::{Candidates, Key, Select, Value}, serializer::{Serializer, ToSql}};

impl Serializer {
    /// Writes `select` as a single statement, appending every literal it meets
    /// to `binds` in the order its placeholder appears in the text.
    ///
    /// Clause order is fixed here and nowhere else:
    /// `SELECT [DISTINCT] keys [FROM] [joins] [WHERE] [GROUP BY] [ORDER BY] [LIMIT] [OFFSET]`.
    pub fn serialize(&self, select: &Select, binds: &mut Vec<Value>) -> String {
        let mut sql: Vec<String> = vec!["SELECT".to_string()];

        match &select.candidates {
            Candidates::All => {},
            Candidates::Distinct { columns } if columns.is_empty() => sql.push("DISTINCT".to_string()),
            Candidates::Distinct { columns } => {
                sql.push(format!("DISTINCT({})", self.joined(columns, ", ", binds)));
            },
        }

        if select.keys.is_empty() {
            sql.push("*".to_string());
        } else {
            sql.push(self.joined(&select.keys, ", ", binds));
        }

        if !select.tables.is_empty() {
            sql.push("FROM".to_string());
            sql.push(self.joined(&select.tables, ", ", binds));
        }

        for join in &select.joins {
            sql.push(join.to_sql(self, binds));
        }

        if let Some(predicate) = &select.predicate {
            sql.push("WHERE".to_string());
            sql.push(predicate.to_sql(self, binds));
        }

        let grouping = self.grouping(&select.group_by, binds);
        if !grouping.is_empty() {
            sql.push("GROUP BY".to_string());
            sql.push(grouping.join(", "));
        }

        if !select.order_by.is_empty() {
            sql.push("ORDER BY".to_string());
            sql.push(self.joined(&select.order_by, ", ", binds));
        }

        if let Some(limit) = select.limit {
            sql.push("LIMIT".to_string());
            sql.push(limit.to_string());
        }

        if let Some(offset) = select.offset {
            sql.push("OFFSET".to_string());
            sql.push(offset.to_string());
        }

        let sql = sql.join(" ");
        debug!(sql = %sql, binds = binds.len(), "serialized select");
        sql
    }

    /// `GROUP BY` takes bare expressions: aliases are dropped and wildcards
    /// have no meaning there, so they are skipped.
    fn grouping(&self, keys: &[Key], binds: &mut Vec<Value>) -> Vec<String> {
        keys.iter()
            .filter_map(|key| match key {
                Key::Expression { expression, .. } => Some(expression.to_sql(self, binds)),
                Key::All | Key::AllOf(_) => None,
            })
            .collect()
    }
}

impl Select {
    /// Serializes with the default configuration into a fresh bind list.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut binds = vec![];
        let sql = Serializer::new().serialize(self, &mut binds);
        (sql, binds)
    }
}
