use crate::{query::{Column, Key, TableName, Value}, serializer::{Serializer, ToSql}};

impl ToSql for Column {
    fn to_sql(&self, serializer: &Serializer, _binds: &mut Vec<Value>) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", serializer.quote(table), serializer.quote(&self.name)),
            None => serializer.quote(&self.name),
        }
    }
}

impl ToSql for TableName {
    fn to_sql(&self, serializer: &Serializer, _binds: &mut Vec<Value>) -> String {
        let mut sql = match &self.schema {
            Some(schema) => format!("{}.{}", serializer.quote(schema), serializer.quote(&self.name)),
            None => serializer.quote(&self.name),
        };
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            sql.push_str(&serializer.quote(alias));
        }
        sql
    }
}

impl ToSql for Key {
    fn to_sql(&self, serializer: &Serializer, binds: &mut Vec<Value>) -> String {
        match self {
            Key::All => "*".to_string(),
            Key::AllOf(table) => format!("{}.*", serializer.quote(table)),
            Key::Expression { expression, alias } => {
                let sql = expression.to_sql(serializer, binds);
                match alias {
                    Some(alias) => format!("{} AS {}", sql, serializer.quote(alias)),
                    None => sql,
                }
            },
        }
    }
}
