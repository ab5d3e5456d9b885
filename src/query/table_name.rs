/// A source table in a `FROM` or `JOIN` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    pub schema: Option<String>,
    pub name: String,
    pub alias: Option<String>,
}

impl TableName {
    pub fn new(name: &str) -> Self {
        Self {
            schema: None,
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn with_schema(schema: &str, name: &str) -> Self {
        Self {
            schema: Some(schema.to_string()),
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }
}

/// `"public.users"` becomes a schema-qualified table, `"users"` a bare one.
impl From<&str> for TableName {
    fn from(value: &str) -> Self {
        match value.split_once('.') {
            Some((schema, name)) => TableName::with_schema(schema, name),
            None => TableName::new(value),
        }
    }
}

impl From<String> for TableName {
    fn from(value: String) -> Self {
        TableName::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::query::TableName;

    #[test]
    pub fn test_table_name() {
        let table = TableName::from("users");

        assert_eq!(table.schema, None);
        assert_eq!(table.name, "users");
        assert_eq!(table.alias, None);
    }

    #[test]
    pub fn test_table_name_with_schema_and_alias() {
        let table = TableName::from("public.users").alias("u");

        assert_eq!(table.schema.as_deref(), Some("public"));
        assert_eq!(table.name, "users");
        assert_eq!(table.alias.as_deref(), Some("u"));
    }
}
