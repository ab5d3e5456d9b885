use once_cell::sync::Lazy;
use regex::Regex;

use crate::{config::{Config, IdentifierQuoting}, query::Value};

/// Identifiers PostgreSQL accepts unquoted without case folding.
static PLAIN_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z_][a-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Words that cannot stand as a bare column or table name.
const RESERVED_WORDS: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric",
    "authorization", "between", "binary", "both", "case", "cast", "check", "collate",
    "column", "concurrently", "constraint", "create", "cross", "current_catalog",
    "current_date", "current_role", "current_schema", "current_time",
    "current_timestamp", "current_user", "default",
    "deferrable", "desc", "distinct", "do", "else", "end", "except", "false", "fetch",
    "for", "foreign", "freeze", "from", "full", "grant", "group", "having", "ilike", "in",
    "initially", "inner", "intersect", "into", "is", "isnull", "join", "lateral",
    "leading", "left", "like", "limit", "localtime", "localtimestamp", "natural", "not",
    "notnull", "null", "offset", "on", "only", "or", "order", "outer", "overlaps",
    "placing", "primary", "references", "returning", "right", "select", "session_user",
    "similar", "some", "symmetric", "system_user", "table", "tablesample", "then", "to", "trailing",
    "true", "union", "unique", "user", "using", "variadic", "verbose", "when", "where",
    "window", "with",
];

/// A SQL fragment that can be written by the [`Serializer`].
///
/// Implementations append every literal they meet to `binds` through
/// [`Serializer::bind`], so placeholder numbers stay global to the statement.
pub trait ToSql {
    fn to_sql(&self, serializer: &Serializer, binds: &mut Vec<Value>) -> String;
}

/// Compiles the query model into PostgreSQL text plus positional binds.
///
/// The serializer only reads its configuration; all per-statement state lives
/// in the bind list the caller passes in, so one instance can be shared
/// across threads.
#[derive(Debug, Default, Clone)]
pub struct Serializer {
    config: Config,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Appends `value` and returns its placeholder, numbered from the current
    /// length of `binds`.
    pub fn bind(&self, value: &Value, binds: &mut Vec<Value>) -> String {
        binds.push(value.clone());
        format!("${}", binds.len())
    }

    /// Writes one identifier according to the configured quoting strategy.
    pub fn quote(&self, ident: &str) -> String {
        let needs_quotes = match self.config.identifier_quoting {
            IdentifierQuoting::Always => true,
            IdentifierQuoting::Never => false,
            IdentifierQuoting::WhenNeeded => {
                !PLAIN_IDENTIFIER.is_match(ident) || RESERVED_WORDS.contains(&ident)
            },
        };

        if !needs_quotes {
            return ident.to_string();
        }

        let mut quoted = String::with_capacity(ident.len() + 2);
        quoted.push('"');
        for c in ident.chars() {
            if c == '"' {
                quoted.push('"');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    }

    /// Serializes `items` in order and joins them with `separator`.
    pub fn joined<T: ToSql>(&self, items: &[T], separator: &str, binds: &mut Vec<Value>) -> String {
        items
            .iter()
            .map(|item| item.to_sql(self, binds))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
