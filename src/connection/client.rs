use tokio::sync::OnceCell as AsyncOnceCell;
use tracing::{debug, info, warn};

use crate::{Config, Result, connection::{Connection, Row, TableNameCache}, query::Select, serializer::Serializer};

/// A connection paired with the serializer and its connection-scoped caches.
///
/// The table name cache is built at most once per client: concurrent first
/// callers wait on the same in-flight catalog fetch. A failed fetch leaves the
/// cache empty so the next explicit call starts over.
pub struct Client<C> {
    connection: C,
    serializer: Serializer,
    table_names: AsyncOnceCell<TableNameCache>,
}

impl<C: Connection> Client<C> {
    pub fn new(connection: C) -> Self {
        Self::with_config(connection, Config::default())
    }

    pub fn with_config(connection: C, config: Config) -> Self {
        Self {
            connection,
            serializer: Serializer::with_config(config),
            table_names: AsyncOnceCell::new(),
        }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    /// Serializes `select` and hands the statement to the connection.
    pub async fn run(&self, select: &Select) -> Result<Vec<Row>> {
        let mut binds = vec![];
        let sql = self.serializer.serialize(select, &mut binds);
        self.connection.query(sql, binds).await
    }

    /// Returns the table name cache, fetching it from `pg_class` on first use.
    pub async fn table_names(&self) -> Result<&TableNameCache> {
        self.table_names
            .get_or_try_init(|| self.fetch_table_names())
            .await
    }

    /// The table name cache if it has already been built.
    pub fn cached_table_names(&self) -> Option<&TableNameCache> {
        self.table_names.get()
    }

    async fn fetch_table_names(&self) -> Result<TableNameCache> {
        debug!("fetching table names from pg_class");
        let select = Select::new().keys(["oid", "relname"]).from("pg_class");

        let rows = self.run(&select).await.inspect_err(|err| {
            warn!(error = %err, "failed to fetch table names");
        })?;

        let cache = TableNameCache::from_rows(&rows)?;
        info!(tables = cache.len(), "cached table names");
        Ok(cache)
    }
}
