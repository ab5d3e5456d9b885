use indexmap::IndexMap;
use tracing::trace;

use crate::{Result, connection::Row};

/// Caches table OID to name associations read from `pg_class`.
///
/// Immutable once built. Entries keep catalog row order, which is the order
/// [`TableNameCache::table_oid`] scans in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableNameCache {
    table_names: IndexMap<u32, String>,
}

impl TableNameCache {
    /// Builds the cache from `(oid, relname)` rows.
    pub fn from_rows(rows: &[Row]) -> Result<Self> {
        rows.iter()
            .map(|row| -> Result<(u32, String)> {
                Ok((row.try_get_u32("oid")?, row.try_get_text("relname")?.to_string()))
            })
            .collect()
    }

    /// Table name for `oid`, or `None` when the OID is not in the snapshot.
    pub fn table_name(&self, oid: u32) -> Option<&str> {
        let name = self.table_names.get(&oid).map(String::as_str);
        if name.is_none() {
            trace!(oid, "table oid not cached");
        }
        name
    }

    /// OID for `name`. Linear in the number of cached tables.
    ///
    /// Names are not unique across schemas; the first match in catalog order
    /// wins and the others are unreachable through this lookup.
    pub fn table_oid(&self, name: &str) -> Option<u32> {
        let oid = self
            .table_names
            .iter()
            .find(|(_, table)| table.as_str() == name)
            .map(|(oid, _)| *oid);
        if oid.is_none() {
            trace!(name, "table name not cached");
        }
        oid
    }

    pub fn len(&self) -> usize {
        self.table_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table_names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.table_names.iter().map(|(oid, name)| (*oid, name.as_str()))
    }
}

impl FromIterator<(u32, String)> for TableNameCache {
    fn from_iter<T: IntoIterator<Item = (u32, String)>>(iter: T) -> Self {
        Self { table_names: iter.into_iter().collect() }
    }
}
