use super::{Register, TableMetadata};
use crate::Result;

use dashmap::{mapref::entry::Entry, DashMap};
use std::{any::TypeId, sync::Arc};

/// Caches [`TableMetadata`] per model type.
///
/// Metadata is built the first time a type is requested and shared from then
/// on. The registry is safe to use from many threads; lookups of already
/// cached types only take a shard read lock.
#[derive(Debug, Default)]
pub struct Registry {
    tables: DashMap<TypeId, Arc<TableMetadata>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the metadata for `M`, building and caching it on first use.
    ///
    /// Every call for the same type returns the same `Arc`. If several
    /// threads build the metadata concurrently, the first insert wins and the
    /// others discard their copy.
    pub fn get<M: Register>(&self) -> Result<Arc<TableMetadata>> {
        let key = TypeId::of::<M>();

        if let Some(table) = self.tables.get(&key) {
            return Ok(table.clone());
        }

        let table = Arc::new(Self::build::<M>()?);

        let table = match self.tables.entry(key) {
            Entry::Occupied(e) => e.get().clone(),
            Entry::Vacant(e) => e.insert(table).clone(),
        };

        Ok(table)
    }

    /// Builds the metadata for `M` and replaces any cached entry.
    pub fn register<M: Register>(&self) -> Result<Arc<TableMetadata>> {
        let table = Arc::new(Self::build::<M>()?);
        self.tables.insert(TypeId::of::<M>(), table.clone());
        Ok(table)
    }

    /// Returns `true` if metadata for `M` is cached.
    pub fn contains<M: Register>(&self) -> bool {
        self.tables.contains_key(&TypeId::of::<M>())
    }

    /// Number of cached model types.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn build<M: Register>() -> Result<TableMetadata> {
        let schema = M::schema();
        let table = TableMetadata::from_schema(&schema)?;

        log::debug!(
            "built table metadata; model={} table={} fields={}",
            schema.name,
            table.table_name,
            table.num_fields()
        );

        Ok(table)
    }
}
