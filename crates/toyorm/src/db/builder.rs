use super::Db;
use crate::{driver, Model, Result};

use toyorm_core::{driver::Driver, schema::Registry};

use std::sync::Arc;

type RegisterFn = fn(&Registry) -> Result<()>;

#[derive(Debug, Default)]
pub struct Builder {
    /// Models whose metadata is built before the handle is returned
    models: Vec<RegisterFn>,

    /// Registry to share instead of creating a fresh one
    registry: Option<Arc<Registry>>,
}

impl Builder {
    /// Builds the metadata for `T` up front, so an invalid model fails at
    /// connect time instead of on first use.
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models
            .push(|registry| registry.register::<T>().map(|_| ()));
        self
    }

    /// Uses an existing registry, sharing cached metadata with other handles.
    pub fn registry(&mut self, registry: Arc<Registry>) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    /// Connects to the database at `url`, picking the driver from its scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = driver::from_url(url)?;
        self.build_boxed(driver).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver)).await
    }

    async fn build_boxed(&mut self, driver: Box<dyn Driver>) -> Result<Db> {
        let registry = self.registry.clone().unwrap_or_default();

        for register in &self.models {
            register(&registry)?;
        }

        let connection = driver.connect().await?;

        log::debug!(
            "connected; url={}; models={}",
            driver.url(),
            self.models.len()
        );

        Ok(Db {
            driver: Arc::from(driver),
            connection: Arc::from(connection),
            registry,
            pending_rollback: Arc::default(),
        })
    }
}
