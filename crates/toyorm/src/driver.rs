use crate::{Error, Result};

pub use toyorm_core::driver::{Connection, Driver, ExecOutcome, Row, Rows, Transaction};

use url::Url;

/// Picks a driver for a connection URL by its scheme.
pub(crate) fn from_url(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported scheme `{scheme}`"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    let driver = toyorm_driver_sqlite::Sqlite::new(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
