mod value;
use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};
use toyorm_core::{
    async_trait,
    driver::{self, Driver, ExecOutcome, Row, Rows, Transaction},
    stmt, Error, Result,
};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    ///
    /// `sqlite::memory:` opens an in-memory database, `sqlite:<path>` a file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn driver::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

/// A single SQLite connection.
///
/// Each in-memory connection is its own database.
#[derive(Debug)]
pub struct Connection {
    connection: Mutex<RusqliteConnection>,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::new(connection))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self::new(connection))
    }

    fn new(connection: RusqliteConnection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RusqliteConnection>> {
        self.connection
            .lock()
            .map_err(|_| toyorm_core::err!("sqlite connection lock poisoned"))
    }
}

#[async_trait]
impl driver::Connection for Connection {
    async fn exec(&self, sql: &str, args: &[stmt::Value]) -> Result<ExecOutcome> {
        log::trace!("sqlite exec; sql={sql} args={}", args.len());

        let connection = self.lock()?;
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(args.iter().map(Value)))
            .map_err(Error::driver)?;

        Ok(ExecOutcome::new(
            count as u64,
            Some(connection.last_insert_rowid()),
        ))
    }

    async fn query(&self, sql: &str, args: &[stmt::Value]) -> Result<Rows> {
        log::trace!("sqlite query; sql={sql} args={}", args.len());

        let connection = self.lock()?;
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let mut ret = Rows::empty(columns);

        let mut rows = stmt
            .query(rusqlite::params_from_iter(args.iter().map(Value)))
            .map_err(Error::driver)?;

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        let value = row.get_ref(index).map_err(Error::driver)?;
                        items.push(value::load(value));
                    }

                    ret.push(Row::new(items));
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver(err)),
            }
        }

        Ok(ret)
    }

    async fn transaction(&self, op: Transaction) -> Result<()> {
        log::trace!("sqlite transaction; op={op:?}");

        self.lock()?
            .execute_batch(op.sql())
            .map_err(Error::driver)
    }
}
