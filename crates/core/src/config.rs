//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the store and the server. Nothing here reads the environment: binaries collect
//! the raw values (`std::env::var(..).ok()`) and hand them to the parsers below, which keeps
//! request handling independent of process-wide state and makes the parsing testable.

use crate::constants::DEFAULT_REST_ADDR;
use crate::{NoteError, NoteResult};
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Which store backend to construct at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(NoteError::InvalidConfig(format!(
                "unknown store backend '{other}' (expected 'mongo' or 'memory')"
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Mongo => write!(f, "mongo"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Connection settings for the MongoDB backend.
#[derive(Clone, PartialEq, Eq)]
pub struct MongoConfig {
    uri: String,
    database: String,
    collection: String,
}

impl MongoConfig {
    /// Create a new `MongoConfig`, rejecting missing or blank values.
    pub fn new(
        uri: Option<String>,
        database: Option<String>,
        collection: Option<String>,
    ) -> NoteResult<Self> {
        Ok(Self {
            uri: required("MONGO_URI", uri)?,
            database: required("DATABASE_NAME", database)?,
            collection: required("COLLECTION_NAME", collection)?,
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

// The connection string may carry credentials, so it never appears in logs.
impl fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConfig")
            .field("uri", &"<redacted>")
            .field("database", &self.database)
            .field("collection", &self.collection)
            .finish()
    }
}

/// Store selection plus whatever the chosen backend needs to connect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreConfig {
    Mongo(MongoConfig),
    Memory,
}

impl StoreConfig {
    /// Build the store configuration from raw environment values.
    ///
    /// The Mongo settings are only required (and only validated) when the Mongo backend is
    /// selected.
    pub fn from_env_values(
        backend: Option<String>,
        uri: Option<String>,
        database: Option<String>,
        collection: Option<String>,
    ) -> NoteResult<Self> {
        match store_backend_from_env_value(backend)? {
            StoreBackend::Mongo => Ok(StoreConfig::Mongo(MongoConfig::new(
                uri, database, collection,
            )?)),
            StoreBackend::Memory => Ok(StoreConfig::Memory),
        }
    }

    pub fn backend(&self) -> StoreBackend {
        match self {
            StoreConfig::Mongo(_) => StoreBackend::Mongo,
            StoreConfig::Memory => StoreBackend::Memory,
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    rest_addr: SocketAddr,
    store: StoreConfig,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(rest_addr: SocketAddr, store: StoreConfig) -> Self {
        Self { rest_addr, store }
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }
}

/// Parse the store backend from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`StoreBackend::Mongo`].
pub fn store_backend_from_env_value(value: Option<String>) -> NoteResult<StoreBackend> {
    non_blank(value)
        .map(|v| v.parse::<StoreBackend>())
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Parse the REST listen address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> NoteResult<SocketAddr> {
    let raw = non_blank(value).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
    raw.parse::<SocketAddr>()
        .map_err(|e| NoteError::InvalidConfig(format!("invalid REST address '{raw}': {e}")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(name: &str, value: Option<String>) -> NoteResult<String> {
    non_blank(value).ok_or_else(|| NoteError::InvalidConfig(format!("{name} must be set")))
}
