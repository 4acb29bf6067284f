//! Source and layer descriptor value objects

use serde::{Deserialize, Serialize};

/// Kind of dataset a source descriptor points at.
///
/// Mirrors the hosted map service's source types; the core passes the kind
/// through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Tileset,
    Table,
    Query,
}

/// Declarative description of a queryable dataset.
///
/// `connection` identifies a connection registered with the hosted service;
/// `data` is a table reference, query text or tileset name depending on
/// `kind`. Transport and auth details stay opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub id: String,
    pub kind: SourceKind,
    pub connection: String,
    pub data: String,
}

impl SourceDescriptor {
    /// Descriptor for a pre-partitioned hosted tileset
    pub fn tileset(
        id: impl Into<String>,
        connection: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: SourceKind::Tileset,
            connection: connection.into(),
            data: data.into(),
        }
    }
}

/// Association between a visual layer and the source it binds to.
///
/// This is what the registry stores. The callback-bearing descriptor handed
/// to the renderer is rebuilt from the binding on every render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerBinding {
    pub id: String,
    /// Id of the registered source this layer reads from
    pub source: String,
}

impl LayerBinding {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}
