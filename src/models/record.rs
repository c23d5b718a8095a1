//! The `Record` trait shared by every stored collection

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::hash::Hash;

/// A record kept in a [`RecordStore`](crate::storage::RecordStore)
///
/// Records are immutable once created; the id is the only handle a store
/// uses to enforce uniqueness.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Strongly-typed identifier of the record
    type Id: Copy + Eq + Hash + fmt::Display + Send + Sync;

    /// Human-readable entity name used in errors and log lines
    const ENTITY: &'static str;

    /// Key the collection is persisted under
    const COLLECTION: &'static str;

    /// The record's identifier
    fn id(&self) -> Self::Id;
}
