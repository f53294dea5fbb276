//! Element identifier generation

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an element inside a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces `{kind}-{salt}-{counter}` identifiers
///
/// The salt is fixed per generator and the counter only ever increases, so two
/// calls on the same generator never collide even within the same instant.
#[derive(Debug)]
pub struct IdGenerator {
    salt: String,
    counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Create a generator with a random session salt
    pub fn new() -> Self {
        let mut salt = Uuid::new_v4().simple().to_string();
        salt.truncate(8);
        Self::with_salt(salt)
    }

    /// Create a generator with a fixed salt
    ///
    /// Generators with equal salts repeat each other's ids.
    pub fn with_salt(salt: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            counter: AtomicU64::new(0),
        }
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Next identifier for an element of `kind`
    pub fn next(&self, kind: &str) -> ElementId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        ElementId(format!("{}-{}-{}", kind, self.salt, n))
    }
}
