//! Identifier generation for pages and layers.

use std::collections::HashSet;
use uuid::Uuid;

/// Identifier of a [`Layer`](super::Layer), unique within its page.
pub type LayerId = String;

/// Identifier of a [`Page`](super::Page), unique within its document.
pub type PageId = String;

/// Hands out fresh ids that never collide with ids it has already seen.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    taken: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that already knows every id in `ids`.
    pub fn with_taken<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Marks an id as in use.
    pub fn reserve(&mut self, id: impl Into<String>) {
        self.taken.insert(id.into());
    }

    pub fn is_taken(&self, id: &str) -> bool {
        self.taken.contains(id)
    }

    /// Returns a new id of the form `<prefix>-<uuid>`.
    pub fn next(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{}-{}", prefix, Uuid::new_v4().simple());
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn next_page_id(&mut self) -> PageId {
        self.next("page")
    }

    pub fn next_layer_id(&mut self) -> LayerId {
        self.next("layer")
    }
}
