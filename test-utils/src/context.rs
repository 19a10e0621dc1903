use std::sync::Arc;

use school_manager::{identity::memory::MemoryIdentity, store::RecordStore};

/// Test context containing the record store and identity provider.
///
/// Provides an in-memory record store and identity provider for isolated
/// unit and integration testing. Both are created lazily on first access and
/// persist for the lifetime of the test context.
pub struct TestContext {
    /// Optional record store backed by the in-memory document backend.
    ///
    /// Initialized lazily when `store()` is first called. Using `Option` allows
    /// deferred creation until actually needed by the test.
    pub store: Option<RecordStore>,

    /// Optional in-memory identity provider.
    ///
    /// Initialized lazily when `identity()` is first called. Held behind an
    /// `Arc` so tests can hand it to application state while keeping their
    /// own handle for seeding accounts.
    pub identity: Option<Arc<MemoryIdentity>>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// Initializes a test context with no store or identity provider. Both
    /// will be created lazily when their accessors are first called.
    ///
    /// # Returns
    /// - New `TestContext` instance with no backends
    pub fn new() -> Self {
        Self {
            store: None,
            identity: None,
        }
    }

    /// Gets or creates the in-memory record store.
    ///
    /// Returns a reference to the existing store if one exists, otherwise
    /// creates a fresh store over an empty in-memory backend. The store
    /// persists for the lifetime of this test context.
    ///
    /// # Returns
    /// - `&RecordStore` - Reference to the record store
    pub fn store(&mut self) -> &RecordStore {
        self.store.get_or_insert_with(RecordStore::in_memory)
    }

    /// Gets or creates the in-memory identity provider.
    ///
    /// Returns a reference to the existing provider if one exists, otherwise
    /// creates a fresh provider with no accounts. The provider persists for
    /// the lifetime of this test context.
    ///
    /// # Returns
    /// - `&Arc<MemoryIdentity>` - Reference to the identity provider
    pub fn identity(&mut self) -> &Arc<MemoryIdentity> {
        self.identity
            .get_or_insert_with(|| Arc::new(MemoryIdentity::new()))
    }

    /// Gets or creates both the store and the identity provider.
    ///
    /// Convenience method for tests that need both backends, such as auth
    /// flows. Initializes both if they don't exist, then returns immutable
    /// references to both. This avoids borrow checker issues when calling
    /// `store()` and `identity()` separately.
    ///
    /// # Returns
    /// - `(&RecordStore, &Arc<MemoryIdentity>)` - References to both backends
    pub fn store_and_identity(&mut self) -> (&RecordStore, &Arc<MemoryIdentity>) {
        // Initialize both (these methods are idempotent)
        self.store();
        self.identity();

        // Now return immutable references to the initialized fields
        (
            self.store.as_ref().unwrap(),
            self.identity.as_ref().unwrap(),
        )
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
