use std::time::Duration;

use school_manager::{identity::IdentityProvider, store::RecordStore};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable backends.
///
/// Provides a fluent interface for configuring test environments with an
/// in-memory record store and identity provider. Use the builder to seed
/// identity accounts or tighten store timeouts, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let mut test = TestBuilder::new()
///     .with_account("parent@example.com", "secret123", "Thandi Mokoena")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Identity accounts to seed during `build()`.
    ///
    /// Each entry is `(email, password, display_name)`. Accounts are created
    /// in the order they were added.
    accounts: Vec<(String, String, String)>,

    /// Optional override for the store's operation and health timeouts.
    op_timeout: Option<Duration>,
}

impl TestBuilder {
    /// Creates a new test builder with nothing configured.
    ///
    /// Initializes an empty builder ready to have accounts added via
    /// `with_account()`. Chain method calls to configure the test
    /// environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty configuration
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            op_timeout: None,
        }
    }

    /// Adds an identity account to seed into the provider.
    ///
    /// The account is created when `build()` is called. Chain multiple calls
    /// to seed multiple accounts.
    ///
    /// # Arguments
    /// - `email` - Email address for the account
    /// - `password` - Plain-text password the account verifies against
    /// - `display_name` - Display name stored with the account
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_account(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        self.accounts
            .push((email.into(), password.into(), display_name.into()));
        self
    }

    /// Overrides the store's operation and health-check timeouts.
    ///
    /// Use a short timeout when testing how callers behave against a stalled
    /// backend.
    ///
    /// # Arguments
    /// - `timeout` - Deadline applied to every store operation
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_op_timeout(mut self, timeout: Duration) -> Self {
        self.op_timeout = Some(timeout);
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates the in-memory store (applying any timeout override) and seeds
    /// the configured identity accounts in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Identity)` - Failed to seed an identity account
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        if let Some(timeout) = self.op_timeout {
            context.store = Some(RecordStore::in_memory().with_timeouts(timeout, timeout));
        }

        if !self.accounts.is_empty() {
            let identity = context.identity();
            for (email, password, display_name) in &self.accounts {
                identity
                    .create_account(email, password, display_name)
                    .await?;
            }
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
