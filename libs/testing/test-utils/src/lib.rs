//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - [`MemoryAdapter`]: an in-memory `EntityAdapter` so handler tests
//!   exercise the full adapter contract without a MongoDB instance
//! - [`TestDataBuilder`]: deterministic test data generation
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{MemoryAdapter, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_handler_test() {
//!     let repository = UserRepository::new(MemoryAdapter::new());
//!     let app = handlers::router(repository, UploadConfig::default());
//!     // drive `app` with tower::ServiceExt::oneshot
//! }
//! ```

mod memory;

pub use memory::MemoryAdapter;

use uuid::Uuid;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test
    /// data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a deterministic UUID for testing
    pub fn user_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("pet", "main");
    /// // Returns: "test-pet-<seed>-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate a unique email for testing
    pub fn email(&self, local: &str) -> String {
        format!("{}-{}@test.com", local, self.seed)
    }
}
