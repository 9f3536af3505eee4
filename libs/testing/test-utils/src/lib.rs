//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with automatic cleanup
//! - `TestDataBuilder`: deterministic titles, categories and dates derived from a test name
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let title = builder.title("groceries");
//!     let category = builder.category();
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Builder for test data with deterministic randomization
///
/// Everything derives from a seed, so reruns of a test see identical data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_todo");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique todo title, e.g. `test-todo-12345-groceries`
    pub fn title(&self, suffix: &str) -> String {
        format!("test-todo-{}-{}", self.seed, suffix)
    }

    /// Category label unique to this test, so list filters only see this test's rows
    pub fn category(&self) -> String {
        format!("cat-{:x}", self.seed)
    }

    /// A due date within the next 30 days of a fixed epoch, with microsecond precision
    pub fn due_date(&self) -> DateTime<Utc> {
        let base = Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).single().unwrap_or_default();
        base + Duration::minutes((self.seed % (30 * 24 * 60)) as i64)
            + Duration::microseconds((self.seed % 1_000_000) as i64)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert a slice is ordered newest first by the given key
    pub fn assert_descending<T, K: PartialOrd + std::fmt::Debug>(items: &[T], key: impl Fn(&T) -> K) {
        for pair in items.windows(2) {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            assert!(a >= b, "expected descending order, got {:?} before {:?}", a, b);
        }
    }
}
