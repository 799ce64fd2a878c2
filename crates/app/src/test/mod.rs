//! Shared test fixtures.


pub use context::TestContext;
pub use http::StubStore;
pub use memory::MemoryStore;
