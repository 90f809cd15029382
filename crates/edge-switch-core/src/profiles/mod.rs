//! Browser profiles, read from the `Local State` profile info cache.

pub mod store;
pub mod types;

pub use store::ProfileStore;
pub use types::BrowserProfile;
