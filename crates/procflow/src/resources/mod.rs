//! API resource endpoints
//!
//! One resource per backend area. Each method is a thin typed wrapper over
//! [`Client::send_as`](crate::Client::send_as), so failures are classified
//! and notified exactly like raw calls.

pub mod definitions;
pub mod executions;
pub mod nodes;

pub use definitions::Definitions;
pub use executions::Executions;
pub use nodes::Nodes;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}

