//! Port interfaces for the store layer
//!
//! Ports define the contract between the preference stores (in `mz-app`)
//! and infrastructure implementations (in `mz-infra`). Stores receive a port
//! instance at construction time and never reach for an ambient storage
//! singleton, which keeps test doubles trivial to inject.

mod clock;
pub mod errors;
pub mod key_value;

pub use clock::*;
pub use errors::StorageError;
pub use key_value::KeyValueStorePort;
