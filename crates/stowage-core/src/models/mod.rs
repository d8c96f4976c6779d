//! Data models shared across Stowage components
//!
//! Object references for the storage side and order records for the client
//! side. Neither module depends on the other.

mod object;
mod order;

pub use object::*;
pub use order::*;
