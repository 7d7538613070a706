//! Number calling: category letters, the 75-number pool, draw history.
//!
//! ## Key Types
//!
//! - `Letter`: B/I/N/G/O category derived from a number's range
//! - `Call`: a drawn number paired with its letter
//! - `CallEngine`: the pool, the called-set, and the ordered history

pub mod engine;
pub mod letter;

pub use engine::{Call, CallEngine, POOL_SIZE, RECENT_CALLS};
pub use letter::Letter;
