//! Record listing module
//!
//! The seam between the list view and wherever synced records live. A
//! [`RecordSource`] answers two questions for a set of filters: how many
//! rows match, and which rows fall in a given window.

mod source;
mod types;

pub use source::{MemorySource, RecordSource};
pub use types::Record;
