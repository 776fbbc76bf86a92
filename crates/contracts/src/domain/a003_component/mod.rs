pub mod aggregate;

pub use aggregate::{Component, REVISION_SORT_KEY};
