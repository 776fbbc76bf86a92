//! Types shared by the inventory frontend: entity records, list state,
//! the `filters` codec, query parameters and add-form validation.

pub mod domain;
pub mod shared;
