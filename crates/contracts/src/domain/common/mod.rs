//! Helpers shared by all entity records

pub mod name_ref;
