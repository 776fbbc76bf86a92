pub mod filter;
pub mod list;
pub mod query;
pub mod response;
pub mod validation;
