pub mod add_dialog;
pub mod filter;
pub mod list;
