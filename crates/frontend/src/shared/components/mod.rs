pub mod element_table;
pub mod filter_panel;
pub mod range_panel;
pub mod table;
pub mod ui;
