pub mod header;
pub mod product_form;
pub mod product_table;
pub mod confirm_popup;
