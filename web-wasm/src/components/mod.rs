pub mod header;
pub mod bulk_select_bar;
pub mod artwork_table;
pub mod paginator;
pub mod progress_bar;
pub mod selected_panel;
