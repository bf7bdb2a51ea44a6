pub mod rows;
pub mod table_xlsx;

pub use table_xlsx::{export_table_xlsx, ExportRow};
