pub mod table;

pub use table::{all_done, validate_table, Process, ProcessIndex};
