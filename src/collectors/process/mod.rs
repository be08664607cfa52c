//! Process list collection (`INFORMATION_SCHEMA.PROCESSLIST`).

mod process_list;

pub use process_list::ProcessListCollector;
