//! Record store adapters
//!
//! - [`JsonFileRecordStore`]: one `<key>.json` file per collection
//! - [`InMemoryRecordStore`]: process-local map, used with `--data-dir :memory:`
//!   and in tests

mod json_file;
mod memory;

pub use json_file::JsonFileRecordStore;
pub use memory::InMemoryRecordStore;
