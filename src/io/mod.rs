//! I/O module
//!
//! Handles input tokenizing and verdict output.
//!
//! # Components
//!
//! - `line_format` - Record conversion and verdict serialization
//! - `sync_reader` - Streaming reader for the catalog and the event stream

pub mod line_format;
pub mod sync_reader;

pub use line_format::{convert_catalog_row, convert_event_record, write_verdict};
pub use sync_reader::{open_input, SyncReader};
