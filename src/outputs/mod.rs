//! Output generation for completed analyses.
//!
//! The pipeline's result is a single [`crate::models::Analysis`] value. The
//! binary prints it to stdout as pretty JSON by default; with an output
//! directory configured, [`json`] writes a date-stamped file instead:
//!
//! ```text
//! output_dir/
//! ├── acme-corp_2025-05-06.json
//! └── patagonia_2025-05-07.json
//! ```

pub mod json;
