//! `sg-output` — reporting for finished runs.
//!
//! | Type             | Output                                                  |
//! |------------------|---------------------------------------------------------|
//! | [`CsvWriter`]    | One row per step record (`results.csv` by default)      |
//! | [`ConsoleReport`]| Per-series summary lines for a terminal                 |
//!
//! Both implement [`OutputWriter`] and are driven by [`ReportObserver`],
//! which implements `sg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sg_output::{CsvWriter, ReportObserver};
//!
//! let writer = CsvWriter::from_path(Path::new("results.csv"))?;
//! let mut obs = ReportObserver::new(writer);
//! world.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;


pub use console::ConsoleReport;
pub use csv::{CSV_HEADER, CsvWriter};
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use writer::OutputWriter;
