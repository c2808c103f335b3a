//! Core library for batch-converting Audible AAX audiobooks into chaptered,
//! tagged MP3 files.
//!
//! The crate is a thin orchestration layer: it shells out to ffmpeg and
//! ffprobe for decoding, probing, and encoding, writes ID3 tags through
//! lofty, and performs the surrounding file moves and directory bookkeeping.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use aaxport_core::{CoreConfig, NullReporter};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     "1a2b3c4d",
//!     PathBuf::from("/books/in"),
//!     PathBuf::from("/books/out"),
//!     PathBuf::from("/books/store"),
//!     PathBuf::from("/books/work"),
//! );
//!
//! aaxport_core::processing::prepare_run(&config).unwrap();
//! let files = aaxport_core::find_aax_files(&config.input_dir).unwrap();
//! let report = aaxport_core::process_files(&config, &files, &NullReporter);
//! println!("{} converted, {} failed", report.succeeded.len(), report.failed.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod metadata;
pub mod playlist;
pub mod processing;
pub mod progress;
pub mod tagging;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, DEFAULT_AUTHOR_COLLAPSE_THRESHOLD, DEFAULT_BITRATE_KBPS};
pub use discovery::find_aax_files;
pub use error::{CoreError, CoreResult};
pub use external::{check_dependency, probe_source, AaxInfo};
pub use processing::{process_files, BookResult, ConversionReport, FailedFile};
pub use progress::{NullReporter, ProgressReporter};
pub use utils::format_duration;
