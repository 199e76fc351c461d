//! File system walker for filetally.
//!
//! Walks a root directory with jwalk in serial mode and yields one
//! [`FileEntry`] per regular file: its path, size and modification time (or
//! `None` when the time cannot be read). Entries that cannot be read at all
//! come out as [`ScanWarning`]s so the caller can log them and move on.
//!
//! # Example
//!
//! ```rust,no_run
//! use filetally_scan::{FileWalker, ScanConfig};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! for item in FileWalker::new().walk(&config).unwrap() {
//!     match item {
//!         Ok(entry) => println!("{} ({} bytes)", entry.path.display(), entry.size),
//!         Err(warning) => eprintln!("skipped: {}", warning.message),
//!     }
//! }
//! ```

mod progress;
mod walker;

pub use progress::{ProgressTracker, ScanProgress};
pub use walker::{FileEntry, FileWalk, FileWalker};

// Re-export core types for convenience
pub use filetally_core::{ScanConfig, ScanError, ScanWarning, WarningKind};
