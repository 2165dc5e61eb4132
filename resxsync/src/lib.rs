#![forbid(unsafe_code)]
//! Keeps a generated resource accessor file in sync with its `.resx` source.
//!
//! A `.resx` resource file declares localizable string keys; a companion
//! `*.Designer.cs` file carries one read-only accessor per key. This crate
//! compares the two, synthesizes accessor blocks for any keys missing from
//! the generated file, and splices them in without disturbing any existing
//! content. Synchronization is strictly additive: stale accessors are left
//! alone, and a run with nothing to add leaves the file byte-identical.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resxsync::{SyncRequest, sync_files};
//!
//! let request = SyncRequest::new("AppResources.resx", "AppResources.Designer.cs");
//! let report = sync_files(&request)?;
//! println!("added {} accessors", report.missing_count());
//! # Ok::<(), resxsync::Error>(())
//! ```

pub mod dialects;
pub mod error;
pub mod synth;
pub mod sync;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    dialects::{DesignerDialect, ResxDialect},
    error::Error,
    synth::{SynthOutcome, synthesize},
    sync::{SyncReport, SyncRequest, sync_files},
    traits::KeyExtractor,
};
