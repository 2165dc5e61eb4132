//! File-level synchronization: read both artifacts, extract their key
//! sets, synthesize missing accessors, and atomically replace the
//! generated file.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::{
    dialects::{DesignerDialect, ResxDialect},
    error::Error,
    synth::synthesize,
    traits::KeyExtractor,
};

/// One synchronization request: the artifact pair plus behavior flags.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// The `.resx` resource file declaring the localization keys.
    pub resource: PathBuf,
    /// The generated accessor file, updated in place.
    pub generated: PathBuf,
    /// Compute and report without writing.
    pub dry_run: bool,
}

impl SyncRequest {
    pub fn new(resource: impl Into<PathBuf>, generated: impl Into<PathBuf>) -> Self {
        Self {
            resource: resource.into(),
            generated: generated.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Summary of one synchronization run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Keys declared in the resource file but absent from the generated
    /// file, in lexicographic order.
    pub missing_keys: Vec<String>,
    /// Whether the generated file was rewritten.
    pub written: bool,
}

impl SyncReport {
    pub fn missing_count(&self) -> usize {
        self.missing_keys.len()
    }
}

/// Runs one synchronization pass over the request's artifact pair.
///
/// Both paths are checked for existence before anything is read. The merge
/// is computed fully in memory; the generated file is only touched when
/// there is something to add and `dry_run` is off, and then via atomic
/// replace, so no partial write is ever observable.
pub fn sync_files(request: &SyncRequest) -> Result<SyncReport, Error> {
    for path in [&request.resource, &request.generated] {
        if !path.exists() {
            return Err(Error::MissingArtifact(path.clone()));
        }
    }

    let declared = ResxDialect.extract_from_file(&request.resource)?;
    let generated_text = fs::read_to_string(&request.generated)?;
    let generated = DesignerDialect.extract(&generated_text);

    let outcome = synthesize(&declared, &generated, &generated_text)?;

    let written = !outcome.added.is_empty() && !request.dry_run;
    if written {
        replace_file(&request.generated, &outcome.text)?;
    }

    Ok(SyncReport {
        missing_keys: outcome.added,
        written,
    })
}

/// Atomically replaces `path` with `contents`: the merged text lands in a
/// temporary file in the target's directory, then renames over the target.
fn replace_file(path: &Path, contents: &str) -> Result<(), Error> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
