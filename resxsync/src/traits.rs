//! The key-extraction capability shared by both artifact dialects.

use std::{collections::BTreeSet, fs, path::Path};

use crate::error::Error;

/// A trait for extracting the set of declared keys from one artifact.
///
/// Each dialect knows the declaration pattern for its file type; everything
/// downstream of extraction works on plain key sets, so swapping a dialect's
/// pattern matcher for a structured parser would not ripple further.
///
/// # Example
///
/// ```rust,no_run
/// use resxsync::{ResxDialect, traits::KeyExtractor};
/// let keys = ResxDialect.extract_from_file("AppResources.resx")?;
/// # Ok::<(), resxsync::Error>(())
/// ```
pub trait KeyExtractor {
    /// Extract every declared key from raw text. Duplicate declarations
    /// collapse silently; they are not an error at this layer.
    fn extract(&self, text: &str) -> BTreeSet<String>;

    /// Read a file and extract its keys.
    fn extract_from_file<P: AsRef<Path>>(&self, path: P) -> Result<BTreeSet<String>, Error> {
        let text = fs::read_to_string(path).map_err(Error::Io)?;
        Ok(self.extract(&text))
    }
}
