//! Variant discovery in the working directory.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, Result};

/// Strip `prefix` from an entry name, or `None` when the name lacks it.
pub fn variant_name<'a>(entry_name: &'a str, prefix: &str) -> Option<&'a str> {
    entry_name.strip_prefix(prefix)
}

/// [`variant_name`] for raw entry names, which need not be valid UTF-8.
pub fn variant_os_name<'a>(entry_name: &'a OsStr, prefix: &str) -> Option<&'a OsStr> {
    let rest = entry_name.as_encoded_bytes().strip_prefix(prefix.as_bytes())?;
    // SAFETY: `rest` comes from a valid encoded `OsStr` and is split directly
    // after the UTF-8 `prefix`, which is a valid encoded-bytes boundary.
    Some(unsafe { OsStr::from_encoded_bytes_unchecked(rest) })
}

/// List `dir` (non-recursively) and return the variant identifiers of every
/// entry whose name starts with `prefix`, in directory-listing order.
///
/// Entry type is not consulted. Names are kept raw so their result paths
/// resolve even when they are not UTF-8. Listing failures are fatal.
pub fn discover_variants(dir: &Path, prefix: &str) -> Result<Vec<OsString>> {
    let list_err =
        |source: std::io::Error| ReportError::ListDir { path: dir.to_path_buf(), source };

    let mut variants = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_name = entry.file_name();
        if let Some(variant) = variant_os_name(&file_name, prefix) {
            if variant.to_str().is_none() {
                debug!("variant name is not UTF-8, reporting it lossily: {:?}", variant);
            }
            variants.push(variant.to_os_string());
        }
    }
    Ok(variants)
}
