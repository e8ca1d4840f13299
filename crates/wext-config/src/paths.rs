//! `[vendor]` path templating.
//!
//! Output and package directories are user-supplied templates; the only
//! recognized placeholder is `[vendor]`, which expands to the vendor id.
//! Resolution is pure string/path algebra - no filesystem access happens
//! here.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::Result;
use crate::vendor::Vendor;

/// Token replaced with the vendor id inside path templates.
pub const VENDOR_TOKEN: &str = "[vendor]";

/// Expand the `[vendor]` token and absolutize against the process cwd.
///
/// Idempotent: feeding the result back in returns it unchanged, since an
/// absolute path contains no token and lexical cleaning is stable.
pub fn resolve_template(template: &str, vendor: Vendor) -> Result<PathBuf> {
    let expanded = template.replace(VENDOR_TOKEN, vendor.id());
    let path = Path::new(&expanded);

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let resolved = absolute.clean();
    tracing::trace!(template, resolved = %resolved.display(), "resolved path template");
    Ok(resolved)
}
