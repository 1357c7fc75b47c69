//! Path sandboxing for the preview server.
//!
//! All file access is funneled through this module. Untrusted request
//! input is resolved against the project root in two layers:
//!
//! 1. **Lexical**: join onto the root, collapse `.`/`..` components, and
//!    check containment on the normalized result — never on the raw
//!    string, which traversal sequences would defeat.
//! 2. **Physical**: once a path must exist, canonicalize it (resolving
//!    symlinks) and re-check containment before any read.
//!
//! Rejection is a value, not an error: malformed or hostile input is an
//! expected case at this boundary.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Resolve an untrusted relative path to a Markdown file under `root`.
///
/// `root` must be an absolute, canonicalized directory. On acceptance the
/// result is the normalized join of `root` and `requested`; existence is
/// not checked here. Returns `None` when the normalized path escapes the
/// root or its extension does not case-fold to `md`.
pub fn resolve_markdown(root: &Path, requested: &str) -> Option<PathBuf> {
    let candidate = resolve_contained(root, requested)?;
    has_markdown_extension(&candidate).then_some(candidate)
}

/// Resolve a percent-decoded request path for the static fallback route.
///
/// Same containment rule as [`resolve_markdown`] but without the `.md`
/// restriction: any file under the root may be streamed by the fallback,
/// with the content type decided by the caller.
pub fn resolve_static(root: &Path, url_path: &str) -> Option<PathBuf> {
    resolve_contained(root, url_path)
}

/// Re-verify a lexically accepted path against the real filesystem.
///
/// Canonicalizes `candidate` (resolving symlinks) and requires the result
/// to be a regular file still contained in `root`. Returns the canonical
/// path to read from, or `None` for anything absent, non-regular, or
/// escaping via a symlink.
pub fn confine_existing(root: &Path, candidate: &Path) -> Option<PathBuf> {
    let canonical = fs::canonicalize(candidate).ok()?;
    if !canonical.starts_with(root) {
        return None;
    }
    fs::metadata(&canonical)
        .ok()
        .filter(fs::Metadata::is_file)
        .map(|_| canonical)
}

/// Join untrusted input onto the root and normalize, enforcing containment.
fn resolve_contained(root: &Path, requested: &str) -> Option<PathBuf> {
    if requested.contains('\0') {
        return None;
    }
    // An absolute `requested` replaces the root here, exactly as a raw
    // filesystem join would; the containment check is what rejects it.
    let normalized = normalize(&root.join(requested));
    normalized.starts_with(root).then_some(normalized)
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` at the top of an absolute path stays clamped there, matching how
/// absolute path resolution behaves in a shell.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// True when the path's extension case-folds to `md`.
fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}
