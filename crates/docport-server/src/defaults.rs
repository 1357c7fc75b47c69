//! Default document selection.
//!
//! When no file is requested, the preview opens on the first conventional
//! document that exists in the project root.

use std::path::Path;

/// Candidate filenames probed for the initial preview, in priority order.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["背景介绍.md", "公司介绍.md", "README.md"];

/// Return the first candidate for which `exists` is true.
///
/// Candidates are probed exactly in the order given and the scan stops at
/// the first hit; the configured order is the priority, never an
/// alphabetical one. Returns `None` when nothing matches.
pub fn select_default<'a, F>(candidates: &[&'a str], exists: F) -> Option<&'a str>
where
    F: Fn(&str) -> bool,
{
    candidates.iter().copied().find(|name| exists(name))
}

/// Pick the default Markdown file for a project root, if any exists.
pub fn default_markdown(root: &Path) -> Option<&'static str> {
    select_default(&DEFAULT_CANDIDATES, |name| root.join(name).is_file())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use pretty_assertions::assert_eq;

    const CANDIDATES: [&str; 3] = ["a.md", "b.md", "c.md"];

    #[test]
    fn test_select_default_returns_first_existing() {
        let chosen = select_default(&CANDIDATES, |_| true);

        assert_eq!(chosen, Some("a.md"));
    }

    #[test]
    fn test_select_default_skips_missing_candidates() {
        let chosen = select_default(&CANDIDATES, |name| name == "b.md");

        assert_eq!(chosen, Some("b.md"));
    }

    #[test]
    fn test_select_default_returns_last_candidate() {
        let chosen = select_default(&CANDIDATES, |name| name == "c.md");

        assert_eq!(chosen, Some("c.md"));
    }

    #[test]
    fn test_select_default_returns_none_when_nothing_exists() {
        let chosen = select_default(&CANDIDATES, |_| false);

        assert_eq!(chosen, None);
    }

    #[test]
    fn test_select_default_short_circuits() {
        let probes = Cell::new(0);
        let chosen = select_default(&CANDIDATES, |_| {
            probes.set(probes.get() + 1);
            true
        });

        assert_eq!(chosen, Some("a.md"));
        assert_eq!(probes.get(), 1);
    }

    #[test]
    fn test_default_markdown_checks_root_joined_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("README.md"), "# Readme").unwrap();

        assert_eq!(default_markdown(temp_dir.path()), Some("README.md"));
    }

    #[test]
    fn test_default_markdown_prefers_configured_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("README.md"), "# Readme").unwrap();
        std::fs::write(temp_dir.path().join("背景介绍.md"), "# 背景").unwrap();

        assert_eq!(default_markdown(temp_dir.path()), Some("背景介绍.md"));
    }

    #[test]
    fn test_default_markdown_ignores_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("README.md")).unwrap();

        assert_eq!(default_markdown(temp_dir.path()), None);
    }
}
