//! Assertion macros for stage runs.
//!
//! Failures print the project tree (or both output streams) so a broken
//! scenario can be read straight from the test log.

use std::path::Path;

/// Project-relative paths of every file under `root`, sorted
pub fn project_tree(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else if let Ok(rel) = path.strip_prefix(root) {
                out.push(rel.display().to_string());
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}

/// Assert `dest` was staged from `source`: it exists and holds the same bytes.
///
/// ```ignore
/// assert_staged!(env, LUCIDE_SRC, LUCIDE_DEST);
/// ```
#[macro_export]
macro_rules! assert_staged {
    ($env:expr, $source:expr, $dest:expr) => {{
        let staged = $env.project_path($dest);
        assert!(
            staged.is_file(),
            "'{}' was not staged; project contains:\n  {}",
            $dest,
            $crate::common::project_tree($env.project_root.path()).join("\n  ")
        );
        let want = std::fs::read($env.project_path($source)).unwrap();
        let got = std::fs::read(&staged).unwrap();
        assert!(
            want == got,
            "'{}' ({} bytes) does not match source '{}' ({} bytes)",
            $dest,
            got.len(),
            $source,
            want.len()
        );
    }};
}

/// Assert nothing was written at `dest`.
#[macro_export]
macro_rules! assert_not_staged {
    ($env:expr, $dest:expr) => {{
        assert!(
            !$env.project_path($dest).exists(),
            "'{}' should not exist; project contains:\n  {}",
            $dest,
            $crate::common::project_tree($env.project_root.path()).join("\n  ")
        );
    }};
}

/// Assert stdout or stderr contains `needle`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {{
        let result = &$result;
        assert!(
            result.stdout.contains($needle) || result.stderr.contains($needle),
            "missing '{}' in output\n--- stdout ---\n{}--- stderr ---\n{}",
            $needle,
            result.stdout,
            result.stderr
        );
    }};
}

/// Assert neither stdout nor stderr contains `needle`.
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $needle:expr) => {{
        let result = &$result;
        assert!(
            !result.stdout.contains($needle) && !result.stderr.contains($needle),
            "unexpected '{}' in output\n--- stdout ---\n{}--- stderr ---\n{}",
            $needle,
            result.stdout,
            result.stderr
        );
    }};
}
