//! Keeps `tests/unit/` in step with `src/` and every test file non-empty

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Crate roots under tests/ that only declare modules
    const DECLARATION_ROOTS: [&str; 2] = ["unit.rs", "meta.rs"];

    /// Relative paths of every `.rs` file below `root`
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|error| io::Error::other(error.to_string()))?;
                    found.insert(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn is_module_file(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == "mod.rs")
    }

    fn listing(paths: &BTreeSet<&PathBuf>) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Verified by adding a source file without a test counterpart
    #[test]
    fn test_unit_tree_mirrors_sources() {
        let sources: BTreeSet<PathBuf> = rust_files(Path::new("src"))
            .expect("src is readable")
            .into_iter()
            .filter(|path| {
                !is_module_file(path) && path != Path::new("lib.rs") && path != Path::new("main.rs")
            })
            .collect();
        let units: BTreeSet<PathBuf> = rust_files(Path::new("tests/unit"))
            .expect("tests/unit is readable")
            .into_iter()
            .filter(|path| !is_module_file(path))
            .collect();

        let untested: BTreeSet<&PathBuf> = sources.difference(&units).collect();
        let orphaned: BTreeSet<&PathBuf> = units.difference(&sources).collect();

        assert!(
            untested.is_empty(),
            "source files without tests/unit counterpart:\n{}",
            listing(&untested)
        );
        assert!(
            orphaned.is_empty(),
            "tests/unit files without source counterpart:\n{}",
            listing(&orphaned)
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let tests_dir = Path::new("tests");
        let empty: BTreeSet<PathBuf> = rust_files(tests_dir)
            .expect("tests is readable")
            .into_iter()
            .filter(|path| {
                let is_declaration_root = path.parent() == Some(Path::new(""))
                    && DECLARATION_ROOTS.iter().any(|root| path == Path::new(root));
                !is_declaration_root && !is_module_file(path)
            })
            .filter(|path| {
                !fs::read_to_string(tests_dir.join(path))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test] function:\n{}",
            listing(&empty.iter().collect())
        );
    }
}
