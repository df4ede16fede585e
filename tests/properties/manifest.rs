//! Property tests for manifest-derived directory lists and outcome counts.

use std::path::PathBuf;

use proptest::prelude::*;

use asset_stager::{AssetEntry, LocalFs, StageOptions, StageUseCase};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Ensured directories are unique and cover every configured
    /// directory and every asset destination.
    #[test]
    fn property_directories_to_ensure_are_unique_and_complete(
        directories in proptest::collection::vec(segment(), 0..5),
        destinations in proptest::collection::vec(segment(), 0..5),
    ) {
        let mut options = StageOptions::new("/project");
        options.directories = directories.iter().map(PathBuf::from).collect();
        options.assets = destinations
            .iter()
            .enumerate()
            .map(|(i, d)| AssetEntry::new(format!("lib{}", i), format!("lib{}/index.js", i), d))
            .collect();

        let ensured = options.directories_to_ensure();

        let mut deduped = ensured.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), ensured.len());
        for dir in directories.iter().chain(destinations.iter()) {
            let expected = PathBuf::from("/project/static").join(dir);
            prop_assert!(ensured.contains(&expected));
        }
    }

    /// PROPERTY: Every asset ends up either copied or missing, never both.
    #[test]
    fn property_outcomes_partition_the_manifest(present in proptest::collection::vec(any::<bool>(), 3)) {
        let dir = tempfile::tempdir().unwrap();
        let options = StageOptions::new(dir.path());
        for (asset, is_present) in options.assets.iter().zip(&present) {
            if *is_present {
                let source = asset.source_in(&options.deps_dir);
                std::fs::create_dir_all(source.parent().unwrap()).unwrap();
                std::fs::write(&source, asset.name()).unwrap();
            }
        }

        let result = StageUseCase::new(LocalFs::new()).execute(&options).unwrap();

        let expected_copied = present.iter().filter(|p| **p).count();
        prop_assert_eq!(result.copied_count(), expected_copied);
        prop_assert_eq!(result.missing_count(), 3 - expected_copied);
        prop_assert_eq!(result.outcomes.len(), 3);
        prop_assert!(dir.path().join("static/js").is_dir());
        prop_assert!(dir.path().join("static/css").is_dir());
    }
}
