//! Property tests for staging copies.

use proptest::prelude::*;

use asset_stager::{LocalFs, StageOptions, StageUseCase};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A staged library is byte-identical to its source, whatever it contains.
    #[test]
    fn property_staged_copy_is_byte_identical(
        content in proptest::collection::vec(any::<u8>(), 0..4096)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("node_modules/plotly.js/dist/plotly.js");
        std::fs::create_dir_all(source.parent().unwrap()).unwrap();
        std::fs::write(&source, &content).unwrap();

        let result = StageUseCase::new(LocalFs::new())
            .execute(&StageOptions::new(dir.path()))
            .unwrap();

        prop_assert_eq!(result.copied_count(), 1);
        prop_assert_eq!(result.missing_count(), 2);
        prop_assert_eq!(std::fs::read(dir.path().join("static/js/plotly.js")).unwrap(), content);
    }

    /// PROPERTY: Staging over a previous copy always leaves the newer source bytes.
    #[test]
    fn property_restage_replaces_previous_copy(
        first in proptest::collection::vec(any::<u8>(), 0..1024),
        second in proptest::collection::vec(any::<u8>(), 0..1024),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("node_modules/lucide/dist/umd/lucide.js");
        std::fs::create_dir_all(source.parent().unwrap()).unwrap();
        let use_case = StageUseCase::new(LocalFs::new());
        let options = StageOptions::new(dir.path());

        std::fs::write(&source, &first).unwrap();
        use_case.execute(&options).unwrap();
        std::fs::write(&source, &second).unwrap();
        use_case.execute(&options).unwrap();

        prop_assert_eq!(std::fs::read(dir.path().join("static/js/lucide.js")).unwrap(), second);
    }
}
