    use super::super::fixtures::{chain, folder, sample_tree};
    use super::*;
    use crate::model::FileId;

    fn model(root: Folder) -> TreeModel {
        TreeModel::from_root(root).expect("well-formed")
    }

    #[test]
    fn moving_a_top_level_folder_disables_its_parent_and_itself() {
        // root { 2 "src" } -- the only other folder is the root, which is the current parent.
        let root = folder(
            1,
            ".",
            None,
            vec![folder(2, "src", Some(1), vec![], vec![])],
            vec![],
        );
        let m = model(root);
        let disabled = disabled_destinations(&m, NodeRef::Folder(FolderId(2))).unwrap();

        assert_eq!(disabled.get(&FolderId(1)), Some(&DisabledReason::CurrentParent));
        assert_eq!(disabled.get(&FolderId(2)), Some(&DisabledReason::SelfTarget));
        assert_eq!(disabled.len(), 2);

        assert!(matches!(
            check_destination(&m, NodeRef::Folder(FolderId(2)), FolderId(1)),
            Err(TreeError::IllegalDestination {
                reason: DisabledReason::CurrentParent,
                ..
            })
        ));
        assert!(legal_destinations(&m, NodeRef::Folder(FolderId(2))).unwrap().is_empty());
    }

    #[test]
    fn folder_moves_exclude_the_whole_subtree() {
        let m = model(sample_tree());
        let disabled = disabled_destinations(&m, NodeRef::Folder(FolderId(2))).unwrap();

        assert_eq!(disabled.get(&FolderId(2)), Some(&DisabledReason::SelfTarget));
        assert_eq!(disabled.get(&FolderId(3)), Some(&DisabledReason::Descendant));
        assert_eq!(disabled.get(&FolderId(4)), Some(&DisabledReason::Descendant));
        assert_eq!(disabled.get(&FolderId(1)), Some(&DisabledReason::CurrentParent));
        assert_eq!(
            legal_destinations(&m, NodeRef::Folder(FolderId(2))).unwrap(),
            vec![FolderId(5)]
        );
    }

    #[test]
    fn file_moves_only_disable_the_current_folder() {
        let m = model(sample_tree());
        let target = NodeRef::File(FileId(12));
        let disabled = disabled_destinations(&m, target).unwrap();
        assert_eq!(disabled.len(), 1);
        assert_eq!(disabled.get(&FolderId(3)), Some(&DisabledReason::CurrentParent));

        // The root is legal as long as it is not the current parent.
        assert!(check_destination(&m, target, FolderId(1)).is_ok());
        assert!(check_destination(&m, target, FolderId(4)).is_ok());

        let readme = NodeRef::File(FileId(11));
        assert!(check_destination(&m, readme, FolderId(1)).is_err());
    }

    #[test]
    fn current_parent_is_always_disabled() {
        let m = model(sample_tree());
        for target in [
            NodeRef::Folder(FolderId(2)),
            NodeRef::Folder(FolderId(3)),
            NodeRef::Folder(FolderId(4)),
            NodeRef::Folder(FolderId(5)),
            NodeRef::File(FileId(10)),
            NodeRef::File(FileId(11)),
            NodeRef::File(FileId(12)),
        ] {
            let parent = m.parent_of(target).unwrap().expect("non-root");
            let first = disabled_destinations(&m, target).unwrap();
            let second = disabled_destinations(&m, target).unwrap();
            assert_eq!(first, second);
            assert!(first.contains_key(&parent), "{:?}", target);
        }
    }

    #[test]
    fn cycle_prevention_holds_at_depth() {
        let m = model(chain(200));
        // Moving folder 50 must disable 50..=201 and its parent 49, and nothing else.
        let target = NodeRef::Folder(FolderId(50));
        let disabled = disabled_destinations(&m, target).unwrap();
        for id in 50..=201 {
            assert!(disabled.contains_key(&FolderId(id)), "{} should be disabled", id);
        }
        assert_eq!(disabled.get(&FolderId(49)), Some(&DisabledReason::CurrentParent));
        for id in 1..49 {
            assert!(!disabled.contains_key(&FolderId(id)), "{} should be legal", id);
            assert!(check_destination(&m, target, FolderId(id)).is_ok());
        }
    }

    #[test]
    fn unknown_targets_and_destinations_are_reported() {
        let m = model(sample_tree());
        assert_eq!(
            disabled_destinations(&m, NodeRef::Folder(FolderId(77))).unwrap_err(),
            TreeError::UnknownFolder(FolderId(77))
        );
        assert_eq!(
            check_destination(&m, NodeRef::File(FileId(10)), FolderId(77)).unwrap_err(),
            TreeError::UnknownFolder(FolderId(77))
        );
    }
