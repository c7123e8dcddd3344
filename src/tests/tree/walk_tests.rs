    use super::super::fixtures::sample_tree;
    use super::*;

    fn labels(rows: &[TreeRow]) -> Vec<String> {
        rows.iter()
            .map(|r| {
                let pad = "  ".repeat(r.depth);
                match &r.kind {
                    RowKind::Folder { name, expanded, .. } => {
                        format!("{}{}{}", pad, if *expanded { "-" } else { "+" }, name)
                    }
                    RowKind::File {
                        name,
                        has_draft,
                        selected,
                        ..
                    } => format!(
                        "{}{}{}{}",
                        pad,
                        name,
                        if *has_draft { "*" } else { "" },
                        if *selected { "<" } else { "" }
                    ),
                    RowKind::Empty => format!("{}(empty)", pad),
                }
            })
            .collect()
    }

    #[test]
    fn subfolders_come_before_files_and_empty_folders_are_marked() {
        let model = TreeModel::from_root(sample_tree()).unwrap();
        let rows = visible_rows(&model, &ExpandState::default(), Some(FileId(12)));
        assert_eq!(
            labels(&rows),
            vec![
                "-root",
                "  -src",
                "    -lib",
                "      -deep",
                "        (empty)",
                "      mod.rs<",
                "    main.rs*",
                "  -docs",
                "    (empty)",
                "  README.md",
            ]
        );
    }

    #[test]
    fn collapsed_folders_hide_their_children() {
        let model = TreeModel::from_root(sample_tree()).unwrap();
        let mut expand = ExpandState::default();
        expand.toggle(FolderId(2));
        let rows = visible_rows(&model, &expand, None);
        assert_eq!(
            labels(&rows),
            vec!["-root", "  +src", "  -docs", "    (empty)", "  README.md"]
        );

        expand.reset();
        assert_eq!(visible_rows(&model, &expand, None).len(), 10);
    }

    #[test]
    fn picker_lists_every_folder_regardless_of_expansion() {
        let model = TreeModel::from_root(sample_tree()).unwrap();
        let disabled = super::super::disabled_destinations(&model, NodeRef::Folder(FolderId(3)))
            .unwrap();
        let rows = picker_rows(&model, &disabled);
        let ids: Vec<u64> = rows.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let enabled: Vec<u64> = rows
            .iter()
            .filter(|r| r.disabled.is_none())
            .map(|r| r.id.get())
            .collect();
        assert_eq!(enabled, vec![1, 5]);
    }
