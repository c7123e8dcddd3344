    use super::*;
    use crate::model::{FileId, FolderId};

    fn detail(content: &str, draft: Option<&str>) -> FileDetail {
        FileDetail {
            id: FileId(10),
            name: "main.rs".to_string(),
            folder: FolderId(2),
            content: content.to_string(),
            draft_content: draft.map(str::to_string),
            has_draft: draft.is_some(),
            file_path: None,
            updated_at: None,
        }
    }

    #[test]
    fn files_with_drafts_open_in_draft_mode() {
        let panel = FileDetailPanel::open(detail("A", Some("B")));
        assert_eq!(panel.mode(), ViewMode::Draft);
        assert_eq!(panel.displayed(), "B");

        let panel = FileDetailPanel::open(detail("A", None));
        assert_eq!(panel.mode(), ViewMode::Current);
        assert_eq!(panel.displayed(), "A");
    }

    #[test]
    fn draft_mode_requires_a_draft() {
        let mut panel = FileDetailPanel::open(detail("A", None));
        assert_eq!(panel.set_mode(ViewMode::Draft), Err(DetailError::NoDraft));
        assert_eq!(panel.mode(), ViewMode::Current);
    }

    #[test]
    fn stale_draft_content_is_not_shown() {
        let mut d = detail("A", None);
        d.draft_content = Some("old".to_string());
        let panel = FileDetailPanel::open(d);
        assert_eq!(panel.mode(), ViewMode::Current);
        assert_eq!(panel.displayed(), "A");
    }

    #[test]
    fn drafts_cannot_be_edited() {
        let mut panel = FileDetailPanel::open(detail("A", Some("B")));
        assert_eq!(panel.begin_edit(), Err(DetailError::DraftIsReadOnly));

        panel.set_mode(ViewMode::Current).unwrap();
        panel.begin_edit().unwrap();
        assert_eq!(panel.begin_edit(), Err(DetailError::AlreadyEditing));
        panel.set_edit_buffer("A2".to_string()).unwrap();

        // The buffer is parked, not lost, while the draft is viewed.
        panel.set_mode(ViewMode::Draft).unwrap();
        assert!(!panel.is_editing());
        assert_eq!(panel.displayed(), "B");
        assert_eq!(
            panel.set_edit_buffer("x".to_string()),
            Err(DetailError::DraftIsReadOnly)
        );

        panel.set_mode(ViewMode::Current).unwrap();
        assert_eq!(panel.edit_buffer(), Some("A2"));
    }

    #[test]
    fn cancel_restores_authoritative_content() {
        let mut panel = FileDetailPanel::open(detail("A", None));
        panel.begin_edit().unwrap();
        panel.set_edit_buffer("changed".to_string()).unwrap();
        assert_eq!(panel.displayed(), "changed");

        panel.cancel_edit();
        assert!(!panel.is_editing());
        assert_eq!(panel.displayed(), "A");
    }

    #[test]
    fn apply_switches_to_current_and_resyncs_buffer() {
        let mut panel = FileDetailPanel::open(detail("A", Some("B")));
        panel.set_mode(ViewMode::Current).unwrap();
        panel.begin_edit().unwrap();
        panel.set_mode(ViewMode::Draft).unwrap();

        panel.finish_apply(detail("B", None));
        assert_eq!(panel.mode(), ViewMode::Current);
        assert!(!panel.has_draft());
        assert_eq!(panel.edit_buffer(), Some("B"));
        assert_eq!(panel.displayed(), "B");
    }

    #[test]
    fn save_closes_the_edit_session() {
        let mut panel = FileDetailPanel::open(detail("A", None));
        panel.begin_edit().unwrap();
        panel.set_edit_buffer("A2".to_string()).unwrap();
        assert_eq!(panel.pending_save().as_deref(), Ok("A2"));

        panel.finish_save(detail("A2", None));
        assert!(!panel.is_editing());
        assert_eq!(panel.displayed(), "A2");
        assert_eq!(panel.pending_save(), Err(DetailError::NotEditing));
    }
