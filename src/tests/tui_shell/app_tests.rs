    use super::*;
    use crate::explorer::memory_gateway::MemoryGateway;
    use crate::explorer::{RouterState, ViewMode};
    use crate::model::{FileId, FolderId, NodeRef, ProjectId};
    use crate::tree::fixtures::sample_tree;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let mut app = App::default();
        app.attach(
            Box::new(MemoryGateway::from_tree(&sample_tree())),
            ProjectId(7),
        );
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, button: MouseButton, column: u16, row: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(button),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| super::render::draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn view(app: &App) -> &ExplorerView<DynGateway> {
        app.explorer.as_ref().unwrap()
    }

    // Rows of the sample tree with everything expanded:
    // 0 root, 1 src, 2 lib, 3 deep, 4 (empty), 5 mod.rs, 6 main.rs,
    // 7 docs, 8 (empty), 9 README.md

    #[test]
    fn attach_loads_the_tree_and_renders_it() {
        let app = app();
        assert_eq!(view(&app).rows().len(), 10);

        let screen = render(&app);
        assert!(screen.contains("src/"));
        assert!(screen.contains("main.rs [draft]"));
        assert!(screen.contains("(no file selected)"));
    }

    #[test]
    fn keyboard_rename_of_a_file() {
        let mut app = app();
        app.cursor = 9;
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(view(&app).state(), RouterState::MenuOpen);

        press(&mut app, KeyCode::Enter);
        assert_eq!(view(&app).state(), RouterState::ActionPending);
        assert_eq!(app.name_input.buf, "README.md");

        for _ in 0.."README.md".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "INDEX.md");
        press(&mut app, KeyCode::Enter);

        assert_eq!(view(&app).state(), RouterState::Idle);
        let tree = view(&app).tree().unwrap();
        assert_eq!(tree.name_of(NodeRef::File(FileId(11))), Some("INDEX.md"));
        assert!(app.name_input.buf.is_empty());
    }

    #[test]
    fn submitting_an_empty_name_keeps_the_prompt_open() {
        let mut app = app();
        app.cursor = 7;
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            view(&app).pending().map(|p| p.kind),
            Some(crate::explorer::ActionKind::CreateFolder)
        );

        press(&mut app, KeyCode::Enter);
        let pending = view(&app).pending().unwrap();
        assert_eq!(pending.error.as_deref(), Some("name required"));

        let screen = render(&app);
        assert!(screen.contains("error: name required"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(view(&app).state(), RouterState::Idle);
    }

    #[test]
    fn picker_skips_disabled_folders() {
        let mut app = app();
        app.cursor = 6;
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.picker_cursor, 0);

        // src (row 1) is the current parent.
        press(&mut app, KeyCode::Down);
        assert_eq!(app.picker_cursor, 2);

        let screen = render(&app);
        assert!(screen.contains("it is already the current folder"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(view(&app).state(), RouterState::Idle);
        let tree = view(&app).tree().unwrap();
        assert_eq!(
            tree.parent_of(NodeRef::File(FileId(10))).unwrap(),
            Some(FolderId(3))
        );
    }

    #[test]
    fn delete_prompt_confirms_with_y() {
        let mut app = app();
        app.cursor = 7;
        press(&mut app, KeyCode::Char('m'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert!(render(&app).contains("Delete docs?"));

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(view(&app).state(), RouterState::Idle);
        assert_eq!(view(&app).tree().unwrap().folder_count(), 4);
        assert!(matches!(
            app.last_result.as_ref().map(|e| e.kind),
            Some(EntryKind::Output)
        ));
    }

    #[test]
    fn right_click_opens_menu_and_left_click_chooses() {
        let mut app = app();
        render(&app);
        let area = app.tree_area.get();

        // Row 1 is src.
        click(&mut app, MouseButton::Right, area.x + 3, area.y + 1);
        assert_eq!(view(&app).state(), RouterState::MenuOpen);
        assert_eq!(app.cursor, 1);

        let screen = render(&app);
        assert!(screen.contains("New Folder"));
        let menu = app.menu_area.get();

        // First entry sits just below the menu border.
        click(&mut app, MouseButton::Left, menu.x + 1, menu.y + 1);
        assert_eq!(
            view(&app).pending().map(|p| p.kind),
            Some(crate::explorer::ActionKind::CreateFile)
        );

        type_str(&mut app, "build.rs");
        press(&mut app, KeyCode::Enter);
        let tree = view(&app).tree().unwrap();
        assert_eq!(tree.file_count(), 4);
        assert!(
            tree.folder(FolderId(2))
                .unwrap()
                .files
                .iter()
                .any(|f| f.name == "build.rs")
        );
    }

    #[test]
    fn clicking_outside_the_menu_closes_it() {
        let mut app = app();
        render(&app);
        let area = app.tree_area.get();
        click(&mut app, MouseButton::Right, area.x + 3, area.y + 9);
        render(&app);

        click(&mut app, MouseButton::Left, 99, 29);
        assert_eq!(view(&app).state(), RouterState::Idle);
        assert!(view(&app).selected().is_none());
    }

    #[test]
    fn edit_and_save_from_the_keyboard() {
        let mut app = app();
        app.cursor = 9;
        press(&mut app, KeyCode::Enter);
        assert_eq!(view(&app).selected(), Some(FileId(11)));

        press(&mut app, KeyCode::Char('e'));
        assert!(view(&app).detail().unwrap().is_editing());

        // 'q' is typed into the buffer rather than quitting.
        type_str(&mut app, "!q");
        assert!(!app.quit);
        ctrl(&mut app, 's');

        let panel = view(&app).detail().unwrap();
        assert!(!panel.is_editing());
        assert_eq!(panel.displayed(), "// README.md!q");
    }

    #[test]
    fn apply_draft_goes_through_the_confirm_modal() {
        let mut app = app();
        app.cursor = 6;
        press(&mut app, KeyCode::Enter);
        assert_eq!(view(&app).detail().unwrap().mode(), ViewMode::Draft);

        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(
            app.modal.as_ref().map(|m| &m.kind),
            Some(ModalKind::ConfirmApplyDraft { file }) if *file == FileId(10)
        ));

        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_none());
        let panel = view(&app).detail().unwrap();
        assert!(!panel.has_draft());
        assert_eq!(panel.mode(), ViewMode::Current);
        assert_eq!(panel.displayed(), "// draft of main.rs");
    }

    #[test]
    fn escape_clears_selection_before_quitting() {
        let mut app = app();
        app.cursor = 9;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(view(&app).selected().is_none());
        assert!(!app.quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.quit);
    }
