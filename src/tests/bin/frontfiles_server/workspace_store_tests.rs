use super::*;

const P: ProjectId = ProjectId(1);

fn names(folder: &Folder) -> (Vec<String>, Vec<String>) {
    (
        folder.subfolders.iter().map(|f| f.name.clone()).collect(),
        folder.files.iter().map(|f| f.name.clone()).collect(),
    )
}

#[test]
fn root_is_created_lazily_once_per_project() {
    let mut ws = Workspace::default();
    let a = ws.root_of(P);
    assert_eq!(ws.root_of(P), a);
    assert_ne!(ws.root_of(ProjectId(2)), a);

    let tree = ws.tree(P);
    assert_eq!(tree.name, ".");
    assert_eq!(tree.parent_folder, None);
    assert!(tree.is_empty());
}

#[test]
fn listing_keeps_creation_order_and_nests() {
    let mut ws = Workspace::default();
    let root = ws.root_of(P);
    let src = ws.create_folder(P, "src", None).unwrap().id;
    ws.create_folder(P, "docs", Some(root)).unwrap();
    ws.create_file(P, "main.rs", src, "fn main() {}").unwrap();
    ws.create_file(P, "README.md", root, "# hi").unwrap();

    let tree = ws.tree(P);
    assert_eq!(
        names(&tree),
        (vec!["src".into(), "docs".into()], vec!["README.md".into()])
    );
    assert_eq!(tree.subfolders[0].files[0].name, "main.rs");
    assert_eq!(tree.subfolders[0].parent_folder, Some(root));
}

#[test]
fn names_must_be_present_and_unique_among_siblings() {
    let mut ws = Workspace::default();
    let root = ws.root_of(P);
    ws.create_folder(P, "src", None).unwrap();

    assert_eq!(
        ws.create_folder(P, "  ", None).unwrap_err(),
        ApiError::Field("name", "This field may not be blank.".to_string())
    );
    assert!(matches!(
        ws.create_file(P, "src", root, ""),
        Err(ApiError::NonField(msg)) if msg.contains("already exists")
    ));
    assert!(matches!(
        ws.create_file(P, "a/b", root, ""),
        Err(ApiError::Field("name", _))
    ));
    assert!(matches!(
        ws.create_folder(P, "x", Some(FolderId(999))),
        Err(ApiError::Field("parent_folder", _))
    ));
}

#[test]
fn folders_cannot_move_into_their_own_subtree() {
    let mut ws = Workspace::default();
    let a = ws.create_folder(P, "a", None).unwrap().id;
    let b = ws.create_folder(P, "b", Some(a)).unwrap().id;

    assert!(matches!(
        ws.update_folder(a, "a", Some(b)),
        Err(ApiError::NonField(_))
    ));
    assert!(matches!(
        ws.update_folder(a, "a", Some(a)),
        Err(ApiError::NonField(_))
    ));

    let root = ws.root_of(P);
    let moved = ws.update_folder(b, "b2", Some(root)).unwrap();
    assert_eq!(moved.parent_folder, Some(root));
    assert_eq!(moved.name, "b2");
}

#[test]
fn root_cannot_be_moved_or_deleted() {
    let mut ws = Workspace::default();
    let root = ws.root_of(P);
    let a = ws.create_folder(P, "a", None).unwrap().id;

    assert!(matches!(
        ws.update_folder(root, ".", Some(a)),
        Err(ApiError::NonField(_))
    ));
    assert!(matches!(ws.delete_folder(root), Err(ApiError::NonField(_))));
}

#[test]
fn deleting_a_folder_removes_everything_below_it() {
    let mut ws = Workspace::default();
    let a = ws.create_folder(P, "a", None).unwrap().id;
    let b = ws.create_folder(P, "b", Some(a)).unwrap().id;
    let f = ws.create_file(P, "f.rs", b, "").unwrap().id;

    ws.delete_folder(a).unwrap();
    assert_eq!(ws.file_detail(f).unwrap_err(), ApiError::NotFound);
    assert_eq!(ws.update_folder(b, "b", None).unwrap_err(), ApiError::NotFound);
    assert!(ws.tree(P).is_empty());
}

#[test]
fn draft_is_staged_then_applied_once() {
    let mut ws = Workspace::default();
    let root = ws.root_of(P);
    let src = ws.create_folder(P, "src", None).unwrap().id;
    let id = ws.create_file(P, "main.rs", src, "old").unwrap().id;

    let staged = ws.stage_draft(id, "new").unwrap();
    assert!(staged.has_draft);
    assert_eq!(staged.content, "old");
    assert_eq!(staged.file_path.as_deref(), Some("src/main.rs"));
    assert!(ws.tree(P).subfolders[0].files[0].has_draft);

    let applied = ws.apply_draft(id).unwrap();
    assert_eq!(applied.content, "new");
    assert!(!applied.has_draft);
    assert_eq!(applied.draft_content, None);
    assert!(matches!(ws.apply_draft(id), Err(ApiError::NonField(_))));

    let moved = ws.update_file(id, "main.rs", "new", root).unwrap();
    assert_eq!(moved.file_path.as_deref(), Some("main.rs"));
}

#[test]
fn nesting_stops_at_the_maximum_depth() {
    let mut ws = Workspace::default();
    let root = ws.root_of(P);
    let mut parent = root;
    for level in 1..=MAX_FOLDER_DEPTH {
        parent = ws
            .create_folder(P, &format!("d{}", level), Some(parent))
            .unwrap()
            .id;
    }
    assert!(matches!(
        ws.create_folder(P, "deeper", Some(parent)),
        Err(ApiError::Field("parent_folder", msg)) if msg.contains("nested")
    ));
    ws.create_file(P, "leaf.txt", parent, "").unwrap();

    // A two-level subtree fits at the root but not one level above the bottom.
    let a = ws.create_folder(P, "a", None).unwrap().id;
    ws.create_folder(P, "b", Some(a)).unwrap();
    let near_bottom = ws.tree(P).subfolders[0].id;
    let mut cur = near_bottom;
    for _ in 2..MAX_FOLDER_DEPTH {
        cur = ws.build_folder(cur).subfolders[0].id;
    }
    assert!(matches!(
        ws.update_folder(a, "a", Some(cur)),
        Err(ApiError::Field("parent_folder", _))
    ));
    ws.update_folder(a, "a", Some(near_bottom)).unwrap();

    let listing = serde_json::to_string(&ws.tree(P)).unwrap();
    let parsed: Folder = serde_json::from_str(&listing).unwrap();
    assert_eq!(parsed, ws.tree(P));
}
