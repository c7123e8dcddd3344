use super::*;

pub(super) async fn get_tree(
    State(state): State<Arc<AppState>>,
    Path(project): Path<ProjectId>,
) -> Json<Folder> {
    let mut ws = state.workspace.write().await;
    Json(ws.tree(project))
}

pub(super) async fn create_folder(
    State(state): State<Arc<AppState>>,
    Path(project): Path<ProjectId>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    let mut ws = state.workspace.write().await;
    let folder = ws.create_folder(project, &req.name, req.parent_folder)?;
    tracing::debug!(%project, folder = %folder.id, "created folder");
    Ok((StatusCode::CREATED, Json(folder)))
}

pub(super) async fn update_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FolderId>,
    Json(req): Json<UpdateFolderRequest>,
) -> Result<Json<Folder>, ApiError> {
    let mut ws = state.workspace.write().await;
    Ok(Json(ws.update_folder(id, &req.name, req.parent_folder)?))
}

pub(super) async fn delete_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FolderId>,
) -> Result<StatusCode, ApiError> {
    let mut ws = state.workspace.write().await;
    ws.delete_folder(id)?;
    Ok(StatusCode::NO_CONTENT)
}
