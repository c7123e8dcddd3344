use super::*;

pub(super) async fn create_file(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<FileDetail>), ApiError> {
    let mut ws = state.workspace.write().await;
    let file = ws.create_file(req.project_under, &req.name, req.folder, &req.content)?;
    tracing::debug!(project = %req.project_under, file = %file.id, "created file");
    Ok((StatusCode::CREATED, Json(file)))
}

pub(super) async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FileId>,
) -> Result<Json<FileDetail>, ApiError> {
    let ws = state.workspace.read().await;
    Ok(Json(ws.file_detail(id)?))
}

pub(super) async fn update_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FileId>,
    Json(req): Json<UpdateFileRequest>,
) -> Result<Json<FileDetail>, ApiError> {
    let mut ws = state.workspace.write().await;
    Ok(Json(ws.update_file(id, &req.name, &req.content, req.folder)?))
}

pub(super) async fn patch_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FileId>,
    Json(req): Json<ContentRequest>,
) -> Result<Json<FileDetail>, ApiError> {
    let mut ws = state.workspace.write().await;
    Ok(Json(ws.patch_content(id, &req.content)?))
}

pub(super) async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FileId>,
) -> Result<StatusCode, ApiError> {
    let mut ws = state.workspace.write().await;
    ws.delete_file(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn apply_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FileId>,
) -> Result<Json<FileDetail>, ApiError> {
    let mut ws = state.workspace.write().await;
    Ok(Json(ws.apply_draft(id)?))
}

/// Development hook standing in for the draft generator.
pub(super) async fn stage_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FileId>,
    Json(req): Json<ContentRequest>,
) -> Result<Json<FileDetail>, ApiError> {
    let mut ws = state.workspace.write().await;
    Ok(Json(ws.stage_draft(id, &req.content)?))
}
