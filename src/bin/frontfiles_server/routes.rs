//! HTTP route registration for the development authority.

use super::*;

pub(super) fn authed_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/frontfiles/:project/folders/",
            get(get_tree).post(create_folder),
        )
        .route(
            "/frontfiles/folder/:id/",
            put(update_folder).delete(delete_folder),
        )
        .route("/frontfiles/projectfile/create/", post(create_file))
        .route(
            "/frontfiles/projectfile/:id/",
            get(get_file)
                .put(update_file)
                .patch(patch_file)
                .delete(delete_file),
        )
        .route("/frontfiles/projectfile/:id/draft", post(apply_draft))
        .route("/dev/projectfile/:id/draft", put(stage_draft))
        .layer(middleware::from_fn_with_state(state, require_bearer))
}

pub(super) fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/authentication/token/", post(token_obtain))
        .route("/authentication/token/refresh/", post(token_refresh))
}
