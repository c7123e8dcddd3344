use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::RwLock;

use frontfiles::model::{
    FileDetail, FileId, FileSummary, Folder, FolderId, MAX_FOLDER_DEPTH, ProjectId,
};

#[path = "frontfiles_server/types.rs"]
mod types;
use self::types::*;
#[path = "frontfiles_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "frontfiles_server/auth.rs"]
mod auth;
use self::auth::*;
#[path = "frontfiles_server/workspace_store.rs"]
mod workspace_store;
use self::workspace_store::*;
#[path = "frontfiles_server/handlers_system.rs"]
mod handlers_system;
use self::handlers_system::*;
#[path = "frontfiles_server/handlers_folders.rs"]
mod handlers_folders;
use self::handlers_folders::*;
#[path = "frontfiles_server/handlers_files.rs"]
mod handlers_files;
use self::handlers_files::*;
#[path = "frontfiles_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "frontfiles_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
