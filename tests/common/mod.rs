use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub const USER: &str = "dev";
pub const PASSWORD: &str = "dev";

pub struct ServerGuard {
    pub base_url: String,
    _dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    spawn_server_with(&[])
}

pub fn spawn_server_with(extra: &[&str]) -> Result<ServerGuard> {
    let dir = tempfile::tempdir().context("create server tempdir")?;
    let addr_file = dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_frontfiles-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--user",
            &format!("{}:{}", USER, PASSWORD),
        ])
        .args(extra)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn frontfiles-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        _dir: dir,
        child,
    })
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

/// Signs in over plain HTTP and returns the access token.
#[allow(dead_code)]
pub fn access_token(base_url: &str) -> Result<String> {
    let pair: serde_json::Value = reqwest::blocking::Client::new()
        .post(format!("{}/authentication/token/", base_url))
        .json(&serde_json::json!({"username": USER, "password": PASSWORD}))
        .send()
        .context("obtain token")?
        .error_for_status()
        .context("obtain token status")?
        .json()
        .context("parse token pair")?;
    pair.get("access")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .context("access token missing")
}

#[allow(dead_code)]
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Stages a draft through the development hook.
#[allow(dead_code)]
pub fn stage_draft(base_url: &str, file: u64, content: &str) -> Result<()> {
    let token = access_token(base_url)?;
    reqwest::blocking::Client::new()
        .put(format!("{}/dev/projectfile/{}/draft", base_url, file))
        .header(reqwest::header::AUTHORIZATION, auth_header(&token))
        .json(&serde_json::json!({ "content": content }))
        .send()
        .context("stage draft")?
        .error_for_status()
        .context("stage draft status")?;
    Ok(())
}

/// Runs the `frontfiles` CLI against a store directory.
#[allow(dead_code)]
pub fn run_frontfiles(store_dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_frontfiles"))
        .args(args)
        .env("FRONTFILES_DIR", store_dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("run frontfiles {:?}", args))
}

#[allow(dead_code)]
pub fn store_dir(tmp: &tempfile::TempDir) -> PathBuf {
    tmp.path().join(".frontfiles")
}
