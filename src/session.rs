//! On-disk client state: connection settings and the session credentials.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, SessionTokens};

const STORE_DIR: &str = ".frontfiles";
const DIR_ENV: &str = "FRONTFILES_DIR";

#[derive(Clone, Debug)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn store_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `frontfiles login`)",
                STORE_DIR,
                dir.display()
            ));
        }
        Ok(Self {
            root: dir.to_path_buf(),
        })
    }

    /// Finds the store from `FRONTFILES_DIR`, or by walking up from `start`.
    pub fn discover(start: &Path) -> Result<Self> {
        if let Some(dir) = std::env::var_os(DIR_ENV) {
            return Self::open(Path::new(&dir));
        }
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            let candidate = Self::store_dir(dir);
            if candidate.is_dir() {
                return Self::open(&candidate);
            }
        }
        Err(anyhow!(
            "No {} directory found (run `frontfiles login`)",
            STORE_DIR
        ))
    }

    /// Creates (or reuses) the store under `root` and writes `cfg`.
    pub fn init(root: &Path, cfg: &ClientConfig) -> Result<Self> {
        let dir = match std::env::var_os(DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => Self::store_dir(root),
        };
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let store = Self { root: dir };
        store.write_config(cfg)?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let bytes = fs::read(self.root.join("config.json")).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_session(&self) -> Result<SessionTokens> {
        let path = self.root.join("session.json");
        if !path.exists() {
            return Ok(SessionTokens::default());
        }
        let bytes = fs::read(&path).context("read session.json")?;
        serde_json::from_slice(&bytes).context("parse session.json")
    }

    pub fn write_session(&self, tokens: &SessionTokens) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(tokens).context("serialize session")?;
        write_atomic(&self.root.join("session.json"), &bytes).context("write session.json")?;
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        let path = self.root.join("session.json");
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
