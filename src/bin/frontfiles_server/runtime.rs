use tracing_subscriber::EnvFilter;

use super::*;

#[derive(Parser)]
#[command(name = "frontfiles-server")]
#[command(about = "Frontfiles workspace authority (development, in-memory)", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// Account allowed to sign in, as `name:password` (repeatable)
    #[arg(long = "user", value_name = "NAME:PASSWORD", default_value = "dev:dev")]
    pub(super) users: Vec<String>,

    /// Lifetime of issued access tokens, in milliseconds
    #[arg(long, default_value_t = 300_000)]
    pub(super) access_ttl_ms: u64,
}

pub(super) fn parse_users(specs: &[String]) -> Result<HashMap<String, String>> {
    let mut users = HashMap::new();
    for spec in specs {
        let (name, password) = spec
            .split_once(':')
            .with_context(|| format!("invalid --user {:?} (expected name:password)", spec))?;
        if name.is_empty() {
            anyhow::bail!("invalid --user {:?} (empty name)", spec);
        }
        users.insert(name.to_string(), password.to_string());
    }
    Ok(users)
}

pub(super) fn build_state(args: &Args) -> Result<Arc<AppState>> {
    let ttl_ms = i64::try_from(args.access_ttl_ms).context("--access-ttl-ms out of range")?;
    Ok(Arc::new(AppState {
        users: parse_users(&args.users)?,
        access_ttl: time::Duration::milliseconds(ttl_ms),
        tokens: RwLock::new(TokenStore::default()),
        workspace: RwLock::new(Workspace::default()),
    }))
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let state = build_state(&args)?;
    let app = Router::new()
        .merge(public_router())
        .merge(authed_router(state.clone()))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("frontfiles-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
