use tracing::Level;

/// Environment variable read when `--log-level` is not given.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Install the global fmt subscriber.
///
/// The explicit flag wins over `$LOG_LEVEL`; anything unrecognised falls
/// back to `info`.
pub fn init(flag: Option<&str>) -> anyhow::Result<()> {
    let env = std::env::var(LOG_LEVEL_ENV).ok();
    let level = resolve_level(flag.or(env.as_deref()));
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    tracing::debug!(%level, "logging initialised");
    Ok(())
}

pub fn resolve_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::INFO,
    }
}
