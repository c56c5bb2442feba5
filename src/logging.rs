use {
  super::*,
  std::sync::Mutex,
  tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
  },
};

/// Installs a file logger; the terminal is reserved for the UI. The filter
/// comes from `SNOOZE_LOG` and defaults to `info`.
pub(crate) fn init(path: &Path) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  let file = fs::OpenOptions::new()
    .append(true)
    .create(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_env("SNOOZE_LOG")
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(
      fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(filter),
    )
    .try_init()?;

  Ok(())
}
