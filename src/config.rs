use super::*;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
  base_url: Option<String>,
  credentials_file: Option<PathBuf>,
  log_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) base_url: Url,
  pub(crate) credentials_file: PathBuf,
  pub(crate) log_file: PathBuf,
}

impl Config {
  const DEFAULT_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

  fn config_dir() -> Result<PathBuf> {
    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("snooze"))
  }

  pub(crate) fn load() -> Result<Self> {
    let dir = Self::config_dir()?;

    let path = env::var_os("SNOOZE_CONFIG")
      .map_or_else(|| dir.join("config.toml"), PathBuf::from);

    let file = if path.is_file() {
      let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

      toml::from_str::<ConfigFile>(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?
    } else {
      ConfigFile::default()
    };

    Self::resolve(file, env::var("SNOOZE_BASE_URL").ok(), &dir)
  }

  fn parse_base_url(value: &str) -> Result<Url> {
    let url = Url::parse(value)
      .with_context(|| format!("invalid base URL `{value}`"))?;

    if !matches!(url.scheme(), "http" | "https") {
      bail!("base URL `{value}` must use http or https");
    }

    Ok(url)
  }

  fn resolve(
    file: ConfigFile,
    base_url_override: Option<String>,
    dir: &Path,
  ) -> Result<Self> {
    let base_url = base_url_override
      .or(file.base_url)
      .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

    Ok(Self {
      base_url: Self::parse_base_url(&base_url)?,
      credentials_file: file
        .credentials_file
        .unwrap_or_else(|| dir.join("credentials.json")),
      log_file: file.log_file.unwrap_or_else(|| dir.join("snooze.log")),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_live_in_config_dir() {
    let config =
      Config::resolve(ConfigFile::default(), None, Path::new("/cfg")).unwrap();

    assert_eq!(
      config.base_url.as_str(),
      "https://hack-or-snooze-v3.herokuapp.com/"
    );
    assert_eq!(config.credentials_file, Path::new("/cfg/credentials.json"));
    assert_eq!(config.log_file, Path::new("/cfg/snooze.log"));
  }

  #[test]
  fn file_values_are_used() {
    let file = toml::from_str::<ConfigFile>(
      r#"
        base_url = "http://localhost:5000"
        credentials_file = "/tmp/creds.json"
      "#,
    )
    .unwrap();

    let config = Config::resolve(file, None, Path::new("/cfg")).unwrap();

    assert_eq!(config.base_url.as_str(), "http://localhost:5000/");
    assert_eq!(config.credentials_file, Path::new("/tmp/creds.json"));
    assert_eq!(config.log_file, Path::new("/cfg/snooze.log"));
  }

  #[test]
  fn environment_overrides_file_base_url() {
    let file = ConfigFile {
      base_url: Some("http://localhost:5000".to_string()),
      ..ConfigFile::default()
    };

    let config = Config::resolve(
      file,
      Some("https://staging.example.com".to_string()),
      Path::new("/cfg"),
    )
    .unwrap();

    assert_eq!(config.base_url.host_str(), Some("staging.example.com"));
  }

  #[test]
  fn rejects_non_http_base_url() {
    let file = ConfigFile {
      base_url: Some("ftp://example.com".to_string()),
      ..ConfigFile::default()
    };

    assert!(Config::resolve(file, None, Path::new("/cfg")).is_err());
  }

  #[test]
  fn rejects_unknown_keys() {
    assert!(toml::from_str::<ConfigFile>("colour = \"red\"").is_err());
  }
}
