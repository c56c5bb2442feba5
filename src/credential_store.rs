use super::*;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

#[derive(Debug)]
pub(crate) struct CredentialStore {
  path: PathBuf,
}

impl CredentialStore {
  pub(crate) fn clear(&self) -> Result {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(error) => Err(error).with_context(|| {
        format!("failed to remove {}", self.path.display())
      }),
    }
  }

  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn load(&self) -> Result<Option<Credentials>> {
    if !self.path.exists() {
      return Ok(None);
    }

    let data = fs::read(&self.path)?;

    if data.is_empty() {
      return Ok(None);
    }

    let credentials = serde_json::from_slice::<Credentials>(&data)
      .with_context(|| format!("failed to parse {}", self.path.display()))?;

    Ok(Some(credentials))
  }

  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub(crate) fn save(&self, credentials: &Credentials) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(credentials)?;

    let mut options = fs::OpenOptions::new();

    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
      .open(&self.path)
      .with_context(|| format!("failed to open {}", self.path.display()))?;

    // `mode` only applies on creation, tighten files left by older runs.
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(0o600))?;

    file.write_all(&serialized)?;

    Ok(())
  }
}

#[cfg(test)]
pub(crate) fn temp_store() -> CredentialStore {
  use std::sync::atomic::{AtomicUsize, Ordering};

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

  CredentialStore::new(env::temp_dir().join(format!(
    "snooze_credentials_test_{}_{unique}.json",
    process::id()
  )))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_credentials() -> Credentials {
    Credentials {
      token: "abc".to_string(),
      username: "ada".to_string(),
    }
  }

  #[test]
  fn load_returns_none_without_file() {
    let store = temp_store();

    assert_eq!(store.load().unwrap(), None);
  }

  #[test]
  fn save_then_load_restores_credentials() {
    let store = temp_store();

    store.save(&sample_credentials()).unwrap();

    assert_eq!(store.load().unwrap(), Some(sample_credentials()));

    store.clear().unwrap();
  }

  #[test]
  fn clear_removes_saved_credentials() {
    let store = temp_store();

    store.save(&sample_credentials()).unwrap();
    store.clear().unwrap();

    assert_eq!(store.load().unwrap(), None);
    assert!(store.clear().is_ok(), "clearing twice is not an error");
  }

  #[cfg(unix)]
  #[test]
  fn saved_credentials_are_private_to_owner() {
    let store = temp_store();

    fs::write(&store.path, b"").unwrap();
    fs::set_permissions(&store.path, fs::Permissions::from_mode(0o644)).unwrap();

    store.save(&sample_credentials()).unwrap();

    let mode = fs::metadata(&store.path).unwrap().permissions().mode();

    assert_eq!(mode & 0o777, 0o600, "mode was {mode:o}");

    store.clear().unwrap();

    store.save(&sample_credentials()).unwrap();

    let mode = fs::metadata(&store.path).unwrap().permissions().mode();

    assert_eq!(mode & 0o077, 0, "mode was {mode:o}");

    store.clear().unwrap();
  }

  #[test]
  fn corrupt_file_is_an_error() {
    let store = temp_store();

    fs::write(&store.path, b"not json").unwrap();

    assert!(store.load().is_err());

    store.clear().unwrap();
  }
}
