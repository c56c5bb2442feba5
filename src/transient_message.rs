use super::*;

/// A notice shown on the status line in place of `fallback` until it has been
/// up for [`TransientMessage::LIFETIME`].
#[derive(Clone, Debug)]
pub(crate) struct TransientMessage {
  fallback: String,
  shown_at: Instant,
  text: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  fn expired_at(&self, now: Instant) -> bool {
    now.saturating_duration_since(self.shown_at) >= Self::LIFETIME
  }

  pub(crate) fn fallback(&self) -> &str {
    &self.fallback
  }

  pub(crate) fn is_expired(&self) -> bool {
    self.expired_at(Instant::now())
  }

  pub(crate) fn new(text: String, fallback: String) -> Self {
    Self {
      fallback,
      shown_at: Instant::now(),
      text,
    }
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}
