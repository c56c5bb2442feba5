use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserPayload {
  #[serde(with = "time::serde::rfc3339")]
  pub(crate) created_at: OffsetDateTime,
  #[serde(default)]
  pub(crate) favorites: Vec<Story>,
  pub(crate) name: String,
  #[serde(default)]
  pub(crate) stories: Vec<Story>,
  pub(crate) username: String,
}
