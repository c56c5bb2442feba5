use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Credentials {
  pub(crate) token: String,
  pub(crate) username: String,
}
