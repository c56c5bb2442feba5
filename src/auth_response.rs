use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
  pub(crate) token: String,
  pub(crate) user: UserPayload,
}
