use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
  pub(crate) user: UserPayload,
}
