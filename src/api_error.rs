use super::*;

#[derive(Debug, thiserror::Error)]
#[error("{message} ({status})")]
pub(crate) struct ApiError {
  pub(crate) message: String,
  pub(crate) status: StatusCode,
}

#[derive(Deserialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
  message: String,
}

impl ApiError {
  pub(crate) fn from_body(status: StatusCode, body: &str) -> Self {
    let message = serde_json::from_str::<ErrorResponse>(body)
      .ok()
      .map(|response| response.error.message)
      .filter(|message| !message.trim().is_empty())
      .unwrap_or_else(|| {
        status
          .canonical_reason()
          .unwrap_or("request failed")
          .to_string()
      });

    Self { message, status }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn uses_server_message_when_present() {
    let error = ApiError::from_body(
      StatusCode::UNAUTHORIZED,
      r#"{"error": {"status": 401, "title": "Unauthorized", "message": "Invalid password"}}"#,
    );

    assert_eq!(error.message, "Invalid password");
    assert_eq!(error.to_string(), "Invalid password (401 Unauthorized)");
  }

  #[test]
  fn falls_back_to_status_reason() {
    let error = ApiError::from_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");

    assert_eq!(error.message, "Bad Gateway");
  }
}
