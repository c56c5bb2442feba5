use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
}

impl Client {
  pub(crate) async fn add_favorite(
    &self,
    credentials: &Credentials,
    story_id: &str,
  ) -> Result {
    let request = self.favorite_request(Method::POST, credentials, story_id)?;

    self.send(request).await?;

    Ok(())
  }

  pub(crate) async fn add_story(
    &self,
    credentials: &Credentials,
    new_story: &NewStory,
  ) -> Result<Story> {
    let request = self.add_story_request(credentials, new_story)?;

    Ok(self.send(request).await?.json::<StoryResponse>().await?.story)
  }

  fn add_story_request(
    &self,
    credentials: &Credentials,
    new_story: &NewStory,
  ) -> Result<Request> {
    Ok(
      self
        .client
        .post(self.endpoint(&["stories"])?)
        .json(&json!({ "token": credentials.token, "story": new_story }))
        .build()?,
    )
  }

  async fn authenticate(&self, request: Request) -> Result<User> {
    let AuthResponse { token, user } =
      self.send(request).await?.json::<AuthResponse>().await?;

    Ok(User::from_payload(user, token))
  }

  fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let mut url = self.base_url.clone();

    url
      .path_segments_mut()
      .map_err(|()| anyhow!("base URL cannot have a path: {}", self.base_url))?
      .pop_if_empty()
      .extend(segments);

    Ok(url)
  }

  fn favorite_request(
    &self,
    method: Method,
    credentials: &Credentials,
    story_id: &str,
  ) -> Result<Request> {
    let url = self.endpoint(&[
      "users",
      &credentials.username,
      "favorites",
      story_id,
    ])?;

    Ok(
      self
        .client
        .request(method, url)
        .json(&json!({ "token": credentials.token }))
        .build()?,
    )
  }

  pub(crate) async fn fetch_stories(&self) -> Result<StoryList> {
    let request = self.stories_request()?;

    let response = self.send(request).await?.json::<StoriesResponse>().await?;

    Ok(StoryList::new(response.stories))
  }

  pub(crate) async fn login(
    &self,
    username: &str,
    password: &str,
  ) -> Result<User> {
    let request = self.login_request(username, password)?;

    self.authenticate(request).await
  }

  fn login_request(&self, username: &str, password: &str) -> Result<Request> {
    Ok(
      self
        .client
        .post(self.endpoint(&["login"])?)
        .json(&json!({ "user": { "username": username, "password": password } }))
        .build()?,
    )
  }

  /// Restores a session from a remembered username and token. Failures are
  /// logged and reported as `None` so startup can continue logged out.
  pub(crate) async fn login_via_stored_credentials(
    &self,
    credentials: &Credentials,
  ) -> Option<User> {
    match self.restore_user(credentials).await {
      Ok(user) => Some(user),
      Err(error) => {
        error!(
          username = %credentials.username,
          error = %error,
          "login via stored credentials failed"
        );

        None
      }
    }
  }

  pub(crate) fn new(base_url: Url) -> Self {
    Self {
      base_url,
      client: reqwest::Client::new(),
    }
  }

  pub(crate) async fn remove_favorite(
    &self,
    credentials: &Credentials,
    story_id: &str,
  ) -> Result {
    let request =
      self.favorite_request(Method::DELETE, credentials, story_id)?;

    self.send(request).await?;

    Ok(())
  }

  fn restore_request(&self, credentials: &Credentials) -> Result<Request> {
    Ok(
      self
        .client
        .get(self.endpoint(&["users", &credentials.username])?)
        .query(&[("token", credentials.token.as_str())])
        .build()?,
    )
  }

  async fn restore_user(&self, credentials: &Credentials) -> Result<User> {
    let request = self.restore_request(credentials)?;

    let UserResponse { user } =
      self.send(request).await?.json::<UserResponse>().await?;

    Ok(User::from_payload(user, credentials.token.clone()))
  }

  async fn send(&self, request: Request) -> Result<Response> {
    let (method, path) = (request.method().clone(), request.url().path().to_owned());

    debug!(%method, %path, "sending request");

    let response = self
      .client
      .execute(request)
      .await
      .with_context(|| format!("{method} {path} failed"))?;

    let status = response.status();

    if status.is_success() {
      return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    warn!(%method, %path, %status, "request rejected");

    Err(ApiError::from_body(status, &body).into())
  }

  pub(crate) async fn signup(
    &self,
    username: &str,
    password: &str,
    name: &str,
  ) -> Result<User> {
    let request = self.signup_request(username, password, name)?;

    self.authenticate(request).await
  }

  fn signup_request(
    &self,
    username: &str,
    password: &str,
    name: &str,
  ) -> Result<Request> {
    Ok(
      self
        .client
        .post(self.endpoint(&["signup"])?)
        .json(&json!({
          "user": { "username": username, "password": password, "name": name }
        }))
        .build()?,
    )
  }

  fn stories_request(&self) -> Result<Request> {
    Ok(self.client.get(self.endpoint(&["stories"])?).build()?)
  }
}
