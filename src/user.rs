use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct User {
  pub(crate) created_at: OffsetDateTime,
  pub(crate) favorites: Vec<Story>,
  pub(crate) login_token: String,
  pub(crate) name: String,
  pub(crate) own_stories: Vec<Story>,
  pub(crate) username: String,
}

impl User {
  pub(crate) fn credentials(&self) -> Credentials {
    Credentials {
      token: self.login_token.clone(),
      username: self.username.clone(),
    }
  }

  pub(crate) fn from_payload(payload: UserPayload, token: String) -> Self {
    Self {
      created_at: payload.created_at,
      favorites: payload.favorites,
      login_token: token,
      name: payload.name,
      own_stories: payload.stories,
      username: payload.username,
    }
  }

  pub(crate) fn is_favorite(&self, story_id: &str) -> bool {
    self
      .favorites
      .iter()
      .any(|story| story.story_id == story_id)
  }

  pub(crate) fn push_favorite(&mut self, story: Story) {
    if !self.is_favorite(&story.story_id) {
      self.favorites.push(story);
    }
  }

  pub(crate) fn push_own_story(&mut self, story: Story) {
    self.own_stories.insert(0, story);
  }

  pub(crate) fn remove_favorite(&mut self, story_id: &str) -> Option<Story> {
    let index = self
      .favorites
      .iter()
      .position(|story| story.story_id == story_id)?;

    Some(self.favorites.remove(index))
  }
}

#[cfg(test)]
pub(crate) fn sample_user() -> User {
  User {
    created_at: time::macros::datetime!(2023-11-02 08:00 UTC),
    favorites: Vec::new(),
    login_token: "token-123".to_string(),
    name: "Ada Lovelace".to_string(),
    own_stories: Vec::new(),
    username: "ada".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::story::sample_story};

  #[test]
  fn auth_response_maps_stories_to_own_stories() {
    let response = serde_json::from_str::<AuthResponse>(
      r#"{
        "token": "abc.def",
        "user": {
          "createdAt": "2023-11-02T08:00:00.000Z",
          "favorites": [],
          "name": "Ada Lovelace",
          "stories": [{
            "storyId": "s1",
            "title": "Notes",
            "author": "Ada",
            "url": "https://example.com/notes",
            "username": "ada",
            "createdAt": "2023-11-03T08:00:00.000Z"
          }],
          "updatedAt": "2023-11-03T08:00:00.000Z",
          "username": "ada"
        }
      }"#,
    )
    .unwrap();

    let user = User::from_payload(response.user, response.token);

    assert_eq!(user.login_token, "abc.def");
    assert_eq!(user.own_stories.len(), 1);
    assert_eq!(user.own_stories[0].story_id, "s1");
    assert!(user.favorites.is_empty());
  }

  #[test]
  fn missing_story_arrays_default_to_empty() {
    let response = serde_json::from_str::<UserResponse>(
      r#"{"user": {
        "createdAt": "2023-11-02T08:00:00Z",
        "name": "Ada",
        "username": "ada"
      }}"#,
    )
    .unwrap();

    let user = User::from_payload(response.user, "t".to_string());

    assert!(user.favorites.is_empty());
    assert!(user.own_stories.is_empty());
  }

  #[test]
  fn favorites_can_be_added_and_removed() {
    let mut user = sample_user();

    user.push_favorite(sample_story("a"));
    user.push_favorite(sample_story("b"));
    user.push_favorite(sample_story("a"));

    assert_eq!(user.favorites.len(), 2);
    assert!(user.is_favorite("a"));

    let removed = user.remove_favorite("a").unwrap();

    assert_eq!(removed.story_id, "a");
    assert!(!user.is_favorite("a"));
    assert!(user.is_favorite("b"));
    assert!(user.remove_favorite("missing").is_none());
  }

  #[test]
  fn credentials_carry_username_and_token() {
    let credentials = sample_user().credentials();

    assert_eq!(credentials.username, "ada");
    assert_eq!(credentials.token, "token-123");
  }
}
