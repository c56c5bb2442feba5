use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Story {
  pub(crate) author: String,
  #[serde(with = "time::serde::rfc3339")]
  pub(crate) created_at: OffsetDateTime,
  pub(crate) story_id: String,
  pub(crate) title: String,
  pub(crate) url: String,
  pub(crate) username: String,
}

impl Story {
  pub(crate) fn host_name(&self) -> Option<String> {
    Url::parse(&self.url)
      .ok()
      .and_then(|url| url.host_str().map(str::to_owned))
  }
}

#[cfg(test)]
pub(crate) fn sample_story(id: &str) -> Story {
  Story {
    author: "Ada Lovelace".to_string(),
    created_at: time::macros::datetime!(2024-03-09 12:30 UTC),
    story_id: id.to_string(),
    title: format!("Story {id}"),
    url: format!("https://example.com/{id}"),
    username: "ada".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_camel_case_payload() {
    let story = serde_json::from_str::<Story>(
      r#"{
        "storyId": "4e2f",
        "title": "Rust 2024",
        "author": "The Rust Team",
        "url": "https://blog.rust-lang.org/2024/",
        "username": "ferris",
        "createdAt": "2024-03-09T12:30:00.123Z",
        "updatedAt": "2024-03-09T12:30:00.123Z"
      }"#,
    )
    .unwrap();

    assert_eq!(story.story_id, "4e2f");
    assert_eq!(story.username, "ferris");
    assert_eq!(story.created_at.year(), 2024);
  }

  #[test]
  fn host_name_is_parsed_from_url() {
    let mut story = sample_story("1");

    story.url = "https://www.rust-lang.org/learn?x=1".to_string();

    assert_eq!(story.host_name().as_deref(), Some("www.rust-lang.org"));
  }

  #[test]
  fn host_name_is_none_for_invalid_url() {
    let mut story = sample_story("1");

    story.url = "not a url".to_string();

    assert_eq!(story.host_name(), None);
  }
}
