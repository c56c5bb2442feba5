use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StoryEntry {
  pub(crate) detail: String,
  pub(crate) favorite: Option<bool>,
  pub(crate) id: String,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl StoryEntry {
  pub(crate) fn new(story: &Story, favorite: Option<bool>) -> Self {
    let title = html_escape::decode_html_entities(story.title.trim()).into_owned();

    let mut detail = match story.host_name() {
      Some(host) => format!("({host}) "),
      None => String::new(),
    };

    detail.push_str(&format!(
      "by {} • posted by {} • {}",
      html_escape::decode_html_entities(&story.author),
      story.username,
      format_date(story.created_at)
    ));

    Self {
      detail,
      favorite,
      id: story.story_id.clone(),
      title,
      url: story.url.clone(),
    }
  }

  pub(crate) fn star(&self) -> &'static str {
    match self.favorite {
      Some(true) => "★",
      Some(false) => "☆",
      None => " ",
    }
  }
}
