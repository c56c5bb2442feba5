use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct StoryList {
  stories: Vec<Story>,
}

impl StoryList {
  pub(crate) fn find(&self, story_id: &str) -> Option<&Story> {
    self.stories.iter().find(|story| story.story_id == story_id)
  }

  pub(crate) fn len(&self) -> usize {
    self.stories.len()
  }

  pub(crate) fn new(stories: Vec<Story>) -> Self {
    Self { stories }
  }

  pub(crate) fn prepend(&mut self, story: Story) {
    self.stories.insert(0, story);
  }

  pub(crate) fn stories(&self) -> &[Story] {
    &self.stories
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::story::sample_story};

  #[test]
  fn find_returns_matching_story() {
    let list = StoryList::new(vec![sample_story("a"), sample_story("b")]);

    assert_eq!(
      list.find("b").map(|story| story.title.as_str()),
      Some("Story b")
    );
    assert!(list.find("c").is_none());
  }

  #[test]
  fn prepend_puts_new_story_first() {
    let mut list = StoryList::new(vec![sample_story("a")]);

    list.prepend(sample_story("new"));

    assert_eq!(list.len(), 2);
    assert_eq!(list.stories()[0].story_id, "new");
    assert_eq!(list.stories()[1].story_id, "a");
  }
}
