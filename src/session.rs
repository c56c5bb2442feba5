use super::*;

/// Everything the UI knows about the site: the shared feed and, once
/// someone logs in, their account.
#[derive(Debug, Default)]
pub(crate) struct Session {
  pub(crate) current_user: Option<User>,
  pub(crate) story_list: StoryList,
}

impl Session {
  /// Puts a freshly submitted story at the top of the feed. It only joins
  /// the current user's own stories if they are the one who submitted it.
  pub(crate) fn add_story(&mut self, story: Story, submitter: &str) {
    if let Some(user) = self
      .current_user
      .as_mut()
      .filter(|user| user.username == submitter)
    {
      user.push_own_story(story.clone());
    }

    self.story_list.prepend(story);
  }

  /// Searches the feed, then the user's favorites and own stories.
  pub(crate) fn find_story(&self, story_id: &str) -> Option<&Story> {
    self.story_list.find(story_id).or_else(|| {
      self.current_user.as_ref().and_then(|user| {
        user
          .favorites
          .iter()
          .chain(&user.own_stories)
          .find(|story| story.story_id == story_id)
      })
    })
  }

  pub(crate) fn is_favorite(&self, story_id: &str) -> Option<bool> {
    self
      .current_user
      .as_ref()
      .map(|user| user.is_favorite(story_id))
  }

  pub(crate) fn new(story_list: StoryList, current_user: Option<User>) -> Self {
    Self {
      current_user,
      story_list,
    }
  }

  pub(crate) fn stories_for(&self, page: Page) -> &[Story] {
    match (page, self.current_user.as_ref()) {
      (Page::AllStories, _) => self.story_list.stories(),
      (Page::Favorites, Some(user)) => &user.favorites,
      (Page::OwnStories, Some(user)) => &user.own_stories,
      (_, None) => &[],
    }
  }
}
