#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Page {
  AllStories,
  Favorites,
  OwnStories,
}

impl Page {
  pub(crate) const ALL: [Page; 3] =
    [Page::AllStories, Page::Favorites, Page::OwnStories];

  pub(crate) fn empty_text(self, logged_in: bool) -> &'static str {
    match (self, logged_in) {
      (Page::AllStories, _) => "No stories yet. Press s to submit one.",
      (Page::Favorites, false) => "Log in (i) to see your favorites.",
      (Page::Favorites, true) => "No favorites yet. Press f on a story.",
      (Page::OwnStories, false) => "Log in (i) to see your stories.",
      (Page::OwnStories, true) => "You have not submitted any stories.",
    }
  }

  pub(crate) fn index(self) -> usize {
    match self {
      Page::AllStories => 0,
      Page::Favorites => 1,
      Page::OwnStories => 2,
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Page::AllStories => "all stories",
      Page::Favorites => "favorites",
      Page::OwnStories => "my stories",
    }
  }

  pub(crate) fn next(self) -> Self {
    Self::ALL[(self.index() + 1) % Self::ALL.len()]
  }

  pub(crate) fn previous(self) -> Self {
    Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pages_cycle_in_both_directions() {
    assert_eq!(Page::AllStories.next(), Page::Favorites);
    assert_eq!(Page::OwnStories.next(), Page::AllStories);
    assert_eq!(Page::AllStories.previous(), Page::OwnStories);
    assert_eq!(Page::Favorites.previous(), Page::AllStories);
  }

  #[test]
  fn index_matches_tab_order() {
    for (index, page) in Page::ALL.iter().enumerate() {
      assert_eq!(page.index(), index);
    }
  }
}
