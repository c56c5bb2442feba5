use super::*;

pub(crate) enum Event {
  Authenticated {
    result: Result<User>,
  },
  FavoriteToggled {
    added: bool,
    result: Result,
    story: Story,
    username: String,
  },
  Stories {
    result: Result<StoryList>,
  },
  StorySubmitted {
    result: Result<Story>,
    username: String,
  },
}
