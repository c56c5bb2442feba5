use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  AddFavorite {
    credentials: Credentials,
    story: Story,
  },
  FetchStories,
  Login {
    password: String,
    username: String,
  },
  OpenUrl {
    url: String,
  },
  RemoveFavorite {
    credentials: Credentials,
    story: Story,
  },
  Signup {
    name: String,
    password: String,
    username: String,
  },
  SubmitStory {
    credentials: Credentials,
    story: NewStory,
  },
}
