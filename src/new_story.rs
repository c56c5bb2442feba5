use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct NewStory {
  pub(crate) author: String,
  pub(crate) title: String,
  pub(crate) url: String,
}
