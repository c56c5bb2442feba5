use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelForm,
  HideHelp,
  Logout,
  None,
  OpenCurrentInBrowser,
  OpenForm(FormKind),
  PageDown,
  PageUp,
  Quit,
  Reload,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  ShowPage(Page),
  SubmitForm,
  SwitchPageLeft,
  SwitchPageRight,
  ToggleFavorite,
}
