use super::*;

pub(crate) enum Mode {
  Form(Form),
  Stories,
}

impl Mode {
  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match self {
      Mode::Form(form) => form.handle_key(key),
      Mode::Stories => {
        let modifiers = key.modifiers;

        match key.code {
          KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
          KeyCode::Char('?') => Command::ShowHelp,
          KeyCode::Left | KeyCode::Char('h') => Command::SwitchPageLeft,
          KeyCode::Right | KeyCode::Char('l') => Command::SwitchPageRight,
          KeyCode::Char('1') => Command::ShowPage(Page::AllStories),
          KeyCode::Char('2') => Command::ShowPage(Page::Favorites),
          KeyCode::Char('3') => Command::ShowPage(Page::OwnStories),
          KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
          KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
          KeyCode::PageDown => Command::PageDown,
          KeyCode::PageUp => Command::PageUp,
          KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::PageDown
          }
          KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::PageUp
          }
          KeyCode::Home => Command::SelectFirst,
          KeyCode::End => Command::SelectLast,
          KeyCode::Enter | KeyCode::Char('o' | 'O') => {
            Command::OpenCurrentInBrowser
          }
          KeyCode::Char('f' | ' ') => Command::ToggleFavorite,
          KeyCode::Char('s') => Command::OpenForm(FormKind::Submit),
          KeyCode::Char('i') => Command::OpenForm(FormKind::Login),
          KeyCode::Char('n') => Command::OpenForm(FormKind::Signup),
          KeyCode::Char('x') => Command::Logout,
          KeyCode::Char('r') => Command::Reload,
          _ => Command::None,
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn story_keys_map_to_commands() {
    let mut mode = Mode::Stories;

    assert_eq!(mode.handle_key(key(KeyCode::Char('f'))), Command::ToggleFavorite);
    assert_eq!(
      mode.handle_key(key(KeyCode::Char('s'))),
      Command::OpenForm(FormKind::Submit)
    );
    assert_eq!(
      mode.handle_key(key(KeyCode::Char('2'))),
      Command::ShowPage(Page::Favorites)
    );
    assert_eq!(
      mode.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
      Command::PageDown
    );
    assert_eq!(mode.handle_key(key(KeyCode::Esc)), Command::Quit);
  }

  #[test]
  fn form_mode_routes_keys_to_form() {
    let mut mode = Mode::Form(Form::new(FormKind::Login));

    assert_eq!(mode.handle_key(key(KeyCode::Char('q'))), Command::None);
    assert_eq!(mode.handle_key(key(KeyCode::Esc)), Command::CancelForm);
  }
}
