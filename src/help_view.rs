use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::help_area(frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  fn help_area(area: Rect) -> Rect {
    let (line_count, max_line_width) = HELP_TEXT
      .lines()
      .fold((0usize, 0usize), |(count, width), line| {
        (count.saturating_add(1), width.max(line.chars().count()))
      });

    let width = u16::try_from(max_line_width.saturating_add(2))
      .unwrap_or(u16::MAX);

    let height =
      u16::try_from(line_count.saturating_add(2)).unwrap_or(u16::MAX);

    centered_area(area, width, height)
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if !self.visible {
      return;
    }

    *message = self
      .message_backup
      .take()
      .unwrap_or_else(|| LIST_STATUS.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(message.clone());

    *message = HELP_STATUS.into();

    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn show_and_hide_restore_previous_message() {
    let mut help = HelpView::new();
    let mut message = "Loaded 12 stories".to_string();

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.hide(&mut message);
    assert!(!help.is_visible());
    assert_eq!(message, "Loaded 12 stories");
  }

  #[test]
  fn escape_closes_help() {
    let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

    assert_eq!(HelpView::handle_key(key), Command::HideHelp);
  }
}
