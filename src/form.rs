use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FormKind {
  Login,
  Signup,
  Submit,
}

impl FormKind {
  fn fields(self) -> &'static [(&'static str, bool)] {
    match self {
      FormKind::Login => &[("username", false), ("password", true)],
      FormKind::Signup => {
        &[("name", false), ("username", false), ("password", true)]
      }
      FormKind::Submit => &[("author", false), ("title", false), ("url", false)],
    }
  }

  pub(crate) fn title(self) -> &'static str {
    match self {
      FormKind::Login => "Log in",
      FormKind::Signup => "Create account",
      FormKind::Submit => "Submit a story",
    }
  }
}

#[derive(Debug, PartialEq)]
pub(crate) enum FormSubmission {
  Login {
    password: String,
    username: String,
  },
  Signup {
    name: String,
    password: String,
    username: String,
  },
  Submit(NewStory),
}

#[derive(Debug)]
struct FormField {
  label: &'static str,
  secret: bool,
  value: String,
}

#[derive(Debug)]
pub(crate) struct Form {
  error: Option<String>,
  fields: Vec<FormField>,
  focused: usize,
  kind: FormKind,
  submitting: bool,
}

impl Form {
  const LABEL_WIDTH: usize = 10;

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let mut lines = vec![Line::from("")];

    for (index, field) in self.fields.iter().enumerate() {
      let focused = index == self.focused;

      let value = if field.secret {
        mask(&field.value)
      } else {
        field.value.clone()
      };

      let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::DarkGray)
      };

      let mut spans = vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          format!("{:>width$} ", field.label, width = Self::LABEL_WIDTH),
          label_style,
        ),
        Span::styled(value, Style::default().fg(Color::White)),
      ];

      if focused {
        spans.push(Span::styled(
          "▏",
          Style::default().fg(Color::Cyan),
        ));
      }

      lines.push(Line::from(spans));
      lines.push(Line::from(""));
    }

    let footer = if self.submitting {
      Span::styled("Sending...", Style::default().fg(Color::DarkGray))
    } else if let Some(error) = &self.error {
      Span::styled(error.clone(), Style::default().fg(Color::Red))
    } else {
      Span::raw("")
    };

    lines.push(Line::from(vec![Span::raw(BASE_INDENT), footer]));

    let height = u16::try_from(lines.len().saturating_add(2)).unwrap_or(u16::MAX);

    let area = centered_area(frame.area(), 64, height);

    frame.render_widget(Clear, area);

    let form = Paragraph::new(lines)
      .block(
        Block::default()
          .title(self.kind.title())
          .borders(Borders::ALL),
      )
      .wrap(Wrap { trim: false });

    frame.render_widget(form, area);
  }

  fn field(&self, label: &str) -> &str {
    self
      .fields
      .iter()
      .find(|field| field.label == label)
      .map_or("", |field| field.value.as_str())
  }

  pub(crate) fn focus_next(&mut self) {
    self.focused = (self.focused + 1) % self.fields.len();
  }

  pub(crate) fn focus_previous(&mut self) {
    self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    if self.submitting {
      return match key.code {
        KeyCode::Esc => Command::CancelForm,
        _ => Command::None,
      };
    }

    match key.code {
      KeyCode::Esc => Command::CancelForm,
      KeyCode::Enter => {
        if self.focused + 1 == self.fields.len() {
          Command::SubmitForm
        } else {
          self.focus_next();
          Command::None
        }
      }
      KeyCode::Tab | KeyCode::Down => {
        self.focus_next();
        Command::None
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.focus_previous();
        Command::None
      }
      KeyCode::Backspace => {
        if let Some(field) = self.fields.get_mut(self.focused) {
          field.value.pop();
        }

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        if let Some(field) = self.fields.get_mut(self.focused) {
          field.value.push(ch);
        }

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn is_submitting(&self) -> bool {
    self.submitting
  }

  pub(crate) fn kind(&self) -> FormKind {
    self.kind
  }

  pub(crate) fn new(kind: FormKind) -> Self {
    Self {
      error: None,
      fields: kind
        .fields()
        .iter()
        .map(|&(label, secret)| FormField {
          label,
          secret,
          value: String::new(),
        })
        .collect(),
      focused: 0,
      kind,
      submitting: false,
    }
  }

  pub(crate) fn set_error(&mut self, error: String) {
    self.error = Some(error);
    self.submitting = false;
  }

  pub(crate) fn set_submitting(&mut self) {
    self.error = None;
    self.submitting = true;
  }

  /// Validates the fields and packages them for the matching request.
  pub(crate) fn submission(&self) -> Result<FormSubmission, String> {
    if let Some(field) = self.fields.iter().find(|field| {
      if field.secret {
        field.value.is_empty()
      } else {
        field.value.trim().is_empty()
      }
    }) {
      return Err(format!("Please fill in the {} field", field.label));
    }

    let text = |label: &str| self.field(label).trim().to_string();

    Ok(match self.kind {
      FormKind::Login => FormSubmission::Login {
        password: self.field("password").to_string(),
        username: text("username"),
      },
      FormKind::Signup => FormSubmission::Signup {
        name: text("name"),
        password: self.field("password").to_string(),
        username: text("username"),
      },
      FormKind::Submit => {
        let url = text("url");

        match Url::parse(&url) {
          Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
          _ => return Err(format!("\"{url}\" is not an http(s) URL")),
        }

        FormSubmission::Submit(NewStory {
          author: text("author"),
          title: text("title"),
          url,
        })
      }
    })
  }
}

#[cfg(test)]
pub(crate) fn type_text(form: &mut Form, text: &str) {
  for ch in text.chars() {
    form.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(form: &mut Form, code: KeyCode) -> Command {
    form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  #[test]
  fn login_form_collects_username_and_password() {
    let mut form = Form::new(FormKind::Login);

    type_text(&mut form, " ada ");
    assert_eq!(press(&mut form, KeyCode::Enter), Command::None);
    type_text(&mut form, "pa ss");

    assert_eq!(press(&mut form, KeyCode::Enter), Command::SubmitForm);
    assert_eq!(
      form.submission(),
      Ok(FormSubmission::Login {
        password: "pa ss".to_string(),
        username: "ada".to_string(),
      })
    );
  }

  #[test]
  fn backspace_edits_focused_field() {
    let mut form = Form::new(FormKind::Signup);

    type_text(&mut form, "Adaa");
    press(&mut form, KeyCode::Backspace);
    press(&mut form, KeyCode::Tab);
    type_text(&mut form, "ada");
    press(&mut form, KeyCode::BackTab);
    press(&mut form, KeyCode::BackTab);
    type_text(&mut form, "secret");

    assert_eq!(
      form.submission(),
      Ok(FormSubmission::Signup {
        name: "Ada".to_string(),
        password: "secret".to_string(),
        username: "ada".to_string(),
      })
    );
  }

  #[test]
  fn empty_fields_are_rejected() {
    let mut form = Form::new(FormKind::Login);

    type_text(&mut form, "ada");

    assert_eq!(
      form.submission(),
      Err("Please fill in the password field".to_string())
    );
  }

  #[test]
  fn submit_form_requires_http_url() {
    let mut form = Form::new(FormKind::Submit);

    type_text(&mut form, "Ada");
    press(&mut form, KeyCode::Tab);
    type_text(&mut form, "Notes");
    press(&mut form, KeyCode::Tab);
    type_text(&mut form, "example.com");

    assert!(form.submission().is_err());

    for _ in 0.."example.com".len() {
      press(&mut form, KeyCode::Backspace);
    }

    type_text(&mut form, "https://example.com/notes");

    assert_eq!(
      form.submission(),
      Ok(FormSubmission::Submit(NewStory {
        author: "Ada".to_string(),
        title: "Notes".to_string(),
        url: "https://example.com/notes".to_string(),
      }))
    );
  }

  #[test]
  fn control_characters_are_ignored() {
    let mut form = Form::new(FormKind::Login);

    form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert_eq!(form.field("username"), "");
  }

  #[test]
  fn submitting_form_only_accepts_escape() {
    let mut form = Form::new(FormKind::Login);

    form.set_submitting();
    type_text(&mut form, "ada");

    assert!(form.is_submitting());
    assert_eq!(form.field("username"), "");
    assert_eq!(press(&mut form, KeyCode::Esc), Command::CancelForm);

    form.set_error("Invalid password".to_string());

    assert!(!form.is_submitting());
  }
}
