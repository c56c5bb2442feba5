use super::*;

pub(crate) struct State {
  credential_store: CredentialStore,
  help: HelpView,
  list_height: usize,
  message: String,
  mode: Mode,
  page: Page,
  pending_effects: Vec<Effect>,
  pending_favorites: HashSet<(String, String)>,
  reloading: bool,
  session: Session,
  transient_message: Option<TransientMessage>,
  view: ListView<StoryEntry>,
}

impl State {
  const ROWS_PER_ENTRY: usize = 3;

  pub(crate) fn account_label(&self) -> String {
    match &self.session.current_user {
      Some(user) => format!(
        "{} ({}) • member since {}",
        user.name,
        user.username,
        format_date(user.created_at)
      ),
      None => "not logged in • i log in • n sign up".to_string(),
    }
  }

  fn apply_login(&mut self, user: User) {
    info!(username = %user.username, "logged in");

    let mut greeting = format!("Logged in as {}", user.username);

    if let Err(error) = self.credential_store.save(&user.credentials()) {
      warn!(error = %error, "could not remember credentials");
      greeting.push_str(" (login will not be remembered)");
    }

    self.session.current_user = Some(user);
    self.mode = Mode::Stories;
    self.show_page(Page::AllStories);
    self.reset_message();
    self.notify(greeting);
  }

  fn cancel_form(&mut self) {
    if let Mode::Form(form) = &self.mode {
      debug!(form = ?form.kind(), "form closed");

      self.mode = Mode::Stories;
      self.reset_message();
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn current_story(&self) -> Option<&Story> {
    self
      .view
      .selected_item()
      .and_then(|entry| self.session.find_story(&entry.id))
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::CancelForm => self.cancel_form(),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::Logout => self.logout()?,
      Command::None => {}
      Command::OpenCurrentInBrowser => self.open_current_in_browser(),
      Command::OpenForm(kind) => self.open_form(kind),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::Quit => {
        should_exit = true;
      }
      Command::Reload => self.reload(),
      Command::SelectFirst => self.view.set_selected(0),
      Command::SelectLast => self.view.set_selected(usize::MAX),
      Command::SelectNext => self.view.move_by(1),
      Command::SelectPrevious => self.view.move_by(-1),
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::ShowPage(page) => self.show_page(page),
      Command::SubmitForm => self.submit_form(),
      Command::SwitchPageLeft => self.show_page(self.page.previous()),
      Command::SwitchPageRight => self.show_page(self.page.next()),
      Command::ToggleFavorite => self.toggle_favorite(),
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Authenticated { result } => match result {
        Ok(user) => self.apply_login(user),
        Err(error) => {
          warn!(error = %error, "authentication failed");

          if let Mode::Form(form) = &mut self.mode {
            form.set_error(error.to_string());
          } else {
            self.notify(format!("Could not log in: {error}"));
          }
        }
      },
      Event::FavoriteToggled {
        added,
        result,
        story,
        username,
      } => {
        self
          .pending_favorites
          .remove(&(username.clone(), story.story_id.clone()));

        if let Err(error) = result {
          warn!(
            story_id = %story.story_id,
            error = %error,
            "favorite update failed"
          );
          self.notify(format!("Could not update favorites: {error}"));
          return;
        }

        let Some(user) = self
          .session
          .current_user
          .as_mut()
          .filter(|user| user.username == username)
        else {
          return;
        };

        let title = truncate(&story.title, 40);

        if added {
          user.push_favorite(story);
        } else {
          user.remove_favorite(&story.story_id);
        }

        self.refresh_view();

        self.notify(if added {
          format!("Added \"{title}\" to favorites")
        } else {
          format!("Removed \"{title}\" from favorites")
        });
      }
      Event::Stories { result } => {
        self.reloading = false;

        match result {
          Ok(story_list) => {
            let count = story_list.len();

            self.session.story_list = story_list;
            self.refresh_view();
            self.reset_message();
            self.notify(match count {
              1 => "Loaded 1 story".to_string(),
              _ => format!("Loaded {count} stories"),
            });
          }
          Err(error) => {
            warn!(error = %error, "story reload failed");
            self.reset_message();
            self.notify(format!("Could not load stories: {error}"));
          }
        }
      }
      Event::StorySubmitted { result, username } => match result {
        Ok(story) => {
          info!(story_id = %story.story_id, %username, "story submitted");

          let title = truncate(&story.title, 40);

          self.session.add_story(story, &username);
          self.mode = Mode::Stories;
          self.show_page(Page::AllStories);
          self.view.set_selected(0);
          self.view.set_offset(0);
          self.reset_message();
          self.notify(format!("Submitted \"{title}\""));
        }
        Err(error) => {
          warn!(error = %error, "story submission failed");

          if let Mode::Form(form) = &mut self.mode {
            form.set_error(error.to_string());
          } else {
            self.notify(format!("Could not submit story: {error}"));
          }
        }
      },
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_logged_in(&self) -> bool {
    self.session.current_user.is_some()
  }

  pub(crate) fn is_reloading(&self) -> bool {
    self.reloading
  }

  fn logout(&mut self) -> Result {
    let Some(username) = self
      .session
      .current_user
      .as_ref()
      .map(|user| user.username.clone())
    else {
      self.notify("Not logged in".to_string());
      return Ok(());
    };

    self
      .credential_store
      .clear()
      .context("could not forget stored credentials, still logged in")?;

    self.session.current_user = None;

    info!(%username, "logged out");

    self.mode = Mode::Stories;
    self.show_page(Page::AllStories);
    self.reset_message();
    self.notify(format!("Logged out {username}"));

    Ok(())
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(session: Session, credential_store: CredentialStore) -> Self {
    let mut state = Self {
      credential_store,
      help: HelpView::new(),
      list_height: 0,
      message: LIST_STATUS.into(),
      mode: Mode::Stories,
      page: Page::AllStories,
      pending_effects: Vec::new(),
      pending_favorites: HashSet::new(),
      reloading: false,
      session,
      transient_message: None,
      view: ListView::default(),
    };

    state.refresh_view();

    state
  }

  fn notify(&mut self, message: String) {
    if !self.help.is_visible() {
      self.set_transient_message(message);
    }
  }

  fn open_current_in_browser(&mut self) {
    if let Some(entry) = self.view.selected_item() {
      self.pending_effects.push(Effect::OpenUrl {
        url: entry.url.clone(),
      });
    }
  }

  fn open_form(&mut self, kind: FormKind) {
    if let Some(user) = &self.session.current_user
      && kind != FormKind::Submit
    {
      let message =
        format!("Already logged in as {}, press x to log out", user.username);

      self.notify(message);

      return;
    }

    debug!(form = ?kind, "form opened");

    let form = if kind == FormKind::Submit && !self.is_logged_in() {
      let mut login = Form::new(FormKind::Login);
      login.set_error("Log in to submit a story".to_string());
      login
    } else {
      Form::new(kind)
    };

    if kind == FormKind::Submit {
      self.show_page(Page::AllStories);
    }

    self.mode = Mode::Form(form);
    self.reset_message();
  }

  pub(crate) fn page(&self) -> Page {
    self.page
  }

  fn page_down(&mut self) {
    let jump = self.page_jump();
    self.view.move_by(jump);
  }

  fn page_jump(&self) -> isize {
    let entries = (self.list_height / Self::ROWS_PER_ENTRY).max(1);
    isize::try_from(entries).unwrap_or(isize::MAX)
  }

  fn page_up(&mut self) {
    let jump = self.page_jump();
    self.view.move_by(-jump);
  }

  fn refresh_view(&mut self) {
    let entries = self
      .session
      .stories_for(self.page)
      .iter()
      .map(|story| {
        StoryEntry::new(story, self.session.is_favorite(&story.story_id))
      })
      .collect();

    self.view.replace(entries);
  }

  fn reload(&mut self) {
    if self.reloading {
      return;
    }

    debug!("reloading stories");

    self.reloading = true;

    if !self.help.is_visible() {
      self.message = LOADING_STORIES_STATUS.into();
    }

    self.pending_effects.push(Effect::FetchStories);
  }

  fn reset_message(&mut self) {
    if self.help.is_visible() {
      return;
    }

    self.message = match self.mode {
      Mode::Form(_) => FORM_STATUS,
      Mode::Stories => LIST_STATUS,
    }
    .into();
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let fallback = match &self.transient_message {
      Some(transient) if transient.text() == self.message => {
        transient.fallback().to_string()
      }
      _ => self.message.clone(),
    };

    self.transient_message =
      Some(TransientMessage::new(message.clone(), fallback));

    self.message = message;
  }

  fn show_page(&mut self, page: Page) {
    if page != self.page {
      debug!(page = page.label(), "showing page");

      self.page = page;
      self.view = ListView::default();
    }

    self.refresh_view();
  }

  fn submit_form(&mut self) {
    let Mode::Form(form) = &mut self.mode else {
      return;
    };

    if form.is_submitting() {
      return;
    }

    let submission = match form.submission() {
      Ok(submission) => submission,
      Err(message) => {
        form.set_error(message);
        return;
      }
    };

    let effect = match submission {
      FormSubmission::Login { password, username } => {
        Effect::Login { password, username }
      }
      FormSubmission::Signup {
        name,
        password,
        username,
      } => Effect::Signup {
        name,
        password,
        username,
      },
      FormSubmission::Submit(story) => {
        let Some(user) = self.session.current_user.as_ref() else {
          form.set_error("Log in to submit a story".to_string());
          return;
        };

        Effect::SubmitStory {
          credentials: user.credentials(),
          story,
        }
      }
    };

    debug!(form = ?form.kind(), "form submitted");

    form.set_submitting();

    self.pending_effects.push(effect);
  }

  fn toggle_favorite(&mut self) {
    let Some(story) = self.current_story().cloned() else {
      return;
    };

    let Some(user) = self.session.current_user.as_ref() else {
      self.notify("Log in (i) to favorite stories".to_string());
      return;
    };

    let added = !user.is_favorite(&story.story_id);
    let credentials = user.credentials();

    if !self
      .pending_favorites
      .insert((credentials.username.clone(), story.story_id.clone()))
    {
      self.notify("Still updating that favorite...".to_string());
      return;
    }

    debug!(story_id = %story.story_id, added, "toggling favorite");

    self.notify(if added {
      "Adding to favorites...".to_string()
    } else {
      "Removing from favorites...".to_string()
    });

    self.pending_effects.push(if added {
      Effect::AddFavorite { credentials, story }
    } else {
      Effect::RemoveFavorite { credentials, story }
    });
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.fallback().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn view(&self) -> &ListView<StoryEntry> {
    &self.view
  }

  pub(crate) fn view_mut(&mut self) -> &mut ListView<StoryEntry> {
    &mut self.view
  }
}
