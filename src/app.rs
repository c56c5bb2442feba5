use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[2].height));

    let header = Paragraph::new(Line::from(vec![
      Span::styled(
        "hack or snooze",
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(
        self.state.account_label(),
        Style::default().fg(Color::DarkGray),
      ),
    ]));

    frame.render_widget(header, layout[0]);

    let tab_titles: Vec<Line> = Page::ALL
      .iter()
      .map(|page| Line::from(page.label().to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.page().index())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[1]);

    let view = self.state.view();

    let list_items: Vec<ListItem> = if view.is_empty() {
      let text = if self.state.is_reloading() {
        LOADING_STORIES_STATUS
      } else {
        self.state.page().empty_text(self.state.is_logged_in())
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      view.items().iter().map(Self::story_list_item).collect()
    };

    let mut list_state = ListState::default()
      .with_selected(view.selected_index())
      .with_offset(view.offset());

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[2], &mut list_state);

    self.state.view_mut().set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[3]);

    if let Mode::Form(form) = self.state.mode() {
      form.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::AddFavorite { credentials, story } => {
        self.handle.spawn(async move {
          let result = client.add_favorite(&credentials, &story.story_id).await;

          let _ = sender.send(Event::FavoriteToggled {
            added: true,
            result,
            story,
            username: credentials.username,
          });
        });
      }
      Effect::FetchStories => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Stories {
            result: client.fetch_stories().await,
          });
        });
      }
      Effect::Login { password, username } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Authenticated {
            result: client.login(&username, &password).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, error = %error, "could not open browser");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
      Effect::RemoveFavorite { credentials, story } => {
        self.handle.spawn(async move {
          let result =
            client.remove_favorite(&credentials, &story.story_id).await;

          let _ = sender.send(Event::FavoriteToggled {
            added: false,
            result,
            story,
            username: credentials.username,
          });
        });
      }
      Effect::Signup {
        name,
        password,
        username,
      } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Authenticated {
            result: client.signup(&username, &password, &name).await,
          });
        });
      }
      Effect::SubmitStory { credentials, story } => {
        self.handle.spawn(async move {
          let result = client.add_story(&credentials, &story).await;

          let _ = sender.send(Event::StorySubmitted {
            result,
            username: credentials.username,
          });
        });
      }
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.mode_mut().handle_key(key)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            info!("quitting");
            break;
          }
        }
        Err(error) => {
          warn!(error = %error, "command failed");

          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }

  fn story_list_item(entry: &StoryEntry) -> ListItem<'static> {
    ListItem::new(vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(entry.star(), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(entry.title.clone(), Style::default().fg(Color::White)),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("  "),
        Span::styled(
          entry.detail.clone(),
          Style::default().fg(Color::DarkGray),
        ),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ])
  }
}
