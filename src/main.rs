use {
  anyhow::{Context, anyhow, bail},
  api_error::ApiError,
  app::App,
  auth_response::AuthResponse,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  credential_store::CredentialStore,
  credentials::Credentials,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  form::{Form, FormKind, FormSubmission},
  futures::future,
  help_view::HelpView,
  list_view::ListView,
  mode::Mode,
  new_story::NewStory,
  page::Page,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  reqwest::{Method, Request, Response, StatusCode},
  serde::{Deserialize, Serialize},
  serde_json::json,
  session::Session,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::HashSet,
    env, fs,
    io::{self, IsTerminal, Stdout, Write},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  stories_response::StoriesResponse,
  story::Story,
  story_entry::StoryEntry,
  story_list::StoryList,
  story_response::StoryResponse,
  time::OffsetDateTime,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, error, info, warn},
  transient_message::TransientMessage,
  url::Url,
  user::User,
  user_payload::UserPayload,
  user_response::UserResponse,
  utils::{centered_area, format_date, mask, truncate},
};

mod api_error;
mod app;
mod auth_response;
mod client;
mod command;
mod command_dispatch;
mod config;
mod credential_store;
mod credentials;
mod effect;
mod event;
mod form;
mod help_view;
mod list_view;
mod logging;
mod mode;
mod new_story;
mod page;
mod session;
mod state;
mod stories_response;
mod story;
mod story_entry;
mod story_list;
mod story_response;
mod transient_message;
mod user;
mod user_payload;
mod user_response;
mod utils;

const LIST_STATUS: &str = "↑/k ↓/j move • ←/→ page • enter open • f favorite • s submit • i log in • n sign up • x log out • ? help";

const FORM_STATUS: &str =
  "tab next field • shift+tab previous • enter submit • esc cancel";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STORIES_STATUS: &str = "Loading stories...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous page
  → / l   next page
  1 2 3   all stories, favorites, my stories
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Stories:
  enter   open the selected story in your browser
  o       open the selected story in your browser
  f       favorite or unfavorite the selected story
  space   favorite or unfavorite the selected story
  s       submit a new story
  r       reload the story list

Account:
  i       log in
  n       create an account
  x       log out

Forms:
  tab     next field
  s-tab   previous field
  enter   next field, or submit on the last one
  esc     close the form

  q       quit snooze
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::load().context("could not load configuration")?;

  logging::init(&config.log_file).context("could not initialize logging")?;

  info!(base_url = %config.base_url, "starting snooze");

  let client = Client::new(config.base_url.clone());

  let credential_store = CredentialStore::new(config.credentials_file.clone());

  let stored = credential_store
    .load()
    .context("could not load stored credentials")?;

  let restore = async {
    match &stored {
      Some(credentials) => {
        client.login_via_stored_credentials(credentials).await
      }
      None => None,
    }
  };

  let (stories, user) = future::join(client.fetch_stories(), restore).await;

  let story_list = stories.context("could not load stories")?;

  let session = Session::new(story_list, user);

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, State::new(session, credential_store));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
