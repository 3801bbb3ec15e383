use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use picto_lingua::config::Config;
use picto_lingua::controller::AppController;
use picto_lingua::logging;
use picto_lingua::model::{ApiClient, AppModel, STATUS_MESSAGE_TTL};
use picto_lingua::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Picto Lingua Client Starting ===");

    let config = Config::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        language = %config.language,
        timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let api = ApiClient::new(&config)?;
    let model = Arc::new(AppModel::new());
    let controller = AppController::new(model.clone(), Arc::new(api));

    if let Some(session_id) = &config.resume_session_id {
        controller.resume_session(session_id).await;
    }
    controller.load_themes().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Picto Lingua Client shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> Result<()> {
    loop {
        model.expire_status_message(STATUS_MESSAGE_TTL).await;

        let selection = model.get_selection_state().await;
        let flashcards = model.get_flashcards().await;
        let ui_state = model.get_ui_state().await;

        terminal.draw(|f| {
            AppView::render(f, &selection, flashcards.as_ref(), &ui_state);
        })?;

        // Short poll keeps fetch results appearing promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
