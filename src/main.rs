use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

use futurama::app::{App, AppMessage};
use futurama::cli::{parse_args, print_once, run_cli_command, CliCommand};
use futurama::config::AppConfig;
use futurama::logging::init_tracing;
use futurama::terminal::{setup_panic_hook, TerminalManager};
use futurama::ui;

/// Animation tick
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command) {
        return result;
    }

    color_eyre::install()?;

    let config = AppConfig::from_env();
    init_tracing(&config);
    config.report_warnings();
    tracing::info!("Starting with API {}", config.base_url);

    let runtime = tokio::runtime::Runtime::new()?;

    if command == CliCommand::Print {
        let code = runtime.block_on(async {
            let mut app = App::from_config(&config);
            print_once(&mut app, &mut std::io::stdout()).await
        })?;
        std::process::exit(code);
    }

    setup_panic_hook();

    runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let mut app = App::from_config(&config);
        app.mount();

        let result = run_app(manager.terminal(), &mut app).await;

        app.unmount();
        manager.restore();
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(&key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(&mouse),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!("Terminal event error: {}", err);
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        app.quit();
                    }
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
