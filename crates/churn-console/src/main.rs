mod cli;
mod config;
mod layers;

use crate::cli::Args;
use crate::config::{load_config, Config};
use crate::layers::service::{
    init_tracing, predict_once, spawn_health_probe, spawn_submission, HttpBackend,
    PredictionBackend, UiEvent,
};
use crate::layers::ui::{
    draw_ui, handle_key_event, restore_terminal, setup_terminal, AppState, KeyOutcome,
};
use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(50);

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_dir = (!args.headless).then_some(args.log_dir.as_path());
    let _file_guard = init_tracing(log_dir, args.log_to_stderr)?;

    let config = load_config(args.config.as_deref(), args.base_url.as_deref())
        .context("failed to load configuration")?;
    let backend = HttpBackend::from_config(&config.backend)?;
    tracing::info!(
        predict_url = %backend.predict_url(),
        headless = args.headless,
        "churn console starting"
    );

    if args.headless {
        let fields = [
            ("recency_days", args.recency.as_str()),
            ("frequency", args.frequency.as_str()),
            ("monetary", args.monetary.as_str()),
        ];
        let lines = predict_once(&fields, &backend, config.display.probability).await?;
        for line in lines {
            println!("{line}");
        }
        return Ok(());
    }

    run_tui(config, Arc::new(backend)).await
}

async fn run_tui(config: Config, backend: Arc<HttpBackend>) -> anyhow::Result<()> {
    let endpoint = backend.predict_url().to_string();
    let backend: Arc<dyn PredictionBackend> = backend;
    let (ui_tx, mut ui_rx) = mpsc::channel::<UiEvent>(16);
    let mut app = AppState::new(endpoint, config.display.probability);
    spawn_health_probe(Arc::clone(&backend), ui_tx.clone(), app.shutdown_token());

    let mut terminal = setup_terminal().context("failed to initialize terminal")?;
    let mut ticker = tokio::time::interval(TICK_RATE);
    let outcome = async {
        'ui: loop {
            terminal.draw(|frame| draw_ui(frame, &app))?;

            // Yield to in-flight requests until the next tick or settlement.
            tokio::select! {
                Some(event) = ui_rx.recv() => app.handle_event(event),
                _ = ticker.tick() => {}
            }

            while event::poll(Duration::ZERO)? {
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                match handle_key_event(key, &mut app) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Quit => break 'ui,
                    KeyOutcome::Dispatch(submission) => {
                        spawn_submission(
                            submission,
                            Arc::clone(&backend),
                            ui_tx.clone(),
                            app.shutdown_token(),
                        );
                    }
                }
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    restore_terminal(&mut terminal)?;
    drop(app);
    tracing::info!("churn console stopped");
    outcome
}
