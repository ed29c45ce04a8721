// File: services/notifier_client/src/main.rs
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use notifier_common::logging;
use notifier_config::load_config;
use notifier_ui::{render, Screen, ViewController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

mod app_state;
mod commands;
mod service_factory;

use app_state::AppState;
use commands::{parse_line, Input, HELP};
use service_factory::NotifierServiceFactory;

fn show(screen: &Screen) {
    println!("{}", render(screen));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Arc::new(load_config()?);

    // Stdout belongs to the rendered screens, so logs go to a file unless none is configured.
    let level = logging::parse_level(&config.logging.level);
    let _guard = if config.logging.directory.trim().is_empty() {
        logging::init_with_level(level);
        None
    } else {
        Some(logging::init_file(
            Path::new(&config.logging.directory),
            &config.logging.file_prefix,
            level,
        ))
    };

    let factory = NotifierServiceFactory::new(&config)?;
    let state = AppState::new(config, &factory);
    info!(
        base_url = %state.config.api.base_url,
        language = %state.context.store.language(),
        "starting notifier client"
    );
    let push = state.context.push.clone();

    if !push.init().await {
        warn!("push messaging unavailable, continuing without notifications");
    }

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut controller = ViewController::new(state.context, events_tx);

    show(&controller.render().await);
    println!("(type `help` for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(Input::Quit)) => break,
                    Ok(Some(Input::Help)) => println!("{HELP}"),
                    Ok(Some(Input::Push(payload))) => push.deliver_foreground(payload),
                    Ok(Some(Input::Command(command))) => {
                        show(&controller.handle_command(command).await);
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Some(event) = events_rx.recv() => {
                show(&controller.handle_event(event).await);
            }
        }
    }

    info!("notifier client stopped");
    Ok(())
}
