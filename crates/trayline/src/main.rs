//! Trayline: system tray helper driven over JSON lines on stdin/stdout.
#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

mod app;
mod config;
mod default_icon;
mod error;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    tray_command::{ProxySink, TrayCommand, forward_tray_events},
    tray_manager::TrayManager,
};

use crate::config::Config;

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;
use tracing_subscriber::EnvFilter;
use trayline_core::{Flow, InputPump, ShutdownReason};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "trayline=info,trayline_core=info";

/// Application entry point.
fn main() {
    // Stdout carries the protocol; logs go to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(std::env::args().skip(1));

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let proxy = event_loop.create_proxy();
    forward_tray_events(&proxy);

    // App lives on the main thread - TrayIcon is !Send on all platforms.
    let mut app: Option<App> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                match App::start(&config, target, proxy.clone()) {
                    Ok(started) => app = Some(started),
                    Err(e) => {
                        error!("Failed to start tray: {:?}", e);
                        std::process::exit(1);
                    }
                }

                // The pump starts only after `ready`, so no command can
                // arrive before initial setup is complete.
                let pump = InputPump::new(std::io::stdin(), ProxySink::new(proxy.clone()));
                if let Err(e) = pump.spawn() {
                    error!(error = ?AppError::from(e), "Failed to start input pump");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            Event::UserEvent(command) => {
                if let Some(app) = app.as_mut() {
                    if app.handle(command) == Flow::Exit {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
            }
            Event::LoopDestroyed => {
                if let Some(app) = app.as_mut() {
                    app.shutdown(ShutdownReason::NativeDestroy);
                }
            }
            _ => {}
        }
    });
}
