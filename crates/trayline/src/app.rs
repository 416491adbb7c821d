use crate::{AppResult, TrayCommand, TrayManager, config::Config};

use tao::event_loop::{EventLoopProxy, EventLoopWindowTarget};
use tracing::{debug, info, instrument};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};
use trayline_core::{Emitter, Flow, PumpEvent, ShutdownReason, TraySession};

/// Main application state.
///
/// Lives on the UI thread inside the event loop closure. Every
/// [`TrayCommand`] is routed to the tray session from here.
pub struct App {
    session: TraySession<TrayManager>,
}

impl App {
    /// Create the tray, apply startup options and emit `ready`.
    #[instrument(skip_all)]
    pub(crate) fn start(
        config: &Config,
        event_loop: &EventLoopWindowTarget<TrayCommand>,
        proxy: EventLoopProxy<TrayCommand>,
    ) -> AppResult<Self> {
        let tray_manager = TrayManager::new(event_loop, proxy)?;
        let mut session = TraySession::new(tray_manager, Emitter::stdout());

        session.start(config.startup_options())?;

        info!(tooltip = %config.tray.tooltip, "Trayline started");

        Ok(Self { session })
    }

    /// Apply one event-loop command.
    pub(crate) fn handle(&mut self, command: TrayCommand) -> Flow {
        match command {
            TrayCommand::Input(PumpEvent::Message(message)) => self.session.apply(message),
            TrayCommand::Input(PumpEvent::EndOfStream) => {
                self.shutdown(ShutdownReason::EndOfStream);
                Flow::Exit
            }
            TrayCommand::Menu(event) => {
                self.session.on_activate(event.id.0.as_str());
                Flow::Continue
            }
            TrayCommand::Icon(event) => {
                if opens_menu(&event) {
                    self.session.on_menu_requested();
                }
                Flow::Continue
            }
            #[cfg(target_os = "linux")]
            TrayCommand::MenuShown => {
                self.session.on_menu_requested();
                Flow::Continue
            }
        }
    }

    /// Tear the tray down. Later calls are no-ops.
    pub(crate) fn shutdown(&mut self, reason: ShutdownReason) {
        if !self.session.shutdown(reason) {
            debug!(?reason, "Shutdown already performed");
        }
    }
}

/// Left or right button release on the icon opens the tray menu.
pub(crate) fn opens_menu(event: &TrayIconEvent) -> bool {
    matches!(
        event,
        TrayIconEvent::Click {
            button: MouseButton::Left | MouseButton::Right,
            button_state: MouseButtonState::Up,
            ..
        }
    )
}
