//! The dispatcher: sole owner and writer of tray state.
//!
//! A `TraySession` lives on the UI thread. Inbound messages reach it one at a
//! time in framing order; native callbacks (item activation, menu open) call
//! into it from the same thread. Nothing else touches the backend.

use crate::{
    Command, CoreResult, Emitter, Event, IconAsset, IdentifierRegistry, ItemKey, MenuNode,
    MenuTree, Message, StartupOptions, TrayBackend, truncate_tooltip,
};

use tracing::{debug, info, instrument, warn};

/// Lifecycle of a [`TraySession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, initial tray state not yet applied.
    Starting,
    /// Waiting for the next command.
    Idle,
    /// A command is being applied.
    Applying,
    /// Torn down. Every further input is ignored.
    Terminated,
}

/// What the event loop should do after a message was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Keep running.
    Continue,
    /// The session is terminated; stop the event loop.
    Exit,
}

/// Why the session is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The parent closed our standard input.
    EndOfStream,
    /// The parent sent `quit`.
    Quit,
    /// The native event loop or window is being destroyed.
    NativeDestroy,
}

/// Tray state plus the command dispatcher that mutates it.
pub struct TraySession<B: TrayBackend> {
    backend: B,
    emitter: Emitter,
    registry: IdentifierRegistry,
    live_tree: MenuTree,
    live_menu: Option<B::Menu>,
    icon: Option<IconAsset>,
    icon_sequence: u64,
    state: SessionState,
}

impl<B: TrayBackend> TraySession<B> {
    /// Wrap a backend. Nothing is applied until [`start`](Self::start).
    pub fn new(backend: B, emitter: Emitter) -> Self {
        let registry = IdentifierRegistry::new();
        let live_tree = MenuTree::placeholder(registry.generation());

        Self {
            backend,
            emitter,
            registry,
            live_tree,
            live_menu: None,
            icon: None,
            icon_sequence: 0,
            state: SessionState::Starting,
        }
    }

    /// Apply the startup icon, tooltip and placeholder menu, then emit `ready`.
    ///
    /// An unusable startup icon falls back to the built-in one. Calling this
    /// more than once has no effect.
    #[instrument(skip(self, options))]
    pub fn start(&mut self, options: StartupOptions) -> CoreResult<()> {
        if self.state != SessionState::Starting {
            debug!(state = ?self.state, "Session already started");
            return Ok(());
        }

        let custom_icon = options.icon.map(|bytes| {
            let sequence = self.next_icon_sequence();
            IconAsset::new(sequence, bytes).and_then(|asset| self.install_icon(asset))
        });
        match custom_icon {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                warn!(error = %e, "Startup icon unusable, using default icon");
                self.backend.apply_default_icon()?;
            }
            None => self.backend.apply_default_icon()?,
        }

        self.backend
            .apply_tooltip(truncate_tooltip(&options.tooltip))?;

        let menu = self.backend.render_menu(&self.live_tree)?;
        self.backend.attach_menu(&menu)?;
        self.live_menu = Some(menu);

        self.state = SessionState::Idle;
        self.emitter.emit(&Event::Ready);

        info!("Tray session ready");

        Ok(())
    }

    /// Apply one inbound message.
    ///
    /// Malformed or unknown messages and commands that fail are logged and
    /// otherwise ignored; prior state stays in place.
    #[instrument(skip(self, message), fields(method = %message.method))]
    pub fn apply(&mut self, message: Message) -> Flow {
        match self.state {
            SessionState::Terminated => return Flow::Exit,
            SessionState::Starting | SessionState::Applying => {
                warn!(state = ?self.state, "Message arrived outside the idle state, dropping");
                return Flow::Continue;
            }
            SessionState::Idle => {}
        }

        let command = match Command::from_message(message) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Ignoring message");
                return Flow::Continue;
            }
        };

        let method = command.method();
        self.state = SessionState::Applying;

        let result = match command {
            Command::SetMenu(items) => self.set_menu(&items),
            Command::SetIcon(base64) => self.set_icon(&base64),
            Command::SetTooltip(text) => self.set_tooltip(&text),
            Command::Quit => {
                self.shutdown(ShutdownReason::Quit);
                return Flow::Exit;
            }
        };

        self.state = SessionState::Idle;

        if let Err(e) = result {
            warn!(method, error = %e, "Command had no effect");
        }

        Flow::Continue
    }

    /// Report activation of the native item carrying `native_key`.
    ///
    /// Emits `clicked` only when the key belongs to the live menu and maps to
    /// a non-empty protocol id.
    pub fn on_activate(&self, native_key: &str) {
        if self.state == SessionState::Terminated {
            return;
        }

        let Some(key) = ItemKey::parse(native_key) else {
            debug!(native_key, "Activation of an item without a dispatch key");
            return;
        };

        match self.registry.resolve_key(key) {
            Some("") => debug!(%key, "Activated item has no id"),
            Some(id) => self.emitter.emit(&Event::Clicked { id: id.to_string() }),
            None => debug!(%key, "Activated item is not in the live menu"),
        }
    }

    /// The user opened the tray menu: notify the parent, then show the menu.
    ///
    /// `menuRequested` is always written before [`TrayBackend::show_menu`]
    /// runs.
    pub fn on_menu_requested(&mut self) {
        if self.state == SessionState::Terminated {
            return;
        }

        self.emitter.emit(&Event::MenuRequested);

        if let Some(menu) = &self.live_menu {
            self.backend.show_menu(menu);
        }
    }

    /// Withdraw the tray and release native resources.
    ///
    /// Returns `true` if this call performed the teardown, `false` if the
    /// session was already terminated.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self, reason: ShutdownReason) -> bool {
        if self.state == SessionState::Terminated {
            debug!("Session already terminated");
            return false;
        }
        self.state = SessionState::Terminated;

        self.backend.withdraw();
        if let Some(menu) = self.live_menu.take() {
            self.backend.destroy_menu(menu);
        }
        self.icon = None;

        info!(?reason, "Tray session terminated");

        true
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Registry of the live menu.
    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    /// The live menu tree.
    pub fn live_tree(&self) -> &MenuTree {
        &self.live_tree
    }

    /// The icon currently displayed, if it came from the parent or startup.
    pub fn icon(&self) -> Option<&IconAsset> {
        self.icon.as_ref()
    }

    /// The backend, for inspection.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend for state the session does not manage.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn set_menu(&mut self, nodes: &[MenuNode]) -> CoreResult<()> {
        let mut registry = self.registry.successor();
        let tree = MenuTree::build(nodes, &mut registry);

        let menu = self.backend.render_menu(&tree)?;
        if let Err(e) = self.backend.attach_menu(&menu) {
            self.backend.destroy_menu(menu);
            return Err(e);
        }

        let previous = self.live_menu.replace(menu);
        self.registry = registry;
        self.live_tree = tree;

        if let Some(previous) = previous {
            self.backend.destroy_menu(previous);
        }

        debug!(
            generation = self.registry.generation(),
            items = self.registry.len(),
            "Menu replaced"
        );

        Ok(())
    }

    fn set_icon(&mut self, base64: &str) -> CoreResult<()> {
        let sequence = self.next_icon_sequence();
        let asset = IconAsset::from_base64(sequence, base64)?;
        self.install_icon(asset)
    }

    fn next_icon_sequence(&mut self) -> u64 {
        self.icon_sequence += 1;
        self.icon_sequence
    }

    fn install_icon(&mut self, asset: IconAsset) -> CoreResult<()> {
        self.backend.apply_icon(&asset)?;
        let sequence = asset.sequence();

        // The previous asset is released only once the new one is showing.
        let previous = self.icon.replace(asset);
        drop(previous);

        debug!(sequence, "Icon replaced");

        Ok(())
    }

    fn set_tooltip(&mut self, text: &str) -> CoreResult<()> {
        self.backend.apply_tooltip(truncate_tooltip(text))
    }
}
