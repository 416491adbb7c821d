use tao::event_loop::EventLoopProxy;
use tray_icon::{TrayIconEvent, menu::MenuEvent};
use trayline_core::{PumpEvent, PumpSink};

/// Events delivered to the UI thread through the event loop.
///
/// The main thread owns the tray session (because `TrayIcon` is `!Send`), so
/// input from the pump thread and native tray callbacks all flow through
/// this enum.
#[derive(Debug)]
pub enum TrayCommand {
    /// A framed message or end of input from the stdin pump.
    Input(PumpEvent),
    /// A menu item was activated.
    Menu(MenuEvent),
    /// The tray icon was interacted with.
    Icon(TrayIconEvent),
    /// The indicator host is showing the tray menu.
    #[cfg(target_os = "linux")]
    MenuShown,
}

/// Hands pump output to the event loop.
pub struct ProxySink {
    proxy: EventLoopProxy<TrayCommand>,
}

impl ProxySink {
    /// Post through `proxy`.
    pub fn new(proxy: EventLoopProxy<TrayCommand>) -> Self {
        Self { proxy }
    }
}

impl PumpSink for ProxySink {
    fn post(&self, event: PumpEvent) -> bool {
        self.proxy.send_event(TrayCommand::Input(event)).is_ok()
    }
}

/// Route native tray and menu callbacks into the event loop.
pub fn forward_tray_events(proxy: &EventLoopProxy<TrayCommand>) {
    TrayIconEvent::set_event_handler(Some({
        let proxy = proxy.clone();
        move |event| {
            let _ = proxy.send_event(TrayCommand::Icon(event));
        }
    }));

    MenuEvent::set_event_handler(Some({
        let proxy = proxy.clone();
        move |event| {
            let _ = proxy.send_event(TrayCommand::Menu(event));
        }
    }));
}
