//! Native tray surface backed by `tray-icon`.
//!
//! Implements [`TrayBackend`] so the protocol session can drive the icon,
//! tooltip and menu without knowing about platform types.
//!
//! Menu opening differs per platform. On Windows the menu is never handed to
//! the tray icon; [`TrayBackend::show_menu`] pops it up over a hidden window
//! once `menuRequested` is out. On Linux the indicator host owns the popup,
//! so the GTK menu's `show` signal is forwarded as
//! [`TrayCommand::MenuShown`](crate::TrayCommand). Elsewhere the tray icon
//! opens its attached menu itself.

use crate::{AppError, AppResult, TrayCommand, default_icon};

use std::{fmt::Display, panic::Location};

use error_location::ErrorLocation;
use tao::event_loop::{EventLoopProxy, EventLoopWindowTarget};
#[cfg(target_os = "windows")]
use tao::window::{Window, WindowBuilder};
use tracing::{debug, info, instrument, warn};
use tray_icon::menu::{
    CheckMenuItem, IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu,
};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use trayline_core::{CoreError, CoreResult, IconAsset, MenuEntry, MenuTree, TrayBackend};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    /// Invisible owner window for popup menus.
    #[cfg(target_os = "windows")]
    menu_host: Window,
    #[cfg(target_os = "linux")]
    proxy: EventLoopProxy<TrayCommand>,
}

impl TrayManager {
    /// Create the tray icon with the default icon and no menu.
    ///
    /// Must run on the main thread after the event loop has started.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(
        event_loop: &EventLoopWindowTarget<TrayCommand>,
        proxy: EventLoopProxy<TrayCommand>,
    ) -> AppResult<Self> {
        let icon = Self::default_icon()?;

        #[cfg(target_os = "windows")]
        let menu_host = WindowBuilder::new()
            .with_title("trayline")
            .with_visible(false)
            .build(event_loop)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create menu host window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        #[cfg(not(target_os = "windows"))]
        let _ = event_loop;
        #[cfg(not(target_os = "linux"))]
        let _ = proxy;

        let tray_icon = TrayIconBuilder::new()
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            #[cfg(target_os = "windows")]
            menu_host,
            #[cfg(target_os = "linux")]
            proxy,
        })
    }

    /// Decode PNG or ICO bytes into a tray icon.
    #[track_caller]
    pub fn load_icon(bytes: &[u8]) -> AppResult<Icon> {
        let img = image::load_from_memory(bytes).map_err(|e| AppError::IconError {
            reason: format!("Failed to decode icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::IconError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn default_icon() -> AppResult<Icon> {
        let size = default_icon::DEFAULT_ICON_SIZE;
        Icon::from_rgba(default_icon::default_icon_rgba(), size, size).map_err(|e| {
            AppError::IconError {
                reason: format!("Failed to create default icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    fn build_items(entries: &[MenuEntry]) -> CoreResult<Vec<Box<dyn IsMenuItem>>> {
        let mut items: Vec<Box<dyn IsMenuItem>> = Vec::with_capacity(entries.len());

        for entry in entries {
            match entry {
                MenuEntry::Separator => items.push(Box::new(PredefinedMenuItem::separator())),
                MenuEntry::Item {
                    title,
                    enabled,
                    checked,
                    key,
                } => {
                    let id = key.map(|key| MenuId::new(key.to_string()));
                    match (id, *checked) {
                        (Some(id), true) => items.push(Box::new(CheckMenuItem::with_id(
                            id, title, *enabled, true, None,
                        ))),
                        (Some(id), false) => {
                            items.push(Box::new(MenuItem::with_id(id, title, *enabled, None)))
                        }
                        (None, true) => {
                            items.push(Box::new(CheckMenuItem::new(title, *enabled, true, None)))
                        }
                        (None, false) => items.push(Box::new(MenuItem::new(title, *enabled, None))),
                    }
                }
                MenuEntry::Submenu {
                    title,
                    enabled,
                    entries,
                } => {
                    let submenu = Submenu::new(title, *enabled);
                    for child in Self::build_items(entries)? {
                        submenu
                            .append(child.as_ref())
                            .map_err(|e| backend_error("Failed to append submenu item", e))?;
                    }
                    items.push(Box::new(submenu));
                }
            }
        }

        Ok(items)
    }
}

impl TrayBackend for TrayManager {
    type Menu = Menu;

    #[instrument(skip(self, tree), fields(generation = tree.generation()))]
    fn render_menu(&mut self, tree: &MenuTree) -> CoreResult<Menu> {
        let menu = Menu::new();
        for item in Self::build_items(tree.entries())? {
            menu.append(item.as_ref())
                .map_err(|e| backend_error("Failed to append menu item", e))?;
        }
        Ok(menu)
    }

    fn attach_menu(&mut self, menu: &Menu) -> CoreResult<()> {
        // Windows keeps the menu off the icon; show_menu pops it up.
        #[cfg(target_os = "windows")]
        let _ = menu;

        #[cfg(not(target_os = "windows"))]
        self.tray_icon.set_menu(Some(Box::new(menu.clone())));

        #[cfg(target_os = "linux")]
        {
            use gtk::prelude::WidgetExt;
            use tray_icon::menu::ContextMenu;

            let proxy = self.proxy.clone();
            menu.gtk_context_menu().connect_show(move |_| {
                let _ = proxy.send_event(TrayCommand::MenuShown);
            });
        }

        Ok(())
    }

    #[cfg(target_os = "windows")]
    fn show_menu(&mut self, menu: &Menu) {
        use tao::platform::windows::WindowExtWindows;
        use tray_icon::menu::{ContextMenu, dpi::Position};

        // SAFETY: `menu_host` is a live window owned by this manager.
        let activated = unsafe {
            menu.show_context_menu_for_hwnd(self.menu_host.hwnd() as _, None::<Position>)
        };
        debug!(activated, "Tray menu closed");
    }

    fn destroy_menu(&mut self, menu: Menu) {
        debug!(menu_id = ?menu.id(), "Releasing menu");
        drop(menu);
    }

    fn apply_icon(&mut self, asset: &IconAsset) -> CoreResult<()> {
        let icon = Self::load_icon(asset.bytes())
            .map_err(|e| backend_error(&format!("Unusable icon {}", asset.name()), e))?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| backend_error("Failed to update icon", e))
    }

    fn apply_default_icon(&mut self) -> CoreResult<()> {
        let icon =
            Self::default_icon().map_err(|e| backend_error("Unusable default icon", e))?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| backend_error("Failed to update icon", e))
    }

    /// App indicators have no tooltip, so this is a no-op on Linux. The
    /// indicator title is left alone because the host renders it as a label.
    fn apply_tooltip(&mut self, text: &str) -> CoreResult<()> {
        self.tray_icon
            .set_tooltip(tooltip_text(text))
            .map_err(|e| backend_error("Failed to update tooltip", e))
    }

    fn withdraw(&mut self) {
        if let Err(e) = self.tray_icon.set_visible(false) {
            warn!(error = %e, "Failed to hide tray icon");
        }
        self.tray_icon.set_menu(None);
    }
}

/// Native tooltip for `text`. Empty text clears the tooltip.
pub(crate) fn tooltip_text(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

#[track_caller]
fn backend_error(context: &str, e: impl Display) -> CoreError {
    CoreError::Backend {
        reason: format!("{}: {}", context, e),
        location: ErrorLocation::from(Location::caller()),
    }
}
