use crate::{CoreResult, IconAsset, MenuTree};

/// Native tray surface driven by a [`TraySession`](crate::TraySession).
///
/// All methods are called from the UI thread only. Implementations own every
/// native object; the session only holds the opaque [`Menu`](Self::Menu)
/// handles it was given.
pub trait TrayBackend {
    /// Opaque handle to a rendered native menu.
    type Menu;

    /// Build native menu objects for `tree` without attaching them.
    fn render_menu(&mut self, tree: &MenuTree) -> CoreResult<Self::Menu>;

    /// Make `menu` the menu shown by the tray icon.
    fn attach_menu(&mut self, menu: &Self::Menu) -> CoreResult<()>;

    /// Release a menu that is no longer attached.
    fn destroy_menu(&mut self, menu: Self::Menu);

    /// Pop up `menu` at the pointer. Called after `menuRequested` was
    /// emitted. Platforms whose tray host opens the menu itself keep the
    /// default no-op.
    fn show_menu(&mut self, _menu: &Self::Menu) {}

    /// Display the image in `asset` as the tray icon.
    fn apply_icon(&mut self, asset: &IconAsset) -> CoreResult<()>;

    /// Display the built-in icon.
    fn apply_default_icon(&mut self) -> CoreResult<()>;

    /// Set the tooltip. An empty string clears it.
    fn apply_tooltip(&mut self, text: &str) -> CoreResult<()>;

    /// Remove the icon from the notification area.
    fn withdraw(&mut self);
}
