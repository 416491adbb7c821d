use crate::{CoreError, CoreResult, Event, IconAsset, MenuTree, TrayBackend};

use std::{
    io::{self, Write},
    panic::Location,
    sync::{Arc, Mutex},
};

use error_location::ErrorLocation;

/// In-memory writer whose contents outlive the emitter that owns it.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    #[allow(clippy::unwrap_used)]
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    #[allow(clippy::unwrap_used)]
    pub(crate) fn events(&self) -> Vec<Event> {
        self.lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl Write for SharedBuffer {
    #[allow(clippy::unwrap_used)]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that always fails, like a pipe whose reader has exited.
pub(crate) struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader gone"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader gone"))
    }
}

/// Records every call the session makes; menus are numbered handles.
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    pub(crate) rendered: Vec<MenuTree>,
    pub(crate) attached: Option<u32>,
    pub(crate) destroyed: Vec<u32>,
    pub(crate) shown: Vec<u32>,
    /// Output observed by `show_menu`, one snapshot per call.
    pub(crate) output: SharedBuffer,
    pub(crate) events_at_show: Vec<Vec<Event>>,
    pub(crate) icons: Vec<Vec<u8>>,
    pub(crate) default_icons: usize,
    pub(crate) tooltips: Vec<String>,
    pub(crate) withdrawn: usize,
    pub(crate) fail_render: bool,
    pub(crate) fail_icon: bool,
    pub(crate) next_handle: u32,
}

impl FakeBackend {
    #[track_caller]
    fn failure(reason: &str) -> CoreError {
        CoreError::Backend {
            reason: reason.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl TrayBackend for FakeBackend {
    type Menu = u32;

    fn render_menu(&mut self, tree: &MenuTree) -> CoreResult<u32> {
        if self.fail_render {
            return Err(Self::failure("render refused"));
        }
        self.next_handle += 1;
        self.rendered.push(tree.clone());
        Ok(self.next_handle)
    }

    fn attach_menu(&mut self, menu: &u32) -> CoreResult<()> {
        self.attached = Some(*menu);
        Ok(())
    }

    fn destroy_menu(&mut self, menu: u32) {
        if self.attached == Some(menu) {
            self.attached = None;
        }
        self.destroyed.push(menu);
    }

    fn show_menu(&mut self, menu: &u32) {
        self.shown.push(*menu);
        self.events_at_show.push(self.output.events());
    }

    fn apply_icon(&mut self, asset: &IconAsset) -> CoreResult<()> {
        if self.fail_icon {
            return Err(Self::failure("icon refused"));
        }
        self.icons.push(asset.bytes().to_vec());
        Ok(())
    }

    fn apply_default_icon(&mut self) -> CoreResult<()> {
        self.default_icons += 1;
        Ok(())
    }

    fn apply_tooltip(&mut self, text: &str) -> CoreResult<()> {
        self.tooltips.push(text.to_string());
        Ok(())
    }

    fn withdraw(&mut self) {
        self.withdrawn += 1;
    }
}
