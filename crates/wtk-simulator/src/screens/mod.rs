// src/screens/mod.rs
//! Demo widget contexts (screens) for the simulator.
//!
//! Each screen is a bundle of one basic frame plus its child widgets,
//! owned by the module that created it. Screens expose a pair of
//! lifecycle calls, `open` and `close`, and communicate with the event
//! loop through a shared [`Request`] slot filled in by their frame
//! command handlers (handlers never touch the tree themselves, so the
//! dispatch walk can't free windows out from under itself).

pub mod main_menu;
pub mod settings;

use std::cell::Cell;
use std::rc::Rc;

use wtk_core::{Ui, UiError};

pub use main_menu::MainScreen;
pub use settings::SettingsScreen;

/// The screens the demo can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Main,
    Settings,
}

/// What a frame handler asked the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Tear the current screen down and open another one.
    Navigate(ScreenId),
    /// Update the current screen's status line.
    Status(&'static str),
}

/// Shared single-slot mailbox between frame handlers and the event loop.
pub type Requests = Rc<Cell<Option<Request>>>;

/// The currently open screen.
pub enum Screen {
    Main(MainScreen),
    Settings(SettingsScreen),
}

impl Screen {
    pub fn open(id: ScreenId, ui: &mut Ui, requests: &Requests) -> Result<Self, UiError> {
        match id {
            ScreenId::Main => MainScreen::open(ui, requests).map(Screen::Main),
            ScreenId::Settings => SettingsScreen::open(ui, requests).map(Screen::Settings),
        }
    }

    pub fn close(self, ui: &mut Ui) {
        match self {
            Screen::Main(screen) => screen.close(ui),
            Screen::Settings(screen) => screen.close(ui),
        }
    }

    /// Apply a status-line request, if this screen has a status label.
    pub fn set_status(&self, ui: &mut Ui, status: &str) -> Result<(), UiError> {
        match self {
            Screen::Main(_) => Ok(()),
            Screen::Settings(screen) => screen.set_status(ui, status),
        }
    }
}
