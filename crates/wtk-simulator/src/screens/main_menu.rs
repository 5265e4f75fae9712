// src/screens/main_menu.rs
//! Main menu screen: title plus a single settings button.

use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use wtk_core::widgets::{FrameHandle, icon_button_size_hint, label_size_hint};
use wtk_core::{Bitmap, Fill, Ui, UiError};

use super::{Request, Requests, ScreenId};

const CMD_SETTINGS: u16 = 1;

const TITLE: &str = "wtk-rs toolkit demo";
const ICON_SETTINGS: Bitmap = Bitmap::solid(Size::new(64, 64), Rgb565::new(6, 30, 18));

/// Widget context for the main menu.
pub struct MainScreen {
    frame: FrameHandle,
}

impl MainScreen {
    pub fn open(ui: &mut Ui, requests: &Requests) -> Result<Self, UiError> {
        let area = ui.area(ui.root())?;

        let requests = Rc::clone(requests);
        let frame = ui.create_frame(
            ui.root(),
            area,
            Fill::Solid(Rgb565::new(3, 6, 8)),
            None,
            Some(Box::new(move |_frame, command| {
                if command.id == CMD_SETTINGS {
                    requests.set(Some(Request::Navigate(ScreenId::Settings)));
                    return true;
                }
                false
            })),
        )?;
        ui.show(frame.as_window())?;

        match Self::populate(ui, frame) {
            Ok(screen) => {
                debug!("main screen open");
                Ok(screen)
            }
            Err(e) => {
                ui.destroy(frame.as_window()).ok();
                Err(e)
            }
        }
    }

    fn populate(ui: &mut Ui, frame: FrameHandle) -> Result<Self, UiError> {
        let parent = frame.as_window();

        let title = ui.create_label(
            parent,
            Rectangle::new(Point::new(62, 24), label_size_hint(TITLE)),
            TITLE,
            Rgb565::WHITE,
            None,
            false,
        )?;
        ui.show(title.as_window())?;

        // Momentary button: no group, no persistent pressed state.
        let settings = ui.create_icon_button(
            parent,
            Rectangle::new(Point::new(88, 120), icon_button_size_hint(&ICON_SETTINGS)),
            ICON_SETTINGS,
            false,
            None,
            CMD_SETTINGS,
        )?;
        ui.show(settings.as_window())?;

        Ok(Self { frame })
    }

    pub fn close(self, ui: &mut Ui) {
        ui.destroy(self.frame.as_window()).ok();
        debug!("main screen closed");
    }
}
