// src/screens/settings.rs
//! Settings screen: a grid of mutually exclusive settings icons.
//!
//! Follows the construction pattern every widget context uses: create and
//! show the main frame, then populate it bottom-up; if anything fails the
//! whole screen is abandoned and the frame destroyed, so a partial UI is
//! never left visible.

use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use wtk_core::widgets::{
    FrameHandle, GroupId, IconButtonHandle, LabelHandle, icon_button_size_hint, label_size_hint,
};
use wtk_core::{Bitmap, Command, Fill, Ui, UiError};

use super::{Request, Requests, ScreenId};

/// Command event ids for the settings widgets.
const CMD_TIME: u16 = 1;
const CMD_DATE: u16 = 2;
const CMD_BACKLIGHT: u16 = 3;
const CMD_CALIBRATE: u16 = 4;
const CMD_RETURN: u16 = 5;

const BOARD_NAME: &str = "wtk-rs demo board";
const FUNC_NAME: &str = "Demo Settings";

// Stand-in bitmaps; a real build points these at flash-resident assets.
const LOGO: Bitmap = Bitmap::solid(Size::new(87, 40), Rgb565::new(4, 20, 25));
const ICON_TIME: Bitmap = Bitmap::solid(Size::new(64, 64), Rgb565::new(8, 40, 12));
const ICON_DATE: Bitmap = Bitmap::solid(Size::new(56, 56), Rgb565::new(25, 30, 6));
const ICON_BACKLIGHT: Bitmap = Bitmap::solid(Size::new(64, 64), Rgb565::new(28, 40, 4));
const ICON_CALIBRATE: Bitmap = Bitmap::solid(Size::new(48, 48), Rgb565::new(12, 24, 20));
const ICON_RETURN: Bitmap = Bitmap::solid(Size::new(48, 48), Rgb565::new(20, 10, 10));

/// Widget context for the settings screen.
pub struct SettingsScreen {
    frame: FrameHandle,
    status: LabelHandle,
    group: GroupId,
    #[allow(dead_code)]
    buttons: [IconButtonHandle; 5],
}

impl SettingsScreen {
    /// Build and show the settings screen under the display root.
    pub fn open(ui: &mut Ui, requests: &Requests) -> Result<Self, UiError> {
        let area = ui.area(ui.root())?;

        let requests = Rc::clone(requests);
        let frame = ui.create_frame(
            ui.root(),
            area,
            Fill::Solid(Rgb565::WHITE),
            None,
            Some(Box::new(move |_frame, command: Command| {
                let (request, teardown) = match command.id {
                    CMD_TIME => (Request::Status("Time settings"), false),
                    CMD_DATE => (Request::Status("Date settings"), false),
                    CMD_BACKLIGHT => (Request::Status("Backlight settings"), false),
                    CMD_CALIBRATE => (Request::Status("Touch calibration"), false),
                    CMD_RETURN => (Request::Navigate(ScreenId::Main), true),
                    _ => return false,
                };
                requests.set(Some(request));
                teardown
            })),
        )?;
        ui.show(frame.as_window())?;

        match Self::populate(ui, frame) {
            Ok(screen) => {
                debug!("settings screen open");
                Ok(screen)
            }
            Err(e) => {
                // Abandon the whole screen; child widgets cascade with the
                // frame.
                ui.destroy(frame.as_window()).ok();
                Err(e)
            }
        }
    }

    fn populate(ui: &mut Ui, frame: FrameHandle) -> Result<Self, UiError> {
        let parent = frame.as_window();

        let logo = ui.create_frame(
            parent,
            Rectangle::new(Point::zero(), LOGO.size()),
            Fill::Bitmap(LOGO),
            None,
            None,
        )?;
        ui.show(logo.as_window())?;

        let board = ui.create_label(
            parent,
            Rectangle::new(Point::new(100, 0), label_size_hint(BOARD_NAME)),
            BOARD_NAME,
            Rgb565::BLACK,
            None,
            false,
        )?;
        ui.show(board.as_window())?;

        let func = ui.create_label(
            parent,
            Rectangle::new(Point::new(100, 20), label_size_hint(FUNC_NAME)),
            FUNC_NAME,
            Rgb565::BLACK,
            None,
            false,
        )?;
        ui.show(func.as_window())?;

        let status = ui.create_label(
            parent,
            Rectangle::new(Point::new(100, 300), Size::new(134, 10)),
            "",
            Rgb565::new(12, 24, 12),
            None,
            false,
        )?;
        ui.show(status.as_window())?;

        let group = ui.create_icon_group()?;
        match Self::populate_icons(ui, parent, group) {
            Ok(buttons) => Ok(Self {
                frame,
                status,
                group,
                buttons,
            }),
            Err(e) => {
                // The group is not a window and does not cascade.
                ui.destroy_icon_group(group).ok();
                Err(e)
            }
        }
    }

    fn populate_icons(
        ui: &mut Ui,
        parent: wtk_core::WindowId,
        group: GroupId,
    ) -> Result<[IconButtonHandle; 5], UiError> {
        // Positions from the reference layout for a 240x320 panel.
        let placements: [(Point, Bitmap, u16); 5] = [
            (Point::new(16, 81), ICON_TIME, CMD_TIME),
            (Point::new(98, 90), ICON_DATE, CMD_DATE),
            (Point::new(165, 86), ICON_BACKLIGHT, CMD_BACKLIGHT),
            (Point::new(100, 180), ICON_CALIBRATE, CMD_CALIBRATE),
            (Point::new(12, 232), ICON_RETURN, CMD_RETURN),
        ];

        let mut buttons = Vec::with_capacity(placements.len());
        for (pos, bitmap, command) in placements {
            let area = Rectangle::new(pos, icon_button_size_hint(&bitmap));
            let button = ui.create_icon_button(parent, area, bitmap, false, Some(group), command)?;
            ui.show(button.as_window())?;
            buttons.push(button);
        }
        Ok(buttons.try_into().unwrap_or_else(|_| unreachable!()))
    }

    /// Update the status line at the bottom of the screen.
    pub fn set_status(&self, ui: &mut Ui, status: &str) -> Result<(), UiError> {
        ui.set_label_caption(self.status, status)
    }

    /// Tear the screen down and release its group.
    pub fn close(self, ui: &mut Ui) {
        ui.destroy(self.frame.as_window()).ok();
        ui.destroy_icon_group(self.group).ok();
        debug!("settings screen closed");
    }
}
