// src/widgets/mod.rs
//! Prebuilt widget types layered on the window tree.
//!
//! Every widget is "expressible as a window": the typed handles returned by
//! the creation APIs convert to the underlying [`WindowId`](crate::win::WindowId)
//! via `as_window()` for tree operations (show, destroy, dispatch origin).
//! There is no inheritance; the window carries the widget state as a tagged
//! variant and the tree's renderer matches on it.

pub mod frame;
pub mod icon;
pub mod label;

pub use frame::{FrameHandle, FrameHandler};
pub use icon::{GroupId, IconButtonHandle, icon_button_size_hint};
pub use label::{LabelHandle, MAX_CAPTION, label_size_hint};

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::Rectangle;

    use crate::command::Dispatch;
    use crate::fill::{Bitmap, Fill};
    use crate::input::{TouchEvent, TouchPoint};
    use crate::win::Ui;

    // A condensed settings screen, following the construction sequence the
    // demo application uses: full-screen frame with a command handler, a
    // title label, then a grouped icon button wired to command id 1.
    #[test]
    fn settings_screen_press_reaches_frame_handler() {
        const CMD_TIME: u16 = 1;

        let mut ui = Ui::new(Size::new(320, 240));
        let commands = Rc::new(RefCell::new(Vec::new()));

        let root_area = ui.area(ui.root()).unwrap();
        let commands_inner = Rc::clone(&commands);
        let frame = ui
            .create_frame(
                ui.root(),
                root_area,
                Fill::Solid(Rgb565::WHITE),
                None,
                Some(Box::new(move |_frame, command| {
                    commands_inner.borrow_mut().push(command.id);
                    false
                })),
            )
            .unwrap();
        ui.show(frame.as_window()).unwrap();

        let caption = "Demo Settings";
        let hint = crate::widgets::label_size_hint(caption);
        let label = ui
            .create_label(
                frame.as_window(),
                Rectangle::new(Point::new(100, 0), hint),
                caption,
                Rgb565::BLACK,
                None,
                false,
            )
            .unwrap();
        ui.show(label.as_window()).unwrap();

        let group = ui.create_icon_group().unwrap();
        let bitmap = Bitmap::solid(Size::new(64, 64), Rgb565::CYAN);
        let time = ui
            .create_icon_button(
                frame.as_window(),
                Rectangle::new(Point::new(16, 81), crate::widgets::icon_button_size_hint(&bitmap)),
                bitmap,
                false,
                Some(group),
                CMD_TIME,
            )
            .unwrap();
        ui.show(time.as_window()).unwrap();

        // Press inside the "time" button.
        let outcome = ui
            .handle_touch(TouchEvent::Press(TouchPoint::new(40, 100)))
            .unwrap();
        assert_eq!(
            outcome,
            Dispatch::Consumed {
                window: frame.as_window(),
                teardown: false,
            }
        );
        assert_eq!(commands.borrow().as_slice(), &[CMD_TIME]);

        // Handler returned false: nothing was torn down, the button is now
        // the group's active member.
        assert!(ui.is_shown(frame.as_window()).unwrap());
        assert!(ui.is_icon_pressed(time).unwrap());
    }
}
