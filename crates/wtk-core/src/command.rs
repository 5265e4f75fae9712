// src/command.rs
//! Command events and their propagation up the window tree.
//!
//! A leaf widget's input handler raises a [`Command`] and hands it to
//! [`Ui::dispatch`], which walks from the originating window through
//! successive parents until a basic frame with a command handler consumes
//! it. Commands are transient values: they exist for one dispatch call and
//! are never stored by the engine.

use log::debug;

use crate::error::UiError;
use crate::win::{Ui, WidgetKind, WindowId};

/// A command raised by a widget: the identifier the widget was created
/// with, plus an optional payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub id: u16,
    pub value: Option<i32>,
}

impl Command {
    pub const fn new(id: u16) -> Self {
        Self { id, value: None }
    }

    pub const fn with_value(id: u16, value: i32) -> Self {
        Self {
            id,
            value: Some(value),
        }
    }
}

/// Outcome of one dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A frame's handler consumed the command. `teardown` is the handler's
    /// verdict that the screen this frame represents should now be torn
    /// down; acting on it (calling [`Ui::destroy`]) is the caller's job,
    /// never the dispatcher's, so delivery can't free windows mid-walk.
    Consumed { window: WindowId, teardown: bool },

    /// No ancestor consumed the command. Not an error: this is the
    /// documented outcome for commands with no active listener, e.g. one
    /// dispatched after the owning frame began teardown.
    Dropped,
}

impl Ui {
    /// Propagate `command` from `origin` towards the root.
    ///
    /// Visits `origin` and then each ancestor in strict child-to-root
    /// order, never siblings or other subtrees, and stops at the first
    /// frame that carries a command handler.
    pub fn dispatch(&mut self, origin: WindowId, command: Command) -> Result<Dispatch, UiError> {
        self.window(origin)?;

        let mut cursor = Some(origin);
        while let Some(id) = cursor {
            let node = self.window_mut(id)?;
            let parent = node.parent;
            if let WidgetKind::Frame(frame) = &mut node.widget
                && let Some(handler) = frame.handler.as_mut()
            {
                let teardown = handler(id, command);
                debug!(
                    "command {} consumed by {:?} (teardown: {})",
                    command.id, id, teardown
                );
                return Ok(Dispatch::Consumed {
                    window: id,
                    teardown,
                });
            }
            cursor = parent;
        }

        debug!("command {} dropped, no consuming ancestor", command.id);
        Ok(Dispatch::Dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::Fill;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::Rectangle;

    const DISPLAY: Size = Size::new(320, 240);

    fn full_area() -> Rectangle {
        Rectangle::new(Point::zero(), DISPLAY)
    }

    /// Handler that records every command it sees under `tag`.
    fn recording_handler(
        log: &Rc<RefCell<Vec<(u8, u16)>>>,
        tag: u8,
        teardown: bool,
    ) -> crate::widgets::frame::FrameHandler {
        let log = Rc::clone(log);
        Box::new(move |_frame, command: Command| {
            log.borrow_mut().push((tag, command.id));
            teardown
        })
    }

    #[test]
    fn dispatch_stops_at_first_consuming_ancestor() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ui = Ui::new(DISPLAY);

        let outer = ui
            .create_frame(
                ui.root(),
                full_area(),
                Fill::Solid(Rgb565::BLACK),
                None,
                Some(recording_handler(&log, 0, false)),
            )
            .unwrap();
        let inner = ui
            .create_frame(
                outer.as_window(),
                Rectangle::new(Point::new(10, 10), Size::new(100, 100)),
                Fill::Solid(Rgb565::WHITE),
                None,
                Some(recording_handler(&log, 1, false)),
            )
            .unwrap();
        let leaf = ui
            .create_window(
                inner.as_window(),
                Rectangle::new(Point::zero(), Size::new(10, 10)),
            )
            .unwrap();

        let outcome = ui.dispatch(leaf, Command::new(7)).unwrap();
        assert_eq!(
            outcome,
            Dispatch::Consumed {
                window: inner.as_window(),
                teardown: false,
            }
        );
        // Only the inner frame saw it; the walk stopped there.
        assert_eq!(log.borrow().as_slice(), &[(1, 7)]);
    }

    #[test]
    fn dispatch_skips_frames_without_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ui = Ui::new(DISPLAY);

        let outer = ui
            .create_frame(
                ui.root(),
                full_area(),
                Fill::Solid(Rgb565::BLACK),
                None,
                Some(recording_handler(&log, 0, true)),
            )
            .unwrap();
        let passthrough = ui
            .create_frame(
                outer.as_window(),
                Rectangle::new(Point::zero(), Size::new(50, 50)),
                Fill::Solid(Rgb565::WHITE),
                None,
                None,
            )
            .unwrap();

        let outcome = ui
            .dispatch(passthrough.as_window(), Command::with_value(3, -5))
            .unwrap();
        assert_eq!(
            outcome,
            Dispatch::Consumed {
                window: outer.as_window(),
                teardown: true,
            }
        );
        assert_eq!(log.borrow().as_slice(), &[(0, 3)]);
    }

    #[test]
    fn unconsumed_command_is_dropped_without_state_change() {
        let mut ui = Ui::new(DISPLAY);
        let w = ui
            .create_window(ui.root(), Rectangle::new(Point::zero(), Size::new(10, 10)))
            .unwrap();
        ui.show(w).unwrap();
        let live = ui.live_windows();

        let outcome = ui.dispatch(w, Command::new(42)).unwrap();
        assert_eq!(outcome, Dispatch::Dropped);
        assert_eq!(ui.live_windows(), live);
        assert!(ui.is_shown(w).unwrap());
    }

    #[test]
    fn dispatch_from_stale_handle_is_rejected() {
        let mut ui = Ui::new(DISPLAY);
        let w = ui
            .create_window(ui.root(), Rectangle::new(Point::zero(), Size::new(10, 10)))
            .unwrap();
        ui.destroy(w).unwrap();
        assert_eq!(
            ui.dispatch(w, Command::new(1)),
            Err(UiError::InvalidHandle)
        );
    }

    #[test]
    fn handler_receives_its_own_frame_handle() {
        let seen = Rc::new(RefCell::new(None));
        let mut ui = Ui::new(DISPLAY);

        let seen_inner = Rc::clone(&seen);
        let frame = ui
            .create_frame(
                ui.root(),
                full_area(),
                Fill::Solid(Rgb565::BLACK),
                None,
                Some(Box::new(move |window, _command| {
                    *seen_inner.borrow_mut() = Some(window);
                    false
                })),
            )
            .unwrap();

        ui.dispatch(frame.as_window(), Command::new(1)).unwrap();
        assert_eq!(*seen.borrow(), Some(frame.as_window()));
    }
}
