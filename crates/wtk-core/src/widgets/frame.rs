// src/widgets/frame.rs
//! Basic frame: the composition root for an application screen.
//!
//! A frame is a window that paints a background fill (and optionally a
//! border) behind its children and, when given a command handler, consumes
//! every [`Command`](crate::command::Command) that propagates up to it.

use alloc::boxed::Box;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::command::Command;
use crate::error::UiError;
use crate::fill::Fill;
use crate::win::{Ui, WidgetKind, WindowId};

/// Command handler attached to a frame.
///
/// Receives the frame's own window handle and the command value. The
/// closure captures whatever widget-context state the screen needs. The
/// returned bool means "the screen this frame represents should now be
/// torn down"; the caller of dispatch performs the actual destroy.
pub type FrameHandler = Box<dyn FnMut(WindowId, Command) -> bool>;

pub(crate) struct Frame {
    pub(crate) background: Fill,
    pub(crate) border: Option<Rgb565>,
    pub(crate) handler: Option<FrameHandler>,
}

impl Frame {
    pub(crate) fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        area: Rectangle,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.background.draw(area, display)?;
        if let Some(color) = self.border {
            area.into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(display)?;
        }
        Ok(())
    }
}

/// Typed handle to a basic frame.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub(crate) WindowId);

impl FrameHandle {
    /// The underlying window, for tree operations.
    pub fn as_window(self) -> WindowId {
        self.0
    }
}

impl Ui {
    /// Create a basic frame under `parent`.
    ///
    /// The frame starts hidden. On `Err(OutOfMemory)` nothing is left in
    /// the tree; a caller building a screen abandons the whole screen and
    /// destroys whatever it already created, so a partial UI is never shown.
    pub fn create_frame(
        &mut self,
        parent: WindowId,
        area: Rectangle,
        background: Fill,
        border: Option<Rgb565>,
        handler: Option<FrameHandler>,
    ) -> Result<FrameHandle, UiError> {
        let id = self.alloc_window(
            parent,
            area,
            WidgetKind::Frame(Frame {
                background,
                border,
                handler,
            }),
        )?;
        Ok(FrameHandle(id))
    }
}
