// src/widgets/label.rs
//! Label widget: a leaf window rendering a fixed text caption.
//!
//! The label owns a copy of its caption (callers cannot assume their buffer
//! is kept alive). Captions render in the engine's fixed 6x10 mono font;
//! [`label_size_hint`] computes the rendered size from the same metrics, so
//! callers can reserve layout space before creating the widget.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use crate::error::UiError;
use crate::fill::Fill;
use crate::win::{Ui, WidgetKind, WindowId};

/// Maximum caption length in bytes.
pub const MAX_CAPTION: usize = 32;

pub(crate) struct Label {
    caption: String<MAX_CAPTION>,
    text_color: Rgb565,
    background: Option<Fill>,
    align_right: bool,
}

impl Label {
    pub(crate) fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        area: Rectangle,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if let Some(background) = &self.background {
            background.draw(area, display)?;
        }

        let character_style = MonoTextStyle::new(&FONT_6X10, self.text_color);
        let (alignment, anchor) = if self.align_right {
            (
                Alignment::Right,
                Point::new(
                    area.top_left.x + area.size.width as i32,
                    area.top_left.y,
                ),
            )
        } else {
            (Alignment::Left, area.top_left)
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(&self.caption, anchor, character_style, text_style)
            .draw(display)?;
        Ok(())
    }
}

/// Typed handle to a label.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LabelHandle(pub(crate) WindowId);

impl LabelHandle {
    /// The underlying window, for tree operations.
    pub fn as_window(self) -> WindowId {
        self.0
    }
}

/// Rendered size of `caption`, from the same font metrics the engine draws
/// with. Call this before widget creation to reserve layout space; text
/// wider than the reserved area is clipped.
pub fn label_size_hint(caption: &str) -> Size {
    let glyph = FONT_6X10.character_size.width + FONT_6X10.character_spacing;
    Size::new(
        caption.chars().count() as u32 * glyph,
        FONT_6X10.character_size.height,
    )
}

impl Ui {
    /// Create a label under `parent`, hidden until shown.
    ///
    /// The caption is copied into the label; captions longer than
    /// [`MAX_CAPTION`] bytes report `OutOfMemory`.
    pub fn create_label(
        &mut self,
        parent: WindowId,
        area: Rectangle,
        caption: &str,
        text_color: Rgb565,
        background: Option<Fill>,
        align_right: bool,
    ) -> Result<LabelHandle, UiError> {
        let mut owned = String::new();
        owned
            .push_str(caption)
            .map_err(|_| UiError::OutOfMemory)?;

        let id = self.alloc_window(
            parent,
            area,
            WidgetKind::Label(Label {
                caption: owned,
                text_color,
                background,
                align_right,
            }),
        )?;
        Ok(LabelHandle(id))
    }

    /// Replace the label's caption and invalidate exactly its area.
    ///
    /// Atomic swap-or-fail: when the new caption does not fit, the prior
    /// caption is left intact and `OutOfMemory` is reported. A caption
    /// equal to the current one is a no-op (no repaint scheduled).
    pub fn set_label_caption(
        &mut self,
        label: LabelHandle,
        caption: &str,
    ) -> Result<(), UiError> {
        // Build the replacement first so failure can't leave a partial
        // caption behind.
        let mut owned: String<MAX_CAPTION> = String::new();
        owned
            .push_str(caption)
            .map_err(|_| UiError::OutOfMemory)?;

        let node = self.window_mut(label.0)?;
        let WidgetKind::Label(state) = &mut node.widget else {
            return Err(UiError::InvalidHandle);
        };
        if state.caption == owned {
            return Ok(());
        }
        state.caption = owned;
        self.invalidate_window(label.0)
    }

    /// Current caption text.
    pub fn label_caption(&self, label: LabelHandle) -> Result<&str, UiError> {
        let node = self.window(label.0)?;
        let WidgetKind::Label(state) = &node.widget else {
            return Err(UiError::InvalidHandle);
        };
        Ok(&state.caption)
    }
}
