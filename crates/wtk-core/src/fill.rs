//! Fill and bitmap descriptors passed to draw calls.
//!
//! A [`Fill`] is the opaque "paint this area with something" value the
//! widgets hand to the renderer: either a solid colour or a reference to
//! bitmap pixel data stored by the asset collaborator. The engine never
//! inspects pixel data, it only blits it clipped to the target area.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

/// Pixel source for a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapPixels {
    /// A flat colour stand-in (useful for prototypes and tests where no
    /// image assets exist yet).
    Solid(Rgb565),
    /// Raw big-endian RGB565 pixel data, row-major, `size.width` pixels per
    /// row. Lives in flash for the whole program run.
    Rgb565Raw(&'static [u8]),
}

/// An image reference with its native dimensions.
///
/// Icon buttons and logo frames size themselves from the bitmap's native
/// dimensions via [`crate::widgets::icon_button_size_hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    size: Size,
    pixels: BitmapPixels,
}

impl Bitmap {
    pub const fn new(size: Size, pixels: BitmapPixels) -> Self {
        Self { size, pixels }
    }

    /// Flat-colour bitmap of the given size.
    pub const fn solid(size: Size, color: Rgb565) -> Self {
        Self::new(size, BitmapPixels::Solid(color))
    }

    /// Native dimensions of the image.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Blit the bitmap with its top-left corner at `top_left`.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        top_left: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self.pixels {
            BitmapPixels::Solid(color) => Rectangle::new(top_left, self.size)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display),
            BitmapPixels::Rgb565Raw(data) => {
                let raw = ImageRaw::<Rgb565>::new(data, self.size.width);
                Image::new(&raw, top_left).draw(display)
            }
        }
    }
}

/// Background description for frames and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Solid colour fill covering the whole area.
    Solid(Rgb565),
    /// Bitmap blitted at the area's top-left corner.
    Bitmap(Bitmap),
}

impl Fill {
    /// Paint this fill over `area`.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        area: Rectangle,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            Fill::Solid(color) => area
                .into_styled(PrimitiveStyle::with_fill(*color))
                .draw(display),
            Fill::Bitmap(bitmap) => bitmap.draw(area.top_left, display),
        }
    }
}
