//! Full-surface pixel snapshots and the freehand ink layer.

use super::color::{Color, TRANSPARENT};
use super::render;
use thiserror::Error;

/// Errors raised while creating or copying Cairo image surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo surface error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Cannot read surface pixels: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Snapshot is {got_w}x{got_h}, surface is {want_w}x{want_h}")]
    SizeMismatch {
        got_w: i32,
        got_h: i32,
        want_w: i32,
        want_h: i32,
    },
}

/// A copy of every pixel of an ARGB32 surface at one instant.
///
/// Snapshots are plain owned buffers; moving one between containers moves its pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    width: i32,
    height: i32,
    stride: i32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for RasterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSnapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

impl RasterSnapshot {
    /// Copies the current contents of `surface`.
    pub fn capture(surface: &cairo::ImageSurface) -> Result<Self, SurfaceError> {
        let mut pixels = Vec::new();
        surface.with_data(|data| pixels.extend_from_slice(data))?;
        Ok(Self {
            width: surface.width(),
            height: surface.height(),
            stride: surface.stride(),
            pixels,
        })
    }

    /// Builds a fresh surface holding a copy of this snapshot.
    pub fn to_surface(&self) -> Result<cairo::ImageSurface, SurfaceError> {
        let surface = cairo::ImageSurface::create_for_data(
            self.pixels.clone(),
            cairo::Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )?;
        Ok(surface)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Raw premultiplied ARGB32 bytes in native endianness.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the `(r, g, b, a)` bytes at `(x, y)`.
    ///
    /// Values are premultiplied, which is exact for opaque pixels.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.stride + x * 4) as usize;
        let bytes: [u8; 4] = self.pixels.get(offset..offset + 4)?.try_into().ok()?;
        let argb = u32::from_ne_bytes(bytes);
        Some([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ])
    }
}

/// Transparent layer that freehand tools paint into.
///
/// Shapes never touch this layer; it is composited over them on every redraw.
pub struct InkLayer {
    surface: cairo::ImageSurface,
}

impl InkLayer {
    /// Creates a fully transparent layer.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Strokes one freehand segment directly into the layer's pixels.
    pub fn stroke_segment(&self, from: (f64, f64), to: (f64, f64), color: Color, thick: f64) {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => render::render_freehand_segment(&ctx, from, to, color, thick),
            Err(err) => log::warn!("Failed to open ink context: {err}"),
        }
    }

    /// Wipes every pixel back to transparent.
    pub fn clear(&self) {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => render::render_background(&ctx, TRANSPARENT),
            Err(err) => log::warn!("Failed to open ink context: {err}"),
        }
    }

    /// Copies the layer.
    pub fn snapshot(&self) -> Result<RasterSnapshot, SurfaceError> {
        RasterSnapshot::capture(&self.surface)
    }

    /// Replaces the layer's pixels with `snapshot`.
    pub fn restore(&mut self, snapshot: &RasterSnapshot) -> Result<(), SurfaceError> {
        let (want_w, want_h) = (self.surface.width(), self.surface.height());
        if snapshot.width() != want_w || snapshot.height() != want_h {
            return Err(SurfaceError::SizeMismatch {
                got_w: snapshot.width(),
                got_h: snapshot.height(),
                want_w,
                want_h,
            });
        }
        self.surface = snapshot.to_surface()?;
        Ok(())
    }
}
