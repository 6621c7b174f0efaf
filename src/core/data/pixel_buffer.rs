use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn viewport_to_buffer_size(viewport: Viewport) -> usize {
    viewport.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel {pixel:?} outside of viewport {viewport:?}")]
    PixelOutsideBounds { pixel: Point, viewport: Viewport },
    #[error("viewport size {viewport_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA frame, row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    pub fn from_data(viewport: Viewport, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let viewport_size = viewport_to_buffer_size(viewport);

        if viewport_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { viewport, buffer })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = colour.a;

        Ok(())
    }

    /// Iterates the frame as RGB triples, dropping alpha.
    pub fn rgb_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|rgba| rgba[..3].iter().copied())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.viewport.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            });
        }

        let row_start = pixel.y as usize * self.viewport.width() as usize;
        Ok((row_start + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
