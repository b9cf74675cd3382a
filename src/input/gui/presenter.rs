use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Shows session frames through a `pixels` surface the size of the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;

        Ok(())
    }

    /// Copies `frame` in when it matches the surface size and draws. A stale
    /// frame from before a resize is skipped until the next one arrives.
    pub fn present(&mut self, frame: Option<&PixelBuffer>) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        match frame {
            Some(frame)
                if frame.dimensions().width() == self.width
                    && frame.dimensions().height() == self.height =>
            {
                self.pixels.frame_mut().copy_from_slice(frame.buffer());
            }
            _ => self.draw_placeholder(),
        }

        self.pixels.render()
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }
}
