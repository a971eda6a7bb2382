use crate::traits_and_structs::host::{Canvas, Rgba};

/// An RGBA frame buffer, e.g. the one handed out by `Pixels::get_frame`.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), 4 * width as usize * height as usize);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Rgba) {
        for pix in self.frame.chunks_exact_mut(4) {
            pix.copy_from_slice(&color);
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    /// Squares hanging off the right or bottom edge are clipped.
    fn fill_rect(&mut self, x: u32, y: u32, size: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x_end = x.saturating_add(size).min(self.width) as usize;
        let y_end = y.saturating_add(size).min(self.height) as usize;
        let width = self.width as usize;
        for row in y as usize..y_end {
            let start = 4 * (row * width + x as usize);
            let end = 4 * (row * width + x_end);
            for pix in self.frame[start..end].chunks_exact_mut(4) {
                pix.copy_from_slice(&color);
            }
        }
    }
}
