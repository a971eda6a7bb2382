use pixels::Pixels;
use winit::event::VirtualKeyCode;
use winit_input_helper::WinitInputHelper;

use crate::traits_and_structs::host::{Control, RawInput};

/// Raw input as seen through winit for one frame.
pub struct WinitHost<'a> {
    pub input: &'a WinitInputHelper,
    pub pixels: &'a Pixels,
}

impl RawInput for WinitHost<'_> {
    fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Primary => self.input.mouse_held(0),
            Control::Secondary => self.input.mouse_held(1),
            Control::Toggle => self.input.key_held(VirtualKeyCode::Space),
            Control::Clear => self.input.key_held(VirtualKeyCode::C),
            Control::Randomize => self.input.key_held(VirtualKeyCode::R),
        }
    }

    fn pointer(&self) -> Option<(f32, f32)> {
        self.input
            .mouse()
            .and_then(|pos| self.pixels.window_pos_to_pixel(pos).ok())
            .map(|(x, y)| (x as f32, y as f32))
    }
}
