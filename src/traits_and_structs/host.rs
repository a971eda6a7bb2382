pub type Rgba = [u8; 4];

/// Inputs tracked by the editor. Each one gets its own edge trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// Left mouse button: bring a cell to life.
    Primary,
    /// Right mouse button: kill a cell.
    Secondary,
    /// Run/pause key.
    Toggle,
    Clear,
    Randomize,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Primary,
        Control::Secondary,
        Control::Toggle,
        Control::Clear,
        Control::Randomize,
    ];
}

/// Raw, level-triggered view of the host's input devices.
pub trait RawInput {
    fn is_held(&self, control: Control) -> bool;
    /// Pointer position in viewport pixels, if it is over the viewport.
    fn pointer(&self) -> Option<(f32, f32)>;
}

/// The one drawing primitive the core needs.
pub trait Canvas {
    fn fill_rect(&mut self, x: u32, y: u32, size: u32, color: Rgba);
}

#[cfg(test)]
pub mod fakes {
    use std::collections::HashSet;

    use super::*;

    /// Input whose held set and pointer are set by the test between polls.
    #[derive(Debug, Default)]
    pub struct ScriptedInput {
        held: HashSet<Control>,
        pointer: Option<(f32, f32)>,
    }

    impl ScriptedInput {
        pub fn press(&mut self, control: Control) {
            self.held.insert(control);
        }

        pub fn release(&mut self, control: Control) {
            self.held.remove(&control);
        }

        pub fn point_at(&mut self, x: f32, y: f32) {
            self.pointer = Some((x, y));
        }
    }

    impl RawInput for ScriptedInput {
        fn is_held(&self, control: Control) -> bool {
            self.held.contains(&control)
        }

        fn pointer(&self) -> Option<(f32, f32)> {
            self.pointer
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FillRect {
        pub x: u32,
        pub y: u32,
        pub size: u32,
        pub color: Rgba,
    }

    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub commands: Vec<FillRect>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, x: u32, y: u32, size: u32, color: Rgba) {
            self.commands.push(FillRect { x, y, size, color });
        }
    }
}
