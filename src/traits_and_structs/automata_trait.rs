use super::host::{Canvas, RawInput};

/// Something the window shell can drive once per frame.
pub trait CellAutomata {
    /// Consume this frame's raw input and advance state. May block for the
    /// configured step delay while the simulation runs.
    fn update<I: RawInput>(&mut self, input: &I);
    /// Paint the visible generation. Never mutates state.
    fn draw<C: Canvas>(&self, canvas: &mut C);
    fn clear(&mut self);
    fn randomize(&mut self);
    fn describe() -> String;
}
