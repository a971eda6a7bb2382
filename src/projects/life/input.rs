use log::debug;

use super::grid::{Generation, GridModel};
use crate::traits_and_structs::host::{Control, RawInput};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    #[default]
    Released,
    Held,
}

/// Turns a level signal into one event per press/release cycle. The event
/// fires on the poll where the signal drops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    state: TriggerState,
}

impl EdgeTrigger {
    /// Feed one sample; returns `true` when the input was just released.
    pub fn poll(&mut self, active: bool) -> bool {
        match (self.state, active) {
            (_, true) => {
                self.state = TriggerState::Held;
                false
            }
            (TriggerState::Held, false) => {
                self.state = TriggerState::Released;
                true
            }
            (TriggerState::Released, false) => false,
        }
    }
}

/// Activations resolved on one poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activations {
    fired: [bool; Control::ALL.len()],
}

impl Activations {
    pub fn fired(&self, control: Control) -> bool {
        self.fired[control as usize]
    }

    pub fn any(&self) -> bool {
        self.fired.iter().any(|&f| f)
    }
}

#[derive(Debug, Default)]
pub struct InputController {
    triggers: [EdgeTrigger; Control::ALL.len()],
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample every tracked control once.
    pub fn poll<I: RawInput>(&mut self, input: &I) -> Activations {
        let mut activations = Activations::default();
        for control in Control::ALL {
            activations.fired[control as usize] =
                self.triggers[control as usize].poll(input.is_held(control));
        }
        activations
    }

    /// Apply pointer edits to `generation`. A primary click brings the cell
    /// under the pointer to life, a secondary click kills it; primary wins
    /// when both land on the same poll. Returns the edited `(row, col)`.
    pub fn apply_edits<I: RawInput>(
        &self,
        activations: &Activations,
        input: &I,
        grid: &GridModel,
        generation: &mut Generation,
    ) -> Option<(usize, usize)> {
        let alive = if activations.fired(Control::Primary) {
            true
        } else if activations.fired(Control::Secondary) {
            false
        } else {
            return None;
        };

        let (px, py) = input.pointer()?;
        let (row, col) = grid.pixel_to_grid(px, py);
        debug!("clicked at ({}, {}) => cell ({}, {})", px, py, row, col);

        match generation.cell_at_mut(row, col) {
            Some(cell) => {
                cell.set_alive(alive);
                Some((row as usize, col as usize))
            }
            None => {
                debug!("click outside the board ignored");
                None
            }
        }
    }
}
