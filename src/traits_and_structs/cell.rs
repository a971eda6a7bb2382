/// A single square on the board. The pixel position is fixed when the
/// generation is built; only `alive` ever changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    x: u32,
    y: u32,
    alive: bool,
}

impl Cell {
    pub fn new(x: u32, y: u32, alive: bool) -> Self {
        Self { x, y, alive }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_survives_state_changes() {
        let mut cell = Cell::new(22, 43, false);
        cell.set_alive(true);
        assert!(cell.is_alive());
        cell.set_alive(false);
        assert!(!cell.is_alive());
        assert_eq!((cell.x(), cell.y()), (22, 43));
    }
}
