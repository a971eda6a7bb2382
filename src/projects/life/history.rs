use std::collections::VecDeque;

use super::grid::Generation;

/// Append-only record of generations with a cursor on the one being shown
/// and edited. Generation numbers are absolute: with a retention limit the
/// oldest entries are evicted, but numbering never restarts.
#[derive(Debug)]
pub struct GenerationHistory {
    generations: VecDeque<Generation>,
    first: usize,
    current: usize,
    limit: Option<usize>,
}

impl GenerationHistory {
    /// Starts at generation 0 = `initial`. `limit`, if set, is the number of
    /// newest generations to keep and must be at least 2.
    pub fn new(initial: Generation, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            assert!(limit >= 2, "history must retain at least two generations");
        }
        let mut generations = VecDeque::new();
        generations.push_back(initial);
        Self {
            generations,
            first: 0,
            current: 0,
            limit,
        }
    }

    /// # Panics
    /// When `index` was never appended or has been evicted. Callers only ever
    /// touch `current` and `current + 1`, so this is a logic error.
    pub fn get(&self, index: usize) -> &Generation {
        let slot = self.slot(index);
        &self.generations[slot]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Generation {
        let slot = self.slot(index);
        &mut self.generations[slot]
    }

    pub fn append(&mut self, generation: Generation) {
        self.generations.push_back(generation);
        if let Some(limit) = self.limit {
            while self.generations.len() > limit && self.first < self.current {
                self.generations.pop_front();
                self.first += 1;
            }
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn set_current(&mut self, index: usize) {
        self.slot(index);
        self.current = index;
    }

    pub fn current_generation(&self) -> &Generation {
        self.get(self.current)
    }

    pub fn current_generation_mut(&mut self) -> &mut Generation {
        self.get_mut(self.current)
    }

    /// Number of the newest generation.
    pub fn latest(&self) -> usize {
        self.first + self.generations.len() - 1
    }

    /// Generations currently held in memory.
    pub fn retained(&self) -> usize {
        self.generations.len()
    }

    fn slot(&self, index: usize) -> usize {
        match index.checked_sub(self.first) {
            Some(slot) if slot < self.generations.len() => slot,
            _ => panic!(
                "generation {} is not in history (holding {}..={})",
                index,
                self.first,
                self.latest()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::grid::test_support::generation_with;
    use super::*;

    #[test]
    fn starts_at_generation_zero() {
        let history = GenerationHistory::new(generation_with(3, 3, &[]), None);
        assert_eq!(history.current(), 0);
        assert_eq!(history.latest(), 0);
        assert_eq!(history.current_generation().alive_count(), 0);
    }

    #[test]
    fn append_grows_by_one_and_keeps_everything() {
        let mut history = GenerationHistory::new(generation_with(3, 3, &[]), None);
        for n in 1..=5 {
            history.append(generation_with(3, 3, &[(0, 0)]));
            history.set_current(n);
        }
        assert_eq!(history.latest(), 5);
        assert_eq!(history.retained(), 6);
        assert_eq!(history.get(0).alive_count(), 0);
        assert_eq!(history.get(5).alive_count(), 1);
    }

    #[test]
    fn edits_at_current_do_not_append() {
        let mut history = GenerationHistory::new(generation_with(3, 3, &[]), None);
        history
            .current_generation_mut()
            .get_mut(1, 1)
            .unwrap()
            .set_alive(true);
        assert_eq!(history.latest(), 0);
        assert_eq!(history.get(0).alive_count(), 1);
    }

    #[test]
    #[should_panic(expected = "generation 1 is not in history")]
    fn unmaterialized_generation_is_fatal() {
        let history = GenerationHistory::new(generation_with(3, 3, &[]), None);
        history.get(1);
    }

    #[test]
    #[should_panic(expected = "not in history")]
    fn cursor_cannot_point_past_the_end() {
        let mut history = GenerationHistory::new(generation_with(3, 3, &[]), None);
        history.set_current(1);
    }

    #[test]
    fn limit_evicts_oldest_but_keeps_numbering() {
        let mut history = GenerationHistory::new(generation_with(3, 3, &[]), Some(2));
        for n in 1..=4 {
            history.append(generation_with(3, 3, &[]));
            history.set_current(n);
        }
        history.append(generation_with(3, 3, &[(2, 2)]));
        history.set_current(5);
        assert_eq!(history.retained(), 2);
        assert_eq!(history.latest(), 5);
        assert_eq!(history.get(5).alive_count(), 1);
        assert_eq!(history.get(4).alive_count(), 0);
    }

    #[test]
    #[should_panic(expected = "generation 0 is not in history")]
    fn evicted_generation_is_fatal() {
        let mut history = GenerationHistory::new(generation_with(3, 3, &[]), Some(2));
        for n in 1..=3 {
            history.append(generation_with(3, 3, &[]));
            history.set_current(n);
        }
        history.get(0);
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn limit_below_two_is_rejected() {
        GenerationHistory::new(generation_with(3, 3, &[]), Some(1));
    }
}
