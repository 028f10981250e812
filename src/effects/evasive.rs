use log::trace;

pub const STEP: i32 = 10;
pub const MAX_OFFSET: i32 = 50;

/// Bobs a control up and down so it is hard to hit.
#[derive(Debug, Clone)]
pub struct EvasiveControl {
    offset: i32,
    direction: i32,
}

impl EvasiveControl {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(offset: i32) -> Self {
        Self {
            offset: offset.clamp(0, MAX_OFFSET),
            direction: 1,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Moves one step, turning around first if the step would leave `0..=MAX_OFFSET`.
    pub fn step(&mut self) {
        let next = self.offset + self.direction * STEP;
        if !(0..=MAX_OFFSET).contains(&next) {
            self.direction = -self.direction;
            trace!("evasive control reversing at offset {}", self.offset);
        }
        self.offset = (self.offset + self.direction * STEP).clamp(0, MAX_OFFSET);
    }
}

impl Default for EvasiveControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn bounces_between_the_limits() {
        let mut control = EvasiveControl::new();
        let offsets: Vec<i32> = (0..12)
            .map(|_| {
                control.step();
                control.offset()
            })
            .collect();
        assert_eq!(offsets, vec![10, 20, 30, 40, 50, 40, 30, 20, 10, 0, 10, 20]);
    }

    #[test]
    fn off_grid_start_stays_in_range() {
        let mut control = EvasiveControl::starting_at(45);
        control.step();
        assert_eq!(control.offset(), 35);
    }

    #[test]
    fn out_of_range_start_is_clamped() {
        assert_eq!(EvasiveControl::starting_at(90).offset(), 50);
        assert_eq!(EvasiveControl::starting_at(-5).offset(), 0);
    }

    proptest! {
        #[test]
        fn offset_stays_in_range(start in 0..=MAX_OFFSET, steps in 0usize..500) {
            let mut control = EvasiveControl::starting_at(start);
            for _ in 0..steps {
                control.step();
                prop_assert!((0..=MAX_OFFSET).contains(&control.offset()));
            }
        }
    }
}
