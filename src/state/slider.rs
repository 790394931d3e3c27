//! Image slider cursor.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// Which slide is showing and whether auto-advance is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
    pub len: usize,
    pub current: usize,
    pub paused: bool,
}

impl SliderState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, current: 0, paused: false }
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Jump to slide `index`; out-of-range indexes are ignored.
    pub fn show(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Auto-advance tick; no-op while paused.
    pub fn tick(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.current == index
    }
}
