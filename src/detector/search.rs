//! Adaptive radius-window search.
//!
//! Attempt `k` (0-based) uses the caller's window shifted by `k`: widened to
//! `[min − k, max + k]` when the previous attempt found too few circles,
//! narrowed to `[min + k, max − k]` when it found too many. The first attempt
//! uses the caller's window as is. The search ends when the count matches or
//! the attempt ceiling is reached. Widened windows never exceed the radius
//! limit (the image diagonal when driven by the detector).
use crate::types::RadiusWindow;
use serde::Serialize;

/// What the search wants to do after observing an attempt's circle count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// Run another attempt with this window.
    Retry(RadiusWindow),
    /// The observed count equals the expected count.
    Converged,
    /// The attempt ceiling was reached without a match.
    Exhausted,
}

/// Direction of the window adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Adjustment {
    Initial,
    Widen,
    Narrow,
}

/// Mutable state of the radius search.
#[derive(Clone, Debug)]
pub struct RadiusSearch {
    initial: RadiusWindow,
    expected: usize,
    max_attempts: usize,
    limit: u32,
    step: u32,
    attempts: usize,
    last_adjustment: Adjustment,
}

impl RadiusSearch {
    /// An inverted `initial` window is reordered.
    pub fn new(initial: RadiusWindow, expected: usize, max_attempts: usize) -> Self {
        let initial = RadiusWindow::new(
            initial.min.min(initial.max),
            initial.max.max(initial.min),
        );
        Self {
            initial,
            expected,
            max_attempts,
            limit: u32::MAX,
            step: 0,
            attempts: 0,
            last_adjustment: Adjustment::Initial,
        }
    }

    /// Cap the largest radius a widened window may reach.
    pub fn with_radius_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(self.initial.max);
        self
    }

    /// Window of the first attempt.
    pub fn first_window(&self) -> RadiusWindow {
        self.initial
    }

    /// Number of attempts observed so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// How the window of the next attempt was derived.
    pub fn last_adjustment(&self) -> Adjustment {
        self.last_adjustment
    }

    /// Record the count found with the current window and decide what's next.
    pub fn observe(&mut self, found: usize) -> SearchStep {
        self.attempts += 1;
        if found == self.expected {
            return SearchStep::Converged;
        }
        if self.attempts >= self.max_attempts {
            return SearchStep::Exhausted;
        }
        self.step += 1;
        let window = if found < self.expected {
            self.last_adjustment = Adjustment::Widen;
            widen(self.initial, self.step, self.limit)
        } else {
            self.last_adjustment = Adjustment::Narrow;
            narrow(self.initial, self.step)
        };
        SearchStep::Retry(window)
    }
}

fn widen(w: RadiusWindow, step: u32, limit: u32) -> RadiusWindow {
    RadiusWindow::new(
        w.min.saturating_sub(step).max(1),
        w.max.saturating_add(step).min(limit),
    )
}

fn narrow(w: RadiusWindow, step: u32) -> RadiusWindow {
    let min = w.min.saturating_add(step);
    let max = w.max.saturating_sub(step);
    if min <= max {
        RadiusWindow::new(min, max)
    } else {
        let mid = w.min + (w.max - w.min) / 2;
        RadiusWindow::new(mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_immediately_on_match() {
        let mut search = RadiusSearch::new(RadiusWindow::new(25, 35), 1, 5);
        assert_eq!(search.first_window(), RadiusWindow::new(25, 35));
        assert_eq!(search.observe(1), SearchStep::Converged);
        assert_eq!(search.attempts(), 1);
        assert_eq!(search.last_adjustment(), Adjustment::Initial);
    }

    #[test]
    fn step_grows_by_one_relative_to_initial_window() {
        let mut search = RadiusSearch::new(RadiusWindow::new(25, 35), 3, 10);
        assert_eq!(search.observe(1), SearchStep::Retry(RadiusWindow::new(24, 36)));
        assert_eq!(search.observe(2), SearchStep::Retry(RadiusWindow::new(23, 37)));
        assert_eq!(search.observe(5), SearchStep::Retry(RadiusWindow::new(28, 32)));
        assert_eq!(search.last_adjustment(), Adjustment::Narrow);
        assert_eq!(search.observe(3), SearchStep::Converged);
    }

    #[test]
    fn widening_keeps_radius_positive_and_narrowing_collapses() {
        let mut search = RadiusSearch::new(RadiusWindow::new(2, 6), 4, 10);
        search.observe(0);
        search.observe(0);
        assert_eq!(search.observe(0), SearchStep::Retry(RadiusWindow::new(1, 9)));

        let mut search = RadiusSearch::new(RadiusWindow::new(10, 13), 1, 10);
        assert_eq!(search.observe(4), SearchStep::Retry(RadiusWindow::new(11, 12)));
        assert_eq!(search.observe(4), SearchStep::Retry(RadiusWindow::new(11, 11)));
    }

    #[test]
    fn inverted_initial_window_is_reordered() {
        let mut search = RadiusSearch::new(RadiusWindow::new(30, 20), 1, 5);
        assert_eq!(search.first_window(), RadiusWindow::new(20, 30));
        assert_eq!(search.observe(3), SearchStep::Retry(RadiusWindow::new(21, 29)));
        let mut search = RadiusSearch::new(RadiusWindow::new(12, 10), 1, 5);
        assert_eq!(search.observe(3), SearchStep::Retry(RadiusWindow::new(11, 11)));
    }

    #[test]
    fn widening_stops_at_radius_limit() {
        let mut search = RadiusSearch::new(RadiusWindow::new(25, 35), 2, 10).with_radius_limit(36);
        assert_eq!(search.observe(0), SearchStep::Retry(RadiusWindow::new(24, 36)));
        assert_eq!(search.observe(0), SearchStep::Retry(RadiusWindow::new(23, 36)));
        assert_eq!(search.last_adjustment(), Adjustment::Widen);
    }

    #[test]
    fn ceiling_stops_the_search() {
        let mut search = RadiusSearch::new(RadiusWindow::new(25, 35), 2, 3);
        assert!(matches!(search.observe(1), SearchStep::Retry(_)));
        assert!(matches!(search.observe(1), SearchStep::Retry(_)));
        assert_eq!(search.observe(1), SearchStep::Exhausted);
        assert_eq!(search.attempts(), 3);
    }
}
