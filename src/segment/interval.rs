//! Runs of non-blank rows or columns
//!
//! A single left-to-right scan turns a per-index "blank" flag sequence into
//! the maximal half-open runs of non-blank entries.

/// Half-open index range `[start, end)` with `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: usize,
    end: usize,
}

impl Interval {
    /// Create an interval, or `None` when `start >= end`
    pub fn new(start: usize, end: usize) -> Option<Self> {
        if start < end {
            Some(Interval { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false, intervals are never empty
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<Interval> for (usize, usize) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between runs
    Outside,
    /// Inside a run that opened at `start`
    Inside { start: usize },
}

/// Extract the maximal runs of `false` entries from `blank_flags`
///
/// Runs are returned in ascending order. An all-blank input yields no
/// intervals, an all-non-blank input of length `n` yields exactly `[0, n)`.
///
/// # Arguments
/// * `blank_flags` - One flag per row or column, `true` meaning blank
///
/// # Returns
/// The non-blank runs as half-open intervals
pub fn extract_intervals(blank_flags: &[bool]) -> Vec<Interval> {
    let mut intervals = Vec::new();
    let mut state = ScanState::Outside;

    for (index, &is_blank) in blank_flags.iter().enumerate() {
        state = match (state, is_blank) {
            (ScanState::Outside, false) => ScanState::Inside { start: index },
            (ScanState::Inside { start }, true) => {
                intervals.push(Interval { start, end: index });
                ScanState::Outside
            },
            (unchanged, _) => unchanged,
        };
    }

    if let ScanState::Inside { start } = state {
        intervals.push(Interval { start, end: blank_flags.len() });
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(flags: &[bool]) -> Vec<(usize, usize)> {
        extract_intervals(flags).into_iter().map(Into::into).collect()
    }

    #[test]
    fn test_mixed_flags() {
        let flags = [true, false, false, true, false, true, true];
        assert_eq!(spans(&flags), vec![(1, 3), (4, 5)]);
    }

    #[test]
    fn test_all_blank_yields_nothing() {
        assert!(extract_intervals(&[true, true, true]).is_empty());
    }

    #[test]
    fn test_all_content_yields_single_run() {
        assert_eq!(spans(&[false, false]), vec![(0, 2)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_intervals(&[]).is_empty());
    }

    #[test]
    fn test_runs_touching_both_ends() {
        let flags = [false, true, true, false, false];
        assert_eq!(spans(&flags), vec![(0, 1), (3, 5)]);
    }

    #[test]
    fn test_single_entry_runs() {
        let flags = [false, true, false, true, false];
        assert_eq!(spans(&flags), vec![(0, 1), (2, 3), (4, 5)]);
    }

    #[test]
    fn test_intervals_are_non_empty_and_ordered() {
        let flags = [true, false, true, true, false, false, false, true, false];
        let intervals = extract_intervals(&flags);
        for interval in &intervals {
            assert!(interval.start() < interval.end());
            assert!(flags[interval.start()..interval.end()].iter().all(|&b| !b));
        }
        for pair in intervals.windows(2) {
            assert!(pair[0].end() < pair[1].start());
        }
    }

    #[test]
    fn test_interval_constructor() {
        assert!(Interval::new(2, 2).is_none());
        let interval = Interval::new(2, 6).unwrap();
        assert_eq!(interval.len(), 4);
    }
}
