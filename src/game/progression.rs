use bevy::prelude::*;

/// Resource tracking which level of the library is being played
#[derive(Resource, Debug)]
pub struct LevelTracker {
    /// Zero-based index into the level library
    current: usize,
    /// Total levels in the library, captured at startup
    level_count: usize,
}

impl LevelTracker {
    pub fn new(level_count: usize) -> Self {
        assert!(level_count > 0, "cannot track an empty level library");

        LevelTracker {
            current: 0,
            level_count,
        }
    }

    /// Zero-based index of the level being played
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// One-based level number for display
    pub fn level_number(&self) -> usize {
        self.current + 1
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Check if this is the last level in the library
    pub fn is_final_level(&self) -> bool {
        self.current + 1 == self.level_count
    }

    /// Step to the next level. Returns false (and stays put) when the
    /// final level is already active; progression never wraps around.
    pub fn advance(&mut self) -> bool {
        if self.is_final_level() {
            return false;
        }

        self.current += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_starts_at_first_level() {
        let tracker = LevelTracker::new(3);

        assert_eq!(tracker.current_index(), 0);
        assert_eq!(tracker.level_number(), 1);
        assert_eq!(tracker.level_count(), 3);
        assert!(!tracker.is_final_level());
    }

    #[test]
    fn test_advance_walks_the_library() {
        let mut tracker = LevelTracker::new(3);

        assert!(tracker.advance());
        assert_eq!(tracker.level_number(), 2);

        assert!(tracker.advance());
        assert_eq!(tracker.level_number(), 3);
        assert!(tracker.is_final_level());
    }

    #[test]
    fn test_advance_never_wraps() {
        let mut tracker = LevelTracker::new(2);

        assert!(tracker.advance());
        assert!(!tracker.advance(), "Advance past the end should refuse");
        assert_eq!(tracker.level_number(), 2);
    }

    #[test]
    fn test_single_level_library_is_final_immediately() {
        let tracker = LevelTracker::new(1);
        assert!(tracker.is_final_level());
    }
}
