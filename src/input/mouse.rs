use glam::Vec2;

/// Remembers the last cursor position so consecutive events can be turned
/// into (previous, current) pairs.
#[derive(Debug, Default)]
pub(crate) struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    /// Record a new position.
    ///
    /// Returns `None` for the first position after creation or
    /// [`reset`](Self::reset), so the camera does not jump when the cursor
    /// first enters the window.
    pub(crate) fn advance(&mut self, current: Vec2) -> Option<(Vec2, Vec2)> {
        self.last.replace(current).map(|previous| (previous, current))
    }

    /// Forget the last position.
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    /// Last recorded position, if any.
    pub(crate) fn last(&self) -> Option<Vec2> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_position_has_no_previous() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.advance(Vec2::new(10.0, 20.0)), None);
        assert_eq!(
            tracker.advance(Vec2::new(15.0, 18.0)),
            Some((Vec2::new(10.0, 20.0), Vec2::new(15.0, 18.0)))
        );
    }

    #[test]
    fn reset_forgets_position() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.advance(Vec2::ONE);
        tracker.reset();
        assert_eq!(tracker.last(), None);
        assert_eq!(tracker.advance(Vec2::ZERO), None);
    }
}
