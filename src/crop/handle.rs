use crate::geometry::Orientation;

/// Minimum permitted distance between a guide and either of its bounds.
/// Keeps opposing guides from coinciding and guides from reaching the
/// image edge.
pub const HANDLE_MARGIN: f64 = 10.0;

/// A draggable guide line constrained to one axis and a bounded range.
///
/// The position is only ever mutated through [`EdgeHandle::set_position`],
/// which silently rejects values outside the permitted interval. Bound
/// updates never move the guide; if they shrink the interval past the
/// margin on both sides the guide becomes permanently unmovable (see
/// [`EdgeHandle::is_stuck`]).
#[derive(Debug, Clone)]
pub struct EdgeHandle {
    orientation: Orientation,
    position: f64,
    min_bound: f64,
    max_bound: f64,
    span_start: f64,
    span_length: f64,
}

impl EdgeHandle {
    pub fn new(
        orientation: Orientation,
        position: f64,
        span_start: f64,
        span_length: f64,
        min_bound: f64,
        max_bound: f64,
    ) -> Self {
        let low = min_bound + HANDLE_MARGIN;
        let high = max_bound - HANDLE_MARGIN;
        let position = if low <= high {
            position.clamp(low, high)
        } else {
            position
        };
        Self {
            orientation,
            position,
            min_bound,
            max_bound,
            span_start,
            span_length,
        }
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub const fn position(&self) -> f64 {
        self.position
    }

    pub const fn min_bound(&self) -> f64 {
        self.min_bound
    }

    pub const fn max_bound(&self) -> f64 {
        self.max_bound
    }

    /// Drawn segment along the perpendicular axis as `(start, length)`.
    pub const fn span(&self) -> (f64, f64) {
        (self.span_start, self.span_length)
    }

    /// Moves the guide to `position` if it lies strictly inside the
    /// margin-reduced range. Returns whether the move was accepted; a
    /// rejected move leaves the position untouched.
    pub fn set_position(&mut self, position: f64) -> bool {
        if self.min_bound + HANDLE_MARGIN < position && position < self.max_bound - HANDLE_MARGIN {
            self.position = position;
            true
        } else {
            false
        }
    }

    /// Updates the lower clamp bound without moving the guide.
    pub fn set_min_bound(&mut self, min_bound: f64) {
        self.min_bound = min_bound;
    }

    /// Updates the upper clamp bound without moving the guide.
    pub fn set_max_bound(&mut self, max_bound: f64) {
        self.max_bound = max_bound;
    }

    /// Picks the pointer coordinate along this guide's movement axis.
    pub fn axis_coordinate(&self, x: f64, y: f64) -> f64 {
        match self.orientation {
            Orientation::Vertical => x,
            Orientation::Horizontal => y,
        }
    }

    /// True when the margin-reduced range is empty and every
    /// `set_position` call will be rejected.
    pub fn is_stuck(&self) -> bool {
        self.min_bound + HANDLE_MARGIN >= self.max_bound - HANDLE_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_handle() -> EdgeHandle {
        EdgeHandle::new(Orientation::Vertical, 160.0, -1000.0, 2600.0, 0.0, 640.0)
    }

    #[test]
    fn set_position_accepts_strictly_inside_margins() {
        let mut handle = vertical_handle();
        assert!(handle.set_position(500.0));
        assert_eq!(handle.position(), 500.0);
    }

    #[test]
    fn set_position_rejects_at_and_beyond_margins() {
        let mut handle = vertical_handle();
        for rejected in [10.0, 9.0, -5.0, 630.0, 631.0, 700.0] {
            assert!(!handle.set_position(rejected), "{rejected} should be rejected");
            assert_eq!(handle.position(), 160.0);
        }
        assert!(handle.set_position(10.1));
        assert!(handle.set_position(629.9));
    }

    #[test]
    fn repeated_set_position_with_same_value_is_accepted_each_time() {
        let mut handle = vertical_handle();
        assert!(handle.set_position(300.0));
        assert!(handle.set_position(300.0));
        assert_eq!(handle.position(), 300.0);
    }

    #[test]
    fn bound_updates_do_not_move_the_guide() {
        let mut handle = vertical_handle();
        handle.set_min_bound(100.0);
        handle.set_max_bound(500.0);
        assert_eq!(handle.position(), 160.0);
        assert_eq!(handle.min_bound(), 100.0);
        assert_eq!(handle.max_bound(), 500.0);

        assert!(!handle.set_position(105.0));
        assert!(handle.set_position(120.0));
    }

    #[test]
    fn collapsed_range_leaves_guide_permanently_stuck() {
        let mut handle = vertical_handle();
        handle.set_min_bound(300.0);
        handle.set_max_bound(310.0);
        assert!(handle.is_stuck());
        assert!(!handle.set_position(305.0));
        assert!(!handle.set_position(300.0));
        assert_eq!(handle.position(), 160.0);
    }

    #[test]
    fn horizontal_guide_reads_pointer_y_and_vertical_reads_x() {
        let horizontal =
            EdgeHandle::new(Orientation::Horizontal, 120.0, -1000.0, 2800.0, 0.0, 480.0);
        assert_eq!(horizontal.axis_coordinate(33.0, 77.0), 77.0);
        assert_eq!(vertical_handle().axis_coordinate(33.0, 77.0), 33.0);
    }

    #[test]
    fn construction_clamps_initial_position_into_permitted_interval() {
        let handle = EdgeHandle::new(Orientation::Vertical, -50.0, 0.0, 100.0, 0.0, 640.0);
        assert_eq!(handle.position(), HANDLE_MARGIN);
    }

    #[test]
    fn construction_with_collapsed_range_keeps_the_given_position() {
        let handle = EdgeHandle::new(Orientation::Vertical, 305.0, 0.0, 100.0, 300.0, 310.0);
        assert!(handle.is_stuck());
        assert_eq!(handle.position(), 305.0);
    }
}
