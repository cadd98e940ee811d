/// A closed parametric interval [min, max].
///
/// Used as the valid hit range of a ray: primary rays span [0, inf),
/// shadow rays span [bias, distance-to-light].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if t is within the interval [min, max] (inclusive).
    pub fn contains(&self, t: f32) -> bool {
        self.min <= t && t <= self.max
    }

    /// Returns true if t is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, t: f32) -> bool {
        self.min < t && t < self.max
    }

    /// Clamps t to be within the interval [min, max].
    pub fn clamp(&self, t: f32) -> f32 {
        t.clamp(self.min, self.max)
    }

    /// The interval of a primary ray: everything in front of the origin.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(interval.min, 0.0);
        assert_eq!(interval.max, 10.0);
    }

    #[test]
    fn test_interval_size() {
        let interval = Interval::new(2.0, 7.0);
        assert_eq!(interval.size(), 5.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        // Inside
        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));

        // Outside
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 10.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_forward_covers_positive_axis() {
        assert!(Interval::FORWARD.contains(0.0));
        assert!(Interval::FORWARD.contains(1e9));
        assert!(!Interval::FORWARD.contains(-0.001));
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        assert!(empty.min > empty.max);
        assert!(!empty.contains(0.0));
        assert!(!empty.contains(f32::INFINITY));
    }
}
