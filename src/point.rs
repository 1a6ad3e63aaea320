/// Point in 2D space through which a spline curve passes. Plain value type;
/// coordinates are pixel or world units, the curve does not care which.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub fn new(x: f64, y: f64) -> Self {
        Point2d { x, y }
    }
}

impl std::fmt::Display for Point2d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let point = Point2d::new(3.0, -1.5);

        assert_eq!(3.0, point.x);
        assert_eq!(-1.5, point.y);
    }

    #[test]
    fn test_display() {
        let point = Point2d::new(2.0, 4.5);

        assert_eq!("(2, 4.5)", format!("{}", point));
    }
}
