use glam::Vec2;

/// Determine whether a 2D polygon's vertices are ordered clockwise.
///
/// Uses the shoelace signed-area sum with the first vertex as reference
/// offset; the offset cancels algebraically, it only keeps the products
/// small. A polygon with fewer than 3 vertices is never clockwise.
pub fn is_clockwise(polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let origin = polygon[0];
    let n = polygon.len();

    let mut sum = 0.0f32;
    for i in 0..n {
        let a = polygon[i] - origin;
        let b = polygon[(i + 1) % n] - origin;
        sum += a.perp_dot(b);
    }

    // Negative signed area means clockwise traversal
    sum < 0.0
}

/// Reverse a polygon's vertex order, flipping its winding without
/// altering the geometry. Reversing twice returns the original sequence.
pub fn reverse_winding(polygon: &[Vec2]) -> Vec<Vec2> {
    polygon.iter().rev().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_square() {
        let square = vec![
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(-1.0, 1.0),
        ];
        assert!(is_clockwise(&square));
    }

    #[test]
    fn test_counter_clockwise_square() {
        let square = vec![
            Vec2::new(-1.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
        ];
        assert!(!is_clockwise(&square));
    }

    #[test]
    fn test_too_few_vertices() {
        assert!(!is_clockwise(&[]));
        assert!(!is_clockwise(&[Vec2::ZERO]));
        assert!(!is_clockwise(&[Vec2::ZERO, Vec2::new(1.0, 0.0)]));
    }

    #[test]
    fn test_degenerate_zero_area() {
        // Collinear points enclose no area and are not clockwise
        let line = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
        ];
        assert!(!is_clockwise(&line));
    }

    #[test]
    fn test_offset_does_not_bias_sign() {
        // Same square far from the origin; the reference offset cancels
        let square = vec![
            Vec2::new(1001.0, 1001.0),
            Vec2::new(1001.0, 999.0),
            Vec2::new(999.0, 999.0),
            Vec2::new(999.0, 1001.0),
        ];
        assert!(is_clockwise(&square));
    }

    #[test]
    fn test_reverse_flips_winding() {
        let square = vec![
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(-1.0, 1.0),
        ];
        let reversed = reverse_winding(&square);
        assert!(!is_clockwise(&reversed));
        assert!(is_clockwise(&reverse_winding(&reversed)));
    }

    #[test]
    fn test_double_reverse_is_identity() {
        let polygon = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(3.0, -1.0),
            Vec2::new(1.0, -2.0),
        ];
        assert_eq!(reverse_winding(&reverse_winding(&polygon)), polygon);
    }
}
