use super::{Point2, Vector2};
use crate::error::{Result, StructuralError};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the signed area and the area-weighted centroid of a polygon.
///
/// When `|area|` is below `area_epsilon` the polygon is collinear and the
/// centroid is the arithmetic mean of the vertices instead.
#[must_use]
pub fn area_and_centroid_2d(points: &[Point2], area_epsilon: f64) -> (f64, Point2) {
    let n = points.len();
    let area = signed_area_2d(points);
    if n == 0 {
        return (0.0, Point2::origin());
    }
    if area.abs() < area_epsilon {
        return (area, vertex_mean(points));
    }

    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    let k = 1.0 / (6.0 * area);
    (area, Point2::new(cx * k, cy * k))
}

/// Arithmetic mean of the vertices.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_mean(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / points.len() as f64)
}

/// Computes the normalized direction from point `a` to point `b` and the
/// distance between them.
///
/// # Errors
///
/// Returns `StructuralError::ZeroLengthWall` naming `owner` if the points
/// coincide or the distance is not finite.
pub fn segment_direction(a: &Point2, b: &Point2, owner: &str) -> Result<(Vector2, f64)> {
    let d = b - a;
    let len = d.norm();
    if len <= 0.0 || !len.is_finite() {
        return Err(StructuralError::ZeroLengthWall {
            wall: owner.to_owned(),
        }
        .into());
    }
    Ok((d / len, len))
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Per-axis coincidence test used when stitching wall endpoints.
#[must_use]
pub fn points_near(a: &Point2, b: &Point2, epsilon: f64) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{AREA_EPSILON, EPSILON};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_relative_eq!(signed_area_2d(&pts), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert_relative_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < AREA_EPSILON);
        assert!(signed_area_2d(&[]).abs() < AREA_EPSILON);
    }

    #[test]
    fn centroid_of_l_shape() {
        // 2x2 square with the top-right 1x1 quadrant removed.
        let pts = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ];
        let (area, c) = area_and_centroid_2d(&pts, AREA_EPSILON);
        assert_relative_eq!(area, 3.0);
        assert_relative_eq!(c.x, 5.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_centroid_falls_back_to_mean() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(5.0, 0.0)];
        let (area, c) = area_and_centroid_2d(&pts, AREA_EPSILON);
        assert!(area.abs() < AREA_EPSILON);
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 0.0);
    }

    #[test]
    fn segment_direction_basic() {
        let (dir, len) = segment_direction(&p(0.0, 0.0), &p(3.0, 4.0), "w").unwrap();
        assert_relative_eq!(dir.x, 0.6);
        assert_relative_eq!(dir.y, 0.8);
        assert_relative_eq!(len, 5.0);
    }

    #[test]
    fn segment_direction_zero_length() {
        let err = segment_direction(&p(1.0, 1.0), &p(1.0, 1.0), "w1").unwrap_err();
        assert!(err.to_string().contains("w1"));
    }

    #[test]
    fn segment_direction_accepts_sub_epsilon_length() {
        let (dir, len) = segment_direction(&p(0.0, 0.0), &p(5e-7, 0.0), "w1").unwrap();
        assert_relative_eq!(dir.x, 1.0);
        assert_relative_eq!(len, 5e-7);
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(Vector2::new(1.0, 0.0));
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 1.0);
    }

    #[test]
    fn points_near_is_per_axis() {
        assert!(points_near(&p(0.0, 0.0), &p(1e-7, -1e-7), EPSILON));
        assert!(!points_near(&p(0.0, 0.0), &p(2e-6, 0.0), EPSILON));
    }

}
