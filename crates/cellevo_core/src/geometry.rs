//! Planar distance and movement helpers.

use cellevo_data::Point;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Moves from `from` straight toward `to` by at most `max_step`.
///
/// Lands exactly on `to` when it is within reach. A zero distance returns
/// `from` unchanged.
#[must_use]
pub fn direction_step(from: Point, to: Point, max_step: f64) -> Point {
    let dist = distance(from, to);
    if dist == 0.0 {
        return from;
    }
    if dist <= max_step {
        return to;
    }
    let scale = max_step / dist;
    Point::new(from.x + (to.x - from.x) * scale, from.y + (to.y - from.y) * scale)
}

/// Index of the point nearest to `origin`; the first of several equally near wins.
pub fn nearest<I>(origin: Point, points: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = Point>,
{
    points
        .into_iter()
        .enumerate()
        .map(|(i, p)| (i, distance(origin, p)))
        .fold(None, |best, (i, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Point::new(1.0, 1.0), Point::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_direction_step_zero_distance() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(direction_step(p, p, 10.0), p);
        assert_eq!(direction_step(p, p, 0.0), p);
    }

    #[test]
    fn test_direction_step_capped() {
        let next = direction_step(Point::new(0.0, 0.0), Point::new(30.0, 40.0), 10.0);
        assert!((next.x - 6.0).abs() < 1e-9);
        assert!((next.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_direction_step_reaches_close_target() {
        let target = Point::new(3.0, 0.0);
        assert_eq!(direction_step(Point::new(0.0, 0.0), target, 10.0), target);
    }

    #[test]
    fn test_nearest_first_tie_wins() {
        let origin = Point::new(0.0, 0.0);
        let points = [
            Point::new(10.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(-5.0, 0.0),
        ];
        assert_eq!(nearest(origin, points), Some((1, 5.0)));
        assert_eq!(nearest(origin, std::iter::empty()), None);
    }
}
