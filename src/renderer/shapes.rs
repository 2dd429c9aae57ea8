//! Shape outlines and line tessellation
//!
//! Outlines are local-space polylines, 1 unit ≈ one render-scale step.
//! Closed outlines repeat their first vertex.

use glam::Vec2;

use super::vertex::Vertex;

/// Ship arrow, nose pointing up (-y) in design space
pub const SHIP: [Vec2; 5] = [
    Vec2::new(0.0, -2.0),
    Vec2::new(1.2, 1.5),
    Vec2::new(0.0, 0.8),
    Vec2::new(-1.2, 1.5),
    Vec2::new(0.0, -2.0),
];

/// Eight-vertex irregular rock
pub const ASTEROID: [Vec2; 9] = [
    Vec2::new(0.0, -2.2),
    Vec2::new(1.6, -1.5),
    Vec2::new(2.2, 0.2),
    Vec2::new(1.4, 1.8),
    Vec2::new(-0.2, 2.1),
    Vec2::new(-1.8, 1.3),
    Vec2::new(-2.1, -0.4),
    Vec2::new(-1.3, -1.7),
    Vec2::new(0.0, -2.2),
];

/// Bullet streak: from the bullet position along its velocity
pub fn bullet_streak(vel: Vec2) -> [Vec2; 2] {
    [Vec2::ZERO, vel]
}

/// Generate vertices for a thick line segment (two triangles)
pub fn thick_line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> [Vertex; 6] {
    // Direction from start to end
    let dir = (to - from).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    // Quad corners
    let v1a = from + perp;
    let v1b = from - perp;
    let v2a = to + perp;
    let v2b = to - perp;

    [
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlines_are_closed() {
        assert_eq!(SHIP.first(), SHIP.last());
        assert_eq!(ASTEROID.first(), ASTEROID.last());
        assert_eq!(ASTEROID.len() - 1, 8);
    }

    #[test]
    fn test_thick_line_width() {
        let verts = thick_line(Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0, [1.0; 4]);
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| y.abs() == 2.0));
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().all(|&x| x == 0.0 || x == 10.0));
    }
}
