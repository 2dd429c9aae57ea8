//! Shape geometry
//!
//! Shapes are authored as local-space polylines and projected into the
//! playfield with rotate → scale → translate.

use glam::Vec2;

/// Project local-space vertices into world space
///
/// Every output vertex is `R(rot) · p · scale + anchor`, in input order.
pub fn transform(points: &[Vec2], scale: f32, rot: f32, anchor: Vec2) -> Vec<Vec2> {
    let rotation = Vec2::from_angle(rot);
    points
        .iter()
        .map(|&p| rotation.rotate(p) * scale + anchor)
        .collect()
}

/// Consecutive vertex pairs of an open polyline
///
/// `n + 1` vertices yield `n` segments. Closed outlines repeat their first
/// vertex at the end.
pub fn segments(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    points.windows(2).map(|pair| (pair[0], pair[1]))
}
