//! Shaded circular piece.

use draughts_engine::geometry::{Mesh, Rgb, Vec2, Vertex};

/// Angular step between rim vertices, in degrees.
pub const FAN_STEP_DEGREES: u32 = 10;

/// Triangles in one piece (a full turn of `FAN_STEP_DEGREES` steps).
pub const FAN_TRIANGLES: u32 = 360 / FAN_STEP_DEGREES;

/// How much a rim vertex darkens per unit of shading factor.
pub const SHADING_LEVEL: f64 = 0.3;

/// Shading factor for a rim vertex: its vertical distance from the top of
/// the circle, in radii. `0` at the top, `2` at the bottom.
#[inline]
pub fn shading_factor(rim_y: f64, center_y: f64, radius: f64) -> f64 {
    (rim_y - (center_y + radius)).abs() / radius
}

/// Builds a piece as a triangle fan around `center`.
///
/// The center vertex keeps `base`; each rim vertex is darkened by
/// `SHADING_LEVEL * shading_factor`, without clamping, so channels near the
/// bottom can go below zero.
///
/// `radius` is not validated. A non-positive radius yields a degenerate mesh
/// (still `FAN_TRIANGLES` triangles) whose rim colors are meaningless.
pub fn build_piece(center: Vec2, base: Rgb, radius: f32) -> Mesh {
    let mut mesh = Mesh::with_triangle_capacity(FAN_TRIANGLES as usize);
    let hub = Vertex::new(center, base);

    for step in 0..FAN_TRIANGLES {
        let angle = step * FAN_STEP_DEGREES;
        mesh.push_triangle(
            hub,
            rim_vertex(center, base, radius, angle),
            rim_vertex(center, base, radius, angle + FAN_STEP_DEGREES),
        );
    }

    mesh
}

fn rim_vertex(center: Vec2, base: Rgb, radius: f32, degrees: u32) -> Vertex {
    let theta = f64::from(degrees).to_radians();
    let (cx, cy, r) = (f64::from(center.x), f64::from(center.y), f64::from(radius));

    let x = cx + theta.cos() * r;
    let y = cy + theta.sin() * r;
    let shade = SHADING_LEVEL * shading_factor(y, cy, r);

    Vertex::new(Vec2::new(x as f32, y as f32), base.darkened(shade as f32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::approx;

    const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);

    fn unit_piece() -> Mesh {
        build_piece(Vec2::zero(), RED, 0.1)
    }

    // ── structure ─────────────────────────────────────────────────────────

    #[test]
    fn fan_has_36_triangles() {
        let m = unit_piece();
        assert_eq!(m.len(), 108);
        assert_eq!(m.triangle_count(), 36);
    }

    #[test]
    fn hub_keeps_base_color() {
        for t in unit_piece().triangles() {
            assert_eq!(t[0].xy(), Vec2::zero());
            assert_eq!(t[0].rgb(), RED);
        }
    }

    #[test]
    fn rim_vertices_lie_on_the_circle() {
        let center = Vec2::new(0.375, -0.625);
        let m = build_piece(center, RED, 0.1);
        for t in m.triangles() {
            for v in &t[1..] {
                let d = v.xy() - center;
                assert!(approx((d.x * d.x + d.y * d.y).sqrt(), 0.1));
            }
        }
    }

    #[test]
    fn consecutive_triangles_share_a_rim_vertex() {
        let m = unit_piece();
        let tris: Vec<&[Vertex]> = m.triangles().collect();
        for pair in tris.windows(2) {
            assert_eq!(pair[0][2].xy(), pair[1][1].xy());
        }
        // The fan closes: the last edge ends where the first began.
        let first = tris[0][1].xy();
        let last = tris[35][2].xy();
        assert!(approx(first.x, last.x) && approx(first.y, last.y));
    }

    #[test]
    fn first_rim_vertex_is_at_zero_degrees() {
        let m = unit_piece();
        let v = m.vertices()[1].xy();
        assert!(approx(v.x, 0.1));
        assert!(approx(v.y, 0.0));
    }

    // ── shading ───────────────────────────────────────────────────────────

    #[test]
    fn shading_is_zero_at_top_and_two_at_bottom() {
        let r = 0.1f64;
        let top = (90f64).to_radians().sin() * r;
        let bottom = (270f64).to_radians().sin() * r;
        assert_eq!(shading_factor(top, 0.0, r), 0.0);
        assert!((shading_factor(bottom, 0.0, r) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn top_rim_vertex_is_unshaded() {
        let m = unit_piece();
        // Triangle 8 spans 80°..90°; its second rim vertex is the top.
        let top = m.triangles().nth(8).map(|t| t[2]);
        let top = top.map(|v| v.rgb());
        assert_eq!(top, Some(RED));
    }

    #[test]
    fn bottom_rim_vertex_is_fully_shaded() {
        let m = unit_piece();
        // Triangle 27 starts at 270°.
        let v = m.triangles().nth(27).map(|t| t[1]).map(|v| v.rgb());
        let Some(c) = v else { panic!("missing triangle") };
        assert!(approx(c.r, 0.4));
        assert!(approx(c.g, -0.6));
        assert!(approx(c.b, -0.6));
    }

    #[test]
    fn shading_grows_towards_the_bottom() {
        let m = unit_piece();
        let mut rim: Vec<Vertex> = m.triangles().map(|t| t[1]).collect();
        rim.sort_by(|a, b| b.xy().y.total_cmp(&a.xy().y));
        for pair in rim.windows(2) {
            assert!(pair[0].rgb().r >= pair[1].rgb().r - 1e-6);
        }
    }

    #[test]
    fn shading_does_not_depend_on_position() {
        let a = build_piece(Vec2::zero(), RED, 0.1);
        let b = build_piece(Vec2::new(-0.625, 0.875), RED, 0.1);
        for (va, vb) in a.vertices().iter().zip(b.vertices()) {
            let (ca, cb) = (va.rgb(), vb.rgb());
            assert!(approx(ca.r, cb.r) && approx(ca.g, cb.g) && approx(ca.b, cb.b));
        }
    }

    // ── edge cases ────────────────────────────────────────────────────────

    #[test]
    fn zero_radius_collapses_to_the_center() {
        let center = Vec2::new(0.5, 0.5);
        let m = build_piece(center, RED, 0.0);
        assert_eq!(m.len(), 108);
        assert!(m.vertices().iter().all(|v| v.xy() == center));
    }
}
