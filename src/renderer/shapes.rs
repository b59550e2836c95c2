//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in field pixel coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::font;
use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Segments used for ellipses; plenty for a 20px ball
pub const ELLIPSE_SEGMENTS: u32 = 32;

/// Two triangles covering `rect`
pub fn quad(rect: &Rect, color: Color, out: &mut Vec<Vertex>) {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    out.extend_from_slice(&[
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]);
}

/// Triangle fan approximating the ellipse inscribed in `rect`
pub fn ellipse(rect: &Rect, color: Color, segments: u32, out: &mut Vec<Vertex>) {
    let center = rect.center();
    let radii = Vec2::new(rect.width / 2.0, rect.height / 2.0);
    let point = |i: u32| {
        let theta = i as f32 / segments as f32 * TAU;
        center + Vec2::new(theta.cos(), theta.sin()) * radii
    };

    out.reserve(segments as usize * 3);
    for i in 0..segments {
        let p1 = point(i);
        let p2 = point(i + 1);
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
        out.push(Vertex::new(p2.x, p2.y, color));
    }
}

/// One quad per lit font pixel. Unknown characters advance but draw nothing.
pub fn text(s: &str, pos: Vec2, scale: f32, color: Color, out: &mut Vec<Vertex>) {
    let mut x = pos.x;
    for c in s.chars() {
        if let Some(g) = font::glyph(c) {
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if font::lit(g, col, row) {
                        let px = Rect::new(
                            x + col as f32 * scale,
                            pos.y + row as f32 * scale,
                            scale,
                            scale,
                        );
                        quad(&px, color, out);
                    }
                }
            }
        }
        x += font::GLYPH_ADVANCE as f32 * scale;
    }
}
