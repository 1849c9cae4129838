//! Property-based tests for the rendering state machine.
//!
//! These use proptest to generate random call sequences and verify the
//! state-machine invariants hold regardless of what a sketch does between
//! the calls under test.

use cyto::rendering::{RENDERER_CANVAS, Renderer, Surface};
use proptest::prelude::*;

fn canvas(size: u32) -> Renderer {
    Renderer::with_surface(RENDERER_CANVAS, Surface::new(size, size).unwrap())
}

/// A randomly generated path operation.
#[derive(Debug, Clone)]
enum PathOp {
    Begin,
    Move(f32, f32),
    Line(f32, f32),
    Quad(f32, f32, f32, f32),
    Close,
}

fn path_op() -> impl Strategy<Value = PathOp> {
    let coord = -64.0f32..64.0f32;
    prop_oneof![
        Just(PathOp::Begin),
        (coord.clone(), coord.clone()).prop_map(|(x, y)| PathOp::Move(x, y)),
        (coord.clone(), coord.clone()).prop_map(|(x, y)| PathOp::Line(x, y)),
        (coord.clone(), coord.clone(), coord.clone(), coord)
            .prop_map(|(cx, cy, x, y)| PathOp::Quad(cx, cy, x, y)),
        Just(PathOp::Close),
    ]
}

fn apply(r: &mut Renderer, op: &PathOp) {
    match *op {
        PathOp::Begin => r.begin_path(),
        PathOp::Move(x, y) => r.move_to(x, y),
        PathOp::Line(x, y) => r.line_to(x, y),
        PathOp::Quad(cx, cy, x, y) => r.quadratic_curve_to(cx, cy, x, y),
        PathOp::Close => r.close_path(),
    }
}

// ============================================================================
// Stickiness invariant
// ============================================================================

/// Property: after `fill_with(c)`, any number of path operations and bare
/// `fill()` calls later (no `no_fill` in between), the effective fill color
/// is still `c` — both as reported by the getter and as committed to the
/// live context.
proptest! {
    #[test]
    fn prop_fill_color_is_sticky(ops in prop::collection::vec(path_op(), 0..40), (red, green, blue) in (0u8.., 0u8.., 0u8..)) {
        let token = format!("#{:02x}{:02x}{:02x}", red, green, blue);
        let mut r = canvas(64);
        r.fill_with(token.clone());

        for op in &ops {
            apply(&mut r, op);
        }
        r.fill();

        prop_assert!(r.is_fill_enabled());
        let fill_color = r.fill_color();
        prop_assert_eq!(fill_color.as_deref(), Some(token.as_str()));
        prop_assert_eq!(r.context_mut().unwrap().fill_style(), token.as_str());
    }
}

// ============================================================================
// Gate invariant
// ============================================================================

/// Property: after `no_stroke()`, no sequence of path operations and bare
/// `stroke()` calls touches a single pixel.
proptest! {
    #[test]
    fn prop_disabled_stroke_never_paints(ops in prop::collection::vec(path_op(), 0..30)) {
        let mut r = canvas(32);
        r.set_stroke_color("#ffffff");
        r.no_stroke();

        for op in &ops {
            apply(&mut r, op);
            r.stroke();
        }

        let pixmap = r.surface().unwrap().pixmap();
        for y in 0..32 {
            for x in 0..32 {
                prop_assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0);
            }
        }
    }
}

/// Property: the enable flags depend only on the last enabling/disabling
/// call, never on path operations.
proptest! {
    #[test]
    fn prop_gate_follows_last_toggle(ops in prop::collection::vec(path_op(), 0..20), enable in any::<bool>()) {
        let mut r = canvas(16);
        if enable {
            r.set_stroke_enabled(true);
            r.fill_with("#808080");
        } else {
            r.no_stroke();
            r.no_fill();
        }

        for op in &ops {
            apply(&mut r, op);
        }

        prop_assert_eq!(r.is_stroke_enabled(), enable);
        prop_assert_eq!(r.is_fill_enabled(), enable);
    }
}

// ============================================================================
// Save/restore
// ============================================================================

/// Property: restores never underflow past balance, and a balanced
/// save/restore pair reinstates the paint attributes exactly.
proptest! {
    #[test]
    fn prop_save_restore_balance(saves in 0usize..8, extra_restores in 0usize..8, width in 1.0f32..32.0f32) {
        let mut r = canvas(8);
        r.set_line_width(width);

        for _ in 0..saves {
            r.save();
            r.set_line_width(width + 1.0);
        }
        for _ in 0..(saves + extra_restores) {
            r.restore();
        }

        // All saves popped, extra restores ignored.
        prop_assert_eq!(r.context_mut().unwrap().save_depth(), 0);
        prop_assert_eq!(r.line_width(), width);
    }
}

// ============================================================================
// Surface invariant
// ============================================================================

/// Property: logical size equals physical size after every resize.
proptest! {
    #[test]
    fn prop_logical_tracks_physical(sizes in prop::collection::vec((1u32..256, 1u32..256), 1..6)) {
        let mut r = canvas(8);
        for (w, h) in sizes {
            r.set_size(w, h);
            let surface = r.surface().unwrap();
            prop_assert_eq!(surface.size(), (w, h));
            prop_assert_eq!(surface.logical_size(), surface.size());
        }
    }
}

// ============================================================================
// Inert instances
// ============================================================================

/// Property: an unsupported renderer type yields an instance on which any
/// call sequence is a no-op — never a panic.
proptest! {
    #[test]
    fn prop_inert_renderer_never_panics(kind in "[a-z]{1,8}", ops in prop::collection::vec(path_op(), 0..20)) {
        prop_assume!(kind != "canvas");
        let mut r = Renderer::with_surface(&kind, Surface::new(8, 8).unwrap());
        prop_assert!(!r.is_active());

        for op in &ops {
            apply(&mut r, op);
            r.stroke();
            r.fill();
        }
        r.apply_background("#123456");
        r.clear();
        r.save();
        r.restore();
        r.set_size(99, 99);

        prop_assert_eq!(r.size(), (0, 0));
        prop_assert!(r.error().is_some());
    }
}
