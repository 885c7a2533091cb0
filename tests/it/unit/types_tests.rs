//! Unit tests for core types.

use crate::helpers::region;
use regionboard::types::{PixelPoint, Region, RegionKind, Rgba, Vec2};

#[test]
fn test_default_kind_is_first_declared() {
    assert_eq!(RegionKind::default(), RegionKind::ALL[0]);
}

#[test]
fn test_kind_names_round_trip() {
    for kind in RegionKind::ALL {
        assert_eq!(RegionKind::from_name(kind.as_str()), Some(*kind));
        assert_eq!(kind.to_string(), kind.as_str());
        assert_eq!(
            serde_json::to_string(kind).unwrap(),
            format!("\"{}\"", kind.as_str())
        );
    }
    assert_eq!(RegionKind::from_name("lava"), None);
}

#[test]
fn test_kind_slots() {
    assert_eq!(RegionKind::from_slot(0), None);
    assert_eq!(RegionKind::from_slot(1), Some(RegionKind::Solid));
    assert_eq!(RegionKind::from_slot(2), Some(RegionKind::Platform));
    assert_eq!(RegionKind::from_slot(3), Some(RegionKind::Ladder));
    assert_eq!(RegionKind::from_slot(RegionKind::ALL.len() + 1), None);
}

#[test]
fn test_kind_colors_are_distinct() {
    for (i, a) in RegionKind::ALL.iter().enumerate() {
        for b in &RegionKind::ALL[i + 1..] {
            assert_ne!(a.color(), b.color());
        }
    }
}

#[test]
fn test_from_corners_is_order_independent() {
    let a = PixelPoint::new(3, 9);
    let b = PixelPoint::new(-2, 4);
    assert_eq!(
        Region::from_corners(a, b, RegionKind::Solid),
        Region::from_corners(b, a, RegionKind::Solid)
    );
    assert_eq!(
        Region::from_corners(a, b, RegionKind::Solid),
        region(-2, 4, 6, 6, RegionKind::Solid)
    );
}

#[test]
fn test_from_corners_full_axis_saturates() {
    // 2^32 pixels do not fit in u32
    let region = Region::from_corners(
        PixelPoint::new(i32::MIN, 0),
        PixelPoint::new(i32::MAX, 0),
        RegionKind::Solid,
    );
    assert_eq!(region.x, i32::MIN);
    assert_eq!(region.width, u32::MAX);
    assert_eq!(region.height, 1);
}

#[test]
fn test_region_contains_is_inclusive() {
    let r = region(2, 2, 4, 5, RegionKind::Solid);
    assert_eq!(r.max_corner(), PixelPoint::new(5, 6));
    assert!(r.contains(PixelPoint::new(2, 2)));
    assert!(r.contains(PixelPoint::new(5, 6)));
    assert!(!r.contains(PixelPoint::new(6, 6)));
    assert!(!r.contains(PixelPoint::new(1, 3)));
}

#[test]
fn test_vec2_ops() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(0.5, -1.0);
    assert_eq!(a + b, Vec2::new(1.5, 1.0));
    assert_eq!(a - b, Vec2::new(0.5, 3.0));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
    assert_eq!(a.scale(2.0), Vec2::new(2.0, 4.0));
    assert_eq!(PixelPoint::new(3, -4).to_world(), Vec2::new(3.0, -4.0));
}

#[test]
fn test_rgba_alpha_is_clamped() {
    let c = Rgba::rgb(0.1, 0.2, 0.3);
    assert_eq!(c.a, 1.0);
    assert_eq!(c.with_alpha(2.0).a, 1.0);
    assert_eq!(c.with_alpha(-1.0).a, 0.0);
    assert_eq!(c.with_alpha(0.5).r, 0.1);
}
