//! Drawing, mode selection and undo through the event router.

use crate::helpers::{
    assert_region_count, draw, key, key_with, move_to, region, right_click, run, session,
    TestSessionBuilder,
};
use regionboard::input::{dispatch, EditorEvent, Key, Modifiers, PointerButton};
use regionboard::types::{PixelPoint, RegionKind, Vec2};

#[test]
fn test_two_clicks_commit_one_region() {
    let mut session = session();

    assert!(dispatch(&mut session, right_click(10.0, 20.0)));
    assert_eq!(session.board.anchor(), Some(PixelPoint::new(10, 20)));
    assert_region_count(&session.board, 0);

    assert!(dispatch(&mut session, right_click(14.0, 22.0)));
    assert_eq!(session.board.anchor(), None);
    assert_eq!(
        session.board.regions(),
        &[region(10, 20, 5, 3, RegionKind::Solid)]
    );
}

#[test]
fn test_clicks_snap_to_nearest_pixel() {
    let mut session = session();
    draw(&mut session, (9.6, 20.4), (13.5, 22.49));

    assert_eq!(
        session.board.regions(),
        &[region(10, 20, 5, 3, RegionKind::Solid)]
    );
}

#[test]
fn test_draw_at_non_unit_zoom() {
    let mut session = TestSessionBuilder::new()
        .centered_on(100.0, 100.0)
        .with_zoom(2.0)
        .build();

    // Viewport center is (400, 300); each world pixel spans two viewport pixels
    run(&mut session, [right_click(400.9, 299.4), right_click(410.0, 320.0)]);

    assert_eq!(
        session.board.regions(),
        &[region(100, 100, 6, 11, RegionKind::Solid)]
    );
}

#[test]
fn test_mode_keys_stamp_kind_on_commit() {
    let mut session = session();
    run(&mut session, [key('2')]);
    draw(&mut session, (0.0, 0.0), (1.0, 1.0));
    run(&mut session, [key('3')]);
    draw(&mut session, (5.0, 5.0), (6.0, 6.0));

    let kinds: Vec<_> = session.board.regions().iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![RegionKind::Platform, RegionKind::Ladder]);
}

#[test]
fn test_unbound_digit_keeps_mode() {
    let mut session = session();
    run(&mut session, [key('3')]);
    assert!(!dispatch(&mut session, key('9')));
    assert_eq!(session.board.mode(), RegionKind::Ladder);
}

#[test]
fn test_mode_switch_mid_draw_applies_to_commit() {
    let mut session = session();
    run(
        &mut session,
        [right_click(0.0, 0.0), key('2'), right_click(3.0, 3.0)],
    );
    assert_eq!(session.board.regions()[0].kind, RegionKind::Platform);
}

#[test]
fn test_escape_cancels_pending_anchor() {
    let mut session = session();
    run(&mut session, [right_click(10.0, 10.0)]);

    assert!(dispatch(&mut session, key_with(Key::Escape, Modifiers::NONE)));
    assert_eq!(session.board.anchor(), None);

    // Next click starts a fresh draw instead of committing
    run(&mut session, [right_click(50.0, 50.0)]);
    assert_region_count(&session.board, 0);
    assert_eq!(session.board.anchor(), Some(PixelPoint::new(50, 50)));

    // Nothing left to cancel after a commit
    run(&mut session, [right_click(51.0, 51.0)]);
    assert!(!dispatch(&mut session, key_with(Key::Escape, Modifiers::NONE)));
    assert_region_count(&session.board, 1);
}

#[test]
fn test_ctrl_z_removes_newest_region() {
    let mut session = session();
    draw(&mut session, (0.0, 0.0), (1.0, 1.0));
    draw(&mut session, (10.0, 10.0), (11.0, 11.0));

    // Plain z is unbound
    assert!(!dispatch(&mut session, key('z')));
    assert_region_count(&session.board, 2);

    let undo = key_with(Key::Char('z'), Modifiers::CONTROL);
    assert!(dispatch(&mut session, undo));
    assert_eq!(
        session.board.regions(),
        &[region(0, 0, 2, 2, RegionKind::Solid)]
    );

    assert!(dispatch(&mut session, undo));
    assert!(!dispatch(&mut session, undo));
    assert_region_count(&session.board, 0);
}

#[test]
fn test_undo_keeps_pending_anchor() {
    let mut session = session();
    draw(&mut session, (0.0, 0.0), (1.0, 1.0));
    run(
        &mut session,
        [
            right_click(20.0, 20.0),
            key_with(Key::Char('z'), Modifiers::CONTROL),
        ],
    );
    assert_region_count(&session.board, 0);
    assert_eq!(session.board.anchor(), Some(PixelPoint::new(20, 20)));
}

#[test]
fn test_shift_r_clears_everything() {
    let mut session = session();
    draw(&mut session, (0.0, 0.0), (1.0, 1.0));
    run(&mut session, [right_click(5.0, 5.0)]);

    // Unshifted r does nothing
    assert!(!dispatch(&mut session, key('r')));
    assert_region_count(&session.board, 1);

    run(&mut session, [key_with(Key::Char('r'), Modifiers::SHIFT)]);
    assert_region_count(&session.board, 0);
    assert_eq!(session.board.anchor(), None);
}

#[test]
fn test_other_buttons_do_not_draw() {
    let mut session = session();
    for button in [PointerButton::Primary, PointerButton::Middle] {
        let redraw = dispatch(
            &mut session,
            EditorEvent::PointerDown {
                button,
                position: Vec2::new(5.0, 5.0),
            },
        );
        assert!(!redraw);
    }
    assert_eq!(session.board.anchor(), None);
    assert_eq!(session.pointer(), Vec2::new(5.0, 5.0));
}

#[test]
fn test_pointer_tracking_feeds_preview() {
    let mut session = session();
    run(&mut session, [right_click(10.0, 10.0), move_to(4.0, 13.0)]);

    assert_eq!(session.pointer_pixel(), PixelPoint::new(4, 13));
    assert_eq!(
        session.board.preview(session.pointer_pixel()),
        Some(region(4, 10, 7, 4, RegionKind::Solid))
    );
}
