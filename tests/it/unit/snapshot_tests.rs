//! Snapshot tests for the persisted wire format, using insta.
//!
//! The stored text is read by a separate game runtime, so any change to it
//! must show up here. To update after an intentional change:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::region;
use regionboard::board::RegionSnapshot;
use regionboard::persistence::codec::encode;
use regionboard::types::RegionKind;

#[test]
fn snapshot_single_region_text() {
    let snapshot = RegionSnapshot::new(vec![region(2, 2, 4, 5, RegionKind::Solid)]);
    insta::assert_snapshot!(
        encode(&snapshot).unwrap(),
        @r#"{"rects":[{"x":2,"y":2,"width":4,"height":5,"type":"solid"}]}"#
    );
}

#[test]
fn snapshot_every_kind_text() {
    let snapshot = RegionSnapshot::new(vec![
        region(0, 0, 16, 16, RegionKind::Solid),
        region(-8, 32, 48, 2, RegionKind::Platform),
        region(64, 0, 4, 80, RegionKind::Ladder),
    ]);
    insta::assert_snapshot!(
        encode(&snapshot).unwrap(),
        @r#"{"rects":[{"x":0,"y":0,"width":16,"height":16,"type":"solid"},{"x":-8,"y":32,"width":48,"height":2,"type":"platform"},{"x":64,"y":0,"width":4,"height":80,"type":"ladder"}]}"#
    );
}

#[test]
fn snapshot_region_json() {
    let region = region(10, 20, 30, 40, RegionKind::Ladder);
    insta::assert_json_snapshot!(region, @r#"
    {
      "x": 10,
      "y": 20,
      "width": 30,
      "height": 40,
      "type": "ladder"
    }
    "#);
}
