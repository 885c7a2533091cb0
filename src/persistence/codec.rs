//! Region set <-> JSON text.
//!
//! The current schema is
//!
//! ```text
//! { "rects": [ { "x": 0, "y": 0, "width": 1, "height": 1, "type": "solid" }, ... ] }
//! ```
//!
//! [`encode`] always writes it. [`decode`] also reads the two older layouts:
//! a bare array of untyped rects, and an object with separate `solids` and
//! `platforms` arrays. Untyped rects get the first declared kind. Older saves
//! could hold negative extents; those are normalized to the top-left corner.
//! Undo in the old editor left `null` holes in the untyped array; those
//! entries are skipped.
//!
//! Decoding is pure: callers replace live state only on `Ok`.

use crate::board::RegionSnapshot;
use crate::persistence::error::{ParseError, PersistenceError, PersistenceResult};
use crate::types::{Region, RegionKind};
use serde::Deserialize;
use serde_json::Value;

pub fn encode(snapshot: &RegionSnapshot) -> PersistenceResult<String> {
    serde_json::to_string(snapshot).map_err(PersistenceError::Encode)
}

pub fn decode(text: &str) -> Result<RegionSnapshot, ParseError> {
    let value: Value = serde_json::from_str(text)?;

    let raw: Vec<(RawRect, RegionKind)> = match Layout::detect(&value)? {
        Layout::Current => {
            let layout: CurrentLayout = serde_json::from_value(value)?;
            layout.rects.into_iter().map(TypedRect::split).collect()
        }
        Layout::Split => {
            let layout: SplitLayout = serde_json::from_value(value)?;
            let solids = layout.solids.into_iter().map(|r| (r, RegionKind::Solid));
            let platforms = layout.platforms.into_iter().map(|r| (r, RegionKind::Platform));
            solids.chain(platforms).collect()
        }
        Layout::Untyped => {
            let rects: Vec<Option<RawRect>> = serde_json::from_value(value)?;
            rects
                .into_iter()
                .flatten()
                .map(|r| (r, RegionKind::default()))
                .collect()
        }
    };

    let rects = raw
        .into_iter()
        .enumerate()
        .map(|(index, (rect, kind))| rect.into_region(index, kind))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RegionSnapshot::new(rects))
}

// ============================================================================
// Wire shapes
// ============================================================================

enum Layout {
    Current,
    Split,
    Untyped,
}

impl Layout {
    fn detect(value: &Value) -> Result<Self, ParseError> {
        match value {
            Value::Object(map) if map.contains_key("rects") => Ok(Self::Current),
            Value::Object(map) if map.contains_key("solids") || map.contains_key("platforms") => {
                Ok(Self::Split)
            }
            Value::Object(_) => Err(ParseError::Schema(
                "object without a \"rects\" array".to_string(),
            )),
            Value::Array(_) => Ok(Self::Untyped),
            Value::Null => Err(ParseError::Schema("null".to_string())),
            Value::Bool(_) => Err(ParseError::Schema("boolean".to_string())),
            Value::Number(_) => Err(ParseError::Schema("number".to_string())),
            Value::String(_) => Err(ParseError::Schema("string".to_string())),
        }
    }
}

/// Rect as stored, before normalization. Unknown fields (old `id`) are ignored.
#[derive(Deserialize)]
struct RawRect {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

#[derive(Deserialize)]
struct TypedRect {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    #[serde(rename = "type")]
    kind: RegionKind,
}

impl TypedRect {
    fn split(self) -> (RawRect, RegionKind) {
        let rect = RawRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        };
        (rect, self.kind)
    }
}

#[derive(Deserialize)]
struct CurrentLayout {
    rects: Vec<TypedRect>,
}

#[derive(Deserialize)]
struct SplitLayout {
    #[serde(default)]
    solids: Vec<RawRect>,
    #[serde(default)]
    platforms: Vec<RawRect>,
}

impl RawRect {
    fn into_region(self, index: usize, kind: RegionKind) -> Result<Region, ParseError> {
        let (x, width) = normalize_axis(index, self.x, self.width, "width")?;
        let (y, height) = normalize_axis(index, self.y, self.height, "height")?;
        Ok(Region {
            x,
            y,
            width,
            height,
            kind,
        })
    }
}

/// Turn an origin/extent pair into a start pixel and positive extent.
///
/// A negative extent covers `origin + extent .. origin`. Both the start and
/// the last covered pixel must fit in `i32`.
fn normalize_axis(
    index: usize,
    origin: i64,
    extent: i64,
    axis: &'static str,
) -> Result<(i32, u32), ParseError> {
    if extent == 0 {
        return Err(ParseError::Degenerate { index, axis });
    }
    let start = if extent < 0 {
        origin.checked_add(extent)
    } else {
        Some(origin)
    };
    let start = start
        .and_then(|s| i32::try_from(s).ok())
        .ok_or(ParseError::OutOfRange { index })?;
    let length = u32::try_from(extent.unsigned_abs()).map_err(|_| ParseError::OutOfRange { index })?;
    let last = i64::from(start) + i64::from(length) - 1;
    if last > i64::from(i32::MAX) {
        return Err(ParseError::OutOfRange { index });
    }
    Ok((start, length))
}
