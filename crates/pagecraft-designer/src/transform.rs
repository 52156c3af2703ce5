//! Move, scale and rotate arithmetic.
//!
//! Everything here is a pure function over plain values. Callers validate a
//! requested change with [`is_valid_transform`] before applying it; the
//! arithmetic itself never clamps.

use pagecraft_core::{DesignerError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// A translation in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    /// Creates a new delta.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Returns true when the delta does not move anything.
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Self::Output {
        Delta::new(-self.dx, -self.dy)
    }
}

/// Top-left position of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Axis-aligned rectangle in canvas pixels. `top` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Creates new bounds from the top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Bounds::new(left, top, right - left, bottom - top)
    }

    /// Union of every bounds in the iterator, `None` when it is empty.
    pub fn union_all<'a>(bounds: impl IntoIterator<Item = &'a Bounds>) -> Option<Bounds> {
        bounds
            .into_iter()
            .fold(None, |acc: Option<Bounds>, b| match acc {
                Some(u) => Some(u.union(b)),
                None => Some(*b),
            })
    }
}

/// Horizontal and vertical scale multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ScaleFactors {
    pub fn new(scale_x: f64, scale_y: f64) -> Self {
        Self { scale_x, scale_y }
    }
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Full transform of a placed element.
///
/// `width`/`height` are the intrinsic size before scaling. Rotation is in
/// degrees around the element's centre and always lies in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    #[serde(default)]
    pub angle: f64,
}

fn one() -> f64 {
    1.0
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Transform {
    /// Creates an unscaled, unrotated transform.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
        }
    }

    pub fn scale_factors(&self) -> ScaleFactors {
        ScaleFactors::new(self.scale_x, self.scale_y)
    }

    /// Width after scaling.
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Height after scaling.
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Axis-aligned bounds of the scaled and rotated element.
    pub fn bounds(&self) -> Bounds {
        let w = self.scaled_width();
        let h = self.scaled_height();
        if self.angle == 0.0 {
            return Bounds::new(self.left, self.top, w, h);
        }

        let theta = self.angle.to_radians();
        let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
        let rotated_w = w * cos + h * sin;
        let rotated_h = w * sin + h * cos;
        let cx = self.left + w / 2.0;
        let cy = self.top + h / 2.0;
        Bounds::new(
            cx - rotated_w / 2.0,
            cy - rotated_h / 2.0,
            rotated_w,
            rotated_h,
        )
    }

    /// Returns a copy translated by `delta`.
    pub fn translated(&self, delta: Delta) -> Transform {
        Transform {
            left: self.left + delta.dx,
            top: self.top + delta.dy,
            ..*self
        }
    }

    /// Applies a validated partial update.
    pub fn apply(&self, partial: &TransformPartial) -> Result<Transform> {
        if !is_valid_transform(partial) {
            return Err(DesignerError::invalid_transform(partial.describe_violation()));
        }
        Ok(Transform {
            left: partial.left.unwrap_or(self.left),
            top: partial.top.unwrap_or(self.top),
            width: partial.width.unwrap_or(self.width),
            height: partial.height.unwrap_or(self.height),
            scale_x: partial.scale_x.unwrap_or(self.scale_x),
            scale_y: partial.scale_y.unwrap_or(self.scale_y),
            angle: partial.angle.map_or(self.angle, |a| rotate(a, 0.0)),
        })
    }
}

/// A transform update where every field is optional.
///
/// Unspecified fields are left untouched and never validated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformPartial {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub angle: Option<f64>,
}

impl TransformPartial {
    /// Partial that only sets the position.
    pub fn position(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            ..Self::default()
        }
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true when only `left`/`top` are set.
    pub fn is_translation_only(&self) -> bool {
        self.width.is_none()
            && self.height.is_none()
            && self.scale_x.is_none()
            && self.scale_y.is_none()
            && self.angle.is_none()
    }

    fn describe_violation(&self) -> String {
        let mut reasons = Vec::new();
        if self.scale_x.is_some_and(|s| s <= 0.0) {
            reasons.push("scale_x must be > 0");
        }
        if self.scale_y.is_some_and(|s| s <= 0.0) {
            reasons.push("scale_y must be > 0");
        }
        if self.width.is_some_and(|w| w < 0.0) {
            reasons.push("width must be >= 0");
        }
        if self.height.is_some_and(|h| h < 0.0) {
            reasons.push("height must be >= 0");
        }
        reasons.join(", ")
    }
}

/// Translates bounds by `delta`.
pub fn move_by(bounds: Bounds, delta: Delta) -> Bounds {
    Bounds {
        left: bounds.left + delta.dx,
        top: bounds.top + delta.dy,
        ..bounds
    }
}

/// Multiplies both scale factors by `k`.
///
/// The caller ensures `k > 0`; the result is not clamped.
pub fn scale(factors: ScaleFactors, k: f64) -> ScaleFactors {
    ScaleFactors::new(factors.scale_x * k, factors.scale_y * k)
}

/// Adds `delta` degrees to `angle`, normalised into `[0, 360)`.
pub fn rotate(angle: f64, delta: f64) -> f64 {
    let r = (angle + delta).rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Rejects any specified scale `<= 0` and any specified negative width/height.
pub fn is_valid_transform(partial: &TransformPartial) -> bool {
    let positive = |v: Option<f64>| v.is_none_or(|v| v > 0.0);
    let non_negative = |v: Option<f64>| v.is_none_or(|v| v >= 0.0);

    positive(partial.scale_x)
        && positive(partial.scale_y)
        && non_negative(partial.width)
        && non_negative(partial.height)
}
