//! Alignment guides, snapping and batch alignment.
//!
//! Screen coordinates: x grows to the right, y grows downward, so "top" is
//! the smallest y.

use crate::model::{ElementBounds, LayerId};
use crate::transform::{Bounds, Position};
use pagecraft_core::constants::{DEFAULT_SNAP_THRESHOLD_PX, GEOMETRY_EPSILON};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// A line of constant x; snaps left, centre-x and right.
    Vertical,
    /// A line of constant y; snaps top, centre-y and bottom.
    Horizontal,
}

/// What produced a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineSource {
    CanvasCenter,
    ElementEdge,
    ElementCenter,
}

impl LineSource {
    /// Lower wins when two lines are equally close.
    pub fn priority(&self) -> u8 {
        match self {
            LineSource::CanvasCenter => 0,
            LineSource::ElementEdge => 1,
            LineSource::ElementCenter => 2,
        }
    }
}

/// A guide line the moving element can snap onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentLine {
    pub axis: Axis,
    pub position: f64,
    pub source: LineSource,
}

impl AlignmentLine {
    fn new(axis: Axis, position: f64, source: LineSource) -> Self {
        Self {
            axis,
            position,
            source,
        }
    }
}

/// Snapping options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Guides through the canvas centre.
    pub enable_canvas_center: bool,
    /// Guides along other elements' edges.
    pub enable_element_edge: bool,
    /// Guides through other elements' centres.
    pub enable_element_center: bool,
    /// Grid pitch in pixels; 0 disables the grid.
    pub grid_size: u32,
    /// Maximum distance at which a guide captures the element.
    pub snap_threshold_px: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            enable_canvas_center: true,
            enable_element_edge: true,
            enable_element_center: true,
            grid_size: 0,
            snap_threshold_px: DEFAULT_SNAP_THRESHOLD_PX,
        }
    }
}

/// Outcome of snapping one drag position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// Snapped left edge.
    pub left: f64,
    /// Snapped top edge.
    pub top: f64,
    /// Guides the snapped element now sits on, for rendering.
    pub active_lines: Vec<AlignmentLine>,
    /// Horizontal adjustment applied to the requested position.
    pub dx: f64,
    /// Vertical adjustment applied to the requested position.
    pub dy: f64,
}

impl SnapResult {
    pub fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }

    pub fn is_snapped(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }
}

/// Generates every enabled guide line, canvas lines first, then per element
/// in the order given.
pub fn candidate_lines(
    others: &[ElementBounds],
    canvas_width: f64,
    canvas_height: f64,
    config: &AlignmentConfig,
) -> Vec<AlignmentLine> {
    let mut lines = Vec::new();

    if config.enable_canvas_center {
        lines.push(AlignmentLine::new(
            Axis::Vertical,
            canvas_width / 2.0,
            LineSource::CanvasCenter,
        ));
        lines.push(AlignmentLine::new(
            Axis::Horizontal,
            canvas_height / 2.0,
            LineSource::CanvasCenter,
        ));
    }

    for other in others {
        let b = &other.bounds;
        if config.enable_element_edge {
            lines.push(AlignmentLine::new(Axis::Vertical, b.left, LineSource::ElementEdge));
            lines.push(AlignmentLine::new(Axis::Vertical, b.right(), LineSource::ElementEdge));
            lines.push(AlignmentLine::new(Axis::Horizontal, b.top, LineSource::ElementEdge));
            lines.push(AlignmentLine::new(Axis::Horizontal, b.bottom(), LineSource::ElementEdge));
        }
        if config.enable_element_center {
            lines.push(AlignmentLine::new(
                Axis::Vertical,
                b.center_x(),
                LineSource::ElementCenter,
            ));
            lines.push(AlignmentLine::new(
                Axis::Horizontal,
                b.center_y(),
                LineSource::ElementCenter,
            ));
        }
    }

    lines
}

struct Candidate {
    distance: f64,
    priority: u8,
    order: usize,
    coordinate: f64,
}

impl Candidate {
    fn cmp_rank(&self, other: &Candidate) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.priority.cmp(&other.priority))
            .then(self.order.cmp(&other.order))
    }
}

/// Snaps one axis. `start` is the element's leading coordinate (left or top)
/// and `extent` its size along the axis.
fn snap_axis(
    start: f64,
    extent: f64,
    lines: &[(usize, &AlignmentLine)],
    threshold: f64,
) -> Option<f64> {
    let offsets = [0.0, extent / 2.0, extent];
    let mut best: Option<Candidate> = None;

    for &(order, line) in lines {
        for offset in offsets {
            let distance = (start + offset - line.position).abs();
            if distance > threshold {
                continue;
            }
            let candidate = Candidate {
                distance,
                priority: line.source.priority(),
                order,
                coordinate: line.position - offset,
            };
            let better = match &best {
                Some(current) => candidate.cmp_rank(current) == Ordering::Less,
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }
    }

    best.map(|c| c.coordinate)
}

fn round_to_grid(value: f64, grid_size: u32) -> f64 {
    let grid = f64::from(grid_size);
    (value / grid).round() * grid
}

fn touches(line: &AlignmentLine, start: f64, extent: f64) -> bool {
    [start, start + extent / 2.0, start + extent]
        .iter()
        .any(|f| (f - line.position).abs() <= GEOMETRY_EPSILON)
}

/// Snaps a moving element against the canvas and the other elements.
///
/// On each axis the nearest line within the threshold wins; equal distances
/// go to canvas centre, then element edge, then element centre, then the
/// earliest generated line. An axis that snapped to no line is rounded to the
/// grid when one is configured. Elements sharing the moving element's id are
/// ignored.
pub fn calculate_snap(
    moving: &ElementBounds,
    others: &[ElementBounds],
    canvas_width: f64,
    canvas_height: f64,
    config: &AlignmentConfig,
) -> SnapResult {
    let others: Vec<ElementBounds> = others
        .iter()
        .filter(|o| o.id != moving.id)
        .cloned()
        .collect();
    let lines = candidate_lines(&others, canvas_width, canvas_height, config);
    let threshold = config.snap_threshold_px.max(0.0);
    let b = &moving.bounds;

    let vertical: Vec<(usize, &AlignmentLine)> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.axis == Axis::Vertical)
        .collect();
    let horizontal: Vec<(usize, &AlignmentLine)> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.axis == Axis::Horizontal)
        .collect();

    let snapped_left = snap_axis(b.left, b.width, &vertical, threshold);
    let snapped_top = snap_axis(b.top, b.height, &horizontal, threshold);

    let left = match snapped_left {
        Some(x) => x,
        None if config.grid_size > 0 => round_to_grid(b.left, config.grid_size),
        None => b.left,
    };
    let top = match snapped_top {
        Some(y) => y,
        None if config.grid_size > 0 => round_to_grid(b.top, config.grid_size),
        None => b.top,
    };

    let mut active_lines = Vec::new();
    if snapped_left.is_some() {
        active_lines.extend(
            vertical
                .iter()
                .filter(|(_, l)| touches(l, left, b.width))
                .map(|(_, l)| **l),
        );
    }
    if snapped_top.is_some() {
        active_lines.extend(
            horizontal
                .iter()
                .filter(|(_, l)| touches(l, top, b.height))
                .map(|(_, l)| **l),
        );
    }

    tracing::trace!(
        id = %moving.id,
        left,
        top,
        active = active_lines.len(),
        "snap computed"
    );

    SnapResult {
        left,
        top,
        active_lines,
        dx: left - b.left,
        dy: top - b.top,
    }
}

/// Batch alignment directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignDirection {
    Left,
    Right,
    /// Align horizontal centres.
    CenterHorizontal,
    Top,
    Bottom,
    /// Align vertical centres.
    CenterVertical,
    /// Centre every element horizontally on the canvas.
    CanvasCenterHorizontal,
    /// Centre every element vertically on the canvas.
    CanvasCenterVertical,
}

/// Computes new top-left positions that align `elements`.
///
/// Element-relative directions use the union of the elements' bounds;
/// canvas-relative ones use the canvas centre. Sizes and rotations are
/// untouched, only positions change.
pub fn align_elements(
    elements: &[ElementBounds],
    direction: AlignDirection,
    canvas_width: f64,
    canvas_height: f64,
) -> BTreeMap<LayerId, Position> {
    let mut positions = BTreeMap::new();
    let Some(union) = Bounds::union_all(elements.iter().map(|e| &e.bounds)) else {
        return positions;
    };

    for element in elements {
        let b = &element.bounds;
        let (left, top) = match direction {
            AlignDirection::Left => (union.left, b.top),
            AlignDirection::Right => (union.right() - b.width, b.top),
            AlignDirection::CenterHorizontal => (union.center_x() - b.width / 2.0, b.top),
            AlignDirection::Top => (b.left, union.top),
            AlignDirection::Bottom => (b.left, union.bottom() - b.height),
            AlignDirection::CenterVertical => (b.left, union.center_y() - b.height / 2.0),
            AlignDirection::CanvasCenterHorizontal => (canvas_width / 2.0 - b.width / 2.0, b.top),
            AlignDirection::CanvasCenterVertical => (b.left, canvas_height / 2.0 - b.height / 2.0),
        };
        positions.insert(element.id.clone(), Position::new(left, top));
    }

    positions
}

/// Directions for [`distribute_elements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeDirection {
    /// Equal horizontal gaps.
    Horizontal,
    /// Equal vertical gaps.
    Vertical,
}

/// Spaces elements so the gaps between neighbours are equal.
///
/// The two extremal elements stay put. Needs at least three elements;
/// otherwise returns an empty map.
pub fn distribute_elements(
    elements: &[ElementBounds],
    direction: DistributeDirection,
) -> BTreeMap<LayerId, Position> {
    let mut positions = BTreeMap::new();
    if elements.len() < 3 {
        return positions;
    }

    let start = |b: &Bounds| match direction {
        DistributeDirection::Horizontal => b.left,
        DistributeDirection::Vertical => b.top,
    };
    let extent = |b: &Bounds| match direction {
        DistributeDirection::Horizontal => b.width,
        DistributeDirection::Vertical => b.height,
    };

    let mut sorted: Vec<&ElementBounds> = elements.iter().collect();
    sorted.sort_by(|a, b| start(&a.bounds).total_cmp(&start(&b.bounds)));

    let first = &sorted[0].bounds;
    let last = &sorted[sorted.len() - 1].bounds;
    let span = start(last) + extent(last) - start(first);
    let occupied: f64 = sorted.iter().map(|e| extent(&e.bounds)).sum();
    let gap = (span - occupied) / (sorted.len() - 1) as f64;

    let mut cursor = start(first);
    for element in sorted {
        let b = &element.bounds;
        let position = match direction {
            DistributeDirection::Horizontal => Position::new(cursor, b.top),
            DistributeDirection::Vertical => Position::new(b.left, cursor),
        };
        positions.insert(element.id.clone(), position);
        cursor += extent(b) + gap;
    }

    positions
}
