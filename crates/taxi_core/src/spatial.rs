//! Grid geometry: integer coordinates, Manhattan distance and the
//! axis-sequential movement rule.
//!
//! All coordinates are meters on a bounded square grid. Movement per tick is
//! capped by a single travel budget (speed x tick duration) that is spent on
//! the X axis first and only then, with whatever remains, on the Y axis, so
//! motion is never diagonal.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point on the grid, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`: |dx| + |dy|.
    pub fn manhattan_distance(&self, other: GridPoint) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// The square simulation area `[0, extent]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub extent: i64,
}

impl GridBounds {
    pub fn new(extent: i64) -> Self {
        debug_assert!(extent > 0, "grid extent must be positive");
        Self { extent }
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        (0..=self.extent).contains(&point.x) && (0..=self.extent).contains(&point.y)
    }

    pub fn clamp(&self, point: GridPoint) -> GridPoint {
        GridPoint {
            x: point.x.clamp(0, self.extent),
            y: point.y.clamp(0, self.extent),
        }
    }

    /// Uniformly random point within the bounds.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> GridPoint {
        GridPoint {
            x: rng.gen_range(0..=self.extent),
            y: rng.gen_range(0..=self.extent),
        }
    }

    /// Random destination near `origin`: a per-axis offset in
    /// `[-max_offset, max_offset]`, clamped back into the bounds.
    pub fn random_offset_point<R: Rng>(
        &self,
        rng: &mut R,
        origin: GridPoint,
        max_offset: i64,
    ) -> GridPoint {
        debug_assert!(max_offset >= 0, "offset range must be non-negative");
        let candidate = GridPoint {
            x: origin.x + rng.gen_range(-max_offset..=max_offset),
            y: origin.y + rng.gen_range(-max_offset..=max_offset),
        };
        self.clamp(candidate)
    }
}

/// Advances `from` toward `toward` with at most `budget_m` meters of travel.
///
/// The X axis is resolved first; the distance spent there is subtracted from
/// the budget before the Y axis is attempted. Total displacement therefore
/// never exceeds `budget_m`, even when the X leg lands exactly on the target.
pub fn drive_toward(from: GridPoint, toward: GridPoint, budget_m: i64) -> GridPoint {
    debug_assert!(budget_m >= 0, "travel budget must be non-negative");

    let mut remaining = budget_m;
    let mut position = from;

    let dx = toward.x - position.x;
    let step_x = remaining.min(dx.abs());
    position.x += step_x * dx.signum();
    remaining -= step_x;

    let dy = toward.y - position.y;
    let step_y = remaining.min(dy.abs());
    position.y += step_y * dy.signum();

    position
}
