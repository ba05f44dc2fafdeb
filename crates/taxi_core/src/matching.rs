//! Dispatcher state and nearest-idle-vehicle search.
//!
//! Matching is greedy and single-pass: requests are considered strictly in
//! arrival order and each consumes the idle vehicle nearest to *its* pickup.
//! This is not a global minimum-cost assignment; a later request can take the
//! vehicle an earlier request would have preferred if that earlier request
//! matched elsewhere first. That behavior is deliberate and tested.

use std::collections::VecDeque;

use bevy_ecs::prelude::{Entity, Resource};

use crate::ecs::{RideRequest, VehicleId};
use crate::spatial::GridPoint;

/// Requests waiting for a vehicle, in arrival order.
///
/// Unbounded and without expiry: a request with no free vehicle stays queued
/// until one frees up.
#[derive(Debug, Default, Resource)]
pub struct PendingRequests(pub VecDeque<RideRequest>);

impl PendingRequests {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An idle vehicle available for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleCandidate {
    pub entity: Entity,
    pub id: VehicleId,
    pub position: GridPoint,
}

/// Returns the index of the candidate nearest to `pickup` by Manhattan
/// distance, or `None` if the slice is empty.
///
/// Ties go to the first candidate encountered; callers pass candidates in
/// `VehicleId` order so the tie-break is stable across runs.
pub fn find_nearest_idle(pickup: GridPoint, candidates: &[IdleCandidate]) -> Option<usize> {
    let mut nearest: Option<(usize, i64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = candidate.position.manhattan_distance(pickup);
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((index, distance)),
        }
    }
    nearest.map(|(index, _)| index)
}
