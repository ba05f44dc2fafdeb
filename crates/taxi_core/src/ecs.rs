//! Fleet components and the per-vehicle trip state machine.

use std::fmt;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::spatial::GridPoint;

/// Stable vehicle identity, assigned once when the fleet is built.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Taxi-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleState {
    Idle,
    EnRouteToPickup,
    EnRouteToDropoff,
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleState::Idle => "idle",
            VehicleState::EnRouteToPickup => "en route to pickup",
            VehicleState::EnRouteToDropoff => "en route to dropoff",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Vehicle {
    pub id: VehicleId,
    pub state: VehicleState,
}

/// Vehicle position on the grid, in meters.
///
/// Randomized within bounds at fleet construction; movement afterwards is
/// steered only by waypoints and is not re-clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Position(pub GridPoint);

/// The trip a non-idle vehicle is working on.
///
/// Present iff the vehicle is not [`VehicleState::Idle`]; an idle vehicle has
/// no waypoint to drive toward, so the invariant "waypoint and destination
/// absent exactly when idle" is carried by component presence rather than by
/// nullable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Assignment {
    /// Where the vehicle is currently driving: pickup first, then dropoff.
    pub waypoint: GridPoint,
    /// The trip's final destination.
    pub dropoff: GridPoint,
}

/// A ride request: pickup and dropoff, nothing else. Value equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideRequest {
    pub pickup: GridPoint,
    pub dropoff: GridPoint,
}

/// Result of one arrival evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalOutcome {
    /// Not at the waypoint; nothing changed.
    NotArrived,
    /// Reached the pickup; now en route to the dropoff.
    PickupReached,
    /// Reached the dropoff; the vehicle is idle again and the caller must
    /// remove its [`Assignment`].
    TripCompleted,
}

impl Vehicle {
    pub fn new(id: VehicleId) -> Self {
        Self {
            id,
            state: VehicleState::Idle,
        }
    }

    /// Accepts a ride: Idle -> EnRouteToPickup, heading for the pickup.
    ///
    /// Returns the [`Assignment`] the caller must attach to the entity.
    /// Assigning a vehicle that is already on a trip breaks the state
    /// machine, so it is a programming error.
    pub fn assign(&mut self, request: &RideRequest) -> Assignment {
        debug_assert_eq!(
            self.state,
            VehicleState::Idle,
            "only an idle vehicle can accept a ride"
        );
        self.state = VehicleState::EnRouteToPickup;
        Assignment {
            waypoint: request.pickup,
            dropoff: request.dropoff,
        }
    }

    /// Evaluates arrival: transitions iff `position` equals the waypoint
    /// exactly (integer equality on both axes, no distance threshold).
    ///
    /// Repeated calls without movement in between are no-ops after the
    /// transition has fired, except for the legitimate zero-distance case
    /// where pickup and dropoff coincide and the second call completes the
    /// trip.
    ///
    /// # Panics
    ///
    /// Panics if the vehicle is idle: an idle vehicle has no waypoint, so an
    /// `Assignment` alongside an idle state means the invariant was broken.
    pub fn evaluate_arrival(
        &mut self,
        position: GridPoint,
        assignment: &mut Assignment,
    ) -> ArrivalOutcome {
        if position != assignment.waypoint {
            return ArrivalOutcome::NotArrived;
        }
        match self.state {
            VehicleState::EnRouteToPickup => {
                assignment.waypoint = assignment.dropoff;
                self.state = VehicleState::EnRouteToDropoff;
                ArrivalOutcome::PickupReached
            }
            VehicleState::EnRouteToDropoff => {
                self.state = VehicleState::Idle;
                ArrivalOutcome::TripCompleted
            }
            VehicleState::Idle => {
                panic!("arrival evaluated for an idle vehicle (no active trip)")
            }
        }
    }

    /// Ends the trip in place, wherever the vehicle currently stands.
    ///
    /// Used by the stochastic early-dropoff sweep; the position is
    /// deliberately not snapped to the dropoff. The caller must remove the
    /// vehicle's [`Assignment`].
    pub fn end_trip_early(&mut self) {
        debug_assert_eq!(
            self.state,
            VehicleState::EnRouteToDropoff,
            "only a trip en route to dropoff can end early"
        );
        self.state = VehicleState::Idle;
    }
}
