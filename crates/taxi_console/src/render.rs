//! Text rendering of per-tick snapshots. The format is for humans watching
//! the console; nothing in the core depends on it.

use std::fmt::Write;

use taxi_core::ecs::RideRequest;
use taxi_core::telemetry::SimSnapshot;

fn km(meters: i64) -> f64 {
    meters as f64 / 1000.0
}

fn render_request(request: &RideRequest) -> String {
    format!(
        "Ride from ({:.1}Km, {:.1}Km) to ({:.1}Km, {:.1}Km)",
        km(request.pickup.x),
        km(request.pickup.y),
        km(request.dropoff.x),
        km(request.dropoff.y),
    )
}

pub fn render_text(snapshot: &SimSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "--- Tick {} ({} s) ---",
        snapshot.tick, snapshot.elapsed_secs
    );

    let _ = writeln!(out, "Order queue:");
    if snapshot.pending.is_empty() {
        let _ = writeln!(out, "Empty");
    } else {
        for request in &snapshot.pending {
            let _ = writeln!(out, "{}", render_request(request));
        }
    }

    let _ = writeln!(out, "Taxi locations:");
    for vehicle in &snapshot.vehicles {
        let _ = writeln!(
            out,
            "{}: {:.1}Km, {:.1}Km ({})",
            vehicle.id,
            km(vehicle.position.x),
            km(vehicle.position.y),
            vehicle.state,
        );
    }
    out
}
