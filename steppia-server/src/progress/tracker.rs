//! Progress Tracker
//!
//! Pure functions over a [`ProgressSnapshot`] loaded fresh for every call.
//! No high-water mark is stored: deleting the only work log moves the
//! step back down.

use std::collections::BTreeMap;

use shared::models::{MilestoneStatus, ProgressView};

/// Number of cells on the adventure map
pub const MAP_LENGTH: u32 = 30;

/// Facts about one user, read from the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub has_profile: bool,
    pub application_count: i64,
    pub work_log_count: i64,
    pub consult_count: i64,
    pub booking_count: i64,
}

/// Ordered milestones; position in [`Milestone::ALL`] + 1 is the step index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    HasProfile,
    HasApplied,
    HasWorkLog,
    HasConsulted,
    HasBooking,
}

impl Milestone {
    pub const ALL: [Milestone; 5] = [
        Milestone::HasProfile,
        Milestone::HasApplied,
        Milestone::HasWorkLog,
        Milestone::HasConsulted,
        Milestone::HasBooking,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Milestone::HasProfile => "has_profile",
            Milestone::HasApplied => "has_applied",
            Milestone::HasWorkLog => "has_work_log",
            Milestone::HasConsulted => "has_consulted",
            Milestone::HasBooking => "has_booking",
        }
    }

    pub fn reached(&self, s: &ProgressSnapshot) -> bool {
        match self {
            Milestone::HasProfile => s.has_profile,
            Milestone::HasApplied => s.application_count > 0,
            Milestone::HasWorkLog => s.work_log_count > 0,
            Milestone::HasConsulted => s.consult_count > 0,
            Milestone::HasBooking => s.booking_count > 0,
        }
    }
}

/// Highest 1-based step whose milestone holds; 1 when none does.
///
/// Milestones are not required to be reached in order.
pub fn current_step(snapshot: &ProgressSnapshot) -> u32 {
    Milestone::ALL
        .iter()
        .enumerate()
        .filter(|(_, m)| m.reached(snapshot))
        .map(|(i, _)| i as u32 + 1)
        .max()
        .unwrap_or(1)
}

/// Adventure map cell: one step per work log, capped at the goal
pub fn map_position(work_log_count: i64) -> u32 {
    let pos = work_log_count.max(0).saturating_add(1);
    pos.min(MAP_LENGTH as i64) as u32
}

/// Full progress view for the client
pub fn evaluate(snapshot: &ProgressSnapshot) -> ProgressView {
    let milestones: Vec<MilestoneStatus> = Milestone::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| MilestoneStatus {
            step: i as u32 + 1,
            key: m.key().to_string(),
            reached: m.reached(snapshot),
        })
        .collect();

    let predicates: BTreeMap<String, bool> = milestones
        .iter()
        .map(|m| (m.key.clone(), m.reached))
        .collect();

    let position = map_position(snapshot.work_log_count);

    ProgressView {
        current_step: current_step(snapshot),
        total_steps: Milestone::ALL.len() as u32,
        milestones,
        predicates,
        work_log_count: snapshot.work_log_count,
        map_position: position,
        map_length: MAP_LENGTH,
        goal_reached: position == MAP_LENGTH,
    }
}
