//! Progress tracker models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    /// 1-based position
    pub step: u32,
    pub key: String,
    pub reached: bool,
}

/// Progress view returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressView {
    pub current_step: u32,
    pub total_steps: u32,
    pub milestones: Vec<MilestoneStatus>,
    pub predicates: BTreeMap<String, bool>,
    pub work_log_count: i64,
    /// Adventure map cell (1-based)
    pub map_position: u32,
    pub map_length: u32,
    pub goal_reached: bool,
}
