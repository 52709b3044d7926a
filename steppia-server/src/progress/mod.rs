//! 进度追踪 - 里程碑步骤与冒险地图

pub mod tracker;

pub use tracker::{MAP_LENGTH, Milestone, ProgressSnapshot, current_step, evaluate, map_position};
