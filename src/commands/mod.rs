//! CLI commands for verse-judge

pub mod dispatch;
pub mod evaluate;
pub mod rubrics;
