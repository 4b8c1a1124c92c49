//! CLI Commands

use clap::Args;
use maxarea_common::Limits;

pub mod compute;
pub mod serve;

/// Limit overrides shared by every command
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct LimitArgs {
    /// Largest accepted height
    #[arg(long, env = "MAXAREA_MAX_HEIGHT", global = true)]
    pub max_height: Option<u32>,

    /// Largest accepted number of heights
    #[arg(long, env = "MAXAREA_MAX_LEN", global = true)]
    pub max_len: Option<usize>,
}

impl LimitArgs {
    pub fn apply(&self, mut limits: Limits) -> Limits {
        if let Some(max_height) = self.max_height {
            limits.max_height = max_height;
        }
        if let Some(max_len) = self.max_len {
            limits.max_len = max_len;
        }
        limits
    }
}
