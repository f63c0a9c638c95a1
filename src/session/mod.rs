//! The cooperative render scheduler and its cancellation token.

mod scheduler;
mod token;

pub use scheduler::{RenderRequest, RenderScheduler, SchedulerConfig, TurnStatus};
pub use token::RenderToken;
