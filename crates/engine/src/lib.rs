//! LuckyDraw Engine library.
//!
//! Draw orchestration on top of the pure `luckydraw-domain` crate.
//!
//! ## Structure
//!
//! - `use_cases/` - The draw session state machine
//! - `infrastructure/` - Ports, their adapters, configuration and tracing
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use infrastructure::config::DrawConfig;
pub use use_cases::draw::{
    DrawError, DrawOutcome, DrawPhase, DrawPorts, DrawSnapshot, LotterySession, ZoneView,
};
