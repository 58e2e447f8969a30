//! Use cases - User story orchestration.

pub mod draw;

pub use draw::LotterySession;
