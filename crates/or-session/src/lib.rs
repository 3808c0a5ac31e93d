//! # OR Session
//!
//! 呈現層協作介面：輸入狀態、髒標記追蹤與增量重新計算

pub mod dirty_tracking;
pub mod session;
pub mod sink;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use session::{EvaluationOutcome, EvaluationRecord, ModelSession};
pub use sink::{RecordingSink, RenderEvent, RenderSink, Series};
