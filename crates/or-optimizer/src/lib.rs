//! # OR Optimizer
//!
//! 優化算法模組（生產組合線性規劃）

pub mod lp;
pub mod production;

// Re-export 主要類型
pub use lp::{LinearProgram, LpStatus, ObjectiveSense};
pub use production::ProductionOptimizer;
