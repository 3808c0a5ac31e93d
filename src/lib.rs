//! # OR Models
//!
//! 作業研究決策支援模型：生產組合線性規劃、EOQ、M/M/1 排隊、損益平衡

pub mod logging;

pub use or_calc as calc;
pub use or_core as types;
pub use or_optimizer as optimizer;
pub use or_session as session;
