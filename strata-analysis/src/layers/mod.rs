//! Layer classification and cross-layer violation checking.

pub mod classifier;
pub mod violations;

pub use classifier::{classify, LayerMatcher};
pub use violations::check_violations;
