// ============================================================================
// Interfaces Module
// Contains all trait definitions shared by the fixed-point families
// ============================================================================

mod classify;
mod storage;
mod wide;

pub use classify::{is_fixed_point, is_integral, Classify};
pub use storage::{Base, Real, Scalar};
pub use wide::{WideType, Widen};
