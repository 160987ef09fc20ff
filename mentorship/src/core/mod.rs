//! Core business logic modules
//!
//! Pure assignment planning and the lock table used to serialize
//! operations over the same entities. No I/O happens here.

pub mod locks;
pub mod transition;

pub use locks::{EntityKey, EntityLocks, LockSet};
pub use transition::{BatchPlan, Transition, TransitionKind, plan_assignment, plan_batch};
