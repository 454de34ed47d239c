//! The two named generation strategies.
//!
//! | Strategy | Guarantee |
//! |----------|-----------|
//! | `exact_partition` | Every set's six cards partition 1–90 exactly |
//! | `independent` | Card-level rules only; no cross-card coverage |
//!
//! Both produce cards that satisfy the per-card tombola rules (15 numbers,
//! 5 per row, column ranges, ascending columns). Callers pick a strategy via
//! [`GenerationStrategy`](crate::card_engine::models::GenerationStrategy).

pub mod exact_partition;
pub mod independent;
