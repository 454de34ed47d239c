//! Core card engine — column pools, layout rules, and set generation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: grid, cards, sets, request/config, errors |
//! | `pools`      | Column number ranges and shuffled 1–90 column pools |
//! | `layout`     | Row placement, row-count repair, column re-sorting |
//! | `checks`     | Structural rule verification for cards and sets |
//! | `generator`  | Entry point `generate_card_sets()` — validates and dispatches |
//! | `strategies` | The two generation strategies (exact partition, independent) |

pub mod checks;
pub mod generator;
pub mod layout;
pub mod models;
pub mod pools;
pub mod strategies;

// Re-export the public API surface so callers can use
// `card_engine::generate_card_sets` without reaching into sub-modules.
pub use generator::{generate_card_sets, generate_card_sets_with_rng};
pub use models::{
    Card, CardSet, GenerateError, GenerateRequest, GenerationStrategy, GeneratorConfig, Grid,
};
