//! # tombola_card_gen
//!
//! An in-memory generator for Italian tombola (bingo) cards.
//!
//! A card is a 3×9 grid holding 15 numbers from 1–90: five per row, each
//! column restricted to its traditional sub-range (1–9, 10–19, …, 80–90),
//! ascending top-to-bottom within a column. Cards come in sets of six; under
//! the default strategy the six cards of a set together cover every number
//! from 1 to 90 exactly once.
//!
//! ## How it works
//!
//! 1. Build a [`GenerateRequest`] with a set count, a strategy, and an
//!    optional RNG seed.
//! 2. Call [`generate_card_sets`] with a [`GeneratorConfig`] — the engine
//!    shuffles 1–90 into nine column pools, shares each pool out over the
//!    six cards, places every card's numbers into rows, and repairs the row
//!    counts to five per row.
//! 3. The returned [`CardSet`]s are plain data, ready to serialize or hand
//!    to [`client_adapter`] for the browser payload.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same batch every time — useful for tests and print reruns.
//! - **Two strategies**: `ExactPartition` (default, full 1–90 coverage per
//!   set) and `IndependentSampling` (each card drawn on its own, matching
//!   the older single-card generator).
//! - **All-or-nothing**: invalid counts are rejected up front and every set
//!   is structurally verified before the batch is returned.
//!
//! ## Quick start
//!
//! ```rust
//! use tombola_card_gen::{generate_card_sets, GenerateRequest, GeneratorConfig};
//!
//! // Minimal — defaults: exact partition, entropy seed:
//! let sets = generate_card_sets(&GenerateRequest::new(2), &GeneratorConfig::default())
//!     .expect("2 is within bounds");
//! assert_eq!(sets.len(), 2);
//! assert_eq!(sets[0].cards.len(), 6);
//!
//! // Full control — set every field:
//! let request = GenerateRequest {
//!     sets: 1,
//!     strategy: tombola_card_gen::GenerationStrategy::ExactPartition,
//!     rng_seed: Some(42),
//! };
//! let sets = generate_card_sets(&request, &GeneratorConfig { max_sets: 25 }).unwrap();
//! println!("{}", sets[0].cards[0]);
//! ```

pub mod card_engine;
pub mod client_adapter;

// Convenience re-exports so callers can use `tombola_card_gen::generate_card_sets`
// directly without reaching into `card_engine::`.
pub use card_engine::{
    generate_card_sets, generate_card_sets_with_rng, Card, CardSet, GenerateError,
    GenerateRequest, GenerationStrategy, GeneratorConfig, Grid,
};
