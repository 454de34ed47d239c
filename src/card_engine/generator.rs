use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::card_engine::{
    checks,
    models::{CardSet, GenerateError, GenerateRequest, GenerationStrategy, GeneratorConfig},
    strategies,
};

/// Core entry point: validate the request, seed the RNG, generate one set
/// per unit.
///
/// All-or-nothing: every set is structurally verified before anything is
/// returned, so callers never see partial or malformed output.
pub fn generate_card_sets(
    request: &GenerateRequest,
    config: &GeneratorConfig,
) -> Result<Vec<CardSet>, GenerateError> {
    if request.sets == 0 || request.sets > config.max_sets {
        return Err(GenerateError::InvalidCount {
            requested: request.sets,
            max: config.max_sets,
        });
    }

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_card_sets_with_rng(&mut rng, request.sets, request.strategy)
}

/// Same as [`generate_card_sets`], minus validation and seeding, for callers
/// that inject their own randomness source.
pub fn generate_card_sets_with_rng<R: Rng>(
    rng: &mut R,
    sets: u32,
    strategy: GenerationStrategy,
) -> Result<Vec<CardSet>, GenerateError> {
    debug!("generating {sets} card sets ({strategy})");

    let mut out = Vec::with_capacity(sets as usize);
    for set_number in 1..=sets {
        let cards = match strategy {
            GenerationStrategy::ExactPartition => {
                strategies::exact_partition::generate_set(rng, set_number)
            }
            GenerationStrategy::IndependentSampling => {
                strategies::independent::generate_set(rng, set_number)
            }
        };
        let set = CardSet { set_number, cards };

        // Coverage is only part of the exact-partition contract.
        match strategy {
            GenerationStrategy::ExactPartition => checks::verify_set(&set),
            GenerationStrategy::IndependentSampling => checks::verify_cards(&set),
        }
        .map_err(GenerateError::Corrupt)?;

        out.push(set);
    }

    debug!("generated {} card sets", out.len());
    Ok(out)
}
