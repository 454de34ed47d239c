//! Side-by-side comparison of the two generation strategies.
//!
//! Run with: `cargo run --example strategies`
//!
//! Both strategies produce legal cards (15 numbers, 5 per row, column
//! ranges, ascending columns). The difference shows up at the set level:
//! exact partition covers 1-90 with no repeats, independent sampling
//! does not.

use std::collections::HashSet;

use tombola_card_gen::{
    generate_card_sets, GenerateRequest, GenerationStrategy, GeneratorConfig,
};

fn coverage_report(strategy: GenerationStrategy, seed: u64) {
    let request = GenerateRequest {
        sets: 1,
        strategy,
        rng_seed: Some(seed),
    };
    let sets = generate_card_sets(&request, &GeneratorConfig::default())
        .expect("1 set is within bounds");

    let mut seen: HashSet<u8> = HashSet::new();
    let mut duplicates = 0usize;
    for card in &sets[0].cards {
        for n in card.numbers() {
            if !seen.insert(n) {
                duplicates += 1;
            }
        }
    }
    let missing = (1..=90u8).filter(|n| !seen.contains(n)).count();

    println!("  {strategy}");
    println!("    distinct numbers: {:>2}/90", seen.len());
    println!("    duplicates across cards: {duplicates}");
    println!("    numbers never drawn: {missing}");
    println!();
}

fn main() {
    env_logger::init();

    println!();
    println!("══ Set-level coverage, one set per strategy (seed = 99) ══");
    println!();
    coverage_report(GenerationStrategy::ExactPartition, 99);
    coverage_report(GenerationStrategy::IndependentSampling, 99);

    println!("Exact partition is the default: a real tombola evening needs");
    println!("every number on somebody's card. Independent sampling matches");
    println!("the older single-card generator and is kept for deployments");
    println!("that depend on its output shape.");
}
