//! End-to-end demo of the tombola card generator.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows:
//!
//! 1. **Minimal API** — `GenerateRequest::new(sets)` with defaults
//!    (exact partition, entropy seed).
//! 2. **Deterministic batch** — a fixed seed reproduces the same six cards
//!    every run; the cards are printed as box-drawn frames ready for a
//!    terminal or a print sheet.
//! 3. **Coverage check** — the six cards of a set tick off every number
//!    from 1 to 90 exactly once.
//! 4. **Client payload** — the JSON envelope the browser front end consumes.

use tombola_card_gen::{
    client_adapter, generate_card_sets, GenerateRequest, GeneratorConfig,
};

fn main() {
    env_logger::init();
    let config = GeneratorConfig::default();

    // ── Minimal API ────────────────────────────────────────────────────────
    println!();
    println!("══ Minimal API: GenerateRequest::new() ══");
    println!();
    let sets = generate_card_sets(&GenerateRequest::new(2), &config)
        .expect("2 sets is within bounds");
    println!("  Generated {} sets of {} cards each", sets.len(), sets[0].cards.len());
    println!();

    // ── Deterministic batch ────────────────────────────────────────────────
    println!("══ One seeded set (rng_seed = 2026) ══");
    println!();
    let request = GenerateRequest {
        rng_seed: Some(2026),
        ..GenerateRequest::new(1)
    };
    let sets = generate_card_sets(&request, &config).expect("1 set is within bounds");
    let set = &sets[0];

    for card in &set.cards {
        println!("  Card #{:03}  (set {}, position {})", card.id, card.set_number, card.card_number);
        for line in card.to_string().lines() {
            println!("  {line}");
        }
        println!();
    }

    // ── Coverage check ─────────────────────────────────────────────────────
    println!("══ Coverage: every number 1-90 appears exactly once ══");
    println!();
    let mut all: Vec<u8> = set.cards.iter().flat_map(|c| c.numbers()).collect();
    all.sort_unstable();
    println!("  {} numbers drawn, first {:?}, last {:?}", all.len(), &all[..5], &all[85..]);
    println!();

    // ── Client payload ─────────────────────────────────────────────────────
    println!("══ Client payload (first card only) ══");
    println!();
    let payload = client_adapter::to_client_response(&sets);
    println!(
        "  {}",
        serde_json::to_string_pretty(&payload["giocatori"][0][0]).unwrap()
    );
}
