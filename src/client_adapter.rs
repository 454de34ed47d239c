//! Payload builder for the browser client.
//!
//! The web front end renders sets ("giocatori") as arrays of card objects
//! with camelCase fields and `null` for empty cells, wrapped in a
//! `{ success, giocatori }` envelope. This module keeps that wire shape in
//! one place so the library types stay snake_case.

use serde_json::{json, Value};

use crate::card_engine::models::{Card, CardSet};

/// One card as the client expects it: `id`, `setNumber`, `cardNumber`,
/// `grid` (3×9, row-major, `null` for empty cells).
fn card_payload(card: &Card) -> Value {
    json!({
        "id": card.id,
        "setNumber": card.set_number,
        "cardNumber": card.card_number,
        "grid": card.grid,
    })
}

/// One set as a plain array of its six cards.
fn set_payload(set: &CardSet) -> Value {
    Value::Array(set.cards.iter().map(card_payload).collect())
}

/// The full success envelope for a generation response.
pub fn to_client_response(sets: &[CardSet]) -> Value {
    json!({
        "success": true,
        "giocatori": sets.iter().map(set_payload).collect::<Vec<_>>(),
    })
}

/// The error envelope the client shows as an alert.
pub fn to_client_error(message: &str) -> Value {
    json!({ "error": message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_engine::{generate_card_sets, GenerateRequest, GeneratorConfig};

    fn one_set() -> Vec<CardSet> {
        let request = GenerateRequest {
            rng_seed: Some(7),
            ..GenerateRequest::new(1)
        };
        generate_card_sets(&request, &GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn envelope_has_success_flag_and_one_giocatore() {
        let payload = to_client_response(&one_set());
        assert_eq!(payload["success"], json!(true));
        assert_eq!(payload["giocatori"].as_array().unwrap().len(), 1);
        assert_eq!(payload["giocatori"][0].as_array().unwrap().len(), 6);
    }

    #[test]
    fn card_payload_uses_camel_case_and_nulls() {
        let sets = one_set();
        let card = &payload_card(&sets);
        assert_eq!(card["id"], json!(1));
        assert_eq!(card["setNumber"], json!(1));
        assert_eq!(card["cardNumber"], json!(1));

        let grid = card["grid"].as_array().unwrap();
        assert_eq!(grid.len(), 3);
        let mut nulls = 0;
        let mut numbers = 0;
        for row in grid {
            let cells = row.as_array().unwrap();
            assert_eq!(cells.len(), 9);
            for cell in cells {
                if cell.is_null() {
                    nulls += 1;
                } else {
                    assert!(cell.as_u64().unwrap() >= 1);
                    numbers += 1;
                }
            }
        }
        assert_eq!(numbers, 15);
        assert_eq!(nulls, 12);
    }

    fn payload_card(sets: &[CardSet]) -> Value {
        to_client_response(sets)["giocatori"][0][0].clone()
    }
}
