//! Custom assertions over `atlas --format json` output.
//!
//! The page JSON looks like `{ "title", "subtitle", "body": { "state", ... } }`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the page body is in the given state (`loading`, `failed`, `empty`, `ready`, `fault`).
pub fn assert_page_state(json: &Value, expected: &str) -> Result<()> {
    let state = json["body"]["state"]
        .as_str()
        .context("Expected 'body.state' string in JSON")?;

    if state != expected {
        anyhow::bail!("Expected page state '{}', got '{}'", expected, state);
    }

    Ok(())
}

/// Assert the page renders exactly `expected` cards.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = json["body"]["cards"]
        .as_array()
        .context("Expected 'body.cards' array in JSON")?;

    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }

    Ok(())
}

/// Card codes in render order.
pub fn card_codes(json: &Value) -> Result<Vec<String>> {
    let cards = json["body"]["cards"]
        .as_array()
        .context("Expected 'body.cards' array in JSON")?;

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            card["code"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Card {} missing code", i))
        })
        .collect()
}
