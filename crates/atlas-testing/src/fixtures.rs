//! Sample countries and GraphQL response bodies.

use atlas_types::{CountriesData, Country};

/// A trimmed capture of the live service, including its `null` values.
pub const SAMPLE_RESPONSE: &str = r#"{
  "data": {
    "countries": [
      {
        "code": "AD",
        "name": "Andorra",
        "capital": "Andorra la Vella",
        "currency": "EUR",
        "languages": [{ "name": "Catalan" }],
        "continent": { "name": "Europe" }
      },
      {
        "code": "AQ",
        "name": "Antarctica",
        "capital": null,
        "currency": null,
        "languages": [],
        "continent": { "name": "Antarctica" }
      },
      {
        "code": "CH",
        "name": "Switzerland",
        "capital": "Bern",
        "currency": "CHE,CHF,CHW",
        "languages": [
          { "name": "German" },
          { "name": "French" },
          { "name": "Italian" }
        ],
        "continent": { "name": "Europe" }
      }
    ]
  }
}"#;

/// The worked example: empty capital, one language.
pub fn united_states() -> Country {
    Country::new("US", "United States", "North America")
        .with_currency("USD")
        .with_language("English")
}

pub fn sample_countries() -> Vec<Country> {
    vec![
        Country::new("AD", "Andorra", "Europe")
            .with_capital("Andorra la Vella")
            .with_currency("EUR")
            .with_language("Catalan"),
        Country::new("AQ", "Antarctica", "Antarctica"),
        Country::new("CH", "Switzerland", "Europe")
            .with_capital("Bern")
            .with_currency("CHE,CHF,CHW")
            .with_language("German")
            .with_language("French")
            .with_language("Italian"),
    ]
}

/// Successful response body carrying `countries`.
pub fn countries_response(countries: &[Country]) -> String {
    serde_json::json!({
        "data": CountriesData::new(countries.to_vec())
    })
    .to_string()
}

/// Response body carrying only GraphQL errors.
pub fn errors_response(messages: &[&str]) -> String {
    let errors: Vec<serde_json::Value> = messages
        .iter()
        .map(|message| serde_json::json!({ "message": message }))
        .collect();
    serde_json::json!({ "errors": errors }).to_string()
}

/// Response body with neither data nor errors.
pub const EMPTY_RESPONSE: &str = r#"{"data":null}"#;
