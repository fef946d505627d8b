use atlas_types::*;

const SAMPLE: &str = r#"{
  "countries": [
    {
      "code": "AD",
      "name": "Andorra",
      "capital": "Andorra la Vella",
      "currency": "EUR",
      "languages": [{ "name": "Catalan" }],
      "continent": { "name": "Europe", "code": "EU" },
      "emoji": "🇦🇩"
    },
    {
      "code": "AQ",
      "name": "Antarctica",
      "capital": null,
      "currency": null,
      "languages": [],
      "continent": { "name": "Antarctica" }
    }
  ]
}"#;

#[test]
fn test_decode_keeps_order_and_ignores_extra_fields() -> anyhow::Result<()> {
    let countries = CountriesData::from_json(SAMPLE)?.countries.unwrap_or_default();

    let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["AD", "AQ"]);
    assert_eq!(countries[0].continent.name, "Europe");
    assert_eq!(countries[0].languages, vec![Language::new("Catalan")]);

    Ok(())
}

#[test]
fn test_decode_normalizes_absent_values() -> anyhow::Result<()> {
    let countries = CountriesData::from_json(SAMPLE)?.countries.unwrap_or_default();
    let antarctica = &countries[1];

    assert!(antarctica.capital.is_empty());
    assert!(antarctica.currency.is_empty());
    assert!(antarctica.languages.is_empty());

    Ok(())
}

#[test]
fn test_null_languages_decode_as_empty_list() -> anyhow::Result<()> {
    let json = r#"{"countries":[{"code":"ZZ","name":"Z","languages":null,"continent":{"name":"Asia"}}]}"#;
    let countries = CountriesData::from_json(json)?.countries.unwrap_or_default();
    assert!(countries[0].languages.is_empty());
    Ok(())
}

#[test]
fn test_malformed_payload_is_an_error() {
    let err = CountriesData::from_json(r#"{"countries": 3}"#).unwrap_err();
    assert!(err.to_string().starts_with("JSON error:"));
}
