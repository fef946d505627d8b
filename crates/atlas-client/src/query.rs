use atlas_types::CountriesData;

use crate::operation::{EmptyVariables, GraphqlOperation};

/// Public endpoint of the countries service
pub const COUNTRIES_ENDPOINT: &str = "https://countries.trevorblades.com/graphql";

/// Every country with the fields a card displays, and nothing else.
pub struct CountriesQuery;

impl GraphqlOperation for CountriesQuery {
    type Variables = EmptyVariables;
    type ResponseData = CountriesData;

    const QUERY: &'static str = "query GetCountries {
  countries {
    code
    name
    capital
    currency
    languages {
      name
    }
    continent {
      name
    }
  }
}
";
    const OPERATION_NAME: &'static str = "GetCountries";
}
