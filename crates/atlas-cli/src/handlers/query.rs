use anyhow::Result;
use atlas_client::{CountriesQuery, EmptyVariables, GraphqlOperation, GraphqlRequest};

use super::HandlerContext;

/// Print the document sent to the endpoint, or the whole request body as JSON.
pub fn handle(ctx: &HandlerContext) -> Result<()> {
    if ctx.is_json() {
        let request = GraphqlRequest::for_operation::<CountriesQuery>(EmptyVariables {});
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        print!("{}", CountriesQuery::QUERY);
    }
    Ok(())
}
