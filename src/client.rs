use crate::error::Result;
use crate::models::{Drink, SearchResponse};

/// Free-text cocktail search, the only endpoint this application talks to.
pub const SEARCH_ENDPOINT: &str = "https://www.thecocktaildb.com/api/json/v1/1/search.php";

/// Search the external recipe API for drinks matching `query`.
///
/// Issues one GET with the query URL-encoded into the `s` parameter and maps
/// the response into normalized [`Drink`]s, in response order. A `drinks: null`
/// body (no matches) maps to an empty list. Network and decode failures
/// surface as errors; callers are expected to degrade to an empty result
/// rather than abort.
pub async fn search_drinks(http: &reqwest::Client, query: &str) -> Result<Vec<Drink>> {
    let response: SearchResponse = http
        .get(SEARCH_ENDPOINT)
        .query(&[("s", query)])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response.into_drinks())
}
