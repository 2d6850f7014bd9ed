//! GEO search facade.
//!
//! Each search is an ESearch call followed by one ESummary call over the
//! identifiers it returned. The calls run strictly in order; if the search
//! fails, no summary request is made.

use serde_json::Value;

use crate::client::Eutils;
use crate::error::ClientResult;
use crate::models::Collection;

/// Identifiers at `esearchresult.idlist` of an ESearch response.
///
/// Missing levels yield an empty list. Numeric entries are rendered as
/// text; other non-string entries are skipped.
#[must_use]
pub fn extract_id_list(search_result: &Value) -> Vec<String> {
    search_result
        .get("esearchresult")
        .and_then(|r| r.get("idlist"))
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| match id {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Search `collection` for `term` and summarize the matching records.
pub async fn search_collection<E>(
    api: &E,
    collection: Collection,
    term: &str,
    max_results: u32,
) -> ClientResult<Value>
where
    E: Eutils + ?Sized,
{
    let db = collection.as_str();
    let search_result = api.search(db, term, max_results).await?;
    let ids = extract_id_list(&search_result);

    tracing::info!(db, term, hits = ids.len(), "GEO search complete");
    api.summarize(db, &ids).await
}

/// Search GEO Profiles (`geoprofiles`).
pub async fn search_profiles<E>(api: &E, term: &str, max_results: u32) -> ClientResult<Value>
where
    E: Eutils + ?Sized,
{
    search_collection(api, Collection::GeoProfiles, term, max_results).await
}

/// Search GEO DataSets (`gds`).
pub async fn search_datasets<E>(api: &E, term: &str, max_results: u32) -> ClientResult<Value>
where
    E: Eutils + ?Sized,
{
    search_collection(api, Collection::DataSets, term, max_results).await
}
