use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ESearch API response structures

/// ESearch returns `{"esearchresult": {...}}`. Both levels are optional so a
/// response missing the expected path deserializes to an empty id list.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(default)]
    pub esearchresult: Option<ESearchData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR", deserialize_with = "lenient_string")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub count: Option<String>,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub idlist: Option<Vec<String>>,
}

// ESummary API response structures

/// ESummary returns a JSON object with "result" containing a "uids" array and
/// per-UID objects. The per-UID keys are dynamic, so "result" stays a `Value`
/// and documents are looked up by the requested identifiers.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESummaryResponse {
    #[serde(default)]
    pub result: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESummaryAuthor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub affiliation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESummaryDocSum {
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pubdate: Option<String>,
    #[serde(default, deserialize_with = "lenient_authors")]
    pub authors: Vec<ESummaryAuthor>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub corresponding_author_email: Option<String>,
}

/// Accept strings and numbers as text; anything else (including `null`) is absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Id lists keep string and numeric entries; a non-array value is absent
fn lenient_ids<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
    ))
}

/// Author lists that are not arrays degrade to empty; non-object entries are skipped
fn lenient_authors<'de, D>(deserializer: D) -> Result<Vec<ESummaryAuthor>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
