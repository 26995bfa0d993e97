//! JSON shapes exchanged with the record store endpoint.

use crate::models::{Entry, RowNumber};
use serde::{Deserialize, Serialize};

/// `GET ?date=...&username=...`
#[derive(Debug, Deserialize)]
pub struct FetchResponse {
    pub ok: bool,
    #[serde(default)]
    pub entry: Option<Entry>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET ?action=list&username=...&limit=...`
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub ok: bool,
    #[serde(default)]
    pub entries: Option<Vec<Entry>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST` with the entry and username as the body.
#[derive(Debug, Deserialize)]
pub struct UpsertResponse {
    pub ok: bool,
    #[serde(rename = "rowNumber", default)]
    pub row_number: Option<RowNumber>,
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpsertRequest<'a> {
    #[serde(flatten)]
    pub entry: &'a Entry,
    pub username: &'a str,
}
