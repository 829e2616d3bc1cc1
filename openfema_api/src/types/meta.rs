use serde::{Deserialize, Serialize};

use super::DisasterDeclarationsElement;

/// Response envelope for the Disaster Declarations Summaries v2 endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct DisasterDeclarationsV2 {
    pub metadata: MetaData,

    #[serde(rename = "DisasterDeclarationsSummaries", default)]
    pub disaster_declaration_summaries: Vec<DisasterDeclarationsElement>,
}

/// Pagination and provenance metadata returned alongside every result set.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct MetaData {
    pub skip: i64,

    pub top: i64,

    pub count: i64,

    pub filter: Option<String>,

    pub format: Option<String>,

    pub select: Option<Vec<String>>,

    pub entityname: String,

    // Older captures of this endpoint key the version as "v2".
    #[serde(alias = "v2")]
    pub version: String,

    pub url: String,

    pub rundate: String,
}
