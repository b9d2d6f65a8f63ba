use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata recorded when a table link is minted.
///
/// Nothing is persisted server-side; callers that want to honor a
/// freshness budget later must carry `issued_at` themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableLinkMetadata {
    /// The identifier of the table in the external registry.
    pub table_id: String,
    /// The identifier of the restaurant location.
    pub location_id: String,
    /// The human-facing table number.
    pub table_number: i32,
    /// The random code embedded in the link.
    pub code: String,
    /// The timestamp when the link was minted.
    pub issued_at: DateTime<Utc>,
}

/// A freshly minted, shareable table link.
#[derive(Debug, Clone, Serialize)]
pub struct TableLink {
    /// The full deep-link URL.
    pub url: String,
    /// The bare random code.
    pub code: String,
    /// The minting metadata.
    pub metadata: TableLinkMetadata,
}
