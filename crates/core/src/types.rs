/// Item identifiers are opaque strings assigned by the ingestion process.
pub type ItemOid = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
