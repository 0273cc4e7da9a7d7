use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One record from the remote `logs` collection, projected down to the
/// fields the dashboard renders. Read-only and ephemeral, the remote
/// owns the data.
///
/// Empty strings from the remote are projected to `None` so consumers
/// only have one kind of "missing" to deal with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
}
