//! Book record definition.

use serde::{Deserialize, Serialize};

/// A book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identifier. Ignored on creation requests.
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub author: String,
    pub publication: String,
}
