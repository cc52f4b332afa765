use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common::lenient_string;

/// Employee as supplied by the directory, already filtered to active staff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
}

impl Employee {
    pub fn new(id: Uuid, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
        }
    }
}
