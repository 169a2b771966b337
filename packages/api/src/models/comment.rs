use serde::{Deserialize, Serialize};

use super::{opt_string_or_number, string_or_number};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id_user: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id_exam: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
}
