use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET /projects`. Anything without `data.data` fails to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsEnvelope {
    pub data: ProjectsPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsPage {
    pub data: Vec<RawProject>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    #[serde(deserialize_with = "string_or_number")]
    pub project_id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub field_id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field_value_label: String,
}

/// Display-ready projection of a [`RawProject`]. Missing fields are "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedProject {
    pub project_id: String,
    pub project_name: String,
    pub implementation_manager: String,
    pub project_manager: String,
    pub current_status: String,
    pub scope_of_work: String,
}

impl SimplifiedProject {
    pub fn scope_items(&self) -> Vec<String> {
        crate::projects::fields::split_scope(&self.scope_of_work)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Uint(n) => n.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
