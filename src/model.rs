use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Description used when the user leaves the field empty.
pub const DEFAULT_DESCRIPTION: &str = "Custom mixed color";

/// A user-saved pairing of a background and an element color.
///
/// Field names serialize in camelCase (backgroundColor, elementColor,
/// dateCreated) so stored records keep the established key names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorCombination {
    pub id: String,
    pub name: String,
    pub background_color: String,
    pub element_color: String,
    pub description: String,
    pub date_created: DateTime<Utc>,
}

impl ColorCombination {
    /// New combination with a fresh id and the current timestamp.
    /// An empty description falls back to [`DEFAULT_DESCRIPTION`].
    pub fn new(name: &str, background: &str, element: &str, description: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            background_color: background.to_string(),
            element_color: element.to_string(),
            description: if description.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                description.to_string()
            },
            date_created: Utc::now(),
        }
    }
}
