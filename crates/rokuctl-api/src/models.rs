// ECP XML payloads
//
// `/query/apps` and `/query/active-app` both answer with a root element
// holding zero or more `<app>` children. The root's name is not significant;
// only the `app` children are decoded. Attribute renames apply to
// deserialization only so JSON/YAML output keeps plain field names.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A device-resident application.
///
/// ```xml
/// <app id="12" type="appl" subtype="ndka" version="4.2.81179021">Netflix</app>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    #[serde(rename(deserialize = "$text"), default)]
    pub name: String,

    #[serde(rename(deserialize = "@id"), default)]
    pub id: String,

    #[serde(rename(deserialize = "@type", serialize = "type"), default)]
    pub app_type: String,

    #[serde(rename(deserialize = "@subtype"), default)]
    pub subtype: String,

    #[serde(rename(deserialize = "@version"), default)]
    pub version: String,
}

/// The list element wrapping `<app>` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppList {
    #[serde(rename(deserialize = "app"), default)]
    pub apps: Vec<App>,
}

impl AppList {
    /// Decode an ECP app-list document.
    pub fn from_xml(body: &str) -> Result<Self, Error> {
        quick_xml::de::from_str(body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.to_owned(),
        })
    }

    pub fn into_vec(self) -> Vec<App> {
        self.apps
    }
}
