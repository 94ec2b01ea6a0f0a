use serde::{Deserialize, Serialize};

use crate::slot::SlotValue;

/// One of the eight manifest fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestField {
    Name,
    Description,
    Variant,
    Os,
    Version,
    Release,
    Author,
    Contact,
}

impl ManifestField {
    pub const ALL: [ManifestField; 8] = [
        ManifestField::Name,
        ManifestField::Description,
        ManifestField::Variant,
        ManifestField::Os,
        ManifestField::Version,
        ManifestField::Release,
        ManifestField::Author,
        ManifestField::Contact,
    ];

    /// The JSON key used in `brick.json`
    pub fn key(self) -> &'static str {
        match self {
            ManifestField::Name => "name",
            ManifestField::Description => "description",
            ManifestField::Variant => "variant",
            ManifestField::Os => "os",
            ManifestField::Version => "version",
            ManifestField::Release => "release",
            ManifestField::Author => "author",
            ManifestField::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ManifestField::Name => "Project name",
            ManifestField::Description => "Description",
            ManifestField::Variant => "Variant",
            ManifestField::Os => "Operating system",
            ManifestField::Version => "OS version",
            ManifestField::Release => "Release",
            ManifestField::Author => "Author",
            ManifestField::Contact => "Contact",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ManifestField::Name => "demo",
            ManifestField::Description => "What the template sets up",
            ManifestField::Variant => "minimal",
            ManifestField::Os => "ubuntu",
            ManifestField::Version => "22.04",
            ManifestField::Release => "v1.0",
            ManifestField::Author => "Your name",
            ManifestField::Contact => "you@example.com",
        }
    }
}

impl std::fmt::Display for ManifestField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Metadata describing a template bundle, exported as `brick.json`.
///
/// Every field is optional here; completeness is only demanded by the step gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Manifest {
    fn field_ref(&self, field: ManifestField) -> &Option<String> {
        match field {
            ManifestField::Name => &self.name,
            ManifestField::Description => &self.description,
            ManifestField::Variant => &self.variant,
            ManifestField::Os => &self.os,
            ManifestField::Version => &self.version,
            ManifestField::Release => &self.release,
            ManifestField::Author => &self.author,
            ManifestField::Contact => &self.contact,
        }
    }

    fn field_mut(&mut self, field: ManifestField) -> &mut Option<String> {
        match field {
            ManifestField::Name => &mut self.name,
            ManifestField::Description => &mut self.description,
            ManifestField::Variant => &mut self.variant,
            ManifestField::Os => &mut self.os,
            ManifestField::Version => &mut self.version,
            ManifestField::Release => &mut self.release,
            ManifestField::Author => &mut self.author,
            ManifestField::Contact => &mut self.contact,
        }
    }

    /// The field's value, empty when unset
    pub fn get(&self, field: ManifestField) -> &str {
        self.field_ref(field).as_deref().unwrap_or("")
    }

    pub fn set(&mut self, field: ManifestField, value: impl Into<String>) {
        *self.field_mut(field) = Some(value.into());
    }

    /// Fields that are unset or whitespace-only, in declaration order
    pub fn missing_fields(&self) -> Vec<ManifestField> {
        ManifestField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Pretty-printed JSON with two-space indentation, the exact bytes of `brick.json`
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Where the bundle belongs in the catalog repository
    pub fn index_path(&self) -> String {
        let part = |field: ManifestField, placeholder: &'static str| {
            let value = self.get(field).trim();
            if value.is_empty() {
                placeholder.to_owned()
            } else {
                value.to_owned()
            }
        };
        format!(
            "index/{}/{}/{}/",
            part(ManifestField::Os, "<os>"),
            part(ManifestField::Version, "<version>"),
            part(ManifestField::Variant, "<variant>"),
        )
    }
}

impl SlotValue for Manifest {
    fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_follow_declaration_order() {
        let mut manifest = Manifest::default();
        manifest.set(ManifestField::Os, "ubuntu");
        manifest.set(ManifestField::Author, "   ");

        let missing = manifest.missing_fields();
        assert_eq!(
            missing,
            vec![
                ManifestField::Name,
                ManifestField::Description,
                ManifestField::Variant,
                ManifestField::Version,
                ManifestField::Release,
                ManifestField::Author,
                ManifestField::Contact,
            ]
        );
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let mut manifest = Manifest::default();
        manifest.set(ManifestField::Name, "demo");
        manifest.set(ManifestField::Os, "ubuntu");

        assert_eq!(
            manifest.to_pretty_json().unwrap(),
            "{\n  \"name\": \"demo\",\n  \"os\": \"ubuntu\"\n}"
        );
        assert_eq!(Manifest::default().to_pretty_json().unwrap(), "{}");
    }

    #[test]
    fn test_decode_tolerates_partial_and_unknown_fields() {
        let manifest = Manifest::decode(r#"{"name":"demo","extra":1}"#).unwrap();
        assert_eq!(manifest.get(ManifestField::Name), "demo");
        assert_eq!(manifest.get(ManifestField::Release), "");

        assert!(Manifest::decode("not json").is_none());
        assert!(Manifest::decode("[1,2]").is_none());
    }

    #[test]
    fn test_index_path() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.index_path(), "index/<os>/<version>/<variant>/");

        manifest.set(ManifestField::Os, "ubuntu");
        manifest.set(ManifestField::Version, "22.04");
        manifest.set(ManifestField::Variant, "minimal");
        assert_eq!(manifest.index_path(), "index/ubuntu/22.04/minimal/");
    }
}
