use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

///
/// Table
///
/// One descriptor from the relational catalog. `fields` mirrors the catalog
/// exactly: a table the catalog returned without a column list stays `None`
/// and is never a generation candidate.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Table {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Option<Vec<Field>>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// A table is a generation candidate iff its field list is present and
    /// its name is not in the exception set.
    #[must_use]
    pub fn is_candidate(&self, exceptions: &BTreeSet<String>) -> bool {
        self.fields.is_some() && !exceptions.contains(&self.name)
    }
}

///
/// Field
///
/// Aliases accept the catalog's own column spelling (`Field`/`Type`/`Key`)
/// so snapshots can be fed in verbatim.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    #[serde(alias = "Field")]
    pub name: String,

    #[serde(alias = "Type")]
    pub ty: String,

    #[serde(alias = "Key", default, skip_serializing_if = "KeyRole::is_none")]
    pub key: KeyRole,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>, key: KeyRole) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            key,
        }
    }
}

///
/// KeyRole
///
/// Typed wrapper over the catalog's key column ("", "PRI", "UNI", "MUL").
/// Unknown spellings are carried through untouched so generated doc headers
/// never lose catalog information.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum KeyRole {
    #[default]
    None,
    Primary,
    Unique,
    Multiple,
    Other(String),
}

impl KeyRole {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::Primary => "PRI",
            Self::Unique => "UNI",
            Self::Multiple => "MUL",
            Self::Other(role) => role,
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<String> for KeyRole {
    fn from(role: String) -> Self {
        match role.as_str() {
            "" => Self::None,
            "PRI" => Self::Primary,
            "UNI" => Self::Unique,
            "MUL" => Self::Multiple,
            _ => Self::Other(role),
        }
    }
}

impl From<KeyRole> for String {
    fn from(role: KeyRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exceptions(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn key_role_round_trips_catalog_spelling() {
        for spelling in ["", "PRI", "UNI", "MUL", "SPATIAL"] {
            let role = KeyRole::from(spelling.to_string());
            assert_eq!(role.as_str(), spelling, "spelling must survive: {role:?}");
        }
    }

    #[test]
    fn key_role_none_only_for_empty_spelling() {
        assert!(KeyRole::from(String::new()).is_none());
        assert!(!KeyRole::from("PRI".to_string()).is_none());
        assert!(!KeyRole::from("SPATIAL".to_string()).is_none());
    }

    #[test]
    fn table_with_fields_is_a_candidate() {
        let table = Table::new("users", Some(vec![Field::new("id", "int", KeyRole::Primary)]));

        assert!(table.is_candidate(&exceptions(&[])));
    }

    #[test]
    fn table_without_fields_is_never_a_candidate() {
        let table = Table::new("users", None);

        assert!(!table.is_candidate(&exceptions(&[])));
    }

    #[test]
    fn excepted_table_is_not_a_candidate() {
        let table = Table::new("users", Some(vec![Field::new("id", "int", KeyRole::None)]));

        assert!(!table.is_candidate(&exceptions(&["users"])));
        assert!(table.is_candidate(&exceptions(&["orders"])));
    }

    #[test]
    fn field_decodes_catalog_column_spelling() {
        let field: Field =
            serde_json::from_str(r#"{"Field": "id", "Type": "int(11)", "Key": "PRI"}"#)
                .expect("catalog field spelling must decode");

        assert_eq!(field.name, "id");
        assert_eq!(field.ty, "int(11)");
        assert_eq!(field.key, KeyRole::Primary);
    }

    #[test]
    fn field_key_defaults_to_none_when_absent() {
        let field: Field = serde_json::from_str(r#"{"name": "email", "ty": "varchar(255)"}"#)
            .expect("snake_case field spelling must decode");

        assert!(field.key.is_none());
    }
}
