use crate::table::Table;
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("duplicate table name(s) in catalog: {}", .names.join(", "))]
    DuplicateTables { names: Vec<String> },
}

/// Reject catalogs in which two descriptors would contend for one output
/// file. Names are reported sorted and de-duplicated.
pub fn validate_tables(tables: &[Table]) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();

    for table in tables {
        if !seen.insert(table.name.as_str()) {
            duplicates.insert(table.name.clone());
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::DuplicateTables {
            names: duplicates.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_names_pass() {
        let tables = vec![Table::new("users", None), Table::new("orders", None)];

        assert!(validate_tables(&tables).is_ok());
    }

    #[test]
    fn duplicate_names_are_reported_once_each() {
        let tables = vec![
            Table::new("users", None),
            Table::new("users", None),
            Table::new("users", None),
            Table::new("orders", None),
            Table::new("orders", None),
        ];

        let err = validate_tables(&tables).expect_err("duplicates must fail");
        let SchemaError::DuplicateTables { names } = err;

        assert_eq!(names, vec!["orders".to_string(), "users".to_string()]);
    }

    #[test]
    fn empty_catalog_passes() {
        assert!(validate_tables(&[]).is_ok());
    }
}
