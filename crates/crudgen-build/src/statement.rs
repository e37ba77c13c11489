//! Parameterized statement templates.
//!
//! Templates carry symbolic placeholder tokens, not concrete values; the
//! downstream query executor resolves them against the request payload.
//! Token spellings are part of the executor contract and must not change.

use crudgen_schema::Field;

/// Column-list token (select).
pub const COLUMN_LIST: &str = ":C";

/// Filter token (select).
pub const SELECT_FILTER: &str = ":OU";

/// Filter token (delete).
pub const DELETE_FILTER: &str = ":OR";

/// Filter token (update).
pub const UPDATE_FILTER: &str = ":OF";

/// Per-field value token prefix (insert).
pub const VALUE_PREFIX: &str = ":V_";

/// Per-field assignment token prefix (update).
pub const ASSIGN_PREFIX: &str = ":S_";

///
/// StatementSet
///
/// The four templates scoped to one table. Only ever embedded into the
/// rendered module, never persisted on their own.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatementSet {
    pub select: String,
    pub insert: String,
    pub update: String,
    pub delete: String,
}

impl StatementSet {
    #[must_use]
    pub fn build(table: &str, fields: &[Field]) -> Self {
        Self {
            select: select_statement(table),
            insert: insert_statement(table, fields),
            update: update_statement(table, fields),
            delete: delete_statement(table),
        }
    }
}

fn select_statement(table: &str) -> String {
    format!("SELECT {COLUMN_LIST} FROM {table} WHERE {SELECT_FILTER}")
}

fn insert_statement(table: &str, fields: &[Field]) -> String {
    let columns = fields
        .iter()
        .map(|field| field.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let values = fields
        .iter()
        .map(|field| format!("{VALUE_PREFIX}{}", field.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!("INSERT INTO {table} ({columns}) VALUES ({values})")
}

// one assignment per field, unlike the filter tokens which stay opaque
fn update_statement(table: &str, fields: &[Field]) -> String {
    let assignments = fields
        .iter()
        .map(|field| format!("{} = {ASSIGN_PREFIX}{}", field.name, field.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!("UPDATE {table} SET {assignments} WHERE {UPDATE_FILTER}")
}

fn delete_statement(table: &str) -> String {
    format!("DELETE FROM {table} WHERE {DELETE_FILTER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_schema::KeyRole;

    fn fields(names: &[&str]) -> Vec<Field> {
        names
            .iter()
            .map(|name| Field::new(*name, "int", KeyRole::None))
            .collect()
    }

    #[test]
    fn select_uses_column_and_filter_tokens() {
        let set = StatementSet::build("users", &fields(&["a", "b"]));

        assert_eq!(set.select, "SELECT :C FROM users WHERE :OU");
    }

    #[test]
    fn insert_enumerates_every_field_in_order() {
        let set = StatementSet::build("users", &fields(&["a", "b"]));

        assert_eq!(set.insert, "INSERT INTO users (a, b) VALUES (:V_a, :V_b)");
    }

    #[test]
    fn insert_single_field_has_no_separator() {
        let set = StatementSet::build("users", &fields(&["id"]));

        assert_eq!(set.insert, "INSERT INTO users (id) VALUES (:V_id)");
    }

    #[test]
    fn update_assigns_every_field() {
        let set = StatementSet::build("users", &fields(&["a", "b"]));

        assert_eq!(set.update, "UPDATE users SET a = :S_a, b = :S_b WHERE :OF");
        assert!(set.update.contains("a = :S_a"));
        assert!(set.update.contains("b = :S_b"));
    }

    #[test]
    fn delete_uses_its_own_filter_token() {
        let set = StatementSet::build("users", &fields(&["a"]));

        assert_eq!(set.delete, "DELETE FROM users WHERE :OR");
    }
}
