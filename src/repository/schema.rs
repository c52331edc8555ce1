//! Mapping between [`Note`] fields and the columns of the `note` table,
//! and the statements built from it.

use tokio_postgres::Row;

use crate::models::Note;

pub const TABLE: &str = "note";

pub const ID: &str = "note_id";
pub const TITLE: &str = "note_title";
pub const CONTENT: &str = "note_content";
pub const STATUS: &str = "note_status";
pub const CREATED_AT: &str = "created_at";

/// Columns in select order.
pub const NOTE_COLUMNS: [&str; 5] = [ID, TITLE, CONTENT, STATUS, CREATED_AT];

/// Comma separated column list for `SELECT` and `RETURNING` clauses.
pub fn select_list() -> String {
    NOTE_COLUMNS.join(", ")
}

pub fn select_all_sql() -> String {
    format!("SELECT {} FROM {TABLE} ORDER BY {ID}", select_list())
}

pub fn select_one_sql() -> String {
    format!("SELECT {} FROM {TABLE} WHERE {ID} = $1", select_list())
}

/// Params: title, content, status, created_at.
pub fn insert_sql() -> String {
    format!(
        "INSERT INTO {TABLE} ({TITLE}, {CONTENT}, {STATUS}, {CREATED_AT}) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        select_list()
    )
}

/// Params: title, content, status, created_at, id. Returns no row for an
/// unknown id.
pub fn update_sql() -> String {
    format!(
        "UPDATE {TABLE} SET {TITLE} = $1, {CONTENT} = $2, {STATUS} = $3, {CREATED_AT} = $4 \
         WHERE {ID} = $5 RETURNING {}",
        select_list()
    )
}

pub fn delete_sql() -> String {
    format!("DELETE FROM {TABLE} WHERE {ID} = $1")
}

pub fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get(ID),
        title: row.get(TITLE),
        content: row.get(CONTENT),
        status: row.get(STATUS),
        created_at: row.get(CREATED_AT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_list_follows_column_order() {
        assert_eq!(
            select_list(),
            "note_id, note_title, note_content, note_status, created_at"
        );
    }

    #[test]
    fn select_all_is_ordered_by_id() {
        assert_eq!(
            select_all_sql(),
            "SELECT note_id, note_title, note_content, note_status, created_at \
             FROM note ORDER BY note_id"
        );
    }

    #[test]
    fn select_one_filters_by_id() {
        assert_eq!(
            select_one_sql(),
            "SELECT note_id, note_title, note_content, note_status, created_at \
             FROM note WHERE note_id = $1"
        );
    }

    #[test]
    fn insert_leaves_id_to_the_store() {
        assert_eq!(
            insert_sql(),
            "INSERT INTO note (note_title, note_content, note_status, created_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING note_id, note_title, note_content, note_status, created_at"
        );
    }

    #[test]
    fn update_overwrites_every_field_by_id() {
        let sql = update_sql();

        assert_eq!(
            sql,
            "UPDATE note SET note_title = $1, note_content = $2, note_status = $3, \
             created_at = $4 WHERE note_id = $5 \
             RETURNING note_id, note_title, note_content, note_status, created_at"
        );
        assert!(!sql.contains("INSERT"));
        assert!(!sql.contains("ON CONFLICT"));
    }

    #[test]
    fn delete_targets_a_single_id() {
        assert_eq!(delete_sql(), "DELETE FROM note WHERE note_id = $1");
    }
}
