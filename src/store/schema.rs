//! Table definition and SQL statements

/// Backing file name, resolved against the working directory
pub const DEFAULT_DB_FILE: &str = "parcel.db";

pub const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS dataset (
    "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    "name" VARCHAR(50),
    "creator" VARCHAR(50),
    "description" TEXT,
    "url" VARCHAR(500),
    "host" VARCHAR(50),
    "rights" VARCHAR(500),
    "tags" TEXT
);
"#;

pub(crate) const INSERT_SQL: &str = "INSERT INTO dataset (name, creator, description, url, host, rights, tags) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

pub(crate) const SELECT_ALL_SQL: &str =
    "SELECT id, name, creator, description, url, host, rights, tags FROM dataset";
