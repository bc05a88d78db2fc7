use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::domain::BootstrapError;

/// One table of the catalog schema: name plus its create-if-absent DDL.
struct TableDef {
    name: &'static str,
    ddl: &'static str,
}

// Dependency order: publishers and authors first, then books (references
// publishers), then the book_authors junction (references both).
const TABLES: &[TableDef] = &[
    TableDef {
        name: "publishers",
        ddl: r#"
        CREATE TABLE IF NOT EXISTS publishers (
            publisher_id INT NOT NULL,
            name VARCHAR(255) NOT NULL,
            PRIMARY KEY (publisher_id)
        )
        "#,
    },
    TableDef {
        name: "authors",
        ddl: r#"
        CREATE TABLE IF NOT EXISTS authors (
            author_id INT NOT NULL,
            first_name VARCHAR(100) NOT NULL,
            middle_name VARCHAR(50) NULL,
            last_name VARCHAR(100) NULL,
            PRIMARY KEY (author_id)
        )
        "#,
    },
    TableDef {
        name: "books",
        ddl: r#"
        CREATE TABLE IF NOT EXISTS books (
            book_id INT NOT NULL,
            title VARCHAR(255) NOT NULL,
            total_pages INT NULL,
            rating DECIMAL(4, 2) NULL,
            isbn VARCHAR(13) NULL,
            published_date DATE,
            publisher_id INT NULL,
            PRIMARY KEY (book_id),
            CONSTRAINT fk_publisher FOREIGN KEY (publisher_id) REFERENCES publishers (publisher_id)
        )
        "#,
    },
    TableDef {
        name: "book_authors",
        ddl: r#"
        CREATE TABLE IF NOT EXISTS book_authors (
            book_id INT NOT NULL,
            author_id INT NOT NULL,
            PRIMARY KEY (book_id, author_id),
            CONSTRAINT fk_book FOREIGN KEY (book_id) REFERENCES books (book_id) ON DELETE CASCADE,
            CONSTRAINT fk_author FOREIGN KEY (author_id) REFERENCES authors (author_id) ON DELETE CASCADE
        )
        "#,
    },
];

/// Open a connection and verify it with a ping round-trip.
///
/// The connection runs in autocommit mode: outside an explicit transaction
/// every statement commits on its own. Nothing downstream may run if this
/// fails.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, BootstrapError> {
    let db = Database::connect(database_url)
        .await
        .map_err(BootstrapError::Connection)?;

    db.ping().await.map_err(BootstrapError::Connection)?;

    Ok(db)
}

/// Apply the catalog DDL. Safe to invoke any number of times: tables that
/// already exist are skipped by the database.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), BootstrapError> {
    for table in TABLES {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            table.ddl.to_owned(),
        ))
        .await
        .map_err(|source| BootstrapError::Schema {
            table: table.name.to_owned(),
            source,
        })?;

        tracing::debug!("table {} ready", table.name);
    }

    Ok(())
}
