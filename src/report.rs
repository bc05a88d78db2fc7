//! Read-and-display layer: fetch whole tables in primary-key order and
//! print them. No logic beyond formatting.

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::BootstrapError;
use crate::models::{author, book, book_authors, publisher};

pub async fn fetch_publishers(
    db: &DatabaseConnection,
) -> Result<Vec<publisher::Model>, BootstrapError> {
    publisher::Entity::find()
        .order_by_asc(publisher::Column::PublisherId)
        .all(db)
        .await
        .map_err(BootstrapError::Report)
}

pub async fn fetch_authors(db: &DatabaseConnection) -> Result<Vec<author::Model>, BootstrapError> {
    author::Entity::find()
        .order_by_asc(author::Column::AuthorId)
        .all(db)
        .await
        .map_err(BootstrapError::Report)
}

pub async fn fetch_books(db: &DatabaseConnection) -> Result<Vec<book::Model>, BootstrapError> {
    book::Entity::find()
        .order_by_asc(book::Column::BookId)
        .all(db)
        .await
        .map_err(BootstrapError::Report)
}

pub async fn fetch_book_authors(
    db: &DatabaseConnection,
) -> Result<Vec<book_authors::Model>, BootstrapError> {
    book_authors::Entity::find()
        .order_by_asc(book_authors::Column::BookId)
        .order_by_asc(book_authors::Column::AuthorId)
        .all(db)
        .await
        .map_err(BootstrapError::Report)
}

fn dash<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub async fn print_catalog(db: &DatabaseConnection) -> Result<(), BootstrapError> {
    let publishers = fetch_publishers(db).await?;
    println!("\npublishers ({} rows)", publishers.len());
    for p in &publishers {
        println!("  {:>3}  {}", p.publisher_id, p.name);
    }

    let authors = fetch_authors(db).await?;
    println!("\nauthors ({} rows)", authors.len());
    for a in &authors {
        println!(
            "  {:>3}  {:<10} {:<6} {}",
            a.author_id,
            a.first_name,
            dash(&a.middle_name),
            dash(&a.last_name)
        );
    }

    let books = fetch_books(db).await?;
    println!("\nbooks ({} rows)", books.len());
    for b in &books {
        println!(
            "  {:>3}  {:<60}  {:>5}  {:>5}  {:<13}  {:<10}  {:>3}",
            b.book_id,
            b.title,
            dash(&b.total_pages),
            dash(&b.rating),
            dash(&b.isbn),
            dash(&b.published_date),
            dash(&b.publisher_id)
        );
    }

    let links = fetch_book_authors(db).await?;
    println!("\nbook_authors ({} rows)", links.len());
    for link in &links {
        println!("  {:>3}  {:>3}", link.book_id, link.author_id);
    }

    Ok(())
}
