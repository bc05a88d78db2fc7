use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Insert, Set};

use crate::domain::BootstrapError;
use crate::models::{author, book, book_authors, publisher};

struct SeedPublisher {
    id: i32,
    name: &'static str,
}

struct SeedAuthor {
    id: i32,
    first_name: &'static str,
    middle_name: Option<&'static str>,
    last_name: Option<&'static str>,
}

struct SeedBook {
    id: i32,
    title: &'static str,
    total_pages: Option<i32>,
    rating: Option<Decimal>,
    isbn: Option<&'static str>,
    published_date: Option<NaiveDate>,
    publisher_id: Option<i32>,
}

struct SeedBookAuthor {
    book_id: i32,
    author_id: i32,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn publishers() -> Vec<SeedPublisher> {
    vec![
        SeedPublisher { id: 1, name: "O Reilly Media" },
        SeedPublisher { id: 2, name: "A Book Apart" },
        SeedPublisher { id: 3, name: "A K PETERS" },
        SeedPublisher { id: 4, name: "Academic Press" },
        SeedPublisher { id: 5, name: "Addison Wesley" },
        SeedPublisher { id: 6, name: "Albert&Sweigart" },
        SeedPublisher { id: 7, name: "Alfred A. Knopf" },
    ]
}

fn authors() -> Vec<SeedAuthor> {
    vec![
        SeedAuthor { id: 1, first_name: "Merritt", middle_name: None, last_name: Some("Eric") },
        SeedAuthor { id: 2, first_name: "Linda", middle_name: None, last_name: Some("Mui") },
        SeedAuthor { id: 3, first_name: "Alecos", middle_name: None, last_name: Some("Papadatos") },
        SeedAuthor { id: 4, first_name: "Anthony", middle_name: None, last_name: Some("Molinaro") },
        SeedAuthor { id: 5, first_name: "David", middle_name: None, last_name: Some("Cronin") },
        SeedAuthor { id: 6, first_name: "Richard", middle_name: None, last_name: Some("Blum") },
        SeedAuthor { id: 7, first_name: "Yuval", middle_name: Some("Noah"), last_name: Some("Harari") },
        SeedAuthor { id: 8, first_name: "Paul", middle_name: None, last_name: Some("Albitz") },
    ]
}

fn books() -> Vec<SeedBook> {
    vec![
        SeedBook {
            id: 1,
            title: "Lean Software Development: An Agile Toolkit",
            total_pages: Some(240),
            rating: Some(Decimal::new(417, 2)),
            isbn: Some("9780320000000"),
            published_date: Some(date(2003, 5, 18)),
            publisher_id: Some(5),
        },
        SeedBook {
            id: 2,
            title: "Facing the Intelligence Explosion",
            total_pages: Some(91),
            rating: Some(Decimal::new(387, 2)),
            isbn: None,
            published_date: Some(date(2013, 2, 1)),
            publisher_id: Some(7),
        },
        SeedBook {
            id: 3,
            title: "Scala in Action",
            total_pages: Some(419),
            rating: Some(Decimal::new(374, 2)),
            isbn: Some("9781940000000"),
            published_date: Some(date(2013, 4, 10)),
            publisher_id: Some(1),
        },
        SeedBook {
            id: 4,
            title: "Patterns of Software: Tales from the Software Community",
            total_pages: Some(256),
            rating: Some(Decimal::new(384, 2)),
            isbn: Some("9780200000000"),
            published_date: Some(date(1996, 8, 15)),
            publisher_id: Some(1),
        },
        SeedBook {
            id: 5,
            title: "Anatomy Of LISP",
            total_pages: Some(446),
            rating: Some(Decimal::new(443, 2)),
            isbn: Some("9780070000000"),
            published_date: Some(date(1978, 1, 1)),
            publisher_id: Some(3),
        },
        SeedBook {
            id: 6,
            title: "Computing machinery and intelligence",
            total_pages: Some(24),
            rating: Some(Decimal::new(417, 2)),
            isbn: None,
            published_date: Some(date(2009, 3, 22)),
            publisher_id: Some(4),
        },
        SeedBook {
            id: 7,
            title: "XML: Visual QuickStart Guide",
            total_pages: Some(269),
            rating: Some(Decimal::new(366, 2)),
            isbn: Some("9780320000000"),
            published_date: Some(date(2009, 1, 1)),
            publisher_id: Some(5),
        },
        SeedBook {
            id: 8,
            title: "SQL Cookbook",
            total_pages: Some(595),
            rating: Some(Decimal::new(395, 2)),
            isbn: Some("9780600000000"),
            published_date: Some(date(2005, 12, 1)),
            publisher_id: Some(7),
        },
        SeedBook {
            id: 9,
            title: "The Apollo Guidance Computer: Architecture And Operation (Springer Praxis Books / Space Exploration)",
            total_pages: Some(439),
            rating: Some(Decimal::new(429, 2)),
            isbn: Some("9781440000000"),
            published_date: Some(date(2010, 7, 1)),
            publisher_id: Some(6),
        },
        SeedBook {
            id: 10,
            title: "Minds and Computers: An Introduction to the Philosophy of Artificial Intelligence",
            total_pages: Some(222),
            rating: Some(Decimal::new(354, 2)),
            isbn: Some("9780750000000"),
            published_date: Some(date(2007, 2, 13)),
            publisher_id: Some(7),
        },
    ]
}

fn book_author_links() -> Vec<SeedBookAuthor> {
    vec![
        SeedBookAuthor { book_id: 1, author_id: 1 },
        SeedBookAuthor { book_id: 2, author_id: 8 },
        SeedBookAuthor { book_id: 3, author_id: 7 },
        SeedBookAuthor { book_id: 4, author_id: 6 },
        SeedBookAuthor { book_id: 5, author_id: 5 },
        SeedBookAuthor { book_id: 6, author_id: 4 },
        SeedBookAuthor { book_id: 7, author_id: 3 },
        SeedBookAuthor { book_id: 8, author_id: 2 },
        SeedBookAuthor { book_id: 9, author_id: 4 },
        SeedBookAuthor { book_id: 10, author_id: 1 },
    ]
}

/// Execute one conflict-tolerant insert. A primary-key conflict surfaces as
/// `DbErr::RecordNotInserted` and means the row is already present; any
/// other failure aborts the batch.
async fn insert_skipping_existing<A>(
    db: &DatabaseConnection,
    insert: Insert<A>,
    table: &'static str,
) -> Result<(), BootstrapError>
where
    A: ActiveModelTrait,
{
    match insert.exec(db).await {
        Ok(_) => Ok(()),
        Err(DbErr::RecordNotInserted) => Ok(()),
        Err(source) => Err(BootstrapError::Seed {
            table: table.to_owned(),
            source,
        }),
    }
}

/// Insert the catalog dataset in foreign-key dependency order. Rows that
/// already exist are left untouched, so running this any number of times
/// yields the same table contents as running it once.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), BootstrapError> {
    for p in publishers() {
        let row = publisher::ActiveModel {
            publisher_id: Set(p.id),
            name: Set(p.name.to_owned()),
        };
        insert_skipping_existing(
            db,
            publisher::Entity::insert(row).on_conflict(
                OnConflict::column(publisher::Column::PublisherId)
                    .do_nothing()
                    .to_owned(),
            ),
            "publishers",
        )
        .await?;
    }
    tracing::debug!("publishers seeded");

    for a in authors() {
        let row = author::ActiveModel {
            author_id: Set(a.id),
            first_name: Set(a.first_name.to_owned()),
            middle_name: Set(a.middle_name.map(str::to_owned)),
            last_name: Set(a.last_name.map(str::to_owned)),
        };
        insert_skipping_existing(
            db,
            author::Entity::insert(row).on_conflict(
                OnConflict::column(author::Column::AuthorId)
                    .do_nothing()
                    .to_owned(),
            ),
            "authors",
        )
        .await?;
    }
    tracing::debug!("authors seeded");

    for b in books() {
        let row = book::ActiveModel {
            book_id: Set(b.id),
            title: Set(b.title.to_owned()),
            total_pages: Set(b.total_pages),
            rating: Set(b.rating),
            isbn: Set(b.isbn.map(str::to_owned)),
            published_date: Set(b.published_date),
            publisher_id: Set(b.publisher_id),
        };
        insert_skipping_existing(
            db,
            book::Entity::insert(row).on_conflict(
                OnConflict::column(book::Column::BookId)
                    .do_nothing()
                    .to_owned(),
            ),
            "books",
        )
        .await?;
    }
    tracing::debug!("books seeded");

    for link in book_author_links() {
        let row = book_authors::ActiveModel {
            book_id: Set(link.book_id),
            author_id: Set(link.author_id),
        };
        insert_skipping_existing(
            db,
            book_authors::Entity::insert(row).on_conflict(
                OnConflict::columns([
                    book_authors::Column::BookId,
                    book_authors::Column::AuthorId,
                ])
                .do_nothing()
                .to_owned(),
            ),
            "book_authors",
        )
        .await?;
    }
    tracing::debug!("book_authors seeded");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_identifiers_are_unique() {
        let publisher_ids: HashSet<i32> = publishers().iter().map(|p| p.id).collect();
        assert_eq!(publisher_ids.len(), publishers().len());

        let author_ids: HashSet<i32> = authors().iter().map(|a| a.id).collect();
        assert_eq!(author_ids.len(), authors().len());

        let book_ids: HashSet<i32> = books().iter().map(|b| b.id).collect();
        assert_eq!(book_ids.len(), books().len());

        let link_keys: HashSet<(i32, i32)> = book_author_links()
            .iter()
            .map(|l| (l.book_id, l.author_id))
            .collect();
        assert_eq!(link_keys.len(), book_author_links().len());
    }

    #[test]
    fn every_link_resolves_within_the_dataset() {
        let book_ids: HashSet<i32> = books().iter().map(|b| b.id).collect();
        let author_ids: HashSet<i32> = authors().iter().map(|a| a.id).collect();

        for link in book_author_links() {
            assert!(book_ids.contains(&link.book_id), "unknown book {}", link.book_id);
            assert!(
                author_ids.contains(&link.author_id),
                "unknown author {}",
                link.author_id
            );
        }
    }

    #[test]
    fn every_book_publisher_resolves_within_the_dataset() {
        let publisher_ids: HashSet<i32> = publishers().iter().map(|p| p.id).collect();

        for b in books() {
            if let Some(publisher_id) = b.publisher_id {
                assert!(
                    publisher_ids.contains(&publisher_id),
                    "book {} references unknown publisher {}",
                    b.id,
                    publisher_id
                );
            }
        }
    }
}
