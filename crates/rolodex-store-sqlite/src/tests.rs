//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use rolodex_core::{AddressBook, Note, Record, store::BookStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn contact(name: &str, phones: &[&str]) -> Record {
  let mut record = Record::named(name).unwrap();
  for phone in phones {
    record.add_phone(phone).unwrap();
  }
  record
}

fn sample_book() -> AddressBook {
  let mut alice = contact("Alice", &["1112223333", "4445556666"]);
  alice.set_birthday("29.02.1996").unwrap();
  alice.set_email("alice@example.com").unwrap();
  alice.set_address("Main St 12, Kyiv").unwrap();
  alice.add_note(Note::new("Gift", "books", "bday"));
  alice.add_note(Note::new("Call", "weekly", "family"));

  let bob = contact("Bob", &["7778889999"]);

  let mut book = AddressBook::new();
  book.add(alice).unwrap();
  book.add(bob).unwrap();
  book
}

// ─── Load / save ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_store_loads_empty_book() {
  let s = store().await;
  assert!(s.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_then_load_round_trips() {
  let s = store().await;
  let book = sample_book();
  s.save(&book).await.unwrap();

  let loaded = s.load().await.unwrap();
  assert_eq!(loaded, book);

  let alice = loaded.find("Alice").unwrap();
  assert_eq!(alice.phone_list(), "1112223333, 4445556666");
  let titles: Vec<_> = alice.notes().iter().map(|n| n.title.as_str()).collect();
  assert_eq!(titles, ["Gift", "Call"]);
}

#[tokio::test]
async fn save_replaces_previous_state() {
  let s = store().await;
  s.save(&sample_book()).await.unwrap();

  let mut book = sample_book();
  book.delete("Alice").unwrap();
  book.find_mut("Bob").unwrap().add_note(Note::new("Work", "lead", "job"));
  s.save(&book).await.unwrap();

  let loaded = s.load().await.unwrap();
  assert_eq!(loaded, book);
  assert_eq!(loaded.notes().count(), 1);
}

#[tokio::test]
async fn saving_an_empty_book_clears_the_store() {
  let s = store().await;
  s.save(&sample_book()).await.unwrap();
  s.save(&AddressBook::new()).await.unwrap();
  assert!(s.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn many_contacts_round_trip() {
  let s = store().await;
  let mut book = AddressBook::new();
  for i in 0..50 {
    let mut record = contact(&format!("Contact{i:02}"), &[&format!("{i:010}")]);
    record.add_note(Note::new(format!("Note{i}"), "text", "tag"));
    book.add(record).unwrap();
  }
  s.save(&book).await.unwrap();
  assert_eq!(s.load().await.unwrap(), book);
}

// ─── Decoding ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn corrupted_row_fails_to_load() {
  let s = store().await;
  s.conn
    .call(|conn| {
      conn.execute(
        "INSERT INTO contacts (name, phones) VALUES ('Eve', '[\"12\"]')",
        [],
      )?;
      Ok(())
    })
    .await
    .unwrap();

  assert!(matches!(s.load().await, Err(crate::Error::Core(_))));
}

// ─── Files ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn book_survives_reopening_the_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("book.sqlite3");
  let book = sample_book();

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.save(&book).await.unwrap();
  }

  let reopened = SqliteStore::open(&path).await.unwrap();
  assert_eq!(reopened.load().await.unwrap(), book);
}
