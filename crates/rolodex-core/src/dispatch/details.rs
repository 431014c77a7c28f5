//! Single-valued details: birthday, email and address.

use chrono::NaiveDate;

use super::{ABSENT, Command, Reply, Table, capitalize, contacts::lookup, exactly, title_case};
use crate::{Error, Result, book::AddressBook};

// ── Birthday ────────────────────────────────────────────────────────────────

/// `add-birthday|change-birthday <name> <DD.MM.YYYY>`
pub(super) fn set_birthday(
  command: Command,
  args: &[&str],
  book: &mut AddressBook,
) -> Result<Reply> {
  let [name, birthday] = exactly(args, "Give me name and birthday please")?;
  let name = capitalize(name);
  book.get_mut(&name)?.set_birthday(birthday)?;
  Ok(Reply::success(match command {
    Command::AddBirthday => format!("Birthday added for {name}."),
    _ => format!("{name}'s birthday updated."),
  }))
}

/// `show-birthday <name>`
pub(super) fn show_birthday(args: &[&str], book: &AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me name, please")?;
  let record = lookup(book, name)?;
  let mut table = Table::new(&["Name", "Birthday"]);
  table.push(vec![
    record.name().to_string(),
    record
      .birthday()
      .map_or("No birthday set".into(), ToString::to_string),
  ]);
  Ok(table.into())
}

/// `birthdays [days]`
pub(super) fn birthdays(
  args: &[&str],
  book: &AddressBook,
  default_window: u32,
  today: NaiveDate,
) -> Result<Reply> {
  const USAGE: &str = "Give me the number of days to look ahead, or nothing";
  let window = match *args {
    [] => default_window,
    [days] => days.parse().map_err(|_| Error::Usage(USAGE))?,
    _ => return Err(Error::Usage(USAGE)),
  };

  let upcoming = book.upcoming_birthdays(window, today);
  if upcoming.is_empty() {
    return Ok(Reply::warning(format!("No birthdays in the next {window} days.")));
  }
  let mut table = Table::new(&["Name", "Birthday", "Phones"]);
  for record in upcoming {
    table.push(vec![
      record.name().to_string(),
      record.birthday().map_or(ABSENT.into(), ToString::to_string),
      record.phone_list(),
    ]);
  }
  Ok(table.into())
}

// ── Email ───────────────────────────────────────────────────────────────────

/// `add-email|change-email <name> <email>`
pub(super) fn set_email(command: Command, args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  let [name, email] = exactly(args, "Give me name and email please")?;
  let name = capitalize(name);
  book.get_mut(&name)?.set_email(email)?;
  Ok(Reply::success(match command {
    Command::AddEmail => format!("Email added for {name}."),
    _ => format!("{name}'s email has been changed."),
  }))
}

/// `show-email <name>`
pub(super) fn show_email(args: &[&str], book: &AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me name, please")?;
  let record = lookup(book, name)?;
  let mut table = Table::new(&["Name", "Email"]);
  table.push(vec![
    record.name().to_string(),
    record.email().map_or(ABSENT.into(), ToString::to_string),
  ]);
  Ok(table.into())
}

/// `delete-email <name>`
pub(super) fn delete_email(args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me name, please")?;
  let name = capitalize(name);
  book.get_mut(&name)?.clear_email();
  Ok(Reply::success(format!("{name}'s email has been deleted.")))
}

// ── Address ─────────────────────────────────────────────────────────────────

/// `add-address|change-address <name> <address...>`
pub(super) fn set_address(
  command: Command,
  args: &[&str],
  book: &mut AddressBook,
) -> Result<Reply> {
  let [name, parts @ ..] = args else {
    return Err(Error::Usage("Give me name and address please"));
  };
  if parts.is_empty() {
    return Err(Error::Usage("Give me name and address please"));
  }
  let name = capitalize(name);
  book.get_mut(&name)?.set_address(&title_case(&parts.join(" ")))?;
  Ok(Reply::success(match command {
    Command::AddAddress => format!("Address added for {name}."),
    _ => format!("{name}'s address has been changed."),
  }))
}

/// `show-address <name>`
pub(super) fn show_address(args: &[&str], book: &AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me name, please")?;
  let record = lookup(book, name)?;
  let mut table = Table::new(&["Name", "Address"]);
  table.push(vec![
    record.name().to_string(),
    record.address().map_or(ABSENT.into(), ToString::to_string),
  ]);
  Ok(table.into())
}

/// `delete-address <name>`
pub(super) fn delete_address(args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me name, please")?;
  let name = capitalize(name);
  book.get_mut(&name)?.clear_address();
  Ok(Reply::success(format!("{name}'s address has been deleted.")))
}

#[cfg(test)]
mod tests {
  use super::super::testing::exec;
  use super::*;
  use crate::field::Field;

  async fn book_with(lines: &[&str]) -> AddressBook {
    let mut book = AddressBook::new();
    for line in lines {
      exec(&mut book, line).await;
    }
    book
  }

  #[tokio::test]
  async fn birthday_add_change_show() {
    let mut book = book_with(&["add alice 1112223333"]).await;
    assert_eq!(
      exec(&mut book, "add-birthday alice 03.06.1990").await,
      Reply::success("Birthday added for Alice.")
    );
    assert_eq!(
      exec(&mut book, "change-birthday alice 04.06.1990").await,
      Reply::success("Alice's birthday updated.")
    );
    let reply = exec(&mut book, "show-birthday alice").await;
    assert_eq!(reply.table().unwrap().rows, [["Alice", "04.06.1990"]]);

    let reply = exec(&mut book, "change-birthday alice 30.02.1990").await;
    assert!(reply.text().unwrap().starts_with("Error: Invalid date"));
    assert_eq!(
      book.find("Alice").unwrap().birthday().unwrap().value(),
      "04.06.1990"
    );
  }

  #[tokio::test]
  async fn show_birthday_when_unset() {
    let mut book = book_with(&["add alice 1112223333"]).await;
    let reply = exec(&mut book, "show-birthday alice").await;
    assert_eq!(reply.table().unwrap().rows, [["Alice", "No birthday set"]]);
  }

  #[tokio::test]
  async fn birthdays_uses_window() {
    // Reference date in the test dispatcher is 2024-06-01.
    let mut book = book_with(&[
      "add near 1112223333 03.06.1990",
      "add far 4445556666 15.06.1990",
    ])
    .await;

    let reply = exec(&mut book, "birthdays").await;
    assert_eq!(reply.table().unwrap().rows, [["Near", "03.06.1990", "1112223333"]]);

    let reply = exec(&mut book, "birthdays 14").await;
    assert_eq!(reply.table().unwrap().rows.len(), 2);

    let reply = exec(&mut book, "birthdays 1").await;
    assert_eq!(reply, Reply::warning("No birthdays in the next 1 days."));

    let reply = exec(&mut book, "birthdays 4294967295").await;
    assert_eq!(reply.table().unwrap().rows.len(), 2);

    let reply = exec(&mut book, "birthdays soon").await;
    assert!(reply.text().unwrap().starts_with("Error: Give me the number"));
  }

  #[tokio::test]
  async fn email_lifecycle() {
    let mut book = book_with(&["add alice 1112223333"]).await;
    assert_eq!(
      exec(&mut book, "add-email alice alice@example.com").await,
      Reply::success("Email added for Alice.")
    );
    assert_eq!(
      exec(&mut book, "change-email alice a@b.co").await,
      Reply::success("Alice's email has been changed.")
    );

    let reply = exec(&mut book, "change-email alice a@b.ru").await;
    assert!(reply.text().unwrap().starts_with("Error: Invalid email"));

    let reply = exec(&mut book, "show-email alice").await;
    assert_eq!(reply.table().unwrap().rows, [["Alice", "a@b.co"]]);

    assert_eq!(
      exec(&mut book, "delete-email alice").await,
      Reply::success("Alice's email has been deleted.")
    );
    assert!(book.find("Alice").unwrap().email().is_none());
    let reply = exec(&mut book, "show-email alice").await;
    assert_eq!(reply.table().unwrap().rows, [["Alice", "–"]]);
  }

  #[tokio::test]
  async fn address_is_joined_and_title_cased() {
    let mut book = book_with(&["add alice 1112223333"]).await;
    assert_eq!(
      exec(&mut book, "add-address alice main st 12, kyiv").await,
      Reply::success("Address added for Alice.")
    );
    let reply = exec(&mut book, "show-address alice").await;
    assert_eq!(reply.table().unwrap().rows, [["Alice", "Main St 12, Kyiv"]]);

    exec(&mut book, "delete-address alice").await;
    assert!(book.find("Alice").unwrap().address().is_none());

    let reply = exec(&mut book, "add-address alice").await;
    assert_eq!(reply.text(), Some("Error: Give me name and address please."));
    let reply = exec(&mut book, "add-address bob somewhere").await;
    assert_eq!(reply.text(), Some("Contact Bob not found."));
  }
}
