//! Validated field types — the building blocks of a [`Record`](crate::record::Record).
//!
//! Every field is a smart constructor around a single string. Validation runs
//! once, in [`Field::parse`]; there are no setters, so a field that exists is
//! always valid. Replacing a field on a record goes through the same
//! constructor as creating it.

use std::{fmt, sync::LazyLock};

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sentinel accepted in place of an email address to mean "no email".
pub const NO_EMAIL: &str = "-";

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static PHONE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

static BIRTHDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$")
    .expect("email pattern")
});

// ─── Contract ────────────────────────────────────────────────────────────────

/// A named, validated string value.
pub trait Field: Sized + fmt::Display {
  /// Validate `raw` and build the field, or fail with a validation error.
  fn parse(raw: &str) -> Result<Self>;

  /// The stored string value.
  fn value(&self) -> &str;
}

/// Implements `Display`, `TryFrom<String>` and `From<T> for String` in terms of
/// [`Field`], so serde round-trips re-run validation.
macro_rules! string_field {
  ($ty:ident) => {
    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
      }
    }

    impl TryFrom<String> for $ty {
      type Error = Error;

      fn try_from(raw: String) -> Result<Self> { <$ty as Field>::parse(&raw) }
    }

    impl From<$ty> for String {
      fn from(field: $ty) -> Self { field.value().to_owned() }
    }
  };
}

// ─── Name ────────────────────────────────────────────────────────────────────

/// A contact's display name and its key in the address book.
///
/// Capitalisation is applied by the dispatcher, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Field for Name {
  fn parse(raw: &str) -> Result<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self(trimmed.to_owned()))
  }

  fn value(&self) -> &str { &self.0 }
}

string_field!(Name);

// ─── Phone ───────────────────────────────────────────────────────────────────

/// Exactly ten ASCII digits once surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Field for Phone {
  fn parse(raw: &str) -> Result<Self> {
    let trimmed = raw.trim();
    if !PHONE_RE.is_match(trimmed) {
      return Err(Error::InvalidPhone(raw.to_owned()));
    }
    Ok(Self(trimmed.to_owned()))
  }

  fn value(&self) -> &str { &self.0 }
}

string_field!(Phone);

// ─── Birthday ────────────────────────────────────────────────────────────────

/// A real calendar date written as `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
  raw:  String,
  date: NaiveDate,
}

impl Birthday {
  /// The anniversary falling in `year`. 29 February becomes 28 February in
  /// common years.
  pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
    let (month, day) = (self.date.month(), self.date.day());
    NaiveDate::from_ymd_opt(year, month, day)
      .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
  }

  /// The first anniversary on or after `from`.
  pub fn next_anniversary(&self, from: NaiveDate) -> Option<NaiveDate> {
    match self.anniversary_in(from.year()) {
      Some(date) if date >= from => Some(date),
      _ => self.anniversary_in(from.year() + 1),
    }
  }
}

impl Field for Birthday {
  fn parse(raw: &str) -> Result<Self> {
    if !BIRTHDAY_RE.is_match(raw) {
      return Err(Error::InvalidBirthday(raw.to_owned()));
    }
    let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
      .map_err(|_| Error::InvalidBirthday(raw.to_owned()))?;
    Ok(Self { raw: raw.to_owned(), date })
  }

  fn value(&self) -> &str { &self.raw }
}

string_field!(Birthday);

// ─── Email ───────────────────────────────────────────────────────────────────

/// An email address of 3–150 characters whose domain does not contain `.ru`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
  /// Like [`Field::parse`], but the [`NO_EMAIL`] sentinel is accepted and
  /// yields `None`.
  pub fn parse_optional(raw: &str) -> Result<Option<Self>> {
    if raw == NO_EMAIL {
      return Ok(None);
    }
    Self::parse(raw).map(Some)
  }
}

impl Field for Email {
  fn parse(raw: &str) -> Result<Self> {
    let len = raw.chars().count();
    if !(3..=150).contains(&len) {
      return Err(Error::InvalidEmailLength);
    }
    if !EMAIL_RE.is_match(raw) {
      return Err(Error::InvalidEmail(raw.to_owned()));
    }
    // The pattern guarantees exactly one '@'.
    let domain = raw.split_once('@').map_or("", |(_, d)| d);
    if domain.to_ascii_lowercase().contains(".ru") {
      return Err(Error::InvalidEmail(raw.to_owned()));
    }
    Ok(Self(raw.to_owned()))
  }

  fn value(&self) -> &str { &self.0 }
}

string_field!(Email);

// ─── Address ─────────────────────────────────────────────────────────────────

/// Free-text postal address; never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Field for Address {
  fn parse(raw: &str) -> Result<Self> { Ok(Self(raw.to_owned())) }

  fn value(&self) -> &str { &self.0 }
}

string_field!(Address);

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn phone_accepts_ten_digits() {
    let phone = Phone::parse("0501234567").unwrap();
    assert_eq!(phone.value(), "0501234567");
  }

  #[test]
  fn phone_trims_surrounding_whitespace() {
    let phone = Phone::parse("  0501234567 ").unwrap();
    assert_eq!(phone.value(), "0501234567");
  }

  #[test]
  fn phone_rejects_everything_else() {
    for raw in ["", "050123456", "05012345678", "050-123-4567", "05012345a7", "+380501234"] {
      assert!(
        matches!(Phone::parse(raw), Err(Error::InvalidPhone(_))),
        "{raw:?} should be rejected"
      );
    }
  }

  #[test]
  fn birthday_requires_real_padded_date() {
    let b = Birthday::parse("29.02.2024").unwrap();
    assert_eq!(b.date, date(2024, 2, 29));
    assert_eq!(b.to_string(), "29.02.2024");

    assert!(Birthday::parse("30.02.2024").is_err());
    assert!(Birthday::parse("1.1.2024").is_err());
    assert!(Birthday::parse("2024-01-01").is_err());
    assert!(Birthday::parse("29.02.2023").is_err());
  }

  #[test]
  fn next_anniversary_wraps_year_end() {
    let b = Birthday::parse("31.12.1990").unwrap();
    assert_eq!(b.next_anniversary(date(2025, 1, 2)), Some(date(2025, 12, 31)));
    assert_eq!(b.next_anniversary(date(2024, 12, 31)), Some(date(2024, 12, 31)));

    let b = Birthday::parse("01.01.1990").unwrap();
    assert_eq!(b.next_anniversary(date(2024, 12, 28)), Some(date(2025, 1, 1)));
  }

  #[test]
  fn leap_day_falls_back_to_feb_28() {
    let b = Birthday::parse("29.02.2000").unwrap();
    assert_eq!(b.anniversary_in(2023), Some(date(2023, 2, 28)));
    assert_eq!(b.anniversary_in(2024), Some(date(2024, 2, 29)));
  }

  #[test]
  fn email_rules() {
    assert!(Email::parse("a@b.co").is_ok());
    assert!(Email::parse("John.Doe+tag@Mail.Example.COM").is_ok());
    assert!(matches!(Email::parse("ab"), Err(Error::InvalidEmailLength)));
    assert!(matches!(Email::parse("a@b.ru"), Err(Error::InvalidEmail(_))));
    assert!(matches!(Email::parse("a@mail.RU"), Err(Error::InvalidEmail(_))));
    assert!(matches!(Email::parse("a@x.rumble.com"), Err(Error::InvalidEmail(_))));
    assert!(matches!(Email::parse("no-at-sign.com"), Err(Error::InvalidEmail(_))));
    assert!(matches!(Email::parse("a@b.museum"), Err(Error::InvalidEmail(_))));
  }

  #[test]
  fn email_length_is_bounded() {
    let long = format!("{}@b.co", "a".repeat(151));
    assert!(matches!(Email::parse(&long), Err(Error::InvalidEmailLength)));
  }

  #[test]
  fn email_sentinel_means_none() {
    assert_eq!(Email::parse_optional("-").unwrap(), None);
    assert!(Email::parse_optional("a@b.co").unwrap().is_some());
    assert!(Email::parse("-").is_err());
  }

  #[test]
  fn name_must_not_be_blank() {
    assert!(matches!(Name::parse("   "), Err(Error::EmptyName)));
    assert_eq!(Name::parse(" Alice ").unwrap().value(), "Alice");
  }

  #[test]
  fn serde_revalidates() {
    let ok: Phone = serde_json::from_str("\"0501234567\"").unwrap();
    assert_eq!(ok.value(), "0501234567");
    assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
    assert_eq!(serde_json::to_string(&ok).unwrap(), "\"0501234567\"");
  }
}
