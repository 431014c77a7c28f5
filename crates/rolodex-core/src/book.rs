//! [`AddressBook`] — the name-keyed collection of all records.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::{
  Error, Result,
  field::{Field, Name},
  note::Note,
  record::Record,
};

/// Default look-ahead for [`AddressBook::upcoming_birthdays`], in days.
pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Records keyed by their exact (case-sensitive) name. Iteration is in key
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
  records: BTreeMap<String, Record>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &Record> { self.records.values() }

  /// Every note in the book, paired with the record that owns it.
  pub fn notes(&self) -> impl Iterator<Item = (&Record, &Note)> {
    self
      .records
      .values()
      .flat_map(|r| r.notes().iter().map(move |n| (r, n)))
  }

  /// Insert `record` under its name. Fails with [`Error::ContactExists`] and
  /// leaves the book untouched if the name is taken.
  pub fn add(&mut self, record: Record) -> Result<()> {
    let key = record.name().value().to_owned();
    if self.records.contains_key(&key) {
      return Err(Error::ContactExists(key));
    }
    self.records.insert(key, record);
    Ok(())
  }

  pub fn find(&self, name: &str) -> Option<&Record> { self.records.get(name) }

  pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
    self.records.get_mut(name)
  }

  /// Like [`find_mut`](Self::find_mut) but absent names are an error.
  pub fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
    self
      .records
      .get_mut(name)
      .ok_or_else(|| Error::ContactNotFound(name.to_owned()))
  }

  /// Remove and return the record stored under `name`.
  pub fn delete(&mut self, name: &str) -> Result<Record> {
    self
      .records
      .remove(name)
      .ok_or_else(|| Error::ContactNotFound(name.to_owned()))
  }

  /// Move the record at `old` to `new`, updating its name in the same step.
  pub fn rename(&mut self, old: &str, new: Name) -> Result<()> {
    if !self.records.contains_key(old) {
      return Err(Error::ContactNotFound(old.to_owned()));
    }
    if self.records.contains_key(new.value()) {
      return Err(Error::ContactExists(new.value().to_owned()));
    }
    let Some(mut record) = self.records.remove(old) else {
      return Err(Error::ContactNotFound(old.to_owned()));
    };
    let key = new.value().to_owned();
    record.set_name(new);
    self.records.insert(key, record);
    Ok(())
  }

  /// Records whose next birthday falls within `[today, today + window_days]`,
  /// soonest first.
  ///
  /// The birth year is ignored. A birthday that already passed this year is
  /// projected into the next one, so late-December birthdays are still found
  /// from early January.
  pub fn upcoming_birthdays(
    &self,
    window_days: u32,
    today: NaiveDate,
  ) -> Vec<&Record> {
    let last = today
      .checked_add_days(Days::new(u64::from(window_days)))
      .unwrap_or(NaiveDate::MAX);

    let mut hits: Vec<(NaiveDate, &Record)> = self
      .records
      .values()
      .filter_map(|r| {
        let next = r.birthday()?.next_anniversary(today)?;
        (next <= last).then_some((next, r))
      })
      .collect();
    hits.sort_by_key(|(date, _)| *date);
    hits.into_iter().map(|(_, r)| r).collect()
  }
}
