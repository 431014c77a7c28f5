//! Typo-tolerant command suggestions.
//!
//! Input typed with a Cyrillic keyboard layout active is first mapped back to
//! the Latin keys at the same physical positions, then compared against every
//! candidate with a Ratcliff/Obershelp similarity ratio.

/// Minimum similarity a candidate needs to be suggested.
pub const DEFAULT_CUTOFF: f64 = 0.1;

/// The Latin key sharing a physical position with a Cyrillic (ЙЦУКЕН) key.
fn latin_key(c: char) -> Option<char> {
  let key = match c {
    'й' => 'q',
    'ц' => 'w',
    'у' => 'e',
    'к' => 'r',
    'е' => 't',
    'н' => 'y',
    'г' => 'u',
    'ш' => 'i',
    'щ' => 'o',
    'з' => 'p',
    'х' => '[',
    'ї' | 'ъ' => ']',
    'ф' => 'a',
    'і' | 'ы' => 's',
    'в' => 'd',
    'а' => 'f',
    'п' => 'g',
    'р' => 'h',
    'о' => 'j',
    'л' => 'k',
    'д' => 'l',
    'ж' => ';',
    'є' | 'э' => '\'',
    'я' => 'z',
    'ч' => 'x',
    'с' => 'c',
    'м' => 'v',
    'и' => 'b',
    'т' => 'n',
    'ь' => 'm',
    'б' => ',',
    'ю' => '.',
    _ => return None,
  };
  Some(key)
}

/// Remap Cyrillic characters to their Latin key positions; anything else is
/// kept as-is.
pub fn transliterate(input: &str) -> String {
  input.chars().map(|c| latin_key(c).unwrap_or(c)).collect()
}

/// Ratcliff/Obershelp similarity: `2 * matched / (len(a) + len(b))`, where
/// `matched` counts characters in recursively found longest common blocks.
/// Two empty strings are identical (`1.0`).
pub fn similarity(a: &str, b: &str) -> f64 {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  let total = a.len() + b.len();
  if total == 0 {
    return 1.0;
  }

  let mut matched = 0;
  let mut pending = vec![(0, a.len(), 0, b.len())];
  while let Some((alo, ahi, blo, bhi)) = pending.pop() {
    let (i, j, k) = longest_match(&a, &b, (alo, ahi), (blo, bhi));
    if k == 0 {
      continue;
    }
    matched += k;
    if alo < i && blo < j {
      pending.push((alo, i, blo, j));
    }
    if i + k < ahi && j + k < bhi {
      pending.push((i + k, ahi, j + k, bhi));
    }
  }

  2.0 * matched as f64 / total as f64
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`, as `(i, j, len)`.
/// Ties go to the earliest run in `a`, then in `b`.
fn longest_match(
  a: &[char],
  b: &[char],
  (alo, ahi): (usize, usize),
  (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
  let width = bhi - blo + 1;
  let mut best = (alo, blo, 0);
  // prev[x + 1] = length of the run ending at (i - 1, blo + x)
  let mut prev = vec![0usize; width];
  for i in alo..ahi {
    let mut cur = vec![0usize; width];
    for j in blo..bhi {
      if a[i] == b[j] {
        let len = prev[j - blo] + 1;
        cur[j - blo + 1] = len;
        if len > best.2 {
          best = (i + 1 - len, j + 1 - len, len);
        }
      }
    }
    prev = cur;
  }
  best
}

/// Best-effort nearest match among a fixed candidate list.
#[derive(Debug, Clone)]
pub struct Suggester<'a> {
  candidates: Vec<&'a str>,
  cutoff:     f64,
}

impl<'a> Suggester<'a> {
  pub fn new(candidates: impl IntoIterator<Item = &'a str>) -> Self {
    Self { candidates: candidates.into_iter().collect(), cutoff: DEFAULT_CUTOFF }
  }

  pub fn with_cutoff(mut self, cutoff: f64) -> Self {
    self.cutoff = cutoff;
    self
  }

  /// The highest-scoring candidate scoring at least the cutoff. On equal
  /// scores the earlier candidate wins.
  pub fn suggest(&self, input: &str) -> Option<&'a str> {
    let latin = transliterate(input);
    let mut best: Option<(&'a str, f64)> = None;
    for &candidate in &self.candidates {
      let score = similarity(&latin, candidate);
      if score < self.cutoff {
        continue;
      }
      if best.is_none_or(|(_, top)| score > top) {
        best = Some((candidate, score));
      }
    }
    tracing::debug!(input, ?best, "command suggestion");
    best.map(|(candidate, _)| candidate)
  }
}
