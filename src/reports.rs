use std::{fs, io};

use itertools::Itertools;

pub struct Report {
  levels: Vec<i32>,
}

impl Report {
  fn parse(line: &str) -> Report {
    Report {
      levels: line
        .split_whitespace()
        .map(|level| level.parse::<i32>().unwrap())
        .collect(),
    }
  }

  /// True iff the levels are strictly increasing or strictly decreasing
  /// throughout, with every adjacent step of magnitude 1 to 3. A report with
  /// fewer than two levels has no adjacent pairs and counts as safe.
  pub fn is_safe(&self) -> bool {
    Self::gradual(&self.levels)
  }

  /// The dampener rule: safe as-is, or safe after removing a single level.
  /// Every removal index is a candidate; each trial runs on a throwaway copy
  /// of the levels.
  pub fn is_safe_with_dampener(&self) -> bool {
    if self.is_safe() {
      return true;
    }

    (0..self.levels.len()).any(|skip| {
      let mut trimmed = self.levels.clone();
      trimmed.remove(skip);
      Self::gradual(&trimmed)
    })
  }

  fn gradual(levels: &[i32]) -> bool {
    let stepwise = levels
      .iter()
      .tuple_windows()
      .all(|(a, b)| (1..=3).contains(&(a - b).abs()));
    let ascending = levels.iter().tuple_windows().all(|(a, b)| a < b);
    let descending = levels.iter().tuple_windows().all(|(a, b)| a > b);

    stepwise && (ascending || descending)
  }
}

pub struct ReportSet {
  reports: Vec<Report>,
}

impl ReportSet {
  pub fn from_file(path: &str) -> io::Result<ReportSet> {
    Ok(Self::parse(&fs::read_to_string(path)?))
  }

  pub fn parse(input: &str) -> ReportSet {
    ReportSet {
      reports: input
        .lines()
        .filter(|line| !line.is_empty())
        .map(Report::parse)
        .collect(),
    }
  }

  pub fn count_safe(&self) -> usize {
    self
      .reports
      .iter()
      .filter(|report| report.is_safe())
      .count()
  }

  pub fn count_safe_with_dampener(&self) -> usize {
    self
      .reports
      .iter()
      .filter(|report| report.is_safe_with_dampener())
      .count()
  }
}
