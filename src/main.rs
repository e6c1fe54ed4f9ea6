use std::io;

use termion::color;

use crate::{reports::ReportSet, word_search::WordSearch};

mod reports;
mod word_search;

fn main() -> io::Result<()> {
  let reports = ReportSet::from_file("day02.txt")?;
  println!("Day 2: {} safe reports", answer(reports.count_safe()));
  println!(
    "Day 2: {} safe reports with the dampener",
    answer(reports.count_safe_with_dampener())
  );

  let search = WordSearch::from_file("day04.txt")?;
  println!(
    "Day 4: {} occurrences of XMAS",
    answer(search.count_word("XMAS"))
  );
  println!("Day 4: {} crossed MAS pairs", answer(search.count_crosses()));

  Ok(())
}

fn answer(value: usize) -> String {
  format!(
    "{}{}{}",
    color::Fg(color::LightGreen),
    value,
    color::Fg(color::Reset)
  )
}
