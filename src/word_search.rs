use std::{fs, io};

#[derive(Clone, Copy)]
enum Direction {
  North,
  NorthEast,
  East,
  SouthEast,
  South,
  SouthWest,
  West,
  NorthWest,
}

impl Direction {
  const ALL: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
  ];

  /// Unit step as a (row, col) offset. North decreases the row index, east
  /// increases the column index.
  fn step(self) -> (isize, isize) {
    match self {
      Direction::North => (-1, 0),
      Direction::NorthEast => (-1, 1),
      Direction::East => (0, 1),
      Direction::SouthEast => (1, 1),
      Direction::South => (1, 0),
      Direction::SouthWest => (1, -1),
      Direction::West => (0, -1),
      Direction::NorthWest => (-1, -1),
    }
  }
}

pub struct WordSearch {
  rows: Vec<Vec<char>>,
}

impl WordSearch {
  pub fn from_file(path: &str) -> io::Result<WordSearch> {
    Ok(Self::parse(&fs::read_to_string(path)?))
  }

  pub fn parse(input: &str) -> WordSearch {
    WordSearch {
      rows: input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect(),
    }
  }

  /// Count every straight-line occurrence of `word`, read in any of the
  /// eight directions from any starting cell. Occurrences may overlap, and
  /// forward and backward readings of the same cells count separately.
  pub fn count_word(&self, word: &str) -> usize {
    let letters: Vec<char> = word.chars().collect();
    let Some((&first, rest)) = letters.split_first() else {
      return 0;
    };

    self
      .rows
      .iter()
      .enumerate()
      .map(|(row, cells)| {
        cells
          .iter()
          .enumerate()
          .filter(|&(_, &cell)| cell == first)
          .map(|(col, _)| {
            Direction::ALL
              .into_iter()
              .filter(|direction| self.reads_toward(row, col, *direction, rest))
              .count()
          })
          .sum::<usize>()
      })
      .sum()
  }

  fn reads_toward(&self, row: usize, col: usize, direction: Direction, rest: &[char]) -> bool {
    let (dr, dc) = direction.step();
    rest.iter().enumerate().all(|(offset, &expected)| {
      let steps = offset as isize + 1;
      self.at(row as isize + dr * steps, col as isize + dc * steps) == Some(expected)
    })
  }

  /// Count the cells holding an 'A' whose two diagonals each read as the
  /// pair M/S in either order. Only interior cells have all four diagonal
  /// neighbors, so edge cells never match.
  pub fn count_crosses(&self) -> usize {
    self
      .rows
      .iter()
      .enumerate()
      .map(|(row, cells)| {
        cells
          .iter()
          .enumerate()
          .filter(|&(col, &cell)| cell == 'A' && self.cross_at(row, col))
          .count()
      })
      .sum()
  }

  fn cross_at(&self, row: usize, col: usize) -> bool {
    let (row, col) = (row as isize, col as isize);
    let falling = (self.at(row - 1, col - 1), self.at(row + 1, col + 1));
    let rising = (self.at(row - 1, col + 1), self.at(row + 1, col - 1));

    Self::mas_pair(falling) && Self::mas_pair(rising)
  }

  fn mas_pair(ends: (Option<char>, Option<char>)) -> bool {
    matches!(ends, (Some('M'), Some('S')) | (Some('S'), Some('M')))
  }

  /// Cell lookup bounds-checked against the actual row, so rows of uneven
  /// length are handled by construction: a coordinate past the end of its
  /// own row is simply absent.
  fn at(&self, row: isize, col: isize) -> Option<char> {
    if row < 0 || col < 0 {
      return None;
    }
    self
      .rows
      .get(row as usize)
      .and_then(|cells| cells.get(col as usize))
      .copied()
  }
}

#[cfg(test)]
mod test {
  use super::WordSearch;

  const EXAMPLE: &str = "MMMSXXMASM\nMSAMXMSMSA\nAMXSXMAAMM\nMSAMASMSMX\nXMASAMXAMM\nXXAMMXXAMA\nSMSMSASXSS\nSAXAMASAAA\nMAMMMXMMMM\nMXMXAXMASX";

  #[test]
  fn parses_one_row_per_line() {
    let search = WordSearch::parse(EXAMPLE);
    assert_eq!(search.rows.len(), 10);
    assert!(search.rows.iter().all(|row| row.len() == 10));
  }

  #[test]
  fn blank_lines_are_skipped() {
    let search = WordSearch::parse("\nMMM\n\nSSS\n");
    assert_eq!(search.rows.len(), 2);
  }

  #[test]
  fn counts_word_occurrences_in_the_example() {
    assert_eq!(WordSearch::parse(EXAMPLE).count_word("XMAS"), 18);
  }

  #[test]
  fn counts_crosses_in_the_example() {
    assert_eq!(WordSearch::parse(EXAMPLE).count_crosses(), 9);
  }

  #[test]
  fn forward_and_backward_readings_count_separately() {
    assert_eq!(WordSearch::parse("XMASAMX").count_word("XMAS"), 2);
  }

  #[test]
  fn overlapping_occurrences_share_a_cell() {
    // Both readings start from the same X.
    assert_eq!(WordSearch::parse("SAMXMAS").count_word("XMAS"), 2);
  }

  #[test]
  fn transposing_the_grid_preserves_the_word_count() {
    let search = WordSearch::parse(EXAMPLE);
    let transposed = WordSearch {
      rows: (0..10)
        .map(|col| (0..10).map(|row| search.rows[row][col]).collect())
        .collect(),
    };
    assert_eq!(transposed.count_word("XMAS"), 18);
  }

  #[test]
  fn ragged_rows_are_bounds_checked_per_row() {
    let search = WordSearch::parse("XMAS\nM\nA\nS");
    // One reading to the east, one to the south; the diagonal runs out of
    // its shorter rows.
    assert_eq!(search.count_word("XMAS"), 2);
    assert_eq!(search.count_crosses(), 0);
  }

  #[test]
  fn single_cell_grid_matches_only_single_letter_words() {
    let search = WordSearch::parse("X");
    assert_eq!(search.count_word("XMAS"), 0);
    assert_eq!(search.count_crosses(), 0);
    // A one-letter word ends on its starting cell, so the walk succeeds in
    // every direction.
    assert_eq!(search.count_word("X"), 8);
  }

  #[test]
  fn crosses_require_an_interior_pivot() {
    assert_eq!(WordSearch::parse("M.S\n.A.\nM.S").count_crosses(), 1);
    assert_eq!(WordSearch::parse("AM\nMS").count_crosses(), 0);
  }

  #[test]
  fn each_diagonal_accepts_either_orientation() {
    for grid in [
      "M.S\n.A.\nM.S",
      "S.M\n.A.\nS.M",
      "M.M\n.A.\nS.S",
      "S.S\n.A.\nM.M",
    ] {
      assert_eq!(WordSearch::parse(grid).count_crosses(), 1);
    }
    // The same letter on both ends of a diagonal is not a valid pair.
    assert_eq!(WordSearch::parse("M.S\n.A.\nS.M").count_crosses(), 0);
  }

  #[test]
  fn empty_input_and_empty_word_count_nothing() {
    let empty = WordSearch::parse("");
    assert_eq!(empty.count_word("XMAS"), 0);
    assert_eq!(empty.count_crosses(), 0);
    assert_eq!(WordSearch::parse(EXAMPLE).count_word(""), 0);
  }
}
