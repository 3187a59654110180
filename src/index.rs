//! First-letter index over the sorted building names.
//!
//! Groups an already-sorted name list into per-letter buckets for a
//! sectioned, alphabetically-indexed listing. Because the input is sorted,
//! one pass over it yields buckets that are themselves in order; nothing here
//! re-sorts names and nothing here can fail.

use std::collections::HashMap;
use std::mem;

/// Letter-keyed grouping of building names, derived from the directory.
///
/// `letters()` is ascending; each bucket preserves the relative order names
/// had in the input, which for sorted input means each bucket is sorted too.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphabeticIndex {
    letters: Vec<char>,
    names_by_letter: HashMap<char, Vec<String>>,
}

impl AlphabeticIndex {
    /// Distinct leading letters, ascending.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Names starting with `letter`, or `None` for a letter with no section.
    pub fn names_for(&self, letter: char) -> Option<&[String]> {
        self.names_by_letter.get(&letter).map(Vec::as_slice)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Build the index with a single scan over `names`.
///
/// The caller passes the directory's sorted name list; a contiguous run of
/// names sharing a leading letter becomes one bucket, sealed when the letter
/// changes. Letters are sorted afterwards so the result does not depend on
/// bucket insertion order. Empty input produces an empty index.
pub fn build_index(names: &[String]) -> AlphabeticIndex {
    let mut names_by_letter: HashMap<char, Vec<String>> = HashMap::new();
    let mut current_letter: Option<char> = None;
    let mut bucket: Vec<String> = Vec::new();

    for name in names {
        // Directory names are never empty once a load has succeeded.
        let Some(letter) = name.chars().next() else {
            continue;
        };

        match current_letter {
            Some(previous) if previous == letter => bucket.push(name.clone()),
            Some(previous) => {
                names_by_letter.insert(previous, mem::take(&mut bucket));
                bucket.push(name.clone());
                current_letter = Some(letter);
            }
            None => {
                bucket.push(name.clone());
                current_letter = Some(letter);
            }
        }
    }

    if let Some(previous) = current_letter {
        names_by_letter.insert(previous, bucket);
    }

    let mut letters: Vec<char> = names_by_letter.keys().copied().collect();
    letters.sort_unstable();

    AlphabeticIndex {
        letters,
        names_by_letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_buckets_by_leading_letter() {
        let index = build_index(&names(&[
            "Agnew Hall",
            "Alphin-Stuart Livestock Teaching Arena",
            "Wright House",
        ]));
        assert_eq!(index.letters(), ['A', 'W']);
        assert_eq!(
            index.names_for('A').unwrap(),
            ["Agnew Hall", "Alphin-Stuart Livestock Teaching Arena"]
        );
        assert_eq!(index.names_for('W').unwrap(), ["Wright House"]);
        assert!(index.names_for('B').is_none());
    }

    #[test]
    fn test_empty_input_empty_index() {
        let index = build_index(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.letters().is_empty());
    }

    #[test]
    fn test_single_name() {
        let index = build_index(&names(&["Burruss Hall"]));
        assert_eq!(index.letters(), ['B']);
        assert_eq!(index.names_for('B').unwrap(), ["Burruss Hall"]);
    }

    #[test]
    fn test_buckets_partition_the_input() {
        let input = names(&[
            "Ambler Johnston Hall",
            "Architecture Annex",
            "Burruss Hall",
            "Cassell Coliseum",
            "Cowgill Hall",
            "Derring Hall",
        ]);
        let index = build_index(&input);

        let mut reassembled: Vec<String> = Vec::new();
        for letter in index.letters() {
            reassembled.extend_from_slice(index.names_for(*letter).unwrap());
        }
        // Every input name appears exactly once, in the original order.
        assert_eq!(reassembled, input);
    }

    #[test]
    fn test_bucket_contents_stay_in_input_order() {
        let input = names(&["Lane Hall", "Lane Stadium", "Lavery Hall"]);
        let index = build_index(&input);
        assert_eq!(index.letters(), ['L']);
        assert_eq!(index.names_for('L').unwrap(), input.as_slice());
    }

    #[test]
    fn test_idempotent() {
        let input = names(&["Agnew Hall", "Burchard Hall", "Burruss Hall"]);
        assert_eq!(build_index(&input), build_index(&input));
    }
}
