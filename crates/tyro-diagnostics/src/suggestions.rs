// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Did-you-mean suggestions for misspelled names.

/// Compute edit distance (Levenshtein) between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, a_ch) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_ch) in b.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// The candidate closest to `name`, if any is close enough.
///
/// Ties go to the earliest candidate, so callers pass innermost names first.
pub fn closest_match<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let max_distance = match name.chars().count() {
        0..=2 => 1,
        3..=5 => 2,
        _ => 3,
    };

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        if candidate == name {
            continue;
        }
        if name.chars().count().abs_diff(candidate.chars().count()) > max_distance {
            continue;
        }
        let dist = edit_distance(name, candidate);
        let better = match best {
            Some((_, best_dist)) => dist < best_dist,
            None => true,
        };
        if dist <= max_distance && better {
            best = Some((candidate, dist));
        }
    }

    best.map(|(closest, _)| closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_match() {
        let candidates = ["select", "add", "counter", "value"];

        assert_eq!(closest_match("selct", candidates), Some("select"));
        assert_eq!(closest_match("ad", candidates), Some("add"));
        assert_eq!(closest_match("xyz", candidates), None);
    }

    #[test]
    fn first_candidate_wins_ties() {
        assert_eq!(closest_match("xa", ["xb", "xc"]), Some("xb"));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "hello"), 5);
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("abc", "abd"), 1);
    }
}
