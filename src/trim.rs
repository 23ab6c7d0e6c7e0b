// Positional head/tail trim.

/// Drop the first `head_cut` and the last `tail_cut` items.
///
/// `tail_cut == 0` removes nothing from the end. When the cuts cover the
/// whole sequence the result is empty; bounds saturate instead of wrapping.
pub fn trim_lines<T>(mut lines: Vec<T>, head_cut: usize, tail_cut: usize) -> Vec<T> {
    if head_cut == 0 && tail_cut == 0 {
        return lines;
    }
    let len = lines.len();
    let end = len.saturating_sub(tail_cut);
    if head_cut >= end {
        return Vec::new();
    }
    lines.truncate(end);
    lines.drain(..head_cut);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seq(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_no_cuts_is_identity() {
        assert_eq!(trim_lines(seq(4), 0, 0), seq(4));
    }

    #[test]
    fn test_head_only() {
        for head in 0..=5 {
            let out = trim_lines(seq(5), head, 0);
            assert_eq!(out, (head..5).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_tail_only() {
        assert_eq!(trim_lines(seq(5), 0, 2), vec![0, 1, 2]);
    }

    #[test]
    fn test_head_and_tail() {
        assert_eq!(trim_lines(seq(6), 1, 2), vec![1, 2, 3]);
    }

    #[test]
    fn test_cuts_cover_everything() {
        for (head, tail) in [(3, 2), (5, 0), (0, 5), (2, 3), (10, 10), (0, 99), (99, 0)] {
            assert!(trim_lines(seq(5), head, tail).is_empty(), "{head}/{tail}");
        }
    }

    #[test]
    fn test_tail_larger_than_len_clamps() {
        assert!(trim_lines(seq(2), 0, 7).is_empty());
        assert!(trim_lines(Vec::<usize>::new(), 1, 1).is_empty());
    }
}
