/*!
 * Output size estimates shown before a run starts
 */

use itertools::Itertools;

use crate::leet::apply_leet;

/// Rough candidate count for automatic mode: about a hundred candidates per
/// leet variant of every seed
pub fn estimate_automatic<S: AsRef<str>>(seeds: &[S], leet: bool) -> u64 {
    seeds
        .iter()
        .map(|seed| apply_leet(seed.as_ref(), leet).len() as u64)
        .sum::<u64>()
        .saturating_mul(100)
}

/// Exact number of combinations enumerated in manual mode, before filtering
/// and leet expansion. Saturates at `u128::MAX`.
pub fn estimate_manual(alphabet_len: usize, min_length: usize, max_length: usize) -> u128 {
    let lengths = max_length
        .checked_sub(min_length)
        .map_or(0, |span| span as u128 + 1);

    match alphabet_len {
        0 => 0,
        1 => lengths,
        _ => {
            // Overflows within 128 lengths for any base >= 2
            let base = alphabet_len as u128;
            (min_length..=max_length)
                .try_fold(0u128, |total, length| {
                    u32::try_from(length)
                        .ok()
                        .and_then(|exp| base.checked_pow(exp))
                        .and_then(|combinations| total.checked_add(combinations))
                })
                .unwrap_or(u128::MAX)
        }
    }
}

/// Group decimal digits in threes (1234567 -> "1,234,567")
pub fn format_count(n: u128) -> String {
    let digits = n.to_string();
    let head = match digits.len() % 3 {
        0 => 3,
        r => r,
    };

    std::iter::once(&digits[..head])
        .chain((head..digits.len()).step_by(3).map(|i| &digits[i..i + 3]))
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_automatic() {
        assert_eq!(estimate_automatic(&["cat", "dog"], false), 200);
        // "test" has 8 leet variants
        assert_eq!(estimate_automatic(&["test"], true), 800);
    }

    #[test]
    fn test_estimate_manual() {
        assert_eq!(estimate_manual(2, 1, 2), 6);
        assert_eq!(estimate_manual(62, 1, 1), 62);
        assert_eq!(estimate_manual(0, 1, 3), 0);
        assert_eq!(estimate_manual(90, 1, 100), u128::MAX);
        assert_eq!(estimate_manual(2, 3, 2), 0);
    }

    #[test]
    fn test_estimate_manual_huge_range_returns_promptly() {
        assert_eq!(estimate_manual(2, 1, usize::MAX), u128::MAX);
        assert_eq!(estimate_manual(62, 1, usize::MAX), u128::MAX);
        assert_eq!(estimate_manual(1, 1, usize::MAX), usize::MAX as u128);
        assert_eq!(estimate_manual(0, 1, usize::MAX), 0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456), "123,456");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(
            format_count(u128::MAX),
            "340,282,366,920,938,463,463,374,607,431,768,211,455"
        );
    }
}
