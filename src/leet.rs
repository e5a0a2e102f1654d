/*!
 * Leet-speak variant expansion
 *
 * Each mapping replaces every occurrence of a letter with its digit.
 * Mappings are applied in a fixed order and compose: a variant produced by
 * an earlier mapping is fed to every later one.
 */

/// Letter to digit substitutions, in application order
pub const LEET_MAP: [(char, char); 6] = [
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Expand `text` into its leet variants.
///
/// The result is deduplicated and ordered by discovery, so the unmodified
/// input always comes first. When `enabled` is false the only variant is
/// `text` itself.
pub fn apply_leet(text: &str, enabled: bool) -> Vec<String> {
    let mut variants = vec![text.to_string()];
    if !enabled {
        return variants;
    }

    for (letter, digit) in LEET_MAP {
        // Only strings present before this mapping are substituted
        let discovered: Vec<String> = variants
            .iter()
            .filter(|variant| variant.contains(letter))
            .map(|variant| variant.replace(letter, &digit.to_string()))
            .collect();

        for variant in discovered {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_identity() {
        assert_eq!(apply_leet("password", false), vec!["password".to_string()]);
    }

    #[test]
    fn test_original_always_first() {
        let variants = apply_leet("hello", true);
        assert_eq!(variants[0], "hello");
        assert!(variants.contains(&"h3llo".to_string()));
        assert!(variants.contains(&"hell0".to_string()));
        assert!(variants.contains(&"h3ll0".to_string()));
        assert_eq!(variants.len(), 4);
    }

    #[test]
    fn test_composition_replaces_all_occurrences() {
        let variants = apply_leet("test", true);
        for expected in ["test", "t3st", "te5t", "t35t", "7es7", "73s7", "7e57", "7357"] {
            assert!(variants.contains(&expected.to_string()), "missing {}", expected);
        }
        // Single occurrence substitutions are not generated
        assert!(!variants.contains(&"7est".to_string()));
        assert_eq!(variants.len(), 8);
    }

    #[test]
    fn test_no_mapped_letters() {
        assert_eq!(apply_leet("xyz", true), vec!["xyz".to_string()]);
        assert_eq!(apply_leet("", true), vec![String::new()]);
    }

    #[test]
    fn test_variants_are_unique() {
        let variants = apply_leet("aeiost", true);
        let mut sorted = variants.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), variants.len());
        assert_eq!(variants.len(), 64);
    }

    #[test]
    fn test_uppercase_is_untouched() {
        assert_eq!(apply_leet("TEST", true), vec!["TEST".to_string()]);
    }
}
