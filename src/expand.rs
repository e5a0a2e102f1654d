/*!
 * Per-seed candidate expansion (automatic mode)
 *
 * For every leet variant of a seed:
 * - the variant itself
 * - variant + 1..=3 digits
 * - variant + symbol, then variant + symbol + 1..=2 digits
 *
 * Every candidate is checked against the max length and the exclusion
 * pattern before it is emitted. An excluded candidate is only suppressed;
 * longer candidates derived from it are still considered.
 */

use itertools::Itertools;

use crate::config::AutomaticConfig;
use crate::leet::apply_leet;

/// Longest numeric suffix appended directly to a variant
pub const MAX_NUMERIC_SUFFIX: usize = 3;

/// Longest numeric suffix appended after a symbol
pub const MAX_SYMBOL_NUMERIC_SUFFIX: usize = 2;

/// Every string of exactly `len` characters over `alphabet`, in alphabet order
pub(crate) fn fixed_length_strings(alphabet: &[char], len: usize) -> impl Iterator<Item = String> + '_ {
    (0..len)
        .map(|_| alphabet.iter().copied())
        .multi_cartesian_product()
        .map(|chars| chars.into_iter().collect())
}

/// Visit every candidate for `seed` in generation order
pub fn for_each_combination<F>(seed: &str, config: &AutomaticConfig, mut emit: F)
where
    F: FnMut(String),
{
    let max_length = config.max_length;
    let digits: Vec<char> = config.numbers.chars().collect();

    let mut accept = |candidate: String, len: usize| {
        if len <= max_length && !config.exclude.excludes(&candidate) {
            emit(candidate);
        }
    };

    for variant in apply_leet(seed, config.leet) {
        let variant_len = variant.chars().count();
        if variant_len > max_length {
            continue;
        }

        accept(variant.clone(), variant_len);

        if !digits.is_empty() {
            let budget = max_length - variant_len;
            for suffix_len in 1..=MAX_NUMERIC_SUFFIX.min(budget) {
                for suffix in fixed_length_strings(&digits, suffix_len) {
                    accept(format!("{variant}{suffix}"), variant_len + suffix_len);
                }
            }
        }

        for symbol in config.symbols.chars() {
            let combo = format!("{variant}{symbol}");
            let combo_len = variant_len + 1;
            accept(combo.clone(), combo_len);

            if digits.is_empty() || combo_len >= max_length {
                continue;
            }
            let budget = max_length - combo_len;
            for suffix_len in 1..=MAX_SYMBOL_NUMERIC_SUFFIX.min(budget) {
                for suffix in fixed_length_strings(&digits, suffix_len) {
                    accept(format!("{combo}{suffix}"), combo_len + suffix_len);
                }
            }
        }
    }
}

/// Collect the full candidate batch for one seed
pub fn generate_combinations(seed: &str, config: &AutomaticConfig) -> Vec<String> {
    let mut batch = Vec::new();
    for_each_combination(seed, config, |candidate| batch.push(candidate));
    batch
}
