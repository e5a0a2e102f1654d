/*!
 * Generation settings
 *
 * Values here are built once per run by the CLI layer and handed to a
 * pipeline by reference. The exclusion pattern is compiled up front so an
 * invalid pattern fails before any output file is opened.
 */

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{GenError, Result};

/// Symbols appended in automatic mode and added to the charset in manual mode
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~";

/// Numeric suffix alphabet
pub const DIGITS: &str = "0123456789";

pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Upper bound accepted for automatic mode, and the threshold above which
/// manual mode asks for confirmation
pub const MAX_LENGTH_LIMIT: usize = 50;

/// Default manual-mode charset
pub const DEFAULT_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Compiled exclusion pattern. A candidate is rejected when the pattern
/// matches anywhere inside it.
#[derive(Debug, Clone, Default)]
pub struct Exclusion {
    regex: Option<Regex>,
}

impl Exclusion {
    pub fn none() -> Self {
        Self { regex: None }
    }

    /// Compile `pattern`; an empty or missing pattern disables exclusion
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let regex = match pattern {
            Some(p) if !p.is_empty() => {
                Some(Regex::new(p).map_err(|source| GenError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })?)
            }
            _ => None,
        };
        Ok(Self { regex })
    }

    #[inline]
    pub fn excludes(&self, candidate: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(candidate))
    }

    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

impl Serialize for Exclusion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.pattern() {
            Some(p) => serializer.serialize_some(p),
            None => serializer.serialize_none(),
        }
    }
}

/// Keyword expansion settings
#[derive(Debug, Clone, Serialize)]
pub struct AutomaticConfig {
    /// Symbol suffixes; empty disables them
    pub symbols: String,
    /// Numeric suffix alphabet; empty disables numeric suffixes
    pub numbers: String,
    pub leet: bool,
    pub exclude: Exclusion,
    pub max_length: usize,
    pub workers: usize,
}

impl AutomaticConfig {
    pub fn new(max_length: usize, workers: usize) -> Self {
        Self {
            symbols: String::new(),
            numbers: DIGITS.to_string(),
            leet: false,
            exclude: Exclusion::none(),
            max_length,
            workers: workers.max(1),
        }
    }

    pub fn with_special(mut self, special: bool) -> Self {
        self.symbols = if special { SYMBOLS.to_string() } else { String::new() };
        self
    }

    pub fn with_numbers(mut self, numbers: bool) -> Self {
        self.numbers = if numbers { DIGITS.to_string() } else { String::new() };
        self
    }

    pub fn with_leet(mut self, leet: bool) -> Self {
        self.leet = leet;
        self
    }

    pub fn with_exclusion(mut self, exclude: Exclusion) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Charset combination settings
#[derive(Debug, Clone, Serialize)]
pub struct ManualConfig {
    pub alphabet: String,
    pub min_length: usize,
    pub max_length: usize,
    pub leet: bool,
    pub exclude: Exclusion,
}

impl ManualConfig {
    /// Lengths must satisfy `1 <= min_length <= max_length`
    pub fn new(alphabet: impl Into<String>, min_length: usize, max_length: usize) -> Result<Self> {
        if min_length == 0 || min_length > max_length {
            return Err(GenError::InvalidLengthRange {
                min: min_length,
                max: max_length,
            });
        }

        Ok(Self {
            alphabet: alphabet.into(),
            min_length,
            max_length,
            leet: false,
            exclude: Exclusion::none(),
        })
    }

    /// Append [`SYMBOLS`] to the alphabet. Applied once, before enumeration.
    pub fn with_special(mut self, special: bool) -> Self {
        if special {
            self.alphabet.push_str(SYMBOLS);
        }
        self
    }

    pub fn with_leet(mut self, leet: bool) -> Self {
        self.leet = leet;
        self
    }

    pub fn with_exclusion(mut self, exclude: Exclusion) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Clamp a requested automatic max length into `[1, MAX_LENGTH_LIMIT]`
pub fn clamp_max_length(requested: usize) -> usize {
    requested.clamp(1, MAX_LENGTH_LIMIT)
}

/// Clamp a requested worker count into `[1, cpu count]`; `None` means all CPUs
pub fn clamp_workers(requested: Option<usize>) -> usize {
    let cpus = num_cpus::get().max(1);
    requested.unwrap_or(cpus).clamp(1, cpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_is_substring_match() {
        let exclude = Exclusion::new(Some("123|abc")).unwrap();
        assert!(exclude.excludes("xx123yy"));
        assert!(exclude.excludes("abcd"));
        assert!(!exclude.excludes("a1b2c3"));
    }

    #[test]
    fn test_empty_exclusion_matches_nothing() {
        assert!(!Exclusion::new(None).unwrap().excludes("anything"));
        assert!(!Exclusion::new(Some("")).unwrap().excludes(""));
        assert_eq!(Exclusion::none().pattern(), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Exclusion::new(Some("(unclosed")).unwrap_err();
        assert!(matches!(err, GenError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_manual_length_validation() {
        assert!(ManualConfig::new("ab", 3, 2).is_err());
        assert!(ManualConfig::new("ab", 0, 2).is_err());
        assert!(ManualConfig::new("ab", 2, 2).is_ok());
    }

    #[test]
    fn test_manual_special_appends_symbols() {
        let config = ManualConfig::new("ab", 1, 1).unwrap().with_special(true);
        assert_eq!(config.alphabet, format!("ab{}", SYMBOLS));
    }

    #[test]
    fn test_automatic_builders() {
        let config = AutomaticConfig::new(8, 0)
            .with_special(true)
            .with_numbers(false)
            .with_leet(true);
        assert_eq!(config.workers, 1);
        assert_eq!(config.symbols, SYMBOLS);
        assert!(config.numbers.is_empty());
        assert!(config.leet);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_max_length(0), 1);
        assert_eq!(clamp_max_length(75), MAX_LENGTH_LIMIT);
        assert_eq!(clamp_max_length(12), 12);
        assert_eq!(clamp_workers(Some(0)), 1);
        assert_eq!(clamp_workers(Some(100_000)), num_cpus::get().max(1));
        assert!(clamp_workers(None) >= 1);
    }

    #[test]
    fn test_config_serializes_pattern() {
        let config = AutomaticConfig::new(10, 2).with_exclusion(Exclusion::new(Some("^x")).unwrap());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["exclude"], "^x");
        assert_eq!(json["max_length"], 10);
    }
}
