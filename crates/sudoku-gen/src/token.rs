//! Letter-token encoding of cell values.
//!
//! Box sizes above 3x3 need more than one character per cell, so cell
//! values are written as short letter tokens: `-` for an empty cell,
//! `A`..`I` for 1..9, and positional letter groups for larger values
//! (`J` is 10, `Aa` 11, `Af` 16, `Aj` 20, ...). The leading letter of a
//! token is uppercase and continuation letters are lowercase, which keeps
//! a concatenated template string unambiguous without separators.
//!
//! Values are written in bijective base 10: positional digits run 1..=10
//! and the tenth digit is the letter `j`/`J`, so a zero digit never
//! appears and every non-negative value has exactly one token.

use lazy_static::lazy_static;
use regex::Regex;

use crate::dimension::Dimension;
use crate::error::TokenError;
use crate::rng::SimpleRng;

/// The token for an empty cell.
pub const EMPTY_TOKEN: &str = "-";

lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new("-|[A-J][a-j]*").unwrap();
}

/// Encode a cell value as a token. Total for every non-negative value;
/// zero always encodes to [`EMPTY_TOKEN`], never to a letter.
pub fn encode(value: usize) -> String {
    if value == 0 {
        return EMPTY_TOKEN.to_string();
    }
    let mut digits = Vec::new();
    let mut v = value;
    while v > 0 {
        let mut d = v % 10;
        if d == 0 {
            d = 10;
        }
        digits.push(d);
        v = (v - d) / 10;
    }
    let mut token = String::with_capacity(digits.len());
    for (i, d) in digits.iter().rev().enumerate() {
        let base = if i == 0 { b'A' } else { b'a' };
        token.push((base + (d - 1) as u8) as char);
    }
    token
}

/// Decode a token back into a cell value.
pub fn decode(token: &str) -> Result<usize, TokenError> {
    if token == EMPTY_TOKEN {
        return Ok(0);
    }
    let mut value = 0usize;
    for (i, c) in token.chars().enumerate() {
        let digit = match c {
            'A'..='J' if i == 0 => c as usize - 'A' as usize + 1,
            'a'..='j' if i > 0 => c as usize - 'a' as usize + 1,
            _ => {
                return Err(TokenError::InvalidToken {
                    token: token.to_string(),
                    offset: i,
                })
            }
        };
        value = value * 10 + digit;
    }
    if value == 0 {
        // empty input
        return Err(TokenError::InvalidToken {
            token: token.to_string(),
            offset: 0,
        });
    }
    Ok(value)
}

/// Split a concatenated template string into its cell tokens.
///
/// Matching is greedy: an uppercase letter claims every lowercase letter
/// that follows it. The matches must partition the input exactly; any byte
/// the grammar cannot claim is an error naming the offending position.
pub fn extract_tokens(s: &str) -> Result<Vec<&str>, TokenError> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for mat in TOKEN_REGEX.find_iter(s) {
        if mat.start() != cursor {
            return Err(TokenError::InvalidToken {
                token: s[cursor..mat.start()].to_string(),
                offset: cursor,
            });
        }
        tokens.push(mat.as_str());
        cursor = mat.end();
    }
    if cursor != s.len() {
        return Err(TokenError::InvalidToken {
            token: s[cursor..].to_string(),
            offset: cursor,
        });
    }
    Ok(tokens)
}

/// Decode a full template string for the given dimension, checking that the
/// token count matches the cell count and every value is within the
/// dimension's digit range.
pub fn decode_template(s: &str, dimension: Dimension) -> Result<Vec<usize>, TokenError> {
    let tokens = extract_tokens(s)?;
    if tokens.len() != dimension.total_cells() {
        return Err(TokenError::CellCount {
            expected: dimension.total_cells(),
            actual: tokens.len(),
        });
    }
    let max = dimension.unique_digits();
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value = decode(token)?;
        if value > max {
            return Err(TokenError::ValueOutOfRange {
                token: token.to_string(),
                value,
                max,
            });
        }
        values.push(value);
    }
    Ok(values)
}

/// Render a sequence of cell values back into a template string.
pub fn encode_values(values: &[usize]) -> String {
    values.iter().map(|&v| encode(v)).collect()
}

/// A once-per-puzzle random relabeling of the digits 1..=N.
///
/// Templates always use canonical digits; assembly draws a fresh bijection
/// so the same schema surfaces with different digits each time.
#[derive(Debug, Clone)]
pub struct TokenMap {
    relabeled: Vec<usize>,
}

impl TokenMap {
    /// Draw a random digit bijection for `dimension` from `rng`.
    pub fn random(dimension: Dimension, rng: &mut SimpleRng) -> Self {
        let mut relabeled: Vec<usize> = (1..=dimension.unique_digits()).collect();
        rng.shuffle(&mut relabeled);
        Self { relabeled }
    }

    /// Map a canonical digit to its relabeled digit. Empty stays empty.
    pub fn relabel(&self, value: usize) -> usize {
        if value == 0 {
            0
        } else {
            self.relabeled[value - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_encodings() {
        assert_eq!(encode(0), "-");
        assert_eq!(encode(1), "A");
        assert_eq!(encode(9), "I");
        assert_eq!(encode(10), "J");
        assert_eq!(encode(11), "Aa");
        assert_eq!(encode(16), "Af");
        assert_eq!(encode(19), "Ai");
        assert_eq!(encode(20), "Aj");
        assert_eq!(encode(21), "Ba");
        assert_eq!(encode(100), "Ij");
    }

    #[test]
    fn test_round_trip() {
        for v in 0..=200 {
            assert_eq!(decode(&encode(v)), Ok(v), "value {v}");
        }
    }

    #[test]
    fn test_decode_rejects_bad_tokens() {
        for bad in ["", "a", "1", "A1", "aB", "K", "Ak", "--"] {
            assert!(decode(bad).is_err(), "token {bad:?}");
        }
    }

    #[test]
    fn test_extract_tokens_partitions_exactly() {
        let tokens = extract_tokens("AbC-DaJ").unwrap();
        assert_eq!(tokens, vec!["Ab", "C", "-", "Da", "J"]);
    }

    #[test]
    fn test_extract_tokens_rejects_gaps_and_leftovers() {
        // lowercase with no uppercase lead
        assert!(extract_tokens("abA").is_err());
        // digit in the middle
        assert!(extract_tokens("A1B").is_err());
        // trailing junk
        let err = extract_tokens("AB*").unwrap_err();
        assert_eq!(
            err,
            TokenError::InvalidToken {
                token: "*".to_string(),
                offset: 2
            }
        );
    }

    #[test]
    fn test_decode_template_checks_bounds() {
        let dim = Dimension::FOUR;
        let values = decode_template("-BCDCDA-BAD--CBA", dim).unwrap();
        assert_eq!(values.len(), 16);
        assert_eq!(&values[..4], &[0, 2, 3, 4]);

        assert_eq!(
            decode_template("ABCD", dim),
            Err(TokenError::CellCount {
                expected: 16,
                actual: 4
            })
        );
        // E = 5 is out of range on a 4x4 grid
        assert!(matches!(
            decode_template("EBCDCDA-BAD--CBA", dim),
            Err(TokenError::ValueOutOfRange { value: 5, .. })
        ));
    }

    #[test]
    fn test_token_map_is_a_bijection() {
        let mut rng = SimpleRng::with_seed(5);
        let map = TokenMap::random(Dimension::NINE, &mut rng);
        assert_eq!(map.relabel(0), 0);
        let mut relabeled: Vec<usize> = (1..=9).map(|v| map.relabel(v)).collect();
        relabeled.sort_unstable();
        assert_eq!(relabeled, (1..=9).collect::<Vec<_>>());
    }
}
