//! Numeric prefix scanning
//!
//! Lines are read the way C's `strtod` reads them: leading whitespace is
//! skipped, the longest prefix that forms a decimal floating-point number is
//! consumed, and whatever follows it is ignored. This lets numbers be pulled
//! out of noisy log lines such as `12.5ms` or `42 requests`.
//!
//! Accepted forms:
//!
//! - optional `+` or `-` sign
//! - digits with an optional fractional part (`1`, `1.`, `.5`, `1.25`)
//! - optional exponent (`1e3`, `2.5E-4`), only consumed when it has digits
//! - `inf` and `infinity` in any letter case
//!
//! `nan` is never accepted, so a parsed sample is always totally ordered.
//! Hexadecimal floats are not recognized: `0x1p3` yields the `0` prefix.

/// Parse the numeric prefix of a line.
///
/// Returns `None` when no character could be consumed as part of a number
/// (empty line, blank line, or text that does not start with a number).
///
/// # Example
///
/// ```
/// use numcrunch::parse::parse_prefix;
///
/// assert_eq!(parse_prefix(b"3.14abc"), Some(3.14));
/// assert_eq!(parse_prefix(b"  -2e3\n"), Some(-2000.0));
/// assert_eq!(parse_prefix(b"latency=12"), None);
/// ```
pub fn parse_prefix(line: &[u8]) -> Option<f64> {
    parse_partial(line).map(|(value, _)| value)
}

/// Parse the numeric prefix of a line, also returning the number of bytes
/// consumed (leading whitespace included).
pub fn parse_partial(line: &[u8]) -> Option<(f64, usize)> {
    let start = line.iter().position(|&b| !is_space(b))?;
    let rest = &line[start..];
    let len = numeric_prefix_len(rest)?;

    // The scanned prefix is pure ASCII.
    let text = core::str::from_utf8(&rest[..len]).ok()?;
    let value = text.parse::<f64>().ok()?;
    Some((value, start + len))
}

/// Whitespace as classified by C's `isspace` in the "C" locale
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest number at the start of `bytes`, or `None`
fn numeric_prefix_len(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if let Some(len) = infinity_len(&bytes[i..]) {
        return Some(i + len);
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    // A lone sign or dot is not a number
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    Some(i)
}

fn infinity_len(bytes: &[u8]) -> Option<usize> {
    let starts_with = |word: &[u8]| {
        bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
    };

    if starts_with(b"infinity") {
        Some(8)
    } else if starts_with(b"inf") {
        Some(3)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_prefix(b"1"), Some(1.0));
        assert_eq!(parse_prefix(b"-7"), Some(-7.0));
        assert_eq!(parse_prefix(b"+0.25"), Some(0.25));
        assert_eq!(parse_prefix(b"1."), Some(1.0));
        assert_eq!(parse_prefix(b".5"), Some(0.5));
        assert_eq!(parse_prefix(b"2.5E-2"), Some(0.025));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_prefix(b"   42"), Some(42.0));
        assert_eq!(parse_prefix(b"\t42\r\n"), Some(42.0));
        assert_eq!(parse_prefix(b"42   trailing"), Some(42.0));
    }

    #[test]
    fn test_partial_prefix() {
        assert_eq!(parse_prefix(b"3.14abc"), Some(3.14));
        assert_eq!(parse_prefix(b"1.2.3"), Some(1.2));
        assert_eq!(parse_prefix(b"12ms"), Some(12.0));
        assert_eq!(parse_prefix(b"0x1A"), Some(0.0));
    }

    #[test]
    fn test_dangling_exponent() {
        assert_eq!(parse_partial(b"1e"), Some((1.0, 1)));
        assert_eq!(parse_partial(b"1e+"), Some((1.0, 1)));
        assert_eq!(parse_partial(b"1e+2x"), Some((100.0, 4)));
    }

    #[test]
    fn test_rejected() {
        assert_eq!(parse_prefix(b""), None);
        assert_eq!(parse_prefix(b"\n"), None);
        assert_eq!(parse_prefix(b"   "), None);
        assert_eq!(parse_prefix(b"x"), None);
        assert_eq!(parse_prefix(b"-"), None);
        assert_eq!(parse_prefix(b"."), None);
        assert_eq!(parse_prefix(b"+.e5"), None);
        assert_eq!(parse_prefix(b"abc 12"), None);
        assert_eq!(parse_prefix(b"\xff12"), None);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_prefix(b"inf"), Some(f64::INFINITY));
        assert_eq!(parse_prefix(b"-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_partial(b"INFinite"), Some((f64::INFINITY, 3)));
    }

    #[test]
    fn test_nan_rejected() {
        assert_eq!(parse_prefix(b"nan"), None);
        assert_eq!(parse_prefix(b"-NaN"), None);
    }

    #[test]
    fn test_consumed_includes_leading_space() {
        assert_eq!(parse_partial(b"  -1.5rest"), Some((-1.5, 6)));
    }
}
