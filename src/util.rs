/// Visible width in chars (strip minimal ANSI we add) so alignment stays correct.
#[must_use]
pub fn strip_ansi_len(s: &str) -> usize {
    let mut n = 0usize;
    let mut skip = false;
    for c in s.chars() {
        if c == '\x1b' {
            skip = true;
            continue;
        }
        if skip {
            if c == 'm' {
                skip = false;
            }
            continue;
        }
        n += 1;
    }
    n
}

/// C `isspace`: ASCII whitespace plus vertical tab.
fn skip_space(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading integer field of `s`, scanned like C's `%d`: optional leading
/// whitespace, optional sign, then one or more digits. Trailing bytes are
/// ignored. Returns `None` when no digit follows.
#[must_use]
pub fn scan_int_prefix(s: &str) -> Option<&str> {
    let s = skip_space(s);
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let n = digits_len(&bytes[sign..]);
    (n > 0).then(|| &s[..sign + n])
}

/// Leading floating point field of `s`, scanned like C's `%lf`: optional
/// whitespace and sign, then `inf`/`infinity`/`nan` or a decimal mantissa
/// with at least one digit and an optional exponent. Hex floats are not
/// recognized.
#[must_use]
pub fn scan_float_prefix(s: &str) -> Option<&str> {
    let s = skip_space(s);
    let bytes = s.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        let end = i + word.len();
        if bytes.get(i..end).is_some_and(|w| w.eq_ignore_ascii_case(word.as_bytes())) {
            return Some(&s[..end]);
        }
    }

    let int_digits = digits_len(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_len(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // exponent only counts when digits follow it
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits_len(&bytes[j.min(bytes.len())..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    Some(&s[..i])
}

/// True if `s` starts with `--help`, ignoring ASCII case.
#[must_use]
pub fn is_help_token(s: &str) -> bool {
    s.as_bytes().get(..6).is_some_and(|p| p.eq_ignore_ascii_case(b"--help"))
}
