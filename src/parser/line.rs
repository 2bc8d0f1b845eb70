//! Comma-separated line parsing

use crate::config::ParseOptions;
use crate::model::CellValue;

/// Cell delimiter
pub const DELIMITER: char = ',';

/// Parse one line of text into cells
///
/// Every delimiter starts a new cell, so an empty line gives one missing
/// cell and a trailing comma gives a missing last cell.
pub fn parse_line(line: &str, options: &ParseOptions) -> Vec<CellValue> {
    line.split(DELIMITER)
        .map(|cell| parse_cell(cell, options))
        .collect()
}

/// Parse the text of a single cell
///
/// The cell is a number only if its numeric text is followed by nothing
/// but whitespace. Anything else, including empty text, is missing.
pub fn parse_cell(text: &str, options: &ParseOptions) -> CellValue {
    let body = if options.skip_leading_whitespace {
        text.trim_start_matches(is_space)
    } else {
        text
    };

    let Some((value, len)) = numeric_prefix(body, options) else {
        return CellValue::Missing;
    };

    if body[len..].chars().all(is_space) {
        CellValue::Number(value)
    } else {
        CellValue::Missing
    }
}

/// Longest numeric prefix of `text`, as its value and byte length
fn numeric_prefix(text: &str, options: &ParseOptions) -> Option<(f64, usize)> {
    let len = decimal_prefix_len(text.as_bytes());
    if len > 0 {
        return text[..len].parse::<f64>().ok().map(|value| (value, len));
    }

    if options.accept_special_values {
        return special_prefix(text);
    }

    None
}

/// Length of `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`
fn decimal_prefix_len(s: &[u8]) -> usize {
    let mut i = usize::from(matches!(s.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&s[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if s.get(i) == Some(&b'.') {
        frac_digits = count_digits(&s[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(s.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&s[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn count_digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `inf`, `infinity` or `nan` with an optional sign, any case
fn special_prefix(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let (sign, sign_len) = match bytes.first() {
        Some(b'-') => (-1.0, 1),
        Some(b'+') => (1.0, 1),
        _ => (1.0, 0),
    };
    let rest = &bytes[sign_len..];

    [
        ("infinity", f64::INFINITY),
        ("inf", f64::INFINITY),
        ("nan", f64::NAN),
    ]
    .into_iter()
    .find(|(word, _)| {
        rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes())
    })
    .map(|(word, value)| (sign * value, sign_len + word.len()))
}

/// Whitespace as the C locale defines it
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}
