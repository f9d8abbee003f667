use super::ops::Operator;

/// Classification of the character under the cursor.
///
/// Only the characters of the grammar get their own class; everything else,
/// tabs and non-ASCII input included, is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    /// `+` or `-`: a sign before a number, an operator after one.
    Sign(Operator),
    /// `*`, `/` or `^`.
    Operator(Operator),
    OpenBracket,
    CloseBracket,
    Space,
    End,
    Other,
}

impl CharClass {
    pub fn of(c: Option<char>) -> Self {
        let Some(c) = c else {
            return CharClass::End;
        };
        match Operator::from_char(c) {
            Some(op @ (Operator::Add | Operator::Subtract)) => CharClass::Sign(op),
            Some(op) => CharClass::Operator(op),
            None => match c {
                '0'..='9' => CharClass::Digit,
                '(' => CharClass::OpenBracket,
                ')' => CharClass::CloseBracket,
                ' ' => CharClass::Space,
                _ => CharClass::Other,
            },
        }
    }
}

/// Byte length of the numeric literal at the start of `input`.
///
/// Accepts `[+-]? digits* ('.' digits*)?` with at least one digit; returns
/// `None` when no digit is present.
pub(crate) fn scan_number(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    (digits > 0).then_some(end)
}
