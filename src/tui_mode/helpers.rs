use fsmcalc::Status;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            let mut chunk = String::new();
            let mut chunk_width = 0;
            for c in word.chars() {
                let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
                if chunk_width + char_width > width && !chunk.is_empty() {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(c);
                chunk_width += char_width;
            }
            lines.push(chunk);
            continue;
        }

        if current_width + word_width + 1 > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

pub fn format_number(x: f64) -> String {
    if x.is_nan() || x.is_infinite() {
        return x.to_string();
    }
    if x.abs() > 1e10 || (x.abs() < 1e-5 && x != 0.0) {
        format!("{:.6e}", x)
    } else {
        let s = format!("{:.6}", x);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Puts single spaces around binary operators, keeping signs glued to their
/// literal.
pub fn format_with_spaces(expr: &str) -> String {
    let mut result = String::new();
    let mut expect_operand = true;

    for c in expr.chars() {
        match c {
            ' ' => continue,
            '+' | '-' if expect_operand => result.push(c),
            '+' | '-' | '*' | '/' | '^' => {
                result.push(' ');
                result.push(c);
                result.push(' ');
                expect_operand = true;
            }
            '(' => {
                result.push(c);
                expect_operand = true;
            }
            _ => {
                result.push(c);
                expect_operand = false;
            }
        }
    }

    result
}

pub fn status_style(status: Status) -> Style {
    let color = match status {
        Status::Success => Color::LightMagenta,
        Status::MathError => Color::LightRed,
        Status::SyntaxError => Color::Red,
        Status::AllocationError => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn highlight_expression(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let number_style = Style::default().fg(Color::LightGreen);

    let mut spans = Vec::new();
    let mut number = String::new();

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }
        if !number.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut number), number_style));
        }
        let style = match c {
            '+' | '-' | '*' | '/' | '^' => operator_style,
            _ => base_style,
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !number.is_empty() {
        spans.push(Span::styled(number, number_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_trim_trailing_zeros() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-19.0), "-19");
        assert_eq!(format_number(1e12), "1.000000e12");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn spacing_keeps_signs_on_literals() {
        assert_eq!(format_with_spaces("8+83+-2^5"), "8 + 83 + -2 ^ 5");
        assert_eq!(format_with_spaces("(1-(3*9))"), "(1 - (3 * 9))");
        assert_eq!(format_with_spaces("-4 -  2"), "-4 - 2");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("1 + 2 + 3", 5), vec!["1 + 2", "+ 3"]);
        assert_eq!(wrap_text("123456", 4), vec!["1234", "56"]);
    }

    #[test]
    fn highlight_splits_numbers_and_operators() {
        let spans = highlight_expression("12+3.5", Style::default());
        let texts: Vec<_> = spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(texts, vec!["12", "+", "3.5"]);
    }
}
