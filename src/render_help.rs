use crate::tui_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" fsmcalc Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(Span::styled(
            "fsmcalc - Terminal Expression Calculator",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Operators:"),
        Line::from("  + : Addition        (e.g., 7+8 = 15)"),
        Line::from("  - : Subtraction     (e.g., 1-3+4 = 2)"),
        Line::from("  * : Multiplication  (e.g., 6 * 7 = 42)"),
        Line::from("  / : Division        (e.g., 6/3/2/4 = 0.25)"),
        Line::from("  ^ : Power           (e.g., 2^2^3 = 256)"),
        Line::from("  ( ) : Grouping      (e.g., (1-(3*9)+3+4) = -19)"),
        Line::from(""),
        heading("Literals:"),
        Line::from("  Decimal numbers with an optional leading sign: 12, -0.5, +.25"),
        Line::from("  No exponent notation, no implicit multiplication: (3-2)5 is an error"),
        Line::from("  Only plain spaces are allowed between tokens"),
        Line::from(""),
        heading("Results:"),
        Line::from("  math error   : division by zero, zero raised to a negative power"),
        Line::from("  syntax error : malformed or unbalanced expression"),
        Line::from("  allocation error : expression exceeds the stack depth limit"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  details <expression> : Show every applied fold with timing"),
        Line::from("  clear : Clear calculation history"),
        Line::from("  help  : Show this help screen"),
        Line::from("  quit  : Exit the calculator"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Navigate calculation history"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  Esc : Close this screen"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
