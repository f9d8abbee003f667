use crate::command::{timed_evaluate, Command};
use anyhow::{Context, Result};
use fsmcalc::{EngineConfig, Evaluation, Status};
use std::io::{stdin, stdout, Write};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};

const PROMPT: &str = "Expression: ";

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn remove_char_at(s: &mut String, char_index: usize) {
    let byte_idx = char_index_to_byte_index(s, char_index);
    if let Some(c) = s[byte_idx..].chars().next() {
        s.drain(byte_idx..byte_idx + c.len_utf8());
    }
}

fn describe(eval: &Evaluation) -> String {
    match eval.status {
        Status::Success => eval.value.to_string(),
        status => format!("Error: {}", status),
    }
}

pub fn run_line(config: EngineConfig) -> Result<()> {
    println!("fsmcalc line mode");
    println!("Supports: + - * / ^ and brackets on decimal literals");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Special commands: 'quit' to exit, 'clear' to reset history");
    println!("Add 'details' before expression for step-by-step evaluation\n");

    let mut stdout = stdout()
        .into_raw_mode()
        .context("line mode needs a terminal")?;
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;
    let stdin = stdin();
    let mut keys = stdin.keys();

    loop {
        write!(stdout, "\r{}{}", ClearLine, PROMPT)?;
        stdout.flush()?;

        let mut expression = String::new();
        let mut cursor_pos = 0;
        let (_, initial_y) = stdout.cursor_pos()?;

        loop {
            write!(stdout, "{}{}{}{}", Goto(1, initial_y), ClearLine, PROMPT, expression)?;
            let byte_pos = char_index_to_byte_index(&expression, cursor_pos);
            write!(stdout, "{}", Goto((PROMPT.len() + 1 + byte_pos) as u16, initial_y))?;
            stdout.flush()?;

            let Some(key) = keys.next() else {
                return Ok(());
            };
            match key? {
                Key::Char('\n') => break,
                Key::Ctrl('c') | Key::Ctrl('d') => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
                Key::Char(c) => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.insert(byte_idx, c);
                    cursor_pos += 1;
                }
                Key::Backspace if cursor_pos > 0 => {
                    cursor_pos -= 1;
                    remove_char_at(&mut expression, cursor_pos);
                }
                Key::Delete if cursor_pos < expression.chars().count() => {
                    remove_char_at(&mut expression, cursor_pos);
                }
                Key::Left if cursor_pos > 0 => cursor_pos -= 1,
                Key::Right if cursor_pos < expression.chars().count() => cursor_pos += 1,
                Key::Home => cursor_pos = 0,
                Key::End => cursor_pos = expression.chars().count(),
                Key::Up if history_index > 0 => {
                    history_index -= 1;
                    expression = history[history_index].clone();
                    cursor_pos = expression.chars().count();
                }
                Key::Down => {
                    if history_index + 1 < history.len() {
                        history_index += 1;
                        expression = history[history_index].clone();
                    } else {
                        history_index = history.len();
                        expression.clear();
                    }
                    cursor_pos = expression.chars().count();
                }
                _ => {}
            }
        }

        let Some(command) = Command::parse(&expression) else {
            write!(stdout, "\r\n")?;
            continue;
        };

        match command {
            Command::Quit => {
                write!(stdout, "\r\nGoodbye!\r\n")?;
                return Ok(());
            }
            Command::Clear => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n\r\n")?;
            }
            Command::Help => {
                write!(
                    stdout,
                    "\r\n  Operators: + - * / ^, brackets ( ); signs attach to literals\r\n\r\n"
                )?;
            }
            Command::MissingExpression => {
                write!(stdout, "\r\n  Please enter a valid expression after 'details'\r\n\r\n")?;
            }
            Command::Evaluate { expression: processed, detailed } => {
                history.push(expression.trim().to_string());
                history_index = history.len();

                let (eval, duration) = timed_evaluate(&config, processed, detailed);
                write!(stdout, "\r\n  {} = {}\r\n", processed, describe(&eval))?;

                if detailed {
                    for (i, step) in eval.steps.iter().enumerate() {
                        write!(stdout, "\r  Step {}: {} = {}\r\n", i + 1, step.operation, step.result)?;
                    }
                    write!(
                        stdout,
                        "\r  Time: {:.6} ms\r\n",
                        duration.as_secs_f64() * 1000.0
                    )?;
                }
                write!(stdout, "\r\n")?;
            }
        }
    }
}
