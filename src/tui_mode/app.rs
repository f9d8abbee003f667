use crate::command::{timed_evaluate, Command};
use fsmcalc::{EngineConfig, Status, Step};

pub struct HistoryEntry {
    pub input: String,
    pub value: f64,
    pub status: Status,
    pub detailed_steps: Vec<Step>,
    pub detailed_mode: bool,
    pub duration: std::time::Duration,
}

impl HistoryEntry {
    fn notice(input: &str, status: Status) -> Self {
        HistoryEntry {
            input: input.to_string(),
            value: 0.0,
            status,
            detailed_steps: Vec::new(),
            detailed_mode: false,
            duration: std::time::Duration::ZERO,
        }
    }
}

pub struct App {
    pub config: EngineConfig,
    pub input: String,
    pub cursor_position: usize,
    pub input_scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub cursor_history: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub list_height: usize,
    pub item_start_indices: Vec<usize>,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
}

impl App {
    pub fn new(config: EngineConfig) -> Self {
        App {
            config,
            input: String::new(),
            cursor_position: 0,
            input_scroll: 0,
            history: Vec::new(),
            cursor_history: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            list_height: 5,
            item_start_indices: Vec::new(),
            history_scroll: 0,
            scroll_to_bottom: false,
        }
    }

    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total_chars = self.input.chars().count();
        let cursor_pos = self.cursor_position;

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        } else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos - visible_width + 1;
        }

        if self.input_scroll > total_chars.saturating_sub(visible_width) {
            self.input_scroll = total_chars.saturating_sub(visible_width);
        }
    }

    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input);
        let Some(command) = Command::parse(&input) else {
            return;
        };

        match command {
            Command::Quit => {
                self.should_quit = true;
                return;
            }
            Command::Clear => {
                self.history.clear();
                self.cursor_history = 0;
                self.history_scroll = 0;
            }
            Command::Help => {
                self.show_help = true;
            }
            Command::MissingExpression => {
                self.history.push(HistoryEntry::notice(input.trim(), Status::SyntaxError));
            }
            Command::Evaluate { expression, detailed } => {
                let (eval, duration) = timed_evaluate(&self.config, expression, detailed);
                self.history.push(HistoryEntry {
                    input: expression.to_string(),
                    value: eval.value,
                    status: eval.status,
                    detailed_steps: eval.steps,
                    detailed_mode: detailed,
                    duration,
                });
                self.cursor_history = self.history.len().saturating_sub(1);
                self.scroll_to_bottom = true;
            }
        }
        self.clear_input();
    }

    pub fn move_cursor(&mut self, direction: i32) {
        match direction {
            -1 => self.cursor_position = self.cursor_position.saturating_sub(1),
            1 => self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count()),
            _ => {}
        }
    }

    pub fn move_cursor_by_words(&mut self, direction: i32) {
        let input_chars: Vec<char> = self.input.chars().collect();
        let mut pos = self.cursor_position;

        if direction < 0 {
            while pos > 0 && input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }
            while pos > 0 && !input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }
        } else {
            let len = input_chars.len();
            while pos < len && !input_chars[pos].is_whitespace() {
                pos += 1;
            }
            while pos < len && input_chars[pos].is_whitespace() {
                pos += 1;
            }
        }
        self.cursor_position = pos.min(input_chars.len());
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len().saturating_sub(1) {
            self.cursor_history += 1;
        }
        self.recall_selected();
    }

    pub fn scroll_history(&mut self, direction: i32) {
        let step = self.list_height.saturating_sub(1);
        if direction < 0 {
            self.cursor_history = self.cursor_history.saturating_sub(step);
        } else {
            self.cursor_history = self
                .cursor_history
                .saturating_add(step)
                .min(self.history.len().saturating_sub(1));
        }
        self.recall_selected();
    }

    fn recall_selected(&mut self) {
        match self.history.get(self.cursor_history) {
            Some(entry) => self.input = entry.input.clone(),
            None => self.input.clear(),
        }
        self.cursor_position = self.input.chars().count();
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = char_index_to_byte_index(&self.input, self.cursor_position);
        self.input.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    /// Removes the character under the cursor.
    pub fn delete_char(&mut self) {
        let byte_idx = char_index_to_byte_index(&self.input, self.cursor_position);
        if let Some(c) = self.input[byte_idx..].chars().next() {
            self.input.drain(byte_idx..byte_idx + c.len_utf8());
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.delete_char();
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.input_scroll = 0;
    }
}

pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(input: &str) -> App {
        let mut app = App::new(EngineConfig::default());
        for c in input.chars() {
            app.insert_char(c);
        }
        app
    }

    #[test]
    fn submit_records_value_and_status() {
        let mut app = app_with("7+8");
        app.submit();
        app.input = "2/0".to_string();
        app.submit();

        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[0].value, 15.0);
        assert_eq!(app.history[0].status, Status::Success);
        assert_eq!(app.history[1].status, Status::MathError);
        assert!(app.input.is_empty());
        assert_eq!(app.cursor_history, 1);
    }

    #[test]
    fn details_prefix_keeps_steps() {
        let mut app = app_with("details 6/3/2");
        app.submit();
        let entry = &app.history[0];
        assert!(entry.detailed_mode);
        assert_eq!(entry.input, "6/3/2");
        assert_eq!(entry.detailed_steps.len(), 2);
    }

    #[test]
    fn commands_do_not_enter_history() {
        let mut app = app_with("1+1");
        app.submit();
        app.input = "help".to_string();
        app.submit();
        assert!(app.show_help);
        app.input = "clear".to_string();
        app.submit();
        assert!(app.history.is_empty());
        app.input = "quit".to_string();
        app.submit();
        assert!(app.should_quit);
    }

    #[test]
    fn editing_respects_multibyte_characters() {
        let mut app = app_with("1×2");
        app.move_cursor(-1);
        app.backspace();
        assert_eq!(app.input, "12");
        assert_eq!(app.cursor_position, 1);
        app.insert_char('*');
        assert_eq!(app.input, "1*2");
    }

    #[test]
    fn history_navigation_recalls_inputs() {
        let mut app = App::new(EngineConfig::default());
        for expr in ["1+1", "2+2", "3+3"] {
            app.input = expr.to_string();
            app.submit();
        }
        app.navigate_history(-1);
        assert_eq!(app.input, "2+2");
        app.navigate_history(-1);
        app.navigate_history(-1);
        assert_eq!(app.input, "1+1");
        app.navigate_history(1);
        assert_eq!(app.input, "2+2");
        assert_eq!(app.cursor_position, 3);
    }
}
