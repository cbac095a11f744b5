//! TUI rendering: two operand fields, the operation row, and the display
//! panel, drawn from the interaction state alone.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::core::operations::Operation;
use crate::core::state::{OperandSlot, Phase};

use super::app::CalculatorApp;

/// Placeholder shown in the display panel before any calculation
pub const PLACEHOLDER_TEXT: &str = "Result will appear here";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUI::new(app);
    frame.render_widget(ui, area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Creates the main vertical layout chunks
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Operand fields
                Constraint::Length(3), // Operation row
                Constraint::Min(5),    // Display panel
                Constraint::Length(1), // Footer
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the two operand fields side by side
    fn render_fields(&self, area: Rect, buf: &mut Buffer) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.render_field(OperandSlot::First, " First Number ", halves[0], buf);
        self.render_field(OperandSlot::Second, " Second Number ", halves[1], buf);
    }

    /// Renders a single operand field
    fn render_field(&self, slot: OperandSlot, title: &str, area: Rect, buf: &mut Buffer) {
        let focused = self.app.focus() == slot;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = self.app.state().raw().get(slot);
        let content = if focused {
            // Trailing block marks the insertion point
            Line::from(vec![
                Span::raw(text),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ])
        } else {
            Line::from(Span::raw(text))
        };

        Paragraph::new(content)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }

    /// Renders the four operation cells, highlighting the selected one
    fn render_operations(&self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (op, cell) in Operation::ALL.into_iter().zip(cells.iter()) {
            let selected = self.app.state().selected() == Some(op);
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            Paragraph::new(Span::styled(op.glyph(), style))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .render(*cell, buf);
        }
    }

    /// Renders the result/error/placeholder panel
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let content = match self.app.phase() {
            Phase::Error => Line::from(Span::styled(
                self.app.state().result_display(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Phase::Result => Line::from(Span::styled(
                self.app.state().result_display(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Phase::Empty | Phase::Editing => Line::from(Span::styled(
                PLACEHOLDER_TEXT,
                Style::default().fg(Color::DarkGray),
            )),
        };

        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    /// Renders the footer hints; the clear hint appears only when there is
    /// something to clear
    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            "Tab switch field  + - × ÷ calculate  q quit",
            Style::default().fg(Color::DarkGray),
        )];
        if self.app.can_reset() {
            spans.push(Span::styled(
                "  Esc clear all",
                Style::default().fg(Color::Yellow),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = self.create_layout(area);
        self.render_fields(chunks[0], buf);
        self.render_operations(chunks[1], buf);
        self.render_display(chunks[2], buf);
        self.render_footer(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_create_layout() {
        let app = CalculatorApp::new();
        let ui = CalculatorUI::new(&app);
        let chunks = ui.create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(chunks.len(), 4);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_empty_state() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("First Number"));
        assert!(content.contains("Second Number"));
        assert!(content.contains(PLACEHOLDER_TEXT));
        // No clear hint while Empty
        assert!(!content.contains("clear all"));
    }

    #[test]
    fn test_render_all_operation_glyphs() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        for op in Operation::ALL {
            assert!(content.contains(op.glyph()));
        }
    }

    #[test]
    fn test_render_typed_input() {
        let mut app = CalculatorApp::new();
        app.insert_char('1');
        app.insert_char('0');
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("10"));
    }

    #[test]
    fn test_render_result() {
        let mut app = CalculatorApp::new();
        app.insert_char('1');
        app.insert_char('0');
        app.switch_focus();
        app.insert_char('4');
        app.select_operation(Operation::Divide);
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("2.5"));
        assert!(!content.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_render_error_message() {
        let mut app = CalculatorApp::new();
        app.insert_char('7');
        app.switch_focus();
        app.insert_char('0');
        app.select_operation(Operation::Divide);
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("Cannot divide by zero"));
    }

    #[test]
    fn test_render_clear_hint_when_resettable() {
        let mut app = CalculatorApp::new();
        app.insert_char('5');
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("clear all"));
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
