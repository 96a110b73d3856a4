//! Rendering of single-line text fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Palette, TextField};
use crate::util::styles::{base_style, field_block, muted_style};

// ========== Cursor Rendering ==========

/// Render a line of text with a visible cursor at the specified position.
///
/// The cursor is drawn by inverting the palette colors of one cell.
pub fn render_cursor_line(
    display_value: &str,
    cursor_pos: usize,
    prefix: &str,
    palette: &Palette,
) -> Line<'static> {
    let cursor_style = Style::default().bg(palette.text).fg(palette.background);
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let chars: Vec<char> = display_value.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    if cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// The visible slice of a field that is wider than its container.
#[derive(Debug, PartialEq, Eq)]
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`, in characters
    pub cursor_pos: usize,
}

/// Keep the cursor visible when the text is longer than `max_width` - 2 cells.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let len = value.chars().count();

    if len <= input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    // Center cursor in visible area
    let start = cursor_pos.saturating_sub(input_width / 2);
    let end = (start + input_width).min(len);
    let start = end.saturating_sub(input_width);

    ScrolledView {
        display_value: value.chars().skip(start).take(end - start).collect(),
        cursor_pos: cursor_pos - start,
    }
}

/// Apply an editing key to `field`. Returns false for keys that are not edits.
pub fn handle_text_key(field: &mut TextField, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.insert_char(c);
        }
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_cursor_home(),
        KeyCode::End => field.move_cursor_end(),
        _ => return false,
    }
    true
}

/// Draw a bordered text field.
///
/// The cursor is only shown while focused; an empty unfocused field shows
/// `placeholder` instead.
#[allow(clippy::too_many_arguments)]
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &TextField,
    focused: bool,
    placeholder: &str,
    error: Option<&str>,
    palette: &Palette,
) {
    let block = field_block(title, focused, error, palette);
    let inner_width = block.inner(area).width as usize;

    let line = if focused {
        let view = calculate_scroll(&field.value, field.cursor_pos, inner_width);
        render_cursor_line(&view.display_value, view.cursor_pos, " ", palette)
    } else if field.is_empty() {
        Line::from(Span::styled(format!(" {}", placeholder), muted_style(palette)))
    } else {
        Line::from(format!(" {}", field.value))
    };

    let paragraph = Paragraph::new(line).style(base_style(palette)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Theme;

    #[test]
    fn test_short_value_is_not_scrolled() {
        let view = calculate_scroll("10/05/1990", 4, 20);
        assert_eq!(view.display_value, "10/05/1990");
        assert_eq!(view.cursor_pos, 4);
    }

    #[test]
    fn test_long_value_keeps_cursor_visible() {
        let value = "R$ 1.000.000.000,00";
        let view = calculate_scroll(value, value.chars().count(), 10);
        assert_eq!(view.display_value.chars().count(), 8);
        assert_eq!(view.display_value, "0.000,00");
        assert_eq!(view.cursor_pos, 8);
    }

    #[test]
    fn test_cursor_line_appends_block_at_end() {
        let line = render_cursor_line("12", 2, "", Theme::Light.palette());
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[2].content, " ");
    }

    #[test]
    fn test_editing_keys() {
        let mut field = TextField::default();
        assert!(handle_text_key(&mut field, KeyEvent::from(KeyCode::Char('1'))));
        assert!(handle_text_key(&mut field, KeyEvent::from(KeyCode::Char('2'))));
        assert!(handle_text_key(&mut field, KeyEvent::from(KeyCode::Left)));
        assert!(handle_text_key(&mut field, KeyEvent::from(KeyCode::Backspace)));
        assert_eq!(field.value, "2");

        // Shortcuts and navigation keys are left to the caller
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(!handle_text_key(&mut field, ctrl_t));
        assert!(!handle_text_key(&mut field, KeyEvent::from(KeyCode::Enter)));
        assert_eq!(field.value, "2");
    }

    #[test]
    fn test_cursor_line_highlights_char() {
        let palette = Theme::Dark.palette();
        let line = render_cursor_line("abc", 1, " ", palette);
        // prefix, a, b, c
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[2].style.bg, Some(palette.text));
    }
}
