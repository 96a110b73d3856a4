use loansim_core::{FormErrors, is_form_invalid};

use super::session::LoanData;

/// Single-line editable text with a cursor
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub value: String,
    /// Cursor position in characters
    pub cursor_pos: usize,
    /// Maximum number of characters accepted
    pub max_len: Option<usize>,
    accept: Option<fn(char) -> bool>,
}

impl TextField {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor_pos: value.chars().count(),
            max_len: None,
            accept: None,
        }
    }

    /// Only accept characters for which `accept` returns true
    pub fn accepting(mut self, accept: fn(char) -> bool) -> Self {
        self.accept = Some(accept);
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_pos = self.len();
    }

    pub fn clear(&mut self) {
        self.set_value("");
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if self.accept.is_some_and(|accept| !accept(c)) {
            return;
        }
        if self.max_len.is_some_and(|max| self.len() >= max) {
            return;
        }
        let offset = self.byte_offset(self.cursor_pos);
        self.value.insert(offset, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let offset = self.byte_offset(self.cursor_pos);
            self.value.remove(offset);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.len() {
            let offset = self.byte_offset(self.cursor_pos);
            self.value.remove(offset);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.len();
    }
}

fn is_date_char(c: char) -> bool {
    c.is_ascii_digit() || c == '/'
}

fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ',' | 'R' | '$' | ' ')
}

fn is_term_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// Birth date step
#[derive(Debug, Clone)]
pub struct PersonalDataForm {
    /// Birth date typed as DD/MM/YYYY
    pub birth_date: TextField,
    pub error: Option<String>,
}

impl Default for PersonalDataForm {
    fn default() -> Self {
        Self {
            birth_date: TextField::default().accepting(is_date_char).max_len(10),
            error: None,
        }
    }
}

impl PersonalDataForm {
    /// The continue action needs a date and no outstanding error
    pub fn can_continue(&self) -> bool {
        !self.birth_date.is_empty() && self.error.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoanField {
    #[default]
    Amount,
    Term,
}

impl LoanField {
    pub fn next(self) -> Self {
        match self {
            LoanField::Amount => LoanField::Term,
            LoanField::Term => LoanField::Amount,
        }
    }
}

/// Loan amount and term step
#[derive(Debug, Clone)]
pub struct LoanDetailsForm {
    pub amount: TextField,
    pub term: TextField,
    pub focused: LoanField,
    pub errors: FormErrors,
}

impl Default for LoanDetailsForm {
    fn default() -> Self {
        Self {
            amount: TextField::default().accepting(is_amount_char).max_len(20),
            term: TextField::default().accepting(is_term_char).max_len(4),
            focused: LoanField::Amount,
            errors: FormErrors::default(),
        }
    }
}

impl LoanDetailsForm {
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focused {
            LoanField::Amount => &mut self.amount,
            LoanField::Term => &mut self.term,
        }
    }

    pub fn is_invalid(&self) -> bool {
        is_form_invalid(&self.amount.value, &self.term.value, false)
    }

    /// Fill the fields from previously saved loan data
    pub fn prefill(&mut self, loan: &LoanData) {
        if let (Some(amount), Some(term)) = (&loan.amount, loan.term) {
            self.amount.set_value(amount);
            self.term.set_value(&term.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::new("1234");
        field.move_cursor_left();
        field.backspace();
        assert_eq!(field.value, "124");
        assert_eq!(field.cursor_pos, 2);

        field.move_cursor_home();
        field.insert_char('9');
        assert_eq!(field.value, "9124");

        field.delete();
        assert_eq!(field.value, "924");

        field.move_cursor_end();
        field.move_cursor_right();
        assert_eq!(field.cursor_pos, 3);
    }

    #[test]
    fn test_text_field_filter_and_limit() {
        let mut field = TextField::default().accepting(is_term_char).max_len(3);
        for c in "1a2b34".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value, "123");
    }

    #[test]
    fn test_text_field_multibyte() {
        let mut field = TextField::new("açã");
        field.backspace();
        assert_eq!(field.value, "aç");
        field.move_cursor_left();
        field.insert_char('x');
        assert_eq!(field.value, "axç");
    }

    #[test]
    fn test_personal_data_can_continue() {
        let mut form = PersonalDataForm::default();
        assert!(!form.can_continue());
        form.birth_date.set_value("10/05/1990");
        assert!(form.can_continue());
        form.error = Some("erro".to_string());
        assert!(!form.can_continue());
    }

    #[test]
    fn test_loan_form_prefill_and_focus() {
        let mut form = LoanDetailsForm::default();
        assert!(form.is_invalid());

        form.prefill(&LoanData {
            amount: Some("100.000".to_string()),
            term: Some(24),
        });
        assert_eq!(form.amount.value, "100.000");
        assert_eq!(form.term.value, "24");
        assert!(!form.is_invalid());

        form.focused = form.focused.next();
        form.focused_field_mut().insert_char('0');
        assert_eq!(form.term.value, "240");
    }

    #[test]
    fn test_prefill_ignores_partial_data() {
        let mut form = LoanDetailsForm::default();
        form.prefill(&LoanData {
            amount: Some("100.000".to_string()),
            term: None,
        });
        assert!(form.amount.is_empty());
    }
}
