//! Key model and keypad layout
//!
//! A [`Key`] is one press on the calculator. Callers either build keys
//! directly or parse them from typed characters with [`Key::from_char`] and
//! [`parse_keys`].

use crate::error::{CalcError, CalcResult};
use crate::operator::Operator;

/// A single calculator key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal separator
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset to the clear state
    Clear,
}

impl Key {
    /// Maps a typed character to a key
    ///
    /// `.` and `,` are both the decimal key; `=` and newline evaluate;
    /// `c`/`C` clears.
    pub fn from_char(c: char) -> CalcResult<Self> {
        if let Some(d) = c.to_digit(10) {
            return Ok(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_char(c) {
            return Ok(Self::Operator(op));
        }
        match c {
            '.' | ',' => Ok(Self::Decimal),
            '=' | '\n' | '\r' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            _ => Err(CalcError::InvalidKey(c)),
        }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }

    /// Returns the character for this key, if it has one
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op.ascii()),
            Self::Equals => Some('='),
            Self::Clear => Some('C'),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a string of typed characters into keys
///
/// Spaces and tabs are skipped. The first character that is not a key
/// fails the whole parse.
pub fn parse_keys(input: &str) -> CalcResult<Vec<Key>> {
    input
        .chars()
        .filter(|c| *c != ' ' && *c != '\t')
        .map(Key::from_char)
        .collect()
}

/// A button on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Key this button sends
    pub key: Key,
    /// Stable identifier for front-ends
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at a grid position
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        let id = match key {
            Key::Digit(d) => format!("btn-{d}"),
            Key::Decimal => "btn-decimal".to_string(),
            Key::Operator(op) => format!("btn-{}", op_name(op)),
            Key::Equals => "btn-equals".to_string(),
            Key::Clear => "btn-clear".to_string(),
        };
        Self { key, id, row, col }
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Sub => "minus",
        Operator::Mul => "times",
        Operator::Div => "divide",
    }
}

/// Keypad layout
///
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let grid = [
            [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Operator(Operator::Div)],
            [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Operator(Operator::Mul)],
            [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Operator(Operator::Sub)],
            [Key::Digit(0), Key::Decimal, Key::Equals, Key::Operator(Operator::Add)],
        ];

        let mut buttons: Vec<KeypadButton> = grid
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, key)| KeypadButton::new(*key, row, col))
            })
            .collect();
        buttons.push(KeypadButton::new(Key::Clear, grid.len(), 0));

        Self {
            buttons,
            rows: grid.len() + 1,
            cols: 4,
        }
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets the button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds the button that sends `key`
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Finds a button by its identifier
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Renders the layout as text, one grid row per line
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .filter_map(|col| self.get_button_at(row, col))
                .map(|b| format!("[ {} ]", b.key.label()))
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
