//! The fixed action set

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Glyph used for wall cells and for cells with no recorded action.
pub const BLOCKED_GLYPH: char = '█';

/// An action available to the agent.
///
/// The declaration order is significant: [`Action::ALL`] lists the actions in
/// this order and greedy selection keeps the first action reaching the
/// maximum, so the order decides ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Right,
    Down,
    Left,
    Up,
    Exit,
}

impl Action {
    /// Every action in tie-break order.
    pub const ALL: [Action; 5] = [
        Action::Right,
        Action::Down,
        Action::Left,
        Action::Up,
        Action::Exit,
    ];

    /// The four movement actions.
    pub const DIRECTIONS: [Action; 4] = [Action::Right, Action::Down, Action::Left, Action::Up];

    pub fn is_directional(self) -> bool {
        self != Action::Exit
    }

    /// Row/column offset of a movement action; `None` for `Exit`.
    pub fn delta(self) -> Option<(isize, isize)> {
        match self {
            Action::Right => Some((0, 1)),
            Action::Down => Some((1, 0)),
            Action::Left => Some((0, -1)),
            Action::Up => Some((-1, 0)),
            Action::Exit => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Action::Right => '→',
            Action::Down => '↓',
            Action::Left => '←',
            Action::Up => '↑',
            Action::Exit => 'X',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
            Action::Up => "up",
            Action::Exit => "exit",
        }
    }

    /// Glyph for an optional policy entry, falling back to [`BLOCKED_GLYPH`].
    pub fn glyph_or_blocked(action: Option<Action>) -> char {
        action.map_or(BLOCKED_GLYPH, Action::glyph)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "right" | "r" | "→" => Ok(Action::Right),
            "down" | "d" | "↓" => Ok(Action::Down),
            "left" | "l" | "←" => Ok(Action::Left),
            "up" | "u" | "↑" => Ok(Action::Up),
            "exit" | "x" | "e" => Ok(Action::Exit),
            _ => Err(crate::Error::ParseAction {
                input: s.to_string(),
                expected: "right, down, left, up, exit".to_string(),
            }),
        }
    }
}
