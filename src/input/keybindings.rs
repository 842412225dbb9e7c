//! Default keybindings for the character screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Refresh,
    SelectNext,
    SelectPrevious,
    PageDown,
    PageUp,
    SelectFirst,
    SelectLast,
}

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(event: &KeyEvent) -> Self {
        // Shift is already folded into the character for Char keys
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self::new(event.code, modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct Keybindings {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::new()
    }
}

impl Keybindings {
    pub fn new() -> Self {
        let bindings = HashMap::from([
            (KeyCombo::plain(KeyCode::Char('q')), Command::Quit),
            (KeyCombo::plain(KeyCode::Esc), Command::Quit),
            (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
            (KeyCombo::plain(KeyCode::Char('r')), Command::Refresh),
            (KeyCombo::plain(KeyCode::F(5)), Command::Refresh),
            (KeyCombo::plain(KeyCode::Down), Command::SelectNext),
            (KeyCombo::plain(KeyCode::Char('j')), Command::SelectNext),
            (KeyCombo::plain(KeyCode::Up), Command::SelectPrevious),
            (KeyCombo::plain(KeyCode::Char('k')), Command::SelectPrevious),
            (KeyCombo::plain(KeyCode::PageDown), Command::PageDown),
            (KeyCombo::plain(KeyCode::PageUp), Command::PageUp),
            (KeyCombo::plain(KeyCode::Home), Command::SelectFirst),
            (KeyCombo::plain(KeyCode::Char('g')), Command::SelectFirst),
            (KeyCombo::plain(KeyCode::End), Command::SelectLast),
            (KeyCombo::plain(KeyCode::Char('G')), Command::SelectLast),
        ]);
        Self { bindings }
    }

    pub fn lookup(&self, event: &KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyCombo::from(event)).copied()
    }

    /// Key hints shown in the footer.
    pub fn hints() -> &'static str {
        "↑/↓ mover · r actualizar · q salir"
    }
}
