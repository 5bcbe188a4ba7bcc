//! Declarative key-to-action binding table.
//!
//! Raw platform key codes never cross this boundary: input backends
//! translate whatever their event source produces into the symbolic [`Key`]
//! alphabet, and the [`Keymap`] resolves symbols to actions.  The table is
//! validated exhaustively at construction, so a malformed map is a
//! startup-time error rather than a silently dead key at play time.

use std::fmt;

use crate::{Action, CoreError, CoreResult};

// ── Key ───────────────────────────────────────────────────────────────────────

/// Symbolic key identifier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    /// Any printable character key.
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::Space => f.write_str("Space"),
            Key::Char(c) => write!(f, "'{c}'"),
        }
    }
}

// ── Keymap ────────────────────────────────────────────────────────────────────

/// One `Key → Action` binding.
#[derive(Copy, Clone, Debug)]
pub struct KeyBinding {
    pub key: Key,
    pub action: Action,
}

/// Validated binding table mapping recognized keys to drivable actions.
///
/// Construction enforces three invariants:
/// - no key appears twice,
/// - no binding targets the neutral `Stay` action,
/// - every member of [`Action::DRIVABLE`] is reachable from at least one key.
///
/// Keys absent from the table resolve to `None`; callers ignore them with
/// no state change.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(bindings: Vec<KeyBinding>) -> CoreResult<Self> {
        for (i, b) in bindings.iter().enumerate() {
            if b.action == Action::Stay {
                return Err(CoreError::NeutralBinding(b.key));
            }
            if bindings[..i].iter().any(|prev| prev.key == b.key) {
                return Err(CoreError::DuplicateKey(b.key));
            }
        }
        for action in Action::DRIVABLE {
            if !bindings.iter().any(|b| b.action == action) {
                return Err(CoreError::UnboundAction(action));
            }
        }
        Ok(Keymap { bindings })
    }

    /// Map `key` to its bound action, or `None` for unrecognized keys.
    pub fn resolve(&self, key: Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.action)
    }

    /// The bindings in declaration order.
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}

impl Default for Keymap {
    /// Arrow keys drive the four directions; space interacts.
    fn default() -> Self {
        // Infallible: the table below covers all five drivable actions.
        Keymap {
            bindings: vec![
                KeyBinding { key: Key::Up, action: Action::North },
                KeyBinding { key: Key::Down, action: Action::South },
                KeyBinding { key: Key::Right, action: Action::East },
                KeyBinding { key: Key::Left, action: Action::West },
                KeyBinding { key: Key::Space, action: Action::Interact },
            ],
        }
    }
}
