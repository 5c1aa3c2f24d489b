//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! Only normal-mode keys are configurable. Search input, the bus form and
//! confirmation dialogs use fixed keys since they mostly consume text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::path::Path;

/// Semantic keyboard actions that can be bound to key combinations.
///
/// Several key combinations may map to the same action (both `j` and Down
/// move down, for instance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Enter search mode.
    StartSearch,
    /// Open the "add bus" dialog.
    NewBus,
    /// Open the edit dialog for the selected bus.
    EditSelection,
    /// Ask to delete the selected bus.
    DeleteSelection,
    /// Fetch the bus list again.
    Reload,
    /// Clear the error currently shown.
    DismissError,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Swallow the key.
    Ignore,
}

/// Mapping from `(KeyModifiers, KeyCode)` to [`KeyAction`].
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Default bindings: arrows plus vim-style hjkl, and single-letter commands.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Char('/')), KeyAction::StartSearch);
        bindings.insert((M::NONE, Char('n')), KeyAction::NewBus);
        bindings.insert((M::NONE, Char('e')), KeyAction::EditSelection);
        bindings.insert((M::NONE, Enter), KeyAction::EditSelection);
        bindings.insert((M::NONE, Char('d')), KeyAction::DeleteSelection);
        bindings.insert((M::NONE, Delete), KeyAction::DeleteSelection);
        bindings.insert((M::NONE, Char('r')), KeyAction::Reload);
        bindings.insert((M::NONE, Esc), KeyAction::DismissError);

        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);
        bindings.insert((M::NONE, Left), KeyAction::PageUp);
        bindings.insert((M::NONE, Right), KeyAction::PageDown);
        bindings.insert((M::NONE, Char('h')), KeyAction::PageUp);
        bindings.insert((M::NONE, Char('l')), KeyAction::PageDown);

        Self { bindings }
    }

    /// Load `path`, else an existing `keybinds.conf` in the usual places,
    /// else write the defaults to `path` and return them.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        if let Some(existing) = crate::app::config::config_file_read_path("keybinds.conf") {
            return Self::from_file(&existing).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(e) = km.write_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not write default keybinds");
        }
        km
    }

    /// Read `<Action> = <KeySpec>` lines on top of the defaults.
    ///
    /// Returns `None` if the file cannot be read. Lines that do not parse are
    /// skipped.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else { continue };
            match (parse_action(lhs), parse_key(rhs)) {
                (Some(action), Some(key)) => {
                    map.bindings.insert(key, action);
                }
                _ => tracing::warn!(line, "ignoring unparsable keybinding"),
            }
        }
        Some(map)
    }

    /// Write the default-style dump of bindings with a short header.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# bus-roster keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str("# KeySpec examples: q, Ctrl+c, Enter, Esc, Up, Down, Left, Right, PageUp, PageDown, Delete, /\n");
        buf.push_str("# Actions: Quit, StartSearch, NewBus, EditSelection, DeleteSelection, Reload, DismissError, MoveUp, MoveDown, PageUp, PageDown, Ignore\n\n");

        let mut all = self.all_bindings();
        all.sort_by_key(|((mods, code), action)| (format_action(*action), Self::format_key(*mods, *code)));
        for ((mods, code), action) in all {
            let _ = writeln!(&mut buf, "{} = {}", format_action(action), Self::format_key(mods, code));
        }

        std::fs::write(path, buf)
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Snapshot of all bindings as ((modifiers, code), action) pairs.
    pub fn all_bindings(&self) -> Vec<((KeyModifiers, KeyCode), KeyAction)> {
        self.bindings.iter().map(|(k, v)| (*k, *v)).collect()
    }

    /// Keys bound to `action`, formatted and sorted.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((m, c), _)| Self::format_key(*m, *c))
            .collect();
        keys.sort();
        keys
    }

    /// Format a key into a spec like "Ctrl+c" or "PageUp".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Delete => "Delete".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            BackTab => "BackTab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Delete" => Delete,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "BackTab" => BackTab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    match s.trim() {
        "Quit" => Some(KeyAction::Quit),
        "StartSearch" => Some(KeyAction::StartSearch),
        "NewBus" => Some(KeyAction::NewBus),
        "EditSelection" => Some(KeyAction::EditSelection),
        "DeleteSelection" => Some(KeyAction::DeleteSelection),
        "Reload" => Some(KeyAction::Reload),
        "DismissError" => Some(KeyAction::DismissError),
        "MoveUp" => Some(KeyAction::MoveUp),
        "MoveDown" => Some(KeyAction::MoveDown),
        "PageUp" => Some(KeyAction::PageUp),
        "PageDown" => Some(KeyAction::PageDown),
        "Ignore" => Some(KeyAction::Ignore),
        _ => None,
    }
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::StartSearch => "StartSearch",
        KeyAction::NewBus => "NewBus",
        KeyAction::EditSelection => "EditSelection",
        KeyAction::DeleteSelection => "DeleteSelection",
        KeyAction::Reload => "Reload",
        KeyAction::DismissError => "DismissError",
        KeyAction::MoveUp => "MoveUp",
        KeyAction::MoveDown => "MoveDown",
        KeyAction::PageUp => "PageUp",
        KeyAction::PageDown => "PageDown",
        KeyAction::Ignore => "Ignore",
    }
}
