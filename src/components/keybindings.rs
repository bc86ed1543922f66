//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    NextCategory,
    PrevCategory,
    Toggle,
    Review,
    Back,
    Clear,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        // SHIFT is folded into the key code for characters and BackTab
        let modifiers = event.modifiers - KeyModifiers::SHIFT;
        self.key == event.code && self.modifiers == modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Picking,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous item"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next item"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous item"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next item"),
                Keybinding::new(KeyCode::Tab, KeyAction::NextCategory, "Tab", "Next category"),
                Keybinding::new(KeyCode::Right, KeyAction::NextCategory, "Right", "Next category"),
                Keybinding::new(
                    KeyCode::BackTab,
                    KeyAction::PrevCategory,
                    "S-Tab",
                    "Previous category",
                ),
                Keybinding::new(KeyCode::Left, KeyAction::PrevCategory, "Left", "Previous category"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Pick / unpick"),
                Keybinding::new(KeyCode::Enter, KeyAction::Toggle, "Enter", "Pick / unpick"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Review, "R", "Show my meals"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::Clear, "C", "Clear all picks"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Summary,
            vec![
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back to picking"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to picking"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action in the given mode
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|binding| binding.matches(event))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Picking => vec![
                KeyAction::NavigateUp,
                KeyAction::NextCategory,
                KeyAction::Toggle,
                KeyAction::Review,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Summary => vec![KeyAction::Back, KeyAction::Help, KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            match action {
                KeyAction::NavigateUp => items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Move".to_string(),
                }),
                KeyAction::NextCategory => items.push(NavBarItem {
                    key_display: "Tab".to_string(),
                    action_label: "Category".to_string(),
                }),
                _ => {
                    if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                        items.push(NavBarItem {
                            key_display: binding.display.clone(),
                            action_label: binding.description.clone(),
                        });
                    }
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, &[KeyAction]); 3] = [
            (
                "Navigation",
                &[
                    KeyAction::NavigateUp,
                    KeyAction::NavigateDown,
                    KeyAction::NextCategory,
                    KeyAction::PrevCategory,
                ],
            ),
            (
                "Actions",
                &[KeyAction::Toggle, KeyAction::Review, KeyAction::Clear],
            ),
            ("General", &[KeyAction::Back, KeyAction::Help, KeyAction::Quit]),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some(HelpSection {
                        title: title.to_string(),
                        items,
                    })
                }
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
