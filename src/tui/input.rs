// Key press tracking
//
// Terminals differ in whether they deliver key release events and how they
// auto-repeat. This module normalizes both: every key gets a press policy,
// and the handler decides per event whether the bound action should fire.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How a key behaves while held down
#[derive(Debug, Clone, Copy)]
pub enum PressPolicy {
    /// Fire once per physical press. Repeated press events while held are
    /// debounced, which covers terminals that never send release events.
    Once,
    /// Fire on press, then again at `interval` after an initial `delay`.
    /// Used for cursor movement and scrolling.
    AutoRepeat { delay: Duration, interval: Duration },
}

impl PressPolicy {
    /// Cursor-movement repeat rate (arrows, vim keys)
    fn cursor() -> Self {
        Self::AutoRepeat {
            delay: Duration::from_millis(500),
            interval: Duration::from_millis(50),
        }
    }

    /// Faster repeat for page-sized jumps
    fn paging() -> Self {
        Self::AutoRepeat {
            delay: Duration::from_millis(300),
            interval: Duration::from_millis(30),
        }
    }
}

/// Debounce window for [`PressPolicy::Once`] keys when no release arrives
const ONCE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Timing of a key that is currently held
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Decides, per key event, whether the bound action should run
pub struct InputHandler {
    policies: HashMap<KeyCode, PressPolicy>,
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            policies: HashMap::new(),
            held: HashMap::new(),
        }
    }

    /// Assign `policy` to every key in `keys`
    pub fn bind(&mut self, keys: &[KeyCode], policy: PressPolicy) {
        for key in keys {
            self.policies.insert(*key, policy);
        }
    }

    /// Record a press event. Returns true when the action should fire.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let policy = self.policies.get(&key).copied().unwrap_or(PressPolicy::Once);

        match self.held.get_mut(&key) {
            None => {
                // Fresh press always fires.
                self.held.insert(
                    key,
                    Held {
                        since: now,
                        last_fired: now,
                    },
                );
                true
            }
            Some(held) => {
                let due = match policy {
                    PressPolicy::Once => now.duration_since(held.last_fired) >= ONCE_DEBOUNCE,
                    PressPolicy::AutoRepeat { delay, interval } => {
                        now.duration_since(held.since) >= delay
                            && now.duration_since(held.last_fired) >= interval
                    }
                };
                if due {
                    held.last_fired = now;
                }
                due
            }
        }
    }

    /// Record a release event so the next press fires immediately
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}

impl Default for InputHandler {
    /// Bindings for the console's key set
    fn default() -> Self {
        let mut handler = Self::new();

        handler.bind(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('h'),
                KeyCode::Char('l'),
            ],
            PressPolicy::cursor(),
        );

        handler.bind(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            PressPolicy::paging(),
        );

        handler.bind(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Backspace,
                // Quit
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                // Form actions: deselect, reset, clear logs
                KeyCode::Char('x'),
                KeyCode::Char('r'),
                KeyCode::Char('c'),
                // Direct route jumps
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Char('4'),
            ],
            PressPolicy::Once,
        );

        handler
    }
}
