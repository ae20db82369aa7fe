//! Session gate: a shared-passphrase role flag kept in SessionStorage.
//!
//! This is a UI mode switch, not a security boundary. The passphrases are
//! embedded constants and anything running in the page can bypass the check;
//! the flag only decides which fields the shell renders.

use std::rc::Rc;

use crate::persistence::{ROLE_KEY, StorageArea};

/// Access level within the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full visibility, including revenue and contract fields
    Ceo,
    /// Restricted team view
    Team,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO",
            Role::Team => "TEAM",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CEO" => Some(Role::Ceo),
            "TEAM" => Some(Role::Team),
            _ => None,
        }
    }

    /// Whether this role sees the privileged slice of the dashboard
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Ceo)
    }
}

const CEO_PASSPHRASE: &str = "platinumceo";
const TEAM_PASSPHRASE: &str = "platinumteam";

/// Holds the current role and keeps it in a session-scoped storage area so a
/// tab reload within the same session stays signed in.
pub struct SessionGate {
    area: Rc<dyn StorageArea>,
    role: Option<Role>,
    initialized: bool,
}

impl SessionGate {
    pub fn new(area: Rc<dyn StorageArea>) -> Self {
        Self {
            area,
            role: None,
            initialized: false,
        }
    }

    /// Restore the role saved earlier in this browser session, if any.
    /// Unrecognized values are ignored and leave the gate signed out.
    pub fn initialize(&mut self) {
        if let Some(saved) = self.area.read(ROLE_KEY) {
            match Role::from_str(&saved) {
                Some(role) => {
                    log::info!("Restored {} session", role.as_str());
                    self.role = Some(role);
                }
                None => log::warn!("Ignoring unrecognized saved role {saved:?}"),
            }
        }
        self.initialized = true;
    }

    /// True once [`SessionGate::initialize`] has run, whether or not it found
    /// a saved role
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Check `passphrase` against the fixed role secrets. A match sets the
    /// role and persists it for the rest of the session; a miss changes
    /// nothing and returns `false` (the shell owns the transient error UI).
    pub fn authenticate(&mut self, passphrase: &str) -> bool {
        let role = if passphrase == CEO_PASSPHRASE {
            Role::Ceo
        } else if passphrase == TEAM_PASSPHRASE {
            Role::Team
        } else {
            return false;
        };
        self.role = Some(role);
        if !self.area.write(ROLE_KEY, role.as_str()) {
            log::warn!("Could not persist role; sign-in will not survive reload");
        }
        true
    }

    /// Sign out: clears the session flag and the in-memory role
    pub fn deauthenticate(&mut self) {
        self.role = None;
        self.area.remove(ROLE_KEY);
    }
}
