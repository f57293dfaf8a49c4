//! Combat identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one combat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatId(pub Uuid);

impl CombatId {
    /// Generate a new random combat ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CombatId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CombatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(CombatId::new(), CombatId::new());
    }

    #[test]
    fn display_is_short() {
        assert_eq!(CombatId::new().to_string().len(), 8);
    }
}
