use serde::{Deserialize, Serialize};

/// A single extracurricular activity.
///
/// Activities are keyed by name in the registry; the name is not stored on
/// the record itself. `participants` preserves signup order and contains no
/// duplicates (enforced by the registry, not by this type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description shown on the landing page.
    pub description: String,
    /// Human-readable schedule; not machine-parsed.
    pub schedule: String,
    /// Advertised capacity. Informational only: signup does not enforce it.
    pub max_participants: u32,
    /// Signed-up student emails, in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Whether `email` is currently signed up (case-sensitive exact match).
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
