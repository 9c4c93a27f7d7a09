/// Error type for registry operations.
///
/// Variants are distinguishable by kind so the web adapter can map them to
/// status codes without matching on message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The referenced activity does not exist.
    #[error("activity {0:?} not found")]
    ActivityNotFound(String),

    /// The email is already on the activity's participant list.
    #[error("{email:?} is already signed up for {activity:?}")]
    AlreadyRegistered { activity: String, email: String },

    /// The email is not on the activity's participant list.
    #[error("{email:?} is not signed up for {activity:?}")]
    NotRegistered { activity: String, email: String },
}
