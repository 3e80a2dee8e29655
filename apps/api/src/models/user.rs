use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Recomputed from profile existence whenever a user leaves the service layer.
    pub profile_completed: bool,
}
