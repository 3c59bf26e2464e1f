//! Frontend Models

use serde::{Deserialize, Serialize};

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}
