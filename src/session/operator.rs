use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TerminalError;

/// Operator role. Not enforced by this core; carried for authorization
/// decisions in calling code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Operator,
    Supervisor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Operator => write!(f, "OPERATOR"),
            Role::Supervisor => write!(f, "SUPERVISOR"),
        }
    }
}

/// A floor worker known to the terminal. Created out-of-band (seed or admin
/// data) and read-only to this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// 4-digit secret matched during login.
    pub pin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Lookup collaborator consulted after the PIN format gate passes.
pub trait OperatorLookup {
    fn find_by_pin(&self, pin: &str) -> Option<Operator>;
}

/// In-process operator directory backed by a plain list, loadable from the
/// seed JSON format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorDirectory {
    operators: Vec<Operator>,
}

impl OperatorDirectory {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    /// Parse a directory from a JSON array of operators.
    pub fn from_json(contents: &str) -> Result<Self, TerminalError> {
        let operators: Vec<Operator> = serde_json::from_str(contents)?;
        Ok(Self { operators })
    }

    pub fn load(path: &Path) -> Result<Self, TerminalError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl OperatorLookup for OperatorDirectory {
    fn find_by_pin(&self, pin: &str) -> Option<Operator> {
        self.operators.iter().find(|o| o.pin == pin).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OperatorDirectory {
        OperatorDirectory::new(vec![
            Operator {
                id: "u-1".into(),
                name: "Marta".into(),
                role: Role::Operator,
                pin: "1234".into(),
                avatar: None,
            },
            Operator {
                id: "u-2".into(),
                name: "Luis".into(),
                role: Role::Supervisor,
                pin: "4321".into(),
                avatar: Some("luis.png".into()),
            },
        ])
    }

    #[test]
    fn find_by_pin_matches_exactly() {
        let dir = sample();
        let op = dir.find_by_pin("4321").unwrap();
        assert_eq!(op.id, "u-2");
        assert_eq!(op.role, Role::Supervisor);
    }

    #[test]
    fn find_by_pin_misses() {
        assert!(sample().find_by_pin("9999").is_none());
    }

    #[test]
    fn parses_seed_json() {
        let json = r#"[
            {"id": "u-7", "name": "Ana", "role": "ADMIN", "pin": "0007"},
            {"id": "u-8", "name": "Bo", "role": "OPERATOR", "pin": "0008", "avatar": "bo.png"}
        ]"#;
        let dir = OperatorDirectory::from_json(json).unwrap();
        assert_eq!(dir.operators().len(), 2);
        assert_eq!(dir.operators()[0].role, Role::Admin);
        assert_eq!(dir.operators()[1].avatar.as_deref(), Some("bo.png"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(OperatorDirectory::from_json("{not json").is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("operators.json");
        std::fs::write(
            &path,
            r#"[{"id": "u-1", "name": "Marta", "role": "OPERATOR", "pin": "1234"}]"#,
        )
        .unwrap();

        let directory = OperatorDirectory::load(&path).unwrap();
        assert_eq!(directory.operators().len(), 1);
        assert!(directory.find_by_pin("1234").is_some());
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::Admin.to_string(), "ADMIN");
        assert_eq!(Role::Operator.to_string(), "OPERATOR");
        assert_eq!(Role::Supervisor.to_string(), "SUPERVISOR");
    }
}
