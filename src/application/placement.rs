use std::fmt;
use std::str::FromStr;

use crate::application::ApplicationError;

/// One `MANAGER:EMPLOYEE:SIDE` instruction for batch building.
///
/// The side token is kept verbatim; the tree decides whether it is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub manager: String,
    pub employee: String,
    pub side: String,
}

impl FromStr for Placement {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ApplicationError::InvalidPlacement {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [manager, employee, side] = parts.as_slice() else {
            return Err(invalid("expected MANAGER:EMPLOYEE:SIDE"));
        };
        if manager.is_empty() {
            return Err(invalid("manager is empty"));
        }
        if employee.is_empty() {
            return Err(invalid("employee is empty"));
        }

        Ok(Self {
            manager: manager.to_string(),
            employee: employee.to_string(),
            side: side.to_string(),
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.manager, self.employee, self.side)
    }
}
