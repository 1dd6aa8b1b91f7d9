//! Roles (funções) and their assignments to users.
//!
//! An assignment binds a user to a role for a validity window. Permanent
//! assignments may be open-ended; temporary ones must carry an end date.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use ulid::Ulid;

use crate::error::ValidationError;
use crate::user::UserId;

/// Permission identifiers grantable to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    RoteirizarUnidadesEstudo,
}

/// Permission catalog entry with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    pub id: Permission,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified: OffsetDateTime,
}

impl std::fmt::Display for PermissionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => f.write_str(description),
            None => write!(f, "{:?}", self.id),
        }
    }
}

/// Role identifier (ULID format).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct RoleId(pub Ulid);

/// A role (função) users can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    /// Short code (sigla) shown in listings.
    pub code: String,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

/// How a user is bound to a role. Stored as the source system's integer
/// codes (0 unspecified, 1 permanent, 2 temporary).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AssignmentKind {
    Unspecified,
    #[default]
    Permanent,
    Temporary,
}

impl From<AssignmentKind> for u8 {
    fn from(kind: AssignmentKind) -> Self {
        match kind {
            AssignmentKind::Unspecified => 0,
            AssignmentKind::Permanent => 1,
            AssignmentKind::Temporary => 2,
        }
    }
}

impl TryFrom<u8> for AssignmentKind {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unspecified),
            1 => Ok(Self::Permanent),
            2 => Ok(Self::Temporary),
            other => Err(ValidationError::new(
                "tipo",
                format!("tipo de associação desconhecido: {other}"),
            )),
        }
    }
}

/// Binds a user to a role for a validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: RoleId,
    pub user: UserId,
    #[serde(default)]
    pub kind: AssignmentKind,
    pub start_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl RoleAssignment {
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.kind == AssignmentKind::Permanent
    }

    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.kind == AssignmentKind::Temporary
    }

    /// Whether the assignment is in force on the given date.
    ///
    /// An end date equal to the probe date counts as already ended.
    #[must_use]
    pub fn is_active_on(&self, date: Date) -> bool {
        self.start_date <= date && self.end_date.is_none_or(|end| end > date)
    }

    /// Field-level consistency checks applied before persisting.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`ValidationError`], keyed to the
    /// offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_temporary() && self.end_date.is_none() {
            return Err(ValidationError::new(
                "data_fim",
                "É necessário definir uma data final para funções temporárias.",
            ));
        }
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(ValidationError::new(
                "data_fim",
                "Não pode ser menor que a data inicial.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn assignment(kind: AssignmentKind, start: Date, end: Option<Date>) -> RoleAssignment {
        RoleAssignment {
            role: RoleId(Ulid::nil()),
            user: UserId(Ulid::nil()),
            kind,
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn kind_predicates() {
        let permanent = assignment(AssignmentKind::Permanent, date!(2026 - 01 - 01), None);
        assert!(permanent.is_permanent());
        assert!(!permanent.is_temporary());

        let temporary = assignment(
            AssignmentKind::Temporary,
            date!(2026 - 01 - 01),
            Some(date!(2026 - 06 - 30)),
        );
        assert!(temporary.is_temporary());
        assert!(!temporary.is_permanent());
    }

    #[test]
    fn active_window() {
        let a = assignment(
            AssignmentKind::Temporary,
            date!(2026 - 01 - 10),
            Some(date!(2026 - 02 - 10)),
        );
        assert!(!a.is_active_on(date!(2026 - 01 - 09)));
        assert!(a.is_active_on(date!(2026 - 01 - 10)));
        assert!(a.is_active_on(date!(2026 - 02 - 09)));
        // End date counts as already ended.
        assert!(!a.is_active_on(date!(2026 - 02 - 10)));
    }

    #[test]
    fn open_ended_assignment_never_expires() {
        let a = assignment(AssignmentKind::Permanent, date!(2020 - 01 - 01), None);
        assert!(a.is_active_on(date!(2099 - 12 - 31)));
    }

    #[test]
    fn temporary_requires_end_date() {
        let a = assignment(AssignmentKind::Temporary, date!(2026 - 01 - 01), None);
        let err = a.validate().unwrap_err();
        assert_eq!(err.field, "data_fim");
        assert_eq!(
            err.message,
            "É necessário definir uma data final para funções temporárias."
        );
    }

    #[test]
    fn end_date_must_not_precede_start() {
        let a = assignment(
            AssignmentKind::Permanent,
            date!(2026 - 03 - 01),
            Some(date!(2026 - 02 - 01)),
        );
        let err = a.validate().unwrap_err();
        assert_eq!(err.field, "data_fim");
        assert_eq!(err.message, "Não pode ser menor que a data inicial.");
    }

    #[test]
    fn valid_assignments_pass() {
        assignment(AssignmentKind::Permanent, date!(2026 - 01 - 01), None)
            .validate()
            .unwrap();
        assignment(
            AssignmentKind::Temporary,
            date!(2026 - 01 - 01),
            Some(date!(2026 - 01 - 01)),
        )
        .validate()
        .unwrap();
    }

    #[test]
    fn assignment_kind_integer_codes() {
        assert_eq!(serde_json::to_string(&AssignmentKind::Temporary).unwrap(), "2");
        let parsed: AssignmentKind = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, AssignmentKind::Permanent);
        assert!(serde_json::from_str::<AssignmentKind>("7").is_err());
    }

    #[test]
    fn permission_serde_code() {
        assert_eq!(
            serde_json::to_string(&Permission::RoteirizarUnidadesEstudo).unwrap(),
            "\"ROTEIRIZAR_UNIDADES_ESTUDO\""
        );
    }

    #[test]
    fn permission_entry_display_prefers_description() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let mut entry = PermissionEntry {
            id: Permission::RoteirizarUnidadesEstudo,
            description: Some("Roteirizar unidades de estudo".into()),
            active: true,
            created: now,
            modified: now,
        };
        assert_eq!(entry.to_string(), "Roteirizar unidades de estudo");
        entry.description = None;
        assert_eq!(entry.to_string(), "RoteirizarUnidadesEstudo");
    }
}
