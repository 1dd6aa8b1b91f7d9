#![doc = include_str!("../README.md")]

pub mod cpf;
pub mod error;
pub mod roles;
pub mod study;
pub mod user;

// Re-exports for convenient access
pub use cpf::{Cpf, CpfError, validate_cpf};
pub use error::{Error, ValidationError};
pub use roles::{AssignmentKind, Permission, PermissionEntry, Role, RoleAssignment, RoleId};
pub use study::{
    Discipline, DisciplineId, Script, ScriptId, StudyGoal, StudyGoalId, StudyUnit, StudyUnitId,
    Task, TaskId,
};
pub use user::{BrazilianState, IdentityDocument, IdentityDocumentKind, User, UserId};
