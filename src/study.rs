//! Study planning: disciplines, study units, tasks, scripts (roteiros)
//! and study goals (metas).
//!
//! A discipline is taught by one or more users. Study units break a
//! discipline into parts and carry tasks with expected durations. A script
//! pairs a study unit with the discipline it covers, and a study goal
//! groups scripts under a time window.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use ulid::Ulid;

use crate::error::ValidationError;
use crate::user::UserId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct DisciplineId(pub Ulid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct StudyUnitId(pub Ulid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct TaskId(pub Ulid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct ScriptId(pub Ulid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct StudyGoalId(pub Ulid);

/// A taught subject (disciplina).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: DisciplineId,
    pub name: String,
    /// Users teaching this discipline.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teachers: Vec<UserId>,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A unit of work with an expected duration (tarefa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub duration: Duration,
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

/// Unitary part of a discipline (unidade de estudo), carrying tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyUnit {
    pub id: StudyUnitId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskId>,
}

impl std::fmt::Display for StudyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A study script (roteiro): a study unit taken in the context of a
/// discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub id: ScriptId,
    pub study_unit: StudyUnitId,
    pub discipline: DisciplineId,
}

impl Script {
    /// Listing label, given the resolved unit and discipline names.
    #[must_use]
    pub fn describe(&self, unit_name: &str, discipline_name: &str) -> String {
        format!("{unit_name} - Referente à disciplina ({discipline_name}).")
    }
}

/// A study goal (meta de estudo) grouping scripts under a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGoal {
    pub id: StudyGoalId,
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// Deadline for completing every script in the goal.
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<ScriptId>,
}

impl StudyGoal {
    #[must_use]
    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] keyed to `termino` when the deadline
    /// does not come after the start.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.deadline <= self.start {
            return Err(ValidationError::new(
                "termino",
                "Deve ser posterior à data de início.",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for StudyGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}
