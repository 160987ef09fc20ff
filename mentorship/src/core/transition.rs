//! Assignment state machine
//!
//! Planning is pure: it looks at the current student document and decides
//! which transition applies, and a transition lowers to the exact mutation
//! batch the repository must apply. The student's side is authoritative;
//! the mentor roster is never consulted to pick a branch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{MentorId, StudentId};
use std::collections::HashSet;

use crate::error::{MentorshipError, MentorshipResult};
use crate::model::Student;
use crate::store::Mutation;

/// Which branch an assignment took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionKind {
    FirstAssignment,
    ReturnToFormer,
    SwitchToNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Student has never had a mentor
    FirstAssignment {
        student_id: StudentId,
        mentor_id: MentorId,
    },
    /// Student goes back to a mentor already in their history
    ReturnToFormer {
        student_id: StudentId,
        mentor_id: MentorId,
        previous: Option<MentorId>,
    },
    /// Student moves to a mentor they have never had
    SwitchToNew {
        student_id: StudentId,
        mentor_id: MentorId,
        previous: Option<MentorId>,
    },
}

impl Transition {
    pub fn kind(&self) -> TransitionKind {
        match self {
            Transition::FirstAssignment { .. } => TransitionKind::FirstAssignment,
            Transition::ReturnToFormer { .. } => TransitionKind::ReturnToFormer,
            Transition::SwitchToNew { .. } => TransitionKind::SwitchToNew,
        }
    }

    pub fn previous(&self) -> Option<MentorId> {
        match *self {
            Transition::FirstAssignment { .. } => None,
            Transition::ReturnToFormer { previous, .. }
            | Transition::SwitchToNew { previous, .. } => previous,
        }
    }

    /// Lower to the mutation batch, in application order
    ///
    /// The previous pairing is always cleared before the new one is made
    /// current.
    pub fn mutations(&self, now: DateTime<Utc>) -> Vec<Mutation> {
        match *self {
            Transition::FirstAssignment {
                student_id,
                mentor_id,
            } => vec![Mutation::AppendPairing {
                student_id,
                mentor_id,
                date_added: now,
            }],
            Transition::ReturnToFormer {
                student_id,
                mentor_id,
                previous,
            } => {
                let mut mutations = clear_previous(student_id, previous);
                mutations.push(Mutation::SetPairingCurrent {
                    student_id,
                    mentor_id,
                    current: true,
                });
                mutations.push(Mutation::SetPrevMentor {
                    student_id,
                    prev_mentor_id: previous,
                });
                mutations
            }
            Transition::SwitchToNew {
                student_id,
                mentor_id,
                previous,
            } => {
                let mut mutations = clear_previous(student_id, previous);
                mutations.push(Mutation::AppendPairing {
                    student_id,
                    mentor_id,
                    date_added: now,
                });
                mutations.push(Mutation::SetPrevMentor {
                    student_id,
                    prev_mentor_id: previous,
                });
                mutations
            }
        }
    }
}

fn clear_previous(student_id: StudentId, previous: Option<MentorId>) -> Vec<Mutation> {
    previous
        .map(|mentor_id| Mutation::SetPairingCurrent {
            student_id,
            mentor_id,
            current: false,
        })
        .into_iter()
        .collect()
}

/// Decide how `student` moves to `mentor_id`
pub fn plan_assignment(student: &Student, mentor_id: MentorId) -> MentorshipResult<Transition> {
    let student_id = student.student_id;

    if student.is_assigned_to(mentor_id) {
        return Err(MentorshipError::AlreadyAssigned {
            student_id,
            mentor_id,
        });
    }

    let previous = student.current_mentor_id;

    let transition = if !student.is_mentor_assigned {
        Transition::FirstAssignment {
            student_id,
            mentor_id,
        }
    } else if student.has_history_with(mentor_id) {
        Transition::ReturnToFormer {
            student_id,
            mentor_id,
            previous,
        }
    } else {
        Transition::SwitchToNew {
            student_id,
            mentor_id,
            previous,
        }
    };

    Ok(transition)
}

/// Validated all-or-nothing batch assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub mentor_id: MentorId,
    pub student_ids: Vec<StudentId>,
}

impl BatchPlan {
    pub fn mutations(&self, now: DateTime<Utc>) -> Vec<Mutation> {
        self.student_ids
            .iter()
            .map(|&student_id| Mutation::AppendPairing {
                student_id,
                mentor_id: self.mentor_id,
                date_added: now,
            })
            .collect()
    }
}

/// Check a batch request against the students found eligible
///
/// `eligible` must be the existing, never-assigned students among
/// `requested`. Every requested slot needs its own eligible student, so an
/// id that is missing, taken, or listed twice fails the whole batch.
pub fn plan_batch(
    mentor_id: MentorId,
    requested: &[StudentId],
    eligible: &[Student],
) -> MentorshipResult<BatchPlan> {
    let eligible_ids: HashSet<StudentId> = eligible.iter().map(|s| s.student_id).collect();

    let mut seen = HashSet::new();
    let rejected: Vec<String> = requested
        .iter()
        .filter(|&&id| !seen.insert(id) || !eligible_ids.contains(&id))
        .map(|id| id.to_string())
        .collect();

    if !rejected.is_empty() {
        return Err(MentorshipError::conflict(format!(
            "{} of {} students do not exist, already have a mentor or are repeated: {}",
            rejected.len(),
            requested.len(),
            rejected.join(", ")
        )));
    }

    Ok(BatchPlan {
        mentor_id,
        student_ids: requested.to_vec(),
    })
}
