//! Authoritative in-process state shared by every repository backend
//!
//! Holds mentor and student records plus the pairing ledger, and builds the
//! caller-facing documents from them. Records are kept in creation order and
//! looked up by linear scan.

use serde::{Deserialize, Serialize};
use shared::{MentorId, NewMentor, NewStudent, StudentId};
use std::collections::HashSet;

use super::{Mutation, StudentFilter};
use crate::error::{MentorshipError, MentorshipResult};
use crate::model::{
    HistoryEntry, Mentor, MentorRecord, Pairing, RosterEntry, Student, StudentRecord,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
    #[serde(default)]
    mentors: Vec<MentorRecord>,
    #[serde(default)]
    students: Vec<StudentRecord>,
    #[serde(default)]
    pairings: Vec<Pairing>,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_mentor(&mut self, mentor: NewMentor) -> MentorshipResult<Mentor> {
        let name = require_non_empty("mentorName", &mentor.mentor_name)?;
        let email = require_non_empty("mentorEmail", &mentor.mentor_email)?;

        if self
            .mentors
            .iter()
            .any(|existing| existing.mentor_email.eq_ignore_ascii_case(email))
        {
            return Err(MentorshipError::conflict(format!(
                "a mentor with email {email} already exists"
            )));
        }

        let record = MentorRecord {
            mentor_id: MentorId::new(),
            mentor_name: name.to_string(),
            mentor_email: email.to_string(),
        };
        let mentor = self.project_mentor(&record);
        self.mentors.push(record);
        Ok(mentor)
    }

    pub fn insert_student(&mut self, student: NewStudent) -> MentorshipResult<Student> {
        let name = require_non_empty("studentName", &student.student_name)?;
        let email = require_non_empty("studentEmail", &student.student_email)?;

        if self
            .students
            .iter()
            .any(|existing| existing.student_email.eq_ignore_ascii_case(email))
        {
            return Err(MentorshipError::conflict(format!(
                "a student with email {email} already exists"
            )));
        }

        let record = StudentRecord {
            student_id: StudentId::new(),
            student_name: name.to_string(),
            student_email: email.to_string(),
            prev_mentor_id: None,
        };
        let student = self.project_student(&record);
        self.students.push(record);
        Ok(student)
    }

    pub fn mentor(&self, mentor_id: MentorId) -> Option<Mentor> {
        self.mentor_record(mentor_id)
            .map(|record| self.project_mentor(record))
    }

    pub fn student(&self, student_id: StudentId) -> Option<Student> {
        self.student_record(student_id)
            .map(|record| self.project_student(record))
    }

    pub fn mentors(&self) -> Vec<Mentor> {
        self.mentors
            .iter()
            .map(|record| self.project_mentor(record))
            .collect()
    }

    pub fn students(&self) -> Vec<Student> {
        self.students
            .iter()
            .map(|record| self.project_student(record))
            .collect()
    }

    pub fn students_by_ids(&self, student_ids: &[StudentId], filter: StudentFilter) -> Vec<Student> {
        let mut seen = HashSet::new();
        student_ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| self.student(*id))
            .filter(|student| filter.matches(student))
            .collect()
    }

    /// Apply a mutation batch to a copy and return it
    ///
    /// `self` is left untouched on failure, so callers can persist the
    /// returned state first and only then swap it in.
    pub fn apply(&self, mutations: &[Mutation]) -> MentorshipResult<Collections> {
        let mut next = self.clone();
        for mutation in mutations {
            next.apply_one(mutation)?;
        }
        next.validate()?;
        Ok(next)
    }

    /// Check ledger invariants: every row names known entities, one row per
    /// pair, one current row per student
    pub fn validate(&self) -> MentorshipResult<()> {
        let mentors: HashSet<MentorId> = self.mentors.iter().map(|r| r.mentor_id).collect();
        let students: HashSet<StudentId> = self.students.iter().map(|r| r.student_id).collect();
        let mut pairs = HashSet::new();
        let mut current = HashSet::new();

        for record in &self.students {
            if let Some(prev) = record.prev_mentor_id.filter(|id| !mentors.contains(id)) {
                return Err(MentorshipError::integrity(format!(
                    "student {} points at unknown previous mentor {}",
                    record.student_id, prev
                )));
            }
        }

        for pairing in &self.pairings {
            if !students.contains(&pairing.student_id) || !mentors.contains(&pairing.mentor_id) {
                return Err(MentorshipError::integrity(format!(
                    "pairing between student {} and mentor {} names an unknown entity",
                    pairing.student_id, pairing.mentor_id
                )));
            }
            if !pairs.insert((pairing.student_id, pairing.mentor_id)) {
                return Err(MentorshipError::integrity(format!(
                    "student {} has more than one history entry for mentor {}",
                    pairing.student_id, pairing.mentor_id
                )));
            }
            if pairing.is_current && !current.insert(pairing.student_id) {
                return Err(MentorshipError::integrity(format!(
                    "student {} would have more than one current mentor",
                    pairing.student_id
                )));
            }
        }

        Ok(())
    }

    fn apply_one(&mut self, mutation: &Mutation) -> MentorshipResult<()> {
        match *mutation {
            Mutation::AppendPairing {
                student_id,
                mentor_id,
                date_added,
            } => {
                self.require_student(student_id)?;
                self.require_mentor(mentor_id)?;
                if self.pairings.iter().any(|p| p.pairs(student_id, mentor_id)) {
                    return Err(MentorshipError::integrity(format!(
                        "student {student_id} already has a history entry for mentor {mentor_id}"
                    )));
                }
                self.pairings
                    .push(Pairing::current(student_id, mentor_id, date_added));
            }
            Mutation::SetPairingCurrent {
                student_id,
                mentor_id,
                current,
            } => {
                let pairing = self
                    .pairings
                    .iter_mut()
                    .find(|p| p.pairs(student_id, mentor_id))
                    .ok_or_else(|| {
                        MentorshipError::integrity(format!(
                            "no pairing between student {student_id} and mentor {mentor_id}"
                        ))
                    })?;
                pairing.is_current = current;
            }
            Mutation::SetPrevMentor {
                student_id,
                prev_mentor_id,
            } => {
                if let Some(mentor_id) = prev_mentor_id {
                    self.require_mentor(mentor_id)?;
                }
                let record = self
                    .students
                    .iter_mut()
                    .find(|record| record.student_id == student_id)
                    .ok_or_else(|| MentorshipError::student_not_found(student_id))?;
                record.prev_mentor_id = prev_mentor_id;
            }
        }
        Ok(())
    }

    fn mentor_record(&self, mentor_id: MentorId) -> Option<&MentorRecord> {
        self.mentors
            .iter()
            .find(|record| record.mentor_id == mentor_id)
    }

    fn student_record(&self, student_id: StudentId) -> Option<&StudentRecord> {
        self.students
            .iter()
            .find(|record| record.student_id == student_id)
    }

    fn require_mentor(&self, mentor_id: MentorId) -> MentorshipResult<&MentorRecord> {
        self.mentor_record(mentor_id)
            .ok_or_else(|| MentorshipError::mentor_not_found(mentor_id))
    }

    fn require_student(&self, student_id: StudentId) -> MentorshipResult<&StudentRecord> {
        self.student_record(student_id)
            .ok_or_else(|| MentorshipError::student_not_found(student_id))
    }

    fn project_mentor(&self, record: &MentorRecord) -> Mentor {
        let students_assigned = self
            .pairings
            .iter()
            .filter(|pairing| pairing.mentor_id == record.mentor_id)
            .filter_map(|pairing| {
                self.student_record(pairing.student_id)
                    .map(|student| RosterEntry {
                        student_id: pairing.student_id,
                        student_name: student.student_name.clone(),
                        is_current_student: pairing.is_current,
                    })
            })
            .collect();

        Mentor {
            mentor_id: record.mentor_id,
            mentor_name: record.mentor_name.clone(),
            mentor_email: record.mentor_email.clone(),
            students_assigned,
        }
    }

    fn project_student(&self, record: &StudentRecord) -> Student {
        let mentor_assigned: Vec<HistoryEntry> = self
            .pairings
            .iter()
            .filter(|pairing| pairing.student_id == record.student_id)
            .filter_map(|pairing| {
                self.mentor_record(pairing.mentor_id)
                    .map(|mentor| HistoryEntry {
                        mentor_id: pairing.mentor_id,
                        mentor_name: mentor.mentor_name.clone(),
                        is_current_mentor: pairing.is_current,
                        date_added: pairing.date_added,
                    })
            })
            .collect();

        let current_mentor_id = mentor_assigned
            .iter()
            .find(|entry| entry.is_current_mentor)
            .map(|entry| entry.mentor_id);

        Student {
            student_id: record.student_id,
            student_name: record.student_name.clone(),
            student_email: record.student_email.clone(),
            is_mentor_assigned: !mentor_assigned.is_empty(),
            current_mentor_id,
            prev_mentor_id: record.prev_mentor_id,
            mentor_assigned,
        }
    }
}

fn require_non_empty<'a>(field: &str, value: &'a str) -> MentorshipResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MentorshipError::validation(field, "must not be empty"));
    }
    Ok(trimmed)
}
