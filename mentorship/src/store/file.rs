//! JSON-file repository
//!
//! Keeps the same in-memory collections as [`MemoryRepository`] and writes
//! the whole document to disk after every change. A write goes to a
//! sibling `.tmp` file first and is renamed over the data file, so a crash
//! leaves either the old or the new state. The in-memory copy is only
//! replaced once the write has succeeded.
//!
//! [`MemoryRepository`]: super::MemoryRepository

use async_trait::async_trait;
use shared::{Component, MentorId, NewMentor, NewStudent, StudentId, component_debug, component_error};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use super::{Collections, Mutation, Repository, StudentFilter};
use crate::error::MentorshipResult;
use crate::model::{Mentor, Student};

#[derive(Clone)]
pub struct FileRepository {
    path: PathBuf,
    collections: Arc<RwLock<Collections>>,
}

impl FileRepository {
    /// Open the data file, starting empty if it does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> MentorshipResult<Self> {
        let path = path.into();

        let collections = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Collections::new(),
            Ok(bytes) => {
                let collections: Collections = serde_json::from_slice(&bytes)?;
                collections.validate()?;
                collections
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await?;
                }
                Collections::new()
            }
            Err(err) => return Err(err.into()),
        };

        component_debug!(Component::Mentorship, "📁 Opened data file {}", path.display());

        Ok(Self {
            path,
            collections: Arc::new(RwLock::new(collections)),
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn persist(&self, collections: &Collections) -> MentorshipResult<()> {
        let bytes = serde_json::to_vec_pretty(collections)?;
        let temp_path = self.temp_path();

        let result = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(&bytes).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(err) = result {
            component_error!(
                Component::Mentorship,
                "❌ Failed to write {}: {}",
                self.path.display(),
                err
            );
            // the temp file may not exist if creating it was what failed
            let _ = fs::remove_file(&temp_path).await;
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for FileRepository {
    async fn create_mentor(&self, mentor: NewMentor) -> MentorshipResult<Mentor> {
        let mut collections = self.collections.write().await;
        let mut next = collections.clone();
        let created = next.insert_mentor(mentor)?;
        self.persist(&next).await?;
        *collections = next;
        Ok(created)
    }

    async fn create_student(&self, student: NewStudent) -> MentorshipResult<Student> {
        let mut collections = self.collections.write().await;
        let mut next = collections.clone();
        let created = next.insert_student(student)?;
        self.persist(&next).await?;
        *collections = next;
        Ok(created)
    }

    async fn find_mentor_by_id(&self, mentor_id: MentorId) -> MentorshipResult<Option<Mentor>> {
        Ok(self.collections.read().await.mentor(mentor_id))
    }

    async fn find_student_by_id(&self, student_id: StudentId) -> MentorshipResult<Option<Student>> {
        Ok(self.collections.read().await.student(student_id))
    }

    async fn list_mentors(&self) -> MentorshipResult<Vec<Mentor>> {
        Ok(self.collections.read().await.mentors())
    }

    async fn list_students(&self) -> MentorshipResult<Vec<Student>> {
        Ok(self.collections.read().await.students())
    }

    async fn find_students_by_ids(
        &self,
        student_ids: Vec<StudentId>,
        filter: StudentFilter,
    ) -> MentorshipResult<Vec<Student>> {
        Ok(self
            .collections
            .read()
            .await
            .students_by_ids(&student_ids, filter))
    }

    async fn apply(&self, mutations: Vec<Mutation>) -> MentorshipResult<()> {
        let mut collections = self.collections.write().await;
        let next = collections.apply(&mutations)?;
        self.persist(&next).await?;
        *collections = next;
        Ok(())
    }
}
