//! Course service: the six course operations over a pluggable repository.
//!
//! Every public method runs inside exactly one repository transaction. The
//! transaction is committed on success; any early return drops it, which
//! rolls it back.

use async_trait::async_trait;
use chrono::Utc;

use crate::course::{Course, CourseChanges, CourseStatus, NewCourse, COURSE_ENTITY};
use crate::error::CoreError;
use crate::types::DbId;

/// Persistence seam for courses.
///
/// `Tx` is the transaction handle. Dropping it without calling
/// [`CourseRepository::commit`] must discard every write made through it.
#[async_trait]
pub trait CourseRepository: Send + Sync + 'static {
    type Tx: Send;

    /// Open a transaction.
    async fn begin(&self) -> Result<Self::Tx, CoreError>;

    /// Make the writes done through `tx` visible.
    async fn commit(&self, tx: Self::Tx) -> Result<(), CoreError>;

    /// All courses, or only those with `status` when given.
    async fn find_all(
        &self,
        tx: &mut Self::Tx,
        status: Option<CourseStatus>,
    ) -> Result<Vec<Course>, CoreError>;

    async fn find_by_id(&self, tx: &mut Self::Tx, id: DbId) -> Result<Option<Course>, CoreError>;

    /// Insert when `course.id` is `None`, update otherwise. Returns the stored row.
    async fn save(&self, tx: &mut Self::Tx, course: Course) -> Result<Course, CoreError>;

    /// Delete by id. Deleting a missing id is not an error.
    async fn delete_by_id(&self, tx: &mut Self::Tx, id: DbId) -> Result<(), CoreError>;
}

/// Validates and orchestrates course state transitions.
pub struct CourseService<R> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List courses, optionally filtered by status.
    pub async fn get_all_courses(
        &self,
        status: Option<CourseStatus>,
    ) -> Result<Vec<Course>, CoreError> {
        let mut tx = self.repo.begin().await?;
        let courses = self.repo.find_all(&mut tx, status).await?;
        self.repo.commit(tx).await?;
        Ok(courses)
    }

    /// Look a course up. A missing course is `Ok(None)`.
    pub async fn get_course_by_id(&self, id: DbId) -> Result<Option<Course>, CoreError> {
        let mut tx = self.repo.begin().await?;
        let course = self.repo.find_by_id(&mut tx, id).await?;
        self.repo.commit(tx).await?;
        Ok(course)
    }

    /// Persist a new draft course.
    pub async fn create_course(&self, input: NewCourse) -> Result<Course, CoreError> {
        let mut tx = self.repo.begin().await?;
        let course = self.repo.save(&mut tx, Course::new(input)).await?;
        self.repo.commit(tx).await?;
        tracing::info!(course_id = ?course.id, "Course created");
        Ok(course)
    }

    /// Apply a partial update to a course that is not archived.
    pub async fn update_course(&self, id: DbId, changes: CourseChanges) -> Result<Course, CoreError> {
        let mut tx = self.repo.begin().await?;
        let mut course = self.load(&mut tx, id).await?;
        course.apply_changes(changes)?;
        let course = self.repo.save(&mut tx, course).await?;
        self.repo.commit(tx).await?;
        tracing::info!(course_id = id, "Course updated");
        Ok(course)
    }

    /// Publish a course with a title and a positive duration.
    pub async fn publish_course(&self, id: DbId) -> Result<Course, CoreError> {
        let mut tx = self.repo.begin().await?;
        let mut course = self.load(&mut tx, id).await?;
        course.publish(Utc::now())?;
        let course = self.repo.save(&mut tx, course).await?;
        self.repo.commit(tx).await?;
        tracing::info!(course_id = id, published_at = ?course.published_at, "Course published");
        Ok(course)
    }

    /// Archive a course. Allowed from every status, including `ARCHIVED`.
    pub async fn archive_course(&self, id: DbId) -> Result<Course, CoreError> {
        let mut tx = self.repo.begin().await?;
        let mut course = self.load(&mut tx, id).await?;
        let previous = course.status;
        course.archive();
        let course = self.repo.save(&mut tx, course).await?;
        self.repo.commit(tx).await?;
        tracing::info!(course_id = id, %previous, "Course archived");
        Ok(course)
    }

    /// Delete a course by id without checking that it exists.
    pub async fn delete_course(&self, id: DbId) -> Result<(), CoreError> {
        let mut tx = self.repo.begin().await?;
        self.repo.delete_by_id(&mut tx, id).await?;
        self.repo.commit(tx).await?;
        tracing::info!(course_id = id, "Course delete requested");
        Ok(())
    }

    async fn load(&self, tx: &mut R::Tx, id: DbId) -> Result<Course, CoreError> {
        self.repo
            .find_by_id(tx, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: COURSE_ENTITY,
                id,
            })
    }
}
