use crate::{
    error::{Error, Result},
    utils::{deleted, set_option, updated},
};
use entity::{
    course_instructors,
    courses::{self, constants::IMAGE_UPLOAD_DIR},
    enrollments, instructors, question_courses, questions,
};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewCourse {
    #[serde(default)]
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub image: String,
    #[validate(length(max = 1000))]
    pub description: String,
    #[serde(default)]
    pub pub_date: Option<chrono::NaiveDate>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub image: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub pub_date: Option<Option<chrono::NaiveDate>>,
    #[validate(range(min = 0))]
    pub total_enrollment: Option<i32>,
}

impl UpdateCourse {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.description.is_none()
            && self.pub_date.is_none()
            && self.total_enrollment.is_none()
    }
}

/// Images are stored under the course upload directory of the asset store.
fn validate_image(image: &str) -> Result {
    match image.strip_prefix(IMAGE_UPLOAD_DIR) {
        Some(file) if !file.is_empty() && !file.ends_with('/') => Ok(()),
        _ => Err(Error::ConstraintViolation(format!(
            "image: {image:?} is not inside {IMAGE_UPLOAD_DIR}"
        ))),
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewCourse) -> Result<courses::Model> {
    input.validate()?;
    validate_image(&input.image)?;

    let mut course = courses::ActiveModel::new();
    if let Some(name) = input.name {
        course.name = Set(name);
    }
    course.image = Set(input.image);
    course.description = Set(input.description);
    course.pub_date = Set(input.pub_date);

    let course = course.insert(db).await?;
    tracing::debug!(course = course.id, "created course");

    Ok(course)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<courses::Model> {
    courses::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("course", id))
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<courses::Model>> {
    Ok(courses::Entity::find()
        .order_by_asc(courses::Column::Id)
        .all(db)
        .await?)
}

/// The `limit` courses with the most enrollments.
pub async fn popular<C: ConnectionTrait>(db: &C, limit: u64) -> Result<Vec<courses::Model>> {
    Ok(courses::Entity::find()
        .order_by_desc(courses::Column::TotalEnrollment)
        .order_by_asc(courses::Column::Id)
        .limit(limit)
        .all(db)
        .await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UpdateCourse,
) -> Result<courses::Model> {
    patch.validate()?;
    if let Some(image) = &patch.image {
        validate_image(image)?;
    }

    if patch.is_empty() {
        return get(db, id).await;
    }

    let active_model = courses::ActiveModel {
        id: Set(id),
        name: set_option(patch.name),
        image: set_option(patch.image),
        description: set_option(patch.description),
        pub_date: set_option(patch.pub_date),
        total_enrollment: set_option(patch.total_enrollment),
    };

    updated(
        courses::Entity::update(active_model).exec(db).await,
        "course",
        id,
    )
}

/// Deletes the course with its lessons, enrollments (and their submissions)
/// and instructor and question links.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = courses::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "course", id)
}

/// Assigns an instructor to the course. Assigning twice is a no-op.
pub async fn add_instructor<C: ConnectionTrait>(
    db: &C,
    course_id: i32,
    instructor_id: i32,
) -> Result {
    get(db, course_id).await?;
    super::instructor::get(db, instructor_id).await?;

    let existing = course_instructors::Entity::find_by_id((course_id, instructor_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    course_instructors::Entity::insert(course_instructors::ActiveModel {
        course_id: Set(course_id),
        instructor_id: Set(instructor_id),
    })
    .exec_without_returning(db)
    .await?;

    tracing::debug!(course = course_id, instructor = instructor_id, "assigned instructor");

    Ok(())
}

pub async fn remove_instructor<C: ConnectionTrait>(
    db: &C,
    course_id: i32,
    instructor_id: i32,
) -> Result {
    let res = course_instructors::Entity::delete_by_id((course_id, instructor_id))
        .exec(db)
        .await?;

    if res.rows_affected == 0 {
        return Err(Error::not_found(
            "course instructor",
            format!("{course_id}/{instructor_id}"),
        ));
    }

    Ok(())
}

pub async fn instructors<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Vec<instructors::Model>> {
    let course = get(db, id).await?;

    Ok(course
        .find_related(instructors::Entity)
        .order_by_asc(instructors::Column::Id)
        .all(db)
        .await?)
}

/// Identities of the users enrolled in the course.
pub async fn users<C: ConnectionTrait>(db: &C, id: i32) -> Result<Vec<Uuid>> {
    get(db, id).await?;

    Ok(enrollments::Entity::find()
        .select_only()
        .column(enrollments::Column::UserId)
        .filter(enrollments::Column::CourseId.eq(id))
        .order_by_asc(enrollments::Column::Id)
        .into_tuple()
        .all(db)
        .await?)
}

pub async fn questions<C: ConnectionTrait>(db: &C, id: i32) -> Result<Vec<questions::Model>> {
    get(db, id).await?;

    Ok(questions::Entity::find()
        .inner_join(question_courses::Entity)
        .filter(question_courses::Column::CourseId.eq(id))
        .order_by_asc(questions::Column::Id)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_must_live_in_upload_dir() {
        assert!(validate_image("course_images/rust.png").is_ok());
        assert!(validate_image("rust.png").is_err());
        assert!(validate_image("course_images/").is_err());
        assert!(validate_image("course_images/nested/").is_err());
    }

    #[test]
    fn long_names_fail_validation() {
        let input = NewCourse {
            name: Some("x".repeat(31)),
            image: "course_images/rust.png".to_owned(),
            description: String::new(),
            pub_date: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(UpdateCourse::default().is_empty());
        assert!(!UpdateCourse {
            pub_date: Some(None),
            ..Default::default()
        }
        .is_empty());
    }
}
