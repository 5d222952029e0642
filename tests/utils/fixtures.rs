#![allow(dead_code)]

use course_catalog::{choice, course, enrollment, question, user, Catalog};
use entity::{choices, courses, enrollments, questions, users};

pub async fn user(catalog: &Catalog) -> users::Model {
    let id = uuid::Uuid::new_v4();
    user::create(
        catalog.db(),
        catalog.identity(),
        user::NewUser {
            id: Some(id),
            username: format!("user-{}", id.simple()),
        },
    )
    .await
    .expect("failed to create user")
}

pub async fn course(catalog: &Catalog, name: &str) -> courses::Model {
    course::create(
        catalog.db(),
        course::NewCourse {
            name: Some(name.to_owned()),
            image: "course_images/cover.png".to_owned(),
            description: format!("all about {name}"),
            pub_date: None,
        },
    )
    .await
    .expect("failed to create course")
}

pub async fn enrollment(
    catalog: &Catalog,
    user: &users::Model,
    course: &courses::Model,
) -> enrollments::Model {
    enrollment::enroll(
        catalog.db(),
        catalog.identity(),
        enrollment::NewEnrollment {
            user_id: user.id,
            course_id: course.id,
            mode: None,
            rating: None,
        },
    )
    .await
    .expect("failed to enroll")
}

pub async fn question(catalog: &Catalog, course: &courses::Model, marks: f64) -> questions::Model {
    question::create(
        catalog.db(),
        question::NewQuestion {
            question_text: None,
            marks: Some(marks),
            course_ids: vec![course.id],
        },
    )
    .await
    .expect("failed to create question")
}

pub async fn choice(
    catalog: &Catalog,
    question: &questions::Model,
    text: &str,
    is_correct: bool,
) -> choices::Model {
    choice::create(
        catalog.db(),
        choice::NewChoice {
            question_id: Some(question.id),
            choice_text: text.to_owned(),
            is_correct: Some(is_correct),
        },
    )
    .await
    .expect("failed to create choice")
}
