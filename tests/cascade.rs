mod utils;

use entity::{
    choices, course_instructors, enrollments, instructors, learners, lessons, question_courses,
    submission_choices, submissions,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use utils::prelude::*;

#[tokio::test]
async fn deleting_course_removes_lessons_and_enrollments() {
    let catalog = db::setup().await;
    let db = catalog.db();

    let learner = fixtures::user(&catalog).await;
    let rust = fixtures::course(&catalog, "rust").await;
    let go = fixtures::course(&catalog, "go").await;

    for title in ["ownership", "borrowing"] {
        lesson::create(
            db,
            lesson::NewLesson {
                course_id: rust.id,
                title: Some(title.to_owned()),
                order: None,
                content: String::new(),
            },
        )
        .await
        .unwrap();
    }

    let rust_enrollment = fixtures::enrollment(&catalog, &learner, &rust).await;
    fixtures::enrollment(&catalog, &learner, &go).await;
    fixtures::question(&catalog, &rust, 1.0).await;

    submission::submit(db, rust_enrollment.id, []).await.unwrap();

    course::delete(db, rust.id).await.unwrap();

    assert_eq!(lessons::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(submissions::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(question_courses::Entity::find().count(db).await.unwrap(), 0);

    let remaining = enrollments::Entity::find().all(db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].course_id, go.id);
}

#[tokio::test]
async fn deleting_question_keeps_its_choices() {
    let catalog = db::setup().await;
    let db = catalog.db();

    let course = fixtures::course(&catalog, "sql").await;
    let question = fixtures::question(&catalog, &course, 1.0).await;
    let a = fixtures::choice(&catalog, &question, "SELECT", true).await;
    let b = fixtures::choice(&catalog, &question, "FETCH", false).await;

    question::delete(db, question.id).await.unwrap();

    for id in [a.id, b.id] {
        let choice = choice::get(db, id).await.unwrap();
        assert_eq!(choice.question_id, None);
    }
    assert_eq!(question_courses::Entity::find().count(db).await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_user_removes_instructor_and_learner() {
    let catalog = db::setup().await;
    let db = catalog.db();

    let user = fixtures::user(&catalog).await;
    let other = fixtures::user(&catalog).await;
    let course = fixtures::course(&catalog, "databases").await;

    let teacher = instructor::create(
        db,
        catalog.identity(),
        instructor::NewInstructor {
            user_id: user.id,
            full_time: None,
            total_learners: None,
        },
    )
    .await
    .unwrap();
    course::add_instructor(db, course.id, teacher.id).await.unwrap();

    for user_id in [user.id, other.id] {
        learner::create(
            db,
            catalog.identity(),
            learner::NewLearner {
                user_id,
                occupation: None,
                social_link: None,
            },
        )
        .await
        .unwrap();
    }
    fixtures::enrollment(&catalog, &user, &course).await;

    user::delete(db, user.id).await.unwrap();

    assert_eq!(instructors::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(course_instructors::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(enrollments::Entity::find().count(db).await.unwrap(), 0);

    let learners = learners::Entity::find().all(db).await.unwrap();
    assert_eq!(learners.len(), 1);
    assert_eq!(learners[0].user_id, other.id);

    // the course itself is untouched
    course::get(db, course.id).await.unwrap();
}

#[tokio::test]
async fn deleting_choice_drops_it_from_submissions() {
    let catalog = db::setup().await;
    let db = catalog.db();

    let user = fixtures::user(&catalog).await;
    let course = fixtures::course(&catalog, "networks").await;
    let enrollment = fixtures::enrollment(&catalog, &user, &course).await;
    let question = fixtures::question(&catalog, &course, 1.0).await;
    let a = fixtures::choice(&catalog, &question, "TCP", true).await;
    let b = fixtures::choice(&catalog, &question, "UDP", false).await;

    let submission = submission::submit(db, enrollment.id, [a.id, b.id])
        .await
        .unwrap();

    choice::delete(db, b.id).await.unwrap();

    let selected = submission::choices(db, submission.id).await.unwrap();
    assert_eq!(selected, vec![a]);
    assert_eq!(submission_choices::Entity::find().count(db).await.unwrap(), 1);
    assert_eq!(choices::Entity::find().count(db).await.unwrap(), 1);
}
