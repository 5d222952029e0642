mod utils;

use utils::prelude::*;

#[tokio::test]
async fn create_and_find() {
    let catalog = db::setup().await;
    let user = fixtures::user(&catalog).await;

    let created = learner::create(
        catalog.db(),
        catalog.identity(),
        learner::NewLearner {
            user_id: user.id,
            occupation: Some(Occupation::DatabaseAdmin),
            social_link: Some("https://example.com/me".to_owned()),
        },
    )
    .await
    .unwrap();

    let found = learner::find_by_user(catalog.db(), user.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    assert_json_include!(
        actual: serde_json::to_value(&created).unwrap(),
        expected: json!({ "occupation": "dba", "social_link": "https://example.com/me" })
    );
}

#[tokio::test]
async fn default_occupation() {
    let catalog = db::setup().await;
    let user = fixtures::user(&catalog).await;

    let created = learner::create(
        catalog.db(),
        catalog.identity(),
        learner::NewLearner {
            user_id: user.id,
            occupation: None,
            social_link: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(created.occupation, Occupation::Student);
}

#[tokio::test]
async fn invalid_social_link() {
    let catalog = db::setup().await;
    let user = fixtures::user(&catalog).await;

    let res = learner::create(
        catalog.db(),
        catalog.identity(),
        learner::NewLearner {
            user_id: user.id,
            occupation: None,
            social_link: Some("not a url".to_owned()),
        },
    )
    .await;

    assert_error!(res, Error::ConstraintViolation(_));
    assert_eq!(learner::find_by_user(catalog.db(), user.id).await.unwrap(), None);
}

#[tokio::test]
async fn clear_social_link() {
    let catalog = db::setup().await;
    let user = fixtures::user(&catalog).await;

    let created = learner::create(
        catalog.db(),
        catalog.identity(),
        learner::NewLearner {
            user_id: user.id,
            occupation: None,
            social_link: Some("https://example.com/me".to_owned()),
        },
    )
    .await
    .unwrap();

    let updated = learner::update(
        catalog.db(),
        created.id,
        learner::UpdateLearner {
            occupation: Some(Occupation::Developer),
            social_link: Some(None),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.occupation, Occupation::Developer);
    assert_eq!(updated.social_link, None);
}
