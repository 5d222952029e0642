mod utils;

use entity::{enrollments, instructors, submissions, users};
use sea_orm::{
    sea_query::{Alias, Query},
    ConnectionTrait, EntityTrait, PaginatorTrait,
};
use utils::prelude::*;

fn accounts() -> IdentityProvider {
    IdentityProvider::External {
        table: "accounts".to_owned(),
        id_column: "uuid".to_owned(),
    }
}

async fn table_exists(catalog: &Catalog, table: &str) -> bool {
    let db = catalog.db();
    let query = Query::select()
        .column(Alias::new("name"))
        .from(Alias::new("sqlite_master"))
        .and_where(sea_orm::sea_query::Expr::col(Alias::new("name")).eq(table))
        .to_owned();

    db.query_one(db.get_database_backend().build(&query))
        .await
        .unwrap()
        .is_some()
}

async fn insert_account(catalog: &Catalog, id: Uuid) {
    let db = catalog.db();
    let query = Query::insert()
        .into_table(Alias::new("accounts"))
        .columns([Alias::new("uuid")])
        .values_panic([id.into()])
        .to_owned();

    db.execute(db.get_database_backend().build(&query))
        .await
        .unwrap();
}

mod local {
    use super::*;

    #[tokio::test]
    async fn creates_users_table() {
        let catalog = db::setup().await;

        assert!(table_exists(&catalog, "users").await);
        assert!(table_exists(&catalog, "enrollments").await);
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let catalog = db::setup().await;
        let user = fixtures::user(&catalog).await;

        catalog.init_schema().await.unwrap();

        assert_eq!(user::get(catalog.db(), user.id).await.unwrap(), user);
    }

    #[tokio::test]
    async fn reset_drops_data() {
        let catalog = db::setup().await;
        fixtures::user(&catalog).await;
        fixtures::course(&catalog, "rust").await;

        catalog.reset_schema().await.unwrap();

        assert_eq!(users::Entity::find().count(catalog.db()).await.unwrap(), 0);
        assert!(course::list(catalog.db()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn drop_removes_every_table() {
        let catalog = db::setup().await;

        catalog.drop_schema().await.unwrap();

        for table in ["users", "courses", "submission_choices"] {
            assert!(!table_exists(&catalog, table).await, "{table} still exists");
        }
    }

    #[tokio::test]
    async fn column_defaults_apply_to_raw_inserts() {
        let catalog = db::setup().await;
        let user = fixtures::user(&catalog).await;
        let course = fixtures::course(&catalog, "rust").await;

        let before = chrono::Utc::now().date_naive();
        let query = Query::insert()
            .into_table(enrollments::Entity)
            .columns([enrollments::Column::UserId, enrollments::Column::CourseId])
            .values_panic([user.id.into(), course.id.into()])
            .to_owned();
        let db = catalog.db();
        db.execute(db.get_database_backend().build(&query))
            .await
            .unwrap();

        let enrollment = enrollment::find(db, user.id, course.id)
            .await
            .unwrap()
            .unwrap();
        let after = chrono::Utc::now().date_naive();
        assert_eq!(enrollment.mode, Mode::Audit);
        assert_eq!(enrollment.rating, 5.0);
        assert!(enrollment.date_enrolled == before || enrollment.date_enrolled == after);

        let query = Query::insert()
            .into_table(submissions::Entity)
            .columns([submissions::Column::EnrollmentId])
            .values_panic([enrollment.id.into()])
            .to_owned();
        db.execute(db.get_database_backend().build(&query))
            .await
            .unwrap();

        let submission = submissions::Entity::find().one(db).await.unwrap().unwrap();
        let after = chrono::Utc::now().date_naive();
        assert!(submission.date_submitted == before || submission.date_submitted == after);
    }

    #[tokio::test]
    async fn duplicate_username() {
        let catalog = db::setup().await;
        let user = fixtures::user(&catalog).await;

        let res = user::create(
            catalog.db(),
            catalog.identity(),
            user::NewUser {
                id: None,
                username: user.username.clone(),
            },
        )
        .await;

        assert_error!(res, Error::Integrity(_));
    }
}

mod external {
    use super::*;

    async fn setup() -> Catalog {
        let catalog = db::connect(accounts()).await;
        db::execute(&catalog, "CREATE TABLE accounts (uuid uuid_text NOT NULL PRIMARY KEY)").await;
        catalog.init_schema().await.unwrap();
        catalog
    }

    #[tokio::test]
    async fn no_users_table() {
        let catalog = setup().await;

        assert!(!table_exists(&catalog, "users").await);
        assert!(table_exists(&catalog, "instructors").await);
    }

    #[tokio::test]
    async fn references_external_identities() {
        let catalog = setup().await;
        let db = catalog.db();

        let id = Uuid::new_v4();
        insert_account(&catalog, id).await;

        let instructor = instructor::create(
            db,
            catalog.identity(),
            instructor::NewInstructor {
                user_id: id,
                full_time: None,
                total_learners: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(instructor.user_id, id);

        let res = instructor::create(
            db,
            catalog.identity(),
            instructor::NewInstructor {
                user_id: Uuid::new_v4(),
                full_time: None,
                total_learners: None,
            },
        )
        .await;
        assert_error!(res, Error::NotFound { entity: "user", .. });

        db::execute(&catalog, "DELETE FROM accounts").await;
        assert_eq!(instructors::Entity::find().count(db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn users_are_not_managed_locally() {
        let catalog = setup().await;

        let res = user::create(
            catalog.db(),
            catalog.identity(),
            user::NewUser {
                id: None,
                username: "nobody".to_owned(),
            },
        )
        .await;

        assert_error!(res, Error::Config(_));
    }
}
