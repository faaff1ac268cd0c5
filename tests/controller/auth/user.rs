//! Tests for the current user endpoint.
//!
//! These go through the `CurrentUser` extractor, covering anonymous requests, sessions for
//! existing users and sessions whose user has since been removed from the database.

use accounts::{model::user::CurrentUserDto, server::security::StaticSecurityPolicy};
use axum::http::{header::LOCATION, StatusCode};
use sea_orm::EntityTrait;
use tower_sessions::SessionStore;

use super::*;

/// Expect 200 with a null user for a request without a session
#[tokio::test]
async fn returns_null_user_when_anonymous() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test.app(test.into_app_state());

    let resp = get(app, "/api/auth/user", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: CurrentUserDto = json(resp).await;
    assert_eq!(body.user, None);

    Ok(())
}

/// Expect 200 with the user remembered in the session
#[tokio::test]
async fn returns_user_remembered_in_session() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("fred").await?;
    let cookie = login(&test, &format!("acct:fred@{}", TEST_AUTH_DOMAIN)).await;
    let app = test.app(test.into_app_state());

    let resp = get(app, "/api/auth/user", Some(&cookie)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: CurrentUserDto = json(resp).await;
    let current = body.user.unwrap();
    assert_eq!(current.id, user.id);
    assert_eq!(current.userid, format!("acct:fred@{}", TEST_AUTH_DOMAIN));

    Ok(())
}

/// Expect the session user to resolve through username normalization
#[tokio::test]
async fn resolves_userid_with_differently_formatted_username() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    test.user().insert_user("Fred.Bloggs").await?;
    let state = test
        .into_app_state()
        .with_security_policy(StaticSecurityPolicy::new(format!(
            "acct:FREDBLOGGS@{}",
            TEST_AUTH_DOMAIN
        )));
    let app = test.app(state);

    let resp = get(app, "/api/auth/user", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: CurrentUserDto = json(resp).await;
    assert_eq!(body.user.unwrap().username, "Fred.Bloggs");

    Ok(())
}

/// Expect 302 back to the requested page when the session user was deleted
///
/// The session must also be removed from the store so later requests are anonymous.
#[tokio::test]
async fn redirects_and_invalidates_session_when_user_deleted() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("fred").await?;
    let cookie = login(&test, &format!("acct:fred@{}", TEST_AUTH_DOMAIN)).await;
    entity::prelude::User::delete_by_id(user.id)
        .exec(&test.db)
        .await?;
    let app = test.app(test.into_app_state());

    let resp = get(app, "/api/auth/user?tab=profile", Some(&cookie)).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/api/auth/user?tab=profile"
    );

    let session_id = test.session.id().unwrap();
    let record = test.store.load(&session_id).await.unwrap();
    assert!(record.is_none());

    Ok(())
}

/// Expect 302 when the security policy reports a userid with no user
#[tokio::test]
async fn redirects_when_policy_userid_has_no_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let state = test
        .into_app_state()
        .with_security_policy(StaticSecurityPolicy::new("userid"));
    let app = test.app(state);

    let resp = get(app, "/api/auth/user", None).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/api/auth/user");

    Ok(())
}

/// Expect 302 when the session holds a userid for another domain
#[tokio::test]
async fn redirects_when_session_userid_belongs_to_other_domain() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    test.user().insert_user("fred").await?;
    let cookie = login(&test, "acct:fred@elsewhere.test").await;
    let app = test.app(test.into_app_state());

    let resp = get(app, "/api/auth/user", Some(&cookie)).await;

    assert_eq!(resp.status(), StatusCode::FOUND);

    Ok(())
}

/// Expect an anonymous policy to leave the session untouched
#[tokio::test]
async fn anonymous_policy_does_not_invalidate_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let cookie = login(&test, "acct:ghost@example.com").await;
    let state = test
        .into_app_state()
        .with_security_policy(StaticSecurityPolicy::anonymous());
    let app = test.app(state);

    let resp = get(app, "/api/auth/user", Some(&cookie)).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let session_id = test.session.id().unwrap();
    let record = test.store.load(&session_id).await.unwrap();
    assert!(record.is_some());

    Ok(())
}

/// Expect 500 when the user table does not exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let cookie = login(&test, &format!("acct:fred@{}", TEST_AUTH_DOMAIN)).await;
    let app = test.app(test.into_app_state());

    let resp = get(app, "/api/auth/user", Some(&cookie)).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
