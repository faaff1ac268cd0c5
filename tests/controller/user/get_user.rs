//! Tests for the get_user endpoint.
//!
//! This module verifies lookups by userid: users within the configured auth domain resolve,
//! while malformed userids, userids for other domains and unknown users all answer 404.

use accounts::{model::user::UserDto, server::controller::user::get_user};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::*;

/// Expect 200 with the user for a userid in the auth domain
#[tokio::test]
async fn success_for_userid_in_auth_domain() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("fred").await?;
    let userid = format!("acct:fred@{}", TEST_AUTH_DOMAIN);

    let result = get_user(State(test.into_app_state()), Path(userid.clone())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserDto = json(resp).await;
    assert_eq!(body.id, user.id);
    assert_eq!(body.userid, userid);
    assert_eq!(body.email, user.email);

    Ok(())
}

/// Expect 404 for a userid in another domain even though the username exists
#[tokio::test]
async fn not_found_for_other_domain() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    test.user().insert_user("fred").await?;

    let result = get_user(
        State(test.into_app_state()),
        Path("acct:fred@elsewhere.test".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a userid that cannot be parsed
#[tokio::test]
async fn not_found_for_malformed_userid() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    test.user().insert_user("fred").await?;

    let result = get_user(State(test.into_app_state()), Path("fred".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a well-formed userid with no user behind it
#[tokio::test]
async fn not_found_for_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = get_user(
        State(test.into_app_state()),
        Path(format!("acct:nobody@{}", TEST_AUTH_DOMAIN)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the user table does not exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_user(
        State(test.into_app_state()),
        Path(format!("acct:fred@{}", TEST_AUTH_DOMAIN)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect the router to route userids containing `:` and `@` to the lookup
#[tokio::test]
async fn routes_userid_path() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    test.user().insert_user("fred").await?;
    let app = test.app(test.into_app_state());

    let resp = get(
        app,
        &format!("/api/users/acct:fred@{}", TEST_AUTH_DOMAIN),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
