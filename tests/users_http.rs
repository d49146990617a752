use github_users::{Config, Error, GitHubClient, User, UserListOptions};
use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::json;

fn client_for(server: &MockServer, token: Option<&str>) -> GitHubClient {
    GitHubClient::from_config(&Config {
        base_url: server.url("/"),
        token: token.map(str::to_owned),
        ..Config::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_get_user_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/octocat")
                .header("accept", "application/vnd.github.v3+json");
            then.status(200).json_body(json!({
                "login": "octocat",
                "id": 583231,
                "name": "The Octocat",
                "public_repos": 8,
                "site_admin": false
            }));
        })
        .await;

    let client = client_for(&server, None);
    let user = client.users().get("octocat").await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.login.as_deref(), Some("octocat"));
    assert_eq!(user.id, Some(583_231));
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.public_repos, Some(8));
}

#[tokio::test]
async fn test_get_authenticated_user_sends_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/user")
                .header("authorization", "Bearer ghp_test");
            then.status(200).json_body(json!({"login": "me", "id": 1}));
        })
        .await;

    let client = client_for(&server, Some("ghp_test"));
    let user = client.users().get("").await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.login.as_deref(), Some("me"));
}

#[tokio::test]
async fn test_edit_user_sends_patch_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/user")
                .header("content-type", "application/json")
                .json_body(json!({"location": "Berlin", "hireable": true}));
            then.status(200).json_body(json!({
                "login": "me",
                "id": 1,
                "location": "Berlin",
                "hireable": true
            }));
        })
        .await;

    let client = client_for(&server, Some("ghp_test"));
    let patch = User::default().with_location("Berlin").with_hireable(true);
    let user = client.users().edit(&patch).await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.location.as_deref(), Some("Berlin"));
    assert_eq!(user.hireable, Some(true));
}

#[tokio::test]
async fn test_list_users_with_since() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/users").query_param("since", "42");
            then.status(200).json_body(json!([
                {"login": "a", "id": 43},
                {"login": "b", "id": 44},
                {"login": "c", "id": 46}
            ]));
        })
        .await;

    let client = client_for(&server, None);
    let users = client
        .users()
        .list(Some(&UserListOptions { since: 42 }))
        .await
        .unwrap();

    mock.assert_async().await;
    let ids: Vec<_> = users.iter().map(|u| u.id.unwrap()).collect();
    assert_eq!(ids, [43, 44, 46]);
}

#[tokio::test]
async fn test_list_users_empty_page() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(json!([]));
        })
        .await;

    let client = client_for(&server, None);
    let users = client.users().list(None).await.unwrap();

    mock.assert_async().await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_not_found_surfaces_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/ghost-does-not-exist");
            then.status(404).json_body(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            }));
        })
        .await;

    let client = client_for(&server, None);
    let err = client
        .users()
        .get("ghost-does-not-exist")
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            message,
            errors,
        } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Not Found");
            assert!(errors.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_failure_carries_field_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/user");
            then.status(422).json_body(json!({
                "message": "Validation Failed",
                "errors": [{"resource": "User", "field": "email", "code": "invalid"}]
            }));
        })
        .await;

    let client = client_for(&server, Some("ghp_test"));
    let err = client
        .users()
        .edit(&User::default().with_email("not-an-email"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    match err {
        Error::Api { errors, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "email");
            assert_eq!(errors[0].code, "invalid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/user");
            then.status(200)
                .header("content-type", "application/json")
                .body("{\"login\": ");
        })
        .await;

    let client = client_for(&server, None);
    let err = client.users().get("").await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on the discard port.
    let client = GitHubClient::from_config(&Config {
        base_url: "http://127.0.0.1:9/".into(),
        ..Config::default()
    })
    .unwrap();

    let err = client.users().list(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/users/octocat");
            then.status(200).json_body(json!({"login": "octocat"}));
        })
        .await;

    let client = GitHubClient::from_config(&Config {
        base_url: server.url("/api/v3/"),
        ..Config::default()
    })
    .unwrap();
    let user = client.users().get("octocat").await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.login.as_deref(), Some("octocat"));
}
