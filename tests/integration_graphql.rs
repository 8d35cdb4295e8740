// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the GraphQL path using wiremock.
//!
//! Covers head resolution, the atomic commit round trip with its
//! `expectedHeadOid` check, verbatim GraphQL error surfacing, and
//! missing repository/branch cases.

use hubwrite::error::{ApiError, HubError, NetworkError};
use hubwrite::github::FileChange;
use hubwrite::github::graphql::GraphQlClient;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GraphQlClient {
    GraphQlClient::with_endpoint(format!("{}/graphql", server.uri()), "test-token")
}

fn head_response(repository_id: &str, oid: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": {
            "repository": {
                "id": repository_id,
                "ref": {"target": {"oid": oid}},
            }
        }
    }))
}

// =============================================================================
// branch_head tests
// =============================================================================

#[tokio::test]
async fn test_branch_head_resolves_id_and_oid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_string_contains("qualifiedName"))
        .respond_with(head_response("R_abc", "head-oid-1"))
        .mount(&server)
        .await;

    let head = client(&server).branch_head("o", "r", "main").await.unwrap();
    assert_eq!(head.repository_id, "R_abc");
    assert_eq!(head.head_oid, "head-oid-1");

    // the branch goes over the wire fully qualified
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["variables"]["branch"], "refs/heads/main");
}

#[tokio::test]
async fn test_branch_head_missing_branch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"repository": {"id": "R_abc", "ref": null}}
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .branch_head("o", "r", "gone")
        .await
        .unwrap_err();

    match err {
        HubError::Api(boxed) => match *boxed {
            ApiError::MissingField { field } => assert!(field.contains("refs/heads/gone")),
            other => panic!("Expected ApiError::MissingField, got {other:?}"),
        },
        other => panic!("Expected HubError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_branch_head_missing_repository() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"repository": null}})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .branch_head("o", "nope", "main")
        .await
        .unwrap_err();

    match err {
        HubError::Api(boxed) => match *boxed {
            ApiError::MissingField { field } => assert_eq!(field, "repository"),
            other => panic!("Expected ApiError::MissingField, got {other:?}"),
        },
        other => panic!("Expected HubError::Api, got {other:?}"),
    }
}

// =============================================================================
// atomic commit tests
// =============================================================================

#[tokio::test]
async fn test_atomic_commit_carries_expected_head_oid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("qualifiedName"))
        .respond_with(head_response("R_abc", "head-oid-42"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("createCommitOnBranch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "createCommitOnBranch": {
                    "commit": {
                        "oid": "new-oid",
                        "url": "https://github.com/o/r/commit/new-oid",
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let changes = vec![
        FileChange::write("a.txt", "alpha"),
        FileChange::write("b.txt", "beta"),
        FileChange::delete("c.txt"),
    ];
    let commit = client(&server)
        .create_commit_on_branch("o", "r", "main", "Swap files", &changes)
        .await
        .unwrap();

    assert_eq!(commit.sha(), "new-oid");

    // the mutation input must carry the oid the head query just returned
    let requests = server.received_requests().await.unwrap();
    let mutation = requests
        .iter()
        .find(|r| String::from_utf8_lossy(&r.body).contains("createCommitOnBranch"))
        .expect("mutation request");
    let body: serde_json::Value = serde_json::from_slice(&mutation.body).unwrap();
    let input = &body["variables"]["input"];

    assert_eq!(input["expectedHeadOid"], "head-oid-42");
    assert_eq!(input["branch"]["repositoryNameWithOwner"], "o/r");
    assert_eq!(input["branch"]["branchName"], "main");
    assert_eq!(input["message"]["headline"], "Swap files");
    assert_eq!(input["fileChanges"]["additions"].as_array().unwrap().len(), 2);
    assert_eq!(input["fileChanges"]["deletions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_stale_head_rejects_whole_mutation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("qualifiedName"))
        .respond_with(head_response("R_abc", "moved-oid"))
        .mount(&server)
        .await;

    let rejection = "Expected branch to point to \"moved-oid\" but it did not";
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("createCommitOnBranch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": rejection}],
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_commit_on_branch("o", "r", "main", "msg", &[FileChange::write("a.txt", "x")])
        .await
        .unwrap_err();

    // the error list surfaces verbatim
    match err {
        HubError::Api(boxed) => match *boxed {
            ApiError::GraphQl { messages } => assert_eq!(messages, [rejection]),
            other => panic!("Expected ApiError::GraphQl, got {other:?}"),
        },
        other => panic!("Expected HubError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_surfaces_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message": "Bad credentials"}"#),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .branch_head("o", "r", "main")
        .await
        .unwrap_err();

    match err {
        HubError::Network(boxed) => match *boxed {
            NetworkError::HttpError { status, body, .. } => {
                assert_eq!(status, 401);
                assert!(body.contains("Bad credentials"));
            }
            other => panic!("Expected NetworkError::HttpError, got {other:?}"),
        },
        other => panic!("Expected HubError::Network, got {other:?}"),
    }
}
