// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the client-library path using wiremock.
//!
//! The mock bodies mirror the real contents-API responses so the client
//! library parses them the same way it parses production traffic.

use hubwrite::github::octo::OctoClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> OctoClient {
    OctoClient::with_base_uri(&server.uri(), "test-token").expect("client construction")
}

/// A contents-API file object as GitHub returns it.
fn content_json(name: &str, sha: &str) -> serde_json::Value {
    json!({
        "type": "file",
        "encoding": "base64",
        "size": 5,
        "name": name,
        "path": name,
        "content": "aGVsbG8=\n",
        "sha": sha,
        "url": format!("https://api.github.com/repos/o/r/contents/{name}"),
        "git_url": format!("https://api.github.com/repos/o/r/git/blobs/{sha}"),
        "html_url": format!("https://github.com/o/r/blob/main/{name}"),
        "download_url": format!("https://raw.githubusercontent.com/o/r/main/{name}"),
        "_links": {
            "git": format!("https://api.github.com/repos/o/r/git/blobs/{sha}"),
            "self": format!("https://api.github.com/repos/o/r/contents/{name}"),
            "html": format!("https://github.com/o/r/blob/main/{name}"),
        },
    })
}

/// A git commit object as the contents API nests it in write responses.
fn commit_json(sha: &str, message: &str) -> serde_json::Value {
    json!({
        "sha": sha,
        "node_id": format!("C_{sha}"),
        "url": format!("https://api.github.com/repos/o/r/git/commits/{sha}"),
        "html_url": format!("https://github.com/o/r/commit/{sha}"),
        "author": {
            "date": "2026-08-27T10:00:00Z",
            "name": "octocat",
            "email": "octocat@github.com",
        },
        "committer": {
            "date": "2026-08-27T10:00:00Z",
            "name": "octocat",
            "email": "octocat@github.com",
        },
        "message": message,
        "tree": {
            "url": "https://api.github.com/repos/o/r/git/trees/tree-sha",
            "sha": "tree-sha",
        },
        "parents": [{
            "url": "https://api.github.com/repos/o/r/git/commits/parent-sha",
            "html_url": "https://github.com/o/r/commit/parent-sha",
            "sha": "parent-sha",
        }],
        "verification": {
            "verified": false,
            "reason": "unsigned",
            "signature": null,
            "payload": null,
        },
    })
}

#[tokio::test]
async fn test_update_file_uses_fresh_sha() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/a.txt"))
        .and(query_param("ref", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_json("a.txt", "blob-sha-1")))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/repos/o/r/contents/a.txt"))
        .and(body_partial_json(json!({
            "message": "Update a.txt",
            "sha": "blob-sha-1",
            "branch": "main",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": content_json("a.txt", "new-blob-sha"),
            "commit": commit_json("commit-1", "Update a.txt"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let commit = client(&server)
        .update_file("o", "r", "a.txt", "main", "new content")
        .await
        .unwrap();

    assert_eq!(commit.sha(), "commit-1");
}

#[tokio::test]
async fn test_create_file_without_sha() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/o/r/contents/new.txt"))
        .and(body_partial_json(json!({"message": "Create new.txt"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": content_json("new.txt", "blob-sha"),
            "commit": commit_json("create-commit", "Create new.txt"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let commit = client(&server)
        .create_file("o", "r", "new.txt", "main", "fresh")
        .await
        .unwrap();

    assert_eq!(commit.sha(), "create-commit");

    // only the PUT; no marker fetch for a create
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_delete_file_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/old.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_json("old.txt", "del-sha")))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/repos/o/r/contents/old.txt"))
        .and(body_partial_json(json!({
            "message": "Delete old.txt",
            "sha": "del-sha",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": null,
            "commit": commit_json("del-commit", "Delete old.txt"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let commit = client(&server)
        .delete_file("o", "r", "old.txt", "main")
        .await
        .unwrap();

    assert_eq!(commit.sha(), "del-commit");
}

#[tokio::test]
async fn test_batch_numbers_the_commit_messages() {
    let server = MockServer::start().await;

    for name in ["a.txt", "b.txt"] {
        Mock::given(method("GET"))
            .and(path(format!("/repos/o/r/contents/{name}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(content_json(name, &format!("sha-{name}"))),
            )
            .mount(&server)
            .await;
    }

    Mock::given(method("PUT"))
        .and(path("/repos/o/r/contents/a.txt"))
        .and(body_partial_json(json!({"message": "Update a.txt (batch 1/2)"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": content_json("a.txt", "na"),
            "commit": commit_json("commit-a", "Update a.txt (batch 1/2)"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/repos/o/r/contents/b.txt"))
        .and(body_partial_json(json!({"message": "Update b.txt (batch 2/2)"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": content_json("b.txt", "nb"),
            "commit": commit_json("commit-b", "Update b.txt (batch 2/2)"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let files = vec![
        ("a.txt".to_string(), "alpha".to_string()),
        ("b.txt".to_string(), "beta".to_string()),
    ];
    let commits = client(&server)
        .update_many_files("o", "r", "main", &files)
        .await
        .unwrap();

    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].sha(), "commit-a");
    assert_eq!(commits[1].sha(), "commit-b");
}

#[tokio::test]
async fn test_update_binary_file_round_trip() {
    let server = MockServer::start().await;
    let payload: Vec<u8> = vec![0x00, 0xFF, 0x10, 0x80];

    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_json("logo.png", "bin-sha")))
        .mount(&server)
        .await;

    // the client library base64s the bytes on the wire
    Mock::given(method("PUT"))
        .and(path("/repos/o/r/contents/logo.png"))
        .and(body_partial_json(json!({
            "content": "AP8QgA==",
            "sha": "bin-sha",
            "branch": "main",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": content_json("logo.png", "new-bin-sha"),
            "commit": commit_json("bin-commit", "Update logo.png"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let commit = client(&server)
        .update_binary_file("o", "r", "logo.png", "main", &payload)
        .await
        .unwrap();
    assert_eq!(commit.sha(), "bin-commit");
}

#[tokio::test]
async fn test_rate_limit_reports_core_window() {
    let server = MockServer::start().await;

    let window_json = |limit: u64, remaining: u64| {
        json!({"limit": limit, "used": limit - remaining, "remaining": remaining, "reset": 1_700_000_000})
    };
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": {
                "core": window_json(5000, 4321),
                "search": window_json(30, 30),
                "graphql": window_json(5000, 5000),
            },
            "rate": window_json(5000, 4321),
        })))
        .mount(&server)
        .await;

    let window = client(&server).rate_limit().await.unwrap();
    assert_eq!(window.limit, 5000);
    assert_eq!(window.remaining, 4321);
    assert_eq!(window.reset, 1_700_000_000);
}

#[tokio::test]
async fn test_update_failure_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/o/r/contents/missing.txt"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest",
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .update_file("o", "r", "missing.txt", "main", "content")
        .await;
    assert!(result.is_err());
}
