//! Endpoint path and query tests.
//!
//! Uses wiremock to check that each endpoint method hits the right path
//! with the right query parameters.

use github_metrics::{GitHubClient, IssueState, SearchQuery, SortOrder};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, GitHubClient) {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::new(Some("test_token"), &mock_server.uri()).unwrap();
    (mock_server, client)
}

/// Serve `body` once on `GET route`.
async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_repository_endpoints() {
    let (server, client) = setup().await;
    let base = "/repos/test_owner/test_repo";

    mount_get(&server, base, json!({"name": "test_repo"})).await;
    mount_get(&server, &format!("{base}/contributors"), json!([{"login": "user1"}])).await;
    mount_get(&server, &format!("{base}/languages"), json!({"Python": 1000})).await;
    mount_get(&server, &format!("{base}/readme"), json!({"content": "test content"})).await;
    mount_get(&server, &format!("{base}/projects"), json!([])).await;
    mount_get(&server, &format!("{base}/commits"), json!([{"sha": "abc"}])).await;
    mount_get(&server, &format!("{base}/commits/abc123"), json!({"sha": "abc123"})).await;
    mount_get(&server, &format!("{base}/actions/runs"), json!({"total_count": 0})).await;
    mount_get(&server, &format!("{base}/hooks"), json!([])).await;
    mount_get(&server, &format!("{base}/pulls/42"), json!({"number": 42})).await;

    let (o, r) = ("test_owner", "test_repo");
    assert_eq!(client.get_repo(o, r).await.unwrap(), json!({"name": "test_repo"}));
    assert_eq!(
        client.list_repo_contributors(o, r).await.unwrap(),
        json!([{"login": "user1"}])
    );
    assert_eq!(
        client.list_repo_languages(o, r).await.unwrap(),
        json!({"Python": 1000})
    );
    assert_eq!(
        client.get_repo_readme(o, r).await.unwrap(),
        json!({"content": "test content"})
    );
    assert_eq!(client.list_repo_projects(o, r).await.unwrap(), json!([]));
    assert_eq!(
        client.list_commits(o, r).await.unwrap(),
        json!([{"sha": "abc"}])
    );
    assert_eq!(
        client.get_commit(o, r, "abc123").await.unwrap(),
        json!({"sha": "abc123"})
    );
    assert_eq!(
        client.list_workflow_runs(o, r).await.unwrap(),
        json!({"total_count": 0})
    );
    assert_eq!(client.list_repo_webhooks(o, r).await.unwrap(), json!([]));
    assert_eq!(
        client.get_pull_request(o, r, 42).await.unwrap(),
        json!({"number": 42})
    );
}

#[tokio::test]
async fn test_statistics_endpoints() {
    let (server, client) = setup().await;
    let base = "/repos/test_owner/test_repo/stats";

    let activity = json!([{"week": 1, "total": 10}, {"week": 2, "total": 20}]);
    let frequency = json!([[1609459200, 100, -50], [1609545600, 200, -75]]);
    let contributors = json!([{"author": {"login": "user1"}, "total": 50}]);
    let participation = json!({"all": [10, 20, 30], "owner": [5, 10, 15]});
    let punch_card = json!([[0, 0, 5], [0, 1, 10], [1, 0, 15]]);

    mount_get(&server, &format!("{base}/commit_activity"), activity.clone()).await;
    mount_get(&server, &format!("{base}/code_frequency"), frequency.clone()).await;
    mount_get(&server, &format!("{base}/contributors"), contributors.clone()).await;
    mount_get(&server, &format!("{base}/participation"), participation.clone()).await;
    mount_get(&server, &format!("{base}/punch_card"), punch_card.clone()).await;

    let (o, r) = ("test_owner", "test_repo");
    assert_eq!(client.get_commit_activity(o, r).await.unwrap(), activity);
    assert_eq!(client.get_code_frequency(o, r).await.unwrap(), frequency);
    assert_eq!(client.get_contributor_stats(o, r).await.unwrap(), contributors);
    assert_eq!(client.get_weekly_commits(o, r).await.unwrap(), participation);
    assert_eq!(client.get_punch_card(o, r).await.unwrap(), punch_card);
}

#[tokio::test]
async fn test_repo_stats_is_derived_from_repository() {
    let (server, client) = setup().await;
    mount_get(
        &server,
        "/repos/test_owner/test_repo",
        json!({
            "stargazers_count": 1000,
            "forks_count": 500,
            "open_issues_count": 50,
            "subscribers_count": 1500
        }),
    )
    .await;

    let stats = client.get_repo_stats("test_owner", "test_repo").await.unwrap();

    assert_eq!(stats.stars, 1000);
    assert_eq!(stats.forks, 500);
    assert_eq!(stats.open_issues, 50);
    assert_eq!(stats.watchers, 1500);
}

#[tokio::test]
async fn test_repo_stats_propagates_not_found() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/repos/test_owner/test_repo"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_repo_stats("test_owner", "test_repo").await.unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_issue_and_pull_listings_send_state() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/test_owner/test_repo/issues"))
        .and(query_param("state", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "Issue 1"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/test_owner/test_repo/pulls"))
        .and(query_param("state", "closed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "PR 1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let issues = client
        .list_repo_issues("test_owner", "test_repo", IssueState::default())
        .await
        .unwrap();
    let pulls = client
        .list_pull_requests("test_owner", "test_repo", IssueState::Closed)
        .await
        .unwrap();

    assert_eq!(issues, json!([{"title": "Issue 1"}]));
    assert_eq!(pulls, json!([{"title": "PR 1"}]));
}

#[tokio::test]
async fn test_user_and_org_endpoints() {
    let (server, client) = setup().await;

    mount_get(&server, "/users/octocat", json!({"login": "octocat"})).await;
    mount_get(&server, "/users/octocat/repos", json!([{"name": "hello"}])).await;
    mount_get(&server, "/users/octocat/gists", json!([])).await;
    mount_get(&server, "/orgs/github", json!({"login": "github"})).await;
    mount_get(&server, "/orgs/github/repos", json!([{"name": "linguist"}])).await;

    assert_eq!(client.get_user("octocat").await.unwrap()["login"], "octocat");
    assert_eq!(client.list_user_repos("octocat").await.unwrap()[0]["name"], "hello");
    assert_eq!(client.list_user_gists("octocat").await.unwrap(), json!([]));
    assert_eq!(client.get_organization("github").await.unwrap()["login"], "github");
    assert_eq!(client.list_org_repos("github").await.unwrap()[0]["name"], "linguist");
}

#[tokio::test]
async fn test_search_sends_only_set_parameters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "tetris language:rust"))
        .and(query_param_is_missing("sort"))
        .and(query_param_is_missing("order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_count": 0, "items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let results = client
        .search_repositories(&SearchQuery::new("tetris language:rust"))
        .await
        .unwrap();

    assert_eq!(results["total_count"], 0);
}

#[tokio::test]
async fn test_search_issues_with_sort_and_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/search/issues"))
        .and(query_param("q", "is:open"))
        .and(query_param("sort", "comments"))
        .and(query_param("order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_count": 3, "items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new("is:open")
        .sort("comments")
        .order(SortOrder::Desc);
    let results = client.search_issues(&query).await.unwrap();

    assert_eq!(results["total_count"], 3);
}

#[tokio::test]
async fn test_identifiers_are_percent_encoded() {
    let (server, client) = setup().await;

    // A slash inside an identifier must not create an extra path segment
    Mock::given(method("GET"))
        .and(path("/users/a%2Fb"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_user("a/b").await.unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_dot_segment_identifiers_are_rejected_locally() {
    let (server, client) = setup().await;

    // Dot segments would resolve to a parent resource, so nothing may be sent
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"root": true})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.get_user("..").await.unwrap_err();
    assert_eq!(err.code(), "INVALID_IDENTIFIER");
    assert_eq!(err.kind(), None);

    let err = client.get_repo("octocat", "..").await.unwrap_err();
    assert_eq!(err.code(), "INVALID_IDENTIFIER");

    let err = client.get_repo_stats(".", "hello").await.unwrap_err();
    assert_eq!(err.code(), "INVALID_IDENTIFIER");

    let err = client
        .list_repo_issues("octocat", "", IssueState::All)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_IDENTIFIER");
}
