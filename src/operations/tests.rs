//! Tests for the operation groups, run against an in-memory transport

use super::base::OperationOptions;
use super::*;
use crate::api_error::{ClashDetectionError, ErrorCode};
use crate::auth::{AccessTokenProvider, StaticAccessToken};
use crate::config::ApiOptions;
use crate::error::{Error, Result};
use crate::http::{RestClient, RestRequest};
use crate::models::{ElementSetCriteria, SuppressionRuleParameters, ValueObject};
use crate::pagination::{take, to_array, EntityIterator};
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

const BASE: &str = "https://api.bentley.com/clash-detection";

/// Canned responses keyed by URL; records every request it sees
#[derive(Debug, Default)]
struct MockRestClient {
    responses: Mutex<HashMap<String, VecDeque<std::result::Result<JsonValue, ClashDetectionError>>>>,
    requests: Mutex<Vec<RestRequest>>,
}

impl MockRestClient {
    fn respond(&self, url: &str, body: JsonValue) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Ok(body));
    }

    fn fail(&self, url: &str, error: ClashDetectionError) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Err(error));
    }

    fn requests(&self) -> Vec<RestRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestClient for MockRestClient {
    async fn send(&self, request: RestRequest) -> Result<JsonValue> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&request.url)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Ok(body)) => Ok(body),
            Some(Err(error)) => Err(error.into()),
            None => Err(ClashDetectionError::new(
                ErrorCode::Unrecognized,
                format!("no canned response for {}", request.url),
            )
            .into()),
        }
    }
}

fn options(
    mock: &Arc<MockRestClient>,
    provider: Option<Arc<dyn AccessTokenProvider>>,
) -> Arc<OperationOptions> {
    let api = ApiOptions::default();
    Arc::new(OperationOptions {
        rest_client: Arc::clone(mock) as Arc<dyn RestClient>,
        urls: UrlFormatter::new(&api),
        api,
        access_token_provider: provider,
    })
}

fn with_token(mock: &Arc<MockRestClient>) -> Arc<OperationOptions> {
    options(mock, Some(Arc::new(StaticAccessToken::new("Bearer provided"))))
}

fn test_item(id: &str) -> JsonValue {
    json!({
        "id": id,
        "displayName": format!("Test {id}"),
        "description": "",
        "creationDateTime": "2024-03-01T10:15:00Z",
        "modificationDateTime": "2024-03-01T10:15:00Z",
        "_links": {
            "createdBy": {"href": "https://example.com/u"},
            "lastModifiedBy": {"href": "https://example.com/u"},
            "test": {"href": format!("https://example.com/tests/{id}")}
        }
    })
}

fn test_page(ids: &[&str], next: Option<&str>) -> JsonValue {
    let next = next.map(|href| json!({ "href": href })).unwrap_or(JsonValue::Null);
    json!({
        "tests": ids.iter().map(|id| test_item(id)).collect::<Vec<_>>(),
        "_links": {"self": {"href": "https://example.com/self"}, "next": next}
    })
}

fn created_test(id: &str) -> JsonValue {
    json!({
        "test": {
            "id": id,
            "displayName": "Walls",
            "description": "d",
            "suppressTouching": false,
            "includeSubModels": true,
            "touchingTolerance": 0,
            "setA": {"modelIds": [], "categoryIds": ["c1"], "selfCheck": false, "clearance": 0},
            "setB": {"modelIds": [], "categoryIds": ["c2"], "selfCheck": false, "clearance": 0},
            "suppressionRules": [],
            "_links": {"self": {"href": format!("https://example.com/tests/{id}")}}
        }
    })
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_list_is_lazy_and_follows_next_links() {
    let mock = Arc::new(MockRestClient::default());
    let first = format!("{BASE}/tests?projectId=p-1&$top=2");
    let second = format!("{BASE}/tests?projectId=p-1&$top=2&$continuationToken=x");
    mock.respond(&first, test_page(&["a", "b"], Some(&second)));
    mock.respond(&second, test_page(&["c"], None));

    let tests = TestOperations::new(with_token(&mock));
    let mut iterator = tests
        .list(GetTestListParams {
            url_params: Some(CollectionUrlParams::project("p-1").top(2)),
            ..GetTestListParams::default()
        })
        .unwrap();
    assert!(mock.requests().is_empty());

    let ids: Vec<String> = to_array(&mut iterator)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec!["a", "b", "c"]);
    let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![first, second]);
}

#[tokio::test]
async fn test_take_fetches_only_needed_pages() {
    let mock = Arc::new(MockRestClient::default());
    let first = format!("{BASE}/tests?projectId=p");
    mock.respond(&first, test_page(&["a", "b"], Some("https://example.com/page2")));

    let tests = TestOperations::new(with_token(&mock));
    let mut iterator = tests
        .list(GetTestListParams {
            url_params: Some(CollectionUrlParams::project("p")),
            ..GetTestListParams::default()
        })
        .unwrap();

    let items = take(&mut iterator, 2).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn test_list_headers_carry_prefer_and_user_metadata() {
    let mock = Arc::new(MockRestClient::default());
    let url = format!("{BASE}/suppressionRules?projectId=p");
    mock.respond(&url, json!({"suppressionRules": [], "_links": {"next": null}}));

    let rules = SuppressionRuleOperations::new(with_token(&mock));
    let mut iterator = rules
        .list_representation(GetSuppressionRuleListParams {
            access_token: Some("Bearer explicit".to_string()),
            url_params: Some(CollectionUrlParams::project("p")),
            user_metadata: true,
        })
        .unwrap();
    assert!(iterator.next().await.unwrap().is_none());

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.headers["Authorization"], "Bearer explicit");
    assert_eq!(
        request.headers["Accept"],
        "application/vnd.bentley.itwin-platform.v1+json"
    );
    assert_eq!(request.headers["Prefer"], "return=representation");
    assert_eq!(request.headers["User-Metadata"], "true");
    assert!(!request.headers.contains_key("Content-Type"));
}

#[tokio::test]
async fn test_minimal_rule_list_prefers_minimal() {
    let mock = Arc::new(MockRestClient::default());
    let url = format!("{BASE}/suppressionRules");
    mock.respond(
        &url,
        json!({
            "suppressionRules": [{"id": "r", "displayName": "R", "_links": {"rule": {"href": "h"}}}],
            "_links": {"next": null}
        }),
    );

    let rules = SuppressionRuleOperations::new(with_token(&mock));
    let mut iterator = rules
        .list_minimal(GetSuppressionRuleListParams::default())
        .unwrap();
    let all = to_array(&mut iterator).await.unwrap();

    assert_eq!(all[0].id, "r");
    let request = &mock.requests()[0];
    assert_eq!(request.headers["Prefer"], "return=minimal");
    assert_eq!(request.headers["Authorization"], "Bearer provided");
    assert!(!request.headers.contains_key("User-Metadata"));
}

#[tokio::test]
async fn test_template_list_into_stream() {
    use futures::StreamExt;

    let mock = Arc::new(MockRestClient::default());
    mock.respond(
        &format!("{BASE}/suppressionRuleTemplates"),
        json!({
            "suppressionRuleTemplates": [{
                "id": "tpl",
                "displayName": "Door rule",
                "description": "",
                "prompt": "Pick a property",
                "templateExpression": {"propertyName": "Roll"}
            }],
            "_links": {"next": null}
        }),
    );

    let templates = TemplateOperations::new(with_token(&mock));
    let items: Vec<_> = templates
        .list(GetTemplateListParams::default())
        .unwrap()
        .into_stream()
        .collect()
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].as_ref().unwrap().id, "tpl");
}

#[tokio::test]
async fn test_list_without_token_fails_eagerly() {
    let mock = Arc::new(MockRestClient::default());
    let tests = TestOperations::new(options(&mock, None));

    let result = tests.list(GetTestListParams::default());

    assert!(matches!(result, Err(Error::MissingAccessToken)));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_list_page_error_is_retried_on_next_pull() {
    let mock = Arc::new(MockRestClient::default());
    let url = format!("{BASE}/tests");
    mock.fail(
        &url,
        ClashDetectionError::new(ErrorCode::TooManyRequests, "slow down"),
    );
    mock.respond(&url, test_page(&["a"], None));

    let tests = TestOperations::new(with_token(&mock));
    let mut iterator = tests.list(GetTestListParams::default()).unwrap();

    let error = iterator.next().await.unwrap_err();
    assert!(error.is_throttled());
    assert_eq!(iterator.next().await.unwrap().unwrap().id, "a");
    assert_eq!(mock.requests().len(), 2);
}

#[tokio::test]
async fn test_list_second_page_error_resumes_at_that_page() {
    let mock = Arc::new(MockRestClient::default());
    let next = format!("{BASE}/tests?$continuationToken=2");
    mock.respond(&format!("{BASE}/tests"), test_page(&["a", "b"], Some(&next)));
    mock.fail(
        &next,
        ClashDetectionError::new(ErrorCode::TooManyRequests, "slow down"),
    );
    mock.respond(&next, test_page(&["c"], None));

    let tests = TestOperations::new(with_token(&mock));
    let mut iterator = tests.list(GetTestListParams::default()).unwrap();

    assert_eq!(iterator.next().await.unwrap().unwrap().id, "a");
    assert_eq!(iterator.next().await.unwrap().unwrap().id, "b");
    assert!(iterator.next().await.unwrap_err().is_throttled());
    assert_eq!(iterator.next().await.unwrap().unwrap().id, "c");
    assert!(iterator.next().await.unwrap().is_none());

    let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![format!("{BASE}/tests"), next.clone(), next]);
}

// ============================================================================
// Single entities
// ============================================================================

#[tokio::test]
async fn test_create_rule_sends_reason_as_description() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(
        &format!("{BASE}/suppressionRules"),
        json!({
            "suppressionRule": {
                "id": "r-1",
                "templateId": "tpl",
                "displayName": "Doors",
                "reason": "noise",
                "parameters": {"operator": {"value": "="}},
                "_links": {
                    "self": {"href": "h"},
                    "createdBy": {"href": "h"},
                    "lastModifiedBy": {"href": "h"}
                }
            }
        }),
    );

    let rules = SuppressionRuleOperations::new(with_token(&mock));
    let rule = rules
        .create(CreateSuppressionRuleParams {
            template_id: "tpl".to_string(),
            display_name: "Doors".to_string(),
            reason: "noise".to_string(),
            parameters: SuppressionRuleParameters {
                operator: Some(ValueObject::new("=")),
                ..SuppressionRuleParameters::default()
            },
            ..CreateSuppressionRuleParams::default()
        })
        .await
        .unwrap();

    assert_eq!(rule.id, "r-1");
    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.headers["Content-Type"], "application/json");
    assert_eq!(
        request.body,
        Some(json!({
            "templateId": "tpl",
            "displayName": "Doors",
            "description": "noise",
            "parameters": {"operator": {"value": "="}}
        }))
    );
}

#[tokio::test]
async fn test_create_test_includes_project_id() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(&format!("{BASE}/tests"), created_test("t-9"));

    let tests = TestOperations::new(with_token(&mock));
    let created = tests
        .create(CreateTestParams {
            project_id: "p-1".to_string(),
            test: TestDefinition {
                display_name: "Walls".to_string(),
                set_a: ElementSetCriteria {
                    category_ids: vec!["c1".to_string()],
                    ..ElementSetCriteria::default()
                },
                ..TestDefinition::default()
            },
            ..CreateTestParams::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, "t-9");
    let body = mock.requests()[0].body.clone().unwrap();
    assert_eq!(body["projectId"], "p-1");
    assert_eq!(body["displayName"], "Walls");
    assert_eq!(body["setA"]["categoryIds"], json!(["c1"]));
    assert!(body.get("advancedSettings").is_none());
}

#[tokio::test]
async fn test_update_test_uses_put_on_single_url() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(&format!("{BASE}/tests/t-9"), created_test("t-9"));

    let tests = TestOperations::new(with_token(&mock));
    tests
        .update(UpdateTestParams {
            test_id: "t-9".to_string(),
            ..UpdateTestParams::default()
        })
        .await
        .unwrap();

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::PUT);
    assert!(request.body.as_ref().unwrap().get("projectId").is_none());
}

#[tokio::test]
async fn test_delete_ignores_response_body() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(&format!("{BASE}/runs/run-1"), JsonValue::Null);

    let runs = RunOperations::new(with_token(&mock));
    runs.delete(DeleteRunParams {
        run_id: "run-1".to_string(),
        ..DeleteRunParams::default()
    })
    .await
    .unwrap();

    assert_eq!(mock.requests()[0].method, Method::DELETE);
}

#[tokio::test]
async fn test_get_returns_api_error() {
    let mock = Arc::new(MockRestClient::default());
    mock.fail(
        &format!("{BASE}/results/missing"),
        ClashDetectionError::new(ErrorCode::ClashDetectionResultNotFound, "Requested result is not available."),
    );

    let results = ResultOperations::new(with_token(&mock));
    let error = results
        .get(GetResultParams {
            result_id: "missing".to_string(),
            ..GetResultParams::default()
        })
        .await
        .unwrap_err();

    assert_eq!(error.api_code(), Some(ErrorCode::ClashDetectionResultNotFound));
    assert_eq!(error.to_string(), "Requested result is not available.");
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(&format!("{BASE}/runs/run-1"), json!({"unexpected": true}));

    let runs = RunOperations::new(with_token(&mock));
    let error = runs
        .get(GetRunParams {
            run_id: "run-1".to_string(),
            ..GetRunParams::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Decode { .. }));
}

#[tokio::test]
async fn test_run_lists_are_single_requests() {
    let mock = Arc::new(MockRestClient::default());
    let url = format!("{BASE}/runs?projectId=p");
    mock.respond(&url, json!({"runs": [{"id": "r1", "displayName": "Run 1"}]}));

    let runs = RunOperations::new(with_token(&mock));
    let listed = runs
        .list_minimal(GetRunListParams {
            url_params: Some(CollectionUrlParams::project("p")),
            ..GetRunListParams::default()
        })
        .await
        .unwrap();

    assert_eq!(listed[0].id, "r1");
    assert_eq!(mock.requests()[0].headers["Prefer"], "return=minimal");
}

#[tokio::test]
async fn test_extract_schema_info_posts_project() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(&format!("{BASE}/schemas/imodels/im-1"), JsonValue::Null);

    let imodel = IModelOperations::new(with_token(&mock));
    imodel
        .extract_schema_info(ExtractIModelMetadataParams {
            imodel_id: "im-1".to_string(),
            project_id: "p-1".to_string(),
            ..ExtractIModelMetadataParams::default()
        })
        .await
        .unwrap();

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.body, Some(json!({"projectId": "p-1"})));
}

#[tokio::test]
async fn test_get_models_and_categories() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(
        &format!("{BASE}/modelsAndCategories/imodels/im-1?projectId=p-1"),
        json!({
            "modelsAndCategories": {
                "status": "available",
                "models": [{"id": "m", "displayName": "Model"}],
                "categories": []
            }
        }),
    );

    let imodel = IModelOperations::new(with_token(&mock));
    let metadata = imodel
        .get_models_and_categories(GetIModelMetadataParams {
            imodel_id: "im-1".to_string(),
            url_params: Some(ProjectUrlParams::new("p-1")),
            ..GetIModelMetadataParams::default()
        })
        .await
        .unwrap();

    assert_eq!(metadata.status, "available");
    assert_eq!(metadata.models.len(), 1);
}

// ============================================================================
// Running tests
// ============================================================================

const NAMED_VERSIONS: &str =
    "https://api.bentley.com/imodels/im-1/namedversions?$top=1&$orderBy=changesetIndex%20desc";

fn run_response() -> JsonValue {
    json!({"run": {"id": "run-1", "_links": {"run": {"href": "https://example.com/runs/run-1"}}}})
}

#[tokio::test]
async fn test_run_test_uses_latest_named_version() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(
        NAMED_VERSIONS,
        json!({
            "namedVersions": [{"id": "nv-7", "displayName": "v7", "changesetIndex": 7}],
            "_links": {"next": {"href": "https://api.bentley.com/imodels/im-1/namedversions?page=2"}}
        }),
    );
    mock.respond(&format!("{BASE}/runs"), run_response());

    let tests = TestOperations::new(with_token(&mock));
    let run = tests
        .run_test(RunTestParams {
            test_id: "t-1".to_string(),
            imodel_id: "im-1".to_string(),
            ..RunTestParams::default()
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(run.id, "run-1");
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].headers["Accept"],
        "application/vnd.bentley.itwin-platform.v2+json"
    );
    assert_eq!(requests[0].headers["Prefer"], "return=minimal");
    assert_eq!(
        requests[1].body,
        Some(json!({"testId": "t-1", "iModelId": "im-1", "namedVersionId": "nv-7"}))
    );
}

#[tokio::test]
async fn test_run_test_without_named_versions_returns_none() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(NAMED_VERSIONS, json!({"namedVersions": [], "_links": {"next": null}}));

    let tests = TestOperations::new(with_token(&mock));
    let run = tests
        .run_test(RunTestParams {
            test_id: "t-1".to_string(),
            imodel_id: "im-1".to_string(),
            ..RunTestParams::default()
        })
        .await
        .unwrap();

    assert!(run.is_none());
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn test_run_test_with_named_version_skips_lookup() {
    let mock = Arc::new(MockRestClient::default());
    mock.respond(&format!("{BASE}/runs"), run_response());

    let tests = TestOperations::new(with_token(&mock));
    tests
        .run_test(RunTestParams {
            test_id: "t-1".to_string(),
            imodel_id: "im-1".to_string(),
            named_version_id: Some("nv-1".to_string()),
            test_settings: Some(TestSettings {
                results_limit: "500".to_string(),
            }),
            ..RunTestParams::default()
        })
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body.as_ref().unwrap()["testSettings"],
        json!({"resultsLimit": "500"})
    );
}
