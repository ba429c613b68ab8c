use profile_card::web::server::router;
use std::net::SocketAddr;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_initial_page_renders_empty_form() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<form action=\"/\" method=\"post\""));
    assert!(body.contains("name=\"name\" value=\"\""));
    assert!(body.contains("Fill in the form and press"));
    assert!(!body.contains("class=\"badge\""));
}

#[tokio::test]
async fn test_valid_submission_renders_profile_card() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/", addr))
        .form(&[("name", "Al"), ("age", "17"), ("hobby", "guitar")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Al <span class=\"badge\">Developing</span>"));
    assert!(body.contains("You have much to discover! Explore and learn through your hobby."));
    assert!(body.contains("<li><strong>Hobby:</strong> guitar</li>"));
}

#[tokio::test]
async fn test_invalid_submission_rerenders_form_with_errors() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/", addr))
        .form(&[("name", "A"), ("age", "25"), ("hobby", "go")])
        .send()
        .await
        .unwrap();

    // Validation failures are page states, not HTTP errors.
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Name required (min 2 characters)"));
    assert!(body.contains("Hobby required (min 3 characters)"));
    assert!(body.contains("name=\"name\" value=\"A\""));
    assert!(body.contains("name=\"age\" value=\"25\""));
    assert!(body.contains("name=\"hobby\" value=\"go\""));
    assert!(!body.contains("class=\"badge\""));
}

#[tokio::test]
async fn test_out_of_range_age_is_flagged() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/", addr))
        .form(&[("name", "Maria"), ("age", "150"), ("hobby", "painting")])
        .send()
        .await
        .unwrap();

    let body = response.text().await.unwrap();
    assert!(body.contains("Age must be between 0 and 120"));
    assert!(!body.contains("class=\"badge\""));
}

#[tokio::test]
async fn test_missing_fields_fall_through_to_validation() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/", addr))
        .form(&[("name", "Maria")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Enter a valid age (integer)"));
    assert!(body.contains("Hobby required (min 3 characters)"));
    assert!(body.contains("name=\"name\" value=\"Maria\""));
}

#[tokio::test]
async fn test_submitted_markup_comes_back_escaped() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/", addr))
        .form(&[("name", "<Eve>"), ("age", "40"), ("hobby", "chess & go")])
        .send()
        .await
        .unwrap();

    let body = response.text().await.unwrap();
    assert!(!body.contains("<Eve>"));
    assert!(body.contains("&lt;Eve&gt;"));
    assert!(body.contains("chess &amp; go"));
    assert!(body.contains("&lt;Eve&gt; <span class=\"badge\">Professional</span>"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}
