use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use grandview_client::dto::accounts::LoginRequest;
use grandview_client::dto::adverts::AdvertSubmissionForm;
use grandview_client::dto::store::ProductQuery;
use grandview_client::dto::FileUpload;
use grandview_client::{api, ApiClient, ApiError, ClientConfig, MemoryTokenStore, TokenStore};

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grandview_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

// Bind an ephemeral port, serve the stub backend, hand back a client wired
// to it.
async fn serve(app: Router) -> SocketAddr {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    let config = ClientConfig::new(format!("http://{addr}/api"), format!("http://{addr}"));
    ApiClient::new(config).expect("build client")
}

#[tokio::test]
async fn login_stores_token_and_logout_clears_it() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/api/accounts/login/",
        post(|| async {
            Json(json!({
                "token": "abc",
                "user": {
                    "id": 1,
                    "username": "amina",
                    "email": "amina@example.com",
                    "phone_number": "+254712345678",
                    "referral_code": "AMINA1"
                }
            }))
        }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);

    let auth = api::accounts::login(
        &client,
        &LoginRequest {
            username: "amina".into(),
            password: "hunter2".into(),
        },
    )
    .await?;

    assert_eq!(auth.user.username, "amina");
    assert_eq!(client.token().as_deref(), Some("abc"));

    api::accounts::logout(&client)?;
    assert!(client.token().is_none());
    Ok(())
}

#[tokio::test]
async fn server_error_messages_are_surfaced() {
    let app = Router::new()
        .route(
            "/api/accounts/login/",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Invalid credentials"})),
                )
            }),
        )
        .route(
            "/api/wallet/deposit/",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"non_field_errors": ["Amount below minimum"]})),
                )
            }),
        )
        .route(
            "/api/wallet/",
            get(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
        )
        .route(
            "/api/packages/",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let addr = serve(app).await;
    let client = client_for(addr);

    // Server-supplied message wins over the fallback.
    let err = api::accounts::login(
        &client,
        &LoginRequest {
            username: "x".into(),
            password: "y".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

    let err = api::wallet::deposit(
        &client,
        &grandview_client::dto::wallet::DepositRequest {
            amount: "100".parse().unwrap(),
            deposit_method: grandview_client::dto::wallet::DepositMethod::Stk,
            phone_number: Some("0712345678".into()),
            mpesa_code: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Amount below minimum");

    // Non-JSON error pages surface their raw text instead of a parse error.
    let err = api::wallet::balance(&client).await.unwrap_err();
    assert!(err.to_string().contains("upstream down"));

    // Empty error body falls back to the operation-specific message.
    let err = api::packages::packages(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch packages");
}

#[tokio::test]
async fn client_side_validation_rejects_before_sending() {
    // No server at all: validation must fail first.
    let client = client_for("127.0.0.1:9".parse().unwrap());

    let err = api::wallet::withdraw_main(
        &client,
        &grandview_client::dto::wallet::WithdrawRequest {
            amount: "50".parse().unwrap(),
            mpesa_number: "12345".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = api::support::create_comment(
        &client,
        1,
        &grandview_client::dto::support::NewComment {
            content: "   ".into(),
            parent_comment: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn empty_success_bodies_are_accepted() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/api/dashboard/orders/{id}/cancel/",
        post(|| async { StatusCode::OK }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);

    api::orders::cancel_order(&client, 12).await?;
    Ok(())
}

#[tokio::test]
async fn auth_token_is_injected_on_requests() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/api/wallet/",
        get(|headers: HeaderMap| async move {
            if headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                == Some("Token tok-1")
            {
                Json(json!({
                    "deposit_balance": "100.50",
                    "views_earnings_balance": "50.25",
                    "referral_balance": "10.00"
                }))
                .into_response()
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid token."})))
                    .into_response()
            }
        }),
    );
    let addr = serve(app).await;

    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.save("tok-1")?;
    let config = ClientConfig::new(format!("http://{addr}/api"), format!("http://{addr}"));
    let client = ApiClient::with_token_store(config, tokens)?;

    let wallet = api::wallet::balance(&client).await?;
    assert_eq!(wallet.deposit_balance, "100.50".parse::<rust_decimal::Decimal>().unwrap());

    // Without the token the same call is rejected with the server's detail.
    let anon = client_for(addr);
    let err = api::wallet::balance(&anon).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid token.");
    Ok(())
}

fn product_json(id: i64, image: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Radio",
        "description": "FM radio",
        "price": "1000.00",
        "main_image": image,
        "category": {"id": 1, "name": "Electronics", "slug": "electronics"},
        "discounted_price": "800.00"
    })
}

#[tokio::test]
async fn product_images_are_absolutized_against_media_base() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/api/dashboard/cart/",
        get(|| async {
            Json(json!({
                "items": [
                    {"id": 1, "product": product_json(5, "/media/radio.png"), "quantity": 2, "total_price": "2000.00"},
                    {"id": 2, "product": product_json(6, "https://cdn.example.com/tv.png"), "quantity": 1, "total_price": "1000.00"}
                ],
                "total": "3000.00"
            }))
        }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);

    let cart = api::store::cart(&client).await?;
    assert_eq!(
        cart.items[0].product.main_image,
        format!("http://{addr}/media/radio.png")
    );
    // Already-absolute URLs pass through untouched.
    assert_eq!(cart.items[1].product.main_image, "https://cdn.example.com/tv.png");

    assert_eq!(api::store::cart_count(&client).await, 3);
    Ok(())
}

#[tokio::test]
async fn product_listing_accepts_both_envelope_shapes() -> anyhow::Result<()> {
    let app = Router::new()
        .route(
            "/api/dashboard/all-products/",
            get(
                |Query(params): Query<std::collections::HashMap<String, String>>| async move {
                    if params.contains_key("page") {
                        Json(json!({
                            "results": [product_json(1, "/media/a.png")],
                            "count": 41,
                            "next": "?page=2",
                            "previous": null
                        }))
                    } else {
                        Json(json!([product_json(1, "/media/a.png"), product_json(2, "")]))
                    }
                },
            ),
        );
    let addr = serve(app).await;
    let client = client_for(addr);

    let paged = api::store::products(
        &client,
        &ProductQuery {
            page: Some(1),
            limit: Some(20),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(paged.count, 41);
    assert_eq!(paged.results.len(), 1);
    assert_eq!(paged.next.as_deref(), Some("?page=2"));

    let bare = api::store::products(&client, &ProductQuery::default()).await?;
    assert_eq!(bare.count, 2);
    assert!(bare.previous.is_none());
    // Empty image paths stay empty rather than becoming the media base.
    assert_eq!(bare.results[1].main_image, "");
    Ok(())
}

#[tokio::test]
async fn lipa_registration_absence_is_not_an_error() -> anyhow::Result<()> {
    let app = Router::new()
        .route(
            "/api/dashboard/lipa/registration/",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))) }),
        );
    let addr = serve(app).await;
    let client = client_for(addr);
    assert!(api::lipa::registration(&client).await?.is_none());

    // An empty object (no name, no status) also counts as not registered.
    let app = Router::new().route(
        "/api/dashboard/lipa/registration/",
        get(|| async { Json(json!({})) }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);
    assert!(api::lipa::registration(&client).await?.is_none());

    let app = Router::new().route(
        "/api/dashboard/lipa/registration/",
        get(|| async {
            Json(json!({
                "id": 3,
                "user": 1,
                "full_name": "Amina Odhiambo",
                "date_of_birth": "1995-04-12",
                "address": "Nairobi",
                "status": "APPROVED",
                "created_at": "2025-07-01T08:00:00Z"
            }))
        }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);
    let registration = api::lipa::registration(&client).await?.expect("registered");
    assert_eq!(
        registration.status,
        grandview_client::models::LipaStatus::Approved
    );
    Ok(())
}

#[tokio::test]
async fn advert_submission_uploads_multipart_fields() -> anyhow::Result<()> {
    async fn submit(mut multipart: Multipart) -> impl IntoResponse {
        let mut advert_id = None;
        let mut views_count = None;
        let mut screenshot_name = None;
        while let Some(field) = multipart.next_field().await.unwrap() {
            match field.name().unwrap_or_default() {
                "advert_id" => advert_id = Some(field.text().await.unwrap()),
                "views_count" => views_count = Some(field.text().await.unwrap()),
                "screenshot" => {
                    screenshot_name = field.file_name().map(str::to_string);
                    let bytes = field.bytes().await.unwrap();
                    assert!(!bytes.is_empty());
                }
                other => panic!("unexpected field {other}"),
            }
        }
        assert_eq!(advert_id.as_deref(), Some("8"));
        assert_eq!(views_count.as_deref(), Some("120"));
        assert_eq!(screenshot_name.as_deref(), Some("proof.png"));
        Json(json!({
            "id": 55,
            "user": 1,
            "advert": 8,
            "advert_title": "Soda ad",
            "views_count": 120,
            "screenshot": "/media/submissions/proof.png",
            "earnings": "60.00",
            "submission_date": "2025-08-05T10:00:00Z"
        }))
    }

    let app = Router::new().route("/api/adverts/submit/", post(submit));
    let addr = serve(app).await;
    let client = client_for(addr);

    let submission = api::adverts::submit_advert(
        &client,
        AdvertSubmissionForm {
            advert_id: 8,
            views_count: 120,
            screenshot: FileUpload::new("proof.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]),
        },
    )
    .await?;
    assert_eq!(submission.views_count, 120);
    assert_eq!(submission.earnings, "60.00".parse::<rust_decimal::Decimal>().unwrap());
    Ok(())
}

#[tokio::test]
async fn advert_download_returns_raw_bytes() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/api/adverts/{id}/download/",
        get(|| async { [0xffu8, 0xd8, 0xff, 0xe0].to_vec() }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);

    let bytes = api::adverts::download_advert(&client, 4).await?;
    assert_eq!(&bytes[..2], &[0xff, 0xd8]);
    Ok(())
}

#[derive(Clone, Default)]
struct TrackerState {
    confirms: Arc<AtomicUsize>,
}

#[tokio::test]
async fn tracker_confirms_delivery_exactly_once() -> anyhow::Result<()> {
    async fn track(State(state): State<TrackerState>) -> Json<serde_json::Value> {
        // Flip to delivered once the confirmation has landed.
        if state.confirms.load(Ordering::SeqCst) > 0 {
            Json(json!({"status": "delivered"}))
        } else {
            Json(json!({
                "status": "shipped",
                "estimated_minutes": 0,
                "tracking_number": "TRK-9"
            }))
        }
    }

    async fn confirm(State(state): State<TrackerState>) -> Json<serde_json::Value> {
        state.confirms.fetch_add(1, Ordering::SeqCst);
        Json(json!({}))
    }

    let state = TrackerState::default();
    let app = Router::new()
        .route("/api/dashboard/orders/{id}/track/", get(track))
        .route("/api/dashboard/orders/{id}/confirm-delivery/", post(confirm))
        .with_state(state.clone());
    let addr = serve(app).await;
    let client = client_for(addr);

    let tracker = grandview_client::tracking::OrderTracker::with_interval(
        client,
        9,
        std::time::Duration::from_millis(50),
    );
    let mut rx = tracker.subscribe();

    // Wait for the poll loop to reach the terminal snapshot.
    tokio::time::timeout(std::time::Duration::from_secs(10), async {
        loop {
            if rx.borrow().finished {
                break;
            }
            rx.changed().await.expect("tracker channel");
        }
    })
    .await
    .expect("tracker did not finish in time");

    let snapshot = tracker.snapshot();
    assert!(snapshot.finished);
    assert!(snapshot.delivery_confirmed);
    assert_eq!(state.confirms.load(Ordering::SeqCst), 1);

    // Give the (stopped) tracker time to prove it does not re-confirm.
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    assert_eq!(state.confirms.load(Ordering::SeqCst), 1);
    assert!(tracker.is_finished());
    Ok(())
}
