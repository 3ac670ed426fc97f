use axum::http::StatusCode;
use helpers::Setup;

mod helpers;

async fn faqs(pool: &sqlx::SqlitePool) -> anyhow::Result<Vec<(String, String, bool)>> {
    Ok(
        sqlx::query_as("SELECT id, question, published FROM faq ORDER BY id")
            .fetch_all(pool)
            .await?,
    )
}

#[tokio::test]
async fn test_admin_requires_login() -> anyhow::Result<()> {
    let app = helpers::setup_test_app(Setup::default()).await?;

    for uri in ["/admin", "/admin/faqs", "/admin/faqs/new"] {
        let res = app.get(uri, None).await;
        assert_eq!(res.status, StatusCode::SEE_OTHER);
        assert_eq!(res.location(), Some("/admin/login"));
    }

    let res = app.get("/admin", Some("auth_token=garbage")).await;
    assert_eq!(res.location(), Some("/admin/login"));

    Ok(())
}

#[tokio::test]
async fn test_admin_login_rejects_bad_credentials() -> anyhow::Result<()> {
    let app = helpers::setup_test_app(Setup::default()).await?;

    let res = app
        .post_form(
            "/admin/login",
            &[("email", helpers::ROOT_EMAIL), ("password", "wrong-password")],
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Invalid email or password. Please try again."));
    assert!(res.headers.get("set-cookie").is_none());

    Ok(())
}

#[tokio::test]
async fn test_admin_forbidden_for_non_admin() -> anyhow::Result<()> {
    let app = helpers::setup_test_app(Setup::default()).await?;
    app.register_user("editor@sequenceit.test", "editor-password")
        .await?;

    let cookie = app.login("editor@sequenceit.test", "editor-password").await;

    let res = app.get("/admin", Some(&cookie)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert!(res.body.contains("Access Denied"));

    let res = app
        .post_form(
            "/admin/faqs",
            &[("question", "Q?"), ("answer", "A.")],
            Some(&cookie),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert!(faqs(&app.pool).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_admin_dashboard_counts() -> anyhow::Result<()> {
    let app = helpers::setup_test_app(Setup::default()).await?;
    let cookie = app.login_root().await;

    let res = app.get("/admin", Some(&cookie)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Signed in as root@sequenceit.test"));
    assert!(res.body.contains(r#"href="/admin/case-studies""#));

    let res = app.get("/admin/logout", Some(&cookie)).await;
    assert_eq!(res.location(), Some("/admin/login"));

    Ok(())
}

#[tokio::test]
async fn test_admin_faq_lifecycle() -> anyhow::Result<()> {
    let app = helpers::setup_test_app(Setup::default()).await?;
    let cookie = app.login_root().await;

    let res = app
        .post_form(
            "/admin/faqs",
            &[
                ("question", "Do you offer support?"),
                ("answer", "Yes, around the clock."),
                ("category", "General"),
                ("published", "on"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/admin/faqs"));

    let rows = faqs(&app.pool).await?;
    assert_eq!(rows.len(), 1);
    let (id, _, published) = &rows[0];
    assert!(published);

    let res = app.get("/admin/faqs", Some(&cookie)).await;
    assert!(res.body.contains("Do you offer support?"));

    let res = app.get("/faqs", None).await;
    assert!(res.body.contains("Do you offer support?"));

    let res = app
        .post_form(&format!("/admin/faqs/{id}/unpublish"), &[], Some(&cookie))
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert!(!faqs(&app.pool).await?[0].2);

    let res = app.get("/faqs", None).await;
    assert!(!res.body.contains("Do you offer support?"));

    let res = app
        .post_form(&format!("/admin/faqs/{id}/publish"), &[], Some(&cookie))
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert!(faqs(&app.pool).await?[0].2);

    let res = app.get(&format!("/admin/faqs/{id}/edit"), Some(&cookie)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Yes, around the clock."));

    let res = app
        .post_form(
            &format!("/admin/faqs/{id}"),
            &[
                ("question", "Is support included?"),
                ("answer", "Yes, around the clock."),
                ("category", "General"),
                ("published", "on"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(faqs(&app.pool).await?[0].1, "Is support included?");

    let res = app
        .post_form(&format!("/admin/faqs/{id}/delete"), &[], Some(&cookie))
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert!(faqs(&app.pool).await?.is_empty());

    let res = app.get(&format!("/admin/faqs/{id}/edit"), Some(&cookie)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_admin_invalid_form_is_redisplayed() -> anyhow::Result<()> {
    let app = helpers::setup_test_app(Setup::default()).await?;
    let cookie = app.login_root().await;

    let res = app
        .post_form(
            "/admin/faqs",
            &[("question", ""), ("answer", "An answer without a question")],
            Some(&cookie),
        )
        .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.body.contains("Question is required"));
    assert!(res.body.contains("An answer without a question"));
    assert!(faqs(&app.pool).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_admin_unknown_collection_and_missing_publish_flag() -> anyhow::Result<()> {
    let app = helpers::setup_test_app(Setup::default()).await?;
    let cookie = app.login_root().await;

    let res = app.get("/admin/recipes", Some(&cookie)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app
        .post_form(
            "/admin/projects",
            &[
                ("title", "Storefront"),
                ("description", "A storefront rebuild."),
                ("category", "Web Development"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);

    let (id,): (String,) = sqlx::query_as("SELECT id FROM project")
        .fetch_one(&app.pool)
        .await?;

    let res = app
        .post_form(&format!("/admin/projects/{id}/publish"), &[], Some(&cookie))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    Ok(())
}
