use sequenceit_content::{Collection, Command, Query, Value};
use sequenceit_shared::Error;
use temp_dir::TempDir;

mod helpers;

use helpers::form;

#[tokio::test]
async fn test_create_then_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command(pool.clone());
    let query = Query(pool);

    let id = cmd
        .create(
            Collection::Projects,
            &form(&[
                ("title", "Ledger"),
                ("category", "Blockchain"),
                ("technologies", "Rust, Solidity"),
                ("live_url", "https://ledger.example.com"),
            ]),
        )
        .await?;

    let record = query.find(Collection::Projects, &id).await?.unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.text("title"), "Ledger");
    assert_eq!(record.list("technologies"), &["Rust", "Solidity"]);
    assert_eq!(record.opt_text("image_url"), None);
    assert_eq!(record.published, None);
    assert!(record.is_published());
    assert_eq!(record.created_at, record.updated_at);

    Ok(())
}

#[tokio::test]
async fn test_invalid_form_is_not_stored() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command(pool.clone());
    let query = Query(pool);

    let err = cmd
        .create(Collection::Careers, &form(&[("title", "Engineer"), ("location", "Moon")]))
        .await
        .unwrap_err();

    let Error::Validate(errors) = err else {
        panic!("expected validation error");
    };
    let fields = errors.field_errors();
    assert!(fields.contains_key("description"));
    assert!(fields.contains_key("location"));
    assert_eq!(query.count(Collection::Careers).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_update_replaces_values() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command(pool.clone());
    let query = Query(pool);

    let id = cmd
        .create(
            Collection::CaseStudies,
            &form(&[("title", "Cloud move"), ("client", "Acme"), ("tags", "cloud")]),
        )
        .await?;

    cmd.update(
        Collection::CaseStudies,
        &id,
        &form(&[
            ("title", "Cloud migration"),
            ("client", "Acme"),
            ("results", "Uptime|99.9%|activity"),
            ("published", "on"),
        ]),
    )
    .await?;

    let record = query.find(Collection::CaseStudies, &id).await?.unwrap();
    assert_eq!(record.text("title"), "Cloud migration");
    assert!(record.list("tags").is_empty());
    assert_eq!(record.results("results")[0].value, "99.9%");
    assert_eq!(record.published, Some(true));

    let missing = cmd
        .update(
            Collection::CaseStudies,
            "01J00000000000000000000000",
            &form(&[("title", "x"), ("client", "y")]),
        )
        .await;
    assert!(matches!(missing, Err(Error::NotFound)));

    Ok(())
}

#[tokio::test]
async fn test_publish_toggle_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command(pool.clone());
    let query = Query(pool);

    let id = cmd
        .create(
            Collection::Testimonials,
            &form(&[("name", "Jane"), ("role", "CTO"), ("content", "Great team")]),
        )
        .await?;

    let record = query.find(Collection::Testimonials, &id).await?.unwrap();
    assert_eq!(record.published, Some(false));
    assert_eq!(record.get("rating"), &Value::Integer(5));

    cmd.set_published(Collection::Testimonials, &id, true).await?;
    let record = query.find(Collection::Testimonials, &id).await?.unwrap();
    assert_eq!(record.published, Some(true));

    assert!(matches!(
        cmd.set_published(Collection::Projects, &id, true).await,
        Err(Error::Server(_))
    ));

    cmd.delete(Collection::Testimonials, &id).await?;
    assert!(query.find(Collection::Testimonials, &id).await?.is_none());
    assert!(matches!(
        cmd.delete(Collection::Testimonials, &id).await,
        Err(Error::NotFound)
    ));

    Ok(())
}
