#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sequenceit::{
    AppState,
    config::{
        Config, ContactConfig, DatabaseConfig, JwtConfig, ObservabilityConfig, RootConfig,
        ServerConfig,
    },
    user::{RegisterInput, Role},
};
use sequenceit_notification::{
    Channel, ContactSubmission, DeliveryChannel, Dispatcher, EmailConfig, Mailer, OutgoingMail,
    RelayConfig,
};
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const ROOT_EMAIL: &str = "root@sequenceit.test";
pub const ROOT_PASSWORD: &str = "root-password";
pub const CONTACT_ADDRESS: &str = "hello@sequenceit.test";

pub fn test_config(database_url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "sequenceit".to_owned(),
            audience: "sequenceit-admin".to_owned(),
            expiration_days: 7,
        },
        root: RootConfig {
            email: ROOT_EMAIL.to_owned(),
            password: ROOT_PASSWORD.to_owned(),
        },
        email: EmailConfig {
            smtp_host: "smtp.sequenceit.test".to_owned(),
            smtp_port: 587,
            smtp_username: "mailer".to_owned(),
            smtp_password: "secret".to_owned(),
            smtp_insecure: false,
            from_address: "SequenceIT <noreply@sequenceit.test>".to_owned(),
            contact_address: CONTACT_ADDRESS.to_owned(),
        },
        relay: RelayConfig {
            endpoint: "https://relay.sequenceit.test/send".to_owned(),
            public_key: "pk".to_owned(),
            service_id: "service".to_owned(),
            template_id: "template".to_owned(),
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Channel that succeeds or fails on demand and counts its calls.
pub struct StubChannel {
    pub channel: Channel,
    pub succeed: bool,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl DeliveryChannel for StubChannel {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, _submission: ContactSubmission) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.succeed {
            Ok(())
        } else {
            anyhow::bail!("{} unreachable", self.channel)
        }
    }
}

/// Mailer that keeps every message instead of talking to SMTP.
#[derive(Default)]
pub struct RecordingMailer {
    pub fail: bool,
    pub sent: Mutex<Vec<OutgoingMail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: OutgoingMail) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("connection refused by smtp.sequenceit.test");
        }

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(mail);
        }

        Ok("<01TEST@sequenceit.test>".to_owned())
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub mailer: Arc<RecordingMailer>,
    pub relay_calls: Arc<AtomicUsize>,
    pub smtp_calls: Arc<AtomicUsize>,
    _dir: TempDir,
}

pub struct Setup {
    pub relay_ok: bool,
    pub smtp_ok: bool,
    pub mail_ok: bool,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            relay_ok: true,
            smtp_ok: true,
            mail_ok: true,
        }
    }
}

pub async fn setup_test_app(setup: Setup) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = sequenceit::db::create_pool(&url, 1).await?;
    sequenceit::db::migrate(&pool).await?;

    sequenceit::user::Command(pool.clone())
        .ensure_root(ROOT_EMAIL, ROOT_PASSWORD)
        .await?;

    let relay_calls = Arc::new(AtomicUsize::new(0));
    let smtp_calls = Arc::new(AtomicUsize::new(0));
    let channels: Vec<Arc<dyn DeliveryChannel>> = vec![
        Arc::new(StubChannel {
            channel: Channel::RelayClient,
            succeed: setup.relay_ok,
            calls: relay_calls.clone(),
        }),
        Arc::new(StubChannel {
            channel: Channel::BackendSmtp,
            succeed: setup.smtp_ok,
            calls: smtp_calls.clone(),
        }),
    ];

    let mailer = Arc::new(RecordingMailer {
        fail: !setup.mail_ok,
        ..Default::default()
    });

    let state = AppState::new(
        test_config(url),
        pool.clone(),
        pool.clone(),
        Dispatcher::new(channels),
        mailer.clone(),
    );

    Ok(TestApp {
        router: sequenceit::routes::router(state),
        pool,
        mailer,
        relay_calls,
        smtp_calls,
        _dir: dir,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

impl TestApp {
    pub async fn request(&self, req: Request<Body>) -> TestResponse {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        let mut req = Request::get(uri);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        self.request(req.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        pairs: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let body = serde_urlencoded::to_string(pairs).unwrap();
        self.request(req.body(Body::from(body)).unwrap()).await
    }

    /// Posts the form the way `app.js` does, asking for the partial only.
    pub async fn post_fragment(&self, uri: &str, pairs: &[(&str, &str)]) -> TestResponse {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(sequenceit::template::FRAGMENT_HEADER, "true")
            .body(Body::from(serde_urlencoded::to_string(pairs).unwrap()))
            .unwrap();

        self.request(req).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();

        self.request(req).await
    }

    /// Logs in and returns the `auth_token=...` pair for the Cookie header.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let res = self
            .post_form(
                "/admin/login",
                &[("email", email), ("password", password)],
                None,
            )
            .await;

        assert_eq!(res.status, StatusCode::SEE_OTHER);

        res.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_owned)
            .unwrap()
    }

    pub async fn login_root(&self) -> String {
        self.login(ROOT_EMAIL, ROOT_PASSWORD).await
    }

    pub async fn register_user(&self, email: &str, password: &str) -> anyhow::Result<()> {
        sequenceit::user::Command(self.pool.clone())
            .register(RegisterInput {
                email: email.to_owned(),
                password: password.to_owned(),
                role: Role::User,
            })
            .await?;

        Ok(())
    }
}
