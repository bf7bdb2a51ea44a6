use crate::config::AppConfig;
use crate::db::seed::seed_demo_data;
use crate::db::{init_db, Database};
use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::router::{handle, App};
use astra::{Body, Response};
use chrono::NaiveDateTime;
use http::{Method, Request};
use std::io::Read;
use tempfile::TempDir;

/// An `App` over a throwaway SQLite file with the schema applied.
pub struct TestApp {
    pub app: App,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(mut config: AppConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        config.database_path = dir.path().join("test.sqlite3").to_string_lossy().into_owned();

        let db = Database::new(config.database_path.clone());
        init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

        Self {
            app: App { db, config },
            _dir: dir,
        }
    }

    /// Same as [`TestApp::new`] plus the demo dataset.
    pub fn seeded() -> Self {
        let app = Self::new();
        seed_demo_data(app.db(), fixed_now()).expect("Failed to seed");
        app
    }

    pub fn db(&self) -> &Database {
        &self.app.db
    }

    pub fn try_get(&self, uri: &str) -> ResultResp {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        handle(req, &self.app)
    }

    pub fn get(&self, uri: &str) -> Response {
        self.try_get(uri).expect("Handler failed")
    }

    pub fn post_form(&self, uri: &str, form: &str) -> ResultResp {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        handle(req, &self.app)
    }
}

pub fn fixed_now() -> NaiveDateTime {
    // 2024-03-17 15:04:05 UTC
    chrono::DateTime::from_timestamp(1_710_687_845, 0)
        .unwrap()
        .naive_utc()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub fn is_bad_request(result: &ResultResp) -> bool {
    matches!(result, Err(ServerError::BadRequest(_)))
}
