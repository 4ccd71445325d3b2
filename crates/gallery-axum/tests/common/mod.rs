//! Shared helpers for the router integration tests.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use gallery_axum::bootstrap::{ServerConfig, bootstrap};
use gallery_axum::routes::create_router;

pub const BOUNDARY: &str = "gallery-test-boundary";

/// A router over a throwaway galleries root.
pub struct TestApp {
    temp: TempDir,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|config| config)
    }

    /// A router whose default config is adjusted by `configure`.
    pub fn with_config(configure: impl FnOnce(ServerConfig) -> ServerConfig) -> Self {
        let temp = TempDir::new().unwrap();
        let config = ServerConfig::for_root(temp.path().join("gallery"))
            .with_staging_dir(temp.path().join("staging"));
        let router = create_router(bootstrap(configure(config)).unwrap());
        Self { temp, router }
    }

    /// The galleries root.
    pub fn root(&self) -> PathBuf {
        self.temp.path().join("gallery")
    }

    /// Directory that holds the galleries root, outside of it.
    pub fn outside(&self) -> &Path {
        self.temp.path()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    pub async fn send_full(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Bytes) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn delete_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self
            .send(Request::delete(uri).body(Body::empty()).unwrap())
            .await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn create_gallery(&self, body: &Value) -> (StatusCode, Value) {
        let request = Request::post("/gallery")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn upload(&self, uri: &str, field: &str, file_name: &str, data: &[u8]) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_file(field, file_name, data)))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

/// A multipart body with a single file part.
pub fn multipart_file(field: &str, file_name: &str, data: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// A multipart body with a single text field and no file.
pub fn multipart_text(field: &str, value: &str) -> Vec<u8> {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n--{BOUNDARY}--\r\n"
    )
    .into_bytes()
}

/// A solid-colour PNG of the given size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([30, 120, 200]));
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}
