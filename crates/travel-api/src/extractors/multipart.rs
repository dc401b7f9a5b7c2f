//! Multipart form extractor
//!
//! Record endpoints take `multipart/form-data`: text parts become the fields
//! of a request DTO and file parts become [`ImageUpload`]s keyed by field
//! name. A field sent more than once, or named `name[]`, is collected into a
//! list. Plain JSON bodies are accepted too and carry no files.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use travel_service::dto::ImageUpload;
use validator::Validate;

use crate::response::ApiError;

/// Validated form fields plus the uploaded files
#[derive(Debug)]
pub struct MultipartForm<T> {
    pub fields: T,
    files: HashMap<String, Vec<ImageUpload>>,
}

impl<T> MultipartForm<T> {
    /// Take the first file sent under `name`
    pub fn take_file(&mut self, name: &str) -> Option<ImageUpload> {
        let files = self.files.get_mut(name)?;
        if files.is_empty() {
            None
        } else {
            Some(files.remove(0))
        }
    }

    /// Take every file sent under `name` (or `name[]`)
    pub fn take_files(&mut self, name: &str) -> Vec<ImageUpload> {
        self.files.remove(name).unwrap_or_default()
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for MultipartForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        let (fields, files) = if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_body(e.body_text()))?;
            read_parts(multipart).await?
        } else {
            let Json(value) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_body(e.body_text()))?;
            (value, HashMap::new())
        };

        let fields = decode_fields::<T>(fields)?;
        Ok(Self { fields, files })
    }
}

async fn read_parts(
    mut multipart: Multipart,
) -> Result<(Value, HashMap<String, Vec<ImageUpload>>), ApiError> {
    let mut text = Map::new();
    let mut files: HashMap<String, Vec<ImageUpload>> = HashMap::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(raw_name) = field.name().map(str::to_string) else {
            continue;
        };
        let (name, is_list) = match raw_name.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (raw_name, false),
        };

        if field.file_name().is_some() {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;

            // Browsers send an empty part for a file input left blank
            if bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
                continue;
            }
            files.entry(name).or_default().push(ImageUpload {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            });
        } else {
            let value = field.text().await.map_err(multipart_error)?;
            insert_text(&mut text, name, value, is_list);
        }
    }

    Ok((Value::Object(text), files))
}

fn insert_text(map: &mut Map<String, Value>, name: String, value: String, is_list: bool) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(Value::String(value)),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, Value::String(value)]);
        }
        None if is_list => {
            map.insert(name, Value::Array(vec![Value::String(value)]));
        }
        None => {
            map.insert(name, Value::String(value));
        }
    }
}

fn decode_fields<T: DeserializeOwned + Validate>(value: Value) -> Result<T, ApiError> {
    let fields: T =
        serde_json::from_value(value).map_err(|e| ApiError::invalid_body(e.to_string()))?;
    fields.validate()?;
    Ok(fields)
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::invalid_body(e.body_text())
    }
}
