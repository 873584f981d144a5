use axum::{body::Body, http::Request};
use serde_json::json;

use crate::request;

pub fn put(key: &str, value: &str, tags: &[&str]) -> Request<Body> {
    request!(
        POST "/cache";
        "content-type" => "application/json";
        json!({ "key": key, "value": value, "tags": tags }).to_string()
    )
}

pub fn get(key: &str) -> Request<Body> {
    request!(GET format!("/cache/{key}");)
}

pub fn revalidate(tags: &[&str]) -> Request<Body> {
    request!(
        POST "/cache/revalidate";
        "content-type" => "application/json";
        json!({ "tags": tags }).to_string()
    )
}
