use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::ApiErrorBody;

// REST API client for the fees backend
pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        super::api_config().url(path)
    }

    // ---------------- Grades ----------------

    pub async fn get_grades() -> Result<String, JsValue> {
        Self::fetch_json(&Self::url("/api/grades"), "GET", None).await
    }

    // ---------------- Students ----------------

    /// Fetch a student list from a role-specific path such as `/students`
    /// or `/staff/4/students` (see [`crate::roles::students_path`]).
    pub async fn get_students(path: &str) -> Result<String, JsValue> {
        Self::fetch_json(&Self::url(path), "GET", None).await
    }

    pub async fn create_student(student_json: &str) -> Result<String, JsValue> {
        Self::fetch_json(&Self::url("/api/students"), "POST", Some(student_json)).await
    }

    // ---------------- Payments ----------------

    pub async fn update_balance(student_id: u32, payment_json: &str) -> Result<String, JsValue> {
        let path = format!("/students/{}/update-balance", student_id);
        Self::fetch_json(&Self::url(&path), "POST", Some(payment_json)).await
    }

    // Helper function to make fetch requests
    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, JsValue> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json")?;
        }
        headers.append("Accept", "application/json")?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let text = JsFuture::from(resp.text()?).await?;
        let text = text.as_string().unwrap_or_default();

        if !resp.ok() {
            let reason = failure_reason(resp.status(), &resp.status_text(), &text);
            crate::error_log!("{} {} failed: {}", method, url, reason);
            return Err(JsValue::from_str(&reason));
        }

        Ok(text)
    }
}

/// Human-readable reason for a non-2xx response. Prefers the backend's own
/// `{"error": "..."}` body.
pub fn failure_reason(status: u16, status_text: &str, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) if !err.error.trim().is_empty() => err.error,
        _ => format!("API request failed: {} {}", status, status_text)
            .trim_end()
            .to_string(),
    }
}

/// Convert a rejected fetch into the string shown next to the failing view.
pub fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
