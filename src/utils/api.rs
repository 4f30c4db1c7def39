use crate::config;
use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Centralized API client. Every request carries the session cookie
/// (credentials include) and is prefixed with the backend origin.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
}

impl RequestWrapper {
    fn new(path: &str, method: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        }
        .credentials(RequestCredentials::Include);

        Self { request }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(data)?;
        self.request = self.request.header("Content-Type", "application/json");
        self.request = self.request.body(body);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        match self.request.send().await {
            Ok(response) => Ok(response),
            Err(e) => {
                gloo_console::error!(format!("API request failed: {:?}", e));
                Err(e)
            }
        }
    }
}

impl Api {
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

/// Pull the Turkish error detail out of an error response body, falling back
/// to a generic message when the envelope doesn't parse.
pub async fn error_detail(response: Response, fallback: &str) -> String {
    match response.json::<crate::models::ApiError>().await {
        Ok(err) => err.detail,
        Err(_) => fallback.to_string(),
    }
}
