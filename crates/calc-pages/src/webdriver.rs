//! WebDriver wire-protocol session.
//!
//! Attaches to a session that WinAppDriver (or an Appium Windows driver)
//! already created for the calculator, and resolves controls with the
//! `accessibility id` locator strategy. Creating the session is left to
//! whatever launches the application.
//!
//! Both the W3C and the legacy JSON Wire Protocol response shapes are
//! accepted; WinAppDriver still answers in the latter.

use crate::config::WebDriverConfig;
use crate::result::{PageError, PageResult};
use crate::session::{ElementRef, Session};
use reqwest::blocking::{Client, Response};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Locator strategy for accessibility ids
pub const ACCESSIBILITY_ID_STRATEGY: &str = "accessibility id";

/// Element reference key in W3C responses
pub const W3C_ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Element reference key in JSON Wire Protocol responses
pub const JSONWP_ELEMENT_KEY: &str = "ELEMENT";

/// JSON Wire Protocol status: no such element
const JSONWP_NO_SUCH_ELEMENT: i64 = 7;

/// JSON Wire Protocol status: stale element reference
const JSONWP_STALE_ELEMENT: i64 = 10;

/// Session backed by a remote WebDriver endpoint
#[derive(Debug)]
pub struct WebDriverSession {
    client: Client,
    session_url: String,
}

impl WebDriverSession {
    /// Attach to the session named in `config`
    pub fn attach(config: &WebDriverConfig) -> PageResult<Self> {
        let session_id = config
            .session_id
            .as_deref()
            .ok_or_else(|| PageError::config("webdriver.session_id is required to attach"))?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;
        let session_url = session_url(&config.server_url, session_id);
        debug!(%session_url, "attached to WebDriver session");
        Ok(Self {
            client,
            session_url,
        })
    }

    /// `{server}/session/{id}`
    #[must_use]
    pub fn session_url(&self) -> &str {
        &self.session_url
    }

    fn post(&self, path: &str, body: &Value, accessibility_id: &str) -> PageResult<Value> {
        let url = format!("{}{path}", self.session_url);
        let response = self.client.post(&url).json(body).send()?;
        Self::finish(response, accessibility_id)
    }

    fn get(&self, path: &str, accessibility_id: &str) -> PageResult<Value> {
        let url = format!("{}{path}", self.session_url);
        let response = self.client.get(&url).send()?;
        Self::finish(response, accessibility_id)
    }

    fn finish(response: Response, accessibility_id: &str) -> PageResult<Value> {
        let status = response.status().as_u16();
        let body: Value = response.json()?;
        check_response(status, body, accessibility_id)
    }
}

impl Session for WebDriverSession {
    fn try_find_by_accessibility_id(
        &self,
        accessibility_id: &str,
    ) -> PageResult<Option<ElementRef>> {
        let body = json!({
            "using": ACCESSIBILITY_ID_STRATEGY,
            "value": accessibility_id,
        });
        let value = self.post("/elements", &body, accessibility_id)?;
        let refs = parse_element_refs(&value)?;
        debug!(accessibility_id, matches = refs.len(), "find elements");
        Ok(refs
            .into_iter()
            .next()
            .map(|element_id| ElementRef::new(element_id, accessibility_id)))
    }

    fn click(&self, element: &ElementRef) -> PageResult<()> {
        let path = format!("/element/{}/click", element.element_id);
        let _ = self.post(&path, &json!({}), &element.accessibility_id)?;
        Ok(())
    }

    fn text(&self, element: &ElementRef) -> PageResult<String> {
        let path = format!("/element/{}/text", element.element_id);
        match self.get(&path, &element.accessibility_id)? {
            Value::String(text) => Ok(text),
            Value::Null => Ok(String::new()),
            other => Err(PageError::driver(format!(
                "text of '{}' is not a string: {other}",
                element.accessibility_id
            ))),
        }
    }

    fn is_selected(&self, element: &ElementRef) -> PageResult<bool> {
        let path = format!("/element/{}/selected", element.element_id);
        self.get(&path, &element.accessibility_id)?
            .as_bool()
            .ok_or_else(|| {
                PageError::driver(format!(
                    "selection state of '{}' is not a boolean",
                    element.accessibility_id
                ))
            })
    }
}

/// Join a server URL and session id
#[must_use]
pub fn session_url(server_url: &str, session_id: &str) -> String {
    format!("{}/session/{session_id}", server_url.trim_end_matches('/'))
}

/// Turn a response body into its `value`, or the error it reports
pub fn check_response(status: u16, mut body: Value, accessibility_id: &str) -> PageResult<Value> {
    // JSON Wire Protocol: numeric status, zero on success
    if let Some(code) = body.get("status").and_then(Value::as_i64) {
        if code != 0 {
            let message = body
                .pointer("/value/message")
                .and_then(Value::as_str)
                .unwrap_or("no message")
                .to_string();
            return Err(match code {
                JSONWP_NO_SUCH_ELEMENT => PageError::element_not_found(accessibility_id),
                JSONWP_STALE_ELEMENT => PageError::StaleElement {
                    accessibility_id: accessibility_id.to_string(),
                },
                _ => PageError::driver(format!("status {code}: {message}")),
            });
        }
    }

    // W3C: error object under `value`
    if let Some(error) = body.pointer("/value/error").and_then(Value::as_str) {
        let message = body
            .pointer("/value/message")
            .and_then(Value::as_str)
            .unwrap_or("no message");
        return Err(match error {
            "no such element" => PageError::element_not_found(accessibility_id),
            "stale element reference" => PageError::StaleElement {
                accessibility_id: accessibility_id.to_string(),
            },
            _ => PageError::driver(format!("{error} (HTTP {status}): {message}")),
        });
    }

    if !(200..300).contains(&status) {
        return Err(PageError::driver(format!("HTTP {status}: {body}")));
    }

    Ok(body.get_mut("value").map(Value::take).unwrap_or(Value::Null))
}

/// Element references from a find-elements `value`
pub fn parse_element_refs(value: &Value) -> PageResult<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| PageError::driver(format!("expected an element array, got {value}")))?;
    items
        .iter()
        .map(|item| {
            item.get(W3C_ELEMENT_KEY)
                .or_else(|| item.get(JSONWP_ELEMENT_KEY))
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| PageError::driver(format!("element without a reference: {item}")))
        })
        .collect()
}
