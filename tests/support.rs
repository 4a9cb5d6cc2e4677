//! Shared test doubles: a recording mock SDK and a recording host callback.

#![allow(dead_code)]

use fb_login_bridge::{
    AccessToken, BridgeCallback, EventParams, FacebookSdk, GraphResponse,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock of the native SDK. Records every call; responses are configured
/// up front through the setters.
#[derive(Default)]
pub struct MockSdk {
    token: Mutex<Option<AccessToken>>,
    graph_response: Mutex<GraphResponse>,
    activity_consumed: AtomicBool,
    initialize_calls: AtomicUsize,
    logout_count: AtomicUsize,
    login_log: Mutex<Vec<Vec<String>>>,
    graph_log: Mutex<Vec<(String, String)>>,
    event_log: Mutex<Vec<(String, f64, Option<EventParams>)>>,
    activity_log: Mutex<Vec<(i32, i32, Option<Value>)>>,
}

impl MockSdk {
    pub fn set_token(&self, token: Option<AccessToken>) {
        *self.token.lock().unwrap() = token;
    }

    pub fn set_graph_response(&self, response: GraphResponse) {
        *self.graph_response.lock().unwrap() = response;
    }

    pub fn set_activity_consumed(&self, consumed: bool) {
        self.activity_consumed.store(consumed, Ordering::SeqCst);
    }

    pub fn initialize_calls(&self) -> usize {
        self.initialize_calls.load(Ordering::SeqCst)
    }

    pub fn logout_count(&self) -> usize {
        self.logout_count.load(Ordering::SeqCst)
    }

    pub fn login_calls(&self) -> Vec<Vec<String>> {
        self.login_log.lock().unwrap().clone()
    }

    pub fn graph_calls(&self) -> Vec<(String, String)> {
        self.graph_log.lock().unwrap().clone()
    }

    pub fn logged_events(&self) -> Vec<(String, f64, Option<EventParams>)> {
        self.event_log.lock().unwrap().clone()
    }

    pub fn activity_results(&self) -> Vec<(i32, i32, Option<Value>)> {
        self.activity_log.lock().unwrap().clone()
    }
}

impl FacebookSdk for MockSdk {
    fn initialize(&self) {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn current_access_token(&self) -> Option<AccessToken> {
        self.token.lock().unwrap().clone()
    }

    fn log_in_with_permissions(&self, permissions: &[String]) {
        self.login_log.lock().unwrap().push(permissions.to_vec());
    }

    fn log_out(&self) {
        self.logout_count.fetch_add(1, Ordering::SeqCst);
        *self.token.lock().unwrap() = None;
    }

    fn graph_me_request(
        &self,
        token: &str,
        fields: &str,
    ) -> Pin<Box<dyn Future<Output = GraphResponse> + Send + '_>> {
        self.graph_log
            .lock()
            .unwrap()
            .push((token.to_string(), fields.to_string()));
        let response = self.graph_response.lock().unwrap().clone();
        Box::pin(std::future::ready(response))
    }

    fn log_app_event(&self, name: &str, value_to_sum: f64, parameters: Option<&EventParams>) {
        self.event_log
            .lock()
            .unwrap()
            .push((name.to_string(), value_to_sum, parameters.cloned()));
    }

    fn on_activity_result(
        &self,
        request_code: i32,
        result_code: i32,
        data: Option<&Value>,
    ) -> bool {
        self.activity_log
            .lock()
            .unwrap()
            .push((request_code, result_code, data.cloned()));
        self.activity_consumed.load(Ordering::SeqCst)
    }
}

/// Records every `(error, result)` pair a host callback receives.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<(Option<Value>, Option<Value>)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> BridgeCallback {
        let sink = Arc::clone(&self.calls);
        Box::new(move |error, result| sink.lock().unwrap().push((error, result)))
    }

    pub fn calls(&self) -> Vec<(Option<Value>, Option<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }
}

pub fn access_token() -> AccessToken {
    AccessToken {
        token: "token-abc".to_string(),
        user_id: "user-1".to_string(),
        expires_at: "1700000000000".to_string(),
    }
}
