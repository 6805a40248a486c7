//! Scripted transport shared by store and view unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Transport that replays scripted responses and records every request it
/// was asked to execute. Clones share the same script.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    inner: Rc<RefCell<Script>>,
}

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

impl ScriptedTransport {
    pub(crate) fn push_ok(&self, status: u16, body: &str) {
        self.inner.borrow_mut().responses.push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    pub(crate) fn push_err(&self) {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Err(ApiError::Transport("connection refused".to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut script = self.inner.borrow_mut();
        script.requests.push(request.clone());
        script
            .responses
            .pop_front()
            .expect("no scripted response left")
    }
}
