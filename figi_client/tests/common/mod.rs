#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque};

use figi_client::{
    client::{HttpResponse, PreparedRequest, Transport},
    errors::TransportError,
};

/// Transport that records every request and replays canned replies in order.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, String>>>,
    pub requests: RefCell<Vec<PreparedRequest>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push_reply(status, body);
        transport
    }

    pub fn failing(message: &str) -> Self {
        let transport = Self::default();
        transport
            .replies
            .borrow_mut()
            .push_back(Err(message.to_string()));
        transport
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &PreparedRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        match self.replies.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Other { message }),
            None => Err(TransportError::Other {
                message: "no canned reply left".to_string(),
            }),
        }
    }
}

pub const IBM_MAPPING: &str = r#"[{"data":[{"figi":"BBG000BLNNH6","name":"INTL BUSINESS MACHINES CORP","ticker":"IBM","exchCode":"US","compositeFIGI":"BBG000BLNNH6","securityType":"Common Stock","marketSector":"Equity","shareClassFIGI":"BBG001S5S399","securityType2":"Common Stock","securityDescription":"IBM"}]}]"#;

pub const BAD_ISIN_MAPPING: &str = r#"[{"error":"Invalid idValue format."}]"#;

pub const APPLE_SEARCH: &str = r#"{"data":[{"figi":"BBG000B9XRY4","name":"APPLE INC","ticker":"AAPL","exchCode":"US","marketSector":"Equity"},{"figi":"BBG000B9Y5X2","name":"APPLE INC","ticker":"AAPL","exchCode":"UW","marketSector":"Equity"}],"next":"QW9JSVpXTkxJRk5GUVhw"}"#;
