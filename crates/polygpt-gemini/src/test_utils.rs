//! Test doubles for the generation backend and wallet connector

use std::sync::Mutex;

use futures_util::future::BoxFuture;
use futures_util::stream::{self, StreamExt};

use polygpt_core::prelude::*;
use polygpt_core::WalletIdentity;

use crate::backend::{FragmentStream, GenerationBackend, GenerationRequest};
use crate::wallet::IdentityConnector;

/// What a [`ScriptedBackend`] does when a stream is opened
#[derive(Debug, Clone)]
pub enum Script {
    /// Yield these fragments, then end
    Fragments(Vec<String>),
    /// Fail before producing any fragment
    Reject(String),
    /// Yield these fragments, then fail mid-stream
    FailAfter(Vec<String>, String),
}

/// Backend that replays a fixed script and records every request
pub struct ScriptedBackend {
    script: Script,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn fragments(fragments: &[&str]) -> Self {
        Self::new(Script::Fragments(
            fragments.iter().map(|f| f.to_string()).collect(),
        ))
    }

    pub fn rejecting(message: &str) -> Self {
        Self::new(Script::Reject(message.to_string()))
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl GenerationBackend for ScriptedBackend {
    fn open_stream(&self, request: GenerationRequest) -> BoxFuture<'_, Result<FragmentStream>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let script = self.script.clone();
        Box::pin(async move {
            match script {
                Script::Fragments(fragments) => {
                    Ok(stream::iter(fragments.into_iter().map(Ok)).boxed())
                }
                Script::Reject(message) => Err(Error::api(500, message)),
                Script::FailAfter(fragments, message) => {
                    let items = fragments
                        .into_iter()
                        .map(Ok)
                        .chain(std::iter::once(Err(Error::stream(message))));
                    Ok(stream::iter(items).boxed())
                }
            }
        })
    }
}

/// Connector that returns a fixed identity without delay
pub struct InstantWalletConnector {
    address: String,
}

impl InstantWalletConnector {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
        }
    }
}

impl Default for InstantWalletConnector {
    fn default() -> Self {
        Self::new("0x1234abcd...ef01")
    }
}

impl IdentityConnector for InstantWalletConnector {
    fn connect(&self) -> BoxFuture<'_, Result<WalletIdentity>> {
        let identity = WalletIdentity::new(self.address.clone());
        Box::pin(async move { Ok(identity) })
    }
}
