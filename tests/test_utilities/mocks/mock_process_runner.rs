use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use trustify_sbom::prelude::*;
use trustify_sbom::shared::error::SbomError;

/// What the mock answers for one argument list
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Exit zero with this stdout
    Output(String),
    /// Non-zero exit or blank output
    NoOutput,
    /// Executable missing
    NotFound,
    /// Killed after the time limit
    TimedOut,
}

/// Mock ProcessRunner keyed by the joined argument list
/// (e.g. `"metadata --format-version 1"`); unknown invocations yield no output.
#[derive(Clone, Default)]
pub struct MockProcessRunner {
    responses: HashMap<String, MockResponse>,
    pub invocations: Arc<Mutex<Vec<ToolInvocation>>>,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, args: &str, response: MockResponse) -> Self {
        self.responses.insert(args.to_string(), response);
        self
    }

    pub fn with_output(self, args: &str, output: impl Into<String>) -> Self {
        self.with_response(args, MockResponse::Output(output.into()))
    }

    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for MockProcessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<Option<String>> {
        self.invocations.lock().unwrap().push(invocation.clone());

        match self.responses.get(&invocation.args.join(" ")) {
            Some(MockResponse::Output(output)) => Ok(Some(output.clone())),
            Some(MockResponse::NoOutput) | None => Ok(None),
            Some(MockResponse::NotFound) => Err(SbomError::ToolNotFound {
                program: invocation.program.clone(),
                details: "No such file or directory".to_string(),
            }
            .into()),
            Some(MockResponse::TimedOut) => Err(SbomError::ToolTimedOut {
                program: invocation.program.clone(),
                timeout: std::time::Duration::from_secs(5),
            }
            .into()),
        }
    }
}
