use crate::ports::outbound::{ProcessRunner, ToolInvocation};
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

/// Captured output of a finished child
#[derive(Debug, Default)]
struct CapturedOutput {
    stdout: String,
    stderr: String,
}

/// BoundedProcessRunner adapter for running native tools under a time limit
///
/// Both output streams are drained by a single reader task while the runner
/// waits for the child to exit. On every path the child is either reaped or
/// killed, and the reader task is joined or aborted:
///
/// - the child exceeds `timeout`: it is killed, reaped within `grace`, and
///   [`SbomError::ToolTimedOut`] is returned;
/// - the reader fails or does not finish within `grace` after exit:
///   [`SbomError::ToolOutputRead`] is returned, even for a non-zero exit;
/// - the child exits non-zero, or prints only whitespace: `Ok(None)`.
#[derive(Debug, Clone)]
pub struct BoundedProcessRunner {
    timeout: Duration,
    grace: Duration,
}

impl BoundedProcessRunner {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
    pub const DEFAULT_GRACE: Duration = Duration::from_secs(5);

    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            grace: Self::DEFAULT_GRACE,
        }
    }

    /// Sets how long to wait for the killed child and for the reader task
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    fn spawn_error(invocation: &ToolInvocation, error: io::Error) -> anyhow::Error {
        match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => SbomError::ToolNotFound {
                program: invocation.program.clone(),
                details: error.to_string(),
            }
            .into(),
            _ => anyhow::anyhow!("Failed to start {}: {}", invocation, error),
        }
    }

    fn read_error(invocation: &ToolInvocation, details: impl Into<String>) -> anyhow::Error {
        SbomError::ToolOutputRead {
            program: invocation.program.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Joins the reader task, giving it at most `grace` to finish
    async fn join_reader(
        &self,
        invocation: &ToolInvocation,
        mut reader: JoinHandle<io::Result<CapturedOutput>>,
    ) -> Result<CapturedOutput> {
        match timeout(self.grace, &mut reader).await {
            Ok(Ok(Ok(output))) => Ok(output),
            Ok(Ok(Err(e))) => Err(Self::read_error(invocation, e.to_string())),
            Ok(Err(join_error)) => Err(Self::read_error(invocation, join_error.to_string())),
            Err(_) => {
                reader.abort();
                Err(Self::read_error(
                    invocation,
                    format!("output not drained within {:?}", self.grace),
                ))
            }
        }
    }
}

impl Default for BoundedProcessRunner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

/// Collects stdout line by line, normalizing line endings to `\n`
async fn read_lines<R>(stream: Option<R>) -> io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = String::new();
    if let Some(stream) = stream {
        let mut lines = BufReader::new(stream).lines();
        while let Some(line) = lines.next_line().await? {
            buffer.push_str(line.strip_suffix('\r').unwrap_or(&line));
            buffer.push('\n');
        }
    }
    Ok(buffer)
}

async fn read_stream<R>(stream: Option<R>) -> io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = String::new();
    if let Some(mut stream) = stream {
        stream.read_to_string(&mut buffer).await?;
    }
    Ok(buffer)
}

#[async_trait]
impl ProcessRunner for BoundedProcessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<Option<String>> {
        trace!(
            command = %invocation,
            dir = %invocation.working_dir.display(),
            timeout = ?self.timeout,
            "Spawning native tool"
        );

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let reader = tokio::spawn(async move {
            let (stdout, stderr) = tokio::try_join!(read_lines(stdout), read_stream(stderr))?;
            Ok::<_, io::Error>(CapturedOutput { stdout, stderr })
        });

        let waited = timeout(self.timeout, child.wait()).await;
        let status = match waited {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                reader.abort();
                return Err(Self::read_error(invocation, e.to_string()));
            }
            Err(_) => {
                warn!(command = %invocation, "Native tool exceeded its time limit, killing it");
                if let Err(e) = child.start_kill() {
                    debug!(error = %e, "Kill signal failed; child may have exited already");
                }
                if timeout(self.grace, child.wait()).await.is_err() {
                    debug!(command = %invocation, "Killed child was not reaped within grace period");
                }
                reader.abort();
                return Err(SbomError::ToolTimedOut {
                    program: invocation.program.clone(),
                    timeout: self.timeout,
                }
                .into());
            }
        };

        let output = self.join_reader(invocation, reader).await?;

        if !status.success() {
            debug!(
                command = %invocation,
                status = %status,
                stderr = %output.stderr.trim(),
                "Native tool exited unsuccessfully"
            );
            return Ok(None);
        }

        if output.stdout.trim().is_empty() {
            debug!(command = %invocation, "Native tool produced no output");
            return Ok(None);
        }

        trace!(command = %invocation, bytes = output.stdout.len(), "Native tool finished");
        Ok(Some(output.stdout))
    }
}
