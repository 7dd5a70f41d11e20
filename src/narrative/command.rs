use super::{NarrativeError, TextGenerator};
use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs an external program: the prompt goes to its stdin, its stdout is the
/// generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Split a command line on whitespace into program and arguments.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn run(&self, prompt: &str, timeout: Option<Duration>) -> Result<String, NarrativeError> {
        debug!(program = %self.program, ?timeout, "Spawning text generator");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| NarrativeError::Unavailable(format!("{}: {e}", self.program)))?;

        let feeder = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_owned();
            thread::spawn(move || stdin.write_all(prompt.as_bytes()))
        });
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match timeout {
            Some(limit) => wait_within(&mut child, limit).map_err(|e| {
                NarrativeError::Failed(format!("{}: {e}", self.program))
            })?,
            None => child
                .wait()
                .map_err(|e| NarrativeError::Failed(e.to_string()))?,
        };

        if let Some(Ok(Err(e))) = feeder.map(JoinHandle::join) {
            debug!(error = %e, "Text generator did not read the whole prompt");
        }
        let stdout = stdout.join().unwrap_or_default();
        if !status.success() {
            let stderr = stderr.join().unwrap_or_default();
            return Err(NarrativeError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                status,
                String::from_utf8_lossy(&stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

impl TextGenerator for CommandGenerator {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        self.run(prompt, None)
    }

    fn generate_within(&self, prompt: &str, timeout: Duration) -> Result<String, NarrativeError> {
        self.run(prompt, Some(timeout))
    }
}

/// Read a child pipe to the end on a separate thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            if let Err(e) = pipe.read_to_end(&mut buf) {
                debug!(error = %e, "Text generator pipe closed early");
            }
        }
        buf
    })
}

/// Wait for `child` up to `limit`; on expiry it is killed and reaped.
fn wait_within(child: &mut Child, limit: Duration) -> io::Result<ExitStatus> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            warn!(pid = child.id(), ?limit, "Text generator timed out, killing it");
            child.kill()?;
            child.wait()?;
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("timed out after {}s", limit.as_secs_f64()),
            ));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
