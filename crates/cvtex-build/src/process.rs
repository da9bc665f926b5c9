//! Child process supervision with a wall-clock deadline.

use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
/// Minimum time allowed for draining output once the process has exited.
const DRAIN_GRACE: Duration = Duration::from_millis(50);
const CHUNK_SIZE: usize = 8 * 1024;

/// How a supervised child process ended.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The process exited on its own.
    Exited {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
    /// The deadline passed; the process was killed.
    TimedOut,
    /// The executable does not exist.
    NotFound,
    /// The process could not be started or waited on.
    SpawnFailed(io::Error),
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Run `command` to completion or until `timeout` elapses.
///
/// Stdin is closed and both output streams are captured. On timeout the
/// child is killed and whatever it wrote is discarded.
///
/// The deadline also bounds output collection: if a background process
/// inherited the pipes and keeps them open after the child exits, the
/// output read so far is returned once the deadline passes.
pub fn run_with_timeout(command: &mut Command, timeout: Duration) -> ProcessOutcome {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return ProcessOutcome::NotFound,
        Err(e) => return ProcessOutcome::SpawnFailed(e),
    };

    // Drain pipes concurrently so a chatty child cannot block on a full pipe.
    let (sender, chunks) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        spawn_reader(stdout, Stream::Stdout, sender.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_reader(stderr, Stream::Stderr, sender.clone());
    }
    drop(sender);
    let deadline = Instant::now() + timeout;

    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let (stdout, stderr) = collect_output(&chunks, deadline);
                return ProcessOutcome::Exited {
                    status,
                    stdout,
                    stderr,
                };
            }
            Ok(None) => {
                let now = Instant::now();
                if now >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return ProcessOutcome::TimedOut;
                }
                thread::sleep(POLL_INTERVAL.min(deadline - now));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return ProcessOutcome::SpawnFailed(e);
            }
        }
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut source: R, stream: Stream, sender: Sender<(Stream, Vec<u8>)>) {
    thread::spawn(move || {
        let mut buf = vec![0; CHUNK_SIZE];
        loop {
            match source.read(&mut buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if sender.send((stream, buf[..n].to_vec())).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

/// Gather output until both streams close or the deadline passes.
fn collect_output(chunks: &Receiver<(Stream, Vec<u8>)>, deadline: Instant) -> (String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    loop {
        let wait = deadline.saturating_duration_since(Instant::now()).max(DRAIN_GRACE);
        match chunks.recv_timeout(wait) {
            Ok((Stream::Stdout, chunk)) => stdout.extend_from_slice(&chunk),
            Ok((Stream::Stderr, chunk)) => stderr.extend_from_slice(&chunk),
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!("Output pipes still open after the process exited; a background process may still be running");
                break;
            }
        }
    }
    (
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&stderr).into_owned(),
    )
}
