//! Child processes with both output streams drained concurrently.

use std::io;
use std::io::Read;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::thread;
use std::thread::JoinHandle;

use tracing::debug;

#[derive(Debug, Clone)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

type Pump = JoinHandle<io::Result<Vec<u8>>>;

/// Runs `program` to completion and captures its output.
///
/// stdout and stderr are read on their own threads so a child that fills one
/// pipe cannot block on it; both threads are joined before the exit status
/// is read.
pub fn run(program: &str, args: &[&str]) -> io::Result<Output> {
    debug!(program, ?args, "Spawning subprocess");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child.stdout.take().map(pump);
    let stderr = child.stderr.take().map(pump);

    let stdout = collect(stdout);
    let stderr = collect(stderr);
    let status = child.wait()?;
    debug!(program, code = ?status.code(), "Subprocess exited");

    Ok(Output {
        status,
        stdout: stdout?,
        stderr: stderr?,
    })
}

fn pump<R: Read + Send + 'static>(mut reader: R) -> Pump {
    thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn collect(handle: Option<Pump>) -> io::Result<String> {
    let Some(handle) = handle else {
        return Ok(String::new());
    };
    let bytes = handle
        .join()
        .map_err(|_| io::Error::other("output reader thread panicked"))??;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
