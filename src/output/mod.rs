use std::{
    io::{self, BufWriter, Write},
    process::{Child, ChildStdin, Command, Stdio},
};

use crate::types::Config;

/// Where selected units go. Each unit is written verbatim followed by a
/// single newline; `finish` must be called exactly once after the last unit.
pub trait OutputSink {
    fn write_unit(&mut self, unit: &[u8]) -> Result<(), String>;
    fn finish(self: Box<Self>) -> Result<(), String>;
}

/// Builds the sink selected by the configuration. The consumer process, if
/// any, is spawned here, before any input is read.
pub fn open_sink(config: &Config) -> Result<Box<dyn OutputSink>, String> {
    match config.consumer.as_deref() {
        Some(command) => Ok(Box::new(ConsumerSink::spawn(command)?)),
        None => Ok(Box::new(ConsoleSink::new())),
    }
}

struct ConsoleSink {
    writer: BufWriter<io::Stdout>,
}

impl ConsoleSink {
    fn new() -> Self {
        ConsoleSink {
            writer: BufWriter::new(io::stdout()),
        }
    }
}

impl OutputSink for ConsoleSink {
    fn write_unit(&mut self, unit: &[u8]) -> Result<(), String> {
        self.writer
            .write_all(unit)
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|error| format!("error while writing: {error}"))
    }

    fn finish(mut self: Box<Self>) -> Result<(), String> {
        self.writer
            .flush()
            .map_err(|error| format!("error while writing: {error}"))
    }
}

/// Pipes units into an external command's stdin; the command's own stdout is
/// inherited, so its output becomes the program's output.
struct ConsumerSink {
    child: Child,
    stdin: Option<ChildStdin>,
}

impl ConsumerSink {
    fn spawn(command_line: &str) -> Result<Self, String> {
        let mut words = command_line.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| "consumer command is empty".to_string())?;

        let mut child = Command::new(program)
            .args(words)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .spawn()
            .map_err(|error| format!("failed to spawn consumer {program}: {error}"))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| format!("failed to open pipe to consumer {program}"))?;

        Ok(ConsumerSink {
            child,
            stdin: Some(stdin),
        })
    }
}

impl OutputSink for ConsumerSink {
    fn write_unit(&mut self, unit: &[u8]) -> Result<(), String> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| "consumer pipe already closed".to_string())?;
        stdin
            .write_all(unit)
            .and_then(|_| stdin.write_all(b"\n"))
            .map_err(|error| format!("error while writing to consumer: {error}"))
    }

    fn finish(mut self: Box<Self>) -> Result<(), String> {
        // Dropping the handle closes the pipe and signals end-of-input.
        drop(self.stdin.take());
        // The consumer's run is best effort, so its exit status is not checked.
        let _ = self.child.wait();
        Ok(())
    }
}
