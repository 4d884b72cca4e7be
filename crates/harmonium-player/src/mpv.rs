//! mpv driver: spawns an idle mpv process and controls it over its JSON
//! IPC socket.
//!
//! One request is in flight at a time; responses are matched by
//! `request_id` and asynchronous events encountered while waiting are
//! consumed inline (end-of-file events feed the `Ended` state).

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tracing::{debug, trace, warn};

use harmonium_core::{Error, MediaPlayer, PlayerState, Result};

/// How long to wait for the IPC socket to appear after spawning mpv.
const SOCKET_WAIT: Duration = Duration::from_secs(5);

/// Read timeout for IPC responses.
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

/// A parsed line from the IPC socket.
#[derive(Debug, PartialEq)]
enum IpcMessage {
    Response {
        request_id: u64,
        error: String,
        data: Value,
    },
    Event {
        name: String,
        reason: Option<String>,
    },
}

fn parse_ipc_line(line: &str) -> Result<IpcMessage> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| Error::Player(format!("Malformed IPC line: {e}")))?;

    if let Some(name) = value.get("event").and_then(Value::as_str) {
        return Ok(IpcMessage::Event {
            name: name.to_string(),
            reason: value
                .get("reason")
                .and_then(Value::as_str)
                .map(str::to_string),
        });
    }

    Ok(IpcMessage::Response {
        request_id: value
            .get("request_id")
            .and_then(Value::as_u64)
            .unwrap_or_default(),
        error: value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        data: value.get("data").cloned().unwrap_or(Value::Null),
    })
}

fn build_request(request_id: u64, command: &[Value]) -> String {
    json!({ "command": command, "request_id": request_id }).to_string()
}

/// Native player backed by an external mpv process.
pub struct MpvPlayer {
    child: Child,
    writer: UnixStream,
    reader: BufReader<UnixStream>,
    socket_path: PathBuf,
    next_request_id: u64,
    /// Set when an end-file event with reason "eof" arrives; consumed by
    /// the next `state()` call.
    reached_eof: bool,
}

impl MpvPlayer {
    /// Spawn mpv (audio only, idle) and connect to its IPC socket.
    pub fn new() -> Result<Self> {
        Self::with_binary("mpv")
    }

    /// Spawn a specific mpv binary.
    pub fn with_binary(binary: &str) -> Result<Self> {
        let socket_path =
            std::env::temp_dir().join(format!("harmonium-mpv-{}.sock", std::process::id()));

        let child = Command::new(binary)
            .arg("--idle=yes")
            .arg("--no-video")
            .arg("--no-terminal")
            .arg(format!("--input-ipc-server={}", socket_path.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Player(format!("Failed to spawn mpv: {e}")))?;

        let stream = Self::connect(&socket_path)?;
        stream
            .set_read_timeout(Some(RESPONSE_TIMEOUT))
            .map_err(|e| Error::Player(format!("Failed to configure IPC socket: {e}")))?;
        let writer = stream
            .try_clone()
            .map_err(|e| Error::Player(format!("Failed to clone IPC socket: {e}")))?;

        debug!("mpv ready on {}", socket_path.display());

        Ok(Self {
            child,
            writer,
            reader: BufReader::new(stream),
            socket_path,
            next_request_id: 1,
            reached_eof: false,
        })
    }

    fn connect(socket_path: &std::path::Path) -> Result<UnixStream> {
        let deadline = Instant::now() + SOCKET_WAIT;
        loop {
            match UnixStream::connect(socket_path) {
                Ok(stream) => return Ok(stream),
                Err(e) if Instant::now() >= deadline => {
                    return Err(Error::Player(format!(
                        "mpv IPC socket did not appear: {e}"
                    )));
                }
                Err(_) => std::thread::sleep(Duration::from_millis(50)),
            }
        }
    }

    /// Send one command and wait for its response, consuming interleaved
    /// events.
    fn command(&mut self, command: &[Value]) -> Result<Value> {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let line = build_request(request_id, command);
        trace!("mpv <- {line}");
        self.writer
            .write_all(line.as_bytes())
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|e| Error::Player(format!("IPC write failed: {e}")))?;

        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| Error::Player(format!("IPC read failed: {e}")))?;
            if read == 0 {
                return Err(Error::Player("mpv closed the IPC socket".into()));
            }
            trace!("mpv -> {}", line.trim_end());

            match parse_ipc_line(line.trim_end())? {
                IpcMessage::Event { name, reason } => {
                    if name == "end-file" && reason.as_deref() == Some("eof") {
                        self.reached_eof = true;
                    }
                }
                IpcMessage::Response {
                    request_id: id,
                    error,
                    data,
                } => {
                    if id != request_id {
                        continue;
                    }
                    if error == "success" {
                        return Ok(data);
                    }
                    if error == "property unavailable" {
                        return Ok(Value::Null);
                    }
                    return Err(Error::Player(format!("mpv rejected command: {error}")));
                }
            }
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        self.command(&[json!("set_property"), json!(name), value])?;
        Ok(())
    }

    fn get_property(&mut self, name: &str) -> Result<Value> {
        self.command(&[json!("get_property"), json!(name)])
    }

    fn get_property_bool(&mut self, name: &str) -> Result<bool> {
        Ok(self.get_property(name)?.as_bool().unwrap_or_default())
    }
}

impl MediaPlayer for MpvPlayer {
    fn set_source(&mut self, url: &str) -> Result<()> {
        self.reached_eof = false;
        self.command(&[json!("loadfile"), json!(url)])?;
        // loadfile starts playback; hold it until play() is called.
        self.set_property("pause", json!(true))
    }

    fn play(&mut self) -> Result<()> {
        self.set_property("pause", json!(false))
    }

    fn pause(&mut self) -> Result<()> {
        self.set_property("pause", json!(true))
    }

    fn stop(&mut self) -> Result<()> {
        self.reached_eof = false;
        self.command(&[json!("stop")])?;
        Ok(())
    }

    fn state(&mut self) -> Result<PlayerState> {
        // Draining any response also consumes pending end-file events.
        let idle = self.get_property_bool("idle-active")?;
        if idle {
            if std::mem::take(&mut self.reached_eof) {
                return Ok(PlayerState::Ended);
            }
            return Ok(PlayerState::Idle);
        }
        if self.get_property_bool("pause")? {
            Ok(PlayerState::Paused)
        } else {
            Ok(PlayerState::Playing)
        }
    }

    fn position(&mut self) -> Result<f64> {
        let percent = self
            .get_property("percent-pos")?
            .as_f64()
            .unwrap_or_default();
        Ok((percent / 100.0).clamp(0.0, 1.0))
    }
}

impl Drop for MpvPlayer {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            warn!("Failed to kill mpv: {e}");
        }
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request() {
        let line = build_request(7, &[json!("get_property"), json!("pause")]);
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["request_id"], 7);
        assert_eq!(value["command"][0], "get_property");
        assert_eq!(value["command"][1], "pause");
    }

    #[test]
    fn test_parse_response_line() {
        let msg = parse_ipc_line(r#"{"data":true,"error":"success","request_id":3}"#).unwrap();
        assert_eq!(
            msg,
            IpcMessage::Response {
                request_id: 3,
                error: "success".into(),
                data: Value::Bool(true),
            }
        );
    }

    #[test]
    fn test_parse_event_line() {
        let msg = parse_ipc_line(r#"{"event":"end-file","reason":"eof"}"#).unwrap();
        assert_eq!(
            msg,
            IpcMessage::Event {
                name: "end-file".into(),
                reason: Some("eof".into()),
            }
        );
    }

    #[test]
    fn test_parse_garbage_line() {
        assert!(parse_ipc_line("not json").is_err());
    }
}
