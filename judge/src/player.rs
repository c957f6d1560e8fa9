use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use anyhow::Context;
use serde::Deserialize;
use tictactoe::{Player as Mark, Request};
use tracing::{trace, warn};

use crate::recording::Recorder;

/// How to start a bot, read from a JSON file.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerConfig {
    /// Short name used in logs and the results table.
    pub nick: String,
    /// The executable to run.
    pub cmd: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read player config '{}'", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid player config '{}'", path.display()))?;
        Ok(config)
    }
}

pub struct Player {
    pub name: String,
    // Holds the bot's stdin until the player is dropped.
    child: Child,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after perform_request().
    buf: String,
}

/// A player together with the mark it places during one round.
pub struct Seat<'a> {
    pub player: &'a mut Player,
    pub mark: Mark,
}

impl Player {
    pub fn new(name: &str, executable_path: &str, args: &[String]) -> anyhow::Result<Self> {
        let mut child_proc = Command::new(executable_path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Could not start '{}'", executable_path))?;

        let stdout = child_proc.stdout.take().context("Could not access stdout")?;
        Ok(Self {
            name: String::from(name),
            child: child_proc,
            stdout: BufReader::new(stdout),
            buf: String::new(),
        })
    }

    pub fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        Self::new(&config.nick, &config.cmd, &config.args)
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        // The bot may already be gone, in which case there's nobody to tell
        if let (Some(mut stdin), Ok(bye)) =
            (self.child.stdin.take(), serde_json::to_string(&Request::Bye))
        {
            let _ = writeln!(stdin, "{}", bye);
            let _ = stdin.flush();
        }
        // stdin is closed at this point, so a bot ignoring Bye still sees EOF
        if let Err(err) = self.child.wait() {
            warn!(player = &self.name, %err, "Could not wait for bot to exit");
        }
    }
}

impl<'a> Seat<'a> {
    pub fn new(player: &'a mut Player, mark: Mark) -> Self {
        Self { player, mark }
    }

    pub fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T> {
        let mut req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", player = &self.player.name, request = %req_json);
        req_json.push('\n');
        let stdin = self.player.child.stdin.as_mut().context("Player's input is closed")?;
        stdin.write_all(req_json.as_bytes())?;
        stdin.flush()?;
        self.player.buf.clear();
        let num_bytes_read = self.player.stdout.read_line(&mut self.player.buf)?;
        if num_bytes_read == 0 {
            anyhow::bail!("Player '{}' closed its output", self.player.name);
        }
        let serialized_response = self.player.buf.trim_end();
        let response = serde_json::from_str::<T>(serialized_response).with_context(|| {
            format!(
                "Unexpected response from '{}': {}",
                self.player.name, serialized_response
            )
        })?;
        trace!(name: "Received response", player = &self.player.name, response = %serialized_response);

        if let Some(recorder) = recorder {
            recorder.store_request(&self.player.name, req, serialized_response)?;
        }
        self.player.buf.clear();
        Ok(response)
    }
}
