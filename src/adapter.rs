//! External AI delegation with local fallback.
//!
//! The transport layer talks to a `ChatService` holding an ordered chain of
//! [`ChatAssistant`]s. The external subprocess assistant is tried first when
//! configured; the pattern-matching assistant sits at the end of the chain
//! and never fails, so a chat turn always produces a reply.

use crate::config::AppConfig;
use crate::intent;
use crate::models::ChatReply;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("assistant exited with code {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
    #[error("assistant timed out after {0:?}")]
    TimedOut(Duration),
    #[error("assistant produced no output")]
    EmptyOutput,
    #[error("could not parse assistant reply: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything that can answer a chat turn. Lets the external integration be
/// swapped or stubbed without touching the transport handler.
#[async_trait]
pub trait ChatAssistant: Send + Sync {
    /// Single attempt at answering; no retries happen at this level.
    async fn attempt(&self, message: &str, user_id: &str) -> Result<ChatReply, AdapterError>;

    fn name(&self) -> &'static str;
}

/// Runs the external AI script as a bounded subprocess:
/// `<command> <script> --message <msg> --user-id <id>`.
pub struct ExternalAiAssistant {
    command: String,
    script: PathBuf,
    timeout: Duration,
}

impl ExternalAiAssistant {
    pub fn new(command: impl Into<String>, script: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            script: script.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ChatAssistant for ExternalAiAssistant {
    async fn attempt(&self, message: &str, user_id: &str) -> Result<ChatReply, AdapterError> {
        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.command)
                .arg(&self.script)
                .args(["--message", message, "--user-id", user_id])
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| AdapterError::TimedOut(self.timeout))?
        .map_err(|source| AdapterError::Spawn {
            command: self.command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(AdapterError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_reply(&String::from_utf8_lossy(&output.stdout))
    }

    fn name(&self) -> &'static str {
        "external_ai"
    }
}

/// The reply rides on the last non-empty stdout line so the script is free
/// to log above it.
pub(crate) fn parse_reply(stdout: &str) -> Result<ChatReply, AdapterError> {
    let line = stdout
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or(AdapterError::EmptyOutput)?;
    Ok(serde_json::from_str(line)?)
}

/// Local keyword pipeline behind the same interface.
pub struct PatternMatchAssistant;

#[async_trait]
impl ChatAssistant for PatternMatchAssistant {
    async fn attempt(&self, message: &str, _user_id: &str) -> Result<ChatReply, AdapterError> {
        Ok(intent::respond(message))
    }

    fn name(&self) -> &'static str {
        "pattern_matching"
    }
}

/// Ordered assistant chain; the first success wins.
pub struct ChatService {
    assistants: Vec<Box<dyn ChatAssistant>>,
}

impl ChatService {
    pub fn new(assistants: Vec<Box<dyn ChatAssistant>>) -> Self {
        Self { assistants }
    }

    /// Chain from config: external assistant when a script is configured,
    /// then the pattern-matching fallback.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut assistants: Vec<Box<dyn ChatAssistant>> = Vec::new();
        match &config.ai_script {
            Some(script) => {
                info!("External AI assistant enabled: {} {:?}", config.ai_command, script);
                assistants.push(Box::new(ExternalAiAssistant::new(
                    &config.ai_command,
                    script.clone(),
                    config.ai_timeout,
                )));
            }
            None => info!("AI_CHAT_SCRIPT not set, running pattern matching only"),
        }
        assistants.push(Box::new(PatternMatchAssistant));
        Self::new(assistants)
    }

    /// Pattern matching only, no external process.
    pub fn local() -> Self {
        Self::new(vec![Box::new(PatternMatchAssistant)])
    }

    /// Answer a chat turn. Assistant failures are downgraded to the next
    /// assistant in the chain and never surface to the caller.
    pub async fn reply(&self, message: &str, user_id: &str) -> ChatReply {
        for assistant in &self.assistants {
            match assistant.attempt(message, user_id).await {
                Ok(reply) => {
                    debug!("{} assistant answered", assistant.name());
                    return reply;
                }
                Err(e) => warn!("{} assistant failed, falling back: {}", assistant.name(), e),
            }
        }
        // Unreachable while the pattern assistant terminates the chain.
        intent::respond(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reply_from_last_line() {
        let stdout = "loading model...\nready\n{\"response\": \"Hello!\", \"type\": \"greeting\"}\n";
        let reply = parse_reply(stdout).unwrap();
        assert_eq!(reply.response, "Hello!");
        assert_eq!(reply.category, "greeting");
        assert!(reply.recommendations.is_empty());
    }

    #[test]
    fn missing_category_defaults_to_chat() {
        let reply = parse_reply("{\"response\": \"Hi\"}").unwrap();
        assert_eq!(reply.category, "chat");
    }

    #[test]
    fn empty_output_is_an_error() {
        assert!(matches!(parse_reply("\n  \n"), Err(AdapterError::EmptyOutput)));
    }

    #[test]
    fn pretty_printed_json_is_rejected() {
        // The contract is one JSON object on one line; the closing brace of
        // an indented dump is not a reply.
        let stdout = "{\n  \"response\": \"Hi\"\n}\n";
        assert!(matches!(parse_reply(stdout), Err(AdapterError::Malformed(_))));
    }

    #[tokio::test]
    async fn nonexistent_command_fails_to_spawn() {
        let assistant = ExternalAiAssistant::new(
            "definitely-not-a-real-binary",
            "/tmp/nothing.py",
            Duration::from_secs(2),
        );
        let err = assistant.attempt("hello", "u1").await.unwrap_err();
        assert!(matches!(err, AdapterError::Spawn { .. }));
    }

    #[tokio::test]
    async fn nonzero_exit_is_a_failure() {
        let assistant = ExternalAiAssistant::new("false", "/dev/null", Duration::from_secs(2));
        let err = assistant.attempt("hello", "u1").await.unwrap_err();
        assert!(matches!(err, AdapterError::Failed { .. }));
    }

    // `sh <script> --message .. --user-id ..` soaks up the extra args as
    // positional parameters, so the script just sleeps.
    fn slow_script(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "sleep 5\n").expect("write test script");
        path
    }

    #[tokio::test]
    async fn slow_assistant_hits_the_timeout() {
        let script = slow_script("chat_assistant_slow_attempt.sh");
        let assistant = ExternalAiAssistant::new("sh", script, Duration::from_millis(100));
        let err = assistant.attempt("hello", "u1").await.unwrap_err();
        assert!(matches!(err, AdapterError::TimedOut(_)));
    }

    #[tokio::test]
    async fn timed_out_external_falls_back_to_pattern_matching() {
        let script = slow_script("chat_assistant_slow_chain.sh");
        let service = ChatService::new(vec![
            Box::new(ExternalAiAssistant::new("sh", script, Duration::from_millis(100))),
            Box::new(PatternMatchAssistant),
        ]);
        let reply = service.reply("hello", "u1").await;
        assert_eq!(reply.category, "greeting");
    }

    #[tokio::test]
    async fn failing_external_falls_back_to_pattern_matching() {
        let service = ChatService::new(vec![
            Box::new(ExternalAiAssistant::new("false", "/dev/null", Duration::from_secs(2))),
            Box::new(PatternMatchAssistant),
        ]);
        let reply = service.reply("hello", "u1").await;
        assert_eq!(reply.category, "greeting");
    }

    #[tokio::test]
    async fn local_service_answers_directly() {
        let reply = ChatService::local().reply("purple elephant", "u1").await;
        assert_eq!(reply.category, "general");
        assert_eq!(reply.recommendations.len(), 2);
    }
}
