//! Output formatting utilities for the CLI.

use serde::Serialize;
use std::io::{self, Write};

use crate::domain::models::Settings;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Write `result` to `writer`
///
/// JSON mode writes a single compact line, so it can follow JSON log
/// records on the same stream.
pub fn write_output<T: CommandOutput, W: Write>(
    writer: &mut W,
    result: &T,
    json_mode: bool,
) -> io::Result<()> {
    if json_mode {
        writeln!(writer, "{}", result.to_json())
    } else {
        writeln!(writer, "{}", result.to_human())
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_output(&mut stdout, result, json_mode)?;
    stdout.flush()
}

/// Resolved settings as printed by the binary; secrets are redacted
#[derive(Debug, Serialize)]
pub struct SettingsOutput {
    pub success: bool,
    pub settings: Settings,
}

impl SettingsOutput {
    pub fn new(settings: &Settings) -> Self {
        Self {
            success: true,
            settings: settings.redacted(),
        }
    }
}

impl CommandOutput for SettingsOutput {
    fn to_human(&self) -> String {
        let s = &self.settings;
        let server = &s.db.options.server;
        let rows = [
            ("storj.api", s.storj.api.clone()),
            ("db.url", s.db.url.clone()),
            ("db.collection", s.db.collection.clone()),
            ("db.options.server.ssl", server.ssl.to_string()),
            (
                "db.options.server.sslAllowInvalidCertificates",
                server.ssl_allow_invalid_certificates.to_string(),
            ),
            (
                "db.options.server.sslAllowInvalidHostnames",
                server.ssl_allow_invalid_hostnames.to_string(),
            ),
            (
                "db.options.replSet.rs_name",
                s.db.options.repl_set.rs_name.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("heroku.id", s.heroku.id.clone()),
            ("heroku.sso_salt", s.heroku.sso_salt.clone()),
            ("heroku.legacy_salt", s.heroku.legacy_salt.clone()),
            ("heroku.password", s.heroku.password.clone()),
            ("log.level", s.log.level.clone()),
            ("retry.count", s.retry.count.to_string()),
            ("retry.baseDelay", s.retry.base_delay.to_string()),
            ("retry.exponent", s.retry.exponent.to_string()),
        ];

        let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        rows.iter()
            .map(|(key, value)| format!("{key:<width$}  {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
