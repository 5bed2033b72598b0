use serde::Serialize;
use trellis_core::entities::AuditLog;

use crate::cli::OutputFormat;

/// Plain-text rendering for `--format text`.
pub trait TextRender {
    fn render_text(&self) -> String;
}

/// One activity feed line: `<user_name> <message>  <created_at>`.
#[derive(Debug, Serialize)]
pub struct ActivityEntry {
    #[serde(flatten)]
    pub log: AuditLog,
    pub message: String,
}

impl From<AuditLog> for ActivityEntry {
    fn from(log: AuditLog) -> Self {
        let message = log.message();
        Self { log, message }
    }
}

impl TextRender for ActivityEntry {
    fn render_text(&self) -> String {
        format!(
            "{} {}  {}",
            self.log.user_name,
            self.message,
            self.log.created_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

impl<T: TextRender> TextRender for [T] {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return String::from("(no activity)");
        }
        self.iter()
            .map(TextRender::render_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T: TextRender> TextRender for Vec<T> {
    fn render_text(&self) -> String {
        self.as_slice().render_text()
    }
}

/// Render a response to a string in the requested format.
pub fn render<T>(value: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + TextRender + ?Sized,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(value.render_text()),
    }
}

/// Print a response in the requested format.
pub fn output<T>(value: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + TextRender + ?Sized,
{
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
