pub mod classify;
pub mod config;
pub mod error;
pub mod inline;
pub mod input;
pub mod ir;
pub mod list;
pub mod parse;
pub mod render;

pub use error::{Error, Result};
pub use input::extract_analysis;
pub use ir::{BlockNode, InlineSpan, InlineText, SpanKind};
pub use parse::parse;

use config::{Config, InputMode, OutputFormat};

/// Run one input through the configured pipeline: optional JSON field
/// extraction, parsing, then rendering.
pub fn convert(input: &str, config: &Config) -> Result<String> {
    let analysis = match config.input {
        InputMode::Text => input.to_string(),
        InputMode::Json => extract_analysis(input, &config.field)?,
    };

    let blocks = parse(&analysis);

    let output = match config.format {
        OutputFormat::Html => render::render_html(&blocks),
        OutputFormat::Text => render::render_text(&blocks),
        OutputFormat::Json => {
            let mut json = if config.pretty {
                serde_json::to_string_pretty(&blocks)?
            } else {
                serde_json::to_string(&blocks)?
            };
            json.push('\n');
            json
        }
    };
    Ok(output)
}
