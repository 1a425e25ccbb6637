//! Output rendering
//!
//! Every renderer returns the full output as a string; `main` prints it.

use crate::input::Input;
use mention_config::OutputFormat;
use mention_parser::{Mention, MentionChange, MentionParser};
use serde::Serialize;

/// The mentions found in one source (a file, stdin, or a whole thread)
#[derive(Debug, Clone)]
pub struct SourceMentions {
    pub source: String,
    pub mentions: Vec<Mention>,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub catalog_keys: bool,
}

#[derive(Serialize)]
struct MentionRow<'a> {
    department: &'a str,
    number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_key: Option<String>,
}

#[derive(Serialize)]
struct SourceRow<'a> {
    source: &'a str,
    mentions: Vec<MentionRow<'a>>,
}

#[derive(Serialize)]
struct Report<'a> {
    sources: Vec<SourceRow<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<&'a MentionChange>,
}

#[derive(Serialize)]
struct SpanRow<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    department: &'a str,
}

#[derive(Serialize)]
struct SpanSource<'a> {
    source: &'a str,
    spans: Vec<SpanRow<'a>>,
}

pub fn render_mentions(
    results: &[SourceMentions],
    change: Option<&MentionChange>,
    options: RenderOptions,
) -> Result<String, String> {
    match options.format {
        OutputFormat::Lines => Ok(mentions_to_lines(results, change, options.catalog_keys)),
        OutputFormat::Json => {
            let report = Report {
                sources: results
                    .iter()
                    .map(|result| SourceRow {
                        source: &result.source,
                        mentions: result
                            .mentions
                            .iter()
                            .map(|mention| MentionRow {
                                department: mention.department.as_str(),
                                number: mention.number.as_str(),
                                catalog_key: options
                                    .catalog_keys
                                    .then(|| mention.catalog_key().to_string()),
                            })
                            .collect(),
                    })
                    .collect(),
                change,
            };
            to_json(&report)
        }
    }
}

fn mentions_to_lines(
    results: &[SourceMentions],
    change: Option<&MentionChange>,
    catalog_keys: bool,
) -> String {
    let mut out = String::new();
    let headers = results.len() > 1;
    for result in results {
        if headers {
            out.push_str(&format!("# {}\n", result.source));
        }
        for mention in &result.mentions {
            if catalog_keys {
                out.push_str(&format!("{}\t{}\n", mention, mention.catalog_key()));
            } else {
                out.push_str(&format!("{}\n", mention));
            }
        }
    }
    if let Some(change) = change {
        out.push_str(&change_to_line(change));
        out.push('\n');
    }
    out
}

fn change_to_line(change: &MentionChange) -> String {
    match change {
        MentionChange::Changed { added, removed } => {
            let mut line = format!("# {}", change.label());
            if !added.is_empty() || !removed.is_empty() {
                line.push(':');
            }
            for mention in added {
                line.push_str(&format!(" +{}", mention));
            }
            for mention in removed {
                line.push_str(&format!(" -{}", mention));
            }
            line
        }
        _ => format!("# {}", change.label()),
    }
}

/// The raw spans of every input
pub fn render_spans(
    parser: &MentionParser,
    inputs: &[Input],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Lines => {
            let mut out = String::new();
            for input in inputs {
                if inputs.len() > 1 {
                    out.push_str(&format!("# {}\n", input.source));
                }
                for span in parser.spans(&input.text) {
                    let range = span.range();
                    out.push_str(&format!("{}..{}\t{}\n", range.start, range.end, span.as_str()));
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let sources: Vec<SpanSource> = inputs
                .iter()
                .map(|input| SpanSource {
                    source: &input.source,
                    spans: parser
                        .spans(&input.text)
                        .into_iter()
                        .map(|span| SpanRow {
                            start: span.range().start,
                            end: span.range().end,
                            text: span.as_str(),
                            department: span.department(),
                        })
                        .collect(),
                })
                .collect();
            to_json(&sources)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("JSON serialization failed: {}", e))?;
    json.push('\n');
    Ok(json)
}
