//! Command-line interface for course mentions
//! Reads forum posts and prints the course mentions found in them.
//!
//! Usage:
//!   mentions [PATH...]                  - Mentions of each file (stdin when no path or `-`)
//!   mentions --thread [PATH...]         - One deduplicated list over all inputs
//!   mentions --thread --previous `<file>` [PATH...]
//!                                       - Also report new / unchanged / changed
//!   mentions --spans [PATH...]          - Raw text spans instead of mentions

mod input;
mod logging;
mod render;

use clap::{Arg, ArgAction, ArgMatches, Command};
use input::Input;
use mention_config::{Loader, MentionsConfig};
use mention_parser::{MentionChange, MentionParser, ThreadMentions};
use render::{RenderOptions, SourceMentions};
use tracing::debug;

fn main() {
    logging::init_tracing();

    let matches = Command::new("mentions")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract course mentions (department + number) from free-form text")
        .arg(
            Arg::new("paths")
                .help("Input files; `-` or no path reads stdin")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: lines)")
                .value_parser(["lines", "json"]),
        )
        .arg(
            Arg::new("thread")
                .long("thread")
                .help("Treat all inputs as one thread; .json inputs are thread documents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("catalog-keys")
                .long("catalog-keys")
                .help("Also print the zero-padded catalog key of each mention")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("spans")
                .long("spans")
                .help("Print the raw text spans instead of mentions")
                .action(ArgAction::SetTrue)
                .conflicts_with("previous"),
        )
        .arg(
            Arg::new("previous")
                .long("previous")
                .short('p')
                .help("Stored mention list to compare against; a missing file reports `new`"),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    match run(&matches, &config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Defaults, then `--config`, then flags
fn load_config(matches: &ArgMatches) -> Result<MentionsConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("catalog-keys") {
        loader = loader
            .set_override("output.catalog_keys", true)
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("spans") {
        loader = loader
            .set_override("output.show_spans", true)
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| e.to_string())
}

fn run(matches: &ArgMatches, config: &MentionsConfig) -> Result<String, String> {
    let parser = config.parser().map_err(|e| e.to_string())?;
    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();
    let inputs = input::read_inputs(&paths)?;
    debug!(inputs = inputs.len(), "read inputs");

    if config.output.show_spans {
        return render::render_spans(&parser, &inputs, config.output.format);
    }

    let thread = matches.get_flag("thread");
    let results = if thread {
        vec![parse_thread(&parser, &inputs, config)?]
    } else {
        inputs
            .iter()
            .map(|input| SourceMentions {
                source: input.source.clone(),
                mentions: parser.parse(&input.text),
            })
            .collect()
    };

    let change = match matches.get_one::<String>("previous") {
        Some(path) => {
            let [result] = results.as_slice() else {
                return Err("--previous needs a single input or --thread".to_string());
            };
            let previous = input::read_previous(path, parser.lexicon())?;
            Some(MentionChange::between(
                previous.as_deref(),
                &result.mentions,
            ))
        }
        None => None,
    };

    let options = RenderOptions {
        format: config.output.format,
        catalog_keys: config.output.catalog_keys,
    };
    render::render_mentions(&results, change.as_ref(), options)
}

fn parse_thread(
    parser: &MentionParser,
    inputs: &[Input],
    config: &MentionsConfig,
) -> Result<SourceMentions, String> {
    let mut thread =
        ThreadMentions::new(parser).ignoring_authors(config.thread.ignored_authors.iter().cloned());
    for input in inputs {
        input::push_input(&mut thread, input)?;
    }
    debug!(texts = thread.texts(), mentions = thread.mentions().len(), "parsed thread");
    Ok(SourceMentions {
        source: "thread".to_string(),
        mentions: thread.into_mentions(),
    })
}
