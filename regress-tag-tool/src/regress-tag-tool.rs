#![allow(clippy::uninlined_format_args)]

use regress_tag::{Captures, Composer, Error, Matcher, PartialConfig, Template};
use std::{fs, path::PathBuf};
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, StructOpt)]
#[structopt(name = "regress-tag-tool")]
struct Opt {
    /// The pattern text, which may span lines and contain comments.
    pattern: String,

    /// Treat the pattern argument as the path of a file containing the
    /// pattern text.
    #[structopt(long)]
    from_file: bool,

    /// The flags of the regular expression.
    #[structopt(long, short)]
    flags: Option<String>,

    /// Compile the pattern text exactly as written, without stripping
    /// comments or collapsing lines.
    #[structopt(long)]
    no_line_breaks: bool,

    /// The substring which starts a comment.
    #[structopt(long, short)]
    comment_delimiter: Option<String>,

    /// Print the pattern handed to the regex engine.
    #[structopt(long, short)]
    print: bool,

    /// The input values to match against.
    #[structopt(conflicts_with = "file")]
    inputs: Vec<String>,

    /// Match against the contents of a specified file.
    #[structopt(long, conflicts_with = "inputs")]
    file: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn format_captures(caps: &Captures, input: &str) -> String {
    let range = caps.range();
    let mut result = format!("\"{}\" ({}..{})", &input[range.clone()], range.start, range.end);

    let positional: Vec<String> = (1..caps.len())
        .map(|idx| match caps.get(idx) {
            Some(s) => format!("\"{}\"", s),
            None => "None".to_string(),
        })
        .collect();
    if !positional.is_empty() {
        result.push_str(&format!(", captures: [{}]", positional.join(", ")));
    }

    let named: Vec<String> = caps
        .named()
        .map(|(name, value)| match value {
            Some(s) => format!("{}: \"{}\"", name, s),
            None => format!("{}: None", name),
        })
        .collect();
    if !named.is_empty() {
        result.push_str(&format!(", groups: {{{}}}", named.join(", ")));
    }
    result
}

fn exec_on_string(m: &Matcher, input: &str) {
    match m.captures(input) {
        Some(caps) => {
            let count = m.find_iter(input).count();
            println!("Match: {}, total: {}", format_captures(&caps, input), count);
        }
        None => println!("No match"),
    }
}

fn main() -> Result<(), Error> {
    init_logging();
    let args = Opt::from_args();

    let text = if args.from_file {
        match fs::read_to_string(&args.pattern) {
            Ok(contents) => contents,
            Err(err) => {
                println!("{}: {}", err, args.pattern);
                std::process::exit(1);
            }
        }
    } else {
        args.pattern.clone()
    };

    let composer = Composer::new(PartialConfig {
        flags: args.flags.clone(),
        line_breaks: if args.no_line_breaks { Some(false) } else { None },
        comment_delimiter: args.comment_delimiter.clone(),
    });
    debug!(config = ?composer.config(), "composing");

    let template = Template::new().literal(&text);
    if args.print {
        println!("{}", composer.pattern(&template));
    }
    let m = composer.compile(&template)?;

    if let Some(ref path) = args.file {
        match fs::read_to_string(path) {
            Ok(contents) => exec_on_string(&m, contents.as_str()),
            Err(err) => println!("{}: {}", err, path.display()),
        };
    } else {
        for input in args.inputs {
            exec_on_string(&m, &input);
        }
    }
    Ok(())
}
