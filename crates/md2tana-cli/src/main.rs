use anyhow::Result;
use md2tana_config::Config;
use md2tana_engine::{build_outline, convert, io, snapshot};
use regex::Regex;
use std::{
    env,
    path::PathBuf,
    process,
    str::FromStr,
    sync::OnceLock,
};

const USAGE: &str = "[INPUT|-] [-o OUTPUT] [--collapse-spaces] [--tree]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    /// `None` reads stdin.
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    collapse_spaces: bool,
    tree: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--collapse-spaces" => parsed.collapse_spaces = true,
            "--tree" => parsed.tree = true,
            "-o" | "--output" => match iter.next() {
                Some(path) => parsed.output = Some(PathBuf::from(path)),
                None => return Err(format!("{arg} needs a file path")),
            },
            "-" if parsed.input.is_none() => {}
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("Unknown option: {flag}"));
            }
            path => {
                if parsed.input.is_some() {
                    return Err(format!("Unexpected extra argument: {path}"));
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}

/// Collapse runs of spaces and tabs inside each line to one space. Leading
/// indentation is left alone so list nesting survives.
fn collapse_spaces(text: &str) -> String {
    static RUNS: OnceLock<Regex> = OnceLock::new();
    let runs = RUNS.get_or_init(|| Regex::new(r"[ \t]{2,}").expect("Invalid space run regex"));

    text.lines()
        .map(|line| {
            let body = line.trim_start_matches([' ', '\t']);
            let indent = &line[..line.len() - body.len()];
            format!("{indent}{}", runs.replace_all(body, " "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn init_logging(config: &Config) {
    let level = config
        .log_level
        .as_deref()
        .and_then(|level| log::LevelFilter::from_str(level).ok())
        .unwrap_or(log::LevelFilter::Warn);

    // RUST_LOG, when set, overrides the configured level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("md2tana");

    let cli = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };
    if cli.help {
        println!("Usage: {program} {USAGE}");
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    init_logging(&config);
    log::debug!("Config path: {}", Config::config_path().display());

    let source = match &cli.input {
        Some(path) => io::read_file(path),
        None => io::read_source(std::io::stdin().lock()),
    };
    let mut markdown = match source {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if cli.collapse_spaces || config.collapse_spaces {
        markdown = collapse_spaces(&markdown);
    }

    let rendered = if cli.tree {
        snapshot::format_tree(&build_outline(&markdown))
    } else {
        convert(&markdown)
    };

    match cli.output.or(config.output_path) {
        Some(path) => {
            io::write_file(&path, &rendered)?;
            log::info!("Wrote outline to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
