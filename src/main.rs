use std::env;
use std::fs;
use std::process;

use chordsheet::{classify, layout_song, to_plain_text, ViewportClass};
use log::{LevelFilter, Log, Metadata, Record};

const USAGE: &str = "Usage: chordsheet <song.json> [options]

Options:
  --viewport <mobile|tablet|desktop|print>   Layout profile (default: desktop)
  --width <px> --height <px>                 Pick the viewport from window size
  --print                                    Lay out for printing
  --transpose <semitones>                    Shift every chord (e.g. 2, -3)
  --json                                     Emit the layout as JSON
  -v, --verbose                              Log pipeline details to stderr";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

/// Only records from this crate are printed; dependencies stay quiet.
fn is_own_target(target: &str) -> bool {
    target == "chordsheet" || target.starts_with("chordsheet::")
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && is_own_target(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

struct Options {
    input_path: String,
    viewport: Option<ViewportClass>,
    width: Option<f64>,
    height: Option<f64>,
    print: bool,
    semitones: i32,
    json: bool,
    verbose: bool,
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(n)) => n,
        _ => fail(&format!("{} expects a number", flag)),
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        input_path: String::new(),
        viewport: None,
        width: None,
        height: None,
        print: false,
        semitones: 0,
        json: false,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--viewport" => {
                i += 1;
                let name = args.get(i).map(String::as_str).unwrap_or("");
                match name.parse() {
                    Ok(viewport) => options.viewport = Some(viewport),
                    Err(e) => fail(&e.to_string()),
                }
            }
            "--width" => {
                i += 1;
                options.width = Some(parse_number(arg, args.get(i)));
            }
            "--height" => {
                i += 1;
                options.height = Some(parse_number(arg, args.get(i)));
            }
            "--transpose" => {
                i += 1;
                options.semitones = parse_number(arg, args.get(i));
            }
            "--print" => options.print = true,
            "--json" => options.json = true,
            "-v" | "--verbose" => options.verbose = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            _ if arg.starts_with('-') => fail(&format!("Unknown option '{}'", arg)),
            _ if options.input_path.is_empty() => options.input_path = arg.to_string(),
            _ => fail(&format!("Unexpected argument '{}'", arg)),
        }
        i += 1;
    }

    if options.input_path.is_empty() {
        fail("Missing song file");
    }
    options
}

fn resolve_viewport(options: &Options) -> ViewportClass {
    if options.print {
        return ViewportClass::Print;
    }
    if let Some(viewport) = options.viewport {
        return viewport;
    }
    match options.width {
        Some(width) => classify(width, options.height.unwrap_or(0.0)),
        None => ViewportClass::Desktop,
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    if options.verbose {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    }

    // Read input file
    let source = match fs::read_to_string(&options.input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", options.input_path, e);
            process::exit(1);
        }
    };

    let viewport = resolve_viewport(&options);
    let sheet = match layout_song(&source, viewport, options.semitones) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Layout error: {}", e);
            process::exit(1);
        }
    };

    if options.json {
        match serde_json::to_string_pretty(&sheet) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing layout: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", to_plain_text(&sheet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_ignores_other_crates() {
        assert!(is_own_target("chordsheet"));
        assert!(is_own_target("chordsheet::balance"));
        assert!(!is_own_target("chordsheet_songs"));
        assert!(!is_own_target("serde_json::de"));
        assert!(!is_own_target(""));
    }
}
