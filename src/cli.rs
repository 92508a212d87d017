use crate::{LeadingZeroPolicy, Options, repair_to_string};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --in-place            Rewrite INPUT file with the repaired contents\n\
               --pretty              Pretty-print output\n\
               --ensure-ascii        Escape non-ASCII as \\uXXXX\n\
               --no-python-keywords  Disable Python True/False/None normalization\n\
               --no-undefined-null   Disable undefined -> null repair\n\
               --no-fence            Disable fenced code block stripping\n\
               --hash-comments       Treat # as a line comment\n\
               --leading-zero POLICY Keep|Quote (default Quote)\n\
               --max-depth N         Nesting depth cap (default 100)\n\
               --word-comment MARKER Treat a bare word as a stripped comment marker\n\
           -h, --help                Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonrepair".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut pretty = false;
    let mut in_place = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--pretty" => {
                pretty = true;
            }
            "--in-place" => {
                in_place = true;
            }
            "--ensure-ascii" => {
                opts.ensure_ascii = true;
            }
            "--no-python-keywords" => {
                opts.allow_python_keywords = false;
            }
            "--no-undefined-null" => {
                opts.repair_undefined = false;
            }
            "--no-fence" => {
                opts.fenced_code_blocks = false;
            }
            "--hash-comments" => {
                opts.tolerate_hash_comments = true;
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --max-depth");
                    std::process::exit(2);
                }
                opts.max_depth = args[i].parse().unwrap_or(100);
            }
            "--leading-zero" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing POLICY for --leading-zero");
                    std::process::exit(2);
                }
                match args[i].to_lowercase().as_str() {
                    "keep" => opts.leading_zero_policy = LeadingZeroPolicy::KeepAsNumber,
                    "quote" => opts.leading_zero_policy = LeadingZeroPolicy::QuoteAsString,
                    other => {
                        eprintln!("Unknown leading-zero policy: {}", other);
                        std::process::exit(2);
                    }
                }
            }
            "--word-comment" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing MARKER for --word-comment");
                    std::process::exit(2);
                }
                opts.word_comment_markers.push(args[i].clone());
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    if in_place && input.is_none() {
        eprintln!("--in-place requires an INPUT file");
        std::process::exit(2);
    }
    if in_place && output.is_some() {
        eprintln!("--in-place and --output are mutually exclusive");
        std::process::exit(2);
    }

    let mode = CliMode {
        input,
        output,
        pretty,
        in_place,
    };
    (opts, mode)
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    pretty: bool,
    in_place: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            content
        }
    };

    let repaired = repair_to_string(&content, &opts)?;
    let rendered = if mode.pretty {
        #[cfg(feature = "serde")]
        {
            let v: serde_json::Value = serde_json::from_str(&repaired)
                .map_err(|e| crate::RepairError::from_serde("parse", e))?;
            serde_json::to_string_pretty(&v)?
        }
        #[cfg(not(feature = "serde"))]
        {
            repaired
        }
    } else {
        repaired
    };

    if mode.in_place {
        let path = mode.input.as_ref().expect("checked above");
        fs::write(path, rendered.as_bytes())?;
        return Ok(());
    }

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    out_writer.write_all(rendered.as_bytes())?;
    Ok(())
}
