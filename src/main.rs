use chrono::NaiveDateTime;
use std::io::{self, Read};
use tijdtekst::{DateTimeOptions, Reference, recognize_number, recognize_with};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let reference = reference_or_now(config.reference_time);
    let entities = if config.numbers {
        recognize_number(&config.input)
    } else {
        recognize_with(&config.input, reference, config.options)
    };

    if entities.is_empty() {
        println!("no entities recognized");
        return;
    }

    for entity in &entities {
        println!(
            "{:>3}..{:<3} {:<14} {:<28} timex={}  value={}",
            entity.start,
            entity.end,
            entity.type_name,
            format!("{:?}", entity.text),
            entity.resolution.timex,
            entity.resolution.value
        );
    }
}

struct CliConfig {
    input: String,
    reference_time: Option<NaiveDateTime>,
    options: DateTimeOptions,
    numbers: bool,
}

fn reference_or_now(value: Option<NaiveDateTime>) -> Reference {
    value.map(Reference::new).unwrap_or_else(Reference::now)
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_time: Option<NaiveDateTime> = None;
    let mut options = DateTimeOptions::empty();
    let mut numbers = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tijdtekst {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--numbers" => numbers = true,
            "--calendar" => options |= DateTimeOptions::CALENDAR_MODE,
            "--experimental" => options |= DateTimeOptions::EXPERIMENTAL_MODE,
            "--split-datetime" => options |= DateTimeOptions::SPLIT_DATE_AND_TIME,
            "--skip-fromto" => options |= DateTimeOptions::SKIP_FROM_TO_MERGE,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = Some(parse_reference(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_time = Some(parse_reference(value)?);
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_time, options, numbers })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "tijdtekst {version}

Dutch date, time and number recognition CLI.

Usage:
  tijdtekst [OPTIONS] [--] <input...>
  tijdtekst [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to analyze. If omitted, reads remaining
                             args or stdin when no args are provided.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS.
                             Default: the current system time.
  --numbers                  Run the number model instead of the date/time model.
  --calendar                 Calendar mode: keep standalone unit words.
  --experimental             Enable experimental recognizers (timezones).
  --split-datetime           Split merged date+time spans into two entities.
  --skip-fromto              Keep from-to halves as separate entities.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_reference_overrides_the_clock() {
        let pinned = parse_reference("2013-02-12T04:30:00").unwrap();
        assert_eq!(reference_or_now(Some(pinned)).datetime, pinned);
        // Without --reference the anchor is the current time, not the past.
        assert!(reference_or_now(None).datetime > pinned);
    }

    #[test]
    fn malformed_reference_is_rejected() {
        assert!(parse_reference("2013-02-12 04:30:00").is_err());
        assert!(parse_reference("gisteren").is_err());
    }
}
