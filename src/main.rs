use clap::{Parser, Subcommand};
use whenwords::{FormatOptions, Instant};

#[derive(Parser, Debug)]
#[command(version, about = "Human-friendly times, durations and dates.")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Relative time of an instant, e.g. "3 hours ago"
    Ago {
        /// Seconds since the Unix epoch
        #[arg(allow_negative_numbers = true)]
        instant: Instant,

        /// Point of comparison (default: now)
        #[arg(long, allow_negative_numbers = true)]
        reference: Option<Instant>,
    },

    /// Formats a number of seconds, e.g. "2 hours, 30 minutes"
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,

        /// Short unit suffixes ("2h 30m")
        #[arg(long)]
        compact: bool,

        /// Number of units to keep, largest first (0 = all)
        #[arg(long, default_value_t = 2)]
        max_units: usize,
    },

    /// Parses a duration such as "1h30m" or "2:30:00" into seconds
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Calendar label of an instant, e.g. "Yesterday"
    Date {
        /// Seconds since the Unix epoch
        #[arg(allow_negative_numbers = true)]
        instant: Instant,

        /// Point of comparison (default: now)
        #[arg(long, allow_negative_numbers = true)]
        reference: Option<Instant>,
    },

    /// Label spanning two instants, e.g. "January 1–5, 2024"
    Range {
        #[arg(allow_negative_numbers = true)]
        start: Instant,

        #[arg(allow_negative_numbers = true)]
        end: Instant,
    },
}

fn run(command: Command) -> whenwords::Result<String> {
    let output = match command {
        Command::Ago { instant, reference } => {
            whenwords::time_ago(instant, reference.unwrap_or_else(whenwords::timestamp))
        }
        Command::Duration {
            seconds,
            compact,
            max_units,
        } => whenwords::format_duration(
            seconds,
            &FormatOptions::default()
                .compact(compact)
                .max_units(max_units),
        )?,
        Command::Parse { text } => whenwords::parse_duration(&text)?.to_string(),
        Command::Date { instant, reference } => {
            whenwords::human_date(instant, reference.unwrap_or_else(whenwords::timestamp))
        }
        Command::Range { start, end } => whenwords::date_range(start, end),
    };

    Ok(output)
}

fn main() {
    env_logger::builder()
        .filter_module("whenwords", log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::debug!("running {:?}", args.command);

    match run(args.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
