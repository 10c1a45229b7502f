use std::path::PathBuf;
use std::process::ExitCode;

use brightlight::{BrightlightError, ConfigBuilder, ErrorKind, Operation, Report, execute};

use clap::{ArgGroup, Parser};

/// Read or change the screen backlight brightness through sysfs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_version_flag = true)]
#[command(group(
            ArgGroup::new("action")
                .args(["read", "write", "increment", "decrement", "maximum"]),
        ))]
struct Args {
    /// Read the backlight brightness level. This is the default action.
    #[arg(short, long)]
    read: bool,

    /// Set the backlight brightness level to <val>.
    #[arg(short, long, value_name = "val", value_parser = parse_level)]
    write: Option<u32>,

    /// Increment the backlight brightness level by <val>.
    #[arg(short, long, visible_alias = "increase", value_name = "val", value_parser = parse_level)]
    increment: Option<u32>,

    /// Decrement the backlight brightness level by <val>.
    #[arg(short, long, visible_alias = "decrease", value_name = "val", value_parser = parse_level)]
    decrement: Option<u32>,

    /// Show the maximum brightness level on the kernel's scale. -p is ignored.
    #[arg(short, long)]
    maximum: bool,

    /// Read or write the brightness level as a percentage (0 to 100)
    /// instead of the kernel's internal scale (such as 0 to 7812).
    #[arg(short, long)]
    percentage: bool,

    /// Path to the backlight control directory.
    #[arg(short = 'f', long = "file", value_name = "path")]
    file: Option<PathBuf>,

    /// Regular expression picking a device from /sys/class/backlight.
    #[arg(long, value_name = "regex", conflicts_with = "file")]
    device: Option<String>,

    /// Print version.
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    fn operation(&self) -> Operation {
        if let Some(target) = self.write {
            Operation::Write(target)
        } else if let Some(delta) = self.increment {
            Operation::Increment(delta)
        } else if let Some(delta) = self.decrement {
            Operation::Decrement(delta)
        } else if self.maximum {
            Operation::ReadMax
        } else {
            Operation::Read
        }
    }
}

/// Accept plain decimal digits only, so signs and blanks are rejected.
fn parse_level(arg: &str) -> Result<u32, String> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{arg:?} is not a non-negative integer"));
    }
    arg.parse()
        .map_err(|_| format!("{arg} is larger than {}", u32::MAX))
}

fn render(report: &Report) -> String {
    match report {
        Report::Current { value, unit } => {
            format!("Current backlight brightness is: {value}{unit}.")
        }
        Report::Maximum { value } => format!("Maximum backlight brightness is: {value}."),
        Report::Changed { old, new, unit } => {
            format!("Changed backlight brightness: {old}{unit} => {new}{unit}.")
        }
    }
}

fn run(args: &Args) -> Result<Report, BrightlightError> {
    let mut builder = ConfigBuilder::new()
        .with_operation(args.operation())
        .with_percentage(args.percentage);
    if let Some(file) = &args.file {
        builder = builder.with_control_dir(file.clone());
    }
    if let Some(device) = &args.device {
        builder = builder.with_device_regex(device);
    }
    execute(&builder.build()?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    log::debug!("{args:?}");

    match run(&args) {
        Ok(report) => {
            println!("{}", render(&report));
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == ErrorKind::InvalidArgument => {
            eprintln!("Error: {e}. Pass the -h flag for help.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}.");
            ExitCode::FAILURE
        }
    }
}
