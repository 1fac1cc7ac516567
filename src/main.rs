mod capture_time;
mod counter;
mod error;
mod process;
mod template;
mod walk;

#[cfg(test)]
mod test_helpers;

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, error, info};
use process::{CopyProcessor, PreviewProcessor};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use template::OutputTemplate;

/// Number of files a dry run looks at.
const DRY_RUN_LIMIT: usize = 10;

#[derive(Parser)]
#[command(author, version, about = "Copy photos into folders named after their EXIF capture time", long_about = None)]
struct Args {
    /// Source directory
    #[arg(long = "in", default_value = ".")]
    input: PathBuf,
    /// Output format (use strftime symbols %Y, %y, %m, %d, %H, %M, %S)
    #[arg(long = "out", default_value = "dist/%Y/%m/%d-%H%M%S")]
    output: String,
    /// Dry run
    #[arg(long = "dryrun")]
    dry_run: bool,
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn copy_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} copied {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Runs the mode chosen by `args`. Dry-run output goes to `out`.
fn run(args: &Args, out: &mut dyn Write) -> error::Result<()> {
    let template = OutputTemplate::parse(&args.output);
    info!("Sorting {} into {}", args.input.display(), args.output);

    if args.dry_run {
        writeln!(out, "Dry run. Examples of moved files:").map_err(error::Error::Output)?;
        let mut preview = PreviewProcessor::new(out);
        let n = walk::process_dir(&args.input, &template, Some(DRY_RUN_LIMIT), &mut preview)?;
        info!("Previewed {} entries", n);
    } else {
        let mut copy = CopyProcessor::new(copy_spinner());
        let result = walk::process_dir(&args.input, &template, None, &mut copy);
        copy.finish();
        let n = result?;
        info!("Visited {} files, copied {}", n, copy.copied());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
