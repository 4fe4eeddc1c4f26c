//! wt2syx - wavetable SysEx dump converter
//!
//! Run with: cargo run -- -i table.wav -o table.mid -n "My Table" -s 80

mod cli;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::util::SubscriberInitExt;

use blofeld_wt::{Config, Job};
use cli::Cli;

fn setup_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging(cli.log_level());

    // Whole configuration is checked before the input file is opened
    let config = Config::builder()
        .slot(cli.slot)
        .name(cli.name.as_str())
        .half_rate(cli.half_rate)
        .build()
        .wrap_err("invalid configuration")?;

    let mut job = Job::new(&cli.infile, &cli.outfile, config);
    if let Some(format) = cli.format {
        job = job.with_format(format.into());
    }

    let summary = blofeld_wt::run(&job).wrap_err_with(|| {
        format!(
            "failed to convert {} to {}",
            cli.infile.display(),
            cli.outfile.display()
        )
    })?;

    println!(
        "Wrote {} frames ({} bytes) to {}",
        summary.frames,
        summary.bytes_written,
        cli.outfile.display()
    );

    Ok(())
}
