use std::{env, path::PathBuf, process};

use book_fees_lib::fees_report;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_fees_lib=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    init_logger();

    match (env::args_os().nth(1), env::args_os().nth(2)) {
        (Some(infile), Some(outfile)) => {
            let infile = PathBuf::from(infile);
            let outfile = PathBuf::from(outfile);
            match fees_report(&infile, &outfile) {
                Ok(()) => {
                    println!("late fees report written to {}", outfile.display());
                    process::exit(0);
                }
                Err(e) => {
                    // error occurred
                    eprintln!("an error occurred: {}", e);
                    process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Usage: book_fees_bin <returns csv> <report csv>");
            process::exit(1);
        }
    }
}
