// textmask/src/main.rs
//! textmask entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use textmask::cli::{Cli, Commands};
use textmask::commands::list::run_list;
use textmask::commands::masking::{run_masking, Operation};
use textmask::logger;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let mut stdout = io::stdout().lock();
    match args.command {
        Commands::Mask(mask_args) => {
            run_masking(Operation::Mask, &mask_args, &mut stdout)?;
        }
        Commands::Unmask(mask_args) => {
            run_masking(Operation::Unmask, &mask_args, &mut stdout)?;
        }
        Commands::Validate(mask_args) => {
            if !run_masking(Operation::Validate, &mask_args, &mut stdout)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::List(list_args) => run_list(&list_args, &mut stdout)?,
    }

    Ok(ExitCode::SUCCESS)
}
