mod cli;
mod runner;

use crate::cli::{Cli, SubCommands, UsbOptions};
use crate::runner::{print_info, run_get, run_set};
use anyhow::Result;
use clap::{CommandFactory, Parser};
use dawn_usb::DawnUSB;
use dawn_usb::error::ConnectError;
use dawn_usb::rusb::Context;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::time::Duration;

fn main() {
    let args: Cli = Cli::parse();

    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Could not configure the logger: {}", error);
    }

    // Everything holding the device lives inside run(), so the handle and the libusb context
    // are released before we exit.
    let code = match run(args) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            exit_code(&error)
        }
    };
    std::process::exit(code);
}

fn run(args: Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match args.command {
        SubCommands::Get { target } => {
            let mut dawn = open(&args.usb)?;
            run_get(&mut dawn, target, args.usb.strict, &mut stdout)
        }
        SubCommands::Set { target } => {
            let mut dawn = open(&args.usb)?;
            run_set(&mut dawn, target, args.usb.strict)
        }
        SubCommands::Info => {
            let dawn = open(&args.usb)?;
            print_info(&dawn.get_descriptor()?, &mut stdout)
        }
        SubCommands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut stdout);
            Ok(())
        }
    }
}

fn open(options: &UsbOptions) -> Result<DawnUSB<Context>, ConnectError> {
    DawnUSB::open(
        Duration::from_millis(options.timeout),
        options.usb_log_level.into(),
    )
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ConnectError>() {
        Some(error) => error.exit_code(),
        None => 1,
    }
}
