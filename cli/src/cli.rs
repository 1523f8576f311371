use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[clap(name = "dawnctl", about, version)]
pub struct Cli {
    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LevelFilter,

    #[clap(flatten)]
    pub usb: UsbOptions,

    #[clap(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug)]
pub struct UsbOptions {
    /// Log level passed through to libusb
    #[clap(long, value_enum, default_value = "none", global = true)]
    pub usb_log_level: UsbLogLevel,

    /// Control transfer timeout in milliseconds, 0 waits forever
    #[clap(long, default_value = "0", global = true)]
    pub timeout: u64,

    /// Exit with an error when any USB transfer fails, rather than carrying on
    #[clap(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    /// Read the current state of the DAC
    Get {
        #[clap(subcommand)]
        target: GetCommands,
    },

    /// Change a setting on the DAC
    Set {
        #[clap(subcommand)]
        target: SetCommands,
    },

    /// Show USB details of the connected DAC
    Info,

    /// Print shell completions to stdout
    Completions {
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum GetCommands {
    /// Volume, filter, gain and indicator
    Status {
        /// Print the status as JSON
        #[clap(long)]
        json: bool,
    },

    /// Volume level (0-60)
    Volume,

    /// Active digital filter
    Filter,

    /// Output gain (Low / High)
    Gain,

    /// Indicator light state
    Indicator,
}

#[derive(Subcommand, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SetCommands {
    /// Set the volume level (0-60)
    Volume { level: u8 },

    /// Set the filter by index (0-4)
    Filter { index: u8 },

    /// Set the gain (0 for Low, anything else for High)
    Gain { value: u8 },

    /// Set the indicator (0 on, 1 temporarily off, 2 off)
    Indicator { value: u8 },
}

#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

impl From<LevelFilter> for log::LevelFilter {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum UsbLogLevel {
    None,
    Error,
    Warning,
    Info,
    Debug,
}

impl From<UsbLogLevel> for dawn_usb::rusb::LogLevel {
    fn from(level: UsbLogLevel) -> Self {
        use dawn_usb::rusb::LogLevel;
        match level {
            UsbLogLevel::None => LogLevel::None,
            UsbLogLevel::Error => LogLevel::Error,
            UsbLogLevel::Warning => LogLevel::Warning,
            UsbLogLevel::Info => LogLevel::Info,
            UsbLogLevel::Debug => LogLevel::Debug,
        }
    }
}
