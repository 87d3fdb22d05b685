//! Command-line front end
//!
//! Builds a Configuration from an optional JSON snapshot plus flags, resolves
//! it, and prints the report. Flags given on the command line win over the
//! snapshot. The on/off options take an optional value, so `--return-delay`
//! turns the option on and `--return-delay false` turns it off.

use std::path::PathBuf;

use clap::Parser;

use crate::adapters::{JsonRenderer, TextRenderer};
use crate::commands::{load_configuration, resolve_switches};
use crate::domain::{
    Configuration, DataBits, JumperMode, OperationMode, Parity, SscError, SscResult, StopBits,
};
use crate::ports::ReportRenderer;
use crate::switches::{BAUD_RATES, WIDTH_TABLE};

/// Apple II Super Serial Card DIP switch calculator
#[derive(Parser, Debug)]
#[command(name = "superserial")]
#[command(version)]
#[command(about = "Works out SW1/SW2 DIP switch settings for the Apple II Super Serial Card")]
pub struct Args {
    /// JSON configuration snapshot to start from
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Operation mode: modem or printer
    #[arg(short, long)]
    pub mode: Option<OperationMode>,

    /// Jumper block orientation: modem (arrow up) or printer (arrow down)
    #[arg(short, long)]
    pub jumper: Option<JumperMode>,

    /// Baud rate (50 to 19200)
    #[arg(short, long, value_parser = parse_baud)]
    pub baud: Option<String>,

    /// Data bits, modem mode only: 7 or 8
    #[arg(long)]
    pub data_bits: Option<DataBits>,

    /// Parity, modem mode only: none, odd or even
    #[arg(long)]
    pub parity: Option<Parity>,

    /// Stop bits, modem mode only: 1 or 2
    #[arg(long)]
    pub stop_bits: Option<StopBits>,

    /// Line width in columns, printer mode only: 40, 72, 80 or 132
    #[arg(short, long, value_parser = parse_width)]
    pub width: Option<String>,

    /// Send a line feed after every carriage return
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub auto_line_feed: Option<bool>,

    /// Enable interrupts (recommended for 1200 baud and up)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub interrupts: Option<bool>,

    /// Shorthand for `--interrupts false`
    #[arg(long, conflicts_with = "interrupts")]
    pub no_interrupts: bool,

    /// Pause 32ms after RETURN, printer mode only
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub return_delay: Option<bool>,

    /// List the fields that apply to the selected mode and exit (JSON with --json)
    #[arg(long)]
    pub fields: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_baud(s: &str) -> Result<String, String> {
    if BAUD_RATES.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!("expected one of {}", BAUD_RATES.join(", ")))
    }
}

fn parse_width(s: &str) -> Result<String, String> {
    if WIDTH_TABLE.iter().any(|(width, _)| *width == s) {
        Ok(s.to_string())
    } else {
        let legal: Vec<&str> = WIDTH_TABLE.iter().map(|(width, _)| *width).collect();
        Err(format!("expected one of {}", legal.join(", ")))
    }
}

impl Args {
    /// Merge the snapshot (or defaults) with whatever was given on the command line.
    pub fn configuration(&self) -> SscResult<Configuration> {
        let mut config = match &self.config {
            Some(path) => load_configuration(path)?,
            None => Configuration::default(),
        };

        if let Some(mode) = self.mode {
            config.operation_mode = mode;
        }
        if let Some(jumper) = self.jumper {
            config.jumper_mode = jumper;
        }
        if let Some(baud) = &self.baud {
            config.baud_rate = baud.clone();
        }
        if let Some(data_bits) = self.data_bits {
            config.data_bits = data_bits;
        }
        if let Some(parity) = self.parity {
            config.parity = parity;
        }
        if let Some(stop_bits) = self.stop_bits {
            config.stop_bits = stop_bits;
        }
        if let Some(width) = &self.width {
            config.line_width = width.clone();
        }
        if let Some(auto_line_feed) = self.auto_line_feed {
            config.auto_line_feed = auto_line_feed;
        }
        if let Some(interrupts) = self.interrupts {
            config.enable_interrupts = interrupts;
        }
        if self.no_interrupts {
            config.enable_interrupts = false;
        }
        if let Some(return_delay) = self.return_delay {
            config.return_delay = return_delay;
        }
        Ok(config)
    }
}

/// Produce the text the CLI prints for these arguments.
pub fn execute(args: &Args) -> SscResult<String> {
    let config = args.configuration()?;

    if args.fields && args.json {
        return serde_json::to_string_pretty(config.relevant_fields())
            .map_err(|e| SscError::Render(format!("Serialization error: {e}")));
    }
    if args.fields {
        let mut out = format!("Fields for {} mode:\n", config.operation_mode);
        for field in config.relevant_fields() {
            out.push_str(&format!("  {}\n", field.label()));
        }
        return Ok(out);
    }

    let report = resolve_switches(&config);
    let renderer: Box<dyn ReportRenderer> = if args.json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TextRenderer)
    };
    renderer.render(&report)
}
