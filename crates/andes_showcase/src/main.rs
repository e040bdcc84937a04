//! Andes Showcase
//!
//! Inspect the configurations Andes components resolve to.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use andes_ui::attrs::AttrValue;
use andes_ui::{ButtonHierarchy, ButtonSize, IconOrientation, MessageHierarchy, MessageType};

mod commands;
mod theme;

#[derive(Parser)]
#[command(name = "andes-showcase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Andes component showcase", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Theme file overriding the default Andes tokens
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a button configuration as JSON
    Button {
        /// Hierarchy (loud, quiet, transparent or 100-102)
        #[arg(long, default_value = "loud", value_parser = selector::<ButtonHierarchy>)]
        hierarchy: ButtonHierarchy,

        /// Size (large, medium, small or 200-202)
        #[arg(long, default_value = "large", value_parser = selector::<ButtonSize>)]
        size: ButtonSize,

        /// Icon resource name
        #[arg(long)]
        icon: Option<String>,

        /// Side of the text the icon sits on
        #[arg(long, default_value = "left", value_parser = orientation)]
        icon_side: IconOrientation,

        /// Button text
        #[arg(long)]
        text: Option<String>,

        /// Build the button disabled
        #[arg(long)]
        disabled: bool,
    },

    /// Print a message configuration as JSON
    Message {
        /// Hierarchy (loud, quiet or 1000-1001)
        #[arg(long, default_value = "loud", value_parser = selector::<MessageHierarchy>)]
        hierarchy: MessageHierarchy,

        /// Type (neutral, success, warning, error or 2000-2003)
        #[arg(long = "type", default_value = "neutral", value_parser = selector::<MessageType>)]
        message_type: MessageType,

        /// Body text
        #[arg(long)]
        body: String,

        /// Title text
        #[arg(long)]
        title: Option<String>,

        /// Show the dismiss button
        #[arg(long)]
        dismissable: bool,
    },

    /// Inflate a layout file and print its view snapshots
    Inflate {
        /// Layout markup file
        layout: PathBuf,
    },

    /// Print the button size x hierarchy matrix
    Matrix,

    /// Print the resolved theme as TOML
    Theme,
}

fn selector<T: AttrValue>(raw: &str) -> Result<T, String> {
    T::from_attr(raw).ok_or_else(|| format!("unknown value '{raw}'"))
}

fn orientation(raw: &str) -> Result<IconOrientation, String> {
    match raw.to_ascii_lowercase().as_str() {
        "left" => Ok(IconOrientation::Left),
        "right" => Ok(IconOrientation::Right),
        _ => Err(format!("unknown icon side '{raw}', expected left or right")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let theme = theme::load(cli.theme.as_deref())?;

    let output = match cli.command {
        Commands::Button {
            hierarchy,
            size,
            icon,
            icon_side,
            text,
            disabled,
        } => commands::button(
            &theme,
            commands::ButtonArgs {
                hierarchy,
                size,
                icon,
                icon_side,
                text,
                enabled: !disabled,
            },
        )?,

        Commands::Message {
            hierarchy,
            message_type,
            body,
            title,
            dismissable,
        } => commands::message(
            &theme,
            commands::MessageArgs {
                hierarchy,
                message_type,
                body,
                title,
                dismissable,
            },
        )?,

        Commands::Inflate { layout } => commands::inflate(&theme, &layout)?,

        Commands::Matrix => commands::matrix(&theme),

        Commands::Theme => commands::theme(&theme)?,
    };

    println!("{output}");
    Ok(())
}
