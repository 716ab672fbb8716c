use anyhow::Result;
use numstr::cli::{parse_args, Commands};
use numstr::commands::{self, FormatOptions};

// Main orchestrator function
fn main() -> Result<()> {
    init_logging();
    let cli = parse_args();

    match cli.command {
        command @ Commands::Format { .. } => {
            commands::handle_format(build_format_options(command)?)
        }
        Commands::Filler {
            chars,
            count,
            config,
        } => commands::handle_filler(chars, count, config),
        Commands::Presets { sample } => commands::handle_presets(&sample),
        Commands::ShowConfig { config, json } => commands::handle_show_config(config, json),
        Commands::Init { force } => commands::init_config(force),
    }
}

// Side effect: logger honouring RUST_LOG, warnings by default
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

// Pure function to convert parsed arguments into command options
fn build_format_options(command: Commands) -> Result<FormatOptions> {
    if let Commands::Format {
        value,
        preset,
        currency,
        trailing,
        field_length,
        justify,
        config,
        color,
    } = command
    {
        Ok(FormatOptions {
            value,
            preset,
            currency,
            trailing,
            field_length,
            justify: justify.map(Into::into),
            config,
            color,
        })
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}
