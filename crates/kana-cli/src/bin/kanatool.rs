use clap::{Parser, Subcommand, ValueEnum};

use kana_cli::commands::{config_ops, replay_ops};
use kana_session::Engine;

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana reconstruction diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum EngineArg {
    Continuous,
    PhraseAware,
    Keystroke,
    Null,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Continuous => Engine::Continuous,
            EngineArg::PhraseAware => Engine::PhraseAware,
            EngineArg::Keystroke => Engine::Keystroke,
            EngineArg::Null => Engine::Null,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSONL event trace and print the emitted notifications
    Replay {
        /// Path to the trace file (one event per line)
        trace_file: String,
        /// Strategy to run (default: continuous)
        #[arg(long, value_enum, conflicts_with = "user_agent")]
        engine: Option<EngineArg>,
        /// Pick the strategy from a browser user-agent string
        #[arg(long)]
        user_agent: Option<String>,
        /// Path to a settings TOML file (optional)
        #[arg(long)]
        settings: Option<String>,
        /// Output one JSON record per event
        #[arg(long)]
        json: bool,
        /// Show every event with the snapshot history
        #[arg(long)]
        verbose: bool,
    },

    /// Resolve a snapshot sequence the way a finalize would
    Resolve {
        /// Snapshots in recording order
        #[arg(required = true)]
        snapshots: Vec<String>,
    },

    /// Print the trailing kana run of a text
    Extract {
        text: String,
        /// Path to a settings TOML file (optional)
        #[arg(long)]
        settings: Option<String>,
    },

    /// Print the default settings TOML
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            trace_file,
            engine,
            user_agent,
            settings,
            json,
            verbose,
        } => replay_ops::replay_cmd(
            &trace_file,
            engine.map(Engine::from),
            user_agent.as_deref(),
            settings.as_deref(),
            json,
            verbose,
        ),
        Command::Resolve { snapshots } => replay_ops::resolve_cmd(&snapshots),
        Command::Extract { text, settings } => {
            replay_ops::extract_cmd(&text, settings.as_deref())
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
