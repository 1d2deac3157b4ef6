use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use utilisation::cli::{handle_export_command, handle_show_command, ExportArgs, ShowArgs};
use utilisation::config::{Settings, UtilisationPaths};

#[derive(Parser)]
#[command(
    name = "utilisation",
    version,
    about = "Workforce utilisation and earnings table",
    long_about = "Builds a per-person table of utilisation rates and last month's \
                  estimated net earnings from a roster of employees and external \
                  contractors. Team aggregates are left out."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the utilisation table
    #[command(alias = "table")]
    Show(ShowArgs),

    /// Export the utilisation table as CSV, JSON or YAML
    Export(ExportArgs),

    /// Write default settings and create the data directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utilisation::logging::init(cli.verbose);

    let paths = UtilisationPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Show(args)) => {
            handle_show_command(&paths, &settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&paths, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Place the roster at {} or pass a dataset path to 'utilisation show'.",
                paths.dataset_file().display()
            );
        }
        Some(Commands::Config) => {
            println!("Utilisation Table Configuration");
            println!("===============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!(
                "  Dataset:        {}",
                settings.resolve_dataset(None, &paths).display()
            );
            println!("  Export format:  {}", settings.default_export_format);
            println!("  Pretty JSON:    {}", settings.pretty_json);
            println!("  Max name width: {}", settings.max_name_width);
        }
        None => {
            println!("Utilisation - workforce utilisation and earnings table");
            println!();
            println!("Run 'utilisation --help' for usage information.");
            println!("Run 'utilisation show <dataset>' to display the table.");
        }
    }

    Ok(())
}
