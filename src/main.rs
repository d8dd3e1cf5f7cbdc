use clap::{Parser as ClapParser, Subcommand};
use eo_runtime::docs::{self, terminal};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "eo-runtime")]
#[command(about = "Native builtins of the EO runtime")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise the log level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// [ DOCS ] View documentation for the builtins
    Docs {
        /// The builtin to view documentation for (e.g. array, string)
        topic: Option<String>,
        /// Print the documentation as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let directive = match verbose {
        0 => "eo_runtime=warn",
        1 => "eo_runtime=debug",
        _ => "eo_runtime=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Docs { topic, json } => run_docs(topic.as_deref(), json),
    }
}

fn run_docs(topic: Option<&str>, json: bool) {
    let Some(topic) = topic else {
        let catalog = docs::catalog();
        if json {
            print_json(&catalog);
        } else {
            print!("{}", terminal::render_topics(&catalog));
        }
        return;
    };

    match docs::lookup(topic) {
        Some(doc) if json => print_json(&doc),
        Some(doc) => print!("{}", terminal::render_builtin(&doc)),
        None => {
            eprintln!(
                "{}: No documentation found for '{}'",
                "Error".bright_red().bold(),
                topic
            );
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{}: {}", "Error".bright_red().bold(), e);
            std::process::exit(1);
        }
    }
}
