//! oxide-fields CLI
//!
//! Renders forms from JSON definitions and validates submissions against
//! them, printing the markup a request handler would send back.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_fields::widgets::html_escape;
use oxide_fields::{Form, FormData, FormDefinition};

/// Render and validate HTML forms.
#[derive(Parser)]
#[command(name = "oxide-fields")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the empty form.
    Render {
        /// JSON form definition.
        definition: PathBuf,

        /// Form action URL.
        #[arg(long, default_value = "")]
        action: String,
    },

    /// Validate a submission and print the resulting page.
    Validate {
        /// JSON form definition.
        definition: PathBuf,

        /// Urlencoded submission, e.g. "email=a%40b.com&gender=Male".
        #[arg(short, long, env = "FORM_DATA", default_value = "")]
        data: String,

        /// Form action URL.
        #[arg(long, default_value = "")]
        action: String,
    },
}

fn load_form(path: &Path) -> anyhow::Result<Form> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let form = FormDefinition::from_json(&json)?.build()?;
    info!(fields = form.len(), "loaded form from {}", path.display());
    Ok(form)
}

fn wrap(form: &Form, action: &str) -> String {
    format!(
        r#"<form action="{}" method="post">{}</form>"#,
        html_escape(action),
        form.render()
    )
}

fn submitted_values(data: &FormData) -> String {
    let mut entries: Vec<_> = data.iter().collect();
    entries.sort_by_key(|(name, _)| *name);

    let mut out = String::from("<dl>");
    for (name, values) in entries {
        out.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>",
            html_escape(name),
            html_escape(&values.join(", "))
        ));
    }
    out.push_str("</dl>");
    out
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { definition, action } => {
            let form = load_form(&definition)?;
            println!("{}", wrap(&form, &action));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate {
            definition,
            data,
            action,
        } => {
            let mut form = load_form(&definition)?;
            let data = FormData::from_urlencoded(&data);

            if form.validate(&data) {
                info!("submission is valid");
                println!("{}", submitted_values(&data));
                return Ok(ExitCode::SUCCESS);
            }

            for (field, error) in form.errors().all_errors() {
                warn!("{field}: {error}");
            }
            println!("{}", wrap(&form, &action));
            Ok(ExitCode::FAILURE)
        }
    }
}
