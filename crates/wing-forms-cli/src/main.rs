//! wing-forms CLI
//!
//! Command-line tool for rendering tag-based form definitions and deriving
//! their validation schemas.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use wing_forms::{
    FieldRenderer, FieldTypeRegistry, FormDefinition, Html5Support, MessageCatalog,
    ValidationErrorStore,
};

/// Tag-based form rendering and validation schema derivation.
#[derive(Parser)]
#[command(name = "wing-forms")]
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
    /// Render a form definition to HTML.
    Render {
        /// Form definition file.
        form: PathBuf,

        /// Validation error store (JSON) from a failed submission.
        #[arg(short, long)]
        errors: Option<PathBuf>,

        /// Previously submitted values (JSON object of name to value).
        #[arg(long)]
        hangover: Option<PathBuf>,

        /// Form instance identifier, used when the error store has none.
        #[arg(long, env = "WING_FORMS_UNIT_TAG", default_value = "wfp-f1-o1")]
        unit_tag: String,

        /// Render every input as `type="text"`.
        #[arg(long, env = "WING_FORMS_NO_HTML5")]
        no_html5: bool,
    },

    /// Print the validation schema of a form definition as JSON.
    Schema {
        /// Form definition file.
        form: PathBuf,

        /// Message overrides (JSON object of message id to text).
        #[arg(short, long)]
        messages: Option<PathBuf>,

        /// Pretty-print the JSON.
        #[arg(short, long)]
        pretty: bool,
    },

    /// Report authoring problems in a form definition.
    Check {
        /// Form definition file.
        form: PathBuf,
    },
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_form(path: &Path) -> anyhow::Result<FormDefinition> {
    let source = read(path)?;
    let form = FormDefinition::parse(&source, &FieldTypeRegistry::text_types())
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let count = form.fields().count();
    debug!("Parsed {count} field(s) from {}", path.display());
    Ok(form)
}

fn load_errors(path: Option<&Path>, unit_tag: &str) -> anyhow::Result<ValidationErrorStore> {
    let mut store = match path {
        Some(path) => ValidationErrorStore::from_json(&read(path)?)
            .with_context(|| format!("invalid error store in {}", path.display()))?,
        None => ValidationErrorStore::default(),
    };
    if store.unit_tag().is_empty() {
        store.set_unit_tag(unit_tag);
    }
    Ok(store)
}

fn load_hangover(path: Option<&Path>) -> anyhow::Result<HashMap<String, String>> {
    let Some(path) = path else {
        return Ok(HashMap::new());
    };
    serde_json::from_str(&read(path)?)
        .with_context(|| format!("invalid hangover values in {}", path.display()))
}

fn load_messages(path: Option<&Path>) -> anyhow::Result<MessageCatalog> {
    let Some(path) = path else {
        return Ok(MessageCatalog::new());
    };
    MessageCatalog::from_json(&read(path)?)
        .with_context(|| format!("invalid messages in {}", path.display()))
}

fn render(
    form: &Path,
    errors: Option<&Path>,
    hangover: Option<&Path>,
    unit_tag: &str,
    no_html5: bool,
) -> anyhow::Result<String> {
    let form = load_form(form)?;
    let errors = load_errors(errors, unit_tag)?;
    let hangover = load_hangover(hangover)?;
    let probe = Html5Support(!no_html5);

    let renderer = FieldRenderer::new(&errors, &hangover, &probe);
    Ok(form.render(&renderer))
}

fn schema(form: &Path, messages: Option<&Path>, pretty: bool) -> anyhow::Result<String> {
    let form = load_form(form)?;
    let catalog = load_messages(messages)?;
    let schema = form.validation_schema(&catalog);
    debug!("Derived {} rule(s)", schema.len());

    let json = if pretty {
        schema.to_json_pretty()?
    } else {
        schema.to_json()?
    };
    Ok(json)
}

fn check(form: &Path) -> anyhow::Result<bool> {
    let definition = load_form(form)?;
    let warnings = definition.authoring_warnings();
    if warnings.is_empty() {
        info!("No problems found in {}", form.display());
        return Ok(true);
    }
    for warning in &warnings {
        warn!("{}: {warning}", form.display());
    }
    Ok(false)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            form,
            errors,
            hangover,
            unit_tag,
            no_html5,
        } => {
            let html = render(
                &form,
                errors.as_deref(),
                hangover.as_deref(),
                &unit_tag,
                no_html5,
            )?;
            println!("{html}");
        }

        Commands::Schema {
            form,
            messages,
            pretty,
        } => {
            println!("{}", schema(&form, messages.as_deref(), pretty)?);
        }

        Commands::Check { form } => {
            if !check(&form)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
