use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use colored::Colorize;
use jira_gateway_core::adf;
use serde_json::Value;

use crate::prelude::*;
use crate::prelude::{eprintln, println};

#[derive(Debug, clap::Parser)]
#[command(name = "adf")]
#[command(about = "Build and check Atlassian Document Format payloads offline")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert plain text (blank lines split paragraphs) to ADF
    #[clap(name = "text")]
    Text(InputOptions),

    /// Convert a Markdown subset to ADF
    #[clap(name = "markdown")]
    Markdown(InputOptions),

    /// Build a bullet or ordered list
    #[clap(name = "list")]
    List(ListOptions),

    /// Build a single code block
    #[clap(name = "code")]
    Code(CodeOptions),

    /// Build a paragraph holding one link
    #[clap(name = "link")]
    Link(LinkOptions),

    /// Build a heading followed by a body paragraph
    #[clap(name = "heading")]
    Heading(HeadingOptions),

    /// Check a JSON document for ADF structure
    #[clap(name = "validate")]
    Validate(ValidateOptions),

    /// Render an ADF document back to text
    #[clap(name = "render")]
    Render(ValidateOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct InputOptions {
    /// Input text. Read from stdin when omitted
    text: Option<String>,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// List items, one per argument
    #[arg(required = true)]
    items: Vec<String>,

    /// Number the items instead of bulleting them
    #[arg(long)]
    ordered: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct CodeOptions {
    /// Source code. Read from stdin when omitted
    code: Option<String>,

    /// Language used for syntax highlighting
    #[arg(short, long)]
    language: Option<String>,
}

#[derive(Debug, clap::Args, Clone)]
pub struct LinkOptions {
    /// Visible link text
    text: String,

    /// Target URL
    url: String,
}

#[derive(Debug, clap::Args, Clone)]
pub struct HeadingOptions {
    /// Heading text
    heading: String,

    /// Body text placed under the heading
    #[arg(default_value = "")]
    body: String,

    /// Heading level (1-6)
    #[arg(short, long, default_value = "1")]
    level: u8,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ValidateOptions {
    /// JSON file. Read from stdin when omitted
    file: Option<PathBuf>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let document = match app.command {
        Commands::Text(options) => {
            let input = read_input(options.text)?;
            adf::text_to_document(Some(input.as_str()))
        }
        Commands::Markdown(options) => adf::markdown_to_document(&read_input(options.text)?),
        Commands::List(options) if options.ordered => adf::ordered_list_to_document(&options.items),
        Commands::List(options) => adf::bullet_list_to_document(&options.items),
        Commands::Code(options) => {
            let code = read_input(options.code)?;
            adf::code_block_to_document(&code, options.language.as_deref())
        }
        Commands::Link(options) => adf::link_to_document(&options.text, &options.url),
        Commands::Heading(options) => {
            adf::heading_to_document(&options.heading, options.level, &options.body)
        }
        Commands::Validate(options) => return validate(options, global),
        Commands::Render(options) => return render(options),
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn validate(options: ValidateOptions, global: crate::Global) -> Result<()> {
    let value = read_json(options.file)?;

    if adf::validate(&value) {
        println!("{}", "valid".green().bold());
        Ok(())
    } else {
        if global.verbose {
            eprintln!(
                "Expected an object with type \"doc\", version 1 and an array of {} blocks",
                adf::BLOCK_TYPES.join("/")
            );
        }
        println!("{}", "invalid".red().bold());
        Err(eyre!("Document is not valid ADF"))
    }
}

fn render(options: ValidateOptions) -> Result<()> {
    let value = read_json(options.file)?;

    match adf::render_adf(&value) {
        Some(text) => println!("{text}"),
        None => eprintln!("{}", "Document has no text content".yellow()),
    }

    Ok(())
}

fn read_json(file: Option<PathBuf>) -> Result<Value> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };

    serde_json::from_str(&raw).wrap_err("Input is not valid JSON")
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(eyre!("No input given and stdin is a terminal"));
    }

    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .wrap_err("Failed to read stdin")?;
    Ok(buffer)
}
