//! CLI entry point for schemer.

mod cli;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use schemer::document::SchemeDocument;
use schemer::error::SchemeError;
use schemer::scheme::ColorField;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    if let Err(err) = run(args.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: cli::Command) -> Result<(), SchemeError> {
    match command {
        cli::Command::Inspect { file } => {
            let doc = SchemeDocument::open(&file)?;
            print_document(&doc);
            Ok(())
        }
        cli::Command::Normalize { file, out } => {
            let mut doc = SchemeDocument::open(&file)?;
            match out {
                Some(out) => doc.save_to(out),
                None => doc.save(),
            }
        }
        cli::Command::New { name, out } => {
            let mut doc = SchemeDocument::untitled(name);
            doc.save_to(out)
        }
    }
}

fn print_document(doc: &SchemeDocument) {
    println!("{} ({})", doc.name(), doc.scheme.uuid());
    println!();

    for field in ColorField::ALL {
        let color = field.get(&doc.scheme);
        let hex = if color.is_visible() {
            color.to_hex()
        } else {
            "unset".to_owned()
        };
        println!("  {:26} {hex}", field.label());
    }

    if doc.scheme.rules.is_empty() {
        return;
    }

    println!();
    println!("  rules:");
    for (index, rule) in doc.scheme.rules.iter().enumerate() {
        let mut line = format!("  {index:3}  {}", rule.name);
        if !rule.selectors.is_empty() {
            line.push_str(&format!("  [{}]", rule.selectors.join(", ")));
        }
        if !rule.flags().is_empty() {
            line.push_str(&format!("  ({})", rule.font_style()));
        }
        if rule.foreground.is_visible() {
            line.push_str(&format!("  fg {}", rule.foreground.to_hex()));
        }
        if rule.background.is_visible() {
            line.push_str(&format!("  bg {}", rule.background.to_hex()));
        }
        println!("{line}");
    }
}
