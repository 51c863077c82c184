mod cli;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cli::{CliArgs, CliCommand};
use folio::commands::Cmd;
use folio::export::{self, ChromiumEngine};
use folio::messages::{DocumentMsg, ExportMsg, Msg};
use folio::model::DocumentTree;
use folio::template::TemplateId;
use folio::update::update;
use folio::{EditorConfig, EditorSession};

fn main() -> Result<()> {
    folio::tracing::init();

    let args = CliArgs::parse();
    match args.command {
        CliCommand::New { template, output } => cmd_new(&template, &output),
        CliCommand::Export {
            input,
            title,
            out_dir,
        } => cmd_export(&input, &title, &out_dir),
        CliCommand::Templates => {
            for t in TemplateId::all() {
                println!("{}", t.id());
            }
            Ok(())
        }
    }
}

/// Assemble a template into a fresh session and write the document file
fn cmd_new(template: &str, output: &Path) -> Result<()> {
    if TemplateId::parse(template).is_none() {
        let names: Vec<&str> = TemplateId::all().iter().map(|t| t.id()).collect();
        bail!(
            "unknown template '{}' (available: {})",
            template,
            names.join(", ")
        );
    }

    let mut session = EditorSession::new(EditorConfig::load());
    update(
        &mut session,
        Msg::Document(DocumentMsg::ApplyTemplate(template.to_string())),
    );

    std::fs::write(output, session.document.serialized_state())
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Load a document file into a session and drive the export message flow
fn cmd_export(input: &Path, title: &str, out_dir: &Path) -> Result<()> {
    let state = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let tree = DocumentTree::from_serialized(&state)
        .with_context(|| format!("parsing {}", input.display()))?;

    let mut session = EditorSession::new(EditorConfig::load());
    session.document = tree;
    session.title = title.to_string();
    session.snapshot();

    let cmd = update(&mut session, Msg::Export(ExportMsg::Requested));
    let Some(Cmd::RenderPdf { job }) = cmd else {
        bail!("export did not start");
    };

    let result = export::run_export(&ChromiumEngine, &job, out_dir);
    update(
        &mut session,
        Msg::Export(ExportMsg::Completed(result.clone())),
    );

    if let Some(status) = &session.status {
        println!("{}", status);
    }
    match result {
        Ok(_) => Ok(()),
        Err(e) => bail!(e),
    }
}
