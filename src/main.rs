//! Label generator CLI for the PINOT project.
//!
//! Reads a list of device identifiers (one per row), renders a label
//! for each and tiles the labels onto TownStix US-10 sheets, two
//! devices per sticker.

use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use pinot_labels::{
    compose, parse_device_ids, save, Error, LabelRenderer, Layout, Resources, LABELS_PER_SHEET,
};

#[derive(Parser)]
#[command(name = "pinot-labels")]
#[command(about = "Label generator for the PINOT project")]
struct Cli {
    /// Input file with a device identifier on each row
    #[arg(short, long)]
    input: PathBuf,

    /// Output folder for the finished sheets
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Sheet template image (use an empty template when printing on
    /// real US-10 paper, the ruled one to preview registration)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Label font (TrueType)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Icon bitmap
    #[arg(long)]
    icon: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut layout = Layout::default();
    if let Some(template) = cli.template {
        layout.template_path = template;
    }
    if let Some(font) = cli.font {
        layout.font_path = font;
    }
    if let Some(icon) = cli.icon {
        layout.icon_path = icon;
    }

    let list = fs::read_to_string(&cli.input).map_err(|source| Error::InputUnreadable {
        path: cli.input.clone(),
        source,
    })?;
    let device_ids = parse_device_ids(&list);
    info!(
        "{} device(s), {} sheet(s)",
        device_ids.len(),
        (device_ids.len() + LABELS_PER_SHEET - 1) / LABELS_PER_SHEET
    );

    let resources = Resources::load(&layout)?;
    let renderer = LabelRenderer::new(layout.clone(), resources.font, resources.icon);

    let labels = device_ids
        .iter()
        .map(|id| renderer.render(id))
        .collect::<Result<Vec<_>, _>>()?;

    let sheets = compose(&labels, &resources.template, &layout);
    save(&sheets, &cli.output)?;

    Ok(())
}
