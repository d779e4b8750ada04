// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};
use image::Rgb;

use crate::config::{HIGHLIGHT_COLOR, MASK_WEIGHT};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Shade Options:
    --input, -i <DIR>      Dataset root with image/, human_parsing/, pose_json/ [default: dataset]
    --output, -o <DIR>     Directory for shaded_<name> outputs [default: output]
    --batch <N>            Images per parallel batch [default: 8]
    --threads <N>          Worker threads, 0 = all cores [default: 0]
    --weight <W>           Blend weight of the highlight [default: 5]
    --color <R,G,B>        Highlight color [default: 132,134,136]
    --verbose              Show verbose output

Examples:
    lower-body-shade shade
    lower-body-shade shade --input dataset --output output
    lower-body-shade shade -i data/ -o out/ --batch 32 --threads 4
    lower-body-shade shade --weight 0.6 --color 255,0,0"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shade the lower body of every image in a dataset
    Shade(ShadeArgs),
}

/// Arguments for the shade command.
#[derive(Args, Debug)]
pub struct ShadeArgs {
    /// Dataset root with image/, human_parsing/ and pose_json/
    #[arg(short, long, default_value = "dataset")]
    pub input: String,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    pub output: String,

    /// Images per parallel batch
    #[arg(long, default_value_t = 8)]
    pub batch: usize,

    /// Worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Blend weight of the highlight
    #[arg(long, default_value_t = MASK_WEIGHT)]
    pub weight: f32,

    /// Highlight color as R,G,B
    #[arg(long, value_parser = parse_color, default_value = "132,134,136")]
    pub color: Rgb<u8>,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Parse an `R,G,B` triple.
fn parse_color(s: &str) -> Result<Rgb<u8>, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("invalid channel '{c}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match channels.as_slice() {
        &[r, g, b] => Ok(Rgb([r, g, b])),
        _ => Err(format!(
            "expected three comma-separated channels, got {}",
            channels.len()
        )),
    }
}
