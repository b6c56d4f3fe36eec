use anyhow::Result;
use clap::Parser;
use placeholder_icons::{
    icon_gen::{parse_color, DEFAULT_COLOR, DEFAULT_OUTPUT_DIR},
    verify::verify_icons,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "verify-icons",
    about = "Check a generated placeholder icon set"
)]
struct Args {
    /// Directory holding the generated icons.
    #[clap(value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    dir: PathBuf,

    /// Expected fill color (CSS color format). Defaults to #3B82F6.
    #[clap(long, value_name = "COLOR")]
    color: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let expected = match &args.color {
        Some(color) => parse_color(color)?,
        None => DEFAULT_COLOR,
    };

    println!("Checking icons in: {}", args.dir.display());

    for report in verify_icons(&args.dir, expected)? {
        println!(
            "✓ {} is {}x{}, RGBA: {:?}",
            report.filename, report.width, report.height, report.color.0
        );
    }

    Ok(())
}
