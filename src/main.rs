use clap::Parser;
use smiletxt::{
    basic_terminal::{print_inline, print_json, print_stats, print_summary},
    comparison::Comparison,
    config::{self, ColorMode, Config, ConfigOpt, OutputMode},
    input::{literal_inputs, read_inputs},
    validate::{print_errors, validate},
    DynResult,
};
use std::io::{stdout, Write as _};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(version, about = "Word-level diff for mixed CJK and Latin text")]
struct Args {
    /// Original text: a file, `-` for standard input, or the text itself with --literal.
    original: String,
    /// Modified text, given the same way as the original.
    modified: String,
    /// Treat ORIGINAL and MODIFIED as the texts themselves instead of file names.
    #[arg(short, long)]
    literal: bool,
    /// Config file to use instead of the default one.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(flatten)]
    config_opt: ConfigOpt,
}

fn use_colors(config: &Config) -> bool {
    match config.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => atty::is(atty::Stream::Stdout),
    }
}

fn try_main() -> DynResult<()> {
    let args = Args::parse();

    let config = config::load(args.config.as_deref(), args.config_opt).map_err(|e| format!("{e:#}"))?;
    log::debug!("{config:?}");

    let input = if args.literal {
        literal_inputs([args.original.as_str(), args.modified.as_str()])
    } else {
        read_inputs([args.original.as_str(), args.modified.as_str()], &mut std::io::stdin().lock())?
    };

    let start = Instant::now();
    let [original, modified] = input.texts;
    let comparison = Comparison::new(original, modified, config.diff_options());
    log::debug!(
        "compared {} and {} ({} parts) in {:?}",
        input.names[0],
        input.names[1],
        comparison.parts().len(),
        start.elapsed()
    );

    if config.validate {
        print_errors(&validate(
            comparison.diff(),
            [comparison.original(), comparison.modified()],
        ));
    }

    let theme = use_colors(&config).then_some(&config.theme);
    let mut output = stdout().lock();
    match config.mode {
        OutputMode::Debug => writeln!(output, "{:#?}", comparison.diff())?,
        OutputMode::Inline => {
            print_inline(comparison.diff(), theme, &mut output)?;
            if config.summary {
                print_summary(comparison.summary(), comparison.similarity(), theme, &mut output)?;
            }
        }
        OutputMode::Json => print_json(&comparison, &mut output)?,
        OutputMode::Stats => print_stats(&comparison, theme, &mut output)?,
    }

    Ok(())
}

fn main() {
    env_logger::init();

    // If main() itself returns Result, Rust prints the error with Debug, not Display.
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
