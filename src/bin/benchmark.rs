use clap::Parser;
use smiletxt::algorithm::{
    benchmark::{measure, Testcase},
    DiffOptions,
};

#[derive(Parser)]
struct Args {
    /// Approximate sizes of the generated texts, in bytes.
    #[arg(short, long, num_args = 1.., default_values_t = [1_000, 4_000, 16_000])]
    sizes: Vec<usize>,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Share of tokens changed between the two texts.
    #[arg(short, long, default_value_t = 10)]
    change_percent: u32,

    /// Run each size under every combination of the ignore options.
    #[arg(long)]
    all_options: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let option_sets: Vec<DiffOptions> = if args.all_options {
        DiffOptions::all_combinations().collect()
    } else {
        vec![DiffOptions::default()]
    };

    for &size in &args.sizes {
        let testcase = Testcase::generate(args.seed, size, args.change_percent);
        let [old_tokens, new_tokens] = testcase.token_counts();
        println!("size {size}: {old_tokens} vs {new_tokens} tokens");

        for &options in &option_sets {
            let measurement = measure(&testcase, options);
            println!(
                "  {options:?}: diff {:?}, {} parts; similarity {:?}, {}%",
                measurement.diff_time, measurement.parts, measurement.similarity_time, measurement.similarity
            );
        }
    }
}
