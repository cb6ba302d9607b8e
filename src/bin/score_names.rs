// src/bin/score_names.rs
//
// Prints everything the matcher sees for one pair of names: normalized
// forms, similarity scores, word-overlap threshold, blocking verdict and
// generic flags. Handy when tuning thresholds or alias tables.

use anyhow::Result;
use clap::Parser;
use dedupe_lib::config::MatchConfig;
use dedupe_lib::matching::blocking::detect_conflict;
use dedupe_lib::matching::generic::{is_generic_name, is_suggestion_filtered};
use dedupe_lib::matching::normalize::normalize_name;
use dedupe_lib::matching::similarity::{adjusted_threshold, score_names_with_scale};

#[derive(Parser, Debug)]
#[command(author, version, about = "Show how two place names score against each other", long_about = None)]
struct Args {
    first: String,
    second: String,

    /// Override the name threshold from the environment
    #[arg(long)]
    name_threshold: Option<f64>,
}

fn main() -> Result<()> {
    dedupe_lib::utils::env::load_env();
    env_logger::init();
    let args = Args::parse();

    let mut config = MatchConfig::from_env();
    if let Some(threshold) = args.name_threshold {
        config.name_threshold = threshold;
    }
    config.validate()?;

    let normalized_a = normalize_name(&args.first);
    let normalized_b = normalize_name(&args.second);
    let scores = score_names_with_scale(&args.first, &args.second, config.effective_prefix_scale());
    let threshold = if config.word_overlap_boost {
        adjusted_threshold(config.name_threshold, &normalized_a, &normalized_b)
    } else {
        config.name_threshold
    };

    println!("first:      {:?} -> {:?}", args.first, normalized_a);
    println!("second:     {:?} -> {:?}", args.second, normalized_b);
    println!("character:  {:.4}", scores.character_similarity);
    println!("token set:  {:.4}", scores.token_set_similarity);
    println!("combined:   {:.4}", scores.combined);
    println!(
        "threshold:  {:.2} ({})",
        threshold,
        if scores.combined >= threshold { "name match" } else { "below threshold" }
    );
    match detect_conflict(&args.first, &args.second) {
        Some(conflict) => println!("blocking:   {}", conflict),
        None => println!("blocking:   none"),
    }
    for name in [&args.first, &args.second] {
        println!(
            "generic:    {:?} generic={} suggestion_filtered={}",
            name,
            is_generic_name(name),
            is_suggestion_filtered(name)
        );
    }
    Ok(())
}
