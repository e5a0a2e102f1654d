/*!
 * CrackDict command line
 *
 * Builds the generation settings from arguments, prints the run summary
 * and estimate, then drives one of the two pipelines with a progress bar.
 */

mod cli;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Args, Mode};
use crackdict::{
    automatic, clamp_max_length, clamp_workers, estimate_automatic, estimate_manual, format_count,
    manual, AutomaticConfig, Exclusion, GenError, ManualConfig, OutputSink, ProgressEvent,
    RunReport, RunState, RunStats, MAX_LENGTH_LIMIT,
};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn progress_bar(unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    let template = format!(
        "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{eta}})",
        unit
    );
    if let Ok(style) = ProgressStyle::default_bar().template(&template) {
        pb.set_style(style.progress_chars("█▓▒░-"));
    }
    pb
}

fn render(pb: &ProgressBar, event: ProgressEvent) {
    match event {
        ProgressEvent::Started { total } => pb.set_length(total),
        ProgressEvent::Advanced { completed, .. } => pb.set_position(completed),
        ProgressEvent::Finished { .. } => pb.finish_with_message("Done"),
    }
}

fn on_off(flag: bool) -> ColoredString {
    if flag {
        "enabled".green()
    } else {
        "disabled".dimmed()
    }
}

/// Split positional words on whitespace and append the lines of `seeds_file`
fn collect_seeds(words: &[String], seeds_file: Option<&Path>) -> Result<Vec<String>> {
    let mut seeds: Vec<String> = words
        .iter()
        .flat_map(|w| w.split_whitespace())
        .map(str::to_string)
        .collect();

    if let Some(path) = seeds_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seeds file: {}", path.display()))?;
        seeds.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    Ok(seeds)
}

fn save_report<C: serde::Serialize>(
    report_path: Option<&Path>,
    mode: &'static str,
    output: &Path,
    config: &C,
    stats: RunStats,
) -> Result<()> {
    if let Some(path) = report_path {
        RunReport::new(mode, output, config, stats)
            .save(path)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        println!("✓ Report saved to {}", path.display());
    }
    Ok(())
}

fn print_result(stats: &RunStats, output: &Path) {
    println!(
        "\n{}",
        format!("[+] Wordlist written to {}", output.display()).green().bold()
    );
    println!("    - Lines: {}", format_count(stats.lines_written as u128));
    println!("    - Time elapsed: {:.2}s", stats.duration_secs);
    println!("    - Average rate: {:.0} lines/second", stats.lines_per_second);
}

#[allow(clippy::too_many_arguments)]
fn run_auto(
    words: Vec<String>,
    seeds_file: Option<PathBuf>,
    output: PathBuf,
    special: bool,
    leet: bool,
    exclude: Option<String>,
    max_length: usize,
    no_numbers: bool,
    threads: Option<usize>,
    report: Option<&Path>,
    state: &RunState,
) -> Result<()> {
    let seeds = collect_seeds(&words, seeds_file.as_deref())?;
    if seeds.is_empty() {
        bail!("At least one keyword is required");
    }

    let exclusion = Exclusion::new(exclude.as_deref())?;
    let config = AutomaticConfig::new(clamp_max_length(max_length), clamp_workers(threads))
        .with_special(special)
        .with_numbers(!no_numbers)
        .with_leet(leet)
        .with_exclusion(exclusion);

    println!("\n{}", "[+] Configuration:".cyan().bold());
    println!("    - Keywords: {}", seeds.len());
    println!("    - Symbols: {}", on_off(special));
    println!("    - Numbers: {}", on_off(!no_numbers));
    println!("    - Leet: {}", on_off(leet));
    println!("    - Exclusion: '{}'", config.exclude.pattern().unwrap_or("none"));
    println!("    - Threads: {}", config.workers);
    println!("    - Max length: {} characters", config.max_length);
    println!("    - Output file: {}\n", output.display());
    println!(
        "[+] Initial estimate: ~{} candidates (up to {} characters)\n",
        format_count(estimate_automatic(&seeds, leet) as u128),
        config.max_length
    );

    let sink = OutputSink::create(&output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let pb = progress_bar("keywords");
    let stats = automatic::run(&seeds, &config, &sink, state, &|event: ProgressEvent| {
        render(&pb, event)
    })?;
    sink.finish()?;

    print_result(&stats, &output);
    save_report(report, "automatic", &output, &config, stats)
}

#[allow(clippy::too_many_arguments)]
fn run_manual(
    charset: String,
    min: usize,
    max: usize,
    output: PathBuf,
    special: bool,
    leet: bool,
    exclude: Option<String>,
    yes: bool,
    report: Option<&Path>,
    state: &RunState,
) -> Result<()> {
    if max > MAX_LENGTH_LIMIT && !yes {
        bail!(
            "Lengths above {} can produce enormous files; pass --yes to continue",
            MAX_LENGTH_LIMIT
        );
    }

    let exclusion = Exclusion::new(exclude.as_deref())?;
    let config = ManualConfig::new(charset, min, max)?
        .with_special(special)
        .with_leet(leet)
        .with_exclusion(exclusion);

    let alphabet_len = config.alphabet.chars().count();
    println!("\n{}", "[+] Configuration:".cyan().bold());
    println!("    - Characters: {} distinct", alphabet_len);
    println!("    - Length: {} to {} characters", min, max);
    println!("    - Leet: {}", on_off(leet));
    println!("    - Exclusion: '{}'", config.exclude.pattern().unwrap_or("none"));
    println!("    - Output file: {}", output.display());
    println!(
        "\n[+] Estimate: {} possible combinations\n",
        format_count(estimate_manual(alphabet_len, min, max))
    );

    let sink = OutputSink::create(&output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let pb = progress_bar("lengths");
    let stats = manual::run(&config, &sink, state, &|event: ProgressEvent| {
        render(&pb, event)
    })?;
    sink.finish()?;

    print_result(&stats, &output);
    save_report(report, "manual", &output, &config, stats)
}

fn run(args: Args, state: &RunState) -> Result<()> {
    let report = args.report.as_deref();
    match args.mode {
        Mode::Auto {
            words,
            seeds_file,
            output,
            special,
            leet,
            exclude,
            max_length,
            no_numbers,
            threads,
        } => run_auto(
            words, seeds_file, output, special, leet, exclude, max_length, no_numbers, threads,
            report, state,
        ),
        Mode::Manual {
            charset,
            min,
            max,
            output,
            special,
            leet,
            exclude,
            yes,
        } => run_manual(
            charset, min, max, output, special, leet, exclude, yes, report, state,
        ),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let state = RunState::new();
    let handler_state = state.clone();
    ctrlc::set_handler(move || {
        handler_state.stop();
    })
    .ok();

    if let Err(e) = run(args, &state) {
        if let Some(GenError::Cancelled { lines_written }) = e.downcast_ref::<GenError>() {
            eprintln!(
                "\n\n{}",
                format!(
                    "[!] Operation cancelled by user ({} lines kept)",
                    format_count(*lines_written as u128)
                )
                .yellow()
            );
        } else {
            eprintln!("\n{} {:#}", "[!] Error:".red().bold(), e);
        }
        process::exit(1);
    }
}
