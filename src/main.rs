// Wed Aug 26 2026 - Alex

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use winlib_extract::{
    driver::{parse_modules_into, ModuleDump, ReportCollector},
    output::{JsonWriter, ReportGenerator, TableOutput},
    Arch, ArchOutcome, DumpSource, ParserConfig,
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Extract symbol tables from COFF/PE library dumper reports", long_about = None)]
struct Args {
    /// Dumper report files, one per (module, architecture)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Architecture the reports were dumped for
    #[arg(short, long, default_value = "x86")]
    arch: String,

    #[arg(short, long, default_value = "symbols.json")]
    output: PathBuf,

    #[arg(long)]
    text_output: Option<PathBuf>,

    #[arg(long)]
    threads: Option<usize>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    compact: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if args.verbose { "debug" } else { "warn" },
    ))
    .init();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let arch: Arch = args
        .arch
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("invalid --arch")?;

    let mut config = ParserConfig::new()
        .with_architectures(vec![arch])
        .with_pretty_output(!args.compact);
    if let Some(threads) = args.threads {
        config = config.with_max_threads(threads);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("invalid configuration")?;

    println!(
        "{} Loading {} report(s) for {}",
        "[*]".blue(),
        args.inputs.len(),
        arch.to_string().cyan()
    );

    let progress = if args.no_progress {
        None
    } else {
        let pb = ProgressBar::new(args.inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    };

    let mut modules = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let name = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        if let Some(ref pb) = progress {
            pb.set_message(name.clone());
        }
        let source = DumpSource::from_file(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        modules.push(ModuleDump::new(name).with_dump(arch, source.into_lines()));
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }
    if let Some(ref pb) = progress {
        pb.finish_with_message("loaded");
    }

    println!("{} Parsing symbol tables...", "[*]".blue());

    let collector = ReportCollector::new();
    parse_modules_into(&config, &modules, &collector);
    let summary = collector.summary();

    let mut tables = Vec::new();
    let mut aborted = Vec::new();
    for report in collector.into_reports() {
        for (arch, outcome) in &report.outcomes {
            match outcome {
                ArchOutcome::Finished(parse) => {
                    tables.push(TableOutput::from_report(report.name.clone(), *arch, parse));
                }
                ArchOutcome::NoData => {
                    println!("{} {} [{}]: no dump data, skipped", "[*]".blue(), report.name, arch);
                }
                ArchOutcome::Aborted(err) => {
                    eprintln!("{} {} [{}]: {}", "[!]".red(), report.name, arch, err);
                    aborted.push(report.name.clone());
                }
            }
        }
    }

    tables.sort_by(|a, b| a.module.cmp(&b.module));

    let writer = JsonWriter::new().with_pretty(config.pretty_output);
    writer
        .serialize_to_file(&tables, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("{} Symbol tables saved to: {}", "[+]".green(), args.output.display());

    if let Some(text_path) = &args.text_output {
        let text = ReportGenerator::new().render_all(&tables);
        std::fs::write(text_path, text)
            .with_context(|| format!("failed to write {}", text_path.display()))?;
        println!("{} Text report saved to: {}", "[+]".green(), text_path.display());
    }

    let elapsed = start_time.elapsed();
    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} Parsed {} table(s) in {:.2}s",
        "[+]".green(),
        summary.finished,
        elapsed.as_secs_f64()
    );
    println!("{} Symbol groups: {}", "[+]".green(), summary.groups);
    if summary.failures > 0 {
        println!(
            "{} Resolution failures: {}",
            "[!]".yellow(),
            summary.failures.to_string().yellow()
        );
    }
    if summary.no_data > 0 {
        println!("{} Skipped (no data): {}", "[*]".blue(), summary.no_data);
    }

    if !aborted.is_empty() {
        bail!("{} report(s) aborted on malformed input: {}", aborted.len(), aborted.join(", "));
    }
    Ok(())
}
