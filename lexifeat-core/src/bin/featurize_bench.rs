//! Featurization Benchmarking Tool
//!
//! Measures the throughput of the feature pipeline on a large text file with
//! one sentence per line (for example a language-identification corpus).
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: filtering, lowercasing, splitting and digraph merging
//! 2. **Extract**: per-word feature vectors over pre-normalized words
//! 3. **Pipeline**: the full `FeatureExtractor`, with and without the word cache
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/featurize_bench /path/to/sentences.txt
//! ```
//!
//! ## Output
//!
//! ```text
//! --------------------------------
//! Mode        : Pipeline (cached)
//! Elapsed     : 0.452 s
//! Throughput  : 0.118 GiB/s
//! Sentences   : 1_000_000
//! Sentences/s : 2_212_389
//! --------------------------------
//! ```
//!
//! Log lines go to stderr; the report on stdout stays clean.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use lexifeat_core::analyzer::{TextNormalizer, Word};
use lexifeat_core::features::extract_word;
use lexifeat_core::{ExtractorConfig, FeatureExtractor};
use tracing::{info, warn};

const WARMUP_RUNS: u32 = 1;
const MEASURE_RUNS: u32 = 5;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: featurize_bench <path>");
        std::process::exit(1);
    }

    let path = &args[1];

    info!(path = %path, "loading corpus");
    let input = fs::read_to_string(path)?;
    let lines: Vec<&str> = input.lines().collect();

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Sentences: {}\n", fmt_count(lines.len() as u64));

    bench_normalize(&input, &lines);
    bench_extract(&input, &lines);
    bench_pipeline(&input, &lines, ExtractorConfig::default(), "Pipeline (cached)");
    bench_pipeline(&input, &lines, ExtractorConfig::uncached(), "Pipeline (uncached)");

    Ok(())
}

fn bench_normalize(input: &str, lines: &[&str]) {
    let normalizer = TextNormalizer::default();
    let mut scratch = String::new();
    let mut words: Vec<Word> = Vec::new();
    let mut total_words = 0u64;

    println!("=== Normalize ===");

    let elapsed = time_runs(|| {
        total_words = 0;
        for line in lines {
            words.clear();
            normalizer.words_into(line, &mut scratch, &mut words);
            total_words += words.len() as u64;
        }
        std::hint::black_box(total_words);
    });

    print_perf("Normalize", input.len(), elapsed, "Sentences", lines.len() as u64);
    println!("Words       : {}\n", fmt_count(total_words));
}

fn bench_extract(input: &str, lines: &[&str]) {
    let normalizer = TextNormalizer::default();
    let words: Vec<Word> = lines.iter().flat_map(|l| normalizer.words(l)).collect();

    println!("=== Extract (words only) ===");

    let elapsed = time_runs(|| {
        let acc: f64 = words.iter().map(|w| extract_word(w).as_slice()[0]).sum();
        std::hint::black_box(acc);
    });

    print_perf("Extract", input.len(), elapsed, "Words", words.len() as u64);
    println!();
}

fn bench_pipeline(input: &str, lines: &[&str], config: ExtractorConfig, label: &str) {
    println!("=== {} ===", label);

    // A fresh extractor per run so the cache starts cold every time.
    let mut stats = None;
    let elapsed = time_runs(|| {
        let mut extractor = FeatureExtractor::new(config);
        for line in lines {
            let _ = std::hint::black_box(extractor.featurize(line));
        }
        stats = Some(extractor.stats());
    });

    print_perf(label, input.len(), elapsed, "Sentences", lines.len() as u64);

    let Some(stats) = stats else {
        return;
    };
    if stats.rejected > 0 {
        warn!(rejected = stats.rejected, "lines without any words were skipped");
    }
    if config.memoize_words {
        println!(
            "Cache hits  : {} / {}",
            fmt_count(stats.cache_hits),
            fmt_count(stats.words)
        );
    }
    println!();
}

/// Runs `f` untimed `WARMUP_RUNS` times, then returns the mean of
/// `MEASURE_RUNS` timed runs.
fn time_runs<F: FnMut()>(mut f: F) -> Duration {
    (0..WARMUP_RUNS).for_each(|_| f());

    let total: Duration = (0..MEASURE_RUNS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .sum();

    total / MEASURE_RUNS
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, unit: &str, count: u64) {
    let secs = elapsed.as_secs_f64().max(f64::MIN_POSITIVE);
    let gib = input_bytes as f64 / GIB;
    let rate_label = format!("{unit}/s");

    println!("--------------------------------");
    println!("{:<12}: {}", "Mode", label);
    println!("{:<12}: {:.3} s", "Elapsed", secs);
    println!("{:<12}: {:.3} GiB/s", "Throughput", gib / secs);

    if count > 0 {
        println!("{:<12}: {}", unit, fmt_count(count));
        println!("{:<12}: {}", rate_label, fmt_count((count as f64 / secs) as u64));
    }

    println!("--------------------------------");
}

const GIB: f64 = (1u64 << 30) as f64;

fn fmt_bytes(b: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = b as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{b} B")
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// `1234567` → `"1_234_567"`.
fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;

    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );

    groups.join("_")
}
