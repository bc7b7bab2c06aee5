//! Shows how much the shape of a BST matters for lookups.
//!
//! Reads an alphabetically ordered word list (one word per line) and times random lookups in:
//! the list itself, a shuffled copy of it, a tree built from the ordered list (a chain), a tree
//! built from the shuffled list, and finally the chain after rebalancing.
//!
//! ```text
//! cargo run --release --example words -- <PATH> [LIMIT] [LOOKUPS]
//! ```
//!
//! `LIMIT` caps how many lines are read (default 50000, negative reads everything) and `LOOKUPS`
//! is how many random words are looked up (default 10000). Set `RUST_LOG=debug` to see what the
//! tree logs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use log::info;
use rand::seq::SliceRandom;

use linked_bst::Tree;

const DEFAULT_LIMIT: i64 = 50_000;
const DEFAULT_LOOKUPS: usize = 10_000;

struct Config {
    path: String,
    /// `None` reads the whole file.
    limit: Option<usize>,
    lookups: usize,
}

impl Config {
    fn from_args() -> anyhow::Result<Self> {
        let mut args = std::env::args().skip(1);
        let Some(path) = args.next() else {
            bail!("usage: words <PATH> [LIMIT] [LOOKUPS]");
        };
        let limit = match args.next() {
            Some(limit) => limit.parse().context("LIMIT must be an integer")?,
            None => DEFAULT_LIMIT,
        };
        let lookups = match args.next() {
            Some(lookups) => lookups.parse().context("LOOKUPS must be a non-negative integer")?,
            None => DEFAULT_LOOKUPS,
        };

        Ok(Self {
            path,
            limit: usize::try_from(limit).ok(),
            lookups,
        })
    }
}

fn read_words(path: &Path, limit: Option<usize>) -> anyhow::Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let lines = BufReader::new(file).lines().map(|line| {
        line.map(|line| line.trim().to_string())
            .with_context(|| format!("reading {}", path.display()))
    });

    match limit {
        Some(limit) => lines.take(limit).collect(),
        None => lines.collect(),
    }
}

fn time_lookups(to_find: &[&String], find: impl Fn(&String) -> bool) -> Duration {
    let start = Instant::now();
    let found = to_find.iter().filter(|&&word| find(word)).count();
    let elapsed = start.elapsed();
    info!("found {} of {} words", found, to_find.len());
    elapsed
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::from_args()?;

    println!("Generating word lists...");
    let ordered = read_words(Path::new(&config.path), config.limit)?;
    if ordered.is_empty() {
        bail!("{} has no words", config.path);
    }
    let mut rng = rand::thread_rng();
    let mut unordered = ordered.clone();
    unordered.shuffle(&mut rng);
    let to_find: Vec<&String> = (0..config.lookups)
        .filter_map(|_| ordered.choose(&mut rng))
        .collect();
    info!("read {} words, looking up {}", ordered.len(), to_find.len());

    println!("Building a tree from the ordered words. It may take a while...");
    let mut ordered_tree: Tree<String> = ordered.iter().cloned().collect();
    println!("Building a tree from the shuffled words...");
    let unordered_tree: Tree<String> = unordered.iter().cloned().collect();
    info!(
        "tree heights: ordered {:?}, shuffled {:?}",
        ordered_tree.height(),
        unordered_tree.height()
    );

    println!("Starting time measurement...");
    let report = |name: &str, elapsed: Duration| {
        println!("Search time in {}: {:.6}s", name, elapsed.as_secs_f64());
    };
    report(
        "an ordered list",
        time_lookups(&to_find, |word| ordered.contains(word)),
    );
    report(
        "an unordered list",
        time_lookups(&to_find, |word| unordered.contains(word)),
    );
    report(
        "a tree built from ordered words",
        time_lookups(&to_find, |word| ordered_tree.contains(word)),
    );
    report(
        "a tree built from shuffled words",
        time_lookups(&to_find, |word| unordered_tree.contains(word)),
    );

    ordered_tree.rebalance();
    report(
        "the ordered tree after rebalancing",
        time_lookups(&to_find, |word| ordered_tree.contains(word)),
    );

    Ok(())
}
