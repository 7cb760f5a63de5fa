//! Console output for catalog listings, samples, batch results and predictions.
//!
//! Batch failures are grouped by error kind. The first few failures of each kind
//! are printed in full; the rest are folded into a count.

use std::collections::HashMap;

use colored::Colorize;

use crate::catalog::{Gap, Solution};
use crate::dataset::{BatchReport, DatasetSample};
use crate::graph::GraphStats;
use crate::index::IndexMapper;
use crate::inference::RankedPrediction;

const FAILURES_SHOWN_PER_KIND: usize = 5;

pub fn print_catalog(mapper: &dyn IndexMapper) {
    let catalog = mapper.catalog();
    println!("{} {}", "catalog:".bold(), catalog.root().display());
    for (cat, count) in catalog.categories().iter().zip(catalog.counts()) {
        println!("  {:>4}  {:<50} {count}", cat.ordinal, cat.name);
    }
    println!(
        "{} {} {}, {} {}",
        "total:".bold(),
        catalog.len(),
        pluralize("category", catalog.len()),
        mapper.total_count(),
        pluralize("sample", mapper.total_count())
    );
}

pub fn print_solution(index: usize, solution: &Solution) {
    println!(
        "{index} -> {} #{} ({})",
        solution.category.name.cyan(),
        solution.number,
        solution.path.display()
    );
}

pub fn print_sample(sample: &DatasetSample) {
    let stats = GraphStats::of(&sample.graph);
    println!("{}", "==========================".dimmed());
    print_solution(sample.index, &sample.solution);
    println!("Number of nodes: {}", stats.nodes);
    println!("Number of edges: {}", stats.edges);
    println!("Average node degree: {:.2}", stats.average_degree);
    println!("Has isolated nodes: {}", stats.isolated_nodes > 0);
    println!("Has self-loops: {}", stats.self_loops > 0);
    println!("Leaves: {}", stats.leaves);
    if let Some(depth) = stats.depth {
        println!("Depth: {depth}");
    }
    println!("Feature dimension: {}", stats.feature_dimension);
    println!("Label ordinal: {}", sample.solution.category.ordinal);
    println!("{}", "==========================".dimmed());
}

pub fn print_batch_report(report: &BatchReport) {
    let mut shown: HashMap<&'static str, usize> = HashMap::new();
    for failure in report.failures() {
        let kind = failure.source.kind();
        let seen = shown.entry(kind).or_insert(0);
        *seen += 1;
        if *seen <= FAILURES_SHOWN_PER_KIND {
            println!("{} {failure}", "[SKIP]".yellow());
        }
    }

    for (kind, count) in report.tally() {
        if count > FAILURES_SHOWN_PER_KIND {
            println!(
                "  {} {} more {kind} {}",
                "...".dimmed(),
                count - FAILURES_SHOWN_PER_KIND,
                pluralize("failure", count - FAILURES_SHOWN_PER_KIND)
            );
        }
    }

    let built = report.success_count();
    let failed = report.failure_count();
    if failed == 0 {
        println!("{}", format!("[OK] Built {built} {}.", pluralize("sample", built)).green().bold());
    } else {
        println!(
            "{}",
            format!(
                "[WARN] Built {built} {}, {failed} {}.",
                pluralize("sample", built),
                pluralize("failure", failed)
            )
            .yellow()
            .bold()
        );
        for (kind, count) in report.tally() {
            println!("  {kind}: {count}");
        }
    }
}

pub fn print_prediction(prediction: &RankedPrediction) {
    for (i, p) in prediction.entries.iter().enumerate() {
        let line = format!("{}. {} ({:.2}%)", i + 1, p.category, p.confidence * 100.0);
        if i == 0 {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }
}

pub fn print_gaps(gaps: &[Gap]) {
    if gaps.is_empty() {
        println!("{}", "[OK] Solution numbering is contiguous.".green().bold());
        return;
    }
    for gap in gaps {
        println!(
            "{} {}: missing {}",
            "[GAP]".red().bold(),
            gap.category,
            format_numbers(&gap.missing)
        );
    }
}

fn format_numbers(numbers: &[usize]) -> String {
    const SHOWN: usize = 10;
    let mut parts: Vec<String> = numbers.iter().take(SHOWN).map(ToString::to_string).collect();
    if numbers.len() > SHOWN {
        parts.push(format!("... ({} total)", numbers.len()));
    }
    parts.join(", ")
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{word}s")
    }
}
