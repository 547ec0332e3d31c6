//! Display functions for command results

use super::formatters::{create_progress_bar, outcome_message, percentage};
use crate::commands::{SolveResult, SweepReport, SweepStats};
use crate::solver::{Outcome, Phase};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (cutoff {}, search {}, {} turns)",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.config.cutoff,
        result.config.search,
        result.config.max_turns
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.turns.iter().enumerate() {
        let phase = match step.phase {
            Phase::Explore => "explore".bright_blue(),
            Phase::Exploit => "exploit".bright_magenta(),
        };
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            step.score.to_emoji(),
            phase
        );

        if verbose {
            println!("  Score:      {}", step.score);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let message = match result.outcome {
        Outcome::Won { word, .. } if word != result.target => format!(
            "Settled on {}, but the target was {}",
            word.text().to_uppercase(),
            result.target.text().to_uppercase()
        ),
        outcome => outcome_message(&outcome),
    };
    if result.success() {
        println!("{}", format!("✅ {message}").green().bold());
    } else {
        println!("{}", format!("❌ {message}").red().bold());
    }
}

fn print_distribution(stats: &SweepStats, max_turns: usize) {
    let max_count = stats.histogram.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.histogram.iter().enumerate() {
        let label = if i < max_turns {
            format!("{:>2}", i + 1)
        } else {
            format!(">{max_turns}")
        };
        let bar = create_progress_bar(count, max_count, 40);
        let bar = if i < max_turns {
            bar.green()
        } else {
            bar.yellow()
        };
        println!(
            "  {label}: {bar} {count:5} ({:5.1}%)",
            percentage(count, stats.successes + stats.overflow())
        );
    }
}

/// Print a sweep summary: the success grid, the best pair and its distribution
pub fn print_sweep_report(report: &SweepReport) {
    println!("\n{}", "═".repeat(70));
    println!(
        " Sweep over {} words, {} turns ",
        report.word_count, report.max_turns
    );
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Successes by cutoff (rows) and search (columns)".bright_cyan().bold());
    let searches: Vec<usize> = {
        let mut s: Vec<usize> = report.stats.iter().map(|stats| stats.search).collect();
        s.sort_unstable();
        s.dedup();
        s
    };
    let header: String = searches.iter().map(|s| format!("{s:>7}")).collect();
    println!("  {:>6}{header}", "");
    for row in report.stats.chunk_by(|a, b| a.cutoff == b.cutoff) {
        let cells: String = row
            .iter()
            .map(|stats| {
                let cell = format!("{:>7}", stats.successes);
                if stats.solved_all() {
                    cell.green().to_string()
                } else {
                    cell
                }
            })
            .collect();
        println!("  {:>6}{cells}", row[0].cutoff);
    }

    if let Some(best) = report.best() {
        println!("\n✨ {}", "Best pair".green().bold());
        println!(
            "  cutoff {} search {}: {}/{} solved ({:.1}%), {:.3} average turns",
            best.cutoff,
            best.search,
            best.successes,
            report.word_count,
            percentage(best.successes, report.word_count),
            best.average_turns()
        );
        if !best.budget.unsolved.is_empty() || best.budget.turns > report.max_turns {
            println!(
                "  needs {} turns to solve everything it can; {} never solved",
                best.budget.turns,
                best.budget.unsolved.len()
            );
        }

        println!("\n📈 {}", "Turn distribution".bright_cyan().bold());
        print_distribution(best, report.max_turns);

        if !best.missed.is_empty() {
            println!("\n😰 {}", "Missed words".yellow().bold());
            for miss in best.missed.iter().take(10) {
                println!("  {} ({:?})", miss.word.text().to_uppercase().yellow(), miss.reason);
            }
            if best.missed.len() > 10 {
                println!("  ... and {} more", best.missed.len() - 10);
            }
        }
    }

    let perfect = report.perfect_pairs().count();
    println!(
        "\n  {perfect} of {} pairs solved every word  |  {:.2}s",
        report.stats.len(),
        report.elapsed.as_secs_f64()
    );
}
