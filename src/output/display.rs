//! Display functions for command results

use super::formatters::{changed_position, create_progress_bar, mark_change};
use crate::commands::{BenchmarkResult, LadderError, NeighborsResult, SolveResult};
use crate::core::{Ladder, Word};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, show_stats: bool) {
    let ladder = &result.ladder;
    let (start, end) = match (ladder.start(), ladder.end()) {
        (Some(start), Some(end)) => (start, end),
        _ => return,
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        start.text().to_uppercase().bright_yellow().bold(),
        end.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_rungs(ladder);

    println!();
    println!(
        "{}",
        format!(
            "✅ {} step{} ({} words) in {:.2}ms",
            ladder.steps(),
            if ladder.steps() == 1 { "" } else { "s" },
            ladder.len(),
            result.duration.as_secs_f64() * 1000.0
        )
        .green()
        .bold()
    );

    if show_stats {
        let stats = &result.stats;
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Dictionary:       {} words", result.dictionary_size);
        println!("   Neighbor lookup:  {}", result.strategy.name());
        println!("   Rounds:           {}", stats.rounds);
        println!("   Words expanded:   {}", stats.words_expanded);
        println!(
            "   Visited:          {} forward / {} backward",
            stats.forward_visited, stats.backward_visited
        );
        if let Some(direction) = stats.met_from {
            println!("   Met from:         {} side", direction.name());
        }

        let changes: Vec<String> = ladder
            .words()
            .windows(2)
            .map(|pair| mark_change(&pair[0], &pair[1]))
            .collect();
        if !changes.is_empty() {
            println!("   Changes:          {}", changes.join(" → "));
        }
    }
}

/// Print each rung with the changed letter highlighted
fn print_rungs(ladder: &Ladder) {
    let mut previous: Option<&Word> = None;

    for (i, word) in ladder.words().iter().enumerate() {
        let changed = previous.and_then(|p| changed_position(p, word));
        let rung: String = word
            .chars()
            .iter()
            .enumerate()
            .map(|(pos, c)| {
                let letter = c.to_uppercase().to_string();
                if Some(pos) == changed {
                    letter.bright_green().bold().to_string()
                } else {
                    letter
                }
            })
            .collect();

        println!("  {:>2}. {rung}", (i + 1).to_string().bright_black());
        previous = Some(word);
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!(
            "\n{}",
            format!("⚠️  '{}' is not in the dictionary", result.word).yellow()
        );
    }

    println!(
        "\n📖 {} of {} words ({})",
        result.neighbors.len(),
        result.dictionary_size,
        result.strategy.name()
    );

    for neighbor in &result.neighbors {
        println!("   • {}", neighbor.to_uppercase());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Dictionary:       {} words of length {}",
        result.dictionary_size, result.word_length
    );
    println!("   Seed:             {}", result.seed);
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!(
        "   No ladder:        {}",
        format!("{}", result.not_found).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    println!("   Shortest:         {}", result.min_steps);
    println!("   Longest:          {}", result.max_steps);
    println!("   Words expanded:   {}", result.words_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for steps in result.min_steps..=result.max_steps {
        if let Some(&count) = result.distribution.get(&steps) {
            let pct = count as f64 / result.found as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {steps:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print a command error
pub fn print_ladder_error(error: &LadderError) {
    println!("{}", format!("❌ {error}").red().bold());
}
