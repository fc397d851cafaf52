//! Display functions for command results

use super::formatters::{colorize_combination, create_progress_bar, score_to_pegs};
use crate::commands::{BenchmarkResult, GameTally, SolveResult, Statistics};
use crate::game::GameOutcome;
use colored::Colorize;

/// Print the transcript of one played game
pub fn print_game_result(index: usize, outcome: &GameOutcome, pegs: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", format!("Game {index}").bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (turn, (guess, score)) in outcome.history.iter().enumerate() {
        println!(
            "  {:>3}. {}  {}  {}",
            turn + 1,
            colorize_combination(guess),
            score_to_pegs(*score, pegs),
            score.to_string().bright_black()
        );
    }

    if outcome.won {
        println!(
            "{}",
            format!(
                "✅ Won after {} attempts, {} generations",
                outcome.attempts, outcome.generations
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} attempts", outcome.attempts)
                .red()
                .bold()
        );
    }
}

/// Print running statistics over every game played so far
pub fn print_tally(tally: &GameTally) {
    println!(
        "\n📊 {} ({} games, {} won)",
        "Running statistics:".bright_cyan().bold(),
        tally.games(),
        tally.won()
    );
    print_statistics("Attempts", tally.attempts());
    print_statistics("Generations", tally.generations());
}

fn print_statistics(label: &str, stats: Option<Statistics>) {
    match stats {
        Some(s) => println!(
            "   {label:<12} min {:<6} max {:<6} mean {} std {:.2}",
            s.min,
            s.max,
            format!("{:.2}", s.mean).bright_yellow(),
            s.std_dev
        ),
        None => println!("   {label:<12} -"),
    }
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, pegs: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", colorize_combination(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n{:>4}  {:<8} {:<8} {:>18}  {:>11}",
        "Turn", "Guess", "Score", "Feasible", "Generations"
    );
    for (i, step) in result.steps.iter().enumerate() {
        let feasible = format!("{} → {}", step.feasible_before, step.feasible_after);
        println!(
            "{:>4}  {:<8} {:<8} {:>18}  {:>11}",
            i + 1,
            step.guess.to_string(),
            score_to_pegs(step.score, pegs),
            feasible,
            step.generations
        );

        if verbose && let Some(entropy) = step.entropy {
            println!("      Entropy: {entropy:.3} nats");
            if step.feasible_after > 0 {
                let reduction = step.feasible_before as f64 / step.feasible_after as f64;
                println!(
                    "      Info gained: {:.3} nats ({reduction:.1}x reduction)",
                    reduction.ln()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} attempts, {} generations",
                result.steps.len(),
                result.generations
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} attempts", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let tally = &result.tally;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", tally.games());
    println!("   Games won:        {}", tally.won());
    if let Some(attempts) = tally.attempts() {
        println!(
            "   Average attempts: {}",
            format!("{:.2}", attempts.mean).bright_yellow().bold()
        );
        println!(
            "   Best case:        {}",
            format!("{}", attempts.min).green()
        );
        println!(
            "   Worst case:       {}",
            format!("{}", attempts.max).yellow()
        );
        println!("   Std deviation:    {:.2}", attempts.std_dev);
    }
    if let Some(generations) = tally.generations() {
        println!("   Avg generations:  {:.1}", generations.mean);
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if tally.games() == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (attempts, count) in tally.distribution() {
        let pct = (count as f64 / tally.games() as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
