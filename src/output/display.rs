//! Display functions for command results

use super::formatters::{color_symbol, format_duration, record_row};
use crate::commands::{PlaceReport, SolveReport};
use crate::core::PlacedWord;
use crate::engine::Outcome;
use colored::Colorize;

/// Print board text with colored symbols
pub fn print_board(board: &str) {
    for line in board.lines() {
        let row: String = line.chars().map(|c| color_symbol(c).to_string()).collect();
        println!("   {row}");
    }
}

fn print_records(placed: &[PlacedWord]) {
    for (i, record) in placed.iter().enumerate() {
        println!("   {}", record_row(i, record));
    }
}

fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Placed(score) => println!(
            "{}",
            format!("✅ Scored {score} points").green().bold()
        ),
        Outcome::Unsolvable => println!("{}", "❌ Unsolvable".red().bold()),
    }
}

/// Print the result of an ordered placement
pub fn print_place_report(report: &PlaceReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Placing: {}",
        report.words.join(" ").to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !report.placed.is_empty() {
        println!("\n📝 {}", "Placements:".bright_cyan().bold());
        print_records(&report.placed);
    }

    println!("\n🧩 {}", "Board:".bright_cyan().bold());
    print_board(&report.board);

    println!();
    print_outcome(report.outcome);
    println!("   Time taken:       {}", format_duration(report.duration));
}

/// Print the result of an optimal-order solve
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPTIMAL ORDER:".bright_cyan().bold(),
        report.words.join(" ").to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Strategy:         {}", report.search);
    println!("   Orders searched:  {}", report.orders);
    println!("   Time taken:       {}", format_duration(report.duration));

    if !report.order.is_empty() {
        println!(
            "   Best order:       {}",
            report.order.join(" -> ").bright_yellow()
        );
        println!("\n📝 {}", "Placements:".bright_cyan().bold());
        print_records(&report.placed);
    }

    println!("\n🧩 {}", "Board:".bright_cyan().bold());
    print_board(&report.board);

    println!();
    print_outcome(report.outcome);
}
