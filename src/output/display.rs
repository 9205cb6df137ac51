//! Display functions for families and command results

use super::formatters::{family_header, share_bar};
use crate::commands::{NarrowResult, PartitionResult, SampleResult};
use crate::partition::Families;
use colored::Colorize;

/// Print each family's signature, size, and words
pub fn print_families(families: &Families) {
    for family in families {
        println!("{}", family_header(family).bright_cyan());
        for word in family.words() {
            println!("     {word}");
        }
        println!();
    }
}

/// Print the result of partitioning a word list
pub fn print_partition_result(result: &PartitionResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION BY".bright_cyan().bold(),
        result.letter.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words into {} families\n",
        result.total_words,
        result.families.len()
    );

    if verbose {
        print_families(&result.families);
        return;
    }

    let biggest = result.biggest_signature();
    for family in &result.families {
        let marker = if Some(family.signature().as_str()) == biggest {
            "★".bright_yellow().to_string()
        } else {
            " ".to_string()
        };
        println!(
            " {marker} {} [{}] {:5}",
            family.signature(),
            share_bar(family.len(), result.total_words, 30).green(),
            family.len()
        );
    }
}

/// Print the rounds of a narrowing run
pub fn print_narrow_result(result: &NarrowResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "NARROWING".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: '{}' → {}",
            i + 1,
            round.letter,
            round.signature.bright_white().bold()
        );
        println!(
            "  Words:     {} → {} ({} families)",
            round.words_before, round.words_after, round.family_count
        );
    }

    if !result.repeated.is_empty() {
        let letters: String = result.repeated.iter().collect();
        println!("\n{}", format!("Skipped repeated letters: {letters}").yellow());
    }

    println!();
    println!(
        "{}",
        format!("✅ {} words remain", result.words.len())
            .green()
            .bold()
    );
    if result.words.len() <= 10 {
        for word in &result.words {
            println!("  • {word}");
        }
    }
}

/// Print random draws from a family
pub fn print_sample_result(result: &SampleResult) {
    println!(
        "\nFamily {} ({} words):",
        result.signature.bright_white().bold(),
        result.family_size
    );
    for word in &result.draws {
        println!("  • {word}");
    }
}
