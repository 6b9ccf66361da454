//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::{BatchReviews, ExpertReview};

pub fn output_review(
    output_format: OutputFormat,
    vehicle_name: &str,
    review: &ExpertReview,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(review)?;
        println!("{}", content);
    } else {
        println!("\nExpert Review: {}", vehicle_name);
        println!("==============={}", "=".repeat(vehicle_name.len() + 1));
        println!("Rating:  {:.1} / 10", review.rating);
        println!("Verdict: {}", review.verdict_title.label());
        println!(
            "Author:  {} ({})",
            review.author.name, review.author.role
        );
        println!("\n{}", review.verdict_summary);
        println!("\nPros:");
        for pro in &review.pros {
            println!("  + {}", pro);
        }
        println!("Cons:");
        for con in &review.cons {
            println!("  - {}", con);
        }
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, batch: &BatchReviews) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(batch)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBatch Review Summary");
    println!("====================");
    println!("Total files: {}", batch.total_processed);
    println!("Reviewed:    {}", batch.successful);
    println!("Failed:      {}", batch.failed);
    println!();
    println!("{:<32} {:>6}  {}", "Vehicle", "Rating", "Verdict");
    println!("{}", "-".repeat(64));
    for entry in &batch.entries {
        println!(
            "{:<32} {:>6.1}  {}",
            truncate_str(&entry.vehicle, 31),
            entry.review.rating,
            entry.review.verdict_title.label()
        );
    }

    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a very long vehicle name", 10), "a very l..");
    }
}
