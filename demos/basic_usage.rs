//! Basic usage example for the arxiv-eprints library.
//!
//! This example demonstrates how to fetch a paper by identifier and how to
//! run a structured search against the arXiv API.

use arxiv_eprints::models::{QueryOptions, SearchOptions, SortBy};
use arxiv_eprints::{Client, EprintsService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let eprints = Client::new()?.eprints();

    // Look up a single paper
    let paper = eprints.get("1706.03762").await?;
    println!("{}\n", paper);

    // Search recent submissions by author and category
    let search = SearchOptions::new().author("Hinton").category("cs.LG");
    let query = QueryOptions::new()
        .max_results(5)
        .sort_by(SortBy::SubmittedDate);

    println!("Searching for: {}", search);
    match eprints.search(&search, &query).await {
        Ok(results) => {
            println!("Found {} papers", results.len());
            for (i, paper) in results.iter().enumerate() {
                println!("\n{}. {}", i + 1, paper.title);
                println!("   Authors: {}", paper.author_names().join(", "));
                println!("   Published: {}", paper.published.date_naive());
                if let Some(pdf) = paper.pdf_url() {
                    println!("   PDF: {}", pdf);
                }
            }
        }
        Err(e) if e.is_not_found() => println!("No matches"),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
