//! Interactive numeric menu loop
//!
//! Reads a choice, dispatches one reporter operation, blocks on a
//! "press Enter" acknowledgment and repeats until quit or end of input.
//! Operation failures are reported as short messages; the loop always
//! survives and re-prompts.

use std::io;
use std::path::Path;

use chzzk_core::ChzzkReporter;
use tracing::warn;

use crate::console::Console;
use crate::render;

/// One menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Top-N live broadcast listing
    TopStreams(u32),
    /// Category ranking by aggregated viewers
    TopCategories,
    /// Random streamer recommendation
    RandomPick,
    /// CSV export of the live list
    Export,
    /// Leave the program
    Quit,
}

impl Choice {
    /// Maps one input line to a menu action; `None` for invalid input
    pub fn parse(input: &str) -> Option<Choice> {
        match input.trim() {
            "1" => Some(Choice::TopStreams(30)),
            "2" => Some(Choice::TopStreams(20)),
            "3" => Some(Choice::TopStreams(10)),
            "4" => Some(Choice::TopCategories),
            "5" => Some(Choice::RandomPick),
            "6" => Some(Choice::Export),
            "0" => Some(Choice::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\
==========================================
| 1. Top 30 live broadcasts              |
| 2. Top 20 live broadcasts              |
| 3. Top 10 live broadcasts              |
| 4. Top 10 categories by viewers        |
| 5. Random streamer recommendation      |
| 6. Export live list to CSV             |
| 0. Quit                                |
==========================================
";

const CHOICE_PROMPT: &str = "[Enter the number of the service you want]: ";
const CONTINUE_PROMPT: &str = "\nPress Enter to return to the main menu...";

/// Runs the menu loop until the user quits or input ends
pub async fn run<C: Console>(
    reporter: &ChzzkReporter,
    console: &mut C,
    export_dir: &Path,
) -> io::Result<()> {
    loop {
        console.clear();
        console.print(MENU);

        let Some(input) = console.read_line(CHOICE_PROMPT)? else {
            return Ok(());
        };

        match Choice::parse(&input) {
            Some(Choice::Quit) => {
                console.print("\nExiting.\n");
                return Ok(());
            }
            Some(choice) => run_action(reporter, console, export_dir, choice).await,
            None => console.print("\nInvalid input. Enter a number between 0 and 6.\n"),
        }

        if console.read_line(CONTINUE_PROMPT)?.is_none() {
            return Ok(());
        }
    }
}

/// Dispatches one menu action and renders its result
async fn run_action<C: Console>(
    reporter: &ChzzkReporter,
    console: &mut C,
    export_dir: &Path,
    choice: Choice,
) {
    console.clear();

    match choice {
        Choice::TopStreams(n) => {
            console.print(&render::top_streams_banner(n));
            match reporter.top_streams(n).await {
                Ok(streams) if !streams.is_empty() => console.print(&render::top_streams(&streams)),
                Ok(_) => console.print("\nFailed to fetch live broadcast information.\n"),
                Err(err) => {
                    warn!(%err, "top stream fetch failed");
                    console.print("\nFailed to fetch live broadcast information.\n");
                }
            }
        }
        Choice::TopCategories => {
            console.print(&render::categories_banner());
            match reporter.category_ranking().await {
                Ok(ranked) if !ranked.is_empty() => console.print(&render::category_table(&ranked)),
                Ok(_) => console.print("\nFailed to fetch category information.\n"),
                Err(err) => {
                    warn!(%err, "category fetch failed");
                    console.print("\nFailed to fetch category information.\n");
                }
            }
        }
        Choice::RandomPick => {
            console.print(&render::random_banner());
            match reporter.random_stream().await {
                Ok(stream) => console.print(&render::random_pick(&stream)),
                Err(err) => {
                    warn!(%err, "recommendation fetch failed");
                    console.print("\nFailed to fetch streamer information.\n");
                }
            }
        }
        Choice::Export => {
            console.print(&render::export_banner());
            match reporter.export_csv(export_dir).await {
                Ok(path) => {
                    console.print(&format!("\nExported live list to {}\n", path.display()));
                }
                Err(err) => {
                    warn!(%err, "export failed");
                    console.print("\nFailed to export the live list.\n");
                }
            }
        }
        // Handled by the caller before dispatch
        Choice::Quit => {}
    }
}
