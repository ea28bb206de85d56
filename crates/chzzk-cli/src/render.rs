//! Text rendering for the reporter views
//!
//! Builds the banners, ranking lists and the fixed-width category table
//! as plain strings so tests can assert on them directly.

use chzzk_core::{CategoryTotals, LiveStream};

/// Width of the category column in the ranking table
const CATEGORY_WIDTH: usize = 17;

/// Number of category groups shown in the ranking table
pub const TOP_CATEGORIES: usize = 10;

/// Formats a count with thousands separators (48211 -> "48,211")
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncates to `width` chars, then pads with spaces to exactly `width`
fn pad_category(category: &str, width: usize) -> String {
    let truncated: String = category.chars().take(width).collect();
    let padding = width - truncated.chars().count();
    format!("{}{}", truncated, " ".repeat(padding))
}

pub fn top_streams_banner(limit: u32) -> String {
    format!(
        "==========================================\n\
         | Chzzk top {limit} live broadcasts\n\
         ==========================================\n"
    )
}

/// Renders the ranked list, one numbered block per broadcast
pub fn top_streams(streams: &[LiveStream]) -> String {
    let mut out = String::new();
    for (i, stream) in streams.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({} viewers)\n   - {}\n",
            i + 1,
            stream.streamer,
            format_count(stream.viewers),
            stream.title,
        ));
    }
    out.push_str(&format!("\n{}\n", "=".repeat(42)));
    out
}

pub fn categories_banner() -> String {
    "===========================================================\n\
     | Chzzk top 10 categories (by viewers)\n\
     ===========================================================\n"
        .to_string()
}

/// Renders the top category groups as a fixed-width table
pub fn category_table(ranked: &[CategoryTotals]) -> String {
    let mut out = String::new();
    out.push_str("\n| Rank | Category          | Streams | Total viewers    |\n");
    out.push_str("---------------------------------------------------------\n");

    for (i, totals) in ranked.iter().take(TOP_CATEGORIES).enumerate() {
        out.push_str(&format!(
            "| {:<4} | {} | {:<7} | {:>16} |\n",
            i + 1,
            pad_category(&totals.category, CATEGORY_WIDTH),
            totals.broadcasts,
            format_count(totals.viewers),
        ));
    }

    out.push_str("---------------------------------------------------------\n");
    out
}

pub fn random_banner() -> String {
    "==========================================\n\
     | Random streamer recommendation\n\
     ==========================================\n"
        .to_string()
}

/// Renders the full detail block for a recommended broadcast
pub fn random_pick(stream: &LiveStream) -> String {
    format!(
        "\nHow about this streamer?\n\n\
         * Streamer: {}\n\
         \x20 - Title: {}\n\
         \x20 - Viewers: {}\n\
         \x20 - Category: {}\n\
         \n{}\n",
        stream.streamer,
        stream.title,
        format_count(stream.viewers),
        stream.category,
        "=".repeat(42),
    )
}

pub fn export_banner() -> String {
    "==========================================\n\
     | Export live list to CSV\n\
     ==========================================\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(streamer: &str, viewers: u64, category: &str) -> LiveStream {
        LiveStream {
            streamer: streamer.to_string(),
            title: format!("{streamer} live"),
            viewers,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(48_211), "48,211");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_pad_category_pads_short_labels() {
        let padded = pad_category("Talk", CATEGORY_WIDTH);
        assert_eq!(padded.chars().count(), CATEGORY_WIDTH);
        assert!(padded.starts_with("Talk"));
    }

    #[test]
    fn test_pad_category_truncates_long_labels() {
        let padded = pad_category("A very long category label", CATEGORY_WIDTH);
        assert_eq!(padded.chars().count(), CATEGORY_WIDTH);
        assert_eq!(padded, "A very long categ");
    }

    #[test]
    fn test_top_streams_renders_each_entry_ranked() {
        let streams = vec![stream("a", 300, "Talk"), stream("b", 200, "Art")];
        let text = top_streams(&streams);

        assert!(text.contains("1. a (300 viewers)"));
        assert!(text.contains("2. b (200 viewers)"));
        assert!(text.contains("- a live"));
    }

    #[test]
    fn test_top_streams_short_list_renders_all() {
        let streams = vec![stream("only", 5, "Talk")];
        let text = top_streams(&streams);
        assert!(text.contains("1. only (5 viewers)"));
        assert!(!text.contains("2. "));
    }

    #[test]
    fn test_category_table_caps_at_ten_rows() {
        let ranked: Vec<CategoryTotals> = (0u64..15)
            .map(|i| CategoryTotals {
                category: format!("cat{i}"),
                broadcasts: 1,
                viewers: 100 - i,
            })
            .collect();

        let text = category_table(&ranked);
        assert!(text.contains("| 10   |"));
        assert!(!text.contains("| 11   |"));
    }

    #[test]
    fn test_category_table_row_format() {
        let ranked = vec![CategoryTotals {
            category: "Just Chatting".to_string(),
            broadcasts: 12,
            viewers: 123_456,
        }];

        let text = category_table(&ranked);
        assert!(text.contains("| 1    | Just Chatting     | 12      |          123,456 |"));
    }

    #[test]
    fn test_random_pick_shows_full_detail() {
        let text = random_pick(&stream("woowakgood", 48_211, "Just Chatting"));
        assert!(text.contains("Streamer: woowakgood"));
        assert!(text.contains("Title: woowakgood live"));
        assert!(text.contains("Viewers: 48,211"));
        assert!(text.contains("Category: Just Chatting"));
    }
}
