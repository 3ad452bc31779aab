//! Plain-text rendering of list pages as card grids.

use crate::domain::{Layout, Query, Recommendation, Review};

const CARD_WIDTH: usize = 38;
const COLUMN_GAP: &str = "  ";

/// Render queries as cards, `layout.columns()` per row.
pub fn queries(records: &[&Query], layout: Layout) -> String {
    let cards = records.iter().map(|query| query_card(query)).collect();
    grid(cards, layout, "No queries found.")
}

/// Render recommendations as cards.
pub fn recommendations(records: &[&Recommendation], layout: Layout) -> String {
    let cards = records
        .iter()
        .map(|recommendation| recommendation_card(recommendation))
        .collect();
    grid(cards, layout, "No recommendations found.")
}

/// Render reviews one per block.
pub fn reviews(records: &[&Review]) -> String {
    let cards = records
        .iter()
        .map(|review| {
            vec![
                format!("{} · {}", review.user_email, review.timestamp),
                review.review.clone(),
                format!("id {}", review.id),
            ]
        })
        .collect();
    grid(cards, Layout::Grid1, "No reviews yet.")
}

/// Render one query with its recommendations underneath.
pub fn query_details(query: &Query, recommendations: &[&Recommendation]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", query.query_title));
    out.push_str(&format!(
        "{} by {} · {} recommendation(s)\n",
        query.product_name, query.product_brand, query.recommendation_count
    ));
    out.push_str(&format!("Why boycott: {}\n", query.boycott_reason));
    out.push_str(&format!(
        "Posted by {} <{}> on {}\n\n",
        query.user_name, query.user_email, query.timestamp
    ));
    out.push_str("Recommendations\n");
    out.push_str(&self::recommendations(recommendations, Layout::Grid1));
    out
}

fn query_card(query: &Query) -> Vec<String> {
    vec![
        query.query_title.clone(),
        format!("{} ({})", query.product_name, query.product_brand),
        format!("{} recommendation(s)", query.recommendation_count),
        format!("{} · {}", query.user_name, query.timestamp),
        format!("id {}", query.id),
    ]
}

fn recommendation_card(recommendation: &Recommendation) -> Vec<String> {
    let details = &recommendation.details;
    vec![
        details.recommendation_title.clone(),
        format!(
            "{} instead of {}",
            details.recommended_product_name, details.product_name
        ),
        details.recommendation_reason.clone(),
        format!("{} · {}", details.recommender_name, details.timestamp),
        format!("id {} · query {}", recommendation.id, recommendation.query_id),
    ]
}

fn grid(cards: Vec<Vec<String>>, layout: Layout, empty: &str) -> String {
    if cards.is_empty() {
        return format!("{empty}\n");
    }
    let columns = layout.columns();
    let mut out = String::new();
    for row in cards.chunks(columns) {
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let cells: Vec<String> = row
                .iter()
                .map(|card| cell(card.get(line).map_or("", String::as_str), columns > 1))
                .collect();
            out.push_str(cells.join(COLUMN_GAP).trim_end());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn cell(text: &str, fixed_width: bool) -> String {
    if !fixed_width {
        return text.to_owned();
    }
    let count = text.chars().count();
    if count > CARD_WIDTH {
        let clipped: String = text.chars().take(CARD_WIDTH - 1).collect();
        format!("{clipped}…")
    } else {
        format!("{text}{}", " ".repeat(CARD_WIDTH - count))
    }
}
