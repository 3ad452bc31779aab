//! Command-line arguments, one subcommand per page.

use clap::{Parser, Subcommand};

use crate::domain::{Layout, RecordId};

/// `selectify` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "selectify",
    about = "Browse product boycott queries, recommendations, and reviews",
    version
)]
pub struct Cli {
    /// Page to show or action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Search and layout flags shared by the list pages.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Case-insensitive product-name filter.
    #[arg(long, short, default_value = "")]
    pub search: String,
    /// Cards per row: grid-1, grid-2, or grid-3.
    #[arg(long, short, default_value_t = Layout::Grid3)]
    pub layout: Layout,
}

/// Every page and action the client offers.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// The six most recent queries.
    Recent,
    /// Every query, newest first.
    Queries(ListArgs),
    /// Leave a review from a query card.
    Review {
        /// Query the review is written from.
        #[arg(value_parser = parse_record_id)]
        query_id: RecordId,
        /// Review text.
        #[arg(long)]
        text: String,
    },
    /// One query and the recommendations left on it.
    Query {
        /// Query to show.
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
    },
    /// Recommend an alternative to a query's product.
    Recommend {
        /// Query being answered.
        #[arg(value_parser = parse_record_id)]
        query_id: RecordId,
        /// Recommendation headline.
        #[arg(long)]
        title: String,
        /// Name of the alternative product.
        #[arg(long)]
        product: String,
        /// Image URL of the alternative product.
        #[arg(long)]
        image: String,
        /// Why the alternative is better.
        #[arg(long)]
        reason: String,
    },
    /// Queries you posted.
    MyQueries(ListArgs),
    /// Delete one of your queries.
    DeleteQuery {
        /// Query to delete.
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Edit one of your queries; omitted fields keep their current value.
    UpdateQuery {
        /// Query to edit.
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
        /// New product name.
        #[arg(long)]
        product_name: Option<String>,
        /// New product brand.
        #[arg(long)]
        product_brand: Option<String>,
        /// New product image URL.
        #[arg(long)]
        product_image_url: Option<String>,
        /// New query headline.
        #[arg(long)]
        query_title: Option<String>,
        /// New boycott reason.
        #[arg(long)]
        boycott_reason: Option<String>,
    },
    /// Recommendations you wrote.
    MyRecommendations(ListArgs),
    /// Delete one of your recommendations.
    DeleteRecommendation {
        /// Recommendation to delete.
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Recommendations other people left on your queries.
    RecommendationsForMe(ListArgs),
    /// Every recommendation on the board.
    WhatPeopleSay(ListArgs),
    /// Every review.
    Reviews {
        /// Case-insensitive filter on the review text.
        #[arg(long, short, default_value = "")]
        search: String,
    },
}

impl Command {
    /// Whether the command skips interactive confirmation.
    pub const fn assume_yes(&self) -> bool {
        match self {
            Self::DeleteQuery { yes, .. } | Self::DeleteRecommendation { yes, .. } => *yes,
            _ => false,
        }
    }
}

fn parse_record_id(raw: &str) -> Result<RecordId, String> {
    RecordId::new(raw).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    //! Unit tests for argument parsing.

    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("selectify").chain(args.iter().copied()))
    }

    #[rstest]
    fn list_pages_default_to_three_columns() {
        let cli = parse(&["queries"]).expect("parses");
        let Command::Queries(list) = cli.command else {
            panic!("expected queries command");
        };
        assert_eq!(list.layout, Layout::Grid3);
        assert!(list.search.is_empty());
    }

    #[rstest]
    fn layout_and_search_are_parsed() {
        let cli = parse(&["queries", "--search", "wid", "--layout", "grid-1"]).expect("parses");
        let Command::Queries(list) = cli.command else {
            panic!("expected queries command");
        };
        assert_eq!(list.layout, Layout::Grid1);
        assert_eq!(list.search, "wid");
    }

    #[rstest]
    #[case(&["queries", "--layout", "grid-9"])]
    #[case(&["query", " "])]
    #[case(&["review", "q1"])]
    fn invalid_invocations_are_rejected(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[rstest]
    #[case(&["delete-query", "q1", "--yes"], true)]
    #[case(&["delete-recommendation", "r1"], false)]
    #[case(&["recent"], false)]
    fn confirmation_skip_is_per_command(#[case] args: &[&str], #[case] expected: bool) {
        assert_eq!(parse(args).expect("parses").command.assume_yes(), expected);
    }
}
