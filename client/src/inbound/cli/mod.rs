//! Terminal front end: each subcommand drives one page controller and
//! prints the resulting list.

mod args;
pub mod render;
mod terminal;

use std::io::{self, Write};

use tracing::warn;

pub use args::{Cli, Command, ListArgs};
pub use terminal::{PromptConfirmation, TerminalNotifier};

use crate::domain::{
    ClientContext, ClientError, DeleteOutcome, HOME_RECENT_LIMIT, Layout, ListSource, ListStore,
    ListView, LoadOutcome, MutationActions, Query, QuerySource, QueryUpdateForm,
    RecommendationForm, RecommendationSource, RecordId, ReviewForm, ReviewSource,
};

/// Failures reported by a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A domain operation failed; the user has already been notified.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// The referenced record is not among the loaded ones.
    #[error("no {what} with id {id} was found")]
    NotFound {
        /// Kind of record.
        what: &'static str,
        /// Identifier that was looked up.
        id: RecordId,
    },
    /// Writing the page failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Run `command` against `context`, writing the page to `out`.
///
/// # Errors
///
/// Returns an error when a load or mutation fails, the session is missing
/// for a personal page, or `out` cannot be written.
pub async fn run<W: Write>(
    command: Command,
    context: &ClientContext,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        Command::Recent => {
            let store = loaded(context, Some(QuerySource::All), "view queries").await?;
            let visible = ListView::default().recent(store.records(), HOME_RECENT_LIMIT);
            write!(out, "{}", render::queries(&visible, Layout::Grid3))?;
        }
        Command::Queries(list) => show_queries(context, Some(QuerySource::All), &list, out).await?,
        Command::MyQueries(list) => {
            let source = QuerySource::owned_by(&context.session);
            show_queries(context, source, &list, out).await?;
        }
        Command::Review { query_id, text } => {
            let mut form = ReviewForm::new(query_id);
            form.set_field("review", text)?;
            form.submit(context).await?;
        }
        Command::Query { id } => {
            let query = fetch_query(context, &id).await?;
            let store = loaded(
                context,
                Some(RecommendationSource::ForQuery { query_id: id }),
                "view recommendations",
            )
            .await?;
            let visible = ListView::default().apply(store.records());
            write!(out, "{}", render::query_details(&query, &visible))?;
        }
        Command::Recommend {
            query_id,
            title,
            product,
            image,
            reason,
        } => {
            let parent = fetch_query(context, &query_id).await?;
            let mut store = loaded(
                context,
                Some(RecommendationSource::ForQuery { query_id }),
                "view recommendations",
            )
            .await?;
            let mut form = RecommendationForm::new(parent);
            form.set_field("recommendationTitle", title)?;
            form.set_field("recommendedProductName", product)?;
            form.set_field("recommendedProductImage", image)?;
            form.set_field("recommendationReason", reason)?;
            form.submit(context, &mut store).await?;
            let visible = ListView::default().apply(store.records());
            write!(out, "{}", render::query_details(form.parent(), &visible))?;
        }
        Command::DeleteQuery { id, .. } => {
            let mut store =
                loaded(context, QuerySource::owned_by(&context.session), "delete a query").await?;
            if store.find(&id).is_none() {
                return Err(CommandError::NotFound { what: "query", id });
            }
            let outcome = MutationActions::new(context)
                .delete_query(&mut store, &id)
                .await?;
            if outcome == DeleteOutcome::Cancelled {
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
            let visible = ListView::default().apply(store.records());
            write!(out, "{}", render::queries(&visible, Layout::Grid3))?;
        }
        Command::UpdateQuery {
            id,
            product_name,
            product_brand,
            product_image_url,
            query_title,
            boycott_reason,
        } => {
            let mut form = QueryUpdateForm::load(context, id).await?;
            let edits = [
                ("productName", product_name),
                ("productBrand", product_brand),
                ("productImageUrl", product_image_url),
                ("queryTitle", query_title),
                ("boycottReason", boycott_reason),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    form.set_field(field, value)?;
                }
            }
            let updated = form.submit(context, None).await?;
            writeln!(out, "→ {}", updated.navigate_to.path())?;
            show_queries(context, Some(QuerySource::All), &ListArgs::default(), out).await?;
        }
        Command::MyRecommendations(list) => {
            let source = RecommendationSource::authored_by(&context.session);
            show_recommendations(context, source, &list, out).await?;
        }
        Command::DeleteRecommendation { id, .. } => {
            let mut store = loaded(
                context,
                RecommendationSource::authored_by(&context.session),
                "delete a recommendation",
            )
            .await?;
            let Some(query_id) = store.find(&id).map(|found| found.query_id.clone()) else {
                return Err(CommandError::NotFound {
                    what: "recommendation",
                    id,
                });
            };
            let outcome = MutationActions::new(context)
                .delete_recommendation(&mut store, &id, &query_id)
                .await?;
            match outcome {
                DeleteOutcome::Cancelled => writeln!(out, "Cancelled.")?,
                DeleteOutcome::Deleted { .. } => {
                    let visible = ListView::default().apply(store.records());
                    write!(out, "{}", render::recommendations(&visible, Layout::Grid3))?;
                }
            }
        }
        Command::RecommendationsForMe(list) => {
            let source = RecommendationSource::on_queries_owned_by(&context.session);
            show_recommendations(context, source, &list, out).await?;
        }
        Command::WhatPeopleSay(list) => {
            show_recommendations(context, Some(RecommendationSource::All), &list, out).await?;
        }
        Command::Reviews { search } => {
            let store = loaded(context, Some(ReviewSource::All), "view reviews").await?;
            let visible = ListView::new(search, Layout::Grid1).apply(store.records());
            write!(out, "{}", render::reviews(&visible))?;
        }
    }
    Ok(())
}

/// Load `source` into a fresh store, turning a skipped or failed load into
/// an error.
async fn loaded<S: ListSource>(
    context: &ClientContext,
    source: Option<S>,
    action: &'static str,
) -> Result<ListStore<S>, CommandError> {
    let mut store = ListStore::new(context);
    match store.load_when_ready(source).await {
        LoadOutcome::Loaded { .. } => Ok(store),
        LoadOutcome::Failed { error } => Err(ClientError::from(error).into()),
        LoadOutcome::Skipped => {
            let error = ClientError::MissingSession { action };
            context.notifier.error(&error.to_string());
            Err(error.into())
        }
    }
}

async fn fetch_query(context: &ClientContext, id: &RecordId) -> Result<Query, CommandError> {
    context.api.fetch_query(id).await.map_err(|error| {
        warn!(%id, %error, "query fetch failed");
        context.notifier.error("Error fetching query");
        CommandError::from(ClientError::from(error))
    })
}

async fn show_queries<W: Write>(
    context: &ClientContext,
    source: Option<QuerySource>,
    list: &ListArgs,
    out: &mut W,
) -> Result<(), CommandError> {
    let store = loaded(context, source, "view your queries").await?;
    let view = ListView::new(list.search.as_str(), list.layout);
    let visible = view.apply(store.records());
    write!(out, "{}", render::queries(&visible, view.layout()))?;
    Ok(())
}

async fn show_recommendations<W: Write>(
    context: &ClientContext,
    source: Option<RecommendationSource>,
    list: &ListArgs,
    out: &mut W,
) -> Result<(), CommandError> {
    let store = loaded(context, source, "view your recommendations").await?;
    let view = ListView::new(list.search.as_str(), list.layout);
    let visible = view.apply(store.records());
    write!(out, "{}", render::recommendations(&visible, view.layout()))?;
    Ok(())
}
