//! Shared fixtures for domain unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::ports::{FixedConfirmation, MockSelectifyApi, RecordingNotifier};
use super::{
    ClientContext, Query, Recommendation, RecommendationDetails, RecordId, Session, SessionUser,
    Timestamp,
};

pub(crate) const OWNER_EMAIL: &str = "ana@example.com";

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn record_id(raw: &str) -> RecordId {
    RecordId::new(raw).expect("valid fixture id")
}

pub(crate) fn signed_in() -> Session {
    Session::signed_in(SessionUser {
        email: OWNER_EMAIL.to_owned(),
        display_name: "Ana".to_owned(),
        photo_url: "https://img.example/ana.png".to_owned(),
        uid: "uid-ana".to_owned(),
    })
}

pub(crate) fn query(id: &str, product_name: &str, timestamp: &str) -> Query {
    Query {
        id: record_id(id),
        user_email: OWNER_EMAIL.to_owned(),
        user_name: "Ana".to_owned(),
        user_image: String::new(),
        product_name: product_name.to_owned(),
        product_brand: "Acme".to_owned(),
        product_image_url: "https://img.example/product.png".to_owned(),
        query_title: format!("Alternatives to {product_name}?"),
        boycott_reason: "Labour practices".to_owned(),
        recommendation_count: 0,
        timestamp: Timestamp::parse(timestamp),
    }
}

pub(crate) fn recommendation(id: &str, parent: &Query, timestamp: &str) -> Recommendation {
    Recommendation {
        id: record_id(id),
        query_id: parent.id.clone(),
        details: RecommendationDetails {
            recommendation_title: "Try this".to_owned(),
            recommended_product_name: "Sprocket".to_owned(),
            recommended_product_image: "https://img.example/sprocket.png".to_owned(),
            recommendation_reason: "Ethically made".to_owned(),
            recommender_email: "bo@example.com".to_owned(),
            recommender_name: "Bo".to_owned(),
            timestamp: Timestamp::parse(timestamp),
            ..RecommendationDetails::for_parent(parent)
        },
    }
}

/// Context over `api` with a recording notifier and a fixed confirmation.
pub(crate) fn context(
    api: MockSelectifyApi,
    confirm: bool,
    session: Session,
) -> (ClientContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let context = ClientContext::new(
        Arc::new(api),
        notifier.clone(),
        Arc::new(FixedConfirmation(confirm)),
        fixture_clock(),
        session,
    );
    (context, notifier)
}
