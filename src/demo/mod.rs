//! Demo decision pipeline
//!
//! A small product-selection pipeline that exercises the recorder end to
//! end: search a catalog, filter by business rules with a full candidate
//! report, pick a winner, finalize and submit. The pipeline is an ordinary
//! caller of the recorder - it owns the business rules, the recorder only
//! captures them.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Map};
use thiserror::Error;

use crate::model::{Candidate, Trace, TraceStatus};
use crate::recorder::{Explanation, TraceRecorder};
use crate::submit::Submit;

/// A product in the mock catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: u32,
}

impl Product {
    fn new(id: &str, name: &str, price: f64, rating: f64, reviews: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            rating,
            reviews,
        }
    }

    fn data_snapshot(&self) -> Map<String, serde_json::Value> {
        let mut data = Map::new();
        data.insert("price".to_string(), json!(self.price));
        data.insert("rating".to_string(), json!(self.rating));
        data
    }
}

fn catalog() -> Vec<Product> {
    vec![
        Product::new("p1", "HydroFlask 32oz", 45.0, 4.5, 9000),
        Product::new("p2", "Cheap Bottle", 8.0, 3.2, 50),
        Product::new("p3", "Yeti Rambler", 35.0, 4.8, 5000),
        Product::new("p4", "Gold Plated Bottle", 150.0, 5.0, 2),
    ]
}

/// Demo pipeline errors.
#[derive(Debug, Error, PartialEq)]
pub enum DemoError {
    /// Every candidate was filtered out, nothing to select.
    #[error("no products survived filtering")]
    NoSurvivors,
}

const MAX_PRICE: f64 = 50.0;
const MIN_RATING: f64 = 4.0;

/// Run the demo pipeline, producing exactly one trace.
///
/// On success the trace is finalized with `success`; if selection fails the
/// trace is finalized with `failure` and the error propagates to the caller.
pub async fn run_demo_pipeline(submitter: Arc<dyn Submit>) -> Result<Trace, DemoError> {
    let mut recorder = TraceRecorder::new(submitter);

    match run_steps(&mut recorder).await {
        Ok(()) => Ok(recorder.finalize(TraceStatus::Success)),
        Err(e) => {
            recorder.finalize(TraceStatus::Failure);
            Err(e)
        }
    }
}

async fn run_steps(recorder: &mut TraceRecorder) -> Result<(), DemoError> {
    let request = json!({"query": "Best water bottle", "maxPrice": MAX_PRICE});

    // Step 1: gather candidates.
    let candidates = recorder
        .capture_step(
            "1. Candidate Search",
            request,
            async { Ok::<_, DemoError>(catalog()) },
            |found: &Vec<Product>| {
                Ok(Explanation::new(format!("Found {} items matching keywords.", found.len()))
                    .with_output(json!({"count": found.len()})))
            },
        )
        .await?;

    // Step 2: filtering, with the full accept/reject report.
    let filtered = {
        let report_source = candidates.clone();
        recorder
            .capture_step(
                "2. Apply Filters",
                json!({"filters": ["price <= 50", "rating > 4.0"]}),
                async {
                    let survivors: Vec<Product> = candidates
                        .iter()
                        .filter(|p| p.price <= MAX_PRICE && p.rating > MIN_RATING)
                        .cloned()
                        .collect();
                    Ok::<_, DemoError>(survivors)
                },
                move |survivors: &Vec<Product>| {
                    let report = report_source
                        .iter()
                        .map(|p| {
                            let price_ok = p.price <= MAX_PRICE;
                            let rating_ok = p.rating > MIN_RATING;
                            if !price_ok {
                                Candidate::rejected(
                                    p.id.as_str(),
                                    p.name.as_str(),
                                    p.data_snapshot(),
                                    format!("Price ${} > ${}", p.price, MAX_PRICE),
                                )
                            } else if !rating_ok {
                                Candidate::rejected(
                                    p.id.as_str(),
                                    p.name.as_str(),
                                    p.data_snapshot(),
                                    format!("Rating {} is too low", p.rating),
                                )
                            } else {
                                Candidate::selected(p.id.as_str(), p.name.as_str(), p.data_snapshot())
                            }
                        })
                        .collect();

                    let names: Vec<&str> = survivors.iter().map(|p| p.name.as_str()).collect();
                    Ok(Explanation::new(format!(
                        "Filtered down to {} items based on business rules.",
                        survivors.len()
                    ))
                    .with_candidates(report)
                    .with_output(json!({"survivors": names})))
                },
            )
            .await?
    };

    // Step 3: pick the winner.
    let shortlist: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
    recorder
        .capture_step(
            "3. Final Selection",
            json!({"candidates": shortlist}),
            async {
                filtered
                    .iter()
                    .max_by_key(|p| p.reviews)
                    .cloned()
                    .ok_or(DemoError::NoSurvivors)
            },
            |winner: &Product| {
                Ok(Explanation::new(format!(
                    "Selected {} because it had the highest review count.",
                    winner.name
                )))
            },
        )
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CandidateStatus;
    use crate::store::{MemoryTraceStore, TraceStore};
    use crate::submit::StoreSubmitter;

    #[tokio::test]
    async fn test_demo_pipeline_produces_one_trace() {
        let store = Arc::new(MemoryTraceStore::new());
        let submitter = Arc::new(StoreSubmitter::new(store.clone()));

        let trace = run_demo_pipeline(submitter).await.unwrap();

        assert_eq!(trace.status, TraceStatus::Success);
        assert_eq!(trace.step_count(), 3);

        let stored = store.read_recent(50);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], trace);
    }

    #[tokio::test]
    async fn test_filter_step_reports_all_candidates() {
        let store = Arc::new(MemoryTraceStore::new());
        let submitter = Arc::new(StoreSubmitter::new(store));

        let trace = run_demo_pipeline(submitter).await.unwrap();
        let report = trace.steps[1].candidates.as_ref().unwrap();

        assert_eq!(report.len(), 4);

        let selected: Vec<_> = report.iter().filter(|c| c.is_selected()).collect();
        assert_eq!(selected.len(), 2);

        let rejected: Vec<_> = report
            .iter()
            .filter(|c| c.status == CandidateStatus::Rejected)
            .collect();
        assert!(rejected.iter().all(|c| c.reason.is_some()));
    }

    #[tokio::test]
    async fn test_winner_has_highest_review_count() {
        let store = Arc::new(MemoryTraceStore::new());
        let submitter = Arc::new(StoreSubmitter::new(store));

        let trace = run_demo_pipeline(submitter).await.unwrap();
        let selection = &trace.steps[2];

        assert!(selection.reasoning.contains("HydroFlask 32oz"));
        assert_eq!(selection.output["name"], "HydroFlask 32oz");
    }
}
