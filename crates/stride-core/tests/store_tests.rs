//! Integration tests exercising the store against a real database file.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use stride_core::params::{GeneratePlan, PlanId, TogglePhaseAction};
use stride_core::{
    GenerationRequest, PlanContent, PlanGenerator, QuestionnaireAnswers, Result, StoreBuilder,
};
use tempfile::TempDir;

struct FixedGenerator;

#[async_trait]
impl PlanGenerator for FixedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<PlanContent> {
        let content = serde_json::json!({
            "title": "Write a novel",
            "phases": [{
                "name": "Outline",
                "keyActions": ["Sketch the premise", "Draft chapter summaries"]
            }],
            "weeklyPlans": [{
                "week": 1,
                "focus": "Premise",
                "tasks": ["Write one page"],
                "milestone": "Premise on paper"
            }],
            "routines": [{"name": "Morning pages", "frequency": "daily"}],
            "checkpoints": {"day30": ["First three chapters"]},
            "successMetrics": ["Finished manuscript"]
        });
        Ok(serde_json::from_value(content).expect("fixture content is well-formed"))
    }
}

fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("stride.db");
    (temp_dir, db_path)
}

async fn build_store(db_path: &PathBuf) -> stride_core::PlanStore {
    StoreBuilder::new()
        .with_database_path(Some(db_path))
        .with_generator(Some(Arc::new(FixedGenerator)))
        .build()
        .await
        .expect("Failed to build store")
}

#[tokio::test]
async fn progress_survives_a_restart() {
    let (_temp_dir, db_path) = create_test_environment();

    let plan_id = {
        let store = build_store(&db_path).await;
        let plan = store
            .generate_plan(&GeneratePlan {
                goal: "write a novel".to_string(),
                answers: QuestionnaireAnswers::default(),
            })
            .await
            .expect("generation should succeed");

        store
            .toggle_phase_action(&TogglePhaseAction {
                plan_id: plan.id.clone(),
                phase_index: 0,
                action_index: 0,
                action_text: "Sketch the premise".to_string(),
            })
            .await
            .expect("toggle should find the plan");

        store.flush().await;
        plan.id
    };

    let reopened = build_store(&db_path).await;
    let plan = reopened
        .get_plan(&plan_id)
        .await
        .expect("plan should be persisted");

    assert_eq!(plan.goal, "write a novel");
    assert!(plan.progress.phase_action_done(0, 0));
    // 1 of 5 completable items
    assert_eq!(plan.progress.overall_progress, 20);
    assert_eq!(plan.progress.activity_log.len(), 1);
}

#[tokio::test]
async fn deletion_is_durable() {
    let (_temp_dir, db_path) = create_test_environment();

    let plan_id = {
        let store = build_store(&db_path).await;
        let plan = store
            .generate_plan(&GeneratePlan {
                goal: "write a novel".to_string(),
                answers: QuestionnaireAnswers::default(),
            })
            .await
            .expect("generation should succeed");
        assert!(store.delete_plan(&PlanId { id: plan.id.clone() }).await);
        store.flush().await;
        plan.id
    };

    let reopened = build_store(&db_path).await;
    assert!(reopened.get_plan(&plan_id).await.is_none());
    assert!(reopened.plans().await.is_empty());
}

#[tokio::test]
async fn a_fresh_database_starts_empty() {
    let (_temp_dir, db_path) = create_test_environment();
    let store = build_store(&db_path).await;
    assert!(store.plans().await.is_empty());
    assert_eq!(store.plan_summaries().await.len(), 0);
}
