//! Tests for the store mutation protocol.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Zoned;
use tempfile::TempDir;

use super::{PlanStore, StoreBuilder};
use crate::error::{Result, StoreError};
use crate::gen::{GenerationRequest, PlanGenerator};
use crate::models::{
    CheckpointDay, Checkpoints, Diagnosis, Phase, Plan, PlanContent, QuestionnaireAnswers, Routine,
    WeeklyPlan, ACTIVITY_LOG_CAP,
};
use crate::params::{
    GeneratePlan, LogRoutine, PlanId, ToggleCheckpoint, TogglePhaseAction, ToggleSuccessMetric,
    ToggleWeeklyMilestone, ToggleWeeklyTask,
};

/// Generator that returns a fixed document, or a scripted failure.
struct ScriptedGenerator {
    content: std::result::Result<PlanContent, String>,
}

#[async_trait]
impl PlanGenerator for ScriptedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<PlanContent> {
        self.content
            .clone()
            .map_err(StoreError::generation)
    }
}

/// Content with 6 completable items (2 actions, 2 tasks, 1 checkpoint item,
/// 1 metric) plus a routine and a milestone that must not count.
fn six_item_content() -> PlanContent {
    PlanContent {
        title: "Learn conversational Spanish".to_string(),
        summary: String::new(),
        diagnosis: Diagnosis::default(),
        phases: vec![Phase {
            name: "Foundations".to_string(),
            duration: "1 month".to_string(),
            objective: String::new(),
            key_actions: vec!["Learn 100 words".to_string(), "Finish unit 1".to_string()],
            deliverables: vec![],
        }],
        weekly_plans: vec![WeeklyPlan {
            week: 1,
            focus: "Basics".to_string(),
            tasks: vec!["Flashcards".to_string(), "One podcast".to_string()],
            milestone: "First conversation".to_string(),
        }],
        routines: vec![Routine {
            name: "Daily review".to_string(),
            frequency: "daily".to_string(),
            duration: "15 min".to_string(),
            description: String::new(),
        }],
        obstacles: vec![],
        checkpoints: Checkpoints {
            day30: vec!["Order food in Spanish".to_string()],
            day60: vec![],
            day90: vec![],
        },
        success_metrics: vec!["Hold a 10 minute conversation".to_string()],
        motivational_quote: String::new(),
    }
}

async fn create_test_store(content: std::result::Result<PlanContent, String>) -> (TempDir, PlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .with_generator(Some(Arc::new(ScriptedGenerator { content })))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

fn generate_params(goal: &str) -> GeneratePlan {
    GeneratePlan {
        goal: goal.to_string(),
        answers: QuestionnaireAnswers::default(),
    }
}

async fn generate_test_plan(store: &PlanStore) -> Plan {
    store
        .generate_plan(&generate_params("speak spanish"))
        .await
        .expect("generation should succeed")
}

#[tokio::test]
async fn generated_plan_is_prepended_with_empty_progress() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;

    generate_test_plan(&store).await;
    let second = generate_test_plan(&store).await;

    let plans = store.plans().await;
    assert_eq!(plans.len(), 2);
    // Newest first
    assert_eq!(plans[0].id, second.id);
    assert_eq!(plans[0].progress.overall_progress, 0);
    assert!(plans[0].progress.activity_log.is_empty());
    assert_eq!(plans[0].goal, "speak spanish");
}

#[tokio::test]
async fn failing_generation_leaves_collection_untouched() {
    let (_temp_dir, store) = create_test_store(Err("model unavailable".to_string())).await;

    let before = store.plans().await;
    let result = store.generate_plan(&generate_params("speak spanish")).await;

    assert!(matches!(result, Err(StoreError::Generation { .. })));
    let after = store.plans().await;
    assert_eq!(after.len(), before.len());
}

#[tokio::test]
async fn malformed_document_is_a_generation_failure() {
    let mut content = six_item_content();
    content.title = "   ".to_string();
    let (_temp_dir, store) = create_test_store(Ok(content)).await;

    let result = store.generate_plan(&generate_params("speak spanish")).await;

    assert!(matches!(result, Err(StoreError::Generation { .. })));
    assert!(store.plans().await.is_empty());
}

#[tokio::test]
async fn blank_goal_is_rejected_before_the_adapter_runs() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;

    let result = store.generate_plan(&generate_params("   ")).await;

    assert!(matches!(result, Err(StoreError::InvalidInput { .. })));
    assert!(store.plans().await.is_empty());
}

#[tokio::test]
async fn toggling_an_action_updates_progress_and_logs() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let plan = generate_test_plan(&store).await;

    let updated = store
        .toggle_phase_action(&TogglePhaseAction {
            plan_id: plan.id.clone(),
            phase_index: 0,
            action_index: 0,
            action_text: "Learn 100 words".to_string(),
        })
        .await
        .expect("plan should be found");

    assert!(updated.progress.phase_action_done(0, 0));
    // 1 of 6 items, rounded half-up
    assert_eq!(updated.progress.overall_progress, 17);
    assert_eq!(updated.progress.activity_log.len(), 1);
    assert_eq!(updated.progress.activity_log[0].description, "Learn 100 words");
    assert!(updated.progress.last_activity_at.is_some());
}

#[tokio::test]
async fn toggling_twice_restores_the_original_state() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let plan = generate_test_plan(&store).await;

    let params = TogglePhaseAction {
        plan_id: plan.id.clone(),
        phase_index: 0,
        action_index: 0,
        action_text: "Learn 100 words".to_string(),
    };
    store.toggle_phase_action(&params).await.expect("first toggle");
    let restored = store.toggle_phase_action(&params).await.expect("second toggle");

    assert!(!restored.progress.phase_action_done(0, 0));
    assert_eq!(restored.progress.overall_progress, 0);
    // The uncheck logs too, with the same kind and description.
    assert_eq!(restored.progress.activity_log.len(), 2);
    assert_eq!(restored.progress.activity_log[0].description, "Learn 100 words");
}

#[tokio::test]
async fn every_operation_is_a_noop_for_unknown_ids() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let plan = generate_test_plan(&store).await;
    let before = store.plans().await;

    let missing = "01J0000000000000000000000M".to_string();
    assert!(store
        .toggle_phase_action(&TogglePhaseAction {
            plan_id: missing.clone(),
            phase_index: 0,
            action_index: 0,
            action_text: "x".to_string(),
        })
        .await
        .is_none());
    assert!(store
        .toggle_weekly_task(&ToggleWeeklyTask {
            plan_id: missing.clone(),
            week_index: 0,
            task_index: 0,
            task_text: "x".to_string(),
        })
        .await
        .is_none());
    assert!(store
        .toggle_weekly_milestone(&ToggleWeeklyMilestone {
            plan_id: missing.clone(),
            week_index: 0,
            milestone_text: "x".to_string(),
        })
        .await
        .is_none());
    assert!(store
        .toggle_checkpoint(&ToggleCheckpoint {
            plan_id: missing.clone(),
            day: CheckpointDay::Day30,
            item_index: 0,
            item_text: "x".to_string(),
        })
        .await
        .is_none());
    assert!(store
        .toggle_success_metric(&ToggleSuccessMetric {
            plan_id: missing.clone(),
            metric_index: 0,
            metric_text: "x".to_string(),
        })
        .await
        .is_none());
    assert!(store
        .log_routine(&LogRoutine {
            plan_id: missing.clone(),
            routine_index: 0,
            routine_name: "x".to_string(),
        })
        .await
        .is_none());
    assert!(!store.delete_plan(&PlanId { id: missing }).await);

    let after = store.plans().await;
    assert_eq!(after, before);
    assert_eq!(after[0].id, plan.id);
}

#[tokio::test]
async fn routine_logging_toggles_today_and_never_moves_the_percentage() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let plan = generate_test_plan(&store).await;
    let today = Zoned::now().date();

    let params = LogRoutine {
        plan_id: plan.id.clone(),
        routine_index: 0,
        routine_name: "Daily review".to_string(),
    };

    let logged = store.log_routine(&params).await.expect("first log");
    assert!(logged.progress.routine_logged(0, today));
    assert_eq!(logged.progress.overall_progress, 0);
    assert_eq!(logged.progress.activity_log[0].description, "Daily review");

    // Second log on the same day removes the date again.
    let unlogged = store.log_routine(&params).await.expect("second log");
    assert!(!unlogged.progress.routine_logged(0, today));

    // And a third re-adds it.
    let relogged = store.log_routine(&params).await.expect("third log");
    assert!(relogged.progress.routine_logged(0, today));
    assert_eq!(relogged.progress.overall_progress, 0);
}

#[tokio::test]
async fn activity_log_stays_bounded_across_many_toggles() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let plan = generate_test_plan(&store).await;

    for i in 0..150 {
        store
            .toggle_phase_action(&TogglePhaseAction {
                plan_id: plan.id.clone(),
                phase_index: 0,
                action_index: 0,
                action_text: format!("toggle {i}"),
            })
            .await
            .expect("toggle should find the plan");
    }

    let current = store.get_plan(&plan.id).await.expect("plan exists");
    assert_eq!(current.progress.activity_log.len(), ACTIVITY_LOG_CAP);
    assert_eq!(current.progress.activity_log[0].description, "toggle 149");
    assert_eq!(current.progress.activity_log[99].description, "toggle 50");
}

#[tokio::test]
async fn checkpoint_and_metric_toggles_reach_full_completion() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let plan = generate_test_plan(&store).await;

    store
        .toggle_phase_action(&TogglePhaseAction {
            plan_id: plan.id.clone(),
            phase_index: 0,
            action_index: 0,
            action_text: "Learn 100 words".to_string(),
        })
        .await
        .expect("toggle");
    store
        .toggle_phase_action(&TogglePhaseAction {
            plan_id: plan.id.clone(),
            phase_index: 0,
            action_index: 1,
            action_text: "Finish unit 1".to_string(),
        })
        .await
        .expect("toggle");
    store
        .toggle_weekly_task(&ToggleWeeklyTask {
            plan_id: plan.id.clone(),
            week_index: 0,
            task_index: 0,
            task_text: "Flashcards".to_string(),
        })
        .await
        .expect("toggle");
    store
        .toggle_weekly_task(&ToggleWeeklyTask {
            plan_id: plan.id.clone(),
            week_index: 0,
            task_index: 1,
            task_text: "One podcast".to_string(),
        })
        .await
        .expect("toggle");
    store
        .toggle_checkpoint(&ToggleCheckpoint {
            plan_id: plan.id.clone(),
            day: CheckpointDay::Day30,
            item_index: 0,
            item_text: "Order food in Spanish".to_string(),
        })
        .await
        .expect("toggle");
    let done = store
        .toggle_success_metric(&ToggleSuccessMetric {
            plan_id: plan.id.clone(),
            metric_index: 0,
            metric_text: "Hold a 10 minute conversation".to_string(),
        })
        .await
        .expect("toggle");

    assert_eq!(done.progress.overall_progress, 100);
    assert_eq!(done.progress.activity_log.len(), 6);
}

#[tokio::test]
async fn deleting_a_plan_removes_it_from_the_collection() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let first = generate_test_plan(&store).await;
    let second = generate_test_plan(&store).await;

    assert!(store.delete_plan(&PlanId { id: first.id.clone() }).await);

    let plans = store.plans().await;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, second.id);
    assert!(store.get_plan(&first.id).await.is_none());
}

#[tokio::test]
async fn observers_see_the_collection_after_each_commit() {
    let (_temp_dir, store) = create_test_store(Ok(six_item_content())).await;
    let mut observer = store.subscribe();

    let plan = generate_test_plan(&store).await;
    observer.changed().await.expect("store still alive");
    assert_eq!(observer.borrow_and_update().len(), 1);

    store
        .toggle_phase_action(&TogglePhaseAction {
            plan_id: plan.id.clone(),
            phase_index: 0,
            action_index: 0,
            action_text: "Learn 100 words".to_string(),
        })
        .await
        .expect("toggle");
    observer.changed().await.expect("store still alive");
    assert_eq!(observer.borrow_and_update()[0].progress.overall_progress, 17);
}
