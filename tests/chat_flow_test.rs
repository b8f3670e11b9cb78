mod common;

use sporttracker::dialog::machine::{
    ASK_EXERCISE_NAME, ASK_PULL_UP_MAX, ASK_SETS, ASK_SWIM_BEST_50, ASK_SWIM_DISTANCE,
    ASK_SWIM_PADDLES, ASK_SWIM_TIME, CANCELLED, NO_EXERCISES,
};
use sporttracker::dialog::DialogState;

#[tokio::test]
async fn test_add_exercise_and_record_workout() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 100);

    assert_eq!(chat.say("➕ Add exercise").await.unwrap(), ASK_EXERCISE_NAME);
    assert_eq!(
        chat.say("Squat").await.unwrap(),
        "Exercise 'Squat' added!"
    );
    chat.say("/add_exercise").await;
    chat.say("Bench press").await;

    let list = chat.say("🏋️ Record workout").await.unwrap();
    assert!(list.contains("1. Squat\n2. Bench press"));

    assert_eq!(chat.say("2").await.unwrap(), ASK_SETS);
    assert_eq!(
        chat.say("12x3@50, 15x2").await.unwrap(),
        "Workout recorded: 5 sets."
    );
    assert!(chat.state.dialogs.get(100).is_none());

    let user_id = chat.db_user_id().await;
    let workouts = chat
        .state
        .workout_repo
        .find_by_user(user_id, None, None)
        .await
        .unwrap();
    assert_eq!(workouts.len(), 1);
    let sets = &workouts[0].sets;
    let indices: Vec<_> = sets.iter().map(|s| s.set_index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert!(sets.iter().all(|s| s.exercise_name == "Bench press"));
    assert_eq!(sets[0].weight, Some(50.0));
    assert_eq!(sets[4].weight, None);
    assert_eq!(sets[4].reps, 15);
}

#[tokio::test]
async fn test_oversized_set_count_is_asked_again() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 103);
    chat.say("/add_exercise").await;
    chat.say("Plank").await;
    chat.say("/record_workout").await;
    chat.say("1").await;

    let reply = chat.say("1x4000000000").await.unwrap();

    assert!(reply.ends_with(ASK_SETS));
    assert!(matches!(
        chat.state.dialogs.get(103),
        Some(DialogState::EnterSets { .. })
    ));

    assert_eq!(
        chat.say("12x3@50kg, 10x2 slow").await.unwrap(),
        "Workout recorded: 5 sets."
    );
    let user_id = chat.db_user_id().await;
    let workouts = chat
        .state
        .workout_repo
        .find_by_user(user_id, None, None)
        .await
        .unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].sets[0].weight, Some(50.0));
    assert_eq!(workouts[0].sets[4].reps, 10);
}

#[tokio::test]
async fn test_record_workout_without_exercises() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 101);

    assert_eq!(chat.say("/record_workout").await.unwrap(), NO_EXERCISES);
    assert!(chat.state.dialogs.get(101).is_none());
}

#[tokio::test]
async fn test_wrong_exercise_number_is_asked_again() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 102);
    chat.say("/add_exercise").await;
    chat.say("Squat").await;
    chat.say("/record_workout").await;

    let reply = chat.say("5").await.unwrap();

    assert!(reply.contains("from 1 to 1"));
    assert!(matches!(
        chat.state.dialogs.get(102),
        Some(DialogState::SelectExercise { .. })
    ));
}

#[tokio::test]
async fn test_swim_flow_keeps_only_valid_values() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 200);

    assert_eq!(chat.say("🏊 Swimming").await.unwrap(), ASK_SWIM_DISTANCE);

    let reply = chat.say("-500").await.unwrap();
    assert!(reply.ends_with(ASK_SWIM_DISTANCE));
    assert_eq!(chat.state.dialogs.get(200), Some(DialogState::SwimDistance));

    assert_eq!(chat.say("1000").await.unwrap(), ASK_SWIM_TIME);

    let reply = chat.say("-60").await.unwrap();
    assert!(reply.ends_with(ASK_SWIM_TIME));
    assert_eq!(
        chat.state.dialogs.get(200),
        Some(DialogState::SwimTotalTime { distance: 1000 })
    );

    assert_eq!(chat.say("20:00").await.unwrap(), ASK_SWIM_PADDLES);
    assert_eq!(chat.say("0").await.unwrap(), ASK_SWIM_BEST_50);
    assert_eq!(
        chat.say("45").await.unwrap(),
        "Swim saved: 1000 m in 00:20:00."
    );

    let user_id = chat.db_user_id().await;
    let swims = chat.state.swimming_repo.find_by_user(user_id).await.unwrap();
    assert_eq!(swims.len(), 1);
    assert_eq!(swims[0].distance, 1000);
    assert_eq!(swims[0].total_time, 1200);
    assert_eq!(swims[0].paddles_distance, None);
    assert_eq!(swims[0].best_50m_time, Some(45));
}

#[tokio::test]
async fn test_pull_up_max_above_total_is_rejected() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 300);

    chat.say("💪 Pull-ups").await;
    assert_eq!(chat.say("10").await.unwrap(), ASK_PULL_UP_MAX);

    let reply = chat.say("12").await.unwrap();
    assert!(reply.ends_with(ASK_PULL_UP_MAX));
    assert_eq!(
        chat.state.dialogs.get(300),
        Some(DialogState::PullUpMax { total: 10 })
    );

    assert_eq!(
        chat.say("10").await.unwrap(),
        "Pull-ups saved: 10 total, best set 10."
    );

    let user_id = chat.db_user_id().await;
    let records = chat.state.pull_up_repo.find_by_user(user_id).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].max_pull_ups_in_set, 10);
}

#[tokio::test]
async fn test_cancel_mid_swim_then_next_message_is_fresh() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 400);

    chat.say("/swim").await;
    chat.say("1500").await;
    chat.say("1800").await;
    assert!(matches!(
        chat.state.dialogs.get(400),
        Some(DialogState::SwimPaddles { .. })
    ));

    assert_eq!(chat.say("❌ Cancel").await.unwrap(), CANCELLED);
    assert!(chat.state.dialogs.get(400).is_none());

    // Would have been the paddles distance; now it's ignored.
    assert_eq!(chat.say("300").await, None);

    let user_id = chat.db_user_id().await;
    assert!(chat
        .state
        .swimming_repo
        .find_by_user(user_id)
        .await
        .unwrap()
        .is_empty());

    // A menu selection right after works as usual.
    assert_eq!(chat.say("➕ Add exercise").await.unwrap(), ASK_EXERCISE_NAME);
}

#[tokio::test]
async fn test_report_with_single_pull_up_record() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 500);

    chat.say("/pullups").await;
    chat.say("25").await;
    chat.say("9").await;

    let report = chat.say("📊 Report").await.unwrap();

    assert_eq!(report.matches("Total: 25").count(), 1);
    assert_eq!(report.matches("Best set: 9").count(), 1);
    assert!(report.contains("🏊 Swimming\nNo records yet."));
    assert!(report.contains("🤸 Abs\nNo records yet."));
    assert!(report.contains("🏋️ Workouts\nNo records yet."));
}

#[tokio::test]
async fn test_report_counts_abs_sessions() {
    let pool = common::setup_test_db();
    let chat = common::TestChat::new(pool, 501);

    assert_eq!(chat.say("🤸 Abs").await.unwrap(), "Abs session recorded!");
    chat.say("/abs").await;

    let report = chat.say("/report").await.unwrap();

    assert!(report.contains("Sessions: 2"));
}

#[tokio::test]
async fn test_users_do_not_share_dialogs_or_records() {
    let pool = common::setup_test_db();
    let alice = common::TestChat::new(pool, 600);
    let bob = alice.other_user(601);

    alice.say("/pullups").await;
    alice.say("20").await;

    // No dialog for 601, so the number is ignored.
    assert_eq!(bob.say("8").await, None);

    assert_eq!(
        alice.say("8").await.unwrap(),
        "Pull-ups saved: 20 total, best set 8."
    );

    let bob_report = bob.say("/report").await.unwrap();
    assert!(bob_report.contains("💪 Pull-ups\nNo records yet."));
}
