// End to end in memory test for the scheduling flow: the admin saves a week,
// employees read their personal shift lists back.

use std::collections::HashMap;
use std::sync::Arc;

use rooster::adapters::in_memory::in_memory_schedule_store::InMemoryScheduleStore;
use rooster::application::command_handlers::save_schedule_handler::SaveScheduleHandler;
use rooster::application::query_handlers::schedule_queries::ScheduleQueries;
use rooster::core::week::WeekKey;
use rstest::rstest;

struct Scheduling {
    save: SaveScheduleHandler<InMemoryScheduleStore>,
    queries: ScheduleQueries<InMemoryScheduleStore>,
}

fn make_scheduling() -> Scheduling {
    let store = Arc::new(InMemoryScheduleStore::new());
    Scheduling {
        save: SaveScheduleHandler::new(store.clone()),
        queries: ScheduleQueries::new(store),
    }
}

fn entries(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[rstest]
#[tokio::test]
async fn it_should_show_a_saved_shift_to_its_employee_only() {
    let scheduling = make_scheduling();
    let week: WeekKey = "2025-W10".parse().unwrap();

    scheduling
        .save
        .handle(&week, entries(&[("maandag_09:00-13:00", "anna")]))
        .await
        .expect("expected the save to succeed");

    let anna = scheduling
        .queries
        .shifts_for_employee(&week, "anna")
        .await
        .unwrap();
    assert_eq!(anna.len(), 1);
    assert_eq!(anna[0].day(), "maandag");
    assert_eq!(anna[0].time_slot(), "09:00-13:00");

    let tom = scheduling
        .queries
        .shifts_for_employee(&week, "tom")
        .await
        .unwrap();
    assert!(tom.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_round_trip_exactly_the_non_empty_assignments() {
    let scheduling = make_scheduling();
    let week: WeekKey = "2025-W10".parse().unwrap();

    scheduling
        .save
        .handle(
            &week,
            entries(&[
                ("maandag_09:00-13:00", "anna"),
                ("woensdag_13:00-17:00", "tom"),
                ("vrijdag_17:00-21:00", ""),
            ]),
        )
        .await
        .unwrap();

    let saved = scheduling.queries.week(&week).await.unwrap().entries();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved.get("maandag_09:00-13:00"), Some(&"anna".to_string()));
    assert_eq!(saved.get("woensdag_13:00-17:00"), Some(&"tom".to_string()));
    assert!(!saved.contains_key("vrijdag_17:00-21:00"));
}

#[rstest]
#[tokio::test]
async fn it_should_scope_schedules_to_their_week() {
    let scheduling = make_scheduling();
    let week10: WeekKey = "2025-W10".parse().unwrap();
    let week11: WeekKey = "2025-W11".parse().unwrap();

    scheduling
        .save
        .handle(&week10, entries(&[("maandag_09:00-13:00", "anna")]))
        .await
        .unwrap();

    assert!(scheduling.queries.week(&week11).await.unwrap().is_empty());
    assert!(
        scheduling
            .queries
            .shifts_for_employee(&week11, "anna")
            .await
            .unwrap()
            .is_empty()
    );
}
