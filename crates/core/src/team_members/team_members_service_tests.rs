use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::errors::Error;
use crate::goals::{GoalService, GoalServiceTrait};
use crate::team_members::{Mood, TeamMemberService, TeamMemberServiceTrait};
use crate::test_utils::InMemoryStore;

fn setup() -> (Arc<InMemoryStore>, TeamMemberService) {
    let store = Arc::new(InMemoryStore::with_members(&[
        (1, "Carol"),
        (2, "Alice"),
        (3, "Bob"),
    ]));
    let service = TeamMemberService::new(store.clone());
    (store, service)
}

#[test]
fn test_list_all_is_alphabetical() {
    let (_store, service) = setup();

    for include_goals in [false, true] {
        let names: Vec<String> = service
            .list_all(include_goals)
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}

#[tokio::test]
async fn test_list_all_goals_only_when_requested() {
    let (store, service) = setup();
    let goals = GoalService::new(store.clone(), store.clone());
    goals.create_goal(2, "first".to_string()).await.unwrap();
    goals.create_goal(2, "second".to_string()).await.unwrap();

    let without = service.list_all(false).unwrap();
    assert!(without.iter().all(|m| m.goals.is_empty()));

    let with = service.list_all(true).unwrap();
    let alice = with.iter().find(|m| m.id == 2).unwrap();
    assert_eq!(alice.goals.len(), 2);
    assert!(alice.goals[0].created_at >= alice.goals[1].created_at);
    assert_eq!(alice.goals[0].goal_text, "second");
}

#[tokio::test]
async fn test_update_mood_sets_mood_and_timestamp_together() {
    let (store, service) = setup();

    let updated = service.update_mood(3, Mood::Happy).await.unwrap();
    assert_eq!(updated.current_mood, Some(Mood::Happy));
    assert!(updated.mood_updated_at.is_some());

    let stored = store
        .members
        .lock()
        .unwrap()
        .iter()
        .find(|m| m.id == 3)
        .cloned()
        .unwrap();
    assert_eq!(stored.current_mood, updated.current_mood);
    assert_eq!(stored.mood_updated_at, updated.mood_updated_at);
}

#[tokio::test]
async fn test_update_mood_timestamp_is_non_decreasing() {
    let (_store, service) = setup();

    let first = service.update_mood(1, Mood::Neutral).await.unwrap();
    let second = service.update_mood(1, Mood::Stressed).await.unwrap();
    assert!(second.mood_updated_at.unwrap() >= first.mood_updated_at.unwrap());
    assert_eq!(second.current_mood, Some(Mood::Stressed));
}

#[tokio::test]
async fn test_update_mood_keeps_later_stored_timestamp() {
    let (store, service) = setup();
    let future = Utc::now() + Duration::hours(1);
    {
        let mut members = store.members.lock().unwrap();
        let member = members.iter_mut().find(|m| m.id == 1).unwrap();
        member.current_mood = Some(Mood::Content);
        member.mood_updated_at = Some(future);
    }

    let updated = service.update_mood(1, Mood::Frustrated).await.unwrap();
    assert_eq!(updated.mood_updated_at, Some(future));
}

#[tokio::test]
async fn test_update_mood_unknown_member() {
    let (store, service) = setup();
    let err = service.update_mood(404, Mood::Happy).await.unwrap_err();
    assert!(matches!(err, Error::TeamMemberNotFound(404)));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_mood_round_trips_through_str() {
    for mood in Mood::ALL {
        assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
    }
    assert!("Ecstatic".parse::<Mood>().is_err());
    assert!("happy".parse::<Mood>().is_err());
}

#[test]
fn test_team_member_serializes_camel_case() {
    let member = crate::team_members::TeamMember {
        id: 1,
        name: "Alice".to_string(),
        current_mood: None,
        mood_updated_at: None,
        goals: Vec::new(),
    };
    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["currentMood"], serde_json::Value::Null);
    assert_eq!(json["moodUpdatedAt"], serde_json::Value::Null);
    assert_eq!(json["goals"], serde_json::json!([]));
}
