use octofit_core::{
    update, CollectionState, CollectionViewModel, DerivedEntry, Environment, Msg, Palette,
    Record, Resource, ViewBody, ViewState,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn ready(resource: Resource, values: Vec<Value>) -> CollectionViewModel {
    let state = CollectionState::new(resource, &Environment::local());
    let (state, _) = update(state, Msg::Activated);
    let data = values.into_iter().map(Record::new).collect();
    let (state, _) = update(state, Msg::LoadSucceeded(data));
    state.view()
}

#[test]
fn loading_view_shows_indicator() {
    let view = CollectionViewModel::derive(Resource::Workouts, &ViewState::Loading);
    assert_eq!(
        view.body,
        ViewBody::Loading {
            text: "Loading workouts...".to_string()
        }
    );
}

#[test]
fn failed_view_prefixes_error() {
    let view = CollectionViewModel::derive(
        Resource::Users,
        &ViewState::Failed("HTTP error! status: 404".to_string()),
    );
    assert_eq!(
        view.body,
        ViewBody::Failed {
            banner: "Error! HTTP error! status: 404".to_string()
        }
    );
}

#[test]
fn empty_ready_view_shows_notice() {
    let view = ready(Resource::Leaderboard, Vec::new());
    assert_eq!(
        view.body,
        ViewBody::Empty {
            notice: "No leaderboards found".to_string()
        }
    );
    assert!(view.entries().is_empty());
}

#[test]
fn team_entry_capitalizes_name() {
    let view = ready(
        Resource::Teams,
        vec![json!({ "id": 1, "name": "alpha", "owner_name": "Bo" })],
    );
    let [DerivedEntry::Team(team)] = view.entries() else {
        panic!("expected one team entry, got {:?}", view.body);
    };
    assert_eq!(team.name, "Alpha");
    assert_eq!(team.owner, "Bo");
    assert_eq!(team.members_count, "0");
    assert_eq!(team.id, "1");
}

#[test]
fn team_without_owner_name_uses_owner_id() {
    let view = ready(Resource::Teams, vec![json!({ "id": 5, "owner": 12 })]);
    let [DerivedEntry::Team(team)] = view.entries() else {
        panic!("expected one team entry");
    };
    assert_eq!(team.name, "Team 5");
    assert_eq!(team.owner, "Owner #12");
}

#[test]
fn leaderboard_entries_are_sorted_and_decorated() {
    let view = ready(
        Resource::Leaderboard,
        vec![json!({
            "id": 3,
            "name": "rockets",
            "leaderboard_entries": [
                { "rank": 3, "user_name": "cy", "points": 10 },
                { "rank": 1, "user": 9, "points": 30, "total_calories_burned": 812.5 },
                { "rank": 2, "user_name": "bo", "points": 20 }
            ]
        })],
    );
    let [DerivedEntry::Leaderboard(team)] = view.entries() else {
        panic!("expected one leaderboard entry");
    };
    assert_eq!(team.name, "Rockets");

    let rows: Vec<_> = team
        .entries
        .iter()
        .map(|row| (row.rank.as_str(), row.decoration.medal, row.user.as_str()))
        .collect();
    assert_eq!(rows, vec![("1", "🥇", "User #9"), ("2", "🥈", "bo"), ("3", "🥉", "cy")]);
    assert_eq!(team.entries[0].total_calories_burned, "812.5");
    assert_eq!(team.entries[1].total_duration_minutes, "0");
}

#[test]
fn leaderboard_team_without_entries_is_kept() {
    let view = ready(Resource::Leaderboard, vec![json!({ "id": 4 })]);
    let [DerivedEntry::Leaderboard(team)] = view.entries() else {
        panic!("expected one leaderboard entry");
    };
    assert_eq!(team.name, "Team 4");
    assert!(team.entries.is_empty());
}

#[test]
fn activity_card_derives_color_and_date() {
    let view = ready(
        Resource::Activities,
        vec![json!({
            "title": "Morning run",
            "activity_type": "running",
            "duration_minutes": 30,
            "calories_burned": null,
            "intensity": "High",
            "activity_date": "2024-01-15T07:00:00Z"
        })],
    );
    let [DerivedEntry::Activity(card)] = view.entries() else {
        panic!("expected one activity entry");
    };
    assert_eq!(card.intensity_color, Palette::Danger);
    assert_eq!(card.duration_minutes, "30");
    assert_eq!(card.calories_burned, "0");
    assert_eq!(card.date, "Mon, Jan 15, 2024");
}

#[test]
fn activity_with_bad_date_still_renders() {
    let view = ready(
        Resource::Activities,
        vec![json!({ "title": "x", "activity_date": "not a date" })],
    );
    let [DerivedEntry::Activity(card)] = view.entries() else {
        panic!("expected one activity entry");
    };
    assert_eq!(card.date, "Invalid Date");
    assert_eq!(card.intensity_color, Palette::Secondary);
}

#[test]
fn workout_card_maps_category_and_difficulty() {
    let view = ready(
        Resource::Workouts,
        vec![json!({
            "title": "Burpees",
            "category": "HIIT",
            "difficulty": "advanced",
            "estimated_duration_minutes": 20
        })],
    );
    let [DerivedEntry::Workout(card)] = view.entries() else {
        panic!("expected one workout entry");
    };
    assert_eq!(card.category_color, Palette::Danger);
    assert_eq!(card.difficulty_color, Palette::Danger);
    assert_eq!(card.duration_minutes, "20");
    assert_eq!(card.calories, "0");
}

#[test]
fn ready_list_keeps_every_record_in_order() {
    let view = ready(
        Resource::Users,
        vec![
            json!({ "id": 2, "username": "b" }),
            json!("not an object"),
            json!({ "id": 1, "username": "a" }),
        ],
    );
    let ids: Vec<_> = view
        .entries()
        .iter()
        .map(|entry| match entry {
            DerivedEntry::User(user) => user.id.clone(),
            other => panic!("unexpected entry {other:?}"),
        })
        .collect();
    assert_eq!(ids, vec!["2", "unknown", "1"]);
}
