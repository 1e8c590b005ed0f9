//! Plain-text rendering of collection view models.

use octofit_core::{
    ActivityCard, CollectionViewModel, DerivedEntry, LeaderboardTeam, TeamCard, UserRow,
    ViewBody, WorkoutCard,
};

pub fn render(view: &CollectionViewModel) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", view.title)];
    match &view.body {
        ViewBody::Loading { text } => lines.push(text.clone()),
        ViewBody::Failed { banner } => lines.push(banner.clone()),
        ViewBody::Empty { notice } => {
            lines.push(format!("{notice} - Check if the API is running and populated with test data."));
        }
        ViewBody::Entries(entries) => {
            lines.push(format!("{} {}", entries.len(), view.resource.noun()));
            for entry in entries {
                render_entry(entry, &mut lines);
            }
        }
    }
    lines
}

fn render_entry(entry: &DerivedEntry, lines: &mut Vec<String>) {
    match entry {
        DerivedEntry::User(user) => render_user(user, lines),
        DerivedEntry::Activity(card) => render_activity(card, lines),
        DerivedEntry::Team(card) => render_team(card, lines),
        DerivedEntry::Workout(card) => render_workout(card, lines),
        DerivedEntry::Leaderboard(team) => render_leaderboard(team, lines),
    }
}

fn render_user(user: &UserRow, lines: &mut Vec<String>) {
    lines.push(format!(
        "[{}] {} <{}> {} {}",
        user.id, user.username, user.email, user.first_name, user.last_name
    ));
}

fn render_activity(card: &ActivityCard, lines: &mut Vec<String>) {
    lines.push(format!("* {} ({})", card.title, card.activity_type));
    lines.push(format!(
        "  {} min | {} cal | {} km | intensity {} [{}]",
        card.duration_minutes,
        card.calories_burned,
        card.distance_km,
        card.intensity,
        card.intensity_color.css_class()
    ));
    if !card.location.is_empty() {
        lines.push(format!("  at {}", card.location));
    }
    lines.push(format!("  {}", card.date));
}

fn render_team(card: &TeamCard, lines: &mut Vec<String>) {
    lines.push(format!("* {} (ID: {})", card.name, card.id));
    if !card.description.is_empty() {
        lines.push(format!("  {}", card.description));
    }
    lines.push(format!("  owner {} | {} members", card.owner, card.members_count));
}

fn render_workout(card: &WorkoutCard, lines: &mut Vec<String>) {
    lines.push(format!("* {}", card.title));
    lines.push(format!(
        "  {} [{}] | {} [{}] | {} min | {} cal",
        card.category,
        card.category_color.css_class(),
        card.difficulty,
        card.difficulty_color.css_class(),
        card.duration_minutes,
        card.calories
    ));
    if !card.equipment.is_empty() {
        lines.push(format!("  equipment: {}", card.equipment));
    }
}

fn render_leaderboard(team: &LeaderboardTeam, lines: &mut Vec<String>) {
    lines.push(format!("Team: {}", team.name));
    if team.entries.is_empty() {
        lines.push("  No entries in this leaderboard".to_string());
        return;
    }
    for row in &team.entries {
        let marker = if row.decoration.podium { ">" } else { " " };
        lines.push(format!(
            "{marker} {} {} {} | {} pts | {} activities | {} min | {} cal",
            row.decoration.medal,
            row.rank,
            row.user,
            row.points,
            row.activities_count,
            row.total_duration_minutes,
            row.total_calories_burned
        ));
    }
}
