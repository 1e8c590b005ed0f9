use crate::derive::{
    category_color, decorate_rank, difficulty_color, display_name, format_date, intensity_color,
    number_or_zero, sort_by_rank, Palette, RankDecoration,
};
use crate::{Record, Resource, ViewState};

/// What a collection view renders right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionViewModel {
    pub resource: Resource,
    pub title: String,
    pub body: ViewBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Loading { text: String },
    Failed { banner: String },
    Empty { notice: String },
    Entries(Vec<DerivedEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivedEntry {
    User(UserRow),
    Activity(ActivityCard),
    Team(TeamCard),
    Workout(WorkoutCard),
    Leaderboard(LeaderboardTeam),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub title: String,
    pub description: String,
    pub activity_type: String,
    pub duration_minutes: String,
    pub calories_burned: String,
    pub distance_km: String,
    pub intensity: String,
    pub intensity_color: Palette,
    pub location: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub members_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutCard {
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_color: Palette,
    pub difficulty: String,
    pub difficulty_color: Palette,
    pub duration_minutes: String,
    pub calories: String,
    pub equipment: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardTeam {
    pub id: String,
    pub name: String,
    /// Sorted by rank ascending.
    pub entries: Vec<LeaderboardRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: String,
    pub decoration: RankDecoration,
    pub user: String,
    pub points: String,
    pub activities_count: String,
    pub total_duration_minutes: String,
    pub total_calories_burned: String,
}

impl CollectionViewModel {
    pub fn derive(resource: Resource, state: &ViewState<Record>) -> Self {
        let noun = resource.noun();
        let body = match state {
            ViewState::Loading => ViewBody::Loading {
                text: format!("Loading {noun}..."),
            },
            ViewState::Failed(message) => ViewBody::Failed {
                banner: format!("Error! {message}"),
            },
            ViewState::Ready(records) if records.is_empty() => ViewBody::Empty {
                notice: format!("No {noun} found"),
            },
            ViewState::Ready(records) => ViewBody::Entries(
                records
                    .iter()
                    .map(|record| DerivedEntry::derive(resource, record))
                    .collect(),
            ),
        };
        Self {
            resource,
            title: resource.title().to_string(),
            body,
        }
    }

    pub fn entries(&self) -> &[DerivedEntry] {
        match &self.body {
            ViewBody::Entries(entries) => entries.as_slice(),
            _ => &[],
        }
    }
}

impl DerivedEntry {
    pub fn derive(resource: Resource, record: &Record) -> Self {
        match resource {
            Resource::Users => DerivedEntry::User(UserRow::derive(record)),
            Resource::Activities => DerivedEntry::Activity(ActivityCard::derive(record)),
            Resource::Teams => DerivedEntry::Team(TeamCard::derive(record)),
            Resource::Workouts => DerivedEntry::Workout(WorkoutCard::derive(record)),
            Resource::Leaderboard => DerivedEntry::Leaderboard(LeaderboardTeam::derive(record)),
        }
    }
}

impl UserRow {
    pub fn derive(record: &Record) -> Self {
        Self {
            id: record.id_label(),
            username: record.text("username"),
            email: record.text("email"),
            first_name: record.text("first_name"),
            last_name: record.text("last_name"),
        }
    }
}

impl ActivityCard {
    pub fn derive(record: &Record) -> Self {
        Self {
            title: record.text("title"),
            description: record.text("description"),
            activity_type: record.text("activity_type"),
            duration_minutes: number_or_zero(record, "duration_minutes"),
            calories_burned: number_or_zero(record, "calories_burned"),
            distance_km: number_or_zero(record, "distance_km"),
            intensity: record.text("intensity"),
            intensity_color: intensity_color(record.str_field("intensity")),
            location: record.text("location"),
            date: format_date(record.str_field("activity_date")),
        }
    }
}

impl TeamCard {
    pub fn derive(record: &Record) -> Self {
        let owner = record
            .non_empty_text("owner_name")
            .unwrap_or_else(|| format!("Owner #{}", record.text("owner")));
        Self {
            id: record.id_label(),
            name: display_name(record, "name", "Team"),
            description: record.text("description"),
            owner,
            members_count: number_or_zero(record, "members_count"),
        }
    }
}

impl WorkoutCard {
    pub fn derive(record: &Record) -> Self {
        Self {
            title: record.text("title"),
            description: record.text("description"),
            category: record.text("category"),
            category_color: category_color(record.str_field("category")),
            difficulty: record.text("difficulty"),
            difficulty_color: difficulty_color(record.str_field("difficulty")),
            duration_minutes: number_or_zero(record, "estimated_duration_minutes"),
            calories: number_or_zero(record, "estimated_calories"),
            equipment: record.text("equipment_needed"),
            instructions: record.text("instructions"),
        }
    }
}

impl LeaderboardTeam {
    pub fn derive(record: &Record) -> Self {
        let mut entries = record.list_field("leaderboard_entries").unwrap_or_default();
        sort_by_rank(&mut entries);
        Self {
            id: record.id_label(),
            name: display_name(record, "name", "Team"),
            entries: entries.iter().map(LeaderboardRow::derive).collect(),
        }
    }
}

impl LeaderboardRow {
    pub fn derive(entry: &Record) -> Self {
        let user = entry
            .non_empty_text("user_name")
            .unwrap_or_else(|| format!("User #{}", entry.text("user")));
        Self {
            rank: entry.text("rank"),
            decoration: decorate_rank(entry.i64_field("rank")),
            user,
            points: number_or_zero(entry, "points"),
            activities_count: number_or_zero(entry, "activities_count"),
            total_duration_minutes: number_or_zero(entry, "total_duration_minutes"),
            total_calories_burned: number_or_zero(entry, "total_calories_burned"),
        }
    }
}
