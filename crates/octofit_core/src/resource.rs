use std::fmt;

/// A named remote collection shown by one dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Activities,
    Teams,
    Workouts,
    /// Served by the `teams` endpoint; each team may carry `leaderboard_entries`.
    Leaderboard,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Users,
        Resource::Activities,
        Resource::Teams,
        Resource::Workouts,
        Resource::Leaderboard,
    ];

    /// Path segment requested from the API.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Activities => "activities",
            Resource::Teams | Resource::Leaderboard => "teams",
            Resource::Workouts => "workouts",
        }
    }

    /// Plural noun used in loading and empty-state text.
    pub fn noun(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Activities => "activities",
            Resource::Teams => "teams",
            Resource::Workouts => "workouts",
            Resource::Leaderboard => "leaderboards",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Resource::Users => "Users",
            Resource::Activities => "Activities",
            Resource::Teams => "Teams",
            Resource::Workouts => "Workouts",
            Resource::Leaderboard => "Leaderboard",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_reuses_teams_path() {
        assert_eq!(Resource::Leaderboard.path(), Resource::Teams.path());
        assert_eq!(Resource::Leaderboard.noun(), "leaderboards");
    }

    #[test]
    fn all_covers_every_view() {
        let paths: Vec<_> = Resource::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["users", "activities", "teams", "workouts", "teams"]);
    }
}
