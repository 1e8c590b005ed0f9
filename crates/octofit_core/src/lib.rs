//! OctoFit core: pure collection-view state machine, record derivation and view-model helpers.
mod derive;
mod effect;
mod endpoint;
mod msg;
mod record;
mod resource;
mod state;
mod update;
mod view_model;

pub use derive::{
    capitalize, category_color, decorate_rank, difficulty_color, display_name, format_date,
    intensity_color, number_or_zero, sort_by_rank, Palette, RankDecoration, RankStyle,
    INVALID_DATE,
};
pub use effect::Effect;
pub use endpoint::{resolve, Environment, CODESPACE_ENV_VAR};
pub use msg::Msg;
pub use record::Record;
pub use resource::Resource;
pub use state::{CollectionState, ViewState};
pub use update::update;
pub use view_model::{
    ActivityCard, CollectionViewModel, DerivedEntry, LeaderboardRow, LeaderboardTeam, TeamCard,
    UserRow, ViewBody, WorkoutCard,
};
