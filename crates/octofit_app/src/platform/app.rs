use std::io::{self, Write};
use std::time::Duration;

use octofit_core::{update, CollectionState, Effect, Environment, Msg, Resource};
use octofit_engine::{FetchSettings, ViewId};
use octofit_logging::{octo_info, octo_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Terminal, logging::level_from_env());

    let env = Environment::from_lookup(|key| std::env::var(key).ok());
    octo_info!("codespace name: {:?}", env.codespace_name);

    let runner = EffectRunner::new(FetchSettings::default())?;
    let mut dashboard = Dashboard::mount(&env);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for view_id in 0..dashboard.len() {
        let effects = dashboard.dispatch(view_id, Msg::Activated);
        runner.enqueue(view_id, effects);
    }
    dashboard.render_dirty(&mut out)?;

    while !dashboard.all_settled() {
        if let Some(done) = runner.next_completion(POLL_INTERVAL) {
            let view_id = done.view_id;
            let effects = dashboard.dispatch(view_id, done.into_msg());
            runner.enqueue(view_id, effects);
            dashboard.render_dirty(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// One independent collection view per resource.
struct Dashboard {
    views: Vec<Option<CollectionState>>,
}

impl Dashboard {
    fn mount(env: &Environment) -> Self {
        let views = Resource::ALL
            .iter()
            .map(|resource| Some(CollectionState::new(*resource, env)))
            .collect();
        Self { views }
    }

    fn len(&self) -> usize {
        self.views.len()
    }

    fn dispatch(&mut self, view_id: ViewId, msg: Msg) -> Vec<Effect> {
        let Some(slot) = self.views.get_mut(view_id) else {
            octo_warn!("message for unknown view {}", view_id);
            return Vec::new();
        };
        let Some(state) = slot.take() else {
            return Vec::new();
        };
        let (state, effects) = update(state, msg);
        *slot = Some(state);
        effects
    }

    fn all_settled(&self) -> bool {
        self.views
            .iter()
            .flatten()
            .all(|state| state.view_state().is_settled())
    }

    fn render_dirty(&mut self, out: &mut impl Write) -> io::Result<()> {
        for state in self.views.iter_mut().flatten() {
            if !state.consume_dirty() {
                continue;
            }
            for line in render::render(&state.view()) {
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
