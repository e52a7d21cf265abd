use mathdrop_engine::GameSeed;

use crate::{command::play::app::PlayApp, tui::Tui};

mod answer_input;
mod app;

#[derive(Debug, Clone)]
pub(crate) struct PlayArg {
    pub(crate) seed: Option<GameSeed>,
    pub(crate) show_dots: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed, show_dots } = arg;

    let mut app = PlayApp::new(*seed, *show_dots);
    Tui::new().run(&mut app)?;

    match app.session() {
        Some(session) => {
            tracing::info!(
                seed = %session.seed(),
                score = session.score(),
                drop_count = session.drop_count(),
                "exit"
            );
            println!("Seed:  {}", session.seed());
            println!("Score: {}", session.score());
            println!("Drops: {}", session.drop_count());
        }
        None => println!("No game in progress."),
    }

    Ok(())
}
