//! `pawtrainer` terminal front end.
//!
//! # Responsibility
//! - Validate input and dispatch intents through `TrainerSession`.
//! - Render the board, run countdown presets and play the clicker.

mod cli;
mod render;
mod terminal;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::{Cli, Command, CueCommand, DogCommand, TimerArgs};
use log::info;
use pawtrainer_core::db::open_db;
use pawtrainer_core::feedback::click_best_effort;
use pawtrainer_core::{
    core_version, init_logging, parse_timer_presets, Action, Notifier, SqliteKeyValueStore,
    TimerBank, TimerPhase, TrainerConfig, TrainerSession,
};
use std::sync::Arc;
use terminal::{TerminalClicker, TerminalNotifier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = build_config(&args)?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier);

    match args.command {
        Command::Dog(command) => with_session(&config, notifier, |s| run_dog(s, command)),
        Command::Cue(command) => with_session(&config, notifier, |s| run_cue(s, command)),
        Command::Pick => with_session(&config, notifier, |session| {
            match session.pick_random_cue(&mut rand::thread_rng()) {
                Some(cue) => render::print_cue(&cue),
                None => println!("No cues to pick from."),
            }
            Ok(())
        }),
        Command::Timer(timer) => run_timer(&config, timer, notifier).await,
        Command::Click => {
            click_best_effort(&TerminalClicker);
            Ok(())
        }
        Command::Version => {
            println!("pawtrainer {}", core_version());
            Ok(())
        }
    }
}

type CliSession<'conn> = TrainerSession<SqliteKeyValueStore<'conn>>;

fn with_session<T>(
    config: &TrainerConfig,
    notifier: Arc<dyn Notifier>,
    run: impl FnOnce(&mut CliSession<'_>) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let mut session = TrainerSession::open(SqliteKeyValueStore::new(&conn), notifier);
    run(&mut session)
}

fn build_config(args: &Cli) -> anyhow::Result<TrainerConfig> {
    let mut config = TrainerConfig::default();
    if let Some(db) = &args.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    config.log_dir = args.log_dir.clone();
    if let Some(timers) = &args.timers {
        config.timer_presets = parse_timer_presets(timers)?;
    }
    Ok(config)
}

fn run_dog(session: &mut CliSession<'_>, command: DogCommand) -> anyhow::Result<()> {
    match command {
        DogCommand::Add { name, image_url } => {
            session.add_dog(&name, image_url)?;
            render::print_dogs(session.state());
        }
        DogCommand::List => render::print_dogs(session.state()),
        DogCommand::Select { id } => {
            if session.state().dog(id).is_none() {
                return Err(anyhow!("no dog with id {id}"));
            }
            session.dispatch(Action::SetActiveDog { id });
            render::print_dogs(session.state());
        }
    }
    Ok(())
}

fn run_cue(session: &mut CliSession<'_>, command: CueCommand) -> anyhow::Result<()> {
    match command {
        CueCommand::Add { name } => {
            session.add_cue(&name)?;
        }
        CueCommand::List => {}
        CueCommand::Status { id, status } => {
            session.dispatch(Action::UpdateCueStatus { id, status });
        }
        CueCommand::Delete { id } => {
            session.dispatch(Action::DeleteCue { id });
        }
        CueCommand::Practice { id } => {
            session.dispatch(Action::PracticeCue { id });
        }
    }
    if let Some(dog) = session.active_dog() {
        println!("Cues for {}", dog.name);
    }
    render::print_board(&session.board());
    Ok(())
}

async fn run_timer(
    config: &TrainerConfig,
    args: TimerArgs,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<()> {
    let mut bank = TimerBank::from_presets(&config.timer_presets, notifier);
    if args.list {
        for (index, timer) in bank.iter().enumerate() {
            println!("{index}: {}", timer.label());
        }
        return Ok(());
    }

    let timer = bank
        .get_mut(args.index)
        .ok_or_else(|| anyhow!("no timer preset at index {}", args.index))?;
    let mut updates = timer.subscribe();
    timer.start();
    info!("event=cli_timer module=cli label={}", timer.label());

    loop {
        let snapshot = updates.borrow_and_update().clone();
        println!("{}", snapshot.countdown.formatted());
        if snapshot.phase() != TimerPhase::Running {
            break;
        }
        if updates.changed().await.is_err() {
            break;
        }
    }
    Ok(())
}
