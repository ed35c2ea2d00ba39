#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use maptrack::{
    cli,
    controller::SyncController,
    database::SqliteSlot,
    persistence::Persistence,
    surfaces::{Event, FormValues, Surfaces},
    terminal::{PresetForm, StderrAlerts, StdoutList, TerminalMap},
    utils,
};

#[macro_use]
extern crate maptrack;

type TerminalController = SyncController<SqliteSlot, TerminalMap, PresetForm, StdoutList, StderrAlerts>;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let slot = SqliteSlot::open(&cli.db, &cli.origin)
        .with_context(|| format!("opening workout storage: {}", cli.db.display()))?;
    dlog!("db={} origin={}", cli.db.display(), cli.origin);

    let mut here = cli.here;
    let list_visible = matches!(cli.cmd, None | Some(cli::Cmd::List | cli::Cmd::Add { .. }));
    let mut app = start(slot, list_visible, cli.details);

    match cli.cmd {
        None | Some(cli::Cmd::List) => {
            app.handle(Event::from_location(&mut here));
            if app.store().is_empty() {
                tracing::info!("no workouts stored yet");
            }
            Ok(())
        }
        Some(cli::Cmd::Add {
            at,
            workout_type,
            distance,
            duration,
            cadence,
            elevation,
        }) => {
            app.handle(Event::from_location(&mut here));
            if !app.map_ready() {
                bail!("No map available: pass --here LAT,LNG (or set MAPTRACK_HERE).");
            }

            let before = app.store().len();
            app.handle(Event::MapClicked(at));
            app.handle(Event::TypeChanged(workout_type));
            app.form_mut().fill(FormValues {
                workout_type,
                distance,
                duration,
                cadence,
                elevation,
            });
            app.handle(Event::FormSubmitted);

            if app.store().len() == before {
                bail!("No workout recorded.");
            }
            Ok(())
        }
        Some(cli::Cmd::Show { id }) => {
            app.handle(Event::from_location(&mut here));
            if app.store().find_by_id(&id).is_none() {
                bail!("No stored workout with id {id}");
            }
            if !app.map_ready() {
                bail!("No map available: pass --here LAT,LNG (or set MAPTRACK_HERE).");
            }
            app.handle(Event::ListItemClicked(id));
            Ok(())
        }
        Some(cli::Cmd::Reset) => {
            let count = app.store().len();
            app.reset().context("clearing stored workouts")?;
            println!("cleared {count} workouts");
            Ok(())
        }
    }
}

fn start(slot: SqliteSlot, list_visible: bool, details: bool) -> TerminalController {
    let list = if list_visible {
        StdoutList::new(details)
    } else {
        StdoutList::hidden()
    };

    SyncController::start(
        Persistence::new(slot),
        Surfaces {
            map: TerminalMap::default(),
            form: PresetForm::default(),
            list,
            alerts: StderrAlerts::default(),
        },
    )
}
