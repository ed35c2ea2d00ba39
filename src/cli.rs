use crate::types::{Coords, WorkoutType};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "maptrack.sqlite";
const DEFAULT_ORIGIN: &str = "local";

#[derive(Parser, Debug)]
#[command(
    name = "maptrack",
    about = "Record running and cycling workouts at map locations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// SQLite file holding stored workouts
    #[arg(long, env = "MAPTRACK_DB", default_value = DEFAULT_DB_PATH, global = true)]
    pub db: PathBuf,

    /// Storage scope; workouts saved under one origin are invisible to others
    #[arg(long, env = "MAPTRACK_ORIGIN", default_value = DEFAULT_ORIGIN, global = true)]
    pub origin: String,

    /// Your current position as LAT,LNG. Without it the location lookup fails
    /// and no map is available.
    #[arg(long, env = "MAPTRACK_HERE", allow_hyphen_values = true, global = true)]
    pub here: Option<Coords>,

    /// Print index, id and type before each workout
    #[arg(long, global = true)]
    pub details: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Show stored workouts (the default)
    List,

    /// Click the map at a location and submit a workout there
    Add {
        /// Where the workout happened, as LAT,LNG
        #[arg(long, allow_hyphen_values = true)]
        at: Coords,

        #[arg(long = "type", default_value = "running")]
        workout_type: WorkoutType,

        /// km
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        distance: String,

        /// min
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        duration: String,

        /// steps/min, running only
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        cadence: String,

        /// m, cycling only
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        elevation: String,
    },

    /// Center the map on a stored workout
    Show {
        id: String,
    },

    /// Delete every stored workout
    Reset,
}
