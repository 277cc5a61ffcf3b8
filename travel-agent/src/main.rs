use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use travel_agent::domain::Itinerary;
use travel_agent::planner::{PlanError, Planner, SearchConfig};
use travel_agent::schedule::Timetable;

/// Schedule shipped with the crate.
const BUNDLED_SCHEDULE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/schedule.json");

/// Requests run by the demo: source, destination, first and last day.
const DEMO_REQUESTS: &[(&str, &str, (&str, &str))] = &[
    ("Cairo", "San Francisco", ("Tuesday", "Wednesday")),
    ("Edinburgh", "Aswan", ("Monday", "Thursday")),
    ("San Francisco", "New York", ("Saturday", "Monday")),
    ("Aswan", "Cairo", ("Thursday", "Friday")),
    ("Giza", "New York", ("Sunday", "Wednesday")),
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get schedule location from environment
    let path = std::env::var_os("TRAVEL_AGENT_SCHEDULE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(BUNDLED_SCHEDULE));

    let timetable = match Timetable::from_json_file(&path) {
        Ok(timetable) => timetable,
        Err(e) => {
            eprintln!("Failed to load schedule: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Loaded {} flights between {} cities from {}",
        timetable.flight_count(),
        timetable.city_count(),
        path.display()
    );
    println!();

    let config = SearchConfig::default();
    let planner = Planner::new(&timetable, &config);

    for &(source, destination, days) in DEMO_REQUESTS {
        let result = planner.find_itinerary_with(source, destination, days, |range, added| {
            println!("* No flights at your range from ({source}) to ({destination}),");
            println!("day ({added}) added to it, your new range is: {range}.");
        });
        print_result(source, destination, result);
    }

    ExitCode::SUCCESS
}

fn print_result(source: &str, destination: &str, result: Result<Itinerary, PlanError>) {
    match result {
        Ok(itinerary) => {
            println!("=> The best route in your days range from ({source}) to ({destination}):");
            println!("{itinerary}");
        }
        Err(PlanError::NotFound { .. }) => {
            println!("=> Unfortunately, no flights between ({source}) and ({destination}).");
        }
        Err(e) => println!("=> {e}"),
    }
    println!("----------------------------------------");
}
