//! Loading schedules from disk and planning over them.

use std::fs;

use tempfile::tempdir;

use travel_agent::domain::{Weekday, layover};
use travel_agent::planner::{PlanError, Planner, SearchConfig};
use travel_agent::schedule::{ScheduleError, Timetable};

const BUNDLED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/schedule.json");

fn bundled() -> Timetable {
    Timetable::from_json_file(BUNDLED).unwrap()
}

#[test]
fn load_schedule_from_disk_and_plan() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    fs::write(
        &path,
        r#"{
            "Flights": [
                {
                    "Flight Number": "MS085",
                    "Source": "Cairo",
                    "Destination": "Aswan",
                    "Departure Time": "06:00",
                    "Arrival Time": "07:25",
                    "List of Days": "[mon, wed]"
                }
            ],
            "Cities": [
                { "City Name": "Cairo", "Latitude": 30.0444, "Longitude": 31.2357 },
                { "City Name": "Aswan", "Latitude": 24.0889, "Longitude": 32.8998 }
            ]
        }"#,
    )
    .unwrap();

    let timetable = Timetable::from_json_file(&path).unwrap();
    assert_eq!(timetable.flight_count(), 2);
    assert_eq!(timetable.city_count(), 2);

    let config = SearchConfig::default();
    let planner = Planner::new(&timetable, &config);
    let itinerary = planner
        .find_itinerary("Cairo", "Aswan", ("Tuesday", "Wednesday"))
        .unwrap();

    assert_eq!(itinerary.len(), 1);
    assert_eq!(itinerary.legs()[0].day(), Weekday::Wednesday);
    assert_eq!(itinerary.total_secs(), 5100.0);
}

#[test]
fn malformed_day_list_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    fs::write(
        &path,
        r#"{
            "flights": [
                {
                    "flight_number": "X1",
                    "source": "Cairo",
                    "destination": "Aswan",
                    "departure_time": "06:00",
                    "arrival_time": "07:25",
                    "days": "mon, wed"
                }
            ],
            "cities": []
        }"#,
    )
    .unwrap();

    let err = Timetable::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ScheduleError::MalformedDays { ref flight, .. } if flight == "X1"));
}

#[test]
fn missing_file_reported() {
    let dir = tempdir().unwrap();
    let err = Timetable::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ScheduleError::Io { .. }));
}

#[test]
fn bundled_schedule_loads() {
    let timetable = bundled();
    assert!(!timetable.is_empty());
    assert_eq!(timetable.city_count(), 14);
}

#[test]
fn bundled_direct_flight() {
    let timetable = bundled();
    let config = SearchConfig::default();
    let planner = Planner::new(&timetable, &config);

    let itinerary = planner
        .find_itinerary("Aswan", "Cairo", ("Thursday", "Friday"))
        .unwrap();

    assert_eq!(itinerary.len(), 1);
    let leg = &itinerary.legs()[0];
    assert_eq!(leg.number(), "MS086");
    assert_eq!(leg.day(), Weekday::Thursday);
    assert_eq!(itinerary.total_secs(), 5100.0);
}

#[test]
fn bundled_range_running_past_friday() {
    let timetable = bundled();
    let config = SearchConfig::default();
    let planner = Planner::new(&timetable, &config);

    let itinerary = planner
        .find_itinerary("San Francisco", "New York", ("Saturday", "Monday"))
        .unwrap();

    assert_eq!(itinerary.len(), 1);
    assert_eq!(itinerary.legs()[0].number(), "UA1");
    assert_eq!(itinerary.legs()[0].day(), Weekday::Sunday);
}

#[test]
fn bundled_multi_leg_routes_are_consistent() {
    let timetable = bundled();
    let config = SearchConfig::default();
    let planner = Planner::new(&timetable, &config);

    for (source, destination, days) in [
        ("Cairo", "San Francisco", ("Tuesday", "Wednesday")),
        ("Edinburgh", "Aswan", ("Monday", "Thursday")),
    ] {
        let itinerary = planner.find_itinerary(source, destination, days).unwrap();
        let legs = itinerary.legs();

        assert!(legs.len() >= 2, "{source} -> {destination}:\n{itinerary}");
        assert_eq!(legs[0].source(), source);
        assert_eq!(legs[legs.len() - 1].destination(), destination);
        for pair in legs.windows(2) {
            assert_eq!(pair[0].destination(), pair[1].source());
            let wait = layover(
                pair[0].arrival_day(),
                pair[0].arrival(),
                pair[1].day(),
                pair[1].departure(),
            );
            assert!(wait > 0.0);
        }
        for leg in legs {
            assert!(itinerary.day_range().contains(leg.day()));
        }
    }
}

#[test]
fn bundled_city_without_departures_widens_then_fails() {
    let timetable = bundled();
    let config = SearchConfig::default();
    let planner = Planner::new(&timetable, &config);

    let mut added = Vec::new();
    let result = planner.find_itinerary_with("Giza", "New York", ("Sunday", "Wednesday"), |_, day| {
        added.push(day)
    });

    assert!(matches!(result, Err(PlanError::NotFound { .. })));
    assert_eq!(added, vec![Weekday::Thursday, Weekday::Friday]);
}
