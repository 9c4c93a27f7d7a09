//! Seed fixture: the activities loaded into the registry at startup.
//!
//! These values are a conformance fixture shared by the application and the
//! endpoint tests. The registry itself is agnostic to how it is populated.

use crate::registry::Activity;

fn emails(addrs: &[&str]) -> Vec<String> {
    addrs.iter().map(|a| a.to_string()).collect()
}

/// The nine default Mergington High activities.
pub fn default_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                emails(&["michael@mergington.edu", "daniel@mergington.edu"]),
            ),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                emails(&["emma@mergington.edu", "sophia@mergington.edu"]),
            ),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                emails(&["john@mergington.edu", "olivia@mergington.edu"]),
            ),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Competitive basketball team with practice and games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                emails(&["alex@mergington.edu"]),
            ),
        ),
        (
            "Tennis Club".to_string(),
            Activity::new(
                "Learn tennis skills and compete in friendly matches",
                "Saturdays, 10:00 AM - 11:30 AM",
                16,
                emails(&["isabella@mergington.edu"]),
            ),
        ),
        (
            "Debate Club".to_string(),
            Activity::new(
                "Develop critical thinking and public speaking skills",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                emails(&["lucas@mergington.edu", "noah@mergington.edu"]),
            ),
        ),
        (
            "Science Olympiad".to_string(),
            Activity::new(
                "Compete in science competitions and build practical skills",
                "Thursdays, 4:00 PM - 5:30 PM",
                14,
                emails(&["ava@mergington.edu"]),
            ),
        ),
        (
            "Art Class".to_string(),
            Activity::new(
                "Learn painting, drawing, and other visual arts techniques",
                "Tuesdays and Thursdays, 4:45 PM - 5:45 PM",
                20,
                emails(&["mia@mergington.edu", "charlotte@mergington.edu"]),
            ),
        ),
        (
            "Music Band".to_string(),
            Activity::new(
                "Join the school band and perform at concerts and events",
                "Mondays and Fridays, 3:30 PM - 4:30 PM",
                25,
                emails(&["ethan@mergington.edu"]),
            ),
        ),
    ]
}
