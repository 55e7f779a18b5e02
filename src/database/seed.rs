use indexmap::IndexMap;

use crate::models::Activity;

// name, description, schedule, max_participants, participants
const SEED_ACTIVITIES: &[(&str, &str, &str, usize, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball",
        "Learn basketball skills and play competitive games",
        "Wednesdays and Saturdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Swimming",
        "Swim training and water sports activities",
        "Mondays and Thursdays, 5:00 PM - 6:00 PM",
        25,
        &["lucas@mergington.edu"],
    ),
    (
        "Drama Club",
        "Theater performances and acting workshops",
        "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
        20,
        &["sarah@mergington.edu", "james@mergington.edu"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and sculpture classes",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &["grace@mergington.edu"],
    ),
    (
        "Debate Team",
        "Competitive debate and public speaking skills",
        "Mondays and Wednesdays, 4:00 PM - 5:00 PM",
        16,
        &["isabella@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Science Club",
        "Hands-on experiments and scientific research",
        "Thursdays, 3:30 PM - 4:45 PM",
        22,
        &["noah@mergington.edu"],
    ),
];

pub fn seed_activities() -> IndexMap<String, Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(description, schedule, *max).with_participants(participants),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nine_activities() {
        let seed = seed_activities();
        assert_eq!(seed.len(), 9);
        assert!(seed.contains_key("Chess Club"));
        assert!(seed.contains_key("Programming Class"));
    }

    #[test]
    fn seed_keeps_catalog_order() {
        let names: Vec<String> = seed_activities().into_keys().collect();
        assert_eq!(
            names,
            vec![
                "Chess Club",
                "Programming Class",
                "Gym Class",
                "Basketball",
                "Swimming",
                "Drama Club",
                "Art Studio",
                "Debate Team",
                "Science Club",
            ]
        );
    }

    #[test]
    fn seed_respects_capacity_and_uniqueness() {
        for (name, activity) in seed_activities() {
            assert!(activity.max_participants > 0, "{}", name);
            assert!(activity.participants.len() <= activity.max_participants, "{}", name);
            let mut sorted = activity.participants.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), activity.participants.len(), "{}", name);
        }
    }

    #[test]
    fn swimming_starts_with_one_member_of_twenty_five() {
        let seed = seed_activities();
        let swimming = &seed["Swimming"];
        assert_eq!(swimming.participants, vec!["lucas@mergington.edu"]);
        assert_eq!(swimming.max_participants, 25);
    }
}
