//! Built-in 2026 astronomy calendar. Works offline; no backend call.

/// One calendar entry.
#[derive(Debug, Clone, Copy)]
pub struct AstronomyEvent {
    pub date: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
}

/// Notable sky events of 2026, in date order.
pub const EVENTS_2026: &[AstronomyEvent] = &[
    AstronomyEvent {
        date: "Jan 3, 2026",
        name: "Quadrantids Meteor Shower Peak",
        desc: "Up to 120 meteors per hour. Best viewed after midnight.",
    },
    AstronomyEvent {
        date: "Jan 10, 2026",
        name: "Jupiter at Opposition",
        desc: "Jupiter at its closest and brightest. Visible all night.",
    },
    AstronomyEvent {
        date: "Feb 1, 2026",
        name: "Venus at Greatest Elongation",
        desc: "Venus at peak visibility in evening sky.",
    },
    AstronomyEvent {
        date: "Feb 28, 2026",
        name: "Seven Planet Alignment",
        desc: "Rare alignment of 7 planets visible before sunrise.",
    },
    AstronomyEvent {
        date: "Mar 3, 2026",
        name: "Total Lunar Eclipse",
        desc: "Blood Moon visible from Americas, Europe, Africa.",
    },
    AstronomyEvent {
        date: "Mar 14, 2026",
        name: "Pi Day Meteor Watch",
        desc: "Minor meteor activity, great for beginners.",
    },
    AstronomyEvent {
        date: "Apr 22, 2026",
        name: "Lyrids Meteor Shower",
        desc: "18 meteors per hour, bright fireballs possible.",
    },
    AstronomyEvent {
        date: "May 6, 2026",
        name: "Eta Aquarids Peak",
        desc: "Debris from Halley's Comet, 30 meteors/hour.",
    },
    AstronomyEvent {
        date: "Jun 21, 2026",
        name: "Summer Solstice",
        desc: "Longest day of the year in Northern Hemisphere.",
    },
    AstronomyEvent {
        date: "Jul 28, 2026",
        name: "Delta Aquarids Peak",
        desc: "20 meteors per hour, best after midnight.",
    },
    AstronomyEvent {
        date: "Aug 12, 2026",
        name: "Perseids Meteor Shower",
        desc: "Best meteor shower! Up to 100 meteors per hour.",
    },
    AstronomyEvent {
        date: "Aug 12, 2026",
        name: "Partial Solar Eclipse",
        desc: "Visible from parts of North America.",
    },
    AstronomyEvent {
        date: "Sep 7, 2026",
        name: "Saturn at Opposition",
        desc: "Saturn at its brightest, rings clearly visible.",
    },
    AstronomyEvent {
        date: "Oct 21, 2026",
        name: "Orionids Peak",
        desc: "Fast meteors from Halley's Comet debris.",
    },
    AstronomyEvent {
        date: "Nov 5, 2026",
        name: "Taurids Peak",
        desc: "Slow, bright fireballs - great for photos.",
    },
    AstronomyEvent {
        date: "Nov 17, 2026",
        name: "Leonids Meteor Shower",
        desc: "15 meteors per hour, historically spectacular.",
    },
    AstronomyEvent {
        date: "Dec 13, 2026",
        name: "Geminids Peak",
        desc: "King of meteor showers! 150 multicolored meteors/hour.",
    },
    AstronomyEvent {
        date: "Dec 21, 2026",
        name: "Winter Solstice",
        desc: "Shortest day, longest night for stargazing.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_not_empty() {
        assert!(EVENTS_2026.len() >= 12);
    }

    #[test]
    fn test_all_entries_dated_2026() {
        for ev in EVENTS_2026 {
            assert!(ev.date.ends_with("2026"), "bad date: {}", ev.date);
        }
    }
}
