//! The Prompt Store: campus facts and the rendered system context.
//!
//! `CampusInfo` holds the structured facts the assistant answers from (mess
//! menu, events, locations, support contacts). The same data feeds two
//! consumers: the `/campus` endpoint serves it as JSON for the info panels,
//! and `system_context()` renders it once at startup into the immutable
//! instruction string every session is primed with.

use serde::{Deserialize, Serialize};

/// One day of mess meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessMenu {
    /// Human-readable date label (e.g., "July 15").
    pub date: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// An upcoming campus event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusEvent {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

/// A notable campus location and how to find it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusLocation {
    pub name: String,
    pub directions: String,
}

/// A student support or emergency contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportContact {
    pub cell: String,
    pub phone: String,
}

/// The full set of campus facts the assistant is seeded with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusInfo {
    pub menu: MessMenu,
    pub events: Vec<CampusEvent>,
    pub locations: Vec<CampusLocation>,
    pub contacts: Vec<SupportContact>,
}

impl CampusInfo {
    /// The bundled day-one dataset.
    ///
    /// A deployment would swap this for data loaded from the college's
    /// systems; the assistant contract only cares that the facts exist
    /// before the first session is primed.
    pub fn bundled() -> Self {
        Self {
            menu: MessMenu {
                date: "July 15".to_string(),
                breakfast: "Poha, Tea".to_string(),
                lunch: "Rajma Chawal, Roti, Salad".to_string(),
                dinner: "Paneer Butter Masala, Jeera Rice".to_string(),
            },
            events: vec![
                CampusEvent {
                    name: "AI Workshop".to_string(),
                    date: "July 16".to_string(),
                    time: "2 PM".to_string(),
                    venue: "Seminar Hall".to_string(),
                },
                CampusEvent {
                    name: "Cultural Fest".to_string(),
                    date: "July 20".to_string(),
                    time: "5 PM".to_string(),
                    venue: "Main Ground".to_string(),
                },
                CampusEvent {
                    name: "Coding Marathon".to_string(),
                    date: "July 22".to_string(),
                    time: "10 AM".to_string(),
                    venue: "Lab Block".to_string(),
                },
            ],
            locations: vec![
                CampusLocation {
                    name: "Admin Block".to_string(),
                    directions: "Near Main Gate".to_string(),
                },
                CampusLocation {
                    name: "Hostel C".to_string(),
                    directions: "Behind Library".to_string(),
                },
                CampusLocation {
                    name: "Library".to_string(),
                    directions: "2nd floor, Academic Building".to_string(),
                },
                CampusLocation {
                    name: "Seminar Hall".to_string(),
                    directions: "Ground floor of Academic Block A".to_string(),
                },
            ],
            contacts: vec![
                SupportContact {
                    cell: "Anti-Ragging Cell".to_string(),
                    phone: "99094778929".to_string(),
                },
                SupportContact {
                    cell: "Women's Safety Cell".to_string(),
                    phone: "9821234567".to_string(),
                },
                SupportContact {
                    cell: "Medical Emergency".to_string(),
                    phone: "9112233445".to_string(),
                },
                SupportContact {
                    cell: "Hostel Issues".to_string(),
                    phone: "9123456789".to_string(),
                },
                SupportContact {
                    cell: "Academic Issues".to_string(),
                    phone: "9876543210".to_string(),
                },
                SupportContact {
                    cell: "On-Campus Psychologist".to_string(),
                    phone: "9001122334".to_string(),
                },
            ],
        }
    }

    /// Render the immutable system context string.
    ///
    /// Built once at process start and shared read-only by every session;
    /// this is the first turn of every primed conversation.
    pub fn system_context(&self) -> String {
        let mut out = String::with_capacity(2048);

        out.push_str(
            "You are a smart virtual assistant for a college website called \
             \"CampusConnect.\" Your role is to help students by answering questions about:\n\n\
             1. Upcoming and ongoing events - e.g., cultural fests, workshops, seminars, club meetings.\n\
             2. Mess menu - daily meals like breakfast, lunch, dinner with veg/non-veg options.\n\
             3. Campus locations - where departments, buildings, or blocks are located.\n\
             4. General student queries - about clubs, facilities, common timings, or notices.\n\
             5. Support contact information - guide students to the correct cell or authority.\n\n\
             You must always reply in a clear, friendly, and helpful tone like you're guiding \
             a new student. If you're unsure of an answer, say: \"I'm not sure about that at \
             the moment, but you can check with the student council or admin.\"\n\n\
             Here is today's context:\n",
        );

        out.push_str(&format!(
            "\nMess Menu ({}):\n  - Breakfast: {}\n  - Lunch: {}\n  - Dinner: {}\n",
            self.menu.date, self.menu.breakfast, self.menu.lunch, self.menu.dinner
        ));

        out.push_str("\nUpcoming Events:\n");
        for event in &self.events {
            out.push_str(&format!(
                "  - {} on {} at {}, {}\n",
                event.name, event.date, event.time, event.venue
            ));
        }

        out.push_str("\nPopular Locations:\n");
        for location in &self.locations {
            out.push_str(&format!("  - {}: {}\n", location.name, location.directions));
        }

        out.push_str(
            "\nStudent Support & Emergency Contact Numbers:\n\
             If a student needs help, direct them to the appropriate cell:\n",
        );
        for contact in &self.contacts {
            out.push_str(&format!("  - {} - {}\n", contact.cell, contact.phone));
        }

        out.push_str(
            "\nBe polite, helpful, and respectful. Offer relevant information only, and do \
             not make assumptions beyond the data provided unless it's common college knowledge.",
        );

        out
    }
}

impl Default for CampusInfo {
    fn default() -> Self {
        Self::bundled()
    }
}
