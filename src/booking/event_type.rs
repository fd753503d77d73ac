use serde::{Deserialize, Serialize};

pub const DURATION_OPTIONS: [u32; 4] = [15, 30, 45, 60];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub color: String,
}

impl EventType {
    pub fn duration_label(&self) -> String {
        format!("{}m", self.duration_minutes)
    }
}

pub fn catalog() -> Vec<EventType> {
    let entries = [
        (
            "product-hunt-chats",
            "Product Hunt Chats",
            "The essence of Product Hunt reflects in communities. Select a time suitable for you, and let's talk products!",
            15,
            "green",
        ),
        (
            "interviews",
            "Interviews",
            "Let's chat about how your skills can be an asset for our team. No stress, just good vibes and great questions!",
            30,
            "blue",
        ),
        (
            "product-demo",
            "Product Demo",
            "Product innovation in action! Reserve a time for a personalized demo of our next-gen scheduler.",
            30,
            "purple",
        ),
        (
            "everything-else",
            "Everything Else",
            "Open Agenda! Let's brainstorm over coffee or talk about your favorite singer. Whatever it is, I'm all ears!",
            15,
            "orange",
        ),
        (
            "recurring-event",
            "Recurring Event",
            "Testing out the Recurring Meetup",
            15,
            "pink",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, title, description, duration_minutes, color)| EventType {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            duration_minutes,
            color: color.to_string(),
        })
        .collect()
}

pub fn find(id: &str) -> Option<EventType> {
    catalog().into_iter().find(|event| event.id == id)
}
