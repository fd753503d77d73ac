use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::booking::query::{ConfirmationQuery, QueryError};
use crate::schedule::duration::TimeOfDay;
use crate::storage::config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
    pub is_host: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub reference: String,
    pub event_id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub date_label: String,
    pub time_range: String,
    pub location: String,
    pub participants: Vec<Participant>,
}

impl Confirmation {
    pub fn attendee_line(&self) -> String {
        let names: Vec<&str> = self
            .participants
            .iter()
            .map(|participant| participant.name.as_str())
            .collect();
        format!("with {}", names.join(" and "))
    }
}

pub fn build(query: &ConfirmationQuery, config: &Config) -> Result<Confirmation, QueryError> {
    let start_time = TimeOfDay::parse(&query.time)
        .ok_or_else(|| QueryError::MalformedQuery("time".to_string()))?;
    let end_time = start_time.add_minutes(query.event.duration_minutes);

    Ok(Confirmation {
        reference: Uuid::new_v4().to_string(),
        event_id: query.event.id.clone(),
        title: query.event.title.clone(),
        start: query.start,
        date_label: query.start.format("%A, %B %-d, %Y").to_string(),
        time_range: format!("{} - {}", start_time.label(), end_time.label()),
        location: config.booking.location.clone(),
        participants: vec![
            Participant {
                name: config.host.name.clone(),
                email: config.host.email.clone(),
                is_host: true,
            },
            Participant {
                name: query.name.clone(),
                email: query.email.clone(),
                is_host: false,
            },
        ],
    })
}
