use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::booking::event_type::{self, EventType};
use crate::schedule::duration::TimeOfDay;
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),
    #[error("Missing or malformed parameter: {0}")]
    MalformedQuery(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleQuery {
    pub event: EventType,
    pub start: DateTime<Utc>,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationQuery {
    pub event: EventType,
    pub start: DateTime<Utc>,
    pub time: String,
    pub name: String,
    pub email: String,
}

pub fn encode_schedule(selection: &Selection) -> String {
    format!(
        "date={}&time={}",
        start_instant(selection).to_rfc3339_opts(SecondsFormat::Secs, true),
        selection.time
    )
}

pub fn encode_details(selection: &Selection, name: &str, email: &str) -> String {
    format!(
        "{}&name={}&email={}",
        encode_schedule(selection),
        urlencoding::encode(name),
        urlencoding::encode(email)
    )
}

pub fn calendar_path(event_id: &str) -> String {
    format!("/book/{event_id}")
}

pub fn form_path(event_id: &str, selection: &Selection) -> String {
    format!("/book/{}/form?{}", event_id, encode_schedule(selection))
}

pub fn confirmation_path(event_id: &str, selection: &Selection, name: &str, email: &str) -> String {
    format!(
        "/book/{}/confirmed?{}",
        event_id,
        encode_details(selection, name, email)
    )
}

pub fn decode_schedule(event_id: &str, query: &str) -> Result<ScheduleQuery, QueryError> {
    let event = event_type::find(event_id)
        .ok_or_else(|| QueryError::UnknownEventType(event_id.to_string()))?;
    let params = parse_params(query);
    let start = required_instant(&params)?;
    let time = required(&params, "time")?;

    Ok(ScheduleQuery { event, start, time })
}

pub fn decode_confirmation(event_id: &str, query: &str) -> Result<ConfirmationQuery, QueryError> {
    let schedule = decode_schedule(event_id, query)?;
    let params = parse_params(query);
    let name = required(&params, "name")?;
    let email = required(&params, "email")?;

    Ok(ConfirmationQuery {
        event: schedule.event,
        start: schedule.start,
        time: schedule.time,
        name,
        email,
    })
}

fn start_instant(selection: &Selection) -> DateTime<Utc> {
    let time = TimeOfDay::parse(&selection.time)
        .and_then(|parsed| NaiveTime::from_hms_opt(parsed.hour, parsed.minute, 0))
        .unwrap_or(NaiveTime::MIN);
    selection.date.and_time(time).and_utc()
}

fn parse_params(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(raw_value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw_value.to_string());
            (key.to_string(), value)
        })
        .collect()
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

fn required(params: &[(String, String)], key: &str) -> Result<String, QueryError> {
    match param(params, key) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(QueryError::MalformedQuery(key.to_string())),
    }
}

fn required_instant(params: &[(String, String)]) -> Result<DateTime<Utc>, QueryError> {
    let raw = required(params, "date")?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| QueryError::MalformedQuery("date".to_string()))
}
