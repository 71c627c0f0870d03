//! Event parameters attached to a quote.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Kind of event the services are booked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Company event or conference.
    #[default]
    Corporate,
    /// Brand pop-up store.
    PopupStore,
    /// Public festival.
    Festival,
    /// Trade show or exhibition.
    Exhibition,
    /// Wedding or private party.
    Private,
}

/// Size of the venue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueSize {
    /// Under 100 m².
    Small,
    /// 100 to 500 m².
    #[default]
    Medium,
    /// Over 500 m².
    Large,
}

/// The event record of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Kind of event.
    pub event_type: EventType,
    /// Length of the event in days.
    pub duration_days: u32,
    /// Expected number of guests.
    pub attendees: u32,
    /// Size of the venue.
    pub venue_size: VenueSize,
    /// Free-text location.
    pub location: String,
    /// Event date, once known.
    pub date: Option<NaiveDate>,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            event_type: EventType::default(),
            duration_days: 1,
            attendees: 100,
            venue_size: VenueSize::default(),
            location: String::new(),
            date: None,
        }
    }
}

/// A partial update to [`EventDetails`]. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetailsPatch {
    /// New event type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    /// New duration in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    /// New attendee count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u32>,
    /// New venue size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_size: Option<VenueSize>,
    /// New location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New date. `Some(None)` clears it; in JSON that is an explicit `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<Option<NaiveDate>>,
}

/// Tells an explicit `null` apart from an absent field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl EventDetailsPatch {
    /// Whether the patch sets nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl EventDetails {
    /// Shallow-merges `patch` into the record. Values are taken as given.
    pub fn merge(&mut self, patch: &EventDetailsPatch) {
        if let Some(event_type) = patch.event_type {
            self.event_type = event_type;
        }
        if let Some(days) = patch.duration_days {
            self.duration_days = days;
        }
        if let Some(attendees) = patch.attendees {
            self.attendees = attendees;
        }
        if let Some(venue_size) = patch.venue_size {
            self.venue_size = venue_size;
        }
        if let Some(location) = &patch.location {
            self.location.clone_from(location);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}
