use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::entity::{artist, show, venue};
use crate::extractors::form::FormFields;
use crate::utils::datetime::{format_form_time, format_start_time, parse_form_time};

/// Form body of `POST /shows/create`.
#[derive(Debug, Serialize, Default, utoipa::ToSchema)]
pub struct ShowForm {
    #[schema(example = "1")]
    pub artist_id: Option<String>,
    #[schema(example = "1")]
    pub venue_id: Option<String>,
    #[schema(example = "2019-05-21 21:30:00")]
    pub start_time: Option<String>,
}

impl From<FormFields> for ShowForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            artist_id: fields.take("artist_id"),
            venue_id: fields.take("venue_id"),
            start_time: fields.take("start_time"),
        }
    }
}

impl ShowForm {
    /// Blank form with the start time pre-filled.
    pub fn starting_at(now: &DateTime<Utc>) -> Self {
        Self {
            start_time: Some(format_form_time(now)),
            ..Default::default()
        }
    }

    pub fn parse(&self) -> Result<NewShow, ShowFormError> {
        let artist_id = parse_id("artist_id", self.artist_id.as_deref())?;
        let venue_id = parse_id("venue_id", self.venue_id.as_deref())?;
        let raw = self
            .start_time
            .as_deref()
            .ok_or(ShowFormError::Missing("start_time"))?;
        let start_time =
            parse_form_time(raw).ok_or_else(|| ShowFormError::InvalidStartTime(raw.to_string()))?;
        Ok(NewShow {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

fn parse_id(field: &'static str, raw: Option<&str>) -> Result<i32, ShowFormError> {
    let raw = raw.ok_or(ShowFormError::Missing(field))?;
    raw.trim().parse().map_err(|_| ShowFormError::InvalidId {
        field,
        value: raw.to_string(),
    })
}

/// A parsed show submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowFormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a numeric id, got `{value}`")]
    InvalidId { field: &'static str, value: String },
    #[error("start_time `{0}` is not a recognised date and time")]
    InvalidStartTime(String),
    #[error("{entity} {id} does not exist")]
    UnknownReference { entity: &'static str, id: i32 },
}

/// A show on a venue's page, annotated with the performing artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct VenueShow {
    pub show_id: i32,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[schema(example = "May 21 2019 21:30:00")]
    pub start_time: String,
}

impl VenueShow {
    pub fn new(show: &show::Model, artist: artist::Model) -> Self {
        Self {
            show_id: show.id,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// A show on an artist's page, annotated with the hosting venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ArtistShow {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[schema(example = "May 21 2019 21:30:00")]
    pub start_time: String,
}

impl ArtistShow {
    pub fn new(show: &show::Model, venue: venue::Model) -> Self {
        Self {
            show_id: show.id,
            venue_id: venue.id,
            venue_name: venue.name,
            venue_image_link: venue.image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// Entry of the flat show listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ShowItem {
    pub id: i32,
    #[schema(example = "May 21 2019 21:30:00")]
    pub start_time: String,
    pub venue_id: i32,
    pub artist_id: i32,
    pub venue_name: String,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

impl ShowItem {
    pub fn new(show: &show::Model, venue: &venue::Model, artist: &artist::Model) -> Self {
        Self {
            id: show.id,
            start_time: format_start_time(&show.start_time),
            venue_id: venue.id,
            artist_id: artist.id,
            venue_name: venue.name.clone(),
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ShowsPage {
    pub shows: Vec<ShowItem>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ShowFormPage {
    pub form: ShowForm,
}
