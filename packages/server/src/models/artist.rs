use sea_orm::ActiveValue::Set;
use serde::Serialize;

use super::shared::{ProfileField, ProfileTarget, ProfileValues, apply_profile, is_checked};
use super::show::ArtistShow;
use crate::entity::artist;
use crate::error::AppError;
use crate::extractors::form::FormFields;
use crate::utils::genres::split_genres;
use crate::utils::shows::ShowPartition;

/// Form body of `POST /artists/create`, also used to pre-fill the edit form.
#[derive(Debug, Serialize, Default, Clone, utoipa::ToSchema)]
pub struct ArtistForm {
    #[schema(example = "Guns N Petals")]
    pub name: Option<String>,
    #[schema(example = "San Francisco")]
    pub city: Option<String>,
    #[schema(example = "CA")]
    pub state: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    /// Comma-delimited genre tags.
    #[schema(example = "Rock n Roll")]
    pub genres: Option<String>,
    /// `y` when the artist is looking for venues.
    #[schema(example = "y")]
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

impl ProfileValues for ArtistForm {
    fn profile_value(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::Name => self.name.as_deref(),
            ProfileField::City => self.city.as_deref(),
            ProfileField::State => self.state.as_deref(),
            ProfileField::Phone => self.phone.as_deref(),
            ProfileField::Website => self.website.as_deref(),
            ProfileField::FacebookLink => self.facebook_link.as_deref(),
            ProfileField::SeekingDescription => self.seeking_description.as_deref(),
            ProfileField::ImageLink => self.image_link.as_deref(),
            ProfileField::Genres => self.genres.as_deref(),
        }
    }
}

impl ProfileTarget for artist::ActiveModel {
    fn set_profile_field(&mut self, field: ProfileField, value: Option<String>) {
        match field {
            ProfileField::Name => self.name = Set(value.unwrap_or_default()),
            ProfileField::City => self.city = Set(value.unwrap_or_default()),
            ProfileField::State => self.state = Set(value.unwrap_or_default()),
            ProfileField::Phone => self.phone = Set(value),
            ProfileField::Website => self.website = Set(value),
            ProfileField::FacebookLink => self.facebook_link = Set(value),
            ProfileField::SeekingDescription => self.seeking_description = Set(value),
            ProfileField::ImageLink => self.image_link = Set(value),
            ProfileField::Genres => self.genres = Set(value.unwrap_or_default()),
        }
    }
}

impl From<FormFields> for ArtistForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            name: fields.take("name"),
            city: fields.take("city"),
            state: fields.take("state"),
            phone: fields.take("phone"),
            image_link: fields.take("image_link"),
            website: fields.take("website"),
            facebook_link: fields.take("facebook_link"),
            genres: fields.take("genres"),
            seeking_venue: fields.take("seeking_venue"),
            seeking_description: fields.take("seeking_description"),
        }
    }
}

impl From<&artist::Model> for ArtistForm {
    fn from(m: &artist::Model) -> Self {
        Self {
            name: Some(m.name.clone()),
            city: Some(m.city.clone()),
            state: Some(m.state.clone()),
            phone: m.phone.clone(),
            image_link: m.image_link.clone(),
            website: m.website.clone(),
            facebook_link: m.facebook_link.clone(),
            genres: Some(m.genres.clone()),
            seeking_venue: m.seeking_venue.then(|| "y".to_string()),
            seeking_description: m.seeking_description.clone(),
        }
    }
}

/// Builds the row for a new artist from a create submission.
pub fn new_artist(form: &ArtistForm) -> Result<artist::ActiveModel, AppError> {
    let mut active = artist::ActiveModel {
        seeking_venue: Set(is_checked(form.seeking_venue.as_deref())),
        ..Default::default()
    };
    apply_profile(&mut active, form)?;
    Ok(active)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

impl ArtistSummary {
    pub fn new(m: &artist::Model, num_upcoming_shows: usize) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            num_upcoming_shows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(m: artist::Model, shows: ShowPartition<ArtistShow>) -> Self {
        Self {
            id: m.id,
            genres: split_genres(&m.genres),
            name: m.name,
            city: m.city,
            state: m.state,
            phone: m.phone,
            website: m.website,
            facebook_link: m.facebook_link,
            image_link: m.image_link,
            seeking_venue: m.seeking_venue,
            seeking_description: m.seeking_description,
            past_shows_count: shows.past.len(),
            upcoming_shows_count: shows.upcoming.len(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArtistsPage {
    pub artists: Vec<ArtistSummary>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArtistFormPage {
    pub form: ArtistForm,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArtistEditPage {
    pub form: ArtistForm,
    pub artist: ArtistDetail,
}
