use sea_orm::ActiveValue::Set;
use serde::Serialize;

use super::shared::{ProfileField, ProfileTarget, ProfileValues, apply_profile, is_checked};
use super::show::VenueShow;
use crate::entity::venue;
use crate::error::AppError;
use crate::extractors::form::FormFields;
use crate::utils::genres::split_genres;
use crate::utils::shows::ShowPartition;

/// Form body of `POST /venues/create`, also used to pre-fill the edit form.
#[derive(Debug, Serialize, Default, Clone, utoipa::ToSchema)]
pub struct VenueForm {
    #[schema(example = "The Musical Hop")]
    pub name: Option<String>,
    #[schema(example = "San Francisco")]
    pub city: Option<String>,
    #[schema(example = "CA")]
    pub state: Option<String>,
    #[schema(example = "1015 Folsom Street")]
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    /// Comma-delimited genre tags.
    #[schema(example = "Jazz,Reggae")]
    pub genres: Option<String>,
    /// `y` when the venue is looking for talent.
    #[schema(example = "y")]
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl ProfileValues for VenueForm {
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

impl ProfileTarget for venue::ActiveModel {
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

impl From<FormFields> for VenueForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            name: fields.take("name"),
            city: fields.take("city"),
            state: fields.take("state"),
            address: fields.take("address"),
            phone: fields.take("phone"),
            image_link: fields.take("image_link"),
            website: fields.take("website"),
            facebook_link: fields.take("facebook_link"),
            genres: fields.take("genres"),
            seeking_talent: fields.take("seeking_talent"),
            seeking_description: fields.take("seeking_description"),
        }
    }
}

impl From<&venue::Model> for VenueForm {
    fn from(m: &venue::Model) -> Self {
        Self {
            name: Some(m.name.clone()),
            city: Some(m.city.clone()),
            state: Some(m.state.clone()),
            address: m.address.clone(),
            phone: m.phone.clone(),
            image_link: m.image_link.clone(),
            website: m.website.clone(),
            facebook_link: m.facebook_link.clone(),
            genres: Some(m.genres.clone()),
            seeking_talent: m.seeking_talent.then(|| "y".to_string()),
            seeking_description: m.seeking_description.clone(),
        }
    }
}

/// Builds the row for a new venue from a create submission.
pub fn new_venue(form: &VenueForm) -> Result<venue::ActiveModel, AppError> {
    let mut active = venue::ActiveModel {
        address: Set(form.address.clone()),
        seeking_talent: Set(is_checked(form.seeking_talent.as_deref())),
        ..Default::default()
    };
    apply_profile(&mut active, form)?;
    Ok(active)
}

/// Minimal projection used by listings and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

impl VenueSummary {
    pub fn new(m: &venue::Model, num_upcoming_shows: usize) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            num_upcoming_shows,
        }
    }
}

/// Full projection for the venue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(m: venue::Model, shows: ShowPartition<VenueShow>) -> Self {
        Self {
            id: m.id,
            genres: split_genres(&m.genres),
            name: m.name,
            city: m.city,
            state: m.state,
            address: m.address,
            phone: m.phone,
            website: m.website,
            facebook_link: m.facebook_link,
            image_link: m.image_link,
            seeking_talent: m.seeking_talent,
            seeking_description: m.seeking_description,
            past_shows_count: shows.past.len(),
            upcoming_shows_count: shows.upcoming.len(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
        }
    }
}

/// Venues of one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct VenueArea {
    pub city: String,
    /// State of the first venue seen in this city.
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups `(city, state, venue)` entries by city.
///
/// Cities appear in first-seen order and venues keep their input order within
/// a city. A city is assumed to lie in one state; the first venue's state wins.
pub fn group_by_city(
    entries: impl IntoIterator<Item = (String, String, VenueSummary)>,
) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    for (city, state, summary) in entries {
        match areas.iter_mut().find(|area| area.city == city) {
            Some(area) => area.venues.push(summary),
            None => areas.push(VenueArea {
                city,
                state,
                venues: vec![summary],
            }),
        }
    }
    areas
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct VenuesPage {
    pub areas: Vec<VenueArea>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct VenueFormPage {
    pub form: VenueForm,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct VenueEditPage {
    pub form: VenueForm,
    pub venue: VenueDetail,
}
