use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A rendered page: the page payload plus flash messages queued for it.
#[derive(Serialize)]
pub struct Page<T> {
    pub messages: Vec<String>,
    #[serde(flatten)]
    pub data: T,
}

/// Form body of the search endpoints.
#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct SearchForm {
    /// Case-insensitive substring of the name. Empty matches everything.
    pub search_term: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Body of a search page, rendered alongside the flash `messages`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SearchPage<T> {
    /// The term as submitted.
    pub search_term: String,
    pub results: SearchResults<T>,
}

/// Case-insensitive substring match on names, with Unicode case folding.
///
/// A blank term matches every name. Wildcard characters have no special
/// meaning.
pub struct NameFilter(String);

impl NameFilter {
    pub fn new(term: &str) -> Self {
        Self(term.trim().to_lowercase())
    }

    pub fn matches(&self, name: &str) -> bool {
        self.0.is_empty() || name.to_lowercase().contains(&self.0)
    }
}

/// Checkbox semantics of the forms: only the literal `y` is true.
pub fn is_checked(value: Option<&str>) -> bool {
    value == Some("y")
}

/// The profile fields an edit submission overwrites, shared by venues and artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    City,
    State,
    Phone,
    Website,
    FacebookLink,
    SeekingDescription,
    ImageLink,
    Genres,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::Name,
        ProfileField::City,
        ProfileField::State,
        ProfileField::Phone,
        ProfileField::Website,
        ProfileField::FacebookLink,
        ProfileField::SeekingDescription,
        ProfileField::ImageLink,
        ProfileField::Genres,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::State => "state",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::FacebookLink => "facebook_link",
            Self::SeekingDescription => "seeking_description",
            Self::ImageLink => "image_link",
            Self::Genres => "genres",
        }
    }

    /// Fields backed by NOT NULL columns without a default.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::City | Self::State)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

/// Source of submitted profile values.
pub trait ProfileValues {
    fn profile_value(&self, field: ProfileField) -> Option<&str>;
}

/// A record whose profile fields can be overwritten one by one.
pub trait ProfileTarget {
    /// `value` is `None` only for optional fields; required fields are checked
    /// by [`apply_profile`] first.
    fn set_profile_field(&mut self, field: ProfileField, value: Option<String>);
}

/// Overwrites every profile field of `target` from `values`.
///
/// Required fields must be present and non-blank; they are stored trimmed.
/// A missing `genres` is stored as the empty string.
pub fn apply_profile<T: ProfileTarget, V: ProfileValues>(
    target: &mut T,
    values: &V,
) -> Result<(), AppError> {
    for field in ProfileField::ALL {
        let value = values.profile_value(field);
        let value = if field.is_required() {
            match value.map(str::trim) {
                Some(v) if !v.is_empty() => Some(v.to_string()),
                _ => return Err(AppError::Validation(format!("{field} is required"))),
            }
        } else {
            value.map(str::to_string)
        };
        target.set_profile_field(field, value);
    }
    Ok(())
}

/// An edit submission reduced to the enumerated profile fields and one
/// seeking flag. Every other submitted key is dropped.
#[derive(Debug, Default)]
pub struct ProfileEdit {
    values: HashMap<ProfileField, String>,
    pub seeking: bool,
}

impl ProfileEdit {
    pub fn from_form(mut form: HashMap<String, String>, seeking_key: &str) -> Self {
        let seeking = is_checked(form.remove(seeking_key).as_deref());
        let mut values = HashMap::new();
        for (key, value) in form {
            match key.parse::<ProfileField>() {
                Ok(field) => {
                    values.insert(field, value);
                }
                Err(()) => tracing::debug!(key = %key, "Ignoring non-editable form field"),
            }
        }
        Self { values, seeking }
    }
}

impl ProfileValues for ProfileEdit {
    fn profile_value(&self, field: ProfileField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}
