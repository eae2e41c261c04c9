use axum::extract::State;
use axum::response::Response;
use sea_orm::*;
use tracing::{info, instrument, warn};

use crate::entity::{show, venue};
use crate::error::{AppError, ErrorBody};
use crate::extractors::flash::Flash;
use crate::extractors::form::{AppForm, FormFields};
use crate::extractors::path::AppPath;
use crate::models::shared::{NameFilter, ProfileEdit, SearchForm, SearchPage, apply_profile};
use crate::models::venue::*;
use crate::state::AppState;
use crate::utils::records::find_venue;
use crate::utils::shows::{upcoming_counts_by_venue, venue_shows};

#[utoipa::path(
    get,
    path = "/venues",
    tag = "Venues",
    operation_id = "listVenues",
    summary = "List venues grouped by city",
    description = "Returns every venue as a summary, grouped by city in first-seen order. A city's state is taken from its first venue.",
    responses(
        (status = 200, description = "Venue areas", body = VenuesPage),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn list_venues(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, AppError> {
    let now = chrono::Utc::now();
    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::Id)
        .all(&state.db)
        .await?;
    let counts = upcoming_counts_by_venue(&state.db, now).await?;

    let areas = group_by_city(venues.into_iter().map(|v| {
        let summary = VenueSummary::new(&v, counts.get(&v.id).copied().unwrap_or(0));
        (v.city, v.state, summary)
    }));

    Ok(flash.render(VenuesPage { areas }))
}

#[utoipa::path(
    post,
    path = "/venues/search",
    tag = "Venues",
    operation_id = "searchVenues",
    summary = "Search venues by name",
    description = "Case-insensitive substring match on the venue name. Returns `{search_term, results: {count, data}}` with summary entries.",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching venues", body = SearchPage<VenueSummary>),
        (status = 400, description = "Malformed form body (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash, form))]
pub async fn search_venues(
    State(state): State<AppState>,
    flash: Flash,
    AppForm(form): AppForm<SearchForm>,
) -> Result<Response, AppError> {
    let now = chrono::Utc::now();
    let search_term = form.search_term.unwrap_or_default();

    let filter = NameFilter::new(&search_term);
    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::Id)
        .all(&state.db)
        .await?;
    let counts = upcoming_counts_by_venue(&state.db, now).await?;

    let data: Vec<VenueSummary> = venues
        .iter()
        .filter(|v| filter.matches(&v.name))
        .map(|v| VenueSummary::new(v, counts.get(&v.id).copied().unwrap_or(0)))
        .collect();

    Ok(flash.render(SearchPage {
        search_term,
        results: data.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "Venues",
    operation_id = "getVenue",
    summary = "Get a venue with its shows",
    description = "Returns every stored field, the genre list and the venue's shows split into past and upcoming relative to now.",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue details", body = VenueDetail),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn get_venue(
    State(state): State<AppState>,
    flash: Flash,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let model = find_venue(&state.db, id).await?;
    let shows = venue_shows(&state.db, id, chrono::Utc::now()).await?;
    Ok(flash.render(VenueDetail::new(model, shows)))
}

#[utoipa::path(
    get,
    path = "/venues/create",
    tag = "Venues",
    operation_id = "newVenueForm",
    summary = "Blank venue form",
    responses(
        (status = 200, description = "Empty form", body = VenueFormPage),
    ),
)]
#[instrument(skip(flash))]
pub async fn create_venue_form(flash: Flash) -> Response {
    flash.render(VenueFormPage {
        form: VenueForm::default(),
    })
}

#[utoipa::path(
    post,
    path = "/venues/create",
    tag = "Venues",
    operation_id = "createVenue",
    summary = "Create a venue",
    description = "Inserts a venue in its own transaction. Success and failure are both reported as a flash message on the home page; a failed insert leaves nothing behind. `seeking_talent` is true only for the value `y`. Repeated `genres` values are joined into one tag list.",
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the home page"),
    ),
)]
#[instrument(skip(state, flash, form))]
pub async fn create_venue(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<FormFields, AppError>,
) -> Response {
    let form = form.map(VenueForm::from);
    let name = form
        .as_ref()
        .ok()
        .and_then(|f| f.name.clone())
        .unwrap_or_default();

    let result = async {
        let active = new_venue(&form?)?;
        let txn = state.db.begin().await?;
        let model = active.insert(&txn).await?;
        txn.commit().await?;
        Ok::<_, AppError>(model)
    }
    .await;

    match result {
        Ok(model) => {
            info!(venue_id = model.id, name = %name, "Venue listed");
            flash.redirect(format!("Venue `{name}` was successfully listed."), "/")
        }
        Err(e) => {
            warn!(error = ?e, name = %name, "Venue could not be listed");
            flash.redirect(format!("Venue `{name}` couldn't be listed."), "/")
        }
    }
}

#[utoipa::path(
    delete,
    path = "/venues/{id}",
    tag = "Venues",
    operation_id = "deleteVenue",
    summary = "Delete a venue",
    description = "Deletes a venue that has no shows. Deletion does not cascade: a venue that still hosts shows is kept and the refusal is reported as a flash message.",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 303, description = "Redirect to the home page"),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn delete_venue(
    State(state): State<AppState>,
    flash: Flash,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let existing = find_venue(&state.db, id).await?;
    let name = existing.name;

    let result = async {
        let txn = state.db.begin().await?;
        let show_count = show::Entity::find()
            .filter(show::Column::VenueId.eq(id))
            .count(&txn)
            .await?;
        if show_count > 0 {
            return Err(AppError::Validation(format!(
                "Venue {id} still has {show_count} show(s)"
            )));
        }
        venue::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok::<_, AppError>(())
    }
    .await;

    Ok(match result {
        Ok(()) => {
            info!(venue_id = id, "Venue deleted");
            flash.redirect(format!("Venue `{name}` was successfully deleted."), "/")
        }
        Err(e) => {
            warn!(error = ?e, "Venue could not be deleted");
            flash.redirect(format!("Venue `{name}` couldn't be deleted."), "/")
        }
    })
}

#[utoipa::path(
    get,
    path = "/venues/{id}/edit",
    tag = "Venues",
    operation_id = "editVenueForm",
    summary = "Venue form pre-filled for editing",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Pre-filled form and current venue", body = VenueEditPage),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn edit_venue_form(
    State(state): State<AppState>,
    flash: Flash,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let model = find_venue(&state.db, id).await?;
    let shows = venue_shows(&state.db, id, chrono::Utc::now()).await?;
    let form = VenueForm::from(&model);
    Ok(flash.render(VenueEditPage {
        form,
        venue: VenueDetail::new(model, shows),
    }))
}

#[utoipa::path(
    post,
    path = "/venues/{id}/edit",
    tag = "Venues",
    operation_id = "editVenue",
    summary = "Overwrite a venue's profile",
    description = "Overwrites name, city, state, phone, website, facebook_link, seeking_description, image_link and genres with the submitted values (absent optional fields become empty) and sets `seeking_talent` to whether the value is `y`. Repeated `genres` values are joined into one tag list; other keys are ignored. Last write wins.",
    params(("id" = i32, Path, description = "Venue ID")),
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the venue page"),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash, form))]
pub async fn edit_venue(
    State(state): State<AppState>,
    flash: Flash,
    AppPath(id): AppPath<i32>,
    form: Result<FormFields, AppError>,
) -> Result<Response, AppError> {
    let existing = find_venue(&state.db, id).await?;
    let name = existing.name.clone();

    let result = async {
        let edit = ProfileEdit::from_form(form?.into_inner(), "seeking_talent");
        let mut active: venue::ActiveModel = existing.into();
        apply_profile(&mut active, &edit)?;
        active.seeking_talent = Set(edit.seeking);

        let txn = state.db.begin().await?;
        let model = active.update(&txn).await?;
        txn.commit().await?;
        Ok::<_, AppError>(model)
    }
    .await;

    let message = match result {
        Ok(model) => {
            info!(venue_id = id, "Venue updated");
            format!("Venue {} was successfully updated.", model.name)
        }
        Err(e) => {
            warn!(error = ?e, "Venue could not be updated");
            format!("Venue `{name}` couldn't be updated.")
        }
    };
    Ok(flash.redirect(message, &format!("/venues/{id}")))
}
