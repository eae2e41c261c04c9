use axum::extract::State;
use axum::response::Response;
use sea_orm::*;
use tracing::{info, instrument, warn};

use crate::entity::artist;
use crate::error::{AppError, ErrorBody};
use crate::extractors::flash::Flash;
use crate::extractors::form::{AppForm, FormFields};
use crate::extractors::path::AppPath;
use crate::models::artist::*;
use crate::models::shared::{NameFilter, ProfileEdit, SearchForm, SearchPage, apply_profile};
use crate::state::AppState;
use crate::utils::records::find_artist;
use crate::utils::shows::{artist_shows, upcoming_counts_by_artist};

#[utoipa::path(
    get,
    path = "/artists",
    tag = "Artists",
    operation_id = "listArtists",
    summary = "List artists",
    responses(
        (status = 200, description = "All artists ordered by id", body = ArtistsPage),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn list_artists(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, AppError> {
    let artists = artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(&state.db)
        .await?;
    let counts = upcoming_counts_by_artist(&state.db, chrono::Utc::now()).await?;

    let artists = artists
        .iter()
        .map(|a| ArtistSummary::new(a, counts.get(&a.id).copied().unwrap_or(0)))
        .collect();

    Ok(flash.render(ArtistsPage { artists }))
}

#[utoipa::path(
    post,
    path = "/artists/search",
    tag = "Artists",
    operation_id = "searchArtists",
    summary = "Search artists by name",
    description = "Case-insensitive substring match on the artist name. Returns `{search_term, results: {count, data}}` with summary entries.",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching artists", body = SearchPage<ArtistSummary>),
        (status = 400, description = "Malformed form body (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash, form))]
pub async fn search_artists(
    State(state): State<AppState>,
    flash: Flash,
    AppForm(form): AppForm<SearchForm>,
) -> Result<Response, AppError> {
    let search_term = form.search_term.unwrap_or_default();

    let filter = NameFilter::new(&search_term);
    let artists = artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(&state.db)
        .await?;
    let counts = upcoming_counts_by_artist(&state.db, chrono::Utc::now()).await?;

    let data: Vec<ArtistSummary> = artists
        .iter()
        .filter(|a| filter.matches(&a.name))
        .map(|a| ArtistSummary::new(a, counts.get(&a.id).copied().unwrap_or(0)))
        .collect();

    Ok(flash.render(SearchPage {
        search_term,
        results: data.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/artists/{id}",
    tag = "Artists",
    operation_id = "getArtist",
    summary = "Get an artist with their shows",
    description = "Returns every stored field, the genre list and the artist's shows split into past and upcoming relative to now.",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Artist details", body = ArtistDetail),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn get_artist(
    State(state): State<AppState>,
    flash: Flash,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let model = find_artist(&state.db, id).await?;
    let shows = artist_shows(&state.db, id, chrono::Utc::now()).await?;
    Ok(flash.render(ArtistDetail::new(model, shows)))
}

#[utoipa::path(
    get,
    path = "/artists/create",
    tag = "Artists",
    operation_id = "newArtistForm",
    summary = "Blank artist form",
    responses(
        (status = 200, description = "Empty form", body = ArtistFormPage),
    ),
)]
#[instrument(skip(flash))]
pub async fn create_artist_form(flash: Flash) -> Response {
    flash.render(ArtistFormPage {
        form: ArtistForm::default(),
    })
}

#[utoipa::path(
    post,
    path = "/artists/create",
    tag = "Artists",
    operation_id = "createArtist",
    summary = "Create an artist",
    description = "Inserts an artist with every submitted field in its own transaction. The outcome is reported as a flash message on the home page. `seeking_venue` is true only for the value `y`. Repeated `genres` values are joined into one tag list.",
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the home page"),
    ),
)]
#[instrument(skip(state, flash, form))]
pub async fn create_artist(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<FormFields, AppError>,
) -> Response {
    let form = form.map(ArtistForm::from);
    let name = form
        .as_ref()
        .ok()
        .and_then(|f| f.name.clone())
        .unwrap_or_default();

    let result = async {
        let active = new_artist(&form?)?;
        let txn = state.db.begin().await?;
        let model = active.insert(&txn).await?;
        txn.commit().await?;
        Ok::<_, AppError>(model)
    }
    .await;

    match result {
        Ok(model) => {
            info!(artist_id = model.id, name = %name, "Artist listed");
            flash.redirect(format!("Artist `{name}` was successfully listed."), "/")
        }
        Err(e) => {
            warn!(error = ?e, name = %name, "Artist could not be listed");
            flash.redirect(format!("Artist `{name}` couldn't be listed."), "/")
        }
    }
}

#[utoipa::path(
    get,
    path = "/artists/{id}/edit",
    tag = "Artists",
    operation_id = "editArtistForm",
    summary = "Artist form pre-filled for editing",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Pre-filled form and current artist", body = ArtistEditPage),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn edit_artist_form(
    State(state): State<AppState>,
    flash: Flash,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let model = find_artist(&state.db, id).await?;
    let shows = artist_shows(&state.db, id, chrono::Utc::now()).await?;
    let form = ArtistForm::from(&model);
    Ok(flash.render(ArtistEditPage {
        form,
        artist: ArtistDetail::new(model, shows),
    }))
}

#[utoipa::path(
    post,
    path = "/artists/{id}/edit",
    tag = "Artists",
    operation_id = "editArtist",
    summary = "Overwrite an artist's profile",
    description = "Overwrites name, city, state, phone, website, facebook_link, seeking_description, image_link and genres with the submitted values (absent optional fields become empty) and sets `seeking_venue` to whether the value is `y`. Repeated `genres` values are joined into one tag list; other keys are ignored. Last write wins.",
    params(("id" = i32, Path, description = "Artist ID")),
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the artist page"),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, flash, form))]
pub async fn edit_artist(
    State(state): State<AppState>,
    flash: Flash,
    AppPath(id): AppPath<i32>,
    form: Result<FormFields, AppError>,
) -> Result<Response, AppError> {
    let existing = find_artist(&state.db, id).await?;
    let name = existing.name.clone();

    let result = async {
        let edit = ProfileEdit::from_form(form?.into_inner(), "seeking_venue");
        let mut active: artist::ActiveModel = existing.into();
        apply_profile(&mut active, &edit)?;
        active.seeking_venue = Set(edit.seeking);

        let txn = state.db.begin().await?;
        let model = active.update(&txn).await?;
        txn.commit().await?;
        Ok::<_, AppError>(model)
    }
    .await;

    let message = match result {
        Ok(model) => {
            info!(artist_id = id, "Artist updated");
            format!("Artist {} was successfully updated.", model.name)
        }
        Err(e) => {
            warn!(error = ?e, "Artist could not be updated");
            format!("Artist `{name}` couldn't be updated.")
        }
    };
    Ok(flash.redirect(message, &format!("/artists/{id}")))
}
