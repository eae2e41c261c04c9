use std::collections::HashMap;

use axum::extract::State;
use axum::response::Response;
use sea_orm::*;
use tracing::{info, instrument, warn};

use crate::entity::{artist, show, venue};
use crate::error::AppError;
use crate::extractors::flash::Flash;
use crate::extractors::form::FormFields;
use crate::models::show::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/shows",
    tag = "Shows",
    operation_id = "listShows",
    summary = "List shows",
    description = "Every show with its venue and artist names, ordered by start time.",
    responses(
        (status = 200, description = "All shows", body = ShowsPage),
    ),
)]
#[instrument(skip(state, flash))]
pub async fn list_shows(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, AppError> {
    let shows = show::Entity::find()
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(&state.db)
        .await?;
    let venues: HashMap<i32, venue::Model> = venue::Entity::find()
        .all(&state.db)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();
    let artists: HashMap<i32, artist::Model> = artist::Entity::find()
        .all(&state.db)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    let shows = shows
        .iter()
        .filter_map(|s| {
            match (venues.get(&s.venue_id), artists.get(&s.artist_id)) {
                (Some(v), Some(a)) => Some(ShowItem::new(s, v, a)),
                _ => {
                    warn!(show_id = s.id, "Show references a missing venue or artist");
                    None
                }
            }
        })
        .collect();

    Ok(flash.render(ShowsPage { shows }))
}

#[utoipa::path(
    get,
    path = "/shows/create",
    tag = "Shows",
    operation_id = "newShowForm",
    summary = "Show form with the start time pre-filled",
    responses(
        (status = 200, description = "Form with `start_time` set to now", body = ShowFormPage),
    ),
)]
#[instrument(skip(flash))]
pub async fn create_show_form(flash: Flash) -> Response {
    flash.render(ShowFormPage {
        form: ShowForm::starting_at(&chrono::Utc::now()),
    })
}

#[utoipa::path(
    post,
    path = "/shows/create",
    tag = "Shows",
    operation_id = "createShow",
    summary = "Create a show",
    description = "Books an artist at a venue. Both must exist; the check and the insert share one transaction. The outcome is reported as a flash message on the home page.",
    request_body(content = ShowForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the home page"),
    ),
)]
#[instrument(skip(state, flash, form))]
pub async fn create_show(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<FormFields, AppError>,
) -> Response {
    let result = async {
        let new_show = ShowForm::from(form?).parse()?;

        let txn = state.db.begin().await?;
        if artist::Entity::find_by_id(new_show.artist_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(ShowFormError::UnknownReference {
                entity: "artist",
                id: new_show.artist_id,
            }
            .into());
        }
        if venue::Entity::find_by_id(new_show.venue_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(ShowFormError::UnknownReference {
                entity: "venue",
                id: new_show.venue_id,
            }
            .into());
        }

        let model = show::ActiveModel {
            artist_id: Set(new_show.artist_id),
            venue_id: Set(new_show.venue_id),
            start_time: Set(new_show.start_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;
        Ok::<_, AppError>(model)
    }
    .await;

    match result {
        Ok(model) => {
            info!(
                show_id = model.id,
                artist_id = model.artist_id,
                venue_id = model.venue_id,
                "Show listed"
            );
            flash.redirect("Show was successfully listed.", "/")
        }
        Err(e) => {
            warn!(error = ?e, "Show could not be listed");
            flash.redirect("Show couldn't be listed.", "/")
        }
    }
}
