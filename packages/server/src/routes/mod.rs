use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn app_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::home::index))
        .merge(venue_routes())
        .merge(artist_routes())
        .merge(show_routes())
}

fn venue_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::venue::list_venues))
        .routes(routes!(handlers::venue::search_venues))
        .routes(routes!(
            handlers::venue::create_venue_form,
            handlers::venue::create_venue
        ))
        .routes(routes!(
            handlers::venue::get_venue,
            handlers::venue::delete_venue
        ))
        .routes(routes!(
            handlers::venue::edit_venue_form,
            handlers::venue::edit_venue
        ))
}

fn artist_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::artist::list_artists))
        .routes(routes!(handlers::artist::search_artists))
        .routes(routes!(
            handlers::artist::create_artist_form,
            handlers::artist::create_artist
        ))
        .routes(routes!(handlers::artist::get_artist))
        .routes(routes!(
            handlers::artist::edit_artist_form,
            handlers::artist::edit_artist
        ))
}

fn show_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::show::list_shows))
        .routes(routes!(
            handlers::show::create_show_form,
            handlers::show::create_show
        ))
}
