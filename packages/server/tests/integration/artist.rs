use sea_orm::EntityTrait;

use crate::common::{TestApp, hours_from_now, routes};

mod artist_listing {
    use super::*;

    #[tokio::test]
    async fn artists_are_listed_in_id_order() {
        let app = TestApp::spawn().await;
        let first = app.create_artist("Guns N Petals").await;
        let second = app.create_artist("Matt Quevedo").await;

        let res = app.get(routes::ARTISTS).await;

        assert_eq!(res.status, 200);
        let artists = res.body["artists"].as_array().unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0]["id"], first);
        assert_eq!(artists[1]["id"], second);
        assert_eq!(artists[1]["name"], "Matt Quevedo");
        assert_eq!(artists[1]["num_upcoming_shows"], 0);
    }

    #[tokio::test]
    async fn search_counts_matches() {
        let app = TestApp::spawn().await;
        app.create_artist("Guns N Petals").await;
        app.create_artist("Matt Quevedo").await;
        app.create_artist("The Wild Sax Band").await;

        let res = app
            .post_form(routes::ARTISTS_SEARCH, &[("search_term", "A")])
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["results"]["count"], 3);

        let res = app
            .post_form(routes::ARTISTS_SEARCH, &[("search_term", "band")])
            .await;
        assert_eq!(res.body["results"]["count"], 1);
        assert_eq!(res.body["results"]["data"][0]["name"], "The Wild Sax Band");
    }

    #[tokio::test]
    async fn search_folds_case_beyond_ascii() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("ÉDITH PIAF TRIBUTE").await;
        app.create_artist("Edith Tribute").await;

        let res = app
            .post_form(routes::ARTISTS_SEARCH, &[("search_term", "édith")])
            .await;

        assert_eq!(res.body["results"]["count"], 1);
        assert_eq!(res.body["results"]["data"][0]["id"], id);
    }
}

mod artist_detail {
    use super::*;

    #[tokio::test]
    async fn detail_splits_shows_into_past_and_upcoming() {
        let app = TestApp::spawn().await;
        let venue_id = app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let artist_id = app.create_artist("Guns N Petals").await;
        let soon = hours_from_now(2);
        app.create_show(artist_id, venue_id, "2019-05-21 21:30:00").await;
        app.create_show(artist_id, venue_id, &hours_from_now(48)).await;
        app.create_show(artist_id, venue_id, &soon).await;

        let res = app.get(&routes::artist(artist_id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["past_shows_count"], 1);
        assert_eq!(res.body["upcoming_shows_count"], 2);
        assert_eq!(res.body["past_shows"][0]["start_time"], "May 21 2019 21:30:00");
        assert_eq!(res.body["past_shows"][0]["venue_name"], "The Musical Hop");
        assert_eq!(res.body["past_shows"][0]["venue_id"], venue_id);
        assert_eq!(
            res.body["upcoming_shows"][0]["start_time"],
            format_display(&soon)
        );
        assert_eq!(res.body["genres"], serde_json::json!(["Rock n Roll"]));
    }

    #[tokio::test]
    async fn unknown_artist_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::artist(7)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    fn format_display(form_time: &str) -> String {
        chrono::NaiveDateTime::parse_from_str(form_time, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .format("%b %d %Y %H:%M:%S")
            .to_string()
    }
}

mod artist_creation {
    use super::*;

    #[tokio::test]
    async fn create_stores_every_submitted_field() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::ARTISTS_CREATE,
                &[
                    ("name", "Guns N Petals"),
                    ("city", "San Francisco"),
                    ("state", "CA"),
                    ("phone", "326-123-5000"),
                    ("website", "https://www.gunsnpetalsband.com"),
                    ("genres", "Rock n Roll"),
                    ("seeking_venue", "y"),
                    ("seeking_description", "Looking for shows in the Bay Area"),
                ],
            )
            .await;

        assert_eq!(
            res.message(),
            Some("Artist `Guns N Petals` was successfully listed.")
        );
        let artists = fyyur_server::entity::artist::Entity::find()
            .all(&app.db)
            .await
            .unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].phone.as_deref(), Some("326-123-5000"));
        assert_eq!(artists[0].genres, "Rock n Roll");
        assert!(artists[0].seeking_venue);
    }

    #[tokio::test]
    async fn multi_select_genres_are_joined() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::ARTISTS_CREATE,
                &[
                    ("name", "The Wild Sax Band"),
                    ("city", "San Francisco"),
                    ("state", "CA"),
                    ("genres", "Jazz"),
                    ("genres", "Classical"),
                ],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.message(),
            Some("Artist `The Wild Sax Band` was successfully listed.")
        );
        let artists = fyyur_server::entity::artist::Entity::find()
            .all(&app.db)
            .await
            .unwrap();
        assert_eq!(artists[0].genres, "Jazz,Classical");
    }

    #[tokio::test]
    async fn blank_name_flashes_failure() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::ARTISTS_CREATE,
                &[("name", "  "), ("city", "San Francisco"), ("state", "CA")],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.message(), Some("Artist `  ` couldn't be listed."));
        assert_eq!(
            app.get(routes::ARTISTS).await.body["artists"],
            serde_json::json!([])
        );
    }
}

mod artist_editing {
    use super::*;

    #[tokio::test]
    async fn edit_overwrites_all_profile_fields() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("Guns N Petals").await;
        app.post_form(
            &routes::artist_edit(id),
            &[
                ("name", "Guns N Petals"),
                ("city", "San Francisco"),
                ("state", "CA"),
                ("phone", "326-123-5000"),
                ("genres", "Rock n Roll"),
                ("seeking_venue", "y"),
            ],
        )
        .await;

        let res = app
            .post_form(
                &routes::artist_edit(id),
                &[
                    ("name", "Guns N Roses"),
                    ("city", "Los Angeles"),
                    ("state", "CA"),
                    ("website", "https://example.com"),
                    ("image_link", "https://example.com/band.jpg"),
                    ("facebook_link", "https://facebook.com/band"),
                    ("seeking_description", "Not looking"),
                    ("genres", "Rock,Metal"),
                    ("id", "999"),
                ],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.message(),
            Some("Artist Guns N Roses was successfully updated.")
        );
        assert_eq!(res.body["id"], id);
        assert_eq!(res.body["name"], "Guns N Roses");
        assert_eq!(res.body["city"], "Los Angeles");
        assert!(res.body["phone"].is_null());
        assert_eq!(res.body["website"], "https://example.com");
        assert_eq!(res.body["image_link"], "https://example.com/band.jpg");
        assert_eq!(res.body["facebook_link"], "https://facebook.com/band");
        assert_eq!(res.body["seeking_description"], "Not looking");
        assert_eq!(res.body["genres"], serde_json::json!(["Rock", "Metal"]));
        assert_eq!(res.body["seeking_venue"], false);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("Guns N Petals").await;

        for name in ["First Edit", "Second Edit"] {
            app.post_form(
                &routes::artist_edit(id),
                &[("name", name), ("city", "San Francisco"), ("state", "CA")],
            )
            .await;
        }

        let res = app.get(&routes::artist(id)).await;
        assert_eq!(res.body["name"], "Second Edit");
    }

    #[tokio::test]
    async fn edit_form_carries_checkbox_state() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("Guns N Petals").await;
        app.post_form(
            &routes::artist_edit(id),
            &[
                ("name", "Guns N Petals"),
                ("city", "San Francisco"),
                ("state", "CA"),
                ("seeking_venue", "y"),
            ],
        )
        .await;

        let res = app.get(&routes::artist_edit(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["form"]["seeking_venue"], "y");
        assert_eq!(res.body["artist"]["seeking_venue"], true);
    }
}
