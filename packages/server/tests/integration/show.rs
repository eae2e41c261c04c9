use sea_orm::{EntityTrait, PaginatorTrait};

use fyyur_server::entity::show;

use crate::common::{TestApp, hours_from_now, routes};

mod show_creation {
    use super::*;

    #[tokio::test]
    async fn show_links_artist_and_venue() {
        let app = TestApp::spawn().await;
        let venue_id = app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let artist_id = app.create_artist("Guns N Petals").await;

        let message = app
            .create_show(artist_id, venue_id, "2035-04-01T20:00:00Z")
            .await;

        assert_eq!(message, "Show was successfully listed.");
        let res = app.get(routes::SHOWS).await;
        let shows = res.body["shows"].as_array().unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0]["venue_id"], venue_id);
        assert_eq!(shows[0]["venue_name"], "The Musical Hop");
        assert_eq!(shows[0]["artist_id"], artist_id);
        assert_eq!(shows[0]["artist_name"], "Guns N Petals");
        assert_eq!(shows[0]["start_time"], "Apr 01 2035 20:00:00");
    }

    #[tokio::test]
    async fn unknown_artist_is_refused() {
        let app = TestApp::spawn().await;
        let venue_id = app.create_venue("The Musical Hop", "San Francisco", "CA").await;

        let message = app.create_show(404, venue_id, &hours_from_now(1)).await;

        assert_eq!(message, "Show couldn't be listed.");
        assert_eq!(show::Entity::find().count(&app.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_venue_is_refused() {
        let app = TestApp::spawn().await;
        let artist_id = app.create_artist("Guns N Petals").await;

        let message = app.create_show(artist_id, 404, &hours_from_now(1)).await;

        assert_eq!(message, "Show couldn't be listed.");
        assert_eq!(show::Entity::find().count(&app.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn repeated_key_keeps_last_value() {
        let app = TestApp::spawn().await;
        let venue_id = app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let artist_id = app.create_artist("Guns N Petals").await;
        let artist_id = artist_id.to_string();
        let venue_id = venue_id.to_string();
        let start_time = hours_from_now(2);

        let res = app
            .post_form(
                routes::SHOWS_CREATE,
                &[
                    ("artist_id", "404"),
                    ("artist_id", artist_id.as_str()),
                    ("venue_id", venue_id.as_str()),
                    ("start_time", start_time.as_str()),
                ],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.message(), Some("Show was successfully listed."));
        assert_eq!(show::Entity::find().count(&app.db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn undecodable_body_flashes_failure() {
        let app = TestApp::spawn().await;

        let res = app
            .post_raw(routes::SHOWS_CREATE, "application/json", r#"{"artist_id":1}"#)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.message(), Some("Show couldn't be listed."));
        assert_eq!(show::Entity::find().count(&app.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unparseable_start_time_is_refused() {
        let app = TestApp::spawn().await;
        let venue_id = app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let artist_id = app.create_artist("Guns N Petals").await;

        let message = app.create_show(artist_id, venue_id, "next friday").await;

        assert_eq!(message, "Show couldn't be listed.");
        assert_eq!(show::Entity::find().count(&app.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_form_prefills_start_time() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::SHOWS_CREATE).await;

        assert_eq!(res.status, 200);
        let start_time = res.body["form"]["start_time"].as_str().unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(start_time, "%Y-%m-%d %H:%M:%S").is_ok(),
            "unexpected start_time: {start_time}"
        );
        assert!(res.body["form"]["artist_id"].is_null());
    }
}

mod show_listing {
    use super::*;

    #[tokio::test]
    async fn shows_are_ordered_by_start_time() {
        let app = TestApp::spawn().await;
        let venue_id = app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let artist_id = app.create_artist("Guns N Petals").await;
        app.create_show(artist_id, venue_id, "2035-04-15 20:00:00").await;
        app.create_show(artist_id, venue_id, "2019-05-21 21:30:00").await;
        app.create_show(artist_id, venue_id, "2035-04-08 20:00:00").await;

        let res = app.get(routes::SHOWS).await;

        let times: Vec<&str> = res.body["shows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["start_time"].as_str().unwrap())
            .collect();
        assert_eq!(
            times,
            vec![
                "May 21 2019 21:30:00",
                "Apr 08 2035 20:00:00",
                "Apr 15 2035 20:00:00"
            ]
        );
    }

    #[tokio::test]
    async fn past_show_is_not_counted_as_upcoming() {
        let app = TestApp::spawn().await;
        let venue_id = app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let artist_id = app.create_artist("Guns N Petals").await;
        app.create_show(artist_id, venue_id, &hours_from_now(-1)).await;

        let venues = app.get(routes::VENUES).await;
        assert_eq!(venues.body["areas"][0]["venues"][0]["num_upcoming_shows"], 0);

        let artists = app.get(routes::ARTISTS).await;
        assert_eq!(artists.body["artists"][0]["num_upcoming_shows"], 0);

        let detail = app.get(&routes::venue(venue_id)).await;
        assert_eq!(detail.body["past_shows_count"], 1);
        assert_eq!(detail.body["upcoming_shows_count"], 0);
        assert_eq!(detail.body["past_shows"][0]["artist_name"], "Guns N Petals");
    }
}
