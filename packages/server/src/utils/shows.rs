//! Past/upcoming partitioning of a venue's or artist's shows.
//!
//! A show starting exactly at the reference instant is upcoming. Both halves
//! are ordered by ascending start time, ties broken by show id.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::entity::{artist, show, venue};
use crate::error::AppError;
use crate::models::show::{ArtistShow, VenueShow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPartition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> ShowPartition<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ShowPartition<U> {
        ShowPartition {
            past: self.past.into_iter().map(&mut f).collect(),
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
        }
    }
}

pub fn is_upcoming(start_time: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    start_time >= now
}

/// Splits `items` around `now`. `key` yields each item's start time and show id.
pub fn partition_by_start<T>(
    mut items: Vec<T>,
    now: DateTime<Utc>,
    key: impl Fn(&T) -> (DateTime<Utc>, i32),
) -> ShowPartition<T> {
    items.sort_by_key(|item| key(item));
    let (upcoming, past): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|item| is_upcoming(&key(item).0, &now));
    ShowPartition { past, upcoming }
}

/// Counts upcoming shows per owner from `(owner_id, start_time)` pairs.
pub fn count_upcoming(
    pairs: impl IntoIterator<Item = (i32, DateTime<Utc>)>,
    now: DateTime<Utc>,
) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for (owner_id, start_time) in pairs {
        if is_upcoming(&start_time, &now) {
            *counts.entry(owner_id).or_insert(0) += 1;
        }
    }
    counts
}

/// Shows held at a venue, each annotated with its artist.
pub async fn venue_shows<C: ConnectionTrait>(
    db: &C,
    venue_id: i32,
    now: DateTime<Utc>,
) -> Result<ShowPartition<VenueShow>, AppError> {
    let rows = show::Entity::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .find_also_related(artist::Entity)
        .all(db)
        .await?;

    let rows = rows
        .into_iter()
        .filter_map(|(s, a)| match a {
            Some(a) => Some((s, a)),
            None => {
                tracing::warn!(
                    show_id = s.id,
                    artist_id = s.artist_id,
                    "Show references a missing artist"
                );
                None
            }
        })
        .collect();

    Ok(partition_by_start(rows, now, |(s, _)| (s.start_time, s.id))
        .map(|(s, a)| VenueShow::new(&s, a)))
}

/// Shows an artist plays, each annotated with its venue.
pub async fn artist_shows<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
    now: DateTime<Utc>,
) -> Result<ShowPartition<ArtistShow>, AppError> {
    let rows = show::Entity::find()
        .filter(show::Column::ArtistId.eq(artist_id))
        .find_also_related(venue::Entity)
        .all(db)
        .await?;

    let rows = rows
        .into_iter()
        .filter_map(|(s, v)| match v {
            Some(v) => Some((s, v)),
            None => {
                tracing::warn!(
                    show_id = s.id,
                    venue_id = s.venue_id,
                    "Show references a missing venue"
                );
                None
            }
        })
        .collect();

    Ok(partition_by_start(rows, now, |(s, _)| (s.start_time, s.id))
        .map(|(s, v)| ArtistShow::new(&s, v)))
}

/// Upcoming show counts keyed by venue id.
pub async fn upcoming_counts_by_venue<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<HashMap<i32, usize>, AppError> {
    let pairs = show::Entity::find()
        .select_only()
        .column(show::Column::VenueId)
        .column(show::Column::StartTime)
        .into_tuple::<(i32, DateTime<Utc>)>()
        .all(db)
        .await?;
    Ok(count_upcoming(pairs, now))
}

/// Upcoming show counts keyed by artist id.
pub async fn upcoming_counts_by_artist<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<HashMap<i32, usize>, AppError> {
    let pairs = show::Entity::find()
        .select_only()
        .column(show::Column::ArtistId)
        .column(show::Column::StartTime)
        .into_tuple::<(i32, DateTime<Utc>)>()
        .all(db)
        .await?;
    Ok(count_upcoming(pairs, now))
}
