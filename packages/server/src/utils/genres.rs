/// Separator between genre tags in the stored `genres` column.
pub const GENRE_DELIMITER: char = ',';

/// Expands a stored genre string into its tags.
///
/// Tags are kept verbatim (no trimming) so that [`join_genres`] reconstructs
/// the stored value exactly. The empty string yields no tags rather than a
/// single empty tag.
pub fn split_genres(genres: &str) -> Vec<String> {
    if genres.is_empty() {
        return Vec::new();
    }
    genres.split(GENRE_DELIMITER).map(str::to_string).collect()
}

/// Inverse of [`split_genres`].
pub fn join_genres<S: AsRef<str>>(tags: &[S]) -> String {
    let mut out = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push(GENRE_DELIMITER);
        }
        out.push_str(tag.as_ref());
    }
    out
}
