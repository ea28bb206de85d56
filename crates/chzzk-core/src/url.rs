//! URL helper functions for the Chzzk API
//!
//! Provides the base URL and the builder for the lives endpoint path.

/// Production base URL of the Chzzk service API
pub const BASE_URL: &str = "https://api.chzzk.naver.com";

/// Fixed sort order requesting the most popular broadcasts first
pub const SORT_TYPE: &str = "POPULAR";

/// Builds the lives endpoint path for the given result count
///
/// The API itself caps the number of returned entries, so `limit` is
/// passed through verbatim.
///
/// # Arguments
/// * `limit` - Number of live broadcasts to request
///
/// # Returns
/// Path with query string, ready to append to [`BASE_URL`]
///
/// # Example
/// ```
/// use chzzk_core::url::build_lives_path;
/// let path = build_lives_path(20);
/// assert_eq!(path, "/service/v1/lives?limit=20&sortType=POPULAR");
/// ```
pub fn build_lives_path(limit: u32) -> String {
    format!("/service/v1/lives?limit={limit}&sortType={SORT_TYPE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_lives_path() {
        let path = build_lives_path(100);
        assert_eq!(path, "/service/v1/lives?limit=100&sortType=POPULAR");
    }

    #[test]
    fn test_build_lives_path_small_limit() {
        let path = build_lives_path(1);
        assert_eq!(path, "/service/v1/lives?limit=1&sortType=POPULAR");
    }

    #[test]
    fn test_full_url_shape() {
        let url = format!("{}{}", BASE_URL, build_lives_path(50));
        assert_eq!(
            url,
            "https://api.chzzk.naver.com/service/v1/lives?limit=50&sortType=POPULAR"
        );
    }
}
