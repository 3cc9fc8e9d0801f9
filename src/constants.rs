//! Application-wide constants

/// Base URL of the Mars rover photos API
pub const API_BASE: &str = "https://api.nasa.gov/mars-photos/api/v1/rovers";

/// Shared demo key accepted by the API with a low rate limit
pub const API_KEY: &str = "DEMO_KEY";

/// The only rover the gallery asks for
pub const ROVER: &str = "curiosity";

/// Earth date sent upstream, exactly as the API expects it
pub const EARTH_DATE: &str = "2015-6-3";

/// Maximum number of photos kept from a single response
pub const MAX_BATCH_LEN: usize = 15;

/// Height of the photo preview inside a gallery card
pub const CARD_IMAGE_HEIGHT: f32 = 200.0;

/// Height of the photo on the details page
pub const DETAILS_IMAGE_HEIGHT: f32 = 360.0;

/// Minimum width of a gallery card before the grid drops a column
pub const CARD_MIN_WIDTH: usize = 320;

/// Maximum width for responsive grid layout
pub const MAX_GRID_WIDTH: f32 = 1600.0;
