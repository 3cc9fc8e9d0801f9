//! Photo records and the upstream wire format.

use serde::Deserialize;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Camera {
    /// Short instrument code, e.g. `FHAZ`
    pub code: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rover {
    pub name: String,
    pub status: String,
}

/// One photograph plus its camera, rover and date metadata.
///
/// Records are never mutated after construction. Pages share them through
/// `Arc<PhotoRecord>`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PhotoRecord {
    pub id: u64,
    pub image_url: String,
    /// `YYYY-MM-DD`, kept as a display string
    pub earth_date: String,
    pub camera: Camera,
    pub rover: Rover,
}

#[derive(Debug, Deserialize)]
pub struct WireCamera {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct WireRover {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct WirePhoto {
    pub id: u64,
    pub img_src: String,
    pub earth_date: String,
    pub camera: WireCamera,
    pub rover: WireRover,
}

/// Body of `GET {base}/curiosity/photos`
#[derive(Debug, Deserialize)]
pub struct WirePhotos {
    pub photos: Vec<WirePhoto>,
}

impl From<WirePhoto> for PhotoRecord {
    fn from(wire: WirePhoto) -> Self {
        Self {
            id: wire.id,
            image_url: wire.img_src,
            earth_date: wire.earth_date,
            camera: Camera {
                code: wire.camera.name,
                full_name: wire.camera.full_name,
            },
            rover: Rover {
                name: wire.rover.name,
                status: wire.rover.status,
            },
        }
    }
}
