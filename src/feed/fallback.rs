//! Photos shown when the live feed is unavailable.

use crate::photo::{Camera, PhotoRecord, Rover};

struct FallbackPhoto {
    id: u64,
    image_url: &'static str,
    camera_code: &'static str,
    camera_full_name: &'static str,
}

const EARTH_DATE: &str = "2015-05-30";
const ROVER_NAME: &str = "Curiosity";
const ROVER_STATUS: &str = "active";

const FALLBACK_PHOTOS: &[FallbackPhoto] = &[
    FallbackPhoto {
        id: 102693,
        image_url: "http://mars.jpl.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FLB_486265257EDR_F0481570FHAZ00323M_.JPG",
        camera_code: "FHAZ",
        camera_full_name: "Front Hazard Avoidance Camera",
    },
    FallbackPhoto {
        id: 102694,
        image_url: "http://mars.jpl.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FRB_486265257EDR_F0481570FHAZ00323M_.JPG",
        camera_code: "FHAZ",
        camera_full_name: "Front Hazard Avoidance Camera",
    },
    FallbackPhoto {
        id: 102695,
        image_url: "http://mars.jpl.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/rcam/RLB_486265291EDR_F0481570RHAZ00323M_.JPG",
        camera_code: "RHAZ",
        camera_full_name: "Rear Hazard Avoidance Camera",
    },
];

/// The built-in fallback batch, in display order.
pub fn photos() -> Vec<PhotoRecord> {
    FALLBACK_PHOTOS
        .iter()
        .map(|photo| PhotoRecord {
            id: photo.id,
            image_url: photo.image_url.to_string(),
            earth_date: EARTH_DATE.to_string(),
            camera: Camera {
                code: photo.camera_code.to_string(),
                full_name: photo.camera_full_name.to_string(),
            },
            rover: Rover {
                name: ROVER_NAME.to_string(),
                status: ROVER_STATUS.to_string(),
            },
        })
        .collect()
}
