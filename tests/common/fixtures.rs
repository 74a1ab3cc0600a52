use mosaic::{Size, TileSource};
use serde::Deserialize;
use serde_json::json;

/// A photo record the way a gallery data source would ship it.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub width: f64,
    pub height: f64,
    pub src: String,
}

pub struct PhotoSource(pub Vec<Photo>);

impl TileSource for PhotoSource {
    fn count(&self) -> usize {
        self.0.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.0.get(index).map(|p| Size::new(p.width, p.height))
    }
}

/// A small gallery with mixed orientations.
pub fn gallery() -> PhotoSource {
    let photos = json!([
        { "width": 4000, "height": 3000, "src": "alps.jpg" },
        { "width": 3000, "height": 4000, "src": "door.jpg" },
        { "width": 6000, "height": 2000, "src": "ridge-pano.jpg" },
        { "width": 4000, "height": 3000, "src": "harbor.jpg" },
        { "width": 2400, "height": 3600, "src": "lighthouse.jpg" },
        { "width": 5200, "height": 1400, "src": "skyline-pano.jpg" },
        { "width": 4000, "height": 4000, "src": "window.jpg" },
        { "width": 4000, "height": 2250, "src": "ferry.jpg" },
        { "width": 3000, "height": 4500, "src": "spire.jpg" },
        { "width": 4000, "height": 3000, "src": "market.jpg" },
        { "width": 4800, "height": 1600, "src": "valley-pano.jpg" },
        { "width": 4000, "height": 3000, "src": "dunes.jpg" },
        { "width": 3600, "height": 2400, "src": "pier.jpg" },
        { "width": 4000, "height": 5000, "src": "falls.jpg" },
        { "width": 4000, "height": 3000, "src": "orchard.jpg" },
        { "width": 5600, "height": 1600, "src": "coast-pano.jpg" },
    ]);
    PhotoSource(serde_json::from_value(photos).expect("fixture parses"))
}

pub fn squares(n: usize) -> Vec<Size> {
    vec![Size::new(100.0, 100.0); n]
}

pub fn landscapes(n: usize) -> Vec<Size> {
    vec![Size::new(300.0, 200.0); n]
}

/// 4:1 panoramas, the shape that exercises sub-stacking under the default
/// thresholds.
pub fn panoramas(n: usize) -> Vec<Size> {
    vec![Size::new(400.0, 100.0); n]
}
