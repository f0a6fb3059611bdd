//! Map Widget
//!
//! The form only needs a center in, a marker position in and click
//! coordinates out; provider specifics stay behind [`MapWidget`].

mod leaflet;

use collector_form::Coordinate;

pub use leaflet::LeafletMap;

pub trait MapWidget {
    /// Re-center the view. Repeating the current center is a no-op.
    fn center_on(&mut self, center: Coordinate);

    /// Move the selection marker
    fn place_marker(&mut self, position: Coordinate);
}
