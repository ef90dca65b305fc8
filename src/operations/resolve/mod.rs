mod opening_cutout;
mod room_loop;
mod wall_footprint;

pub use opening_cutout::{bounds_violations, opening_cutout, OpeningCutout, OpeningSpan};
pub use room_loop::RoomLoop;
pub use wall_footprint::{wall_footprint, WallFootprint, WallFrame};
