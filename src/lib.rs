//! Resolves declarative floor plans into validated plan-view geometry.
//!
//! A [`Plan`] holds wall centerlines, openings and rooms. The resolvers in
//! [`operations`] turn walls into footprints, openings into cutouts and wall
//! loops into room outlines; [`resolve_and_validate`] runs all of them and
//! reports every violation at once.

pub mod builder;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{FloorplanError, Result, ValidationErrors};
pub use geometry::Polygon;
pub use math::{Length, Point2, ResolveParams, Units};
pub use model::Plan;
pub use operations::{
    opening_cutout, polygon_area_and_centroid, resolve_and_validate, wall_footprint,
};
