//! Injection seams: cancellation, distance, and literature lookup.

pub mod cancellation;
pub mod distance;
pub mod literature;

pub use cancellation::{Cancellable, CancellationToken};
pub use distance::{DistanceProvider, HaversineDistance};
pub use literature::{LiteratureSource, NoLiterature};
