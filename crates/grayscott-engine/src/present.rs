//! The presentation boundary.
//!
//! After every tick the engine hands the committed grid to a
//! [`Presenter`]. The grid is fully written and cannot change for the
//! duration of the call. What happens next (an edge filter, a surface
//! upload, a file) is the presenter's business.

use grayscott_arena::Snapshot;
use grayscott_core::{Extent, Generation};
use grayscott_stencils::{DisplayImage, EdgeFilter};

/// Consumer of each tick's final grid.
pub trait Presenter: Send {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Consume the committed grid of the tick that just finished.
    fn present(&mut self, frame: &Snapshot<'_>);
}

/// Presenter applying the [`EdgeFilter`] and keeping the latest image.
#[derive(Debug)]
pub struct EdgePresenter {
    filter: EdgeFilter,
    image: DisplayImage,
    generation: Option<Generation>,
}

impl EdgePresenter {
    /// A presenter with the given filter, preallocating an image for `extent`.
    pub fn new(filter: EdgeFilter, extent: Extent) -> Self {
        Self {
            filter,
            image: DisplayImage::new(extent),
            generation: None,
        }
    }

    /// The most recently rendered image.
    pub fn image(&self) -> &DisplayImage {
        &self.image
    }

    /// Generation of the grid behind [`image`](Self::image), `None` before
    /// the first frame.
    pub fn generation(&self) -> Option<Generation> {
        self.generation
    }
}

impl Presenter for EdgePresenter {
    fn name(&self) -> &str {
        "edge"
    }

    fn present(&mut self, frame: &Snapshot<'_>) {
        self.filter.apply_into(frame, &mut self.image);
        self.generation = Some(frame.generation());
    }
}
