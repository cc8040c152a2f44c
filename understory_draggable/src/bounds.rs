// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag bounds, the client-X to value mapping, and the bounds cache.
//!
//! ## Usage
//!
//! 1) Describe the draggable range with [`DraggableBounds`]: where it starts in
//!    client coordinates, how wide it is, and optionally which normalized values
//!    to clamp to.
//! 2) Map pointer positions with [`DraggableBounds::position_for`].
//! 3) Wrap an expensive measurement (a layout read, typically) in a
//!    [`BoundsCache`] so it runs once per gesture instead of once per move.
//!
//! ## Minimal example
//!
//! ```
//! use understory_draggable::bounds::{BoundsCache, DraggableBounds};
//!
//! let bounds = DraggableBounds::new(100.0, 200.0).with_value_range(0.0, 1.0);
//!
//! let inside = bounds.position_for(150.0);
//! assert_eq!((inside.value, inside.x), (0.25, 50.0));
//!
//! // Left of the range: clamped to `min_value`, and `x` follows.
//! let clamped = bounds.position_for(50.0);
//! assert_eq!((clamped.value, clamped.x), (0.0, 0.0));
//!
//! let mut calls = 0;
//! let mut cache = BoundsCache::new(move |_tag: Option<&str>| {
//!     calls += 1;
//!     assert_eq!(calls, 1, "provider should only run once");
//!     bounds
//! });
//! assert_eq!(cache.get(None), bounds);
//! assert_eq!(cache.get(None), bounds);
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::Rect;

/// The horizontal range a drag can span, and how to normalize it.
///
/// Values are copied into the cache and never mutated there; a new
/// measurement replaces the old one wholesale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DraggableBounds {
    /// Left edge of the range in client coordinates; every incoming X is
    /// measured against it.
    pub client_x_left: f64,
    /// Width of the range in pixels. Must be non-zero for the mapping to be
    /// meaningful; this is not checked.
    pub width: f64,
    /// Lower clamp for the normalized value.
    pub min_value: Option<f64>,
    /// Upper clamp for the normalized value.
    pub max_value: Option<f64>,
}

impl DraggableBounds {
    /// Unclamped bounds starting at `client_x_left` and spanning `width` pixels.
    #[must_use]
    pub const fn new(client_x_left: f64, width: f64) -> Self {
        Self {
            client_x_left,
            width,
            min_value: None,
            max_value: None,
        }
    }

    /// Unclamped bounds covering the horizontal extent of a measured rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.width())
    }

    /// Sets the lower clamp.
    #[must_use]
    pub const fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Sets the upper clamp.
    #[must_use]
    pub const fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Sets both clamps.
    #[must_use]
    pub const fn with_value_range(self, min_value: f64, max_value: f64) -> Self {
        self.with_min_value(min_value).with_max_value(max_value)
    }

    /// Maps a client X coordinate into this range.
    ///
    /// The result is clamped to `min_value` / `max_value` when those are set.
    /// When clamping kicks in, `x` is recomputed from the clamped value, so `x`
    /// is always the pixel offset that maps to `value`.
    #[must_use]
    pub fn position_for(&self, client_x: f64) -> Position {
        let x = client_x - self.client_x_left;
        let value = x / self.width;
        match (self.min_value, self.max_value) {
            (Some(min), _) if value < min => Position {
                value: min,
                x: min * self.width,
            },
            (_, Some(max)) if value > max => Position {
                value: max,
                x: max * self.width,
            },
            _ => Position { value, x },
        }
    }
}

/// A pointer position inside a [`DraggableBounds`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// Normalized, clamped value.
    pub value: f64,
    /// Pixel offset from the left edge of the range that corresponds to `value`.
    pub x: f64,
}

/// Supplies bounds on demand.
///
/// The tag is the controller's opaque label, so one provider can serve several
/// draggable elements. Closures of the form `FnMut(Option<&str>) -> DraggableBounds`
/// implement this trait.
pub trait BoundsProvider {
    /// Measures the current bounds for `tag`.
    fn bounds(&mut self, tag: Option<&str>) -> DraggableBounds;
}

impl<F> BoundsProvider for F
where
    F: FnMut(Option<&str>) -> DraggableBounds,
{
    fn bounds(&mut self, tag: Option<&str>) -> DraggableBounds {
        self(tag)
    }
}

/// Lazily fetches bounds from a provider and keeps them until reset.
pub struct BoundsCache {
    provider: Box<dyn BoundsProvider>,
    cached: Option<DraggableBounds>,
}

impl fmt::Debug for BoundsCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundsCache")
            .field("cached", &self.cached)
            .finish_non_exhaustive()
    }
}

impl BoundsCache {
    /// Creates an empty cache in front of `provider`.
    pub fn new(provider: impl BoundsProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub(crate) fn from_boxed(provider: Box<dyn BoundsProvider>) -> Self {
        Self {
            provider,
            cached: None,
        }
    }

    /// Returns the cached bounds, asking the provider first if the cache is empty.
    pub fn get(&mut self, tag: Option<&str>) -> DraggableBounds {
        if let Some(bounds) = self.cached {
            return bounds;
        }
        let bounds = self.provider.bounds(tag);
        tracing::trace!(?tag, ?bounds, "fetched draggable bounds");
        self.cached = Some(bounds);
        bounds
    }

    /// Drops the cached bounds. Safe to call on an empty cache.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// Returns `true` if bounds are currently cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}
