use std::rc::Rc;

use log::{debug, warn};
use tiny_skia::Pixmap;

use super::{generate, PatternSpec};

/// Result of a pattern lookup.
///
/// `None` is the "no pattern" sentinel: the face is painted with its solid
/// color only. Tiles are shared, so repeated lookups of an unchanged spec
/// return the same allocation.
#[derive(Debug, Clone)]
pub enum PatternTile {
    None,
    Tile(Rc<Pixmap>),
}

impl PatternTile {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, PatternTile::None)
    }

    #[inline]
    pub fn pixmap(&self) -> Option<&Pixmap> {
        match self {
            PatternTile::None => None,
            PatternTile::Tile(p) => Some(p),
        }
    }

    /// True when both refer to the same tile allocation (or both are `None`).
    pub fn same_tile(&self, other: &PatternTile) -> bool {
        match (self, other) {
            (PatternTile::None, PatternTile::None) => true,
            (PatternTile::Tile(a), PatternTile::Tile(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Memoizes the most recent tile for one face group.
///
/// Only the last spec is remembered; switching back to an earlier spec
/// regenerates it.
#[derive(Debug)]
pub struct PatternCache {
    width: u32,
    height: u32,
    /// `None` until the first lookup.
    last: Option<(PatternSpec, PatternTile)>,
}

impl PatternCache {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, last: None }
    }

    /// Returns the tile for `spec`, regenerating it only when `spec` differs
    /// from the previous request.
    ///
    /// Generation failures degrade to [`PatternTile::None`] and are cached
    /// like any other result.
    pub fn get(&mut self, spec: &PatternSpec) -> PatternTile {
        if let Some((last_spec, tile)) = &self.last {
            if last_spec == spec {
                return tile.clone();
            }
        }

        let tile = match generate::generate(spec, self.width, self.height) {
            Ok(Some(pixmap)) => {
                debug!("generated {} pattern tile {}x{} (size={}, alpha={})",
                    spec.name, self.width, self.height, spec.size, spec.alpha);
                PatternTile::Tile(Rc::new(pixmap))
            }
            Ok(None) => PatternTile::None,
            Err(e) => {
                warn!("{e}; painting without pattern");
                PatternTile::None
            }
        };

        self.last = Some((*spec, tile.clone()));
        tile
    }
}
