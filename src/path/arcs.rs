//! Arc-based path storage.
//!
//! Shared boundaries are stored once as arcs. A path is a list of signed arc
//! ids: id `i >= 0` walks arc `i` from its first vertex to its last, id `!i`
//! (that is `-i - 1`) walks the same arc backwards. Consecutive arcs of a
//! path share their junction vertex, so it is emitted only once.

use super::PathSource;
use crate::bounds::Bounds;
use crate::error::{GeomError, GeomResult};
use crate::primitives::Point2;
use num_traits::Float;
use std::iter::Rev;
use std::slice::Iter;

/// Returns the id that walks the same arc in the opposite direction.
#[inline]
pub fn reverse_arc_id(id: i32) -> i32 {
    !id
}

#[inline]
fn arc_index(id: i32) -> (usize, bool) {
    if id >= 0 {
        (id as usize, false)
    } else {
        ((!id) as usize, true)
    }
}

/// A validated sequence of arc ids.
///
/// Built by [`ArcCollection::path`], which rejects ids the collection does
/// not contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArcPath {
    ids: Vec<i32>,
}

impl ArcPath {
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// The same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            ids: self.ids.iter().rev().map(|&id| reverse_arc_id(id)).collect(),
        }
    }
}

/// Arc storage shared by every path of a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCollection<F> {
    arcs: Vec<Vec<Point2<F>>>,
    bounds: Bounds<F>,
}

impl<F: Float> ArcCollection<F> {
    pub fn new() -> Self {
        Self {
            arcs: Vec::new(),
            bounds: Bounds::empty(),
        }
    }

    /// Builds a collection from a list of arcs; arc `i` gets id `i`.
    pub fn from_arcs<A, I>(arcs: A) -> Self
    where
        A: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Into<Point2<F>>,
    {
        let mut collection = Self::new();
        for arc in arcs {
            collection.add_arc(arc);
        }
        collection
    }

    /// Appends an arc and returns its forward id.
    pub fn add_arc<I>(&mut self, arc: I) -> i32
    where
        I: IntoIterator,
        I::Item: Into<Point2<F>>,
    {
        let arc: Vec<Point2<F>> = arc.into_iter().map(Into::into).collect();
        for &p in &arc {
            self.bounds.merge_point(p);
        }
        self.arcs.push(arc);
        (self.arcs.len() - 1) as i32
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Vertices of one arc in storage order, or `None` for an unknown id.
    pub fn arc(&self, id: i32) -> Option<&[Point2<F>]> {
        let (index, _) = arc_index(id);
        self.arcs.get(index).map(Vec::as_slice)
    }

    /// Validates `ids` against this collection and wraps them as a path.
    pub fn path<I>(&self, ids: I) -> GeomResult<ArcPath>
    where
        I: IntoIterator<Item = i32>,
    {
        let ids: Vec<i32> = ids.into_iter().collect();
        if let Some(&id) = ids.iter().find(|&&id| arc_index(id).0 >= self.arcs.len()) {
            tracing::warn!(id, arcs = self.arcs.len(), "path references unknown arc");
            return Err(GeomError::UnknownArc {
                id,
                arcs: self.arcs.len(),
            });
        }
        Ok(ArcPath { ids })
    }

    /// Validates every part of a shape.
    pub fn shape<P, I>(&self, parts: P) -> GeomResult<Vec<ArcPath>>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = i32>,
    {
        parts.into_iter().map(|ids| self.path(ids)).collect()
    }

    /// Total number of stored vertices.
    pub fn point_count(&self) -> usize {
        self.arcs.iter().map(Vec::len).sum()
    }
}

impl<F: Float> Default for ArcCollection<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
enum ArcWalk<'a, F> {
    Forward(Iter<'a, Point2<F>>),
    Backward(Rev<Iter<'a, Point2<F>>>),
}

impl<'a, F: Copy> Iterator for ArcWalk<'a, F> {
    type Item = Point2<F>;

    #[inline]
    fn next(&mut self) -> Option<Point2<F>> {
        match self {
            ArcWalk::Forward(it) => it.next().copied(),
            ArcWalk::Backward(it) => it.next().copied(),
        }
    }
}

/// Vertices of an [`ArcPath`], walking its arcs in order.
#[derive(Debug, Clone)]
pub struct ArcPoints<'a, F> {
    arcs: &'a [Vec<Point2<F>>],
    ids: Iter<'a, i32>,
    walk: Option<ArcWalk<'a, F>>,
    emitted: bool,
}

impl<'a, F: Copy> Iterator for ArcPoints<'a, F> {
    type Item = Point2<F>;

    fn next(&mut self) -> Option<Point2<F>> {
        loop {
            if let Some(p) = self.walk.as_mut().and_then(Iterator::next) {
                self.emitted = true;
                return Some(p);
            }

            let (index, backward) = arc_index(*self.ids.next()?);
            let arc = self.arcs.get(index).map(Vec::as_slice).unwrap_or(&[]);
            let mut walk = if backward {
                ArcWalk::Backward(arc.iter().rev())
            } else {
                ArcWalk::Forward(arc.iter())
            };
            if self.emitted {
                // junction vertex was the last one emitted
                walk.next();
            }
            self.walk = Some(walk);
        }
    }
}

impl<F: Float> PathSource<F> for ArcCollection<F> {
    type Path = ArcPath;
    type Points<'a>
        = ArcPoints<'a, F>
    where
        Self: 'a;

    fn points<'a>(&'a self, path: &'a ArcPath) -> ArcPoints<'a, F> {
        ArcPoints {
            arcs: &self.arcs,
            ids: path.ids.iter(),
            walk: None,
            emitted: false,
        }
    }

    fn bounds(&self) -> Bounds<F> {
        self.bounds
    }
}
