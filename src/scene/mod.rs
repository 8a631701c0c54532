extern crate nalgebra as na;
extern crate plotters;

use na::{Point2,Vector2};
use plotters::style::RGBColor;
use crate::Float;
use crate::plot::{PdfPlot,Viewport};

pub type ElementId = usize;
pub type TrackerId = usize;

/// Area bounds are either fixed or driven by a tracker. Tracker bounds are
/// resolved against the current tracker value on every rendered frame.
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum Bound {
    Fixed(Float),
    Tracker(TrackerId)
}

#[derive(Debug,Clone)]
pub enum Element {
    Text {
        content: String,
        font_size: Float,
        anchor: Point2<Float>
    },
    PdfCurve {
        plot: PdfPlot,
        viewport: Viewport
    },
    Area {
        plot: ElementId,
        x_start: Bound,
        x_end: Bound,
        color: RGBColor
    },
    Brace {
        plot: ElementId,
        label: String
    }
}

/// Uniform scale about the frame origin followed by a pixel shift.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Transform {
    pub scale: Float,
    pub shift: Vector2<Float>
}

impl Transform {

    pub fn identity() -> Transform {
        Transform{scale: 1.0, shift: Vector2::new(0.0,0.0)}
    }

    pub fn new(scale: Float, shift: Vector2<Float>) -> Transform {
        Transform{scale,shift}
    }

    pub fn apply(&self, point: &Point2<Float>) -> Point2<Float> {
        Point2::new(point.x*self.scale + self.shift.x, point.y*self.scale + self.shift.y)
    }

    /// Composes a group animation onto this transform: the result applies
    /// self first, then the given scale and shift.
    pub fn then(&self, scale: Float, shift: Vector2<Float>) -> Transform {
        Transform{scale: self.scale*scale, shift: self.shift*scale + shift}
    }
}

/// Applies first, then second.
pub fn compose(first: &Transform, second: &Transform) -> Transform {
    first.then(second.scale, second.shift)
}

#[derive(Debug,Clone)]
pub struct Node {
    pub element: Element,
    pub transform: Transform,
    pub opacity: Float,
    pub visible: bool
}

#[derive(Debug,Clone)]
pub struct Scene {
    pub nodes: Vec<Node>,
    trackers: Vec<Float>
}

impl Scene {

    pub fn new() -> Scene {
        Scene{nodes: Vec::new(), trackers: Vec::new()}
    }

    /// Inserted nodes start invisible. The timeline makes them visible via add.
    pub fn insert(&mut self, element: Element) -> ElementId {
        self.nodes.push(Node{element, transform: Transform::identity(), opacity: 1.0, visible: false});
        self.nodes.len() - 1
    }

    pub fn node(&self, id: ElementId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: ElementId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn add_tracker(&mut self, initial: Float) -> TrackerId {
        self.trackers.push(initial);
        self.trackers.len() - 1
    }

    pub fn tracker(&self, id: TrackerId) -> Float {
        self.trackers[id]
    }

    pub fn set_tracker(&mut self, id: TrackerId, value: Float) {
        self.trackers[id] = value;
    }

    pub fn resolve_bound(&self, bound: &Bound) -> Float {
        match bound {
            Bound::Fixed(v) => *v,
            Bound::Tracker(id) => self.tracker(*id)
        }
    }

    /// Areas and braces are positioned relative to their pdf curve, so their
    /// effective transform composes the curve's transform with their own.
    pub fn effective_transform(&self, id: ElementId) -> Transform {
        let node = self.node(id);
        match &node.element {
            Element::Area{plot, ..} | Element::Brace{plot, ..} => compose(&self.node(*plot).transform, &node.transform),
            _ => node.transform
        }
    }

    /// Maps a data coordinate of a pdf curve node to its current pixel position.
    pub fn data_to_pixel(&self, plot_id: ElementId, x: Float, y: Float) -> Point2<Float> {
        let node = self.node(plot_id);
        match &node.element {
            Element::PdfCurve{plot, viewport} => node.transform.apply(&plot.axes().c2p(x, y, viewport)),
            _ => panic!("data_to_pixel called on a node that is not a pdf curve")
        }
    }

    /// Duplicates a group of nodes, preserving transforms and opacity. Plot
    /// references inside the group are remapped when the referenced curve is
    /// part of the copied group. Copies start visible, matching a copy that is
    /// played immediately.
    pub fn clone_nodes(&mut self, ids: &[ElementId]) -> Vec<ElementId> {
        let mut id_map = std::collections::HashMap::<ElementId,ElementId>::new();
        let mut new_ids = Vec::<ElementId>::with_capacity(ids.len());

        for &id in ids {
            let mut node = self.node(id).clone();
            node.visible = true;
            match &mut node.element {
                Element::Area{plot, ..} | Element::Brace{plot, ..} => {
                    if let Some(&mapped) = id_map.get(plot) {
                        *plot = mapped;
                    }
                },
                _ => ()
            }
            self.nodes.push(node);
            let new_id = self.nodes.len() - 1;
            id_map.insert(id, new_id);
            new_ids.push(new_id);
        }

        new_ids
    }
}
