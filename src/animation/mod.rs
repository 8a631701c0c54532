extern crate nalgebra as na;
extern crate num_traits;

use na::Vector2;
use crate::Float;
use crate::scene::{Scene,ElementId,TrackerId,Transform};

/// Receives every rendered frame of a timeline in order.
pub trait FrameSink {
    fn render_frame(&mut self, scene: &Scene, frame_index: usize) -> Result<(), Box<dyn std::error::Error>>;
}

pub fn lerp<F: num_traits::Float>(a: F, b: F, t: F) -> F {
    a + (b - a)*t
}

pub fn smooth_step<F: num_traits::Float>(t: F) -> F {
    let two = F::from(2.0).unwrap();
    let three = F::from(3.0).unwrap();
    t*t*(three - two*t)
}

#[derive(Debug,Clone)]
pub enum Animation {
    Tracker {
        id: TrackerId,
        to: Float
    },
    TransformTo {
        node: ElementId,
        to: Transform
    },
    FadeIn {
        node: ElementId
    },
    FadeOut {
        node: ElementId
    }
}

/// Builds the transform animations that move a group of nodes together:
/// every member composes the same scale and pixel shift onto its current
/// transform. Areas and braces follow their pdf curve automatically and must
/// not be listed alongside it.
pub fn group_transform(scene: &Scene, nodes: &[ElementId], scale: Float, shift: Vector2<Float>) -> Vec<Animation> {
    nodes.iter().map(|&node| Animation::TransformTo{node, to: scene.node(node).transform.then(scale, shift)}).collect()
}

#[derive(Debug,Clone,Copy)]
enum StartState {
    Tracker(Float),
    Transform(Transform),
    Opacity(Float)
}

/// Strictly sequential presentation driver. Instantaneous steps mutate the
/// scene without emitting frames; wait and play emit seconds * fps frames.
pub struct Timeline<'a> {
    pub scene: Scene,
    sink: &'a mut dyn FrameSink,
    frames_per_second: usize,
    frames_written: usize
}

impl<'a> Timeline<'a> {

    pub fn new(scene: Scene, sink: &'a mut dyn FrameSink, frames_per_second: usize) -> Timeline<'a> {
        assert!(frames_per_second > 0);
        Timeline{scene, sink, frames_per_second, frames_written: 0}
    }

    pub fn frames_per_second(&self) -> usize {
        self.frames_per_second
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    pub fn add(&mut self, id: ElementId) {
        self.scene.node_mut(id).visible = true;
    }

    pub fn remove(&mut self, id: ElementId) {
        self.scene.node_mut(id).visible = false;
    }

    pub fn wait(&mut self, seconds: Float) -> Result<(), Box<dyn std::error::Error>> {
        for _ in 0..self.frame_count(seconds) {
            self.render()?;
        }
        Ok(())
    }

    pub fn play(&mut self, animations: Vec<Animation>, seconds: Float) -> Result<(), Box<dyn std::error::Error>> {
        let starts = animations.iter().map(|animation| self.capture_start(animation)).collect::<Vec<StartState>>();

        let frames = self.frame_count(seconds);
        for frame in 1..=frames {
            let alpha = smooth_step((frame as Float)/(frames as Float));
            for (animation, start) in animations.iter().zip(starts.iter()) {
                self.apply(animation, start, alpha);
            }
            self.render()?;
        }

        // Faded-out nodes stop being drawn once the transition has finished
        for animation in &animations {
            if let Animation::FadeOut{node} = animation {
                self.scene.node_mut(*node).visible = false;
            }
        }

        Ok(())
    }

    fn capture_start(&mut self, animation: &Animation) -> StartState {
        match animation {
            Animation::Tracker{id, ..} => StartState::Tracker(self.scene.tracker(*id)),
            Animation::TransformTo{node, ..} => StartState::Transform(self.scene.node(*node).transform),
            Animation::FadeIn{node} => {
                let node = self.scene.node_mut(*node);
                node.visible = true;
                node.opacity = 0.0;
                StartState::Opacity(1.0)
            },
            Animation::FadeOut{node} => StartState::Opacity(self.scene.node(*node).opacity)
        }
    }

    fn apply(&mut self, animation: &Animation, start: &StartState, alpha: Float) {
        match (animation, start) {
            (Animation::Tracker{id, to}, StartState::Tracker(from)) => {
                self.scene.set_tracker(*id, lerp(*from, *to, alpha));
            },
            (Animation::TransformTo{node, to}, StartState::Transform(from)) => {
                let transform = Transform::new(
                    lerp(from.scale, to.scale, alpha),
                    Vector2::new(lerp(from.shift.x, to.shift.x, alpha), lerp(from.shift.y, to.shift.y, alpha))
                );
                self.scene.node_mut(*node).transform = transform;
            },
            (Animation::FadeIn{node}, StartState::Opacity(target)) => {
                self.scene.node_mut(*node).opacity = lerp(0.0, *target, alpha);
            },
            (Animation::FadeOut{node}, StartState::Opacity(from)) => {
                self.scene.node_mut(*node).opacity = lerp(*from, 0.0, alpha);
            },
            _ => panic!("animation start state mismatch")
        }
    }

    fn frame_count(&self, seconds: Float) -> usize {
        let frames = (seconds*(self.frames_per_second as Float)).round() as usize;
        std::cmp::max(frames, 1)
    }

    fn render(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.sink.render_frame(&self.scene, self.frames_written)?;
        self.frames_written += 1;
        Ok(())
    }
}
