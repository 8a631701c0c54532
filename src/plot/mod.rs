extern crate nalgebra as na;

use na::Point2;
use crate::Float;
use crate::statistics;

pub const SIGMA_RANGE: Float = 3.0;
pub const Y_AXIS_PADDING: Float = 0.01;
pub const CURVE_SAMPLES: usize = 256;
pub const AREA_SAMPLES: usize = 128;

// Pixel margins reserved for axis tick labels. Axes::c2p has to agree with
// what the chart renderer passes to set_label_area_size.
pub const LABEL_AREA_LEFT: Float = 60.0;
pub const LABEL_AREA_BOTTOM: Float = 60.0;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Viewport {
    pub x0: Float,
    pub y0: Float,
    pub width: Float,
    pub height: Float
}

impl Viewport {
    pub fn new(x0: Float, y0: Float, width: Float, height: Float) -> Viewport {
        assert!(width > 0.0 && height > 0.0);
        Viewport{x0,y0,width,height}
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Axes {
    pub x_min: Float,
    pub x_max: Float,
    pub x_step: Float,
    pub y_min: Float,
    pub y_max: Float,
    pub y_step: Float
}

impl Axes {

    /// Linear map from data coordinates to pixel coordinates inside a viewport,
    /// skipping the label margins on the left and bottom. Pixel y grows downwards.
    pub fn c2p(&self, x: Float, y: Float, viewport: &Viewport) -> Point2<Float> {
        let plot_width = viewport.width - LABEL_AREA_LEFT;
        let plot_height = viewport.height - LABEL_AREA_BOTTOM;
        let px = viewport.x0 + LABEL_AREA_LEFT + (x - self.x_min)/(self.x_max - self.x_min)*plot_width;
        let py = viewport.y0 + (1.0 - (y - self.y_min)/(self.y_max - self.y_min))*plot_height;
        Point2::new(px,py)
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct AreaRegion {
    pub x_start: Float,
    pub x_end: Float,
    pub points: Vec<Point2<Float>>
}

impl AreaRegion {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct PdfPlot {
    mean: Float,
    std: Float,
    lower_x: Float,
    upper_x: Float,
    upper_y: Float
}

impl PdfPlot {

    pub fn new(mean: Float, std: Float) -> PdfPlot {
        assert!(std > 0.0);
        let lower_x = mean - SIGMA_RANGE*std;
        let upper_x = mean + SIGMA_RANGE*std;
        let upper_y = statistics::pdf(mean, mean, std) + Y_AXIS_PADDING;
        PdfPlot{mean,std,lower_x,upper_x,upper_y}
    }

    pub fn mean(&self) -> Float {self.mean}
    pub fn std(&self) -> Float {self.std}
    pub fn lower_x(&self) -> Float {self.lower_x}
    pub fn upper_x(&self) -> Float {self.upper_x}
    pub fn upper_y(&self) -> Float {self.upper_y}

    pub fn f(&self, x: Float) -> Float {
        statistics::pdf(x, self.mean, self.std)
    }

    /// Data-space point on the density curve.
    pub fn x2p(&self, x: Float) -> Point2<Float> {
        Point2::new(x, self.f(x))
    }

    pub fn axes(&self) -> Axes {
        Axes {
            x_min: self.lower_x,
            x_max: self.upper_x,
            x_step: self.std,
            y_min: 0.0,
            y_max: self.upper_y,
            y_step: self.upper_y/4.0
        }
    }

    pub fn sample_curve(&self) -> Vec<Point2<Float>> {
        let step = (self.upper_x - self.lower_x)/((CURVE_SAMPLES - 1) as Float);
        (0..CURVE_SAMPLES).map(|i| self.x2p(self.lower_x + (i as Float)*step)).collect()
    }

    /// Shaded region under the curve restricted to [x_start, x_end] as a closed
    /// polygon in data coordinates. Inverted bounds degenerate to an empty region.
    pub fn area_range(&self, x_start: Float, x_end: Float) -> AreaRegion {
        if x_start >= x_end {
            return AreaRegion{x_start,x_end,points: Vec::new()};
        }

        let mut points = Vec::<Point2<Float>>::with_capacity(AREA_SAMPLES + 2);
        points.push(Point2::new(x_start, 0.0));
        let step = (x_end - x_start)/((AREA_SAMPLES - 1) as Float);
        for i in 0..AREA_SAMPLES {
            points.push(self.x2p(x_start + (i as Float)*step));
        }
        points.push(Point2::new(x_end, 0.0));

        AreaRegion{x_start,x_end,points}
    }

    /// Probability mass of the region between the two bounds.
    pub fn probability_between(&self, x_start: Float, x_end: Float) -> Float {
        statistics::cdf(x_end, self.mean, self.std) - statistics::cdf(x_start, self.mean, self.std)
    }
}
