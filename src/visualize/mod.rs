extern crate plotters;
extern crate nalgebra as na;

use plotters::prelude::*;
use plotters::coord::Shift;
use plotters::style::text_anchor::{Pos,HPos,VPos};
use crate::{Float,RuntimeConf};
use crate::plot::{PdfPlot,Viewport,LABEL_AREA_LEFT,LABEL_AREA_BOTTOM};
use crate::scene::{Scene,Element,Node,ElementId};
use crate::animation::FrameSink;

const AREA_FILL_ALPHA: Float = 0.5;
const TICK_LABEL_FONT_SIZE: Float = 14.0;
const BRACE_HEIGHT: Float = 14.0;
const BRACE_MARGIN: Float = 10.0;
const BRACE_LABEL_FONT_SIZE: Float = 28.0;

type Frame<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Draws one frame of the scene. Nodes are drawn in insertion order; hidden
/// and fully faded nodes are skipped.
pub fn render_scene(scene: &Scene, path: &str, width: u32, height: u32) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    for id in 0..scene.nodes.len() {
        let node = scene.node(id);
        if !node.visible || node.opacity <= 0.0 {
            continue;
        }

        match &node.element {
            Element::Text{..} => draw_text(&root, node)?,
            Element::PdfCurve{plot, viewport} => draw_pdf_curve(&root, node, plot, viewport)?,
            Element::Area{..} => draw_area(&root, scene, id, node)?,
            Element::Brace{..} => draw_brace(&root, scene, id, node)?
        }
    }

    root.present()?;
    Ok(())
}

fn draw_text(root: &Frame, node: &Node) -> Result<(), Box<dyn std::error::Error>> {
    let (content, font_size, anchor) = match &node.element {
        Element::Text{content, font_size, anchor} => (content, font_size, anchor),
        _ => panic!("draw_text called on a node that is not text")
    };

    let position = node.transform.apply(anchor);
    let style = ("sans-serif", (font_size*node.transform.scale) as u32).into_font()
        .color(&BLACK.mix(node.opacity))
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(content.clone(), (position.x as i32, position.y as i32), style))?;

    Ok(())
}

fn draw_pdf_curve(root: &Frame, node: &Node, plot: &PdfPlot, viewport: &Viewport) -> Result<(), Box<dyn std::error::Error>> {
    let scale = node.transform.scale;
    let origin = node.transform.apply(&na::Point2::new(viewport.x0, viewport.y0));
    let sub = root.clone().shrink(
        (origin.x as u32, origin.y as u32),
        ((viewport.width*scale) as u32, (viewport.height*scale) as u32)
    );

    let axes = plot.axes();
    let mut chart = ChartBuilder::on(&sub)
        .set_label_area_size(LabelAreaPosition::Left, (LABEL_AREA_LEFT*scale) as u32)
        .set_label_area_size(LabelAreaPosition::Bottom, (LABEL_AREA_BOTTOM*scale) as u32)
        .build_cartesian_2d(axes.x_min..axes.x_max, axes.y_min..axes.y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(7)
        .y_labels(5)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .axis_style(&BLACK.mix(node.opacity))
        .label_style(("sans-serif", (TICK_LABEL_FONT_SIZE*scale) as u32).into_font().color(&BLACK.mix(node.opacity)))
        .draw()?;

    chart.draw_series(
        LineSeries::new(
            plot.sample_curve().iter().map(|p| (p.x, p.y)),
            &BLUE.mix(node.opacity),
        )
    )?;

    Ok(())
}

fn draw_area(root: &Frame, scene: &Scene, id: ElementId, node: &Node) -> Result<(), Box<dyn std::error::Error>> {
    let (plot_id, x_start, x_end, color) = match &node.element {
        Element::Area{plot, x_start, x_end, color} => (*plot, x_start, x_end, color),
        _ => panic!("draw_area called on a node that is not an area")
    };
    let (plot, viewport) = match &scene.node(plot_id).element {
        Element::PdfCurve{plot, viewport} => (plot, viewport),
        _ => panic!("area references a node that is not a pdf curve")
    };

    let region = plot.area_range(scene.resolve_bound(x_start), scene.resolve_bound(x_end));
    if region.is_empty() {
        return Ok(());
    }

    let transform = scene.effective_transform(id);
    let axes = plot.axes();
    let vertices = region.points.iter().map(|p| {
        let pixel = transform.apply(&axes.c2p(p.x, p.y, viewport));
        (pixel.x as i32, pixel.y as i32)
    }).collect::<Vec<(i32,i32)>>();

    root.draw(&Polygon::new(vertices, color.mix(AREA_FILL_ALPHA*node.opacity).filled()))?;

    Ok(())
}

fn draw_brace(root: &Frame, scene: &Scene, id: ElementId, node: &Node) -> Result<(), Box<dyn std::error::Error>> {
    let (plot_id, label) = match &node.element {
        Element::Brace{plot, label} => (*plot, label),
        _ => panic!("draw_brace called on a node that is not a brace")
    };
    let (plot, viewport) = match &scene.node(plot_id).element {
        Element::PdfCurve{plot, viewport} => (plot, viewport),
        _ => panic!("brace references a node that is not a pdf curve")
    };

    let transform = scene.effective_transform(id);
    let scale = transform.scale;
    let axes = plot.axes();
    let left = transform.apply(&axes.c2p(plot.lower_x(), axes.y_max, viewport));
    let right = transform.apply(&axes.c2p(plot.upper_x(), axes.y_max, viewport));

    let tick_bottom = left.y - BRACE_MARGIN*scale;
    let bar = tick_bottom - BRACE_HEIGHT*scale;
    root.draw(&PathElement::new(
        vec![
            (left.x as i32, tick_bottom as i32),
            (left.x as i32, bar as i32),
            (right.x as i32, bar as i32),
            (right.x as i32, tick_bottom as i32)
        ],
        BLACK.mix(node.opacity).stroke_width(2)
    ))?;

    let style = ("sans-serif", (BRACE_LABEL_FONT_SIZE*scale) as u32).into_font()
        .color(&BLACK.mix(node.opacity))
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    root.draw(&Text::new(label.clone(), (((left.x + right.x)*0.5) as i32, (bar - 2.0*scale) as i32), style))?;

    Ok(())
}

/// Writes timeline frames as a numbered png sequence under the output folder.
pub struct FrameWriter {
    output_folder: String,
    frame_width: u32,
    frame_height: u32
}

impl FrameWriter {

    pub fn new(conf: &RuntimeConf) -> FrameWriter {
        std::fs::create_dir_all(&conf.output_folder).expect("Unable to create output folder");
        FrameWriter{
            output_folder: conf.output_folder.clone(),
            frame_width: conf.frame_width,
            frame_height: conf.frame_height
        }
    }
}

impl FrameSink for FrameWriter {
    fn render_frame(&mut self, scene: &Scene, frame_index: usize) -> Result<(), Box<dyn std::error::Error>> {
        let path = format!("{}/frame_{:05}.png", self.output_folder, frame_index);
        render_scene(scene, &path, self.frame_width, self.frame_height)
    }
}
