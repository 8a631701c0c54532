extern crate nalgebra as na;
extern crate plotters;

use na::{Point2,Vector2};
use plotters::style::colors::{BLUE,RED};
use normviz::{Float,DISPLAY_DECIMAL_PLACES,load_runtime_conf,statistics};
use normviz::plot::{PdfPlot,Viewport};
use normviz::scene::{Scene,Element,Bound};
use normviz::animation::{Timeline,Animation,group_transform};
use normviz::visualize::FrameWriter;

// The worked IQ problem: mean 100, standard deviation 15, P(X > 115)
const MEAN: Float = 100.0;
const STD: Float = 15.0;
const THRESHOLD: Float = 115.0;

const QUESTION_FONT_SIZE: Float = 26.0;
const LABEL_FONT_SIZE: Float = 30.0;
const EQUATION_FONT_SIZE: Float = 32.0;
const GROUP_SCALE: Float = 0.6;

fn text(content: &str, font_size: Float, x: Float, y: Float) -> Element {
    Element::Text{content: content.to_string(), font_size, anchor: Point2::new(x,y)}
}

fn decimal_text(value: Float, font_size: Float, anchor: Point2<Float>) -> Element {
    Element::Text{content: format!("{:.*}", DISPLAY_DECIMAL_PLACES as usize, value), font_size, anchor}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install()?;
    let conf = load_runtime_conf();
    let frame_w = conf.frame_width as Float;
    let frame_h = conf.frame_height as Float;

    let mut scene = Scene::new();

    let question1 = scene.insert(text("Most IQ tests have a mean of 100 and a standard deviation of 15.", QUESTION_FONT_SIZE, 0.5*frame_w, 0.04*frame_h));
    let question2 = scene.insert(text("What is the probability that someone has an IQ greater than 115?", QUESTION_FONT_SIZE, 0.5*frame_w, 0.08*frame_h));

    let pdf_plot = PdfPlot::new(MEAN, STD);
    let lower_x = pdf_plot.lower_x();
    let upper_x = pdf_plot.upper_x();
    let plot_viewport = Viewport::new(0.11*frame_w, 0.17*frame_h, 0.78*frame_w, 0.72*frame_h);
    let plot = scene.insert(Element::PdfCurve{plot: pdf_plot.clone(), viewport: plot_viewport});

    // Known area: sweeps from the lower bound up to the threshold
    let x_upper_tracker = scene.add_tracker(lower_x);
    let area = scene.insert(Element::Area{plot, x_start: Bound::Fixed(lower_x), x_end: Bound::Tracker(x_upper_tracker), color: BLUE});

    // Unknown tail: sweeps from the upper bound back to the threshold
    let x_lower_tracker = scene.add_tracker(upper_x);
    let area2 = scene.insert(Element::Area{plot, x_start: Bound::Tracker(x_lower_tracker), x_end: Bound::Fixed(upper_x), color: RED});

    let cdf_at_threshold = statistics::cdf(THRESHOLD, MEAN, STD);
    let area_center = scene.data_to_pixel(plot, 0.5*(THRESHOLD + lower_x), 0.5*pdf_plot.f(THRESHOLD));
    let label_cdf = scene.insert(decimal_text(cdf_at_threshold, LABEL_FONT_SIZE, area_center));

    let tail_center = scene.data_to_pixel(plot, 122.0, 0.5*pdf_plot.f(122.0));
    let question_mark = scene.insert(text("?", LABEL_FONT_SIZE, tail_center.x, tail_center.y));

    let brace = scene.insert(Element::Brace{plot, label: "1".to_string()});

    let mut writer = FrameWriter::new(&conf);
    let mut timeline = Timeline::new(scene, &mut writer, conf.frames_per_second);

    // Pose the question, then fade in the distribution
    timeline.add(question1);
    timeline.add(question2);
    timeline.wait(3.0)?;
    timeline.play(vec![Animation::FadeIn{node: plot}], 1.0)?;

    // Sweep the known area up to the threshold and label it with cdf(115)
    timeline.add(area);
    timeline.play(vec![Animation::Tracker{id: x_upper_tracker, to: THRESHOLD}], 1.0)?;
    timeline.wait(1.0)?;
    timeline.add(label_cdf);
    timeline.wait(1.0)?;

    // Sweep the unknown tail back to the threshold and mark it with a ?
    timeline.add(area2);
    timeline.play(vec![Animation::Tracker{id: x_lower_tracker, to: THRESHOLD}], 1.0)?;
    timeline.wait(1.0)?;
    timeline.add(question_mark);
    timeline.wait(1.0)?;

    // The two regions together carry the whole unit area
    timeline.add(brace);
    timeline.wait(1.0)?;

    // Scale the distribution down and park it at the left edge. The areas and
    // the brace follow the curve node.
    let left_shift = Vector2::new(
        0.02*frame_w - GROUP_SCALE*plot_viewport.x0,
        0.55*frame_h - GROUP_SCALE*(plot_viewport.y0 + 0.5*plot_viewport.height)
    );
    let group1 = vec![plot, label_cdf, question_mark];
    let animations = group_transform(&timeline.scene, &group1, GROUP_SCALE, left_shift);
    timeline.play(animations, 1.0)?;
    timeline.wait(1.0)?;

    // Copy of the unknown tail, placed at the top of the derivation column
    let group2 = timeline.scene.clone_nodes(&[area2, question_mark]);
    let group2_anchor = timeline.scene.data_to_pixel(plot, 122.0, 0.5*pdf_plot.f(122.0));
    let group2_target = Point2::new(0.56*frame_w, 0.22*frame_h);
    let group2_shift = Vector2::new(group2_target.x - GROUP_SCALE*group2_anchor.x, group2_target.y - GROUP_SCALE*group2_anchor.y);
    let animations = group_transform(&timeline.scene, &group2, GROUP_SCALE, group2_shift);
    timeline.play(animations, 1.0)?;
    timeline.wait(1.0)?;

    let eq = timeline.scene.insert(text("=", EQUATION_FONT_SIZE, 0.68*frame_w, 0.22*frame_h));
    timeline.play(vec![Animation::FadeIn{node: eq}], 1.0)?;

    // Copy of the whole distribution below it. The curve node leads the copy,
    // so the copied areas and brace are remapped onto it and follow its move.
    let group3 = timeline.scene.clone_nodes(&[plot, area, area2, label_cdf, question_mark, brace]);
    let group3_anchor = timeline.scene.data_to_pixel(plot, MEAN, 0.5*pdf_plot.upper_y());
    let group3_target = Point2::new(0.56*frame_w, 0.42*frame_h);
    let group3_shift = Vector2::new(group3_target.x - GROUP_SCALE*group3_anchor.x, group3_target.y - GROUP_SCALE*group3_anchor.y);
    let group3_movers = vec![group3[0], group3[3], group3[4]];
    let animations = group_transform(&timeline.scene, &group3_movers, GROUP_SCALE, group3_shift);
    timeline.play(animations, 1.0)?;

    let minus = timeline.scene.insert(text("-", EQUATION_FONT_SIZE, 0.68*frame_w, 0.42*frame_h));
    timeline.add(minus);

    // Copy of the known area below that
    let group4 = timeline.scene.clone_nodes(&[area, label_cdf]);
    let group4_anchor = timeline.scene.data_to_pixel(plot, 0.5*(THRESHOLD + lower_x), 0.5*pdf_plot.f(THRESHOLD));
    let group4_target = Point2::new(0.56*frame_w, 0.62*frame_h);
    let group4_shift = Vector2::new(group4_target.x - GROUP_SCALE*group4_anchor.x, group4_target.y - GROUP_SCALE*group4_anchor.y);
    let animations = group_transform(&timeline.scene, &group4, GROUP_SCALE, group4_shift);
    timeline.play(animations, 1.0)?;
    timeline.wait(1.0)?;

    // Replace the pictures with their symbols
    let x_text = timeline.scene.insert(text("x", EQUATION_FONT_SIZE, group2_target.x, group2_target.y));
    let whole_text = timeline.scene.insert(text("1", EQUATION_FONT_SIZE, group3_target.x, group3_target.y));
    let area_text = timeline.scene.insert(decimal_text(statistics::round(cdf_at_threshold, DISPLAY_DECIMAL_PLACES), EQUATION_FONT_SIZE, group4_target));

    let mut animations = vec![
        Animation::FadeIn{node: x_text},
        Animation::FadeIn{node: whole_text},
        Animation::FadeIn{node: area_text}
    ];
    for &node in group2.iter().chain(group3.iter()).chain(group4.iter()) {
        animations.push(Animation::FadeOut{node});
    }
    timeline.play(animations, 1.0)?;
    timeline.wait(1.0)?;

    // Collapse the column into the full equation
    let full_eq_content = format!("x = 1 - {:.*}", DISPLAY_DECIMAL_PLACES as usize, statistics::round(cdf_at_threshold, DISPLAY_DECIMAL_PLACES));
    let full_eq = timeline.scene.insert(Element::Text{content: full_eq_content, font_size: EQUATION_FONT_SIZE, anchor: Point2::new(group3_target.x, group3_target.y)});
    timeline.play(vec![
        Animation::FadeOut{node: x_text},
        Animation::FadeOut{node: eq},
        Animation::FadeOut{node: whole_text},
        Animation::FadeOut{node: minus},
        Animation::FadeOut{node: area_text},
        Animation::FadeIn{node: full_eq}
    ], 1.0)?;
    timeline.wait(1.0)?;

    // The answer
    let answer = timeline.scene.insert(decimal_text(statistics::round(1.0 - cdf_at_threshold, DISPLAY_DECIMAL_PLACES), EQUATION_FONT_SIZE, Point2::new(group3_target.x, group3_target.y + 0.07*frame_h)));
    timeline.play(vec![Animation::FadeIn{node: answer}], 1.0)?;
    timeline.wait(5.0)?;

    println!("rendered {} frames to {}", timeline.frames_written(), conf.output_folder);

    Ok(())
}
