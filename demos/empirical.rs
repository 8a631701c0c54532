extern crate plotters;
extern crate rand;
extern crate rand_distr;

use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Normal,Distribution};
use normviz::{Float,load_runtime_conf};
use normviz::plot::PdfPlot;

const MEAN: Float = 100.0;
const STD: Float = 15.0;
const SAMPLE_COUNT: usize = 10_000;
const BIN_COUNT: usize = 30;
const SEED: u64 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install()?;
    let conf = load_runtime_conf();
    std::fs::create_dir_all(&conf.output_folder)?;

    let pdf_plot = PdfPlot::new(MEAN, STD);
    let lower = pdf_plot.lower_x();
    let upper = pdf_plot.upper_x();

    let mut rng = SmallRng::seed_from_u64(SEED);
    let normal = Normal::new(MEAN, STD)?;

    let bin_width = (upper - lower)/(BIN_COUNT as Float);
    let mut bins = vec![0usize; BIN_COUNT];
    for _ in 0..SAMPLE_COUNT {
        let value: Float = normal.sample(&mut rng);
        if value < lower || value >= upper {
            continue;
        }
        bins[((value - lower)/bin_width) as usize] += 1;
    }

    // Normalize counts to densities so the bars overlay the analytic curve
    let densities = bins.iter().map(|&count| (count as Float)/((SAMPLE_COUNT as Float)*bin_width)).collect::<Vec<Float>>();

    let path = format!("{}/empirical.png", conf.output_folder);
    let root = BitMapBackend::new(&path, (conf.frame_width, conf.frame_height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption("Sampled IQ scores against the analytic density", ("sans-serif", 30))
        .build_cartesian_2d(lower..upper, 0.0..pdf_plot.upper_y())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()?;

    chart.draw_series(
        densities.iter().enumerate().map(|(i, &density)| {
            let x0 = lower + (i as Float)*bin_width;
            Rectangle::new([(x0, 0.0), (x0 + bin_width, density)], GREEN.mix(0.4).filled())
        })
    )?;

    chart.draw_series(
        LineSeries::new(
            pdf_plot.sample_curve().iter().map(|p| (p.x, p.y)),
            &BLUE,
        )
    )?;

    root.present()?;
    println!("wrote {}", path);

    Ok(())
}
