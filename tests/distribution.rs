use rand::{thread_rng, Rng};
use rand_distr::{Normal, Distribution};

use normviz::{Float, DISPLAY_DECIMAL_PLACES};
use normviz::statistics::{pdf, cdf, erf, round};
use normviz::plot::PdfPlot;

#[test]
fn test_cdf_at_threshold() {
    assert_eq!(round(cdf(115.0, 100.0, 15.0), DISPLAY_DECIMAL_PLACES), 0.8413);
}

#[test]
fn test_answer_is_complement_of_cdf() {
    assert_eq!(round(1.0 - cdf(115.0, 100.0, 15.0), DISPLAY_DECIMAL_PLACES), 0.1587);
}

#[test]
fn test_plot_bounds() {
    let plot = PdfPlot::new(100.0, 15.0);
    assert_eq!(plot.lower_x(), 55.0);
    assert_eq!(plot.upper_x(), 145.0);
}

#[test]
fn test_erf_is_odd_and_centered() {
    assert_eq!(erf(0.0), 0.0);
    let mut rng = thread_rng();
    for _ in 0..100 {
        let x: Float = rng.gen_range(0.0..4.0);
        assert!((erf(x) + erf(-x)).abs() < 1e-12);
    }
    assert!((cdf(100.0, 100.0, 15.0) - 0.5).abs() < 1e-9);
}

#[test]
fn test_pdf_peaks_at_mean() {
    let plot = PdfPlot::new(100.0, 15.0);
    let peak = pdf(100.0, 100.0, 15.0);
    let mut rng = thread_rng();
    for _ in 0..100 {
        let x: Float = rng.gen_range(55.0..145.0);
        assert!(plot.f(x) <= peak);
    }
}

#[test]
fn test_regions_partition_unit_area() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let mean: Float = rng.gen_range(-50.0..150.0);
        let std: Float = rng.gen_range(0.5..30.0);
        let plot = PdfPlot::new(mean, std);
        let threshold: Float = rng.gen_range(plot.lower_x()..plot.upper_x());

        let known = plot.probability_between(plot.lower_x(), threshold);
        let unknown = plot.probability_between(threshold, plot.upper_x());
        let total = plot.probability_between(plot.lower_x(), plot.upper_x());

        assert!((known + unknown - total).abs() < 1e-12);
        // the plotted span is +-3 sigma, which carries all but ~0.27% of the mass
        assert!((known + unknown - 1.0).abs() < 5e-3);
    }
}

#[test]
fn test_empirical_tail_frequency() {
    let mut rng = thread_rng();
    let normal = Normal::new(100.0, 15.0).unwrap();
    let sample_count = 200_000;
    let above = (0..sample_count).filter(|_| {
        let value: Float = normal.sample(&mut rng);
        value > 115.0
    }).count();
    let frequency = (above as Float)/(sample_count as Float);
    assert!((frequency - 0.1587).abs() < 0.01);
}
