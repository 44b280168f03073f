use rand::Rng;
use trend_chart::data_types::ActiveSeriesSet;
use trend_chart::feedback::FeedbackSink;
use trend_chart::{
    cursor_overlay, ChartSeries, DomainRange, PlotBuilder, PlotRect, PlotTransform, PointerEvent,
    PointerPhase, RatingSlider, SampleSeries, ScrubController, SmoothLinePlot,
};

fn main() {
    let mut rng = rand::rng();

    // A month of sleep data with a few missed check-ins.
    let slots: Vec<Option<f64>> = (0..30)
        .map(|_| {
            if rng.random_bool(0.2) {
                None
            } else {
                Some(rng.random_range(4.5..9.5))
            }
        })
        .collect();
    let series = SampleSeries::new(slots);
    let domain = DomainRange::SLEEP_HOURS;
    let rect = PlotRect::new(300.0, 52.0);

    let transform = PlotTransform::for_series(series.len(), &domain, rect);
    let plot = SmoothLinePlot::new(series.filled(domain.midpoint()));
    match plot.build_path(&transform) {
        Some(path) => println!("line path: {} commands", path.len()),
        None => println!("series not drawable"),
    }

    // Scrub across the chart and print what the overlay would show.
    let chart = vec![ChartSeries::new("sleep", series.clone(), domain)];
    let visible = ActiveSeriesSet::new("sleep".into());
    let today = chrono::Utc::now().date_naive();

    let mut haptics = || println!("  *tick*");
    let mut controller = ScrubController::new(series.len(), rect);
    let mut trace = vec![PointerEvent::new(PointerPhase::Down, 10.0, 26.0)];
    for x in (20..=300).step_by(40) {
        trace.push(PointerEvent::new(PointerPhase::Move, x as f32, 26.0));
    }
    trace.push(PointerEvent::new(PointerPhase::Up, 300.0, 26.0));

    for event in trace {
        let update = controller.handle_event(event);
        if !update.changed {
            continue;
        }
        if update.pulse {
            haptics.pulse();
        }
        match cursor_overlay(update.active_index, &chart, &visible, rect, today) {
            Some(overlay) => {
                let value = overlay.points[0].value;
                println!(
                    "{:?} -> index {} ({}) value {:.1}",
                    event.phase, overlay.index, overlay.date_label, value,
                );
            }
            None => println!("{:?} -> idle", event.phase),
        }
    }

    // The same drag pattern, quantized onto a rating track.
    let mut slider = RatingSlider::default().on_change(|v| println!("rating -> {v}"));
    slider.set_track_width(300.0);
    slider.handle_event(PointerEvent::new(PointerPhase::Down, 0.0, 12.0));
    for x in (0..=300).step_by(30) {
        slider.handle_event(PointerEvent::new(PointerPhase::Move, x as f32, 12.0));
    }
    slider.handle_event(PointerEvent::new(PointerPhase::Up, 300.0, 12.0));
}
