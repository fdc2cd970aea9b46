use scatter_rs::core::Dataset;
use scatter_rs::interaction::ChartEvent;
use scatter_rs::render::{NullRenderer, Renderer};
use scatter_rs::{ScatterChartConfig, ScatterEngine};

const SAMPLE_CSV: &str = "\
state,abbr,income,obesity,smokes,healthcare
Ohio,OH,50000,30,20,10
Texas,TX,60000,25,15,12
Utah,UT,55000,27,19,11
";

fn engine() -> ScatterEngine<NullRenderer> {
    let dataset = Dataset::from_csv_reader(SAMPLE_CSV.as_bytes()).expect("csv parses");
    ScatterEngine::new(ScatterChartConfig::default(), dataset, NullRenderer::default())
        .expect("engine init")
}

#[test]
fn frame_contains_one_circle_and_one_abbr_per_record() {
    let engine = engine();
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.circles.len(), 3);
    for abbr in ["OH", "TX", "UT"] {
        assert!(frame.texts.iter().any(|text| text.text == abbr));
    }
    frame.validate().expect("frame validates");
}

#[test]
fn frame_contains_all_four_axis_labels() {
    let engine = engine();
    let frame = engine.build_frame().expect("frame");

    for label in [
        "Obese (%)",
        "Smokes (%)",
        "Household Income (Median)",
        "Lacks Healthcare (%)",
    ] {
        assert!(frame.texts.iter().any(|text| text.text == label));
    }

    // Y labels carry the rotated-group transform.
    let income = frame
        .texts
        .iter()
        .find(|text| text.text == "Household Income (Median)")
        .expect("income label");
    assert_eq!(income.rotation_deg, -90.0);
    let obesity = frame
        .texts
        .iter()
        .find(|text| text.text == "Obese (%)")
        .expect("obesity label");
    assert_eq!(obesity.rotation_deg, 0.0);
}

#[test]
fn axis_baselines_frame_the_plot_area() {
    let engine = engine();
    let frame = engine.build_frame().expect("frame");

    // Bottom X baseline and left Y baseline with default 750x500 viewport.
    assert!(
        frame
            .lines
            .iter()
            .any(|l| l.y1 == 440.0 && l.y2 == 440.0 && l.x1 == 100.0 && l.x2 == 710.0)
    );
    assert!(
        frame
            .lines
            .iter()
            .any(|l| l.x1 == 100.0 && l.x2 == 100.0 && l.y1 == 20.0 && l.y2 == 440.0)
    );
}

#[test]
fn hover_over_a_circle_produces_a_tooltip_box() {
    let mut engine = engine();

    engine
        .dispatch(ChartEvent::PointerMoved { x: 710.0, y: 440.0 })
        .expect("dispatch");
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.rects.len(), 1);
    assert!(frame.texts.iter().any(|text| text.text == "Ohio"));
    assert!(
        frame
            .texts
            .iter()
            .any(|text| text.text == "Household Income (Median): 50000")
    );
}

#[test]
fn pointer_leave_hides_the_tooltip() {
    let mut engine = engine();
    engine
        .dispatch(ChartEvent::PointerMoved { x: 710.0, y: 440.0 })
        .expect("dispatch");
    engine.dispatch(ChartEvent::PointerLeft).expect("dispatch");

    let frame = engine.build_frame().expect("frame");
    assert!(frame.rects.is_empty());
}

#[test]
fn pointer_far_from_any_circle_hovers_nothing() {
    let mut engine = engine();
    engine
        .dispatch(ChartEvent::PointerMoved { x: 400.0, y: 100.0 })
        .expect("dispatch");

    let frame = engine.build_frame().expect("frame");
    assert!(frame.rects.is_empty());
}

#[test]
fn non_finite_pointer_coordinates_are_rejected() {
    let mut engine = engine();
    let result = engine.dispatch(ChartEvent::PointerMoved {
        x: f64::NAN,
        y: 0.0,
    });
    assert!(result.is_err());
}

#[test]
fn null_renderer_counts_frame_primitives() {
    let mut engine = engine();
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_circle_count, 3);
    assert!(renderer.last_text_count > 0);
    assert!(renderer.last_line_count > 0);
}

#[test]
fn mid_transition_frames_still_validate() {
    let mut engine = engine();
    engine
        .dispatch(ChartEvent::XLabelClicked(
            scatter_rs::core::XMetric::Smokes,
        ))
        .expect("dispatch");
    engine.step_animation(0.3).expect("step");

    let frame = engine.build_frame().expect("frame");
    frame.validate().expect("frame validates");

    let mut null = NullRenderer::default();
    null.render(&frame).expect("render");
}
