use proptest::prelude::*;
use scatter_rs::core::LinearScale;

proptest! {
    #[test]
    fn x_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        plot_width in 10.0f64..4096.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, plot_width))
            .expect("valid scale");

        let px = scale.project(value).expect("to pixel");
        let recovered = scale.unproject(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9 + 1e-9);
    }

    #[test]
    fn inverted_y_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        plot_height in 10.0f64..4096.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (plot_height, 0.0))
            .expect("valid scale");

        let px = scale.project(value).expect("to pixel");
        let recovered = scale.unproject(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9 + 1e-9);
    }

    #[test]
    fn projection_is_monotonic_over_the_domain(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        low_factor in 0.0f64..1.0,
        high_factor in 0.0f64..1.0
    ) {
        prop_assume!(low_factor < high_factor);

        let domain_end = domain_start + domain_span;
        let low = domain_start + low_factor * domain_span;
        let high = domain_start + high_factor * domain_span;

        let x_scale = LinearScale::new((domain_start, domain_end), (0.0, 610.0))
            .expect("valid scale");
        let y_scale = LinearScale::new((domain_start, domain_end), (420.0, 0.0))
            .expect("valid scale");

        // X grows rightward, Y grows upward (smaller pixel values).
        prop_assert!(x_scale.project(low).expect("low") <= x_scale.project(high).expect("high"));
        prop_assert!(y_scale.project(low).expect("low") >= y_scale.project(high).expect("high"));
    }
}
