pub(super) const AXIS_X_MIN_SPACING_PX: f64 = 48.0;
pub(super) const AXIS_Y_MIN_SPACING_PX: f64 = 22.0;

/// Evenly spaced tick values across a domain, endpoints included.
pub(super) fn axis_ticks(domain: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![domain.0];
    }

    let span = domain.1 - domain.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            domain.0 + span * ratio
        })
        .collect()
}

/// Thins `(value, pixel)` tick candidates so adjacent labels keep at least
/// `min_spacing_px`, preferring to keep the last tick when possible.
pub(super) fn select_ticks_with_min_spacing(
    mut ticks: Vec<(f64, f64)>,
    min_spacing_px: f64,
) -> Vec<(f64, f64)> {
    if ticks.is_empty() {
        return ticks;
    }

    ticks.sort_by(|left, right| left.1.total_cmp(&right.1));
    if ticks.len() == 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let mut selected = Vec::with_capacity(ticks.len());
    selected.push(ticks[0]);

    for tick in ticks.iter().copied().skip(1) {
        if tick.1 - selected.last().expect("not empty").1 >= min_spacing_px {
            selected.push(tick);
        }
    }

    let last_tick = *ticks.last().expect("not empty");
    let selected_last = *selected.last().expect("not empty");
    if selected_last != last_tick {
        if selected.len() == 1 {
            // On very narrow axes a single label is clearer than overlapping pairs.
            selected[0] = last_tick;
        } else {
            let penultimate = selected[selected.len() - 2];
            if last_tick.1 - penultimate.1 >= min_spacing_px {
                let last_index = selected.len() - 1;
                selected[last_index] = last_tick;
            }
        }
    }

    selected
}

/// Formats a tick label with decimals chosen from the inter-tick step.
pub(super) fn format_tick(value: f64, step: f64) -> String {
    let step = step.abs();
    if step >= 10.0 || step == 0.0 {
        format!("{value:.0}")
    } else if step >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}
