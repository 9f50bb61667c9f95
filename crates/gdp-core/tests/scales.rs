// File: crates/gdp-core/tests/scales.rs
// Purpose: Ordering properties of the rendered scales over a realistic series.

use gdp_core::{Chart, RenderOptions, ScaleTransform, Series};

fn fixture() -> Series {
    #[derive(serde::Deserialize)]
    struct Payload {
        data: Series,
    }
    serde_json::from_str::<Payload>(include_str!("fixtures/gdp_sample.json")).expect("fixture").data
}

#[test]
fn bar_height_is_monotonic_in_value() {
    let chart = Chart::new(fixture()).render(&RenderOptions::default()).expect("render");
    for a in &chart.bars {
        for b in &chart.bars {
            if a.value < b.value {
                assert!(a.rect.height < b.rect.height, "{} vs {}", a.date, b.date);
            }
        }
    }
}

#[test]
fn x_position_preserves_date_order() {
    let chart = Chart::new(fixture()).render(&RenderOptions::default()).expect("render");
    for w in chart.scaled.windows(2) {
        assert!(chart.x_scale.to_px(w[0].date) < chart.x_scale.to_px(w[1].date));
    }
    let first = chart.bars.first().unwrap();
    let last = chart.bars.last().unwrap();
    assert_eq!(first.rect.x, 0.0);
    assert_eq!(last.rect.x, 1000.0);
}

#[test]
fn value_scale_spans_zero_to_max() {
    let chart = Chart::new(fixture()).render(&RenderOptions::default()).expect("render");
    assert_eq!(chart.y_scale.domain(), (0.0, 280.7));
    assert_eq!(chart.y_scale.to_px(0.0), 530.0);
    assert_eq!(chart.y_scale.to_px(280.7), 0.0);
}
