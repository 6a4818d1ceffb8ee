use std::cell::RefCell;
use std::rc::Rc;

use chartwire::{
    ChartUpdate, ChartUpdateListener, Configuration, DataPoint, DataSeries, SeriesId,
};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

struct CountingListener {
    count: Rc<RefCell<usize>>,
}

impl ChartUpdateListener for CountingListener {
    fn id(&self) -> &str {
        "counter"
    }

    fn on_update(&mut self, _update: &ChartUpdate) {
        *self.count.borrow_mut() += 1;
    }
}

fn counted_configuration() -> (Configuration, SeriesId, Rc<RefCell<usize>>) {
    let mut config = Configuration::new();
    let count = Rc::new(RefCell::new(0));
    config
        .add_listener(Box::new(CountingListener {
            count: Rc::clone(&count),
        }))
        .expect("register listener");
    let id = config.add_series(DataSeries::new()).expect("add series");
    (config, id, count)
}

fn series_mut(config: &mut Configuration, id: SeriesId) -> &mut DataSeries {
    config
        .series_mut(id)
        .expect("series by id")
        .as_data_mut()
        .expect("data series")
}

proptest! {
    #[test]
    fn net_size_tracks_adds_and_removes(
        ops in proptest::collection::vec((any::<bool>(), 0usize..32, -1_000.0f64..1_000.0), 0..64)
    ) {
        let mut series = DataSeries::new();
        let mut expected = 0usize;

        for (step, (is_add, slot, y)) in ops.into_iter().enumerate() {
            if is_add || series.is_empty() {
                series.add(DataPoint::new(step as f64, y));
                expected += 1;
            } else {
                let victim = series.get(slot % series.size()).expect("in range").clone();
                prop_assert!(series.remove(&victim).is_some());
                expected -= 1;
            }
            prop_assert_eq!(series.size(), expected);
        }
    }

    #[test]
    fn set_data_preserves_content_and_order(
        ys in proptest::collection::vec(-1_000.0f64..1_000.0, 0..64)
    ) {
        let points: Vec<DataPoint> = ys
            .iter()
            .enumerate()
            .map(|(i, &y)| DataPoint::new(i as f64, y))
            .collect();

        let mut series = DataSeries::new();
        series.set_data(points.clone());

        prop_assert_eq!(series.size(), points.len());
        prop_assert_eq!(series.data(), points.as_slice());
    }

    #[test]
    fn shift_add_keeps_the_window_size_constant(
        seed in proptest::collection::vec(-1_000.0f64..1_000.0, 1..32),
        stream in proptest::collection::vec(-1_000.0f64..1_000.0, 0..32)
    ) {
        let mut series = DataSeries::new();
        series.set_data(seed.iter().map(|&y| DataPoint::with_y(y)).collect());
        let window = series.size();

        for y in stream {
            series.add_with(DataPoint::with_y(y), true, true);
            prop_assert_eq!(series.size(), window);
            let newest = series.get(window - 1).expect("newest point");
            prop_assert_eq!(newest.y(), Some(y));
        }
    }

    #[test]
    fn notification_fires_iff_update_immediately(
        flags in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let (mut config, id, count) = counted_configuration();
        let expected = flags.iter().filter(|&&immediate| immediate).count();

        for (step, immediate) in flags.into_iter().enumerate() {
            series_mut(&mut config, id).add_with(
                DataPoint::new(step as f64, 1.0),
                immediate,
                false,
            );
        }

        prop_assert_eq!(*count.borrow(), expected);
    }

    #[test]
    fn calendar_x_equals_epoch_millis(
        secs in 0i64..4_102_444_800,
        millis in 0u32..1_000
    ) {
        let time = Utc
            .timestamp_opt(secs, millis * 1_000_000)
            .single()
            .expect("valid timestamp");
        let point = DataPoint::from_datetime(time, 1.0);

        let expected = (secs * 1_000 + i64::from(millis)) as f64;
        prop_assert_eq!(point.x, Some(expected));
    }

    #[test]
    fn decimal_y_converts_within_float_tolerance(
        units in -1_000_000i64..1_000_000,
        scale in 0u32..6
    ) {
        let point = DataPoint::from_decimal(0.0, Decimal::new(units, scale)).expect("convert");
        let expected = units as f64 / 10f64.powi(scale as i32);
        prop_assert!(approx::relative_eq!(
            point.y().expect("plain y"),
            expected,
            max_relative = 1e-12
        ));
    }

    #[test]
    fn get_by_name_finds_the_first_match(
        names in proptest::collection::vec("[a-d]", 1..32)
    ) {
        let mut series = DataSeries::new();
        series.set_data(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| DataPoint::named(name.clone(), i as f64))
                .collect(),
        );

        for target in ["a", "b", "c", "d"] {
            let expected = names.iter().position(|name| name == target);
            let found = series.get_by_name(target).and_then(DataPoint::y);
            prop_assert_eq!(found, expected.map(|i| i as f64));
        }
    }
}
