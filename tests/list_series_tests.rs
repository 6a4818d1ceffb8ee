use std::cell::RefCell;
use std::rc::Rc;

use chartwire::{
    ChartError, ChartUpdate, ChartUpdateListener, Configuration, DataPoint, ListSeries, SeriesId,
};
use serde_json::json;

struct RecordingListener {
    id: String,
    updates: Rc<RefCell<Vec<ChartUpdate>>>,
}

impl ChartUpdateListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_update(&mut self, update: &ChartUpdate) {
        self.updates.borrow_mut().push(update.clone());
    }
}

fn attached_list(
    values: &[f64],
) -> (Configuration, SeriesId, Rc<RefCell<Vec<ChartUpdate>>>) {
    let mut config = Configuration::new();
    let updates = Rc::new(RefCell::new(Vec::new()));
    config
        .add_listener(Box::new(RecordingListener {
            id: "recorder".to_owned(),
            updates: Rc::clone(&updates),
        }))
        .expect("register listener");

    let id = config
        .add_series(ListSeries::from_values("flat", values))
        .expect("add series");
    (config, id, updates)
}

fn list_mut(config: &mut Configuration, id: SeriesId) -> &mut ListSeries {
    config
        .series_mut(id)
        .expect("series by id")
        .as_list_mut()
        .expect("list series")
}

#[test]
fn from_values_preserves_order() {
    let series = ListSeries::from_values("flat", &[3.0, 1.0, 2.0]);
    assert_eq!(series.name(), Some("flat"));
    assert_eq!(series.data(), &[Some(3.0), Some(1.0), Some(2.0)]);
}

#[test]
fn set_data_notifies_a_series_level_change() {
    let (mut config, id, updates) = attached_list(&[1.0]);

    list_mut(&mut config, id).set_data(vec![Some(5.0), None, Some(7.0)]);

    assert_eq!(list_mut(&mut config, id).size(), 3);
    assert_eq!(
        updates.borrow().as_slice(),
        &[ChartUpdate::SeriesChanged { series: id }]
    );
}

#[test]
fn add_notifies_with_the_appended_value() {
    let (mut config, id, updates) = attached_list(&[]);

    list_mut(&mut config, id).add(4.5);

    assert_eq!(list_mut(&mut config, id).data(), &[Some(4.5)]);
    assert_eq!(
        updates.borrow().as_slice(),
        &[ChartUpdate::DataAdded {
            series: id,
            point: DataPoint::with_y(4.5),
            shift: false,
        }]
    );
}

#[test]
fn update_point_replaces_in_place_and_notifies() {
    let (mut config, id, updates) = attached_list(&[1.0, 2.0]);

    list_mut(&mut config, id)
        .update_point(1, 9.0)
        .expect("update");

    assert_eq!(list_mut(&mut config, id).data(), &[Some(1.0), Some(9.0)]);
    assert_eq!(
        updates.borrow().as_slice(),
        &[ChartUpdate::DataUpdated {
            series: id,
            point: DataPoint::with_y(9.0),
            index: 1,
        }]
    );
}

#[test]
fn update_point_out_of_range_is_an_index_error() {
    let mut series = ListSeries::from_values("flat", &[1.0]);
    let err = series.update_point(3, 9.0).expect_err("out of range");
    assert!(matches!(
        err,
        ChartError::IndexOutOfBounds { index: 3, len: 1 }
    ));
}

#[test]
fn detached_mutations_are_silent() {
    let mut series = ListSeries::new("flat");
    series.add(1.0);
    series.set_data(vec![Some(2.0)]);
    series.update_point(0, 3.0).expect("update");
    assert_eq!(series.data(), &[Some(3.0)]);
}

#[test]
fn serializes_as_name_plus_value_array() {
    let mut series = ListSeries::from_values("flat", &[1.0, 2.0]);
    series.set_data(vec![Some(1.0), None, Some(3.0)]);

    assert_eq!(
        serde_json::to_value(&series).expect("serialize"),
        json!({ "name": "flat", "data": [1.0, null, 3.0] })
    );
}
