use chartwire::options::{
    Axis, AxisTitle, ChartOptions, ChartType, ColumnPlotOptions, Credits, Legend, PlotOptions,
    Stacking, Subtitle, Title, Tooltip,
};
use chartwire::{Configuration, DataPoint, DataSeries, ListSeries};
use serde_json::json;

fn document(config: &Configuration) -> serde_json::Value {
    let text = config.to_json().expect("serialize configuration");
    serde_json::from_str(&text).expect("parse emitted document")
}

#[test]
fn empty_configuration_emits_only_required_nodes() {
    let config = Configuration::new();
    assert_eq!(document(&config), json!({ "chart": {}, "series": [] }));
}

#[test]
fn full_document_matches_the_renderer_option_schema() {
    let mut config =
        Configuration::new().with_chart(ChartOptions::new(ChartType::Column));
    config.set_title(Title::new("Fruit consumption"));
    config.set_subtitle(Subtitle::new("2024 totals"));
    config.add_x_axis(Axis::new().with_categories(["Apples", "Pears"]));
    config.add_y_axis(Axis::new().with_title(AxisTitle::new("Count")));
    config.set_tooltip(Tooltip::new().with_shared(true).with_value_suffix(" pcs"));
    config.set_legend(Legend::disabled());
    config.set_credits(Credits::disabled());
    config.set_plot_options(PlotOptions::new().with_column(ColumnPlotOptions {
        stacking: Some(Stacking::Normal),
        ..ColumnPlotOptions::default()
    }));

    let mut totals = DataSeries::new().with_name("2023").with_stack("totals");
    totals.set_data(vec![DataPoint::with_y(1.0), DataPoint::with_y(2.0)]);
    config.add_series(totals).expect("data series");
    config
        .add_series(ListSeries::from_values("2024", &[3.0, 4.0]))
        .expect("list series");

    config.set_custom("colors", json!(["#2f7ed8", "#0d233a"]));

    assert_eq!(
        document(&config),
        json!({
            "chart": { "type": "column" },
            "title": { "text": "Fruit consumption" },
            "subtitle": { "text": "2024 totals" },
            "xAxis": [{ "type": "category", "categories": ["Apples", "Pears"] }],
            "yAxis": [{ "title": { "text": "Count" } }],
            "tooltip": { "shared": true, "valueSuffix": " pcs" },
            "legend": { "enabled": false },
            "credits": { "enabled": false },
            "plotOptions": { "column": { "stacking": "normal" } },
            "series": [
                { "name": "2023", "stack": "totals", "data": [1.0, 2.0] },
                { "name": "2024", "data": [3.0, 4.0] },
            ],
            "colors": ["#2f7ed8", "#0d233a"],
        })
    );
}

#[test]
fn hidden_series_carries_an_explicit_visible_flag() {
    let mut config = Configuration::new();
    let id = config
        .add_series(DataSeries::new().with_name("hidden"))
        .expect("add series");
    config
        .series_mut(id)
        .and_then(|s| s.as_data_mut())
        .expect("series")
        .set_visible(false);

    assert_eq!(
        document(&config)["series"],
        json!([{ "name": "hidden", "data": [], "visible": false }])
    );
}

#[test]
fn drilldown_document_links_points_to_child_series() {
    let mut config = Configuration::new().with_chart(ChartOptions::new(ChartType::Pie));

    let mut browsers = DataSeries::new().with_name("Browsers");
    browsers
        .add_point_with_drilldown(
            DataPoint::named("Chrome", 62.0),
            DataSeries::new()
                .with_id("chrome")
                .with_name("Chrome versions"),
        )
        .expect("buffer drilldown");
    config.add_series(browsers).expect("add series");

    assert_eq!(
        document(&config),
        json!({
            "chart": { "type": "pie" },
            "series": [{
                "name": "Browsers",
                "data": [{ "name": "Chrome", "y": 62.0, "drilldown": "chrome" }],
            }],
            "drilldown": {
                "series": [{ "id": "chrome", "name": "Chrome versions", "data": [] }],
            },
        })
    );
}

#[test]
fn pretty_output_round_trips_to_the_same_document() {
    let mut config = Configuration::new().with_chart(ChartOptions::new(ChartType::Line));
    config.set_title(Title::new("t"));
    config
        .add_series(ListSeries::from_values("s", &[1.0]))
        .expect("add series");

    let pretty: serde_json::Value = serde_json::from_str(
        &config.to_json_pretty().expect("pretty serialize"),
    )
    .expect("parse pretty");
    assert_eq!(pretty, document(&config));
}
