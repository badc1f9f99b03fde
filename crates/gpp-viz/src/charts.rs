use gpp_core::{
    CapacityDistribution, ChoroplethAggregate, CountryView, FuelShareAggregate, RankingAggregate,
    YearFrame,
};
use serde::Serialize;
use serde_json::json;

use crate::figure::*;

const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";
const RANKING_BAR_COLOR: &str = "#E24A33";
const FUEL_LEGEND: &str = "Type of Fuel";

/// Sequential "Tealgrn" scale, light to dark.
pub const TEALGRN: [&str; 7] = [
    "rgb(176, 242, 188)",
    "rgb(137, 232, 172)",
    "rgb(103, 219, 165)",
    "rgb(76, 200, 163)",
    "rgb(56, 178, 163)",
    "rgb(44, 152, 160)",
    "rgb(37, 125, 152)",
];

/// The three country-filtered figures, one per dashboard slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryFigures {
    pub ranking: Figure,
    pub fuel_share: Figure,
    pub distribution: Figure,
}

impl CountryFigures {
    pub fn from_view(view: &CountryView) -> Self {
        Self {
            ranking: ranking_chart(&view.ranking),
            fuel_share: fuel_share_chart(&view.fuel_share),
            distribution: distribution_chart(&view.distribution),
        }
    }
}

/// Horizontal bar chart; entries arrive ascending so the largest plant is
/// drawn at the top.
pub fn ranking_chart(ranking: &RankingAggregate) -> Figure {
    let trace = BarTrace {
        x: ranking.entries.iter().map(|e| e.capacity_mw.value()).collect(),
        y: ranking.entries.iter().map(|e| e.plant_name.clone()).collect(),
        orientation: "h",
        marker: Marker {
            color: RANKING_BAR_COLOR.to_string(),
        },
        hovertemplate: "%{y}: %{x} MW<extra></extra>",
    };

    Figure {
        data: vec![Trace::Bar(trace)],
        layout: Layout {
            title: Title::new(format!(
                "Ranking of Overall Power Plants in {}",
                ranking.country
            )),
            paper_bgcolor: Some(TRANSPARENT),
            plot_bgcolor: Some(TRANSPARENT),
            xaxis: Some(Axis {
                title: Title::new("capacity in MW"),
            }),
            yaxis: Some(Axis {
                title: Title::new("name of powerplant"),
            }),
            ..Layout::default()
        },
        frames: Vec::new(),
    }
}

pub fn fuel_share_chart(share: &FuelShareAggregate) -> Figure {
    let trace = PieTrace {
        labels: share.slices.iter().map(|s| s.fuel.clone()).collect(),
        values: share.slices.iter().map(|s| s.count).collect(),
        hole: 0.4,
        sort: false,
        marker: PieMarker {
            colors: share.slices.iter().map(|s| s.color.to_string()).collect(),
        },
    };

    Figure {
        data: vec![Trace::Pie(trace)],
        layout: Layout {
            title: Title::new(format!("Power Plants by Fuel in {}", share.country)),
            legend: Some(Legend {
                title: Title::new(FUEL_LEGEND),
            }),
            ..Layout::default()
        },
        frames: Vec::new(),
    }
}

/// One box per fuel. An empty distribution gives a figure with no traces.
pub fn distribution_chart(dist: &CapacityDistribution) -> Figure {
    let data = dist
        .groups
        .iter()
        .map(|group| {
            Trace::BoxPlot(BoxTrace {
                name: group.fuel.clone(),
                y: group.capacities_mw.iter().map(|mw| mw.value()).collect(),
                marker: Marker {
                    color: group.color.to_string(),
                },
                boxpoints: "outliers",
            })
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Title::new(format!(
                "Distribution of capacity in MW in each fuel in {}",
                dist.country
            )),
            yaxis: Some(Axis {
                title: Title::new("capacity in MW"),
            }),
            legend: Some(Legend {
                title: Title::new(FUEL_LEGEND),
            }),
            ..Layout::default()
        },
        frames: Vec::new(),
    }
}

/// Animated world map with one frame per start year.
///
/// The color range is fixed to `0..=max_count` so colors are comparable
/// across frames. The initial data is the first (earliest) frame.
pub fn choropleth_chart(map: &ChoroplethAggregate) -> Figure {
    let zmax = map.max_count.max(1) as f64;
    let frames: Vec<Frame> = map
        .frames
        .iter()
        .map(|frame| Frame {
            name: frame.start_year.to_string(),
            data: vec![Trace::Choropleth(year_trace(frame, zmax))],
        })
        .collect();

    let steps = frames
        .iter()
        .map(|frame| SliderStep {
            label: frame.name.clone(),
            method: "animate",
            args: json!([[frame.name], {
                "mode": "immediate",
                "frame": { "duration": 0, "redraw": true },
                "transition": { "duration": 0 }
            }]),
        })
        .collect::<Vec<_>>();

    let data = frames.first().map(|f| f.data.clone()).unwrap_or_default();
    let (sliders, updatemenus) = if steps.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        (
            vec![Slider {
                active: 0,
                currentvalue: SliderValue {
                    prefix: "start_year=".to_string(),
                },
                steps,
            }],
            vec![play_controls()],
        )
    };

    Figure {
        data,
        layout: Layout {
            title: Title::new("Power Plants by Country and Start Year"),
            geo: Some(Geo {
                showframe: false,
                projection: Projection {
                    kind: "natural earth",
                },
            }),
            sliders,
            updatemenus,
            ..Layout::default()
        },
        frames,
    }
}

fn year_trace(frame: &YearFrame, zmax: f64) -> ChoroplethTrace {
    let last = (TEALGRN.len() - 1) as f64;
    ChoroplethTrace {
        locations: frame.counts.iter().map(|c| c.country_code.clone()).collect(),
        z: frame.counts.iter().map(|c| c.count).collect(),
        locationmode: "ISO-3",
        colorscale: TEALGRN
            .iter()
            .enumerate()
            .map(|(idx, color)| (idx as f64 / last, *color))
            .collect(),
        zmin: 0.0,
        zmax,
        colorbar: ColorBar {
            title: Title::new("No of Power Plant"),
        },
    }
}

fn play_controls() -> UpdateMenu {
    UpdateMenu {
        kind: "buttons",
        showactive: false,
        buttons: vec![
            MenuButton {
                label: "Play".to_string(),
                method: "animate",
                args: json!([null, {
                    "frame": { "duration": 500, "redraw": true },
                    "fromcurrent": true
                }]),
            },
            MenuButton {
                label: "Pause".to_string(),
                method: "animate",
                args: json!([[null], {
                    "mode": "immediate",
                    "frame": { "duration": 0, "redraw": true }
                }]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpp_core::{choropleth, PlantDataset, PowerPlantRecord};
    use serde_json::Value;

    fn dataset() -> PlantDataset {
        PlantDataset::new(vec![
            PowerPlantRecord::new("Brazil", "BRA", "Itaipu", "Hydro", 14000.0).with_start_year(1984),
            PowerPlantRecord::new("Brazil", "BRA", "Angra", "Nuclear", 1990.0).with_start_year(1985),
            PowerPlantRecord::new("Brazil", "BRA", "Tucurui", "Hydro", 2500.0).with_start_year(1984),
            PowerPlantRecord::new("Chile", "CHL", "Ralco", "Hydro", 690.0).with_start_year(2004),
        ])
    }

    fn to_json(figure: &Figure) -> Value {
        serde_json::to_value(figure).unwrap()
    }

    #[test]
    fn test_ranking_chart_is_horizontal_bar() {
        let view = CountryView::compute(&dataset(), "Brazil");
        let json = to_json(&ranking_chart(&view.ranking));
        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["data"][0]["orientation"], "h");
        assert_eq!(json["data"][0]["y"][2], "Itaipu");
        assert_eq!(
            json["layout"]["title"]["text"],
            "Ranking of Overall Power Plants in Brazil"
        );
        assert!(json.get("frames").is_none());
    }

    #[test]
    fn test_pie_uses_palette_colors() {
        let data = dataset();
        let view = CountryView::compute(&data, "Brazil");
        let json = to_json(&fuel_share_chart(&view.fuel_share));
        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(json["data"][0]["hole"], 0.4);
        assert_eq!(json["data"][0]["labels"][0], "Hydro");
        assert_eq!(
            json["data"][0]["marker"]["colors"][0],
            data.palette().color("Hydro").unwrap()
        );
    }

    #[test]
    fn test_box_traces_per_fuel() {
        let view = CountryView::compute(&dataset(), "Brazil");
        let figure = distribution_chart(&view.distribution);
        assert_eq!(figure.trace_count(), 2);
        let json = to_json(&figure);
        assert_eq!(json["data"][0]["type"], "box");
        assert_eq!(json["data"][0]["name"], "Hydro");
        assert_eq!(json["data"][0]["y"], serde_json::json!([2500.0]));
    }

    #[test]
    fn test_empty_selection_renders_empty_figures() {
        let view = CountryView::compute(&dataset(), "Atlantis");
        let figures = CountryFigures::from_view(&view);
        let json = serde_json::to_value(&figures).unwrap();
        assert_eq!(json["ranking"]["data"][0]["x"], serde_json::json!([]));
        assert_eq!(json["fuel_share"]["data"][0]["values"], serde_json::json!([]));
        assert_eq!(figures.distribution.trace_count(), 0);
    }

    #[test]
    fn test_choropleth_frames_and_slider() {
        let figure = choropleth_chart(&choropleth(&dataset()));
        let names: Vec<_> = figure.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["1984", "1985", "2004"]);
        assert_eq!(figure.data, figure.frames[0].data);
        assert_eq!(figure.layout.sliders[0].steps.len(), 3);

        let json = to_json(&figure);
        let first = &json["frames"][0]["data"][0];
        assert_eq!(first["type"], "choropleth");
        assert_eq!(first["locations"], serde_json::json!(["BRA"]));
        assert_eq!(first["z"], serde_json::json!([2]));
        assert_eq!(first["zmax"], 2.0);
        assert_eq!(first["colorscale"][0], serde_json::json!([0.0, TEALGRN[0]]));
    }

    #[test]
    fn test_empty_choropleth_has_no_controls() {
        let figure = choropleth_chart(&choropleth(&PlantDataset::default()));
        assert!(figure.data.is_empty());
        assert!(figure.layout.sliders.is_empty());
        assert!(figure.layout.updatemenus.is_empty());
    }
}
