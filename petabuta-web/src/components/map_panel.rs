//! The map widget: a static inline SVG built from the core's colored
//! feature collections. Pointer events are ignored; the map only displays.

use petabuta_game::{AskStatus, Geometry, StatusFeature, SummaryFeature, SummaryLabel};
use yew::prelude::*;

const VIEW_WIDTH: f64 = 1000.0;
const VIEW_HEIGHT: f64 = 420.0;
const PADDING: f64 = 12.0;

/// Categorical fill for the in-play map (Set1 highlight over neutral grey).
#[must_use]
pub const fn status_color(status: AskStatus) -> &'static str {
    match status {
        AskStatus::BeingAsked => "#e41a1c",
        AskStatus::NotAsked => "#cccccc",
    }
}

/// Categorical fill for the game-over map, green-to-red by outcome.
#[must_use]
pub const fn summary_color(label: SummaryLabel) -> &'static str {
    match label {
        SummaryLabel::Correct => "#1a9641",
        SummaryLabel::HalfCorrect => "#a6d96a",
        SummaryLabel::Unanswered => "#fdae61",
        SummaryLabel::Wrong => "#d7191c",
    }
}

/// One renderable province outline.
#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    pub path: AttrValue,
    pub fill: &'static str,
    pub title: AttrValue,
}

/// Legend entry: category label and its fill.
pub type LegendEntry = (AttrValue, &'static str);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

fn bounds_of<'a>(geometries: impl Iterator<Item = &'a Geometry>) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    for geometry in geometries {
        for ring in geometry.rings() {
            for &[x, y] in ring {
                let b = bounds.get_or_insert(Bounds {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                });
                b.min_x = b.min_x.min(x);
                b.min_y = b.min_y.min(y);
                b.max_x = b.max_x.max(x);
                b.max_y = b.max_y.max(y);
            }
        }
    }
    bounds
}

fn path_for(geometry: &Geometry, bounds: Bounds) -> String {
    let span_x = (bounds.max_x - bounds.min_x).max(f64::EPSILON);
    let span_y = (bounds.max_y - bounds.min_y).max(f64::EPSILON);
    let scale = ((VIEW_WIDTH - 2.0 * PADDING) / span_x).min((VIEW_HEIGHT - 2.0 * PADDING) / span_y);

    let mut path = String::new();
    for ring in geometry.rings() {
        for (i, &[x, y]) in ring.iter().enumerate() {
            let px = PADDING + (x - bounds.min_x) * scale;
            // Latitude grows north; SVG y grows down.
            let py = PADDING + (bounds.max_y - y) * scale;
            let op = if i == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{op}{px:.1},{py:.1} "));
        }
        path.push_str("Z ");
    }
    path.trim_end().to_string()
}

/// Project the in-play feature collection into renderable shapes.
#[must_use]
pub fn status_shapes(features: &[StatusFeature]) -> Vec<MapShape> {
    let Some(bounds) = bounds_of(features.iter().map(|f| &f.geometry)) else {
        return Vec::new();
    };
    features
        .iter()
        .map(|f| MapShape {
            path: AttrValue::from(path_for(&f.geometry, bounds)),
            fill: status_color(f.status),
            title: AttrValue::from(f.name.clone()),
        })
        .collect()
}

/// Project the game-over feature collection into renderable shapes, with
/// full tooltips (province, capital, outcome).
#[must_use]
pub fn summary_shapes(features: &[SummaryFeature]) -> Vec<MapShape> {
    let Some(bounds) = bounds_of(features.iter().map(|f| &f.geometry)) else {
        return Vec::new();
    };
    features
        .iter()
        .map(|f| MapShape {
            path: AttrValue::from(path_for(&f.geometry, bounds)),
            fill: summary_color(f.label),
            title: AttrValue::from(format!("{} - {} - {}", f.name, f.capital, f.label)),
        })
        .collect()
}

/// Legend entries for the game-over map in fixed category order.
#[must_use]
pub fn summary_legend() -> Vec<LegendEntry> {
    SummaryLabel::CATEGORIES
        .iter()
        .map(|label| (AttrValue::from(label.to_string()), summary_color(*label)))
        .collect()
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub shapes: Vec<MapShape>,
    #[prop_or_default]
    pub legend: Vec<LegendEntry>,
}

#[function_component(MapPanel)]
pub fn map_panel(props: &Props) -> Html {
    html! {
        <div class="map-panel">
            <svg
                viewBox={format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")}
                role="img"
                aria-label="Peta provinsi Indonesia"
                class="province-map"
            >
                {
                    props.shapes.iter().map(|shape| html! {
                        <path
                            d={shape.path.clone()}
                            fill={shape.fill}
                            stroke="black"
                            stroke-width="0.5"
                            pointer-events="none"
                        >
                            <title>{ shape.title.clone() }</title>
                        </path>
                    }).collect::<Html>()
                }
            </svg>
            if !props.legend.is_empty() {
                <div class="map-legend" role="list">
                    {
                        props.legend.iter().map(|(label, color)| html! {
                            <span class="legend-item" role="listitem">
                                <span class="legend-swatch" style={format!("background: {color}")}></span>
                                { label.clone() }
                            </span>
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(offset: f64) -> Geometry {
        Geometry::Polygon(vec![vec![
            [offset, 0.0],
            [offset + 1.0, 0.0],
            [offset + 1.0, 1.0],
            [offset, 0.0],
        ]])
    }

    #[test]
    fn bounds_cover_every_feature() {
        let geometries = [triangle(0.0), triangle(5.0)];
        let bounds = bounds_of(geometries.iter()).unwrap();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 6.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 1.0);
    }

    #[test]
    fn path_is_closed_and_in_view() {
        let geometry = triangle(0.0);
        let bounds = bounds_of(std::iter::once(&geometry)).unwrap();
        let path = path_for(&geometry, bounds);
        assert!(path.starts_with('M'));
        assert!(path.ends_with('Z'));
        // North edge (max latitude) maps to the top padding.
        assert!(path.contains(&format!("{PADDING:.1}")));
    }

    #[test]
    fn status_shapes_highlight_only_the_asked_province() {
        let features = vec![
            StatusFeature {
                name: "Bali".into(),
                capital: "Denpasar".into(),
                status: AskStatus::BeingAsked,
                geometry: triangle(0.0),
            },
            StatusFeature {
                name: "Aceh".into(),
                capital: "Banda Aceh".into(),
                status: AskStatus::NotAsked,
                geometry: triangle(3.0),
            },
        ];
        let shapes = status_shapes(&features);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].fill, status_color(AskStatus::BeingAsked));
        assert_eq!(shapes[1].fill, status_color(AskStatus::NotAsked));
    }

    #[test]
    fn summary_legend_follows_category_order() {
        let legend = summary_legend();
        let labels: Vec<_> = legend.iter().map(|(l, _)| l.to_string()).collect();
        assert_eq!(labels, ["correct", "half-correct", "unanswered", "wrong"]);
        assert_eq!(legend[0].1, summary_color(SummaryLabel::Correct));
    }

    #[test]
    fn summary_shapes_carry_outcome_tooltips() {
        let features = vec![SummaryFeature {
            name: "Bali".into(),
            capital: "Denpasar".into(),
            label: SummaryLabel::HalfCorrect,
            geometry: triangle(0.0),
        }];
        let shapes = summary_shapes(&features);
        assert_eq!(shapes[0].title, "Bali - Denpasar - half-correct");
        assert_eq!(shapes[0].fill, summary_color(SummaryLabel::HalfCorrect));
    }

    #[test]
    fn empty_collections_produce_no_shapes() {
        assert!(status_shapes(&[]).is_empty());
        assert!(summary_shapes(&[]).is_empty());
    }
}
