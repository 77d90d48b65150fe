use yew::prelude::*;

use crate::models::SeriesPoint;

// Plot margins in SVG user units. The left margin carries the value-axis
// tick labels, the bottom margin the category labels.
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;

const TOOLTIP_WIDTH: f64 = 104.0;
const TOOLTIP_HEIGHT: f64 = 40.0;

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub points: Vec<SeriesPoint>,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
    #[prop_or("#f5793b")]
    pub stroke: &'static str,
}

/// Line chart over an ordered point sequence: dashed grid, category x-axis,
/// numeric y-axis from zero, and a hover tooltip with an enlarged dot over
/// the point under the cursor. Points are plotted as given, in given order.
#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    let width = f64::from(props.width.unwrap_or(640));
    let height = f64::from(props.height.unwrap_or(260));

    if props.points.is_empty() {
        return html! {
            <div class="chart-empty py-8 text-center text-sm text-gray-500 dark:text-gray-400">
                {"No data to plot"}
            </div>
        };
    }

    let max_value = props.points.iter().map(|p| p.value).fold(0.0, f64::max);
    let (top, ticks) = value_axis(max_value);
    let positions = point_positions(&props.points, width, height, top);
    let path = line_path(&positions);

    let grid = ticks
        .iter()
        .map(|tick| {
            let y = MARGIN_TOP + (1.0 - tick / top) * (height - MARGIN_TOP - MARGIN_BOTTOM);
            html! {
                <g key={format!("tick-{tick}")}>
                    <line
                        x1={MARGIN_LEFT.to_string()}
                        y1={y.to_string()}
                        x2={(width - MARGIN_RIGHT).to_string()}
                        y2={y.to_string()}
                        stroke="currentColor"
                        stroke-opacity="0.15"
                        stroke-dasharray="3 3"
                    />
                    <text
                        x={(MARGIN_LEFT - 8.0).to_string()}
                        y={(y + 4.0).to_string()}
                        text-anchor="end"
                        font-size="11"
                        fill="currentColor"
                        fill-opacity="0.6"
                    >
                        { format_value(*tick) }
                    </text>
                </g>
            }
        })
        .collect::<Html>();

    let labels = props
        .points
        .iter()
        .zip(positions.iter())
        .map(|(point, (x, _))| {
            html! {
                <text
                    key={point.label}
                    x={x.to_string()}
                    y={(height - MARGIN_BOTTOM + 18.0).to_string()}
                    text-anchor="middle"
                    font-size="11"
                    fill="currentColor"
                    fill-opacity="0.6"
                >
                    { point.label }
                </text>
            }
        })
        .collect::<Html>();

    let dots = positions
        .iter()
        .enumerate()
        .map(|(index, (x, y))| {
            let onmouseenter = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
            };
            let onmouseleave = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(None))
            };
            let radius = if *hovered == Some(index) { "8" } else { "3" };
            html! {
                <g key={index}>
                    <circle
                        cx={x.to_string()}
                        cy={y.to_string()}
                        r={radius}
                        fill={props.stroke}
                    />
                    // Oversized invisible hit target so the tooltip does not
                    // require pixel-precise hovering.
                    <circle
                        cx={x.to_string()}
                        cy={y.to_string()}
                        r="14"
                        fill="transparent"
                        {onmouseenter}
                        {onmouseleave}
                    />
                </g>
            }
        })
        .collect::<Html>();

    let tooltip = (*hovered)
        .and_then(|index| {
            positions.get(index).map(|(x, y)| {
                let point = &props.points[index];
                let box_x = (x - TOOLTIP_WIDTH / 2.0)
                    .max(MARGIN_LEFT)
                    .min(width - MARGIN_RIGHT - TOOLTIP_WIDTH);
                let box_y = if y - TOOLTIP_HEIGHT - 12.0 > MARGIN_TOP {
                    y - TOOLTIP_HEIGHT - 12.0
                } else {
                    y + 12.0
                };
                html! {
                    <g class="pointer-events-none">
                        <rect
                            x={box_x.to_string()}
                            y={box_y.to_string()}
                            width={TOOLTIP_WIDTH.to_string()}
                            height={TOOLTIP_HEIGHT.to_string()}
                            rx="6"
                            fill="#111827"
                            fill-opacity="0.9"
                        />
                        <text
                            x={(box_x + TOOLTIP_WIDTH / 2.0).to_string()}
                            y={(box_y + 16.0).to_string()}
                            text-anchor="middle"
                            font-size="11"
                            fill="#f9fafb"
                        >
                            { point.label }
                        </text>
                        <text
                            x={(box_x + TOOLTIP_WIDTH / 2.0).to_string()}
                            y={(box_y + 32.0).to_string()}
                            text-anchor="middle"
                            font-size="12"
                            font-weight="bold"
                            fill={props.stroke}
                        >
                            { format_value(point.value) }
                        </text>
                    </g>
                }
            })
        })
        .unwrap_or_default();

    html! {
        <div class="chart-container w-full overflow-x-auto">
            <svg
                class="line-chart w-full"
                viewBox={format!("0 0 {width} {height}")}
                width="100%"
                height={height.to_string()}
                preserveAspectRatio="xMidYMid meet"
            >
                { grid }
                { labels }
                <path
                    d={path}
                    fill="none"
                    stroke={props.stroke}
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                { dots }
                { tooltip }
            </svg>
        </div>
    }
}

/// Numeric-axis domain: a tick every "nice" step from zero up to the first
/// step multiple at or above the maximum. Returns `(top, ticks)`.
pub fn value_axis(max_value: f64) -> (f64, Vec<f64>) {
    let raw_step = if max_value > 0.0 { max_value / 4.0 } else { 0.25 };
    let step = nice_ceiling(raw_step);
    let top = step * (max_value / step).ceil().max(1.0);
    let mut ticks = Vec::new();
    let mut tick = 0.0;
    while tick <= top + step / 2.0 {
        ticks.push(tick);
        tick += step;
    }
    (top, ticks)
}

/// Rounds up to the nearest 1/2/2.5/5 times a power of ten.
pub fn nice_ceiling(value: f64) -> f64 {
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let scaled = value / magnitude;
    let nice = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 2.5 {
        2.5
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Maps the point sequence onto plot coordinates. X spreads points evenly
/// left to right in input order (a lone point is centered); Y scales values
/// against `top` with zero at the plot floor.
pub fn point_positions(points: &[SeriesPoint], width: f64, height: f64, top: f64) -> Vec<(f64, f64)> {
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let span = points.len().saturating_sub(1).max(1) as f64;

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if points.len() == 1 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + index as f64 / span * plot_width
            };
            let y = MARGIN_TOP + (1.0 - point.value / top) * plot_height;
            (x, y)
        })
        .collect()
}

/// SVG path through the plotted positions, in order.
pub fn line_path(positions: &[(f64, f64)]) -> String {
    if positions.is_empty() {
        return String::new();
    }
    let points: Vec<String> = positions
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect();
    format!("M {}", points.join(" L "))
}

/// Display form of an axis or tooltip value: integers get thousands
/// separators, everything else one decimal.
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1.0e-9 {
        let negative = value < 0.0;
        let digits = format!("{:.0}", value.abs());
        let mut grouped = String::new();
        for (offset, ch) in digits.chars().enumerate() {
            if offset > 0 && (digits.len() - offset) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if negative {
            format!("-{grouped}")
        } else {
            grouped
        }
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::USER_GROWTH;

    #[test]
    fn fixed_series_plots_six_points_left_to_right() {
        let (top, _) = value_axis(4000.0);
        let positions = point_positions(USER_GROWTH, 640.0, 260.0, top);
        assert_eq!(positions.len(), 6);
        for pair in positions.windows(2) {
            assert!(pair[0].0 < pair[1].0, "x must strictly increase");
        }
    }

    #[test]
    fn first_and_last_points_match_the_data() {
        let (top, _) = value_axis(4000.0);
        let positions = point_positions(USER_GROWTH, 640.0, 260.0, top);
        // Jan (4000) is the series maximum, so its dot sits highest.
        let jan_y = positions[0].1;
        for (x, y) in positions.iter().skip(1) {
            assert!(jan_y < *y, "Jan must be above the point at x={x}");
        }
        // Jun (2390) is above May (1890): smaller y for the larger value.
        assert!(positions[5].1 < positions[4].1);
    }

    #[test]
    fn higher_values_map_to_smaller_y() {
        let points = [
            SeriesPoint { label: "lo", value: 10.0 },
            SeriesPoint { label: "hi", value: 90.0 },
        ];
        let positions = point_positions(&points, 400.0, 200.0, 100.0);
        assert!(positions[1].1 < positions[0].1);
    }

    #[test]
    fn single_point_is_centered() {
        let points = [SeriesPoint { label: "only", value: 5.0 }];
        let positions = point_positions(&points, 400.0, 200.0, 10.0);
        let expected_x = MARGIN_LEFT + (400.0 - MARGIN_LEFT - MARGIN_RIGHT) / 2.0;
        assert_eq!(positions[0].0, expected_x);
    }

    #[test]
    fn flat_zero_series_stays_on_the_floor() {
        let points = [
            SeriesPoint { label: "a", value: 0.0 },
            SeriesPoint { label: "b", value: 0.0 },
        ];
        let (top, _) = value_axis(0.0);
        let positions = point_positions(&points, 400.0, 200.0, top);
        let floor = 200.0 - MARGIN_BOTTOM;
        for (_, y) in positions {
            assert!((y - floor).abs() < 1.0e-9);
        }
    }

    #[test]
    fn path_walks_the_positions_in_order() {
        let (top, _) = value_axis(4000.0);
        let positions = point_positions(USER_GROWTH, 640.0, 260.0, top);
        let path = line_path(&positions);
        assert!(path.starts_with("M "));
        assert_eq!(path.matches(" L ").count(), 5);
    }

    #[test]
    fn empty_positions_give_an_empty_path() {
        assert_eq!(line_path(&[]), "");
    }

    #[test]
    fn value_axis_covers_the_growth_domain() {
        let (top, ticks) = value_axis(4000.0);
        assert_eq!(top, 4000.0);
        assert_eq!(ticks, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
    }

    #[test]
    fn nice_ceiling_follows_the_ladder() {
        assert_eq!(nice_ceiling(87.0), 100.0);
        assert_eq!(nice_ceiling(1000.0), 1000.0);
        assert_eq!(nice_ceiling(2.0), 2.0);
        assert_eq!(nice_ceiling(6.0), 10.0);
        assert!((nice_ceiling(0.3) - 0.5).abs() < 1.0e-12);
    }

    #[test]
    fn format_value_groups_thousands() {
        assert_eq!(format_value(4000.0), "4,000");
        assert_eq!(format_value(2390.0), "2,390");
        assert_eq!(format_value(150.0), "150");
        assert_eq!(format_value(92.5), "92.5");
        assert_eq!(format_value(1250000.0), "1,250,000");
    }
}
