use common::{ChartDataset, ChartKind, ChartPlan, DashboardData};
use plotly::common::{Line, Mode};
use plotly::Scatter;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

/// Plotly traces for a chart plan.
fn traces(plan: &ChartPlan) -> Value {
    let labels = plan.labels();
    let values = plan.values();

    match plan.kind {
        ChartKind::Bar => json!([{
            "type": "bar",
            "x": labels,
            "y": values,
            "name": plan.series_name,
            "marker": {"color": plan.series_color},
        }]),
        ChartKind::HorizontalBar => json!([{
            "type": "bar",
            "orientation": "h",
            "x": values,
            "y": labels,
            "name": plan.series_name,
            "marker": {"color": plan.series_color},
        }]),
        ChartKind::Line => {
            let trace = Scatter::new(labels, values)
                .mode(Mode::LinesMarkers)
                .name(plan.series_name)
                .line(Line::new().color(plan.series_color).width(2.0));
            json!([serde_json::to_value(&trace).unwrap_or(Value::Null)])
        }
        ChartKind::Pie | ChartKind::Donut => {
            let colors: Vec<&str> = plan
                .entries
                .iter()
                .map(|e| e.color.unwrap_or(plan.series_color))
                .collect();
            let texts: Vec<String> = plan
                .entries
                .iter()
                .map(|e| e.text.clone().unwrap_or_else(|| e.label.clone()))
                .collect();
            let hole = if plan.kind == ChartKind::Donut { 0.6 } else { 0.0 };
            json!([{
                "type": "pie",
                "labels": labels,
                "values": values,
                "text": texts,
                "textinfo": "text",
                "hole": hole,
                "marker": {"colors": colors},
                "sort": false,
            }])
        }
    }
}

fn layout(plan: &ChartPlan) -> Value {
    let mut layout = json!({
        "height": 300,
        "margin": {"t": 10, "r": 10, "l": 50, "b": 90},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": plan.kind == ChartKind::Line,
        "xaxis": {"tickangle": -45, "showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee"},
    });
    if plan.kind == ChartKind::HorizontalBar {
        layout["margin"]["l"] = json!(160);
        layout["xaxis"] = json!({"showgrid": true, "gridcolor": "#eee"});
        layout["yaxis"] = json!({"automargin": true, "autorange": "reversed"});
    }
    layout
}

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&text)
}

fn draw(div_id: &str, plan: &ChartPlan) -> Result<(), JsValue> {
    let config = json!({"responsive": true, "displayModeBar": false});
    newPlot(div_id, to_js(&traces(plan))?, to_js(&layout(plan))?, to_js(&config)?)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
struct PlotProps {
    plan: ChartPlan,
}

#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.plan.clone()), move |(container_ref, plan)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(plan.id);
            if let Err(e) = draw(plan.id, plan) {
                log::error!("Failed to draw {}: {:?}", plan.id, e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub plan: ChartPlan,
}

#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    let plan = &props.plan;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{plan.title}</h2>
                {if plan.is_empty() {
                    html! {
                        <div class="text-center py-8 text-gray-500" style="height: 300px;">
                            <i class="fas fa-chart-bar text-4xl mb-4 opacity-50"></i>
                            <p>{"No data available."}</p>
                        </div>
                    }
                } else {
                    html! { <PlotlyChart plan={plan.clone()} /> }
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartGalleryProps {
    pub data: DashboardData,
}

#[function_component(ChartGallery)]
pub fn chart_gallery(props: &ChartGalleryProps) -> Html {
    let plans: Vec<ChartPlan> = ChartDataset::all(&props.data)
        .iter()
        .map(ChartDataset::plan)
        .collect();

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
            {for plans.into_iter().map(|plan| {
                let id = plan.id;
                html! { <ChartCard key={id} plan={plan} /> }
            })}
        </div>
    }
}
