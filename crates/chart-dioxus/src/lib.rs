// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus component that mounts a small-multiples chart (desktop only).
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The component renders the SVG grid markup into its own container; layout
//   width comes from the `width` prop or from measuring the container on mount.

use chart_core::{ChartElement, Record, RenderPlan, SvgLayout, SvgRenderer};

/// Lay out `element` at `width` and serialise the resulting plan as grid markup.
/// `Ok(None)` means the resize policy skipped this layout.
pub fn layout_markup(element: &mut ChartElement, width: f64) -> Result<Option<String>, chart_core::PlanError> {
    let Some(plan) = element.on_layout(width)? else { return Ok(None) };
    markup(plan).map(Some)
}

fn markup(plan: &RenderPlan) -> Result<String, chart_core::PlanError> {
    log::debug!("{}: {} panels at width {}", ChartElement::TAG, plan.panels.len(), plan.width);
    SvgRenderer::new(SvgLayout::Grid).render_string(plan)
}

/// Width to lay out at: an explicit prop wins over the measured container width.
pub fn layout_width(prop: Option<f64>, measured: Option<f64>) -> Option<f64> {
    prop.or(measured)
}

/// Width to store after the container reports `reported` pixels. `None` when
/// the report is unusable (collapsed or hidden container) or unchanged.
pub fn next_measure(current: Option<f64>, reported: f64) -> Option<f64> {
    (reported.is_finite() && reported > 0.0 && current != Some(reported)).then_some(reported)
}

/// Records for the launcher when no CSV is at hand.
pub fn demo_records() -> Vec<Record> {
    let start = 1_700_000_000_i64;
    let mut out = Vec::new();
    for (k, name) in ["cpu", "mem", "disk", "net"].iter().enumerate() {
        for i in 0..48_i64 {
            let phase = i as f64 / 6.0 + k as f64;
            let amount = (phase.sin() * 20.0 + 40.0 + (k * 10) as f64).round();
            out.push(Record::new(*name, start + i * 300, amount));
        }
    }
    out
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use chart_core::ResizePolicy;
    use dioxus::prelude::*;

    #[derive(Props, Clone, PartialEq)]
    pub struct MultiSeriesChartProps {
        pub records: Vec<Record>,
        /// Layout width in pixels; measured from the container when absent.
        #[props(default)]
        pub width: Option<f64>,
        /// Caption attribute; stored on the element, not drawn.
        #[props(default)]
        pub text: Option<String>,
        #[props(default)]
        pub resize: ResizePolicy,
    }

    /// Small-multiples chart. Renders once the width is known, then follows
    /// the resize policy for later widths.
    #[component]
    pub fn MultiSeriesChart(props: MultiSeriesChartProps) -> Element {
        let mut element = use_signal(|| {
            ChartElement::from_records(props.records.clone(), props.text.clone()).with_policy(props.resize)
        });
        let mut measured = use_signal(|| Option::<f64>::None);
        let mut html = use_signal(String::new);
        let width_prop = props.width;

        // Re-runs when the `width` prop changes or the container is re-measured.
        use_effect(use_reactive!(|(width_prop,)| {
            let Some(w) = layout_width(width_prop, *measured.read()) else { return };
            let result = layout_markup(&mut element.write(), w);
            match result {
                Ok(Some(markup)) => html.set(markup),
                Ok(None) => {}
                Err(e) => log::warn!("{}: {e}", ChartElement::TAG),
            }
        }));

        rsx! {
            div {
                class: "tc-multiple-bar-chart",
                style: "width:100%;",
                onmounted: move |evt: MountedEvent| async move {
                    if let Ok(rect) = evt.get_client_rect().await {
                        if let Some(w) = next_measure(*measured.peek(), rect.width()) {
                            measured.set(Some(w));
                        }
                    }
                },
                onresize: move |evt: ResizeEvent| {
                    if let Ok(size) = evt.get_content_box_size() {
                        if let Some(w) = next_measure(*measured.peek(), size.width) {
                            measured.set(Some(w));
                        }
                    }
                },
                div { dangerous_inner_html: "{html}" }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let records = demo_records();
            rsx! {
                MultiSeriesChart { records, text: "Host load".to_string(), resize: ResizePolicy::EveryLayout }
            }
        }

        let _ = env_logger::try_init();
        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body{margin:0;font-family:sans-serif}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

#[cfg(feature = "desktop")]
pub use ui::run_demo_ui;

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::ResizePolicy;

    #[test]
    fn markup_follows_resize_policy() {
        let mut el = ChartElement::from_records(demo_records(), None);
        let first = layout_markup(&mut el, 900.0).unwrap().expect("first layout renders");
        assert!(first.starts_with(r#"<div class="dataviz""#));
        assert_eq!(first.matches("<svg").count(), 4);
        assert!(layout_markup(&mut el, 600.0).unwrap().is_none());
    }

    #[test]
    fn container_resizes_drive_relayout() {
        let mut el = ChartElement::from_records(demo_records(), None).with_policy(ResizePolicy::EveryLayout);
        let mut measured = None;
        let mut renders = 0;
        for reported in [900.0, 900.0, 0.0, 600.0, f64::NAN, 750.0] {
            let Some(w) = next_measure(measured, reported) else { continue };
            measured = Some(w);
            let width = layout_width(None, measured).expect("measured width");
            if layout_markup(&mut el, width).unwrap().is_some() {
                renders += 1;
            }
        }
        assert_eq!(renders, 3);
        assert_eq!(el.plan().unwrap().width, 750.0);
    }

    #[test]
    fn width_prop_overrides_measurement() {
        assert_eq!(layout_width(Some(480.0), Some(900.0)), Some(480.0));
        assert_eq!(layout_width(None, Some(900.0)), Some(900.0));
        assert_eq!(layout_width(None, None), None);
        assert_eq!(next_measure(Some(900.0), 900.0), None);
        assert_eq!(next_measure(Some(900.0), 640.0), Some(640.0));
    }

    #[test]
    fn demo_records_have_no_zero_amounts() {
        assert!(demo_records().iter().all(|r| r.amount > 0.0 && r.time > 0));
    }

    #[cfg(not(feature = "desktop"))]
    #[test]
    fn launcher_needs_feature() {
        assert!(run_demo_ui().is_err());
    }
}
