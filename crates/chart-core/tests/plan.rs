// File: crates/chart-core/tests/plan.rs
// Purpose: Grouping, shared scales, palette assignment and layout of render plans.

use chart_core::{extract, render, AxisOrient, Chart, PlanError, PlanOptions, Record, SvgRenderer, Theme, PALETTE};

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

#[test]
fn end_to_end_cpu_mem() {
    let children = [
        [("name", "cpu"), ("time", "1000"), ("amount", "10")],
        [("name", "cpu"), ("time", "2000"), ("amount", "30")],
        [("name", "mem"), ("time", "1000"), ("amount", "5")],
    ];
    let records = extract(children);
    let plan = render(&records, 900.0).expect("plan");

    assert_eq!(plan.panels.len(), 2);
    assert_eq!(plan.plot_size, (230.0, 250.0));
    assert_eq!(plan.panel_size, (300.0, 300.0));
    assert_eq!(plan.time_domain, Some((1000, 2000)));
    assert_eq!(plan.amount_domain, Some((0.0, 30.0)));

    let cpu = plan.panel("cpu").expect("cpu panel");
    assert_eq!(cpu.line.points.len(), 2);
    assert!(close(cpu.line.points[0].x, 0.0));
    assert!(close(cpu.line.points[0].y, 250.0 * (1.0 - 10.0 / 30.0)));
    assert!(close(cpu.line.points[1].x, 230.0));
    assert!(close(cpu.line.points[1].y, 0.0));
    assert_eq!(cpu.line.data(), "M0,166.667L230,0");
    assert_eq!(cpu.line.stroke_width, 1.5);

    let mem = plan.panel("mem").expect("mem panel");
    assert_eq!(mem.line.data(), "M0,208.333Z");
    assert_eq!(mem.frame.left, 300.0);
    assert_eq!(mem.frame.top, 0.0);
}

#[test]
fn groups_in_first_seen_order() {
    let records = vec![
        Record::new("b", 1, 1.0),
        Record::new("a", 2, 2.0),
        Record::new("b", 3, 3.0),
        Record::new("a", 4, 4.0),
    ];
    let plan = render(&records, 600.0).unwrap();
    let keys: Vec<_> = plan.panels.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, ["b", "a"]);
    assert_eq!(plan.panels[0].line.points.len(), 2);
}

#[test]
fn scales_are_shared_across_groups() {
    let records = vec![
        Record::new("x", 20, 5.0),
        Record::new("y", 10, 20.0),
        Record::new("x", 30, 8.0),
    ];
    let plan = render(&records, 900.0).unwrap();
    assert_eq!(plan.time_domain, Some((10, 30)));
    assert_eq!(plan.amount_domain, Some((0.0, 20.0)));
    // x's first point sits mid-axis because y's record opened the domain.
    let x = plan.panel("x").unwrap();
    assert!(close(x.line.points[0].x, 115.0));
    let y = plan.panel("y").unwrap();
    assert!(close(y.line.points[0].x, 0.0));
    assert!(close(y.line.points[0].y, 0.0));
}

#[test]
fn colors_cycle_through_palette() {
    let records: Vec<Record> = (0..11).map(|i| Record::new(format!("s{i}"), i + 1, 1.0)).collect();
    let plan = render(&records, 900.0).unwrap();
    let colors: Vec<_> = plan.panels.iter().map(|p| p.color).collect();
    assert_eq!(&colors[..9], &PALETTE[..]);
    assert_eq!(colors[9], PALETTE[0]);
    assert_eq!(colors[10], PALETTE[1]);
    for p in &plan.panels {
        assert_eq!(p.line.stroke, p.color);
        assert_eq!(p.label.color, p.color);
        assert_eq!(p.label.text, p.key);
        assert_eq!((p.label.x, p.label.y), (0.0, -5.0));
    }
    // Same order, same colors.
    let again = render(&records, 450.0).unwrap();
    let colors_again: Vec<_> = again.panels.iter().map(|p| p.color).collect();
    assert_eq!(colors, colors_again);
}

#[test]
fn grid_wraps_every_three_panels() {
    let records: Vec<Record> = ["a", "b", "c", "d", "e"].iter().map(|n| Record::new(*n, 1, 1.0)).collect();
    let plan = render(&records, 900.0).unwrap();
    assert_eq!(plan.rows(), 2);
    assert_eq!(plan.total_size(), (900.0, 600.0));
    let d = plan.panel("d").unwrap();
    assert_eq!((d.frame.left, d.frame.top), (0.0, 300.0));
    let e = plan.panel("e").unwrap();
    assert_eq!((e.frame.left, e.frame.top), (300.0, 300.0));
}

#[test]
fn axes_carry_requested_ticks() {
    let records = vec![Record::new("cpu", 1000, 10.0), Record::new("cpu", 2000, 30.0)];
    let plan = render(&records, 900.0).unwrap();
    let cpu = &plan.panels[0];

    assert_eq!(cpu.x_axis.orient, AxisOrient::Bottom);
    assert_eq!(cpu.x_axis.origin, (0.0, 250.0));
    let labels: Vec<_> = cpu.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["12:20", "12:25", "12:30"]);
    assert!(close(cpu.x_axis.ticks[0].offset, 46.0));
    assert!(close(cpu.x_axis.ticks[1].offset, 115.0));

    assert_eq!(cpu.y_axis.orient, AxisOrient::Left);
    let labels: Vec<_> = cpu.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0", "20"]);
    assert!(close(cpu.y_axis.ticks[0].offset, 250.0));
    assert!(close(cpu.y_axis.ticks[1].offset, 250.0 / 3.0));
}

#[test]
fn empty_records_give_empty_plan() {
    let plan = render(&[], 900.0).expect("empty input is not an error");
    assert!(plan.is_empty());
    assert_eq!(plan.rows(), 0);
    assert_eq!(plan.time_domain, None);
    assert_eq!(plan.amount_domain, None);
    assert_eq!(plan.total_size(), (900.0, 300.0));
}

#[test]
fn rejects_unusable_width() {
    let records = vec![Record::new("a", 1, 1.0)];
    assert!(matches!(render(&records, 0.0), Err(PlanError::InvalidWidth(_))));
    assert!(matches!(render(&records, f64::NAN), Err(PlanError::InvalidWidth(_))));
    assert!(matches!(render(&[], -5.0), Err(PlanError::InvalidWidth(_))));
}

#[test]
fn options_override_layout() {
    let opts = PlanOptions { columns: 2, panel_height: 200.0, theme: Theme::dark(), ..PlanOptions::default() };
    let chart = Chart::with_options(opts);
    let records: Vec<Record> = ["a", "b", "c"].iter().map(|n| Record::new(*n, 1, 1.0)).collect();
    let plan = chart.plan(&records, 800.0).unwrap();
    assert_eq!(plan.panel_size, (400.0, 200.0));
    assert_eq!(plan.plot_size, (330.0, 150.0));
    assert_eq!(plan.rows(), 2);
    assert_eq!(plan.theme.name, "dark");
}

#[test]
fn extreme_times_plan_without_panicking() {
    let far_future = [
        [("name", "a"), ("time", "1"), ("amount", "1")],
        [("name", "a"), ("time", "10000000000000000"), ("amount", "5")],
    ];
    let plan = render(&extract(far_future), 900.0).expect("plan");
    let a = plan.panel("a").expect("a panel");
    assert!(close(a.line.points[0].x, 0.0));
    assert!(close(a.line.points[1].x, 230.0));
    assert!(!a.x_axis.ticks.is_empty());
    assert!(a.x_axis.ticks.iter().all(|t| (0.0..=230.0).contains(&t.offset)));
    SvgRenderer::default().render_string(&plan).expect("svg");

    let far_past = [
        [("name", "b"), ("time", "-10000000000000000"), ("amount", "2")],
        [("name", "b"), ("time", "-9999999999999990"), ("amount", "3")],
    ];
    let plan = render(&extract(far_past), 900.0).expect("plan");
    let b = plan.panel("b").expect("b panel");
    assert_eq!(b.line.points.len(), 2);
    assert!(b.x_axis.ticks.is_empty());
    SvgRenderer::default().render_string(&plan).expect("svg");
}
