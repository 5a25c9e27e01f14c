//! End-to-end render tests against the built-in example day.

use dayline_core::{compute_layout, render_html, Schedule, TimeOfDay, TimelineWidget};

#[test]
fn example_day_at_0830_marks_deep_work_block_1() {
    let schedule = Schedule::example();
    let now = TimeOfDay::from_minutes(510).unwrap(); // 08:30
    let model = compute_layout(&schedule, now);

    let current = model.current_row().expect("08:30 falls inside a block");
    assert_eq!(current.label, "💻 Deep work block 1");
    assert_eq!(current.start, TimeOfDay::hm(8, 0));

    // 30 minutes into a 120-minute block
    let marker = current.marker.expect("current row carries the marker");
    assert_eq!(marker.offset_pct, 25.0);
    assert_eq!(marker.time.to_string(), "08:30");

    // every other row renders without a marker
    let marked = model.rows.iter().filter(|r| r.marker.is_some()).count();
    assert_eq!(marked, 1);
}

#[test]
fn example_day_at_0830_markup() {
    let schedule = Schedule::example();
    let html = render_html(&compute_layout(&schedule, TimeOfDay::hm(8, 30)));

    assert!(html.contains("💻 Deep work block 1"));
    assert!(html.contains("top: 25%"));
    assert!(html.contains(">08:30</span>"));
    // one marker line, one dot, one chip
    assert_eq!(html.matches("z-index: 10").count(), 1);
    assert_eq!(html.matches("border-radius: 50%").count(), 1);
    assert_eq!(html.matches("</span>").count(), 1);
    // all eleven blocks plus the closing row
    assert_eq!(html.matches("display: flex").count(), 12);
    // closing row shows the end of the last block
    assert!(html.contains(">18:00</div>"));
}

#[test]
fn example_day_outside_hours_has_no_marker() {
    let schedule = Schedule::example();
    for now in [TimeOfDay::hm(3, 0), TimeOfDay::hm(6, 59), TimeOfDay::hm(18, 0), TimeOfDay::hm(23, 59)] {
        let model = compute_layout(&schedule, now);
        assert!(model.current_row().is_none(), "no block contains {now}");
        let html = render_html(&model);
        assert!(!html.contains("z-index: 10"));
    }
}

#[test]
fn repeated_renders_are_identical() {
    let widget = TimelineWidget::new(Schedule::example());
    let now = TimeOfDay::hm(8, 30);
    assert_eq!(widget.render_at(now), widget.render_at(now));
}

#[test]
fn short_break_renders_as_thin_divider() {
    let schedule = Schedule::example();
    let model = compute_layout(&schedule, TimeOfDay::hm(8, 30));

    let brk = &model.rows[3]; // 10:00-10:05
    assert!(brk.short_break);
    assert_eq!(brk.height_px, 8);
    assert!(brk.label.is_empty());

    let html = render_html(&model);
    assert!(html.contains("min-height: 8px; border-top: none;"));
}
