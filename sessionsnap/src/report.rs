//! Human readable output of the `list` and `restore` commands.
use std::fmt::Write;

use sessionsnap_core::models::WindowSnapshot;
use sessionsnap_core::{RestoreReport, RestoreState, SessionSnapshot};

#[must_use]
pub fn format_window_list(snapshot: &SessionSnapshot) -> String {
    let mut out = format!("Found {} user windows:\n\n", snapshot.len());
    for (i, window) in snapshot.iter().enumerate() {
        _ = write_window(&mut out, i + 1, window);
    }
    out
}

fn write_window(out: &mut String, index: usize, w: &WindowSnapshot) -> std::fmt::Result {
    let title = if w.title.is_empty() { "(no title)" } else { w.title.as_str() };
    writeln!(out, "[{index}] {title}")?;
    writeln!(
        out,
        "    PID: {}  |  pos: {},{}  |  size: {}x{}  |  desktop: {}",
        w.pid, w.xyhw.x, w.xyhw.y, w.xyhw.w, w.xyhw.h, w.desktop
    )?;
    writeln!(out, "    cmd: {}\n", w.program().unwrap_or("(unknown)"))
}

/// One line per window that could not be put back, then a summary.
#[must_use]
pub fn format_restore_report(report: &RestoreReport) -> String {
    let mut out = String::new();
    for window in &report.windows {
        let program = window.command.first().map_or("(unknown)", String::as_str);
        let line = match &window.state {
            RestoreState::LaunchFailed(err) => format!("  warning: {err}"),
            RestoreState::TimedOut => {
                format!("  warning: could not find window for '{}'", window.title)
            }
            RestoreState::Matched(_) => {
                format!("  warning: could not place window '{}'", window.title)
            }
            RestoreState::Launched if window.title.is_empty() => {
                format!("  note: launched {program}, window has no title to match")
            }
            _ => continue,
        };
        out.push_str(&line);
        out.push('\n');
    }
    let placed = report.count_where(|state| {
        matches!(
            state,
            RestoreState::Repositioned(_) | RestoreState::Maximized(_)
        )
    });
    _ = writeln!(
        out,
        "sessionsnap: restore complete, {placed} of {} windows placed",
        report.windows.len()
    );
    out
}
