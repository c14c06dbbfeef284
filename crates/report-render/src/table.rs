//! The shared fixed-width table writer behind both renderers.

use std::io::{self, Write};

use report_data::store::GroupedEvents;

use crate::layout::TableLayout;

/// Write the grouped events as fixed-width tables, one per process group.
///
/// Groups come out in ascending lexicographic order of process path and
/// rows in each group keep their time order, so output over the same input
/// is byte-identical across runs. Each group is followed by a blank
/// separator. Columns are left-justified and space-padded; values are
/// never truncated.
pub fn write_grouped<W: Write>(
    out: &mut W,
    grouped: &GroupedEvents,
    layout: &TableLayout,
) -> io::Result<()> {
    for (_process, events) in grouped.iter_sorted() {
        writeln!(
            out,
            "{:<tw$}{:<pw$}{:<ew$}{:<gw$}",
            "Time",
            "Process",
            "Event",
            "Target",
            tw = layout.time,
            pw = layout.process,
            ew = layout.event,
            gw = layout.target,
        )?;
        writeln!(out, "{}", "-".repeat(layout.total()))?;

        for event in events {
            writeln!(
                out,
                "{:<tw$}{:<pw$}{:<ew$}{:<gw$}",
                event.timestamp.to_string(),
                event.process_path,
                event.kind_label(),
                event.target_path,
                tw = layout.time,
                pw = layout.process,
                ew = layout.event,
                gw = layout.target,
            )?;
        }
        write!(out, "\n\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use report_data::store::EventStore;
    use std::io::BufReader;

    fn grouped_from(lines: &[&str]) -> GroupedEvents {
        let joined = lines.join("\n");
        let mut store = EventStore::new();
        store.ingest_lines(BufReader::new(joined.as_bytes()));
        store.finalize()
    }

    fn exec_line(time: &str, process: &str, target: &str) -> String {
        serde_json::json!({
            "time": time,
            "event": {"exec": {"target": {"executable": {"path": target}}}},
            "process": {"executable": {"path": process}},
        })
        .to_string()
    }

    fn render(grouped: &GroupedEvents, layout: &TableLayout) -> String {
        let mut buf = Vec::new();
        write_grouped(&mut buf, grouped, layout).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    #[test]
    fn test_console_header_and_rule() {
        let line = exec_line("2024-01-02 03:04:05.678901", "/bin/bash", "/bin/ls");
        let output = render(&grouped_from(&[&line]), &layout::CONSOLE);
        let lines: Vec<&str> = output.lines().collect();

        // Header columns start at the fixed offsets 0 / 30 / 70 / 82.
        assert_eq!(lines[0].len(), 132);
        assert_eq!(&lines[0][0..4], "Time");
        assert_eq!(&lines[0][30..37], "Process");
        assert_eq!(&lines[0][70..75], "Event");
        assert_eq!(&lines[0][82..88], "Target");
        assert_eq!(lines[1], "-".repeat(132));
    }

    #[test]
    fn test_console_row_offsets() {
        let line = exec_line("2024-01-02 03:04:05.678901", "/bin/bash", "/bin/ls");
        let output = render(&grouped_from(&[&line]), &layout::CONSOLE);
        let row = output.lines().nth(2).unwrap();

        assert_eq!(&row[0..26], "2024-01-02 03:04:05.678901");
        assert_eq!(&row[26..30], "    ");
        assert_eq!(&row[30..39], "/bin/bash");
        assert_eq!(&row[70..74], "exec");
        assert_eq!(&row[82..89], "/bin/ls");
        // Trailing pad fills the Target column.
        assert_eq!(row.len(), 132);
    }

    #[test]
    fn test_file_layout_widths() {
        let line = exec_line("2024-01-02 03:04:05.678901", "/bin/bash", "/bin/ls");
        let output = render(&grouped_from(&[&line]), &layout::FILE);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0].len(), 295);
        assert_eq!(&lines[0][35..42], "Process");
        assert_eq!(&lines[0][95..100], "Event");
        assert_eq!(&lines[0][105..111], "Target");
        assert_eq!(lines[1], "-".repeat(295));
    }

    #[test]
    fn test_overwide_value_overflows_instead_of_clipping() {
        let wide = "/a/".repeat(20) + "binary"; // 66 chars, wider than Process:40
        let line = exec_line("2024-01-02 03:04:05.678901", &wide, "/bin/ls");
        let output = render(&grouped_from(&[&line]), &layout::CONSOLE);
        let row = output.lines().nth(2).unwrap();

        // The full value survives; the Event column shifts right.
        assert!(row.contains(&wide));
        assert_eq!(&row[30 + wide.len()..30 + wide.len() + 4], "exec");
    }

    // ── Group structure ───────────────────────────────────────────────────────

    #[test]
    fn test_groups_in_key_order_with_blank_separators() {
        let a = exec_line("2024-01-02 03:04:05.000002", "/usr/bin/z", "/t1");
        let b = exec_line("2024-01-02 03:04:05.000001", "/bin/a", "/t2");
        let output = render(&grouped_from(&[&a, &b]), &layout::CONSOLE);

        let pos_a = output.find("/bin/a").unwrap();
        let pos_z = output.find("/usr/bin/z").unwrap();
        assert!(pos_a < pos_z, "groups must come out in key order");

        // Header + rule + row + blank separator, per group.
        assert_eq!(output.matches("Time").count(), 2);
        assert!(output.contains("\n\n\n"), "groups are separated by a blank block");
        assert!(output.ends_with("\n\n\n"));
    }

    #[test]
    fn test_degenerate_event_renders_empty_columns() {
        let degenerate = r#"{"time": "2024-01-02 03:04:05.000001", "event": {"mmap": {}}}"#;
        let output = render(&grouped_from(&[degenerate]), &layout::CONSOLE);
        let row = output.lines().nth(2).unwrap();

        assert_eq!(&row[0..26], "2024-01-02 03:04:05.000001");
        // Process, Event and Target columns are all blank padding.
        assert_eq!(row[26..].trim(), "");
        assert_eq!(row.len(), 132);
    }

    // ── Determinism ───────────────────────────────────────────────────────────

    #[test]
    fn test_rendering_is_byte_identical_across_runs() {
        let lines: Vec<String> = vec![
            exec_line("2024-01-02 03:04:05.000003", "/bin/bash", "/bin/ls"),
            exec_line("2024-01-02 03:04:05.000001", "/sbin/init", "/bin/sh"),
            exec_line("2024-01-02 03:04:05.000002", "/bin/bash", "/bin/cat"),
        ];
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

        let first = render(&grouped_from(&refs), &layout::CONSOLE);
        let second = render(&grouped_from(&refs), &layout::CONSOLE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_grouping_renders_nothing() {
        let output = render(&grouped_from(&[]), &layout::CONSOLE);
        assert!(output.is_empty());
    }
}
