#[cfg(test)]
mod emitter_tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    use daoshield::charts::{ChartStyle, FigureSize};
    use daoshield::emitter::{write_file_list, ReportEmitter};
    use daoshield::summary::SummaryTable;

    fn files_in(dir: &Path) -> BTreeSet<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[test]
    fn test_emit_all_creates_catalog() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("results");
        let emitter = ReportEmitter::new(ChartStyle::default(), &output);

        let written = emitter.emit_all().unwrap();

        assert_eq!(written, emitter.expected_outputs());
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "fig_pdr_comparison.svg",
                "fig_delay_comparison.svg",
                "fig_power_comparison.svg",
                "fig_plr_comparison.svg",
                "fig_fpr_comparison.svg",
                "fig_memory_overhead.svg",
                "summary_table.txt",
            ]
        );
        for path in &written {
            assert!(fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
        }
    }

    #[test]
    fn test_emit_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let emitter = ReportEmitter::new(ChartStyle::default(), dir.path().join("out"));

        emitter.emit_all().unwrap();
        let first = files_in(emitter.output_dir());
        let table_before = fs::read_to_string(emitter.output_dir().join("summary_table.txt")).unwrap();

        emitter.emit_all().unwrap();
        let second = files_in(emitter.output_dir());
        let table_after = fs::read_to_string(emitter.output_dir().join("summary_table.txt")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
        assert_eq!(table_before, table_after);
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let dir = TempDir::new().unwrap();
        let emitter = ReportEmitter::new(ChartStyle::default(), dir.path());

        emitter.ensure_output_dir().unwrap();
        emitter.ensure_output_dir().unwrap();
        emitter.emit_all().unwrap();
    }

    #[test]
    fn test_summary_metric_column() {
        let dir = TempDir::new().unwrap();
        let emitter = ReportEmitter::new(ChartStyle::default(), dir.path());
        emitter.emit_all().unwrap();

        let content = fs::read_to_string(dir.path().join("summary_table.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        let dashed = lines.iter().position(|l| l.starts_with("----")).unwrap();
        let metrics: Vec<&str> = lines[dashed + 1..lines.len() - 1]
            .iter()
            .map(|l| l[..15].trim_end())
            .collect();

        assert_eq!(
            metrics,
            vec!["PDR (%)", "PLR (%)", "AE2ED (s)", "APC (mW)", "DAOs Blocked", "FPR (%)"]
        );
        assert!(lines.last().unwrap().starts_with("===="));
        assert_eq!(content, SummaryTable::reference().to_string());
    }

    #[test]
    fn test_custom_style_changes_canvas() {
        let dir = TempDir::new().unwrap();
        let style = ChartStyle {
            figure_size: FigureSize { width: 500, height: 300 },
            grid: false,
            ..ChartStyle::default()
        };
        let emitter = ReportEmitter::new(style, dir.path());
        emitter.emit_all().unwrap();

        let svg = fs::read_to_string(dir.path().join("fig_fpr_comparison.svg")).unwrap();
        assert!(svg.contains("width=\"500\""));
        let svg = fs::read_to_string(dir.path().join("fig_plr_comparison.svg")).unwrap();
        assert!(svg.contains("width=\"700\""));
    }

    #[test]
    fn test_unwritable_output_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "file").unwrap();

        let emitter = ReportEmitter::new(ChartStyle::default(), blocker.join("results"));
        assert!(emitter.emit_all().is_err());
    }

    #[test]
    fn test_console_reports_each_saved_file() {
        let dir = TempDir::new().unwrap();
        let emitter = ReportEmitter::new(ChartStyle::default(), dir.path().join("results"));

        let mut console = Vec::new();
        let written = emitter.emit_all_to(&mut console).unwrap();
        write_file_list(&mut console, &written).unwrap();
        let console = String::from_utf8(console).unwrap();

        let saved: Vec<String> = console
            .lines()
            .filter_map(|l| l.strip_prefix("Saved: "))
            .map(String::from)
            .collect();
        let expected: Vec<String> = emitter
            .expected_outputs()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        assert_eq!(saved, expected);

        assert!(console.contains(&SummaryTable::reference().to_string()));

        let (before, listing) = console.split_once("Generated files:").unwrap();
        assert!(before.contains("Saved: "));
        let listed: Vec<&str> = listing
            .lines()
            .filter_map(|l| l.strip_prefix("  - "))
            .collect();
        assert_eq!(listed, expected);
    }
}
