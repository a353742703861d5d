#[cfg(test)]
mod log_counter_tests {
    use std::io::Write;
    use std::path::Path;
    use tempfile::{NamedTempFile, TempDir};

    use daoshield::analysis::{analyze_log_file, AnalysisError, MetricsSnapshot};

    fn write_log(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 0.01, "{} != {}", actual, expected);
    }

    /// 12 transmissions and 10 receptions, nothing else
    #[test]
    fn test_delivery_scenario() {
        let mut lines = Vec::new();
        for i in 0..12 {
            lines.push(format!("[INFO: Client    ] DATA_TX: Sending packet #{} to root at time {}", i, i * 1000));
        }
        for i in 0..10 {
            lines.push(format!("[INFO: Root      ] RX [{}]: received 16 bytes: Hello {} from node", i, i));
        }
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = write_log(&refs);

        let metrics = analyze_log_file(file.path()).unwrap();
        assert_eq!(metrics.data_sent, 12);
        assert_eq!(metrics.data_received, 10);
        assert_close(metrics.pdr, 83.33);
        assert_close(metrics.plr, 16.67);
        assert_eq!(metrics.dao_sent, 0);
        assert_eq!(metrics.dao_blocked, 0);
        assert_eq!(metrics.nodes_blacklisted, 0);
        assert_eq!(metrics.attack_count, 0);
        assert_eq!(metrics.pdr + metrics.plr, 100.0);
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let metrics = analyze_log_file(file.path()).unwrap();
        assert_eq!(metrics, MetricsSnapshot::from_counts([0; 6]));
        assert_eq!(metrics.pdr, 0.0);
        assert_eq!(metrics.plr, 100.0);
    }

    #[test]
    fn test_no_transmissions_means_full_loss() {
        let file = write_log(&[
            "DATA: Received at time 100 ticks",
            "Attack count: 5",
            "Sent fake DAO #5",
        ]);
        let metrics = analyze_log_file(file.path()).unwrap();
        assert_eq!(metrics.data_sent, 0);
        assert_eq!(metrics.data_received, 1);
        assert_eq!(metrics.pdr, 0.0);
        assert_eq!(metrics.plr, 100.0);
    }

    #[test]
    fn test_repeated_keyword_counts_once_per_line() {
        let file = write_log(&[
            "Attack count 1 Attack count 2",
            "BLACKLISTED node 3, BLACKLISTED node 4",
            "DATA_TX: Sending packet #1 DATA_TX: Sending packet #2",
        ]);
        let metrics = analyze_log_file(file.path()).unwrap();
        assert_eq!(metrics.attack_count, 1);
        assert_eq!(metrics.nodes_blacklisted, 1);
        assert_eq!(metrics.data_sent, 1);
    }

    #[test]
    fn test_case_boundaries() {
        let file = write_log(&[
            "RPL: packet sent to fe80::212:7401:1:101 dao seq 3",
            "RPL: packet sent to fe80::212:7401:1:101 DAO seq 4",
            "Li-MSD: DAO from fe80::212:7403:3:303 BLOCKED",
            "li-msd: replay Blocked",
            "Li-MSD: Blocked DAO replay",
        ]);
        let metrics = analyze_log_file(file.path()).unwrap();
        assert_eq!(metrics.dao_sent, 1);
        assert_eq!(metrics.dao_blocked, 3);
    }

    #[test]
    fn test_one_line_bumps_several_counters() {
        let file = write_log(&["Attack count 7: Blocked DAO, sender BLACKLISTED"]);
        let metrics = analyze_log_file(file.path()).unwrap();
        assert_eq!(metrics.attack_count, 1);
        assert_eq!(metrics.dao_blocked, 1);
        assert_eq!(metrics.nodes_blacklisted, 1);
    }

    #[test]
    fn test_each_run_starts_from_zero() {
        let file = write_log(&["DATA_TX: Sending packet #1", "DATA: Received at time 1"]);
        let first = analyze_log_file(file.path()).unwrap();
        let second = analyze_log_file(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.data_sent, 1);
    }

    #[test]
    fn test_binary_content_is_decode_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x44, 0x41, 0x54, 0x41, 0x0a, 0xc3, 0x28, 0x0a]).unwrap();

        match analyze_log_file(file.path()) {
            Err(AnalysisError::Decode { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = analyze_log_file(Path::new("/nonexistent/cooja.log")).unwrap_err();
        assert!(matches!(err, AnalysisError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/cooja.log"));
    }

    #[test]
    fn test_directory_is_access_error() {
        let dir = TempDir::new().unwrap();
        let err = analyze_log_file(dir.path()).unwrap_err();
        assert!(
            matches!(err, AnalysisError::Open { .. } | AnalysisError::Read { .. }),
            "expected access error, got {:?}",
            err
        );
        assert_eq!(err.path(), dir.path());
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"DATA_TX: a\rDATA_TX: b\r\nRX [1]: ok\rBlocked DAO\r").unwrap();

        let metrics = analyze_log_file(file.path()).unwrap();
        assert_eq!(metrics.data_sent, 2);
        assert_eq!(metrics.data_received, 1);
        assert_eq!(metrics.dao_blocked, 1);
    }
}
