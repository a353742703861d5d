//! Illustrative reference datasets for the Li-MSD evaluation figures.
//!
//! These are the published comparison numbers, not values measured from
//! logs. Figure names are fixed and define the output file names.

use super::model::{BarColor, BarSeries, Figure, GroupedBarChart};

/// DAO replay intervals used as x categories
pub const REPLAY_INTERVALS: [&str; 4] = ["1s", "2s", "4s", "8s"];

pub const PDR_FIGURE: &str = "fig_pdr_comparison";
pub const DELAY_FIGURE: &str = "fig_delay_comparison";
pub const POWER_FIGURE: &str = "fig_power_comparison";
pub const PLR_FIGURE: &str = "fig_plr_comparison";
pub const FPR_FIGURE: &str = "fig_fpr_comparison";
pub const MEMORY_FIGURE: &str = "fig_memory_overhead";

/// Figure names in generation order
pub const FIGURE_NAMES: [&str; 6] = [
    PDR_FIGURE,
    DELAY_FIGURE,
    POWER_FIGURE,
    PLR_FIGURE,
    FPR_FIGURE,
    MEMORY_FIGURE,
];

/// Baseline / under attack / with Li-MSD values for one network scenario
struct ScenarioValues {
    baseline: [f64; 4],
    under_attack: [f64; 4],
    with_limsd: [f64; 4],
}

fn scenario_panel(
    title: &str,
    y_label: &str,
    baseline_label: &str,
    values: ScenarioValues,
) -> GroupedBarChart {
    GroupedBarChart::new(title, "DAO Replay Interval", y_label)
        .categories(REPLAY_INTERVALS)
        .series(BarSeries::new(baseline_label, values.baseline.to_vec(), BarColor::Green))
        .series(BarSeries::new("Under Attack", values.under_attack.to_vec(), BarColor::Red))
        .series(BarSeries::new("With Li-MSD", values.with_limsd.to_vec(), BarColor::Blue))
}

/// Packet delivery ratio, static and mobile networks
pub fn pdr_comparison() -> Figure {
    let y_label = "Packet Delivery Ratio (%)";
    let static_panel = scenario_panel(
        "PDR - Static Network",
        y_label,
        "Baseline (No Attack)",
        ScenarioValues {
            baseline: [98.5; 4],
            under_attack: [52.0, 48.0, 55.0, 60.0],
            with_limsd: [96.0, 95.0, 97.0, 98.0],
        },
    )
    .y_max(105.0);
    let mobile_panel = scenario_panel(
        "PDR - Mobile Network",
        y_label,
        "Baseline (No Attack)",
        ScenarioValues {
            baseline: [95.0; 4],
            under_attack: [38.0, 35.0, 40.0, 45.0],
            with_limsd: [46.0, 47.0, 48.0, 47.0],
        },
    )
    .y_max(105.0);

    Figure::new(PDR_FIGURE, vec![static_panel, mobile_panel])
}

/// Average end-to-end delay
pub fn delay_comparison() -> Figure {
    let y_label = "Average End-to-End Delay (s)";
    Figure::new(
        DELAY_FIGURE,
        vec![
            scenario_panel(
                "AE2ED - Static Network",
                y_label,
                "Baseline",
                ScenarioValues {
                    baseline: [0.25, 0.26, 0.25, 0.27],
                    under_attack: [2.5, 2.3, 1.8, 1.5],
                    with_limsd: [0.45, 0.40, 0.35, 0.30],
                },
            ),
            scenario_panel(
                "AE2ED - Mobile Network",
                y_label,
                "Baseline",
                ScenarioValues {
                    baseline: [0.4, 0.42, 0.41, 0.43],
                    under_attack: [3.2, 3.0, 2.7, 2.5],
                    with_limsd: [1.28, 1.15, 1.0, 0.85],
                },
            ),
        ],
    )
}

/// Average power consumption
pub fn power_comparison() -> Figure {
    let y_label = "Average Power Consumption (mW)";
    Figure::new(
        POWER_FIGURE,
        vec![
            scenario_panel(
                "APC - Static Network",
                y_label,
                "Baseline",
                ScenarioValues {
                    baseline: [45.0, 46.0, 45.0, 47.0],
                    under_attack: [85.0, 82.0, 75.0, 70.0],
                    with_limsd: [50.0, 48.0, 47.0, 46.0],
                },
            ),
            scenario_panel(
                "APC - Mobile Network",
                y_label,
                "Baseline",
                ScenarioValues {
                    baseline: [55.0, 56.0, 55.0, 57.0],
                    under_attack: [95.0, 92.0, 88.0, 85.0],
                    with_limsd: [62.0, 60.0, 58.0, 57.0],
                },
            ),
        ],
    )
}

/// Packet loss ratio
pub fn plr_comparison() -> Figure {
    let y_label = "Packet Loss Ratio (%)";
    Figure::new(
        PLR_FIGURE,
        vec![
            scenario_panel(
                "PLR - Static Network",
                y_label,
                "Baseline",
                ScenarioValues {
                    baseline: [1.5, 1.4, 1.5, 1.3],
                    under_attack: [48.0, 52.0, 45.0, 40.0],
                    with_limsd: [4.0, 5.0, 3.0, 2.0],
                },
            ),
            scenario_panel(
                "PLR - Mobile Network",
                y_label,
                "Baseline",
                ScenarioValues {
                    baseline: [5.0, 4.8, 5.2, 4.5],
                    under_attack: [62.0, 65.0, 60.0, 55.0],
                    with_limsd: [54.0, 53.0, 52.0, 53.0],
                },
            ),
        ],
    )
}

/// False positive rate, SecRPL against Li-MSD
pub fn fpr_comparison() -> Figure {
    let chart = GroupedBarChart::new(
        "False Positive Rate Comparison: Li-MSD vs SecRPL",
        "DAO Replay Interval",
        "False Positive Rate (%)",
    )
    .categories(REPLAY_INTERVALS)
    .series(BarSeries::new("SecRPL", vec![12.0, 10.0, 8.0, 6.0], BarColor::Orange))
    .series(BarSeries::new("Li-MSD", vec![2.0, 1.8, 1.5, 1.2], BarColor::Blue));

    Figure::new(FPR_FIGURE, vec![chart])
}

/// RAM and ROM footprint on the Z1 mote
pub fn memory_overhead() -> Figure {
    let chart = GroupedBarChart::new("Memory Overhead Comparison", "", "Memory (KB)")
        .categories(["ContikiRPL (Baseline)", "SecRPL", "Li-MSD", "Z1 Max Capacity"])
        .series(BarSeries::new("RAM (KB)", vec![4.5, 5.2, 5.0, 8.0], BarColor::SteelBlue).with_opacity(0.8))
        .series(BarSeries::new("ROM (KB)", vec![48.0, 52.0, 50.0, 92.0], BarColor::Coral).with_opacity(0.8))
        .with_value_labels();

    Figure::new(MEMORY_FIGURE, vec![chart])
}

/// Every reference figure, in generation order
pub fn reference_figures() -> Vec<Figure> {
    vec![
        pdr_comparison(),
        delay_comparison(),
        power_comparison(),
        plr_comparison(),
        fpr_comparison(),
        memory_overhead(),
    ]
}
