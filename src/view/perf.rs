//! View model for the performance report: summary stat cards + hotspots.

use crate::report::{Hotspot, PerformanceReport};
use crate::view::color::{ColorBand, progressive_band};
use serde::Serialize;

/// One label/value pair inside a card's expandable details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub label: String,
    pub value: String,
}

/// A summary stat card. Cards start collapsed; expansion is a per-card
/// surface toggle and never affects siblings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCardView {
    pub title: String,
    pub value: String,
    pub details: Vec<DetailView>,
}

/// A percentage paired with its proportional bar. `width` is the raw
/// percent; values outside 0-100 pass through and overflow the bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentCellView {
    pub text: String,
    pub width: f64,
    pub band: ColorBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotRowView {
    pub source: String,
    pub self_time: PercentCellView,
    pub total_time: PercentCellView,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceView {
    pub cards: Vec<StatCardView>,
    pub hotspots: Vec<HotspotRowView>,
}

/// Build the four summary cards (fixed order) and one row per hotspot
/// (input order, no sort).
pub fn build_performance_view(report: &PerformanceReport) -> PerformanceView {
    let s = &report.summary;

    let cards = vec![
        StatCardView {
            title: "TPS".to_string(),
            value: format!("{}", s.tps.current),
            details: vec![detail("Average", format!("{}", s.tps.average))],
        },
        StatCardView {
            title: "MSPT".to_string(),
            value: format!("{}ms", s.mspt.average),
            details: vec![
                detail("95th Percentile", format!("{}ms", s.mspt.p95)),
                detail("Max", format!("{}ms", s.mspt.max)),
            ],
        },
        StatCardView {
            title: "CPU (Process)".to_string(),
            value: format!("{}%", s.cpu.process),
            details: vec![
                detail("System", format!("{}%", s.cpu.system)),
                detail("Idle", format!("{}%", s.cpu.idle)),
            ],
        },
        StatCardView {
            title: "Memory Used".to_string(),
            value: format!("{}MB", s.memory.used_mb),
            details: vec![detail("Total", format!("{}MB", s.memory.total_mb))],
        },
    ];

    PerformanceView {
        cards,
        hotspots: report.hotspots.iter().map(build_row).collect(),
    }
}

fn build_row(hotspot: &Hotspot) -> HotspotRowView {
    HotspotRowView {
        source: hotspot.source.clone(),
        self_time: percent_cell(hotspot.self_time_percent),
        total_time: percent_cell(hotspot.total_time_percent),
        count: hotspot.count,
    }
}

fn percent_cell(percent: f64) -> PercentCellView {
    PercentCellView {
        text: format!("{:.2}%", percent),
        width: percent,
        band: progressive_band(percent, 100.0),
    }
}

fn detail(label: &str, value: String) -> DetailView {
    DetailView {
        label: label.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::payload::{CpuSpec, MemorySpec, MsptSpec, SummarySpec, TpsSpec};
    use pretty_assertions::assert_eq;

    fn report(hotspots: Vec<Hotspot>) -> PerformanceReport {
        PerformanceReport {
            summary: SummarySpec {
                tps: TpsSpec {
                    current: 19.8,
                    average: 19.5,
                },
                mspt: MsptSpec {
                    average: 42.1,
                    p95: 48.0,
                    max: 112.3,
                },
                cpu: CpuSpec {
                    process: 31.0,
                    system: 55.2,
                    idle: 44.8,
                },
                memory: MemorySpec {
                    used_mb: 2048.0,
                    total_mb: 4096.0,
                },
            },
            hotspots,
        }
    }

    fn hotspot(source: &str, self_pct: f64, total_pct: f64, count: u64) -> Hotspot {
        Hotspot {
            source: source.to_string(),
            self_time_percent: self_pct,
            total_time_percent: total_pct,
            count,
        }
    }

    #[test]
    fn exactly_four_cards_in_fixed_order() {
        for hotspots in [vec![], vec![hotspot("EntityTick", 61.2, 74.9, 1203)]] {
            let view = build_performance_view(&report(hotspots));
            let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
            assert_eq!(titles, vec!["TPS", "MSPT", "CPU (Process)", "Memory Used"]);
        }
    }

    #[test]
    fn card_values_carry_their_units() {
        let view = build_performance_view(&report(vec![]));

        assert_eq!(view.cards[0].value, "19.8");
        assert_eq!(view.cards[1].value, "42.1ms");
        assert_eq!(view.cards[2].value, "31%");
        assert_eq!(view.cards[3].value, "2048MB");

        assert_eq!(view.cards[1].details.len(), 2);
        assert_eq!(view.cards[1].details[0].label, "95th Percentile");
        assert_eq!(view.cards[1].details[0].value, "48ms");
        assert_eq!(view.cards[3].details[0].value, "4096MB");
    }

    #[test]
    fn hotspot_rows_follow_input_order() {
        let view = build_performance_view(&report(vec![
            hotspot("b", 10.0, 20.0, 2),
            hotspot("a", 90.0, 95.0, 1),
        ]));

        let sources: Vec<&str> = view.hotspots.iter().map(|h| h.source.as_str()).collect();
        assert_eq!(sources, vec!["b", "a"]);
    }

    #[test]
    fn no_hotspots_means_no_rows() {
        let view = build_performance_view(&report(vec![]));
        assert!(view.hotspots.is_empty());
    }

    #[test]
    fn percent_cells_are_two_decimal_and_banded() {
        let view = build_performance_view(&report(vec![hotspot("EntityTick", 61.2, 74.9, 1203)]));
        let row = &view.hotspots[0];

        assert_eq!(row.self_time.text, "61.20%");
        assert_eq!(row.self_time.band, ColorBand::High);
        assert_eq!(row.total_time.text, "74.90%");
        assert_eq!(row.total_time.band, ColorBand::High);
        assert_eq!(row.count, 1203);
    }

    #[test]
    fn out_of_range_percents_are_not_clamped() {
        let view = build_performance_view(&report(vec![hotspot("Overflow", 150.0, -3.0, 1)]));
        let row = &view.hotspots[0];

        assert_eq!(row.self_time.width, 150.0);
        assert_eq!(row.self_time.band, ColorBand::Critical);
        assert_eq!(row.total_time.width, -3.0);
        assert_eq!(row.total_time.band, ColorBand::Low);
    }
}
