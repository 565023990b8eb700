/**
* filename : main
* author : HAMA
* date: 2025. 6. 3.
* description:
**/

use std::path::PathBuf;
use std::time::Duration;

use xAlert::config::{parse_tickers, Config};
use xAlert::core::{CycleSummary, Monitor, SignalEngine};
use xAlert::alerts::LogNotifier;
use xAlert::market_data::CsvBarSource;
use xAlert::utils::{self, logging};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 명령줄 인수 확인: [--config <path>] [--tickers "TSLA, NIO"] [--once] [--json]
    let args: Vec<String> = std::env::args().collect();
    let config_path = arg_value(&args, "--config").map(PathBuf::from);
    let once = args.iter().any(|a| a == "--once");
    let json = args.iter().any(|a| a == "--json");

    // 설정 로드
    let mut config = Config::load(config_path.as_deref())?;
    if let Some(tickers) = arg_value(&args, "--tickers") {
        config.monitor.tickers = parse_tickers(tickers);
    }

    // 로깅 초기화
    logging::init(&config.logging.level)?;
    log::info!("주가 감시 시스템 시작 (v{})", xAlert::VERSION);

    let engine = SignalEngine::new(&config.engine)?;
    let monitor = Monitor::new(
        engine,
        Box::new(CsvBarSource::new(config.monitor.data_dir.clone())),
        Box::new(LogNotifier),
        config.monitor.normalized_tickers(),
    );
    log::info!("감시 대상: {}", monitor.tickers().join(", "));

    if once {
        let summary = monitor.run_cycle();
        if json {
            println!("{}", serde_json::to_string_pretty(&summary.reports)?);
        } else {
            print_summary(&summary, config.monitor.history_rows);
        }
        return Ok(());
    }

    let mut interval = tokio::time::interval(Duration::from_secs(config.monitor.refresh_interval_secs));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let summary = monitor.run_cycle();
                if json {
                    println!("{}", serde_json::to_string(&summary.reports)?);
                } else {
                    print_summary(&summary, config.monitor.history_rows);
                }
                log::info!("{}초 후 다시 갱신합니다", config.monitor.refresh_interval_secs);
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("종료 신호 수신, 감시를 멈춥니다");
                break;
            }
        }
    }

    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn print_summary(summary: &CycleSummary, history_rows: usize) {
    println!("\n=== 갱신 시각: {} ===", utils::now_string());

    for report in &summary.reports {
        let change = &report.change;
        println!(
            "\n{}  가격 {:.2} ({:+.2}, {:.2}%)  거래량 {} ({:+}, {:.2}%)",
            report.ticker,
            change.current_price,
            change.price_change,
            change.price_pct_change,
            change.last_volume,
            change.volume_change,
            change.volume_pct_change,
        );

        if report.decision.fired {
            println!("!! {}", report.decision.message);
        }

        for row in report.history(history_rows) {
            println!(
                "  {}  close {:>10.2}  vol {:>12}  Δp {:>7}  Δv {:>8}  {}",
                utils::format_timestamp(row.bar.bar.timestamp, "%Y-%m-%d %H:%M"),
                row.bar.bar.close,
                row.bar.bar.volume,
                fmt_pct(row.bar.price_change_pct),
                fmt_pct(row.bar.volume_change_pct),
                row.tags,
            );
        }
    }

    for (ticker, error) in &summary.skipped {
        println!("\n{} 건너뜀: {}", ticker, error);
    }
}

fn fmt_pct(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}%", v)).unwrap_or_else(|| "-".to_string())
}
