//! 排隊與損益平衡參數掃描示例（並行計算）

use or_models::calc::sweep;
use or_models::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging(false);
    println!("===== Parameter Sweeps =====\n");

    println!("[1] M/M/1, service rate 3.0");
    let arrival_rates: Vec<f64> = (1..=12).map(|i| i as f64 * 0.25).collect();
    for (lambda, result) in sweep::queue_over_arrival_rates(3.0, &arrival_rates) {
        match result {
            Ok(metrics) => println!(
                "    λ = {:.2}: ρ = {:.2}, Lq = {:.2}, Wq = {:.2}",
                lambda, metrics.utilization, metrics.avg_queue_length, metrics.avg_wait_time
            ),
            Err(err) => println!("    λ = {:.2}: {}", lambda, err),
        }
    }

    println!("\n[2] Break-even, fixed cost 10000, variable cost 20");
    let prices = [15.0, 20.0, 30.0, 50.0, 80.0];
    for (price, result) in sweep::break_even_over_prices(10_000.0, 20.0, &prices) {
        match result {
            Ok(be) => println!("    P = {:.0}: BEP = {:.2} units", price, be.break_even_quantity),
            Err(err) => println!("    P = {:.0}: {}", price, err),
        }
    }

    Ok(())
}
