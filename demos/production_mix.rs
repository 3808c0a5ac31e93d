//! 生產組合優化示例
//!
//! 兩種產品共用工時上限，求最大利潤的產量組合

use or_models::logging::init_logging;
use or_models::optimizer::{LinearProgram, LpStatus, ProductionOptimizer};
use or_models::types::{OptimizationInput, ShellDefaults};

fn main() -> anyhow::Result<()> {
    init_logging(false);
    println!("===== Production Mix (Linear Programming) =====\n");

    // 步驟 1: 表單預設值
    let input = ShellDefaults::default().optimization_input();
    println!("[1] Input");
    println!("    Profit per unit:  A = {}, B = {}", input.profit_a, input.profit_b);
    println!(
        "    Hours per unit:   A = {}, B = {}",
        input.hours_per_unit_a, input.hours_per_unit_b
    );
    println!("    Max labor hours:  {}\n", input.max_hours);

    // 步驟 2: 求解
    println!("[2] Solve");
    let result = ProductionOptimizer::try_solve(&input)?;
    println!("    Product A = {:.2}, Product B = {:.2}", result.units_a, result.units_b);
    println!("    Total profit = {:.2}", result.total_profit);
    println!("    Hours used = {:.2}, slack = {:.2}\n", result.hours_used, result.slack_hours);

    // 步驟 3: 無界情境（B 不耗工時）
    println!("[3] Degenerate coefficients");
    let degenerate = OptimizationInput::new(40.0, 30.0, 2.0, 0.0, 100.0);
    let failed = ProductionOptimizer::solve(&degenerate);
    println!("    feasible = {}, messages = {:?}\n", failed.feasible, failed.messages);

    // 步驟 4: 最小化慣例（負目標最大化）
    println!("[4] Minimize convention");
    let lp = LinearProgram::minimize(
        [-input.profit_a, -input.profit_b],
        input.hours(),
        input.max_hours,
    );
    if let LpStatus::Optimal { x, objective_value } = lp.solve() {
        println!("    x = {:?}, objective = {:.2}", x, objective_value);
    }

    Ok(())
}
