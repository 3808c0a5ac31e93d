//! 互動式工作階段示例
//!
//! 模擬呈現層：修改輸入、自動重算、按鈕觸發優化，並輸出 JSON 呈現事件

use or_models::logging::init_logging;
use or_models::session::{ModelSession, RecordingSink, RenderEvent};
use or_models::types::{ModelConfig, QueueInput};

fn main() -> anyhow::Result<()> {
    init_logging(true);
    println!("===== Interactive Session =====\n");

    let config = ModelConfig::from_json(r#"{ "curve_samples": 5 }"#)?;
    let mut session = ModelSession::new(config)?;
    let mut sink = RecordingSink::new();

    // 首次呈現：EOQ、排隊、損益平衡自動計算
    println!("[1] Initial render");
    session.refresh(&mut sink);
    print_scalars(&sink);

    // 按下「計算」按鈕
    println!("\n[2] Run optimization");
    sink.clear();
    session.run_optimization(&mut sink);
    print_scalars(&sink);

    // 修改排隊參數為不穩定系統
    println!("\n[3] Unstable queue");
    sink.clear();
    session.set_queue_input(QueueInput::new(3.0, 2.0));
    session.refresh(&mut sink);
    for event in sink.events() {
        if let RenderEvent::Warning { message, .. } = event {
            println!("    warning: {}", message);
        }
    }

    println!("\n[4] Render events (JSON)");
    println!("{}", sink.to_json()?);

    println!("\n[5] History");
    for record in session.history() {
        println!(
            "    {} {:?} {:?}",
            record.request_id, record.model, record.outcome
        );
    }

    Ok(())
}

fn print_scalars(sink: &RecordingSink) {
    for event in sink.events() {
        if let RenderEvent::Scalar { model, label, value } = event {
            println!("    {:?} / {} = {}", model, label, value);
        }
    }
}
