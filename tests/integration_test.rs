//! 集成測試

use or_calc::{BreakEvenModel, InventoryModel, QueueModel};
use or_core::{
    BreakEvenInput, EoqInput, ModelConfig, ModelKind, OptimizationInput, OrError, QueueInput,
    ShellDefaults,
};
use or_optimizer::ProductionOptimizer;
use or_session::{EvaluationOutcome, ModelSession, RecordingSink, RenderEvent};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_default_form_values_end_to_end() {
    // 以表單預設值執行四個模型
    let defaults = ShellDefaults::default();

    let production = ProductionOptimizer::solve(&defaults.optimization_input());
    assert!(production.feasible);
    assert_eq!(production.units_a, 0.0);
    assert_eq!(production.units_b, 100.0);
    assert_eq!(production.total_profit, 3000.0);

    let eoq = InventoryModel::compute(&defaults.eoq_input()).unwrap();
    assert!((eoq.eoq_quantity - 50_000f64.sqrt()).abs() < 1e-9);

    let queue = QueueModel::compute(&defaults.queue_input()).unwrap();
    assert!((queue.utilization - 0.6667).abs() < 1e-3);
    assert!((queue.avg_queue_length - 1.3333).abs() < 1e-3);
    assert!((queue.avg_wait_time - 0.6667).abs() < 1e-3);

    let break_even = BreakEvenModel::compute(&defaults.break_even_input()).unwrap();
    assert!((break_even.break_even_quantity - 333.3333).abs() < 1e-3);
}

#[rstest]
#[case(40.0, 30.0, 2.0, 1.0, 100.0, 0.0, 100.0, 3000.0)]
#[case(70.0, 30.0, 2.0, 1.0, 100.0, 50.0, 0.0, 3500.0)]
#[case(10.0, 10.0, 1.0, 2.0, 60.0, 60.0, 0.0, 600.0)]
#[case(0.0, 0.0, 1.0, 1.0, 60.0, 0.0, 0.0, 0.0)]
fn test_production_vertices(
    #[case] profit_a: f64,
    #[case] profit_b: f64,
    #[case] hours_a: f64,
    #[case] hours_b: f64,
    #[case] max_hours: f64,
    #[case] expected_a: f64,
    #[case] expected_b: f64,
    #[case] expected_profit: f64,
) {
    let input = OptimizationInput::new(profit_a, profit_b, hours_a, hours_b, max_hours);
    let result = ProductionOptimizer::solve(&input);

    assert!(result.feasible);
    assert_eq!(result.units_a, expected_a);
    assert_eq!(result.units_b, expected_b);
    assert_eq!(result.total_profit, expected_profit);
}

#[test]
fn test_precondition_failures_withhold_results() {
    let unstable = QueueModel::compute(&QueueInput::new(3.0, 2.0));
    assert!(matches!(unstable, Err(OrError::UnstableQueue { .. })));

    let undefined = BreakEvenModel::compute(&BreakEvenInput::new(10_000.0, 50.0, 40.0));
    assert!(matches!(undefined, Err(OrError::UndefinedBreakEven { .. })));

    let invalid = InventoryModel::compute(&EoqInput::new(-5.0, 50.0, 2.0));
    assert!(matches!(invalid, Err(OrError::InvalidEoqParameters { .. })));

    let infeasible =
        ProductionOptimizer::solve(&OptimizationInput::new(40.0, 30.0, 0.0, 0.0, 100.0));
    assert!(!infeasible.feasible);
    assert_eq!(infeasible.units_a, 0.0);
    assert_eq!(infeasible.units_b, 0.0);
}

#[test]
fn test_session_full_interaction() {
    let mut session = ModelSession::new(ModelConfig::default()).unwrap();
    let mut sink = RecordingSink::new();

    // 首次呈現
    let records = session.refresh(&mut sink);
    assert_eq!(records.len(), 3);

    // 按鈕觸發優化
    let record = session.run_optimization(&mut sink);
    assert_eq!(record.outcome, EvaluationOutcome::Rendered);

    // 每個模型都有輸出，且沒有警告或錯誤
    for model in ModelKind::ALL {
        let events = sink.events_for(model);
        assert!(!events.is_empty(), "{:?} 沒有輸出", model);
        assert!(events.iter().all(|e| !e.is_warning() && !e.is_error()));
    }

    // EOQ 曲線 100 點，並標示 EOQ
    let eoq_curve = sink
        .events_for(ModelKind::Inventory)
        .into_iter()
        .find_map(|e| match e {
            RenderEvent::Curve { series, marker, .. } => Some((series.clone(), marker.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(eoq_curve.0[0].points.len(), 100);
    assert_eq!(eoq_curve.1.unwrap().0, "EOQ");

    // 排隊分佈 10 個長條
    let queue_bars = sink
        .events_for(ModelKind::Queue)
        .into_iter()
        .find_map(|e| match e {
            RenderEvent::Bars { bars, .. } => Some(bars.len()),
            _ => None,
        });
    assert_eq!(queue_bars, Some(10));
}

#[test]
fn test_render_events_serialize() {
    let mut session = ModelSession::new(ModelConfig::default().with_curve_samples(3)).unwrap();
    let mut sink = RecordingSink::new();
    session.refresh(&mut sink);

    let json = sink.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let events = parsed.as_array().unwrap();
    assert_eq!(events.len(), sink.events().len());

    let kinds: Vec<&str> = events.iter().filter_map(|e| e["kind"].as_str()).collect();
    assert!(kinds.contains(&"scalar"));
    assert!(kinds.contains(&"curve"));
    assert!(kinds.contains(&"bars"));
}

#[test]
fn test_invalid_config_never_yields_results() {
    let config = ModelConfig::new().with_queue_states(0).with_curve_samples(0);

    let queue = QueueModel::compute_with(&QueueInput::new(2.0, 3.0), &config);
    assert!(matches!(queue, Err(OrError::InvalidConfig(_))));

    let eoq = InventoryModel::compute_with(&EoqInput::new(1000.0, 50.0, 2.0), &config);
    assert!(matches!(eoq, Err(OrError::InvalidConfig(_))));

    let break_even_input = BreakEvenInput::new(10_000.0, 20.0, 50.0);
    let break_even = BreakEvenModel::compute_with(&break_even_input, &config);
    assert!(matches!(break_even, Err(OrError::InvalidConfig(_))));

    assert!(ModelSession::new(config).is_err());
}

#[test]
fn test_overflowing_break_even_withheld() {
    let result = BreakEvenModel::compute(&BreakEvenInput::new(1e308, 20.0, 20.0 + 1e-10));
    assert!(matches!(result, Err(OrError::InvalidInput(_))));
}

proptest! {
    #[test]
    fn prop_models_are_idempotent(
        demand in 1.0f64..10_000.0,
        lambda in 0.1f64..5.0,
        extra in 0.1f64..5.0,
        fixed in 0.0f64..100_000.0,
    ) {
        let eoq_input = EoqInput::new(demand, 50.0, 2.0);
        prop_assert_eq!(
            InventoryModel::compute(&eoq_input).unwrap(),
            InventoryModel::compute(&eoq_input).unwrap()
        );

        let queue_input = QueueInput::new(lambda, lambda + extra);
        prop_assert_eq!(
            QueueModel::compute(&queue_input).unwrap(),
            QueueModel::compute(&queue_input).unwrap()
        );

        let break_even_input = BreakEvenInput::new(fixed, 20.0, 50.0);
        prop_assert_eq!(
            BreakEvenModel::compute(&break_even_input).unwrap(),
            BreakEvenModel::compute(&break_even_input).unwrap()
        );

        let production_input = OptimizationInput::new(demand, fixed, lambda, extra, 100.0);
        prop_assert_eq!(
            ProductionOptimizer::solve(&production_input),
            ProductionOptimizer::solve(&production_input)
        );
    }

    #[test]
    fn prop_queue_distribution_decreasing(lambda in 0.01f64..10.0, extra in 0.01f64..10.0) {
        let result = QueueModel::compute(&QueueInput::new(lambda, lambda + extra)).unwrap();
        let dist = &result.system_size_distribution;

        prop_assert!(result.displayed_mass() < 1.0);
        for pair in dist.windows(2) {
            prop_assert!(pair[0].probability > pair[1].probability);
        }
    }
}
