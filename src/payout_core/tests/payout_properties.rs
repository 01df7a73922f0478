use proptest::prelude::*;

use payout_core::{compute_payouts, Calculator, PayoutError, DEFAULT_WEIGHTS, MAX_PLAYERS, MIN_PLAYERS};

fn weight_table() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..100.0, 1..15)
}

proptest! {
    #[test]
    fn payouts_sum_to_pool(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        buy_in in 0.0f64..1000.0,
        weights in weight_table(),
    ) {
        let result = compute_payouts(players, buy_in, 0.0, 0.0, &weights).unwrap();
        let paid: f64 = result.payouts.iter().map(|p| p.amount).sum();
        // each position is rounded to the cent independently
        let tolerance = 0.005 * result.paid_positions as f64 + 1e-6;
        prop_assert!((paid - result.total_buy_in_pool).abs() <= tolerance,
            "paid {} vs pool {}", paid, result.total_buy_in_pool);
    }

    #[test]
    fn paid_positions_bounded(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        weights in weight_table(),
    ) {
        let result = compute_payouts(players, 20.0, 0.0, 0.0, &weights).unwrap();
        prop_assert!(result.paid_positions <= weights.len());
        prop_assert!(result.paid_positions >= 1);
        prop_assert_eq!(result.payouts.len(), result.paid_positions);
    }

    #[test]
    fn payouts_follow_weight_order(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        buy_in in 1.0f64..500.0,
    ) {
        // default table is non-increasing, so prizes must be too
        let result = compute_payouts(players, buy_in, 0.0, 0.0, &DEFAULT_WEIGHTS).unwrap();
        for pair in result.payouts.windows(2) {
            prop_assert!(pair[0].amount >= pair[1].amount);
        }
    }

    #[test]
    fn huge_weights_still_pay_out_pool(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        buy_in in 0.0f64..1000.0,
        weights in prop::collection::vec(1e300f64..f64::MAX, 1..12),
    ) {
        let result = compute_payouts(players, buy_in, 0.0, 0.0, &weights).unwrap();
        let paid: f64 = result.payouts.iter().map(|p| p.amount).sum();
        let tolerance = 0.005 * result.paid_positions as f64 + 1e-6;
        prop_assert!((paid - result.total_buy_in_pool).abs() <= tolerance);
    }

    #[test]
    fn non_finite_weight_rejected(
        mut weights in weight_table(),
        bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
        slot in 0usize..15,
    ) {
        let slot = slot % weights.len();
        weights[slot] = bad;
        let rejected = matches!(
            compute_payouts(30, 20.0, 0.0, 0.0, &weights),
            Err(PayoutError::InvalidWeight { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn pools_that_overflow_rejected(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        buy_in in (f64::MAX / 2.0)..f64::MAX,
    ) {
        let result = compute_payouts(players, buy_in, 0.0, 0.0, &DEFAULT_WEIGHTS);
        prop_assert!(
            matches!(result, Err(PayoutError::NonFiniteAmount { .. })),
            "expected rejection, got {:?}", result
        );
    }

    #[test]
    fn out_of_range_players_rejected(players in prop_oneof![0u32..MIN_PLAYERS, (MAX_PLAYERS + 1)..1000]) {
        prop_assert_eq!(
            compute_payouts(players, 20.0, 0.0, 0.0, &DEFAULT_WEIGHTS).unwrap_err(),
            PayoutError::PlayerCountOutOfRange(players)
        );
    }

    #[test]
    fn calculator_keeps_last_valid_result(players in 31u32..200) {
        let mut calc = Calculator::default();
        let before = calc.result().clone();
        prop_assert!(calc.set_player_count(players).is_err());
        prop_assert_eq!(calc.result(), &before);
    }
}
