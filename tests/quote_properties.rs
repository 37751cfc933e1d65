use num_bigint::BigUint;
use proptest::prelude::*;
use swap_quoter::quotes::{normalize_reserve, rescale_reserve, swap_along_curve};
use swap_quoter::{PoolSnapshot, QuoteEngine, Token, TradeAmount};

fn token(symbol: &str, c: char) -> Token {
    let address = format!("0x{}", c.to_string().repeat(40)).parse().unwrap();
    Token::new(symbol, address, 6)
}

fn quote_slippage(from_reserve: u64, to_reserve: u64, amount: u64) -> (BigUint, f64, f64) {
    let a = token("AAA", 'a');
    let b = token("BBB", 'b');
    let snapshot = PoolSnapshot::new(
        a.address.clone(),
        BigUint::from(from_reserve),
        b.address.clone(),
        BigUint::from(to_reserve),
    );
    let quote = QuoteEngine::default()
        .compute_quote(&snapshot, &a, &b, &TradeAmount::internal(amount))
        .unwrap();
    (quote.swap_balance, quote.market_price, quote.slippage_percent)
}

proptest! {
    #[test]
    fn normalization_never_rounds_up(raw in any::<u128>(), decimals in 6u8..=18) {
        let raw = BigUint::from(raw);
        let internal = normalize_reserve(&raw, decimals, 6).unwrap();
        prop_assert!(rescale_reserve(&internal, decimals, 6) <= raw);
    }

    #[test]
    fn constant_product_never_increases(
        from_reserve in 1u64..u64::MAX,
        to_reserve in 1u64..u64::MAX,
        scaled_in in 1u64..u64::MAX,
    ) {
        let step = swap_along_curve(
            &BigUint::from(from_reserve),
            &BigUint::from(to_reserve),
            &BigUint::from(scaled_in),
        ).unwrap();

        prop_assert!(&step.new_from_reserve * &step.new_to_reserve <= step.k);
        prop_assert!(step.swap_balance <= BigUint::from(to_reserve));
    }

    #[test]
    fn price_paid_bounded_by_spot_plus_one_unit(
        from_reserve in 1u64..1_000_000_000,
        to_reserve in 1u64..1_000_000_000,
        amount in 1u64..1_000_000_000,
    ) {
        let (swap_balance, market_price, slippage) = quote_slippage(from_reserve, to_reserve, amount);

        // output never exceeds the spot-priced amount by a whole internal unit
        prop_assert!(
            &swap_balance * BigUint::from(from_reserve)
                < BigUint::from(amount) * BigUint::from(to_reserve) + BigUint::from(from_reserve)
        );
        let floor = -1.0 / (amount as f64 * market_price);
        prop_assert!(slippage >= floor - 1e-9 * (1.0 + floor.abs()));
    }

    #[test]
    fn slippage_monotonic_in_trade_size(
        from_reserve in 1u64..1_000_000_000,
        to_reserve in 1u64..1_000_000_000,
        small in 1u64..1_000_000_000,
        delta in 1u64..2_000_000_000,
    ) {
        let large = small + delta;

        // beyond this bound the curve effect dominates one unit of truncation
        let (f, t, x1, x2) = (from_reserve as u128, to_reserve as u128, small as u128, large as u128);
        if t * (x2 - x1) * x2 < (f + x1) * (f + x2) {
            return Ok(());
        }

        let (_, _, slippage_small) = quote_slippage(from_reserve, to_reserve, small);
        let (_, _, slippage_large) = quote_slippage(from_reserve, to_reserve, large);
        prop_assert!(slippage_large >= slippage_small);
    }

    #[test]
    fn quotes_are_idempotent(
        from_reserve in 1u64..u64::MAX,
        to_reserve in 1u64..u64::MAX,
        amount in 1u64..1_000_000_000_000,
    ) {
        let first = quote_slippage(from_reserve, to_reserve, amount);
        let second = quote_slippage(from_reserve, to_reserve, amount);

        prop_assert_eq!(&first.0, &second.0);
        prop_assert_eq!(first.2.to_bits(), second.2.to_bits());
    }
}
