//! Unit tests for tq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CounterKey, CounterKind, DepartmentId, PersonType};

    #[test]
    fn key_renders_numeric_person_code() {
        let key = CounterKey::new(DepartmentId(42), PersonType::Juridical, CounterKind::Current);
        assert_eq!(key.to_string(), "42:1:current");
        let key = CounterKey::new(DepartmentId(7), PersonType::Physical, CounterKind::Total);
        assert_eq!(key.to_string(), "7:0:total");
    }

    #[test]
    fn sibling_keys_share_department_and_type() {
        let cur = CounterKey::new(DepartmentId(3), PersonType::Physical, CounterKind::Current);
        assert_eq!(cur.total().to_string(), "3:0:total");
        assert_eq!(cur.total().current(), cur);
    }

    #[test]
    fn key_parses_back() {
        let key: CounterKey = "1001:1:total".parse().unwrap();
        assert_eq!(key.department, DepartmentId(1001));
        assert_eq!(key.person_type, PersonType::Juridical);
        assert_eq!(key.kind, CounterKind::Total);
    }

    #[test]
    fn malformed_keys_rejected() {
        for bad in ["", "1:1", "1:2:current", "x:0:total", "1:0:peak", "1:0:total:extra"] {
            assert!(bad.parse::<CounterKey>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn person_codes_roundtrip() {
        for p in PersonType::ALL {
            assert_eq!(PersonType::from_code(p.code()), Some(p));
        }
        assert_eq!(PersonType::from_code(9), None);
    }
}

#[cfg(test)]
mod clock {
    use chrono::{Datelike, Timelike, Weekday};

    use crate::{Clock, FixedClock};

    #[test]
    fn fixed_clock_reports_pinned_time() {
        // 2024-06-15 was a Saturday.
        let clock = FixedClock::at(2024, 6, 15, 8, 30).unwrap();
        let now = clock.now();
        assert_eq!(now.weekday(), Weekday::Sat);
        assert_eq!((now.hour(), now.minute()), (8, 30));
    }

    #[test]
    fn fixed_clock_can_move() {
        let clock = FixedClock::at(2024, 6, 17, 8, 0).unwrap();
        let later = FixedClock::at(2024, 6, 17, 19, 5).unwrap().now();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn invalid_components_rejected() {
        assert!(FixedClock::at(2024, 2, 30, 0, 0).is_none());
        assert!(FixedClock::at(2024, 1, 1, 24, 0).is_none());
    }
}

#[cfg(test)]
mod rng {
    use std::time::Duration;

    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000_000);
            let b: u32 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.gen_range(0..u64::MAX);
        let b: u64 = c1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "sibling streams should diverge");
    }

    #[test]
    fn durations_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let ms = rng.millis_in(&(1..60));
            assert!(ms >= Duration::from_millis(1) && ms < Duration::from_millis(60));
            let s = rng.secs_in(&(1..15));
            assert!(s >= Duration::from_secs(1) && s < Duration::from_secs(15));
        }
    }

    #[test]
    fn empty_range_is_zero() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.millis_in(&(0..0)), Duration::ZERO);
        assert_eq!(rng.secs_in(&(5..5)), Duration::ZERO);
    }
}
