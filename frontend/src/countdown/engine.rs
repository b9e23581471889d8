use chrono::NaiveDateTime;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// The instant the countdown runs to, as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInstant {
    epoch_ms: i64,
}

impl TargetInstant {
    pub fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Interprets a wall-clock time in a zone `east_offset_minutes` ahead of UTC.
    pub fn from_local(local: NaiveDateTime, east_offset_minutes: i32) -> Self {
        let utc_ms = local.and_utc().timestamp_millis();
        Self::from_epoch_ms(utc_ms - i64::from(east_offset_minutes) * MS_PER_MINUTE)
    }

    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }
}

/// Source of "now". `None` means the current instant could not be read.
pub trait Clock {
    fn now_ms(&self) -> Option<i64>;
}

impl<F> Clock for F
where
    F: Fn() -> Option<i64>,
{
    fn now_ms(&self) -> Option<i64> {
        self()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownValue {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownValue {
    pub const ZERO: CountdownValue = CountdownValue {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Splits a remaining distance into whole units. Anything at or below
    /// zero is the zero value; units never go negative.
    pub fn from_distance_ms(distance_ms: i64) -> Self {
        if distance_ms <= 0 {
            return Self::ZERO;
        }
        Self {
            days: (distance_ms / MS_PER_DAY) as u64,
            hours: ((distance_ms % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((distance_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((distance_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        }
    }

    /// Display cells in order: value, label.
    pub fn cells(&self) -> [(u64, &'static str); 4] {
        [
            (self.days, "Days"),
            (u64::from(self.hours), "Hours"),
            (u64::from(self.minutes), "Min"),
            (u64::from(self.seconds), "Sec"),
        ]
    }
}

/// Left-pads a unit to two digits; wider values are left alone.
pub fn format_unit(value: u64) -> String {
    format!("{:02}", value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Active,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A fresh value was published; keep ticking.
    Published(CountdownValue),
    /// The clock was unreadable; the previous value stays on screen.
    Stale,
    /// The target has been reached. Zero was published and ticking must stop.
    Finished,
}

impl TickOutcome {
    /// Whether another tick should be scheduled after this one.
    pub fn keeps_ticking(&self) -> bool {
        !matches!(self, TickOutcome::Finished)
    }
}

pub struct CountdownEngine<C: Clock> {
    target: TargetInstant,
    clock: C,
    value: CountdownValue,
    state: EngineState,
}

impl<C: Clock> CountdownEngine<C> {
    pub fn new(target: TargetInstant, clock: C) -> Self {
        Self {
            target,
            clock,
            value: CountdownValue::ZERO,
            state: EngineState::Active,
        }
    }

    pub fn value(&self) -> CountdownValue {
        self.value
    }

    /// Ticks once and returns what should be on screen before the first
    /// interval fires. An unreadable clock leaves it at zero.
    pub fn first_value(&mut self) -> CountdownValue {
        self.tick();
        self.value
    }

    #[cfg(test)]
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == EngineState::Finished
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::Finished;
        }
        let Some(now) = self.clock.now_ms() else {
            return TickOutcome::Stale;
        };
        let distance = self.target.epoch_ms() - now;
        self.value = CountdownValue::from_distance_ms(distance);
        if distance <= 0 {
            self.state = EngineState::Finished;
            TickOutcome::Finished
        } else {
            TickOutcome::Published(self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_target;
    use std::cell::Cell;
    use std::rc::Rc;

    fn at(raw: &str) -> i64 {
        parse_target(raw).unwrap().and_utc().timestamp_millis()
    }

    fn target() -> TargetInstant {
        TargetInstant::from_local(parse_target("2026-04-04T00:00:00").unwrap(), 0)
    }

    fn fixed_clock(now: Rc<Cell<Option<i64>>>) -> impl Fn() -> Option<i64> {
        move || now.get()
    }

    #[test]
    fn three_days_out() {
        let now = Rc::new(Cell::new(Some(at("2026-04-01T00:00:00"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now));
        let expected = CountdownValue {
            days: 3,
            ..CountdownValue::ZERO
        };
        assert_eq!(engine.tick(), TickOutcome::Published(expected));
        assert_eq!(engine.state(), EngineState::Active);
    }

    #[test]
    fn past_target_publishes_zero_and_stops() {
        let now = Rc::new(Cell::new(Some(at("2026-04-04T00:00:01"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now));
        assert_eq!(engine.tick(), TickOutcome::Finished);
        assert_eq!(engine.value(), CountdownValue::ZERO);
        assert!(engine.is_finished());
    }

    #[test]
    fn first_value_is_the_live_remainder() {
        let now = Rc::new(Cell::new(Some(at("2026-04-02T22:30:15"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now));
        let expected = CountdownValue {
            days: 1,
            hours: 1,
            minutes: 29,
            seconds: 45,
        };
        assert_eq!(engine.first_value(), expected);
        assert_eq!(engine.value(), expected);
    }

    #[test]
    fn first_value_without_a_clock_is_zero() {
        let now = Rc::new(Cell::new(None));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now));
        assert_eq!(engine.first_value(), CountdownValue::ZERO);
        assert!(!engine.is_finished());
    }

    #[test]
    fn only_the_final_tick_stops_scheduling() {
        assert!(TickOutcome::Published(CountdownValue::ZERO).keeps_ticking());
        assert!(TickOutcome::Stale.keeps_ticking());
        assert!(!TickOutcome::Finished.keeps_ticking());
    }

    #[test]
    fn finished_engine_never_asks_for_another_tick() {
        let now = Rc::new(Cell::new(Some(at("2026-04-03T23:59:59"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now.clone()));
        assert!(engine.tick().keeps_ticking());

        now.set(Some(at("2026-04-04T00:00:00")));
        assert!(!engine.tick().keeps_ticking());

        // neither an unreadable clock nor one that jumps back revives it
        for reading in [None, Some(at("2026-04-01T00:00:00")), Some(at("2026-05-01T00:00:00"))] {
            now.set(reading);
            assert!(!engine.tick().keeps_ticking());
        }
    }

    #[test]
    fn stale_ticks_keep_scheduling_until_the_clock_returns() {
        let now = Rc::new(Cell::new(None));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now.clone()));
        assert_eq!(engine.tick(), TickOutcome::Stale);
        assert!(engine.tick().keeps_ticking());

        now.set(Some(at("2026-04-03T00:00:00")));
        let outcome = engine.tick();
        assert!(matches!(outcome, TickOutcome::Published(_)));
        assert!(outcome.keeps_ticking());
    }

    #[test]
    fn exactly_at_target_is_terminal() {
        let now = Rc::new(Cell::new(Some(at("2026-04-04T00:00:00"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now));
        assert_eq!(engine.tick(), TickOutcome::Finished);
    }

    #[test]
    fn finished_engine_ignores_clock_going_backwards() {
        let now = Rc::new(Cell::new(Some(at("2026-04-05T00:00:00"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now.clone()));
        engine.tick();
        now.set(Some(at("2026-03-01T00:00:00")));
        assert_eq!(engine.tick(), TickOutcome::Finished);
        assert_eq!(engine.value(), CountdownValue::ZERO);
    }

    #[test]
    fn mixed_units_truncate() {
        let now = Rc::new(Cell::new(Some(at("2026-04-02T10:29:15"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now.clone()));
        engine.tick();
        assert_eq!(
            engine.value(),
            CountdownValue {
                days: 1,
                hours: 13,
                minutes: 30,
                seconds: 45,
            }
        );

        // 1999 ms out reads as a single whole second
        now.set(Some(at("2026-04-03T23:59:58") + 1));
        engine.tick();
        assert_eq!(engine.value().seconds, 1);
    }

    #[test]
    fn unreadable_clock_keeps_previous_value() {
        let now = Rc::new(Cell::new(Some(at("2026-04-03T23:00:00"))));
        let mut engine = CountdownEngine::new(target(), fixed_clock(now.clone()));
        engine.tick();
        let before = engine.value();

        now.set(None);
        assert_eq!(engine.tick(), TickOutcome::Stale);
        assert_eq!(engine.value(), before);
        assert_eq!(engine.state(), EngineState::Active);
    }

    #[test]
    fn units_stay_in_range_across_a_sweep() {
        // coarse sweep over forty days with a step that is not a whole unit
        let mut distance = 1;
        while distance < 40 * MS_PER_DAY {
            let v = CountdownValue::from_distance_ms(distance);
            assert!(v.hours < 24 && v.minutes < 60 && v.seconds < 60, "{:?}", v);
            let rebuilt = v.days as i64 * MS_PER_DAY
                + i64::from(v.hours) * MS_PER_HOUR
                + i64::from(v.minutes) * MS_PER_MINUTE
                + i64::from(v.seconds) * MS_PER_SECOND;
            assert!(distance - rebuilt < MS_PER_SECOND);
            distance += 7_919_993;
        }
    }

    #[test]
    fn negative_distance_clamps() {
        assert_eq!(CountdownValue::from_distance_ms(-86_400_000), CountdownValue::ZERO);
    }

    #[test]
    fn local_offset_shifts_the_instant() {
        let naive = parse_target("2026-04-04T00:00:00").unwrap();
        let ist = TargetInstant::from_local(naive, 330);
        let utc = TargetInstant::from_local(naive, 0);
        assert_eq!(utc.epoch_ms() - ist.epoch_ms(), 330 * MS_PER_MINUTE);
    }

    #[test]
    fn units_format_to_two_digits() {
        assert_eq!(format_unit(7), "07");
        assert_eq!(format_unit(0), "00");
        assert_eq!(format_unit(42), "42");
        assert_eq!(format_unit(123), "123");
    }

    #[test]
    fn cells_are_ordered_largest_first() {
        let labels: Vec<_> = CountdownValue::ZERO.cells().iter().map(|c| c.1).collect();
        assert_eq!(labels, ["Days", "Hours", "Min", "Sec"]);
    }
}
